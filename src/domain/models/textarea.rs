use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

pub struct TextArea {}

impl<'a> TextArea {
    pub fn problem_input() -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title("Enter a problem")
                .padding(Padding::new(1, 1, 0, 0)),
        );

        return textarea;
    }

    pub fn draft_input(index: usize, content: &str) -> tui_textarea::TextArea<'a> {
        let lines = content
            .split('\n')
            .map(|line| return line.to_string())
            .collect::<Vec<String>>();

        let mut textarea = tui_textarea::TextArea::from(lines);
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(format!("Edit step {index} - Enter submits, Esc cancels"))
                .padding(Padding::new(1, 1, 0, 0)),
        );

        return textarea;
    }
}
