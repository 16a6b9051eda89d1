#[cfg(test)]
#[path = "step_list_test.rs"]
mod tests;

use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::domain::models::Step;
use crate::domain::models::StepStatus;

fn status_style(status: StepStatus) -> Style {
    match status {
        StepStatus::Normal => return Style::default().fg(Color::DarkGray),
        StepStatus::Valid => return Style::default().fg(Color::Green),
        StepStatus::Error => return Style::default().fg(Color::Red),
    }
}

/// Renders the step sequence as styled lines. Consumes store state, never
/// owns it: statuses come straight from the solver, and steps at or after
/// the pending marker are dimmed while a re-derivation is outstanding.
#[derive(Default)]
pub struct StepList<'a> {
    lines: Vec<Line<'a>>,
    selected_line: Option<usize>,
}

impl<'a> StepList<'a> {
    pub fn set_steps(
        &mut self,
        steps: &[Step],
        selected: usize,
        pending_from: Option<usize>,
        line_width: usize,
    ) {
        self.lines.clear();
        self.selected_line = None;

        let content_width = line_width.saturating_sub(4).max(20);

        for step in steps {
            let quarantined = match pending_from {
                Some(marker) => step.index >= marker,
                None => false,
            };

            let dim = if quarantined {
                Style::default().add_modifier(Modifier::DIM)
            } else {
                Style::default()
            };

            if step.index == selected {
                self.selected_line = Some(self.lines.len());
            }

            let marker = if step.index == selected { "▸ " } else { "  " };
            let header = vec![
                Span::styled(marker.to_string(), dim),
                Span::styled(
                    format!("Step {}", step.index),
                    dim.add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" [{}]", step.status.to_string()),
                    status_style(step.status).patch(dim),
                ),
            ];
            self.lines.push(Line::from(header));

            for content_line in step.content_lines(content_width) {
                self.lines
                    .push(Line::from(Span::styled(format!("    {content_line}"), dim)));
            }

            if !step.output.is_empty() {
                self.lines.push(Line::from(Span::styled(
                    format!("    = {}", step.output),
                    dim.fg(Color::Cyan),
                )));
            }

            self.lines.push(Line::from(""));
        }
    }

    pub fn len(&self) -> usize {
        return self.lines.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.lines.is_empty();
    }

    pub fn selected_line(&self) -> Option<usize> {
        return self.selected_line;
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, scroll: u16) {
        frame.render_widget(
            Paragraph::new(self.lines.clone())
                .block(Block::default())
                .scroll((scroll, 0)),
            rect,
        );
    }
}
