use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::NoticeKind;
use crate::domain::models::TextArea;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState<'_>,
    tx: mpsc::UnboundedSender<Action>,
    events: &mut EventsService,
) -> Result<()> {
    let mut problem_input = TextArea::problem_input();
    let mut draft_input: Option<tui_textarea::TextArea<'_>> = None;
    let loading = Loading::default();

    loop {
        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Min(1),
                    Constraint::Max(6),
                    Constraint::Length(1),
                ])
                .split(frame.size());

            if layout[0].width != app_state.last_known_width
                || layout[0].height != app_state.last_known_height
            {
                app_state.set_rect(layout[0]);
            }

            app_state
                .step_list
                .render(frame, layout[0], app_state.scroll.position);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                layout[0].inner(&Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut app_state.scroll.scrollbar_state,
            );

            if app_state.waiting_for_backend {
                loading.render(frame, layout[1]);
            } else if let Some(draft) = draft_input.as_ref() {
                frame.render_widget(draft.widget(), layout[1]);
            } else {
                frame.render_widget(problem_input.widget(), layout[1]);
            }

            let notice_line = match &app_state.notice {
                Some(notice) => {
                    let style = match notice.kind {
                        NoticeKind::Info => Style::default().fg(Color::DarkGray),
                        NoticeKind::Error => Style::default().fg(Color::Red),
                    };
                    Line::from(Span::styled(notice.text.clone(), style))
                }
                None => Line::from(""),
            };
            frame.render_widget(Paragraph::new(notice_line), layout[2]);
        })?;

        match events.next().await? {
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::SolveCompleted(res) => {
                app_state.handle_solve_completed(res);
            }
            Event::UpdateStepCompleted(res) => {
                app_state.handle_update_completed(res);
            }
            Event::KeyboardEnter() => {
                if app_state.waiting_for_backend {
                    continue;
                }

                if let Some(index) = app_state.edit_session.editing_index() {
                    let draft = match draft_input.as_ref() {
                        Some(textarea) => textarea.lines().join("\n"),
                        None => app_state.edit_session.draft_content().to_string(),
                    };
                    app_state.submit_edit(index, &draft, &tx)?;
                    if !app_state.edit_session.is_active() {
                        draft_input = None;
                    }
                } else {
                    let input_str = problem_input.lines().join("\n");
                    if input_str.trim().is_empty() {
                        continue;
                    }
                    app_state.submit_problem(&input_str, &tx)?;
                }
            }
            Event::KeyboardCTRLE() => {
                let index = app_state.selected;
                if index > 0 && app_state.begin_edit(index) {
                    draft_input = Some(TextArea::draft_input(
                        index,
                        app_state.edit_session.draft_content(),
                    ));
                }
            }
            Event::KeyboardEsc() => {
                if app_state.edit_session.is_active() {
                    app_state.cancel_edit();
                    draft_input = None;
                }
            }
            Event::KeyboardCTRLR() => {
                app_state.rollback();
                if !app_state.edit_session.is_active() {
                    draft_input = None;
                }
            }
            Event::StepSelectNext() => {
                app_state.select_next();
            }
            Event::StepSelectPrev() => {
                app_state.select_prev();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::KeyboardPaste(text) => {
                if app_state.waiting_for_backend {
                    continue;
                }

                match draft_input.as_mut() {
                    Some(textarea) => {
                        textarea.insert_str(&text);
                    }
                    None => {
                        problem_input.insert_str(&text);
                    }
                }
            }
            Event::KeyboardCharInput(input) => {
                if app_state.waiting_for_backend {
                    continue;
                }

                match draft_input.as_mut() {
                    Some(textarea) => {
                        textarea.input(input);
                    }
                    None => {
                        problem_input.input(input);
                    }
                }
            }
            Event::UITick() => {}
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);
    let mut app_state = AppState::new().await?;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    start_loop(&mut terminal, &mut app_state, tx, &mut events).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
