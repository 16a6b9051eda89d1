use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::infrastructure::solvers::SolverManager;

pub fn help_text() -> String {
    let text = r#"
HOTKEYS:
- Enter - Submit the problem, or submit the edited step while editing.
- Up/Down arrow - Select the previous/next step.
- CTRL+E - Edit the selected step.
- Esc - Cancel the current edit.
- CTRL+R - Roll back to the sequence captured before the last edit.
- CTRL+U / Page Up - Scroll up.
- CTRL+D / Page Down - Scroll down.
- CTRL+C - Exit stepwise.

EDITING:
Submitting an edited step asks the solver to re-derive that step and
everything after it, so steps at or after the edited index are dimmed until
the response arrives. One snapshot of the sequence is taken right before the
edit is dispatched; CTRL+R restores it and consumes it, so only a single
level of rollback exists. The problem text is locked when a solve is
submitted - editing the input field afterwards has no effect on re-derivation
until a new solve.
        "#;

    return text.trim().to_string();
}

/// Background worker that owns the solver client. Actions are handled one at
/// a time, so at most one request is ever in flight; there is no abort or
/// timeout once a request has been dispatched.
pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let solver = SolverManager::get()?;

        loop {
            let action = rx.recv().await;
            if action.is_none() {
                continue;
            }

            match action.unwrap() {
                Action::SolveRequest(problem) => {
                    tracing::debug!(problem = problem.as_str(), "solve request");
                    let res = solver.solve(&problem).await;
                    tx.send(Event::SolveCompleted(res))?;
                }
                Action::UpdateStepRequest(payload) => {
                    tracing::debug!(edit_index = payload.edit_index, "update step request");
                    let res = solver
                        .update_step(
                            &payload.current_steps,
                            payload.edit_index,
                            &payload.new_content,
                            &payload.problem,
                        )
                        .await;
                    tx.send(Event::UpdateStepCompleted(res))?;
                }
            }
        }
    }
}
