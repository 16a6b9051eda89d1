#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::EditSession;
use super::RollbackOutcome;
use super::Scroll;
use super::StepList;
use super::StepStore;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Notice;
use crate::domain::models::Step;
use crate::domain::models::UpdateStepPayload;
use crate::infrastructure::solvers::SolverManager;

/// The single event-loop owner of all derivation state. Every transition
/// happens on a discrete user or completion event; the solver request is the
/// only suspension point, guarded by `waiting_for_backend` for its whole
/// duration.
pub struct AppState<'a> {
    pub store: StepStore,
    pub edit_session: EditSession,
    pub step_list: StepList<'a>,
    pub scroll: Scroll,
    pub pending_from: Option<usize>,
    pub waiting_for_backend: bool,
    pub selected: usize,
    pub notice: Option<Notice>,
    pub allow_edit_first_step: bool,
    pub last_known_width: u16,
    pub last_known_height: u16,
}

impl<'a> AppState<'a> {
    pub async fn new() -> Result<AppState<'a>> {
        let mut app_state = AppState {
            store: StepStore::default(),
            edit_session: EditSession::default(),
            step_list: StepList::default(),
            scroll: Scroll::default(),
            pending_from: None,
            waiting_for_backend: false,
            selected: 0,
            notice: Some(Notice::info(
                "Enter a problem and press Enter to derive a solution.",
            )),
            allow_edit_first_step: Config::get(ConfigKey::AllowEditFirstStep) == "true",
            last_known_width: 0,
            last_known_height: 0,
        };

        let solver = SolverManager::get()?;
        if let Err(err) = solver.health_check().await {
            let url = Config::get(ConfigKey::SolverUrl);
            app_state.notice = Some(Notice::error(&format!(
                "The solver at {url} is not reachable. Solving will fail until it is back up. Error: {err}"
            )));
        }

        return Ok(app_state);
    }

    /// Locks the problem and dispatches a fresh derivation. Any sequence,
    /// backup, edit session, or pending marker from an earlier problem is
    /// discarded.
    pub fn submit_problem(
        &mut self,
        problem: &str,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        if self.waiting_for_backend {
            return Ok(());
        }

        let trimmed = problem.trim();
        if trimmed.is_empty() {
            self.notice = Some(Notice::error("Enter a problem first."));
            return Ok(());
        }

        self.store.initialize(trimmed);
        self.edit_session.cancel();
        self.pending_from = None;
        self.selected = 0;
        self.waiting_for_backend = true;
        self.notice = None;

        tracing::debug!(problem = trimmed, "dispatching solve");
        tx.send(Action::SolveRequest(trimmed.to_string()))?;

        self.sync_dependants();
        return Ok(());
    }

    /// Starts editing a step. Rejected while a request is outstanding, for
    /// indices outside the sequence, and for the first step when the
    /// deployment locks the initial condition.
    pub fn begin_edit(&mut self, index: usize) -> bool {
        if self.waiting_for_backend {
            self.notice = Some(Notice::error(
                "A request is in flight. Wait for it to finish before editing.",
            ));
            return false;
        }

        if index == 1 && !self.allow_edit_first_step {
            self.notice = Some(Notice::error(
                "The initial condition is locked. Revise the original problem instead.",
            ));
            return false;
        }

        match self.store.step(index) {
            Some(step) => {
                let content = step.content.clone();
                self.edit_session.begin(index, &content);
                self.notice = None;
                return true;
            }
            None => {
                return false;
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit_session.cancel();
    }

    /// Submits the draft for `index`. Effect order matters: consume the
    /// session, mark the tail provisional, snapshot the known-good sequence,
    /// then dispatch with the locked problem.
    pub fn submit_edit(
        &mut self,
        index: usize,
        draft: &str,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        if self.waiting_for_backend || self.edit_session.editing_index() != Some(index) {
            return Ok(());
        }

        self.edit_session.take();
        self.pending_from = Some(index);
        self.store.snapshot();
        self.waiting_for_backend = true;
        self.notice = None;

        tracing::debug!(edit_index = index, "dispatching step update");
        tx.send(Action::UpdateStepRequest(UpdateStepPayload {
            current_steps: self.store.sequence().to_vec(),
            edit_index: index,
            new_content: draft.to_string(),
            problem: self.store.active_problem().to_string(),
        }))?;

        self.sync_dependants();
        return Ok(());
    }

    pub fn handle_solve_completed(&mut self, res: Result<Vec<Step>>) {
        match res {
            Ok(steps) => {
                tracing::debug!(steps = steps.len(), "solve completed");
                self.store.replace_all(steps);
                self.selected = if self.store.is_empty() { 0 } else { 1 };

                if self.store.has_error_steps() {
                    // The very first solve failed, so there is no backup to
                    // fall back on.
                    self.notice = Some(Notice::error(
                        "The solver could not derive a valid solution. Revise the problem and try again.",
                    ));
                } else if self.store.is_empty() {
                    self.notice = Some(Notice::info("The solver returned no steps."));
                } else {
                    self.notice = Some(Notice::info(
                        "Select a step with Up/Down and press Ctrl+E to edit it.",
                    ));
                }
            }
            Err(err) => {
                tracing::error!(error = ?err, "solve failed");
                self.notice = Some(Notice::error(&format!("Solve request failed: {err}")));
            }
        }

        self.waiting_for_backend = false;
        self.sync_dependants();
    }

    pub fn handle_update_completed(&mut self, res: Result<Vec<Step>>) {
        match res {
            Ok(steps) => {
                tracing::debug!(steps = steps.len(), "step update completed");
                self.store.replace_all(steps);
                self.selected = self.selected.min(self.store.len());

                if self.store.has_error_steps() {
                    if self.store.has_backup() {
                        self.notice = Some(Notice::error(
                            "The solver rejected the edit. Press Ctrl+R to roll back to the previous sequence.",
                        ));
                    } else {
                        self.notice = Some(Notice::error(
                            "The solver rejected the edit and no backup exists. Revise the problem instead.",
                        ));
                    }
                } else {
                    self.notice = Some(Notice::info("Step re-derived successfully."));
                }
            }
            Err(err) => {
                tracing::error!(error = ?err, "step update failed");
                self.notice = Some(Notice::error(&format!(
                    "Update request failed, the sequence is unchanged: {err}"
                )));
            }
        }

        self.pending_from = None;
        self.waiting_for_backend = false;
        self.sync_dependants();
    }

    pub fn rollback(&mut self) {
        if self.waiting_for_backend {
            return;
        }

        match self.store.rollback() {
            RollbackOutcome::Restored => {
                self.edit_session.cancel();
                self.selected = if self.store.is_empty() {
                    0
                } else {
                    self.selected.clamp(1, self.store.len())
                };
                self.notice = Some(Notice::info("Restored the last known-good sequence."));
            }
            RollbackOutcome::Unavailable => {
                self.notice = Some(Notice::error("No backup available to roll back to."));
            }
        }

        self.sync_dependants();
    }

    /// Advisory quarantine state for the Presenter: while a re-derivation is
    /// outstanding, every step at or after the edited index is provisional.
    pub fn is_step_pending(&self, index: usize) -> bool {
        match self.pending_from {
            Some(marker) => return index >= marker,
            None => return false,
        }
    }

    pub fn select_next(&mut self) {
        if self.selected < self.store.len() {
            self.selected += 1;
            self.sync_dependants();
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 1 {
            self.selected -= 1;
            self.sync_dependants();
        }
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    fn sync_dependants(&mut self) {
        self.step_list.set_steps(
            self.store.sequence(),
            self.selected,
            self.pending_from,
            self.last_known_width as usize,
        );

        self.scroll
            .set_state(self.step_list.len() as u16, self.last_known_height);

        if let Some(line) = self.step_list.selected_line() {
            self.scroll.ensure_visible(line as u16);
        }
    }
}
