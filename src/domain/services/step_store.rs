#[cfg(test)]
#[path = "step_store_test.rs"]
mod tests;

use crate::domain::models::Step;
use crate::domain::models::StepStatus;

#[derive(Debug, PartialEq, Eq)]
pub enum RollbackOutcome {
    Restored,
    Unavailable,
}

/// Owns the ordered step sequence, the locked original problem, and the
/// single backup snapshot. The sequence is only ever replaced wholesale with
/// what the solver returned, never patched field by field.
#[derive(Default)]
pub struct StepStore {
    sequence: Vec<Step>,
    backup: Option<Vec<Step>>,
    active_problem: String,
}

impl StepStore {
    /// Fully resets the store for a new derivation: the sequence and any
    /// backup are dropped, and the problem is locked. Every later
    /// re-derivation request sends this locked value, not whatever the input
    /// field holds by then.
    pub fn initialize(&mut self, problem: &str) {
        self.sequence.clear();
        self.backup = None;
        self.active_problem = problem.to_string();
    }

    /// Wholesale substitution of the sequence. The backup is untouched. The
    /// solver is trusted to hand over contiguous 1..N indices; that is
    /// validated at the client boundary before anything reaches here.
    pub fn replace_all(&mut self, new_sequence: Vec<Step>) {
        self.sequence = new_sequence;
    }

    /// Copies the live sequence into the backup, overwriting any previous
    /// one. The copy is deep, mutating the live sequence afterwards leaves
    /// the backup alone.
    pub fn snapshot(&mut self) {
        self.backup = Some(self.sequence.clone());
    }

    /// One-shot restore of the last snapshot. Consumes the backup, so a
    /// second call in a row reports `Unavailable` and changes nothing.
    pub fn rollback(&mut self) -> RollbackOutcome {
        match self.backup.take() {
            Some(backup) => {
                self.sequence = backup;
                return RollbackOutcome::Restored;
            }
            None => {
                return RollbackOutcome::Unavailable;
            }
        }
    }

    pub fn sequence(&self) -> &[Step] {
        return &self.sequence;
    }

    pub fn active_problem(&self) -> &str {
        return &self.active_problem;
    }

    pub fn has_backup(&self) -> bool {
        return self.backup.is_some();
    }

    pub fn len(&self) -> usize {
        return self.sequence.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.sequence.is_empty();
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        return self.sequence.get(index.wrapping_sub(1));
    }

    pub fn has_error_steps(&self) -> bool {
        return self
            .sequence
            .iter()
            .any(|step| return step.status == StepStatus::Error);
    }

    #[cfg(test)]
    pub fn backup(&self) -> Option<&[Step]> {
        return self.backup.as_deref();
    }
}
