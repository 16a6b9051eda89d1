use anyhow::Result;
use async_trait::async_trait;

use super::Step;

pub type SolveClientBox = Box<dyn SolveClient + Send + Sync>;

#[async_trait]
pub trait SolveClient {
    /// Used at startup to verify the solver service is reachable before the
    /// UI starts accepting problems.
    async fn health_check(&self) -> Result<()>;

    /// Requests a fresh full derivation for a problem. Returns either a
    /// complete sequence or an error, never partial results.
    async fn solve(&self, problem: &str) -> Result<Vec<Step>>;

    /// Requests re-derivation of `edit_index` and everything downstream,
    /// holding steps before `edit_index` fixed. The response is a full
    /// replacement sequence which may be shorter or longer than the current
    /// one, and may carry error-status steps when the edit breaks the
    /// derivation.
    async fn update_step(
        &self,
        current_steps: &[Step],
        edit_index: usize,
        new_content: &str,
        problem: &str,
    ) -> Result<Vec<Step>>;
}
