#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::sequence_is_contiguous;
use crate::domain::models::SolveClient;
use crate::domain::models::Step;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SolveRequest {
    problem: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct UpdateStepRequest {
    current_steps: Vec<Step>,
    edit_index: usize,
    new_content: String,
    problem: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StepsResponse {
    steps: Vec<Step>,
}

/// JSON-over-HTTP client for the solver service. Responses are whole
/// documents, never streamed, and a request that has been dispatched runs to
/// completion; recovery from a hung solver is a process restart.
pub struct HttpSolver {
    url: String,
    timeout: String,
}

impl Default for HttpSolver {
    fn default() -> HttpSolver {
        return HttpSolver {
            url: Config::get(ConfigKey::SolverUrl),
            timeout: Config::get(ConfigKey::SolverHealthCheckTimeout),
        };
    }
}

impl HttpSolver {
    // Statuses were already rejected during deserialization if unknown; the
    // index invariant is checked here so nothing malformed ever reaches the
    // step store.
    fn validate(steps: Vec<Step>) -> Result<Vec<Step>> {
        if !sequence_is_contiguous(&steps) {
            let indices = steps
                .iter()
                .map(|step| return step.index.to_string())
                .collect::<Vec<String>>()
                .join(", ");
            tracing::error!(indices = indices.as_str(), "non-contiguous solver response");
            bail!("Solver returned a sequence with non-contiguous indices: [{indices}]");
        }

        return Ok(steps);
    }
}

#[async_trait]
impl SolveClient for HttpSolver {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("Solver URL is not defined");
        }

        // The solver has no dedicated health route and answers 404 at its
        // root. Any HTTP response at all proves connectivity.
        let res = reqwest::Client::new()
            .get(&self.url)
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await;

        if res.is_err() {
            tracing::error!(error = ?res.unwrap_err(), "Solver is not reachable");
            bail!("Solver is not reachable");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn solve(&self, problem: &str) -> Result<Vec<Step>> {
        let req = SolveRequest {
            problem: problem.to_string(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/solve", url = self.url))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "Solve request failed");
            bail!("Solve request failed");
        }

        let body = res.json::<StepsResponse>().await?;
        tracing::debug!(steps = body.steps.len(), "solve response");

        return HttpSolver::validate(body.steps);
    }

    #[allow(clippy::implicit_return)]
    async fn update_step(
        &self,
        current_steps: &[Step],
        edit_index: usize,
        new_content: &str,
        problem: &str,
    ) -> Result<Vec<Step>> {
        let req = UpdateStepRequest {
            current_steps: current_steps.to_vec(),
            edit_index,
            new_content: new_content.to_string(),
            problem: problem.to_string(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/update_step", url = self.url))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "Update step request failed");
            bail!("Update step request failed");
        }

        let body = res.json::<StepsResponse>().await?;
        tracing::debug!(steps = body.steps.len(), "update step response");

        return HttpSolver::validate(body.steps);
    }
}
