pub mod http;

use anyhow::Result;

use crate::domain::models::SolveClientBox;

pub struct SolverManager {}

impl SolverManager {
    pub fn get() -> Result<SolveClientBox> {
        return Ok(Box::<http::HttpSolver>::default());
    }
}
