use super::Step;

/// Everything the solver worker needs to re-derive from an edited step.
/// `problem` is always the locked original problem, never the live input.
pub struct UpdateStepPayload {
    pub current_steps: Vec<Step>,
    pub edit_index: usize,
    pub new_content: String,
    pub problem: String,
}

pub enum Action {
    SolveRequest(String),
    UpdateStepRequest(UpdateStepPayload),
}
