use anyhow::Result;
use tui_textarea::Input;

use super::Step;

pub enum Event {
    SolveCompleted(Result<Vec<Step>>),
    UpdateStepCompleted(Result<Vec<Step>>),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLE(),
    KeyboardCTRLR(),
    KeyboardEnter(),
    KeyboardEsc(),
    KeyboardPaste(String),
    StepSelectNext(),
    StepSelectPrev(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
