mod action;
mod event;
mod loading;
mod notice;
mod solver;
mod step;
mod textarea;

pub use action::*;
pub use event::*;
pub use loading::*;
pub use notice::*;
pub use solver::*;
pub use step::*;
pub use textarea::*;
