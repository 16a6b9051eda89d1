pub mod actions;
mod app_state;
mod edit_session;
pub mod events;
mod scroll;
mod step_list;
mod step_store;

pub use app_state::*;
pub use edit_session::*;
pub use scroll::*;
pub use step_list::*;
pub use step_store::*;
