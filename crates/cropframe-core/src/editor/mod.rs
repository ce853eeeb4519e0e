mod controller;
mod hooks;
mod state;

pub use controller::CropEditor;
pub use hooks::Hooks;
pub use state::{LoadOutcome, LoadState, LoadTicket};
