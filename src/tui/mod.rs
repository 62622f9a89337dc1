mod app;
pub mod input;
pub mod render;
mod terminal;

pub use app::{App, AppState};
pub use terminal::{TerminalError, TerminalUi, Theme};
