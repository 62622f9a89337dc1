pub mod config;
pub mod logging;
pub mod operations;
pub mod tasks;
pub mod tui;
