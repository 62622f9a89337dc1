//! Traits for the terminal boundary (drawing, reading input) to enable testing with mocks.

use anyhow::Result;

use crate::tui::input::Key;
use crate::tui::render::Screen;

#[cfg(any(test, feature = "test-mocks"))]
use mockall::automock;

/// Source of user input
#[cfg_attr(any(test, feature = "test-mocks"), automock)]
pub trait InputSource {
    /// Block until a full line of text has been entered
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Block until a single key is pressed
    fn read_key(&mut self) -> Result<Key>;
}

/// Destination for full-screen redraws
#[cfg_attr(any(test, feature = "test-mocks"), automock)]
pub trait RenderSink {
    fn render(&mut self, screen: &Screen) -> Result<()>;
}
