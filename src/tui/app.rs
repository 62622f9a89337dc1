use anyhow::Result;

use crate::operations::{InputSource, RenderSink};
use crate::tasks::TaskList;

use super::input::{InputMode, Key};
use super::render::{Screen, TITLE_PROMPT};

/// Application state (separate from the console for borrow checker)
#[derive(Debug, Clone)]
pub struct AppState {
    pub tasks: TaskList,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TaskList::new())
    }
}

impl AppState {
    pub fn new(tasks: TaskList) -> Self {
        Self {
            tasks,
            input_mode: InputMode::Insert,
            show_help: true,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        Screen::new(&self.tasks, self.show_help)
    }

    /// Handle a line typed in insert mode
    pub fn handle_line(&mut self, line: &str) {
        if line.is_empty() {
            tracing::debug!("leaving insert mode");
            self.input_mode = InputMode::Command;
        } else {
            let index = self.tasks.insert(line);
            tracing::debug!(index, title = line, "inserted task");
        }
    }

    /// Handle a key pressed in command mode. Editing a title reads one more line from `input`.
    pub fn handle_key(&mut self, key: Key, input: &mut dyn InputSource) -> Result<()> {
        match key {
            Key::Escape => {
                tracing::info!("quit requested");
                self.should_quit = true;
            }
            Key::Up => self.tasks.select_previous(),
            Key::Down => self.tasks.select_next(),
            Key::Left => self.tasks.swap_with_previous(),
            Key::Right => self.tasks.swap_with_next(),
            Key::Char('i' | 'I') => {
                tracing::debug!("entering insert mode");
                self.input_mode = InputMode::Insert;
            }
            Key::Char('e' | 'E') => {
                if self.tasks.current().is_some() {
                    let title = input.read_line(TITLE_PROMPT)?;
                    let index = self.tasks.selected();
                    if let Some(task) = self.tasks.current_mut() {
                        task.set_title(title);
                        tracing::debug!(index, "renamed task");
                    }
                }
            }
            Key::Char('h' | 'H') => self.show_help = !self.show_help,
            Key::Space | Key::Enter => {
                if let Some(task) = self.tasks.current_mut() {
                    task.toggle_status();
                    tracing::debug!(status = task.status().as_str(), "toggled task");
                }
            }
            Key::Delete | Key::Backspace => {
                if let Some(task) = self.tasks.delete_selected() {
                    tracing::debug!(title = task.title(), "deleted task");
                }
            }
            Key::Char(_) | Key::Other => {}
        }
        Ok(())
    }
}

/// Render-read-dispatch loop over a console that both draws and reads
pub struct App<C> {
    console: C,
    state: AppState,
}

impl<C: InputSource + RenderSink> App<C> {
    pub fn new(console: C) -> Self {
        Self::with_state(console, AppState::default())
    }

    pub fn with_state(console: C, state: AppState) -> Self {
        Self { console, state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn into_state(self) -> AppState {
        self.state
    }

    pub fn run(&mut self) -> Result<()> {
        tracing::info!(tasks = self.state.tasks.len(), "starting task editor");
        while !self.state.should_quit {
            self.step()?;
        }
        tracing::info!(tasks = self.state.tasks.len(), "task editor finished");
        Ok(())
    }

    /// One iteration: redraw, then read and apply a single input unit
    pub fn step(&mut self) -> Result<()> {
        self.console.render(&self.state.screen())?;

        match self.state.input_mode {
            InputMode::Insert => {
                let line = self.console.read_line(TITLE_PROMPT)?;
                self.state.handle_line(&line);
            }
            InputMode::Command => {
                let key = self.console.read_key()?;
                self.state.handle_key(key, &mut self.console)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
