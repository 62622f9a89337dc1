use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use std::io::{self, Stdout};

use crate::operations::{InputSource, RenderSink};

use super::input::{Key, LineAction, LineBuffer};
use super::render::{scroll_offset, LineKind, Screen};

type Terminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Failures raised by the terminal front end
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("interrupted while reading input")]
    Interrupted,
}

/// Colors for the task screen
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub selected: Color,
    pub header: Color,
    pub done: Color,
    pub separator: Color,
    pub help: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selected: Color::Rgb(0xea, 0xd4, 0x9a),
            header: Color::Cyan,
            done: Color::Rgb(0x9c, 0x99, 0x91),
            separator: Color::DarkGray,
            help: Color::Rgb(0xa0, 0xd2, 0xfa),
        }
    }
}

impl Theme {
    fn style_for(&self, kind: LineKind) -> Style {
        match kind {
            LineKind::Separator => Style::default().fg(self.separator),
            LineKind::Header => Style::default().fg(self.header).bold(),
            LineKind::Row { selected: true, .. } => Style::default().fg(self.selected).bold(),
            LineKind::Row { done: true, .. } => Style::default().fg(self.done),
            LineKind::Row { .. } => Style::default(),
            LineKind::Help => Style::default().fg(self.help),
        }
    }
}

/// Line being typed, shown under the task screen
struct Prompt<'a> {
    label: &'a str,
    buffer: &'a LineBuffer,
}

/// Raw-mode terminal on the alternate screen, serving as both renderer and input source
pub struct TerminalUi {
    terminal: Terminal,
    theme: Theme,
    last_screen: Screen,
}

impl TerminalUi {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            theme: Theme::default(),
            last_screen: Screen::default(),
        })
    }

    fn draw(&mut self, prompt: Option<Prompt<'_>>) -> Result<()> {
        let screen = &self.last_screen;
        let theme = self.theme;
        self.terminal.draw(|frame| {
            let area = frame.area();

            let mut lines: Vec<Line> = screen
                .styled_lines()
                .into_iter()
                .map(|(kind, text)| Line::styled(text, theme.style_for(kind)))
                .collect();

            let focus = match &prompt {
                Some(p) => {
                    lines.push(Line::raw(p.label.to_string()));
                    lines.push(Line::raw(p.buffer.as_str().to_string()));
                    lines.len() - 1
                }
                None => screen.selected_line().unwrap_or(0),
            };

            let offset = scroll_offset(lines.len(), area.height as usize, focus);
            let paragraph = Paragraph::new(lines).scroll((offset as u16, 0));
            frame.render_widget(paragraph, area);

            if let Some(p) = &prompt {
                let row = (focus - offset) as u16;
                let col = (p.buffer.cursor() as u16).min(area.width.saturating_sub(1));
                frame.set_cursor_position((area.x + col, area.y + row));
            }
        })?;

        Ok(())
    }
}

impl RenderSink for TerminalUi {
    fn render(&mut self, screen: &Screen) -> Result<()> {
        self.last_screen = screen.clone();
        self.draw(None)
    }
}

impl InputSource for TerminalUi {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let mut buffer = LineBuffer::new();
        loop {
            self.draw(Some(Prompt {
                label: prompt,
                buffer: &buffer,
            }))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match buffer.apply(key) {
                    LineAction::Continue => {}
                    LineAction::Submit => return Ok(buffer.into_string()),
                    LineAction::Interrupt => return Err(TerminalError::Interrupted.into()),
                }
            }
        }
    }

    fn read_key(&mut self) -> Result<Key> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(Key::from(key)),
                // Repaint the last screen at the new size
                Event::Resize(_, _) => self.draw(None)?,
                _ => {}
            }
        }
    }
}

impl Drop for TerminalUi {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
