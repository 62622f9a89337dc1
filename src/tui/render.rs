//! Text layout of the task screen, independent of the terminal backend.

use crate::tasks::{TaskList, TaskStatus};

/// Horizontal rule drawn around the task block
pub const SEPARATOR: &str = "-----------------------------------";

pub const HEADER: &str = "Tasks";

/// Prompt shown whenever a title line is read
pub const TITLE_PROMPT: &str = "enter task title or press enter to stop inserting: ";

pub const HELP_TEXT: &str = "\
Instructions:
   h: show hide instructions
   arrow up or down: select previous or next task
   arrow right or left: reorder task
   space: toggle completion
   e: edit title
   i: insert new tasks
   delete backspace: delete task
   esc: quit";

/// One task as the renderer sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub title: String,
    pub status: TaskStatus,
    pub selected: bool,
}

impl RowView {
    pub fn line(&self) -> String {
        let arrow = if self.selected { "->" } else { "  " };
        format!("{} [{}] {}", arrow, self.status.marker(), self.title)
    }
}

/// Kind of a rendered line, used by the terminal for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Separator,
    Header,
    Row { selected: bool, done: bool },
    Help,
}

/// Snapshot of everything the renderer needs for one redraw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    pub rows: Vec<RowView>,
    pub show_help: bool,
}

impl Screen {
    pub fn new(tasks: &TaskList, show_help: bool) -> Self {
        let rows = tasks
            .iter()
            .enumerate()
            .map(|(i, task)| RowView {
                title: task.title().to_string(),
                status: task.status(),
                selected: i == tasks.selected(),
            })
            .collect();
        Self { rows, show_help }
    }

    /// Lines paired with their kind, in display order
    pub fn styled_lines(&self) -> Vec<(LineKind, String)> {
        let mut lines = Vec::with_capacity(self.rows.len() + 14);
        lines.push((LineKind::Separator, SEPARATOR.to_string()));
        lines.push((LineKind::Header, HEADER.to_string()));
        for row in &self.rows {
            let kind = LineKind::Row {
                selected: row.selected,
                done: row.status == TaskStatus::Done,
            };
            lines.push((kind, row.line()));
        }
        lines.push((LineKind::Separator, SEPARATOR.to_string()));
        if self.show_help {
            for help in HELP_TEXT.lines() {
                lines.push((LineKind::Help, help.to_string()));
            }
            lines.push((LineKind::Separator, SEPARATOR.to_string()));
        }
        lines
    }

    /// Plain text of the redraw
    pub fn lines(&self) -> Vec<String> {
        self.styled_lines().into_iter().map(|(_, line)| line).collect()
    }

    /// Line index of the selected row, if any
    pub fn selected_line(&self) -> Option<usize> {
        // separator + header come first
        self.rows.iter().position(|r| r.selected).map(|i| i + 2)
    }
}

/// First line to show so that `focus` stays within a viewport of `height` lines
pub fn scroll_offset(total: usize, height: usize, focus: usize) -> usize {
    if height == 0 || total <= height {
        return 0;
    }
    let max_offset = total - height;
    focus.saturating_sub(height - 1).min(max_offset)
}
