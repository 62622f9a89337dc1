use super::models::Task;

/// Ordered tasks plus the cursor identifying the current one.
///
/// The cursor is always a valid index while the list is non-empty and is 0
/// when it is empty. Navigation and swapping wrap around at both ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    selected: usize,
}

impl TaskList {
    pub fn new() -> Self {
        Self {
            tasks: vec![],
            selected: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Index of the current task (0 when empty)
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The current task, or `None` for an empty list
    pub fn current(&self) -> Option<&Task> {
        self.tasks.get(self.selected)
    }

    pub fn current_mut(&mut self) -> Option<&mut Task> {
        self.tasks.get_mut(self.selected)
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Move the cursor up, wrapping to the last task
    pub fn select_previous(&mut self) {
        self.selected = self.previous_index();
    }

    /// Move the cursor down, wrapping to the first task
    pub fn select_next(&mut self) {
        self.selected = self.next_index();
    }

    /// Swap the current task with the one above it (wrapping) and follow it
    pub fn swap_with_previous(&mut self) {
        if self.tasks.len() < 2 {
            return;
        }
        let prev = self.previous_index();
        self.tasks.swap(self.selected, prev);
        self.selected = prev;
    }

    /// Swap the current task with the one below it (wrapping) and follow it
    pub fn swap_with_next(&mut self) {
        if self.tasks.len() < 2 {
            return;
        }
        let next = self.next_index();
        self.tasks.swap(self.selected, next);
        self.selected = next;
    }

    /// Insert a new task right after the cursor and select it.
    /// Returns the index of the new task.
    pub fn insert(&mut self, title: impl Into<String>) -> usize {
        let task = Task::new(title);
        if self.tasks.is_empty() {
            self.tasks.push(task);
            self.selected = 0;
        } else {
            self.selected += 1;
            self.tasks.insert(self.selected, task);
        }
        self.selected
    }

    /// Remove the current task, clamping the cursor into the shorter list
    pub fn delete_selected(&mut self) -> Option<Task> {
        if self.tasks.is_empty() {
            return None;
        }
        let removed = self.tasks.remove(self.selected);
        self.clamp_selected();
        Some(removed)
    }

    fn previous_index(&self) -> usize {
        match self.tasks.len() {
            0 => 0,
            len if self.selected == 0 => len - 1,
            _ => self.selected - 1,
        }
    }

    fn next_index(&self) -> usize {
        match self.tasks.len() {
            0 => 0,
            len => (self.selected + 1) % len,
        }
    }

    fn clamp_selected(&mut self) {
        if self.tasks.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.tasks.len() {
            self.selected = self.tasks.len() - 1;
        }
    }
}

impl<S: Into<String>> FromIterator<S> for TaskList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().map(Task::new).collect(),
            selected: 0,
        }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
