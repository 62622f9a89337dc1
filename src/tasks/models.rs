/// Completion state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    NotDone,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotDone => "not done",
            TaskStatus::Done => "done",
        }
    }

    /// The opposite status
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::NotDone => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::NotDone,
        }
    }

    /// Character shown between the brackets of a task row
    pub fn marker(&self) -> &'static str {
        match self {
            TaskStatus::NotDone => " ",
            TaskStatus::Done => "X",
        }
    }
}

/// A single entry in the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    title: String,
    status: TaskStatus,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: TaskStatus::NotDone,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Flip between done and not done
    pub fn toggle_status(&mut self) {
        self.status = self.status.toggled();
    }
}
