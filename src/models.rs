//! Frontend Models
//!
//! Task entry and its completion state.

use std::fmt;

/// Identity of a task entry within its list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u32);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Completion state of a task entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskState {
    #[default]
    Active,
    Done,
}

impl TaskState {
    /// The opposite state
    pub fn toggled(self) -> Self {
        match self {
            TaskState::Active => TaskState::Done,
            TaskState::Done => TaskState::Active,
        }
    }

    pub fn is_done(self) -> bool {
        self == TaskState::Done
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskState::Active => "active",
            TaskState::Done => "done",
        }
    }
}

/// A single task entry
///
/// The text is fixed at creation; only the state changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    text: String,
    pub state: TaskState,
}

impl Task {
    /// Create a new active task
    pub fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            state: TaskState::Active,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_done(&self) -> bool {
        self.state.is_done()
    }

    /// Flip the completion state, returning the new one
    pub fn toggle(&mut self) -> TaskState {
        self.state = self.state.toggled();
        self.state
    }
}
