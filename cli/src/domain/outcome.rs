//! Accumulated task result.

use std::fmt;

/// Result reported to the pipeline for this task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskResult {
    #[default]
    Succeeded,
    Failed,
}

impl fmt::Display for TaskResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => f.write_str("Succeeded"),
            Self::Failed => f.write_str("Failed"),
        }
    }
}

/// Monotonic task outcome: once failed it never returns to succeeded.
#[derive(Debug, Clone, Default)]
pub struct TaskOutcome {
    result: TaskResult,
    message: Option<String>,
}

impl TaskOutcome {
    /// Mark the task failed. The first failure message is kept.
    pub fn fail(&mut self, message: impl Into<String>) {
        if self.result == TaskResult::Succeeded {
            self.result = TaskResult::Failed;
            self.message = Some(message.into());
        }
    }

    #[must_use]
    pub fn result(&self) -> TaskResult {
        self.result
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
