use crate::shared::error::ExitCode;
use std::fmt;

/// Message reported when the tool exits with code 0
pub const SUCCESS_MESSAGE: &str = "SBOM generated successfully.";

/// Terminal verdict reported to the hosting pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskResult {
    Succeeded,
    Failed,
}

impl fmt::Display for TaskResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskResult::Succeeded => write!(f, "Succeeded"),
            TaskResult::Failed => write!(f, "Failed"),
        }
    }
}

/// ExecutionOutcome - the single terminal result of a run
///
/// `exit_code` is the tool's exit code when the tool actually ran, `None` when
/// the run failed before invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub exit_code: Option<i32>,
    pub result: TaskResult,
    pub message: String,
}

impl ExecutionOutcome {
    pub fn success(exit_code: Option<i32>, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            result: TaskResult::Succeeded,
            message: message.into(),
        }
    }

    pub fn failure(exit_code: Option<i32>, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            result: TaskResult::Failed,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result == TaskResult::Succeeded
    }

    /// Process exit code for the task binary itself
    pub fn task_exit_code(&self) -> ExitCode {
        match self.result {
            TaskResult::Succeeded => ExitCode::Success,
            TaskResult::Failed => ExitCode::TaskFailed,
        }
    }
}
