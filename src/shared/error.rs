use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the task binary.
///
/// These codes allow the hosting pipeline (or a local shell) to distinguish
/// between a failed SBOM run and a task that never got off the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The CycloneDX tool ran and exited with code 0
    Success = 0,
    /// The task ran and reported a failure
    TaskFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Inputs could not be loaded or validated
    ConfigurationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::TaskFailed => write!(f, "Task Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ConfigurationError => write!(f, "Configuration Error (3)"),
        }
    }
}

/// Task-specific errors.
///
/// Uses thiserror to derive Display and Error traits automatically. The
/// Display text is what ends up as the pipeline's failure message.
#[derive(Debug, Error)]
pub enum SbomTaskError {
    #[error("Input required: {input}")]
    MissingInput { input: String },

    #[error("GitHub license resolution enabled but 'githubUsername' or 'githubToken' is missing.")]
    GithubCredentialsMissing,

    #[error("Failed to create output directory: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions for the parent directory")]
    OutputDirectory { path: PathBuf, details: String },

    #[error("Failed to start {program}: {details}\n\n💡 Hint: Make sure the CycloneDX dotnet tool is installed and on PATH")]
    ToolSpawnFailed { program: String, details: String },

    #[error("CycloneDX exited with code {code}")]
    ToolExitedWithCode { code: i32 },

    #[error("Invalid config file: {path}\nDetails: {details}")]
    ConfigFile { path: PathBuf, details: String },

    #[error("Validation error: {message}")]
    Validation { message: String },
}
