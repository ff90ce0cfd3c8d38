pub mod execution_outcome;
pub mod output_format;
pub mod search_path;
pub mod task_configuration;
pub mod tool_invocation;

pub use execution_outcome::{ExecutionOutcome, TaskResult, SUCCESS_MESSAGE};
pub use output_format::OutputFormat;
pub use search_path::SearchPath;
pub use task_configuration::{
    GithubLicenseOptions, TaskConfiguration, TaskConfigurationBuilder, DEFAULT_FILENAME,
};
pub use tool_invocation::ToolInvocation;
