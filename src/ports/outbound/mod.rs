/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the host: processes, the file system and the pipeline.
pub mod directory_manager;
pub mod executable_locator;
pub mod pipeline_reporter;
pub mod process_runner;

pub use directory_manager::DirectoryManager;
pub use executable_locator::ExecutableLocator;
pub use pipeline_reporter::PipelineReporter;
pub use process_runner::{ProcessRunner, NO_EXIT_CODE};
