/// Mock implementations for testing
mod mock_directory_manager;
mod mock_executable_locator;
mod mock_pipeline_reporter;
mod mock_process_runner;

pub use mock_directory_manager::MockDirectoryManager;
pub use mock_executable_locator::MockExecutableLocator;
pub use mock_pipeline_reporter::MockPipelineReporter;
pub use mock_process_runner::{MockProcessRunner, RecordedRun};
