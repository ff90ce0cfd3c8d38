//! cyclonedx-sbom-task - CI pipeline step producing a CycloneDX SBOM for .NET solutions
//!
//! The task provisions the CycloneDX dotnet global tool (`dotnet tool update`,
//! falling back to `dotnet tool install`), resolves its shim on the search
//! path, translates task inputs into CycloneDX arguments, runs the tool and
//! reports exactly one success or failure result to the pipeline.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Task configuration, argument building, provisioning
//! - **Application Layer** (`application`): The task use case and its request DTO
//! - **Ports** (`ports`): Interface definitions for processes, filesystem and reporting
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use cyclonedx_sbom_task::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let configuration = TaskConfiguration::builder()
//!     .solution_path("src/App.sln")
//!     .output_directory("artifacts/sbom")
//!     .build()?;
//!
//! let use_case = GenerateSbomUseCase::new(
//!     TokioProcessRunner::new(),
//!     PathExecutableLocator::new(),
//!     FileSystemDirectoryManager::new(),
//!     ConsoleReporter::new(),
//! );
//!
//! let request = SbomTaskRequest::new(configuration, SearchPath::from_env());
//! let outcome = use_case.execute(request).await;
//! std::process::exit(outcome.task_exit_code().as_i32());
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::ConsoleReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemDirectoryManager, PathExecutableLocator,
    };
    pub use crate::adapters::outbound::pipeline::AzurePipelinesReporter;
    pub use crate::adapters::outbound::process::TokioProcessRunner;
    pub use crate::application::dto::SbomTaskRequest;
    pub use crate::application::factories::{ReporterFactory, ReporterType};
    pub use crate::application::use_cases::GenerateSbomUseCase;
    pub use crate::ports::outbound::{
        DirectoryManager, ExecutableLocator, PipelineReporter, ProcessRunner,
    };
    pub use crate::sbom_generation::domain::{
        ExecutionOutcome, GithubLicenseOptions, OutputFormat, SearchPath, TaskConfiguration,
        TaskResult, ToolInvocation,
    };
    pub use crate::sbom_generation::services::{ArgumentBuilder, BinaryResolver, ToolProvisioner};
    pub use crate::shared::error::{ExitCode, SbomTaskError};
    pub use crate::shared::Result;
}
