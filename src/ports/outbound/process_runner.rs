use crate::sbom_generation::domain::{SearchPath, ToolInvocation};
use crate::shared::Result;
use async_trait::async_trait;

/// Exit code recorded when a process ends without one (killed by a signal)
pub const NO_EXIT_CODE: i32 = -1;

/// ProcessRunner port for spawning external processes
///
/// Both the `dotnet tool` commands and the CycloneDX tool itself go through
/// this port. Exactly one process is in flight at a time; each call waits for
/// its process to exit.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Runs the invocation to completion with `search_path` as its `PATH`.
    ///
    /// # Returns
    /// The process exit code; a non-zero code is not an error at this level.
    ///
    /// # Errors
    /// Returns `ToolSpawnFailed` if the process could not be started.
    async fn run(&self, invocation: &ToolInvocation, search_path: &SearchPath) -> Result<i32>;
}
