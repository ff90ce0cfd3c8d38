use crate::ports::outbound::{ProcessRunner, NO_EXIT_CODE};
use crate::sbom_generation::domain::{SearchPath, ToolInvocation};
use crate::shared::error::SbomTaskError;
use crate::shared::Result;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// TokioProcessRunner adapter spawning real processes
///
/// stdout and stderr are inherited so the tool's own output streams straight
/// into the pipeline log. stdin is closed. No timeout is applied.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioProcessRunner;

impl TokioProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, invocation: &ToolInvocation, search_path: &SearchPath) -> Result<i32> {
        log::debug!("Spawning: {}", invocation);

        let mut command = Command::new(invocation.program());
        command.args(invocation.args()).stdin(Stdio::null());
        if !search_path.is_empty() {
            command.env("PATH", search_path.to_os_string());
        }

        let status = command
            .status()
            .await
            .map_err(|e| SbomTaskError::ToolSpawnFailed {
                program: invocation.program().display().to_string(),
                details: e.to_string(),
            })?;

        let code = status.code().unwrap_or(NO_EXIT_CODE);
        log::debug!("{} exited with {}", invocation.program().display(), code);
        Ok(code)
    }
}
