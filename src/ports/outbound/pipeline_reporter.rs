use crate::sbom_generation::domain::ExecutionOutcome;
use std::path::Path;

/// PipelineReporter port for talking to the hosting pipeline
///
/// Implementations decide how messages surface (Azure logging commands,
/// coloured console output, ...). `complete` is called exactly once per run.
pub trait PipelineReporter {
    /// Diagnostic detail, hidden unless the pipeline runs in debug mode
    fn debug(&self, message: &str);

    /// Plain progress message
    fn info(&self, message: &str);

    /// Non-fatal problem
    fn warning(&self, message: &str);

    /// Failure message
    fn error(&self, message: &str);

    /// Registers a value that must be masked in all later output
    fn register_secret(&self, _secret: &str) {}

    /// Announces a directory prepended to the search path for later steps
    fn path_prepended(&self, dir: &Path) {
        self.debug(&format!("Prepending to PATH: {}", dir.display()));
    }

    /// Reports the terminal outcome of the run
    fn complete(&self, outcome: &ExecutionOutcome);
}

impl<R: PipelineReporter + ?Sized> PipelineReporter for Box<R> {
    fn debug(&self, message: &str) {
        (**self).debug(message)
    }

    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn warning(&self, message: &str) {
        (**self).warning(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }

    fn register_secret(&self, secret: &str) {
        (**self).register_secret(secret)
    }

    fn path_prepended(&self, dir: &Path) {
        (**self).path_prepended(dir)
    }

    fn complete(&self, outcome: &ExecutionOutcome) {
        (**self).complete(outcome)
    }
}
