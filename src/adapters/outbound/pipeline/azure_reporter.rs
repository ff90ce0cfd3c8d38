//! Azure Pipelines logging-command reporter.
//!
//! The agent scans the task's stdout for `##vso[...]` lines; see
//! <https://learn.microsoft.com/azure/devops/pipelines/scripts/logging-commands>.

use crate::ports::outbound::PipelineReporter;
use crate::sbom_generation::domain::ExecutionOutcome;
use std::env;
use std::io::{self, Stdout, Write};
use std::path::Path;
use std::sync::Mutex;

/// Environment variable the agent sets to `true` when debug logging is on
pub const SYSTEM_DEBUG_VAR: &str = "SYSTEM_DEBUG";

/// AzurePipelinesReporter adapter emitting Azure logging commands
pub struct AzurePipelinesReporter<W: Write = Stdout> {
    writer: Mutex<W>,
    debug_enabled: bool,
}

impl AzurePipelinesReporter<Stdout> {
    /// Writes to stdout; debug lines follow `SYSTEM_DEBUG`.
    pub fn new() -> Self {
        let debug_enabled = env::var(SYSTEM_DEBUG_VAR)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self::with_writer(io::stdout(), debug_enabled)
    }
}

impl Default for AzurePipelinesReporter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> AzurePipelinesReporter<W> {
    pub fn with_writer(writer: W, debug_enabled: bool) -> Self {
        Self {
            writer: Mutex::new(writer),
            debug_enabled,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn command(&self, name: &str, properties: &str, data: &str) {
        let line = if properties.is_empty() {
            format!("##vso[{}]{}", name, escape_data(data))
        } else {
            format!("##vso[{} {}]{}", name, properties, escape_data(data))
        };
        self.write_line(&line);
    }

    fn write_line(&self, line: &str) {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let _ = writeln!(writer, "{}", line);
        let _ = writer.flush();
    }
}

/// Escapes message data so it cannot break out of a logging command.
pub fn escape_data(data: &str) -> String {
    data.replace('%', "%AZP25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

impl<W: Write> PipelineReporter for AzurePipelinesReporter<W> {
    /// `task.debug` when the agent runs in debug mode, the `log` facade otherwise
    fn debug(&self, message: &str) {
        if self.debug_enabled {
            self.command("task.debug", "", message);
        } else {
            log::debug!("{}", message);
        }
    }

    fn info(&self, message: &str) {
        self.write_line(message);
    }

    fn warning(&self, message: &str) {
        self.command("task.logissue", "type=warning", message);
    }

    fn error(&self, message: &str) {
        self.command("task.logissue", "type=error", message);
    }

    fn register_secret(&self, secret: &str) {
        if !secret.is_empty() {
            self.command("task.setsecret", "", secret);
        }
    }

    fn path_prepended(&self, dir: &Path) {
        self.debug(&format!("Prepending to PATH: {}", dir.display()));
        self.command("task.prependpath", "", &dir.display().to_string());
    }

    fn complete(&self, outcome: &ExecutionOutcome) {
        self.command(
            "task.complete",
            &format!("result={};", outcome.result),
            &outcome.message,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(reporter: AzurePipelinesReporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_warning_and_error_commands() {
        let reporter = AzurePipelinesReporter::with_writer(Vec::new(), false);
        reporter.warning("dotnet tool update failed");
        reporter.error("CycloneDX exited with code 1");

        assert_eq!(
            output(reporter),
            "##vso[task.logissue type=warning]dotnet tool update failed\n\
             ##vso[task.logissue type=error]CycloneDX exited with code 1\n"
        );
    }

    /// Collects log records so tests can check what reached the `log` facade
    struct CaptureLogger {
        lines: Mutex<Vec<String>>,
    }

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            self.lines
                .lock()
                .unwrap()
                .push(record.args().to_string());
        }

        fn flush(&self) {}
    }

    fn capture_logger() -> &'static CaptureLogger {
        static LOGGER: std::sync::OnceLock<&'static CaptureLogger> = std::sync::OnceLock::new();
        LOGGER.get_or_init(|| {
            let logger: &'static CaptureLogger = Box::leak(Box::new(CaptureLogger {
                lines: Mutex::new(Vec::new()),
            }));
            let _ = log::set_logger(logger);
            log::set_max_level(log::LevelFilter::Debug);
            logger
        })
    }

    fn logged(message: &str) -> usize {
        capture_logger()
            .lines
            .lock()
            .unwrap()
            .iter()
            .filter(|line| line.as_str() == message)
            .count()
    }

    #[test]
    fn test_debug_goes_to_exactly_one_channel() {
        capture_logger();

        let verbose = AzurePipelinesReporter::with_writer(Vec::new(), true);
        verbose.debug("azure-debug-verbose-detail");
        assert_eq!(output(verbose), "##vso[task.debug]azure-debug-verbose-detail\n");
        assert_eq!(logged("azure-debug-verbose-detail"), 0);

        let quiet = AzurePipelinesReporter::with_writer(Vec::new(), false);
        quiet.debug("azure-debug-quiet-detail");
        assert!(output(quiet).is_empty());
        assert_eq!(logged("azure-debug-quiet-detail"), 1);
    }

    #[test]
    fn test_debug_hidden_unless_enabled() {
        let quiet = AzurePipelinesReporter::with_writer(Vec::new(), false);
        quiet.debug("detail");
        assert!(output(quiet).is_empty());

        let verbose = AzurePipelinesReporter::with_writer(Vec::new(), true);
        verbose.debug("detail");
        assert_eq!(output(verbose), "##vso[task.debug]detail\n");
    }

    #[test]
    fn test_complete_succeeded() {
        let reporter = AzurePipelinesReporter::with_writer(Vec::new(), false);
        reporter.complete(&ExecutionOutcome::success(Some(0), "SBOM generated successfully."));
        assert_eq!(
            output(reporter),
            "##vso[task.complete result=Succeeded;]SBOM generated successfully.\n"
        );
    }

    #[test]
    fn test_complete_failed_escapes_multiline_message() {
        let reporter = AzurePipelinesReporter::with_writer(Vec::new(), false);
        reporter.complete(&ExecutionOutcome::failure(None, "line one\nline two 100%"));
        assert_eq!(
            output(reporter),
            "##vso[task.complete result=Failed;]line one%0Aline two 100%AZP25\n"
        );
    }

    #[test]
    fn test_register_secret() {
        let reporter = AzurePipelinesReporter::with_writer(Vec::new(), false);
        reporter.register_secret("ghp_secret");
        reporter.register_secret("");
        assert_eq!(output(reporter), "##vso[task.setsecret]ghp_secret\n");
    }

    #[test]
    fn test_path_prepended() {
        let reporter = AzurePipelinesReporter::with_writer(Vec::new(), false);
        reporter.path_prepended(Path::new("/home/vsts/.dotnet/tools"));
        assert_eq!(
            output(reporter),
            "##vso[task.prependpath]/home/vsts/.dotnet/tools\n"
        );
    }

    #[test]
    fn test_escape_data() {
        assert_eq!(escape_data("a\r\nb"), "a%0D%0Ab");
        assert_eq!(escape_data("50%"), "50%AZP25");
        assert_eq!(escape_data("plain"), "plain");
    }
}
