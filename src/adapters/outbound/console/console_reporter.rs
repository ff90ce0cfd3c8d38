use crate::ports::outbound::PipelineReporter;
use crate::sbom_generation::domain::{ExecutionOutcome, TaskResult};
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Stderr, Write};
use std::sync::Mutex;

/// ConsoleReporter adapter for local (non-pipeline) runs
///
/// Writes human readable messages to stderr, coloured when stderr is a
/// terminal. Debug messages only go to the `log` facade.
pub struct ConsoleReporter<W: Write = Stderr> {
    writer: Mutex<W>,
    colored: bool,
}

impl ConsoleReporter<Stderr> {
    pub fn new() -> Self {
        let stderr = io::stderr();
        let colored = stderr.is_terminal();
        Self {
            writer: Mutex::new(stderr),
            colored,
        }
    }
}

impl Default for ConsoleReporter<Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn with_writer(writer: W, colored: bool) -> Self {
        Self {
            writer: Mutex::new(writer),
            colored,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_line(&self, line: &str) {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // Nothing sensible to do if stderr is gone
        let _ = writeln!(writer, "{}", line);
    }

    fn paint(&self, prefix: &str, message: &str, color: fn(&str) -> String) -> String {
        if self.colored {
            format!("{}{}", color(prefix), message)
        } else {
            format!("{}{}", prefix, message)
        }
    }
}

impl<W: Write> PipelineReporter for ConsoleReporter<W> {
    fn debug(&self, message: &str) {
        log::debug!("{}", message);
    }

    fn info(&self, message: &str) {
        self.write_line(message);
    }

    fn warning(&self, message: &str) {
        let line = self.paint("⚠️  Warning: ", message, |s| s.yellow().to_string());
        self.write_line(&line);
    }

    fn error(&self, message: &str) {
        let line = self.paint("❌ Error: ", message, |s| s.red().bold().to_string());
        self.write_line(&line);
    }

    fn complete(&self, outcome: &ExecutionOutcome) {
        let line = match outcome.result {
            TaskResult::Succeeded => {
                self.paint("✅ ", &outcome.message, |s| s.green().to_string())
            }
            TaskResult::Failed => self.paint("❌ Task failed: ", &outcome.message, |s| {
                s.red().bold().to_string()
            }),
        };
        self.write_line("");
        self.write_line(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(reporter: ConsoleReporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_messages() {
        let reporter = ConsoleReporter::with_writer(Vec::new(), false);
        reporter.info("Resolving CycloneDX");
        reporter.warning("Unknown outputFormat 'yaml', defaulting to --json");
        reporter.error("CycloneDX exited with code 1");

        let text = output(reporter);
        assert!(text.contains("Resolving CycloneDX\n"));
        assert!(text.contains("⚠️  Warning: Unknown outputFormat 'yaml'"));
        assert!(text.contains("❌ Error: CycloneDX exited with code 1"));
    }

    #[test]
    fn test_debug_is_not_written() {
        let reporter = ConsoleReporter::with_writer(Vec::new(), false);
        reporter.debug("internal detail");
        assert!(output(reporter).is_empty());
    }

    #[test]
    fn test_complete_success() {
        let reporter = ConsoleReporter::with_writer(Vec::new(), false);
        reporter.complete(&ExecutionOutcome::success(Some(0), "SBOM generated successfully."));
        assert!(output(reporter).contains("✅ SBOM generated successfully."));
    }

    #[test]
    fn test_complete_failure() {
        let reporter = ConsoleReporter::with_writer(Vec::new(), false);
        reporter.complete(&ExecutionOutcome::failure(Some(1), "CycloneDX exited with code 1"));
        assert!(output(reporter).contains("❌ Task failed: CycloneDX exited with code 1"));
    }

    #[test]
    fn test_colored_output_keeps_message_intact() {
        let reporter = ConsoleReporter::with_writer(Vec::new(), true);
        reporter.warning("careful");
        let text = output(reporter);
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("careful"));
    }
}
