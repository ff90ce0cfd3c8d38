use cyclonedx_sbom_task::prelude::*;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock PipelineReporter that captures messages and completions
#[derive(Clone, Default)]
pub struct MockPipelineReporter {
    pub messages: Arc<Mutex<Vec<String>>>,
    pub completions: Arc<Mutex<Vec<ExecutionOutcome>>>,
}

impl MockPipelineReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn messages_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.get_messages()
            .into_iter()
            .filter_map(|m| m.strip_prefix(prefix).map(str::to_string))
            .collect()
    }

    pub fn completions(&self) -> Vec<ExecutionOutcome> {
        self.completions.lock().unwrap().clone()
    }

    fn push(&self, kind: &str, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("{}: {}", kind, message));
    }
}

impl PipelineReporter for MockPipelineReporter {
    fn debug(&self, message: &str) {
        self.push("Debug", message);
    }

    fn info(&self, message: &str) {
        self.push("Info", message);
    }

    fn warning(&self, message: &str) {
        self.push("Warning", message);
    }

    fn error(&self, message: &str) {
        self.push("Error", message);
    }

    fn register_secret(&self, secret: &str) {
        self.push("Secret", secret);
    }

    fn path_prepended(&self, dir: &Path) {
        self.push("Path", &dir.display().to_string());
    }

    fn complete(&self, outcome: &ExecutionOutcome) {
        self.completions.lock().unwrap().push(outcome.clone());
    }
}
