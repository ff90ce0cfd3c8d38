use async_trait::async_trait;
use cyclonedx_sbom_task::prelude::*;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// One call captured by [`MockProcessRunner`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRun {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub search_path: SearchPath,
}

/// Mock ProcessRunner that replays scripted exit codes and records every call.
///
/// Once the script is exhausted every further run exits with 0.
#[derive(Clone, Default)]
pub struct MockProcessRunner {
    results: Arc<Mutex<VecDeque<Result<i32>>>>,
    runs: Arc<Mutex<Vec<RecordedRun>>>,
}

impl MockProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exit_codes(codes: &[i32]) -> Self {
        Self::with_results(codes.iter().map(|code| Ok(*code)).collect())
    }

    pub fn with_results(results: Vec<Result<i32>>) -> Self {
        Self {
            results: Arc::new(Mutex::new(results.into())),
            runs: Arc::default(),
        }
    }

    pub fn runs(&self) -> Vec<RecordedRun> {
        self.runs.lock().unwrap().clone()
    }

    pub fn run_count(&self) -> usize {
        self.runs.lock().unwrap().len()
    }

    /// The last recorded run, normally the CycloneDX invocation itself
    pub fn last_run(&self) -> Option<RecordedRun> {
        self.runs.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ProcessRunner for MockProcessRunner {
    async fn run(&self, invocation: &ToolInvocation, search_path: &SearchPath) -> Result<i32> {
        self.runs.lock().unwrap().push(RecordedRun {
            program: invocation.program().to_path_buf(),
            args: invocation.args().to_vec(),
            search_path: search_path.clone(),
        });
        self.results.lock().unwrap().pop_front().unwrap_or(Ok(0))
    }
}
