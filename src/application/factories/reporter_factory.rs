use crate::adapters::outbound::console::ConsoleReporter;
use crate::adapters::outbound::pipeline::AzurePipelinesReporter;
use crate::ports::outbound::PipelineReporter;

/// Environment variable set by the Azure Pipelines agent on every job
pub const AZURE_PIPELINES_MARKER: &str = "TF_BUILD";

/// Reporter type enumeration for factory pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReporterType {
    AzurePipelines,
    Console,
}

impl ReporterType {
    /// Picks the Azure reporter when running on an Azure Pipelines agent
    pub fn detect() -> Self {
        Self::from_marker(std::env::var_os(AZURE_PIPELINES_MARKER).is_some())
    }

    pub fn from_marker(on_azure_agent: bool) -> Self {
        if on_azure_agent {
            ReporterType::AzurePipelines
        } else {
            ReporterType::Console
        }
    }
}

/// Factory for creating pipeline reporters
pub struct ReporterFactory;

impl ReporterFactory {
    /// Creates a reporter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use cyclonedx_sbom_task::application::factories::{ReporterFactory, ReporterType};
    /// use cyclonedx_sbom_task::ports::outbound::PipelineReporter;
    ///
    /// let reporter = ReporterFactory::create(ReporterType::Console);
    /// reporter.info("hello");
    /// ```
    pub fn create(reporter_type: ReporterType) -> Box<dyn PipelineReporter> {
        match reporter_type {
            ReporterType::AzurePipelines => Box::new(AzurePipelinesReporter::new()),
            ReporterType::Console => Box::new(ConsoleReporter::new()),
        }
    }
}
