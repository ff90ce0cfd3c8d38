/// Factories selecting infrastructure adapters
mod reporter_factory;

pub use reporter_factory::{ReporterFactory, ReporterType, AZURE_PIPELINES_MARKER};
