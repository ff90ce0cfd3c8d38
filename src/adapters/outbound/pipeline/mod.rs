/// Hosted pipeline adapters
mod azure_reporter;

pub use azure_reporter::{escape_data, AzurePipelinesReporter, SYSTEM_DEBUG_VAR};
