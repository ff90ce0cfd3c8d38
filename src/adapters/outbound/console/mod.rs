/// Console adapters for local runs
mod console_reporter;

pub use console_reporter::ConsoleReporter;
