/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod filesystem;
pub mod pipeline;
pub mod process;
