/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the task has a single entry point, the
/// `GenerateSbomUseCase`, driven directly by the binary.
pub mod outbound;
