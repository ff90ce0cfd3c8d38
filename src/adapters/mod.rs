/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with the host and the pipeline agent.
pub mod outbound;
