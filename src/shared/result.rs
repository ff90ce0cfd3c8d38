/// Crate-wide Result alias with anyhow::Error as the error type.
/// Typed failures are `SbomTaskError` values wrapped into anyhow so callers
/// can still downcast them at the reporting boundary.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
