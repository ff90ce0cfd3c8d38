/// Core of the task: domain values and the services that turn a
/// configuration into a CycloneDX invocation
pub mod domain;
pub mod services;
