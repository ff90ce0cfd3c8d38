/// Data Transfer Objects for application layer
mod sbom_task_request;

pub use sbom_task_request::SbomTaskRequest;
