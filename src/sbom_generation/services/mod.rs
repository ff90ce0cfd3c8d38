mod argument_builder;
mod binary_resolver;
mod tool_provisioner;

pub use argument_builder::{ArgumentBuilder, ArgumentList};
pub use binary_resolver::{BinaryResolver, CANONICAL_SHIM, SHIM_CANDIDATES};
pub use tool_provisioner::{
    dotnet_tools_dir, tool_command_args, ProvisioningOutcome, ToolProvisioner, PACKAGE_MANAGER,
    TOOL_PACKAGE,
};
