use clap::Parser;
use std::path::PathBuf;

/// Generate a CycloneDX SBOM for a .NET solution using the CycloneDX dotnet tool
///
/// Every input can also be supplied the way an Azure Pipelines agent passes
/// task inputs (`INPUT_<NAME>` environment variables) or through a YAML
/// config file. Boolean inputs accept true/false, yes/no, on/off or 1/0; a
/// bare flag means true.
#[derive(Parser, Debug, Default)]
#[command(name = "cyclonedx-sbom-task")]
#[command(version)]
#[command(about = "Generate a CycloneDX SBOM for a .NET solution", long_about = None)]
pub struct Args {
    /// YAML config file with task inputs (defaults to ./cyclonedx-sbom-task.yml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Solution file, project file or directory to scan
    #[arg(short, long, env = "INPUT_SOLUTIONFILEPATH", value_name = "PATH")]
    pub solution_file_path: Option<String>,

    /// Legacy name of --solution-file-path
    #[arg(long, env = "INPUT_SOLUTIONFILE", value_name = "PATH", hide = true)]
    pub solution_file: Option<String>,

    /// Directory the SBOM is written to (created if missing)
    #[arg(short, long, env = "INPUT_OUTPUTDIRECTORY", value_name = "DIR")]
    pub output_directory: Option<String>,

    /// SBOM file name [default: bom.json]
    #[arg(short, long, env = "INPUT_FILENAME")]
    pub filename: Option<String>,

    /// Output format: json, xml or unsafeJson [default: json]
    #[arg(long, env = "INPUT_OUTPUTFORMAT", value_name = "FORMAT")]
    pub output_format: Option<String>,

    /// Do not run a package restore before scanning
    #[arg(long, env = "INPUT_DISABLEPACKAGERESTORE", value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub disable_package_restore: Option<String>,

    /// Override the version of the top-level component
    #[arg(long, env = "INPUT_SETVERSION", value_name = "VERSION")]
    pub set_version: Option<String>,

    /// Override the type of the top-level component
    #[arg(long, env = "INPUT_SETTYPE", value_name = "TYPE")]
    pub set_type: Option<String>,

    /// Exclude development dependencies
    #[arg(long, env = "INPUT_EXCLUDEDEVDEPENDENCIES", value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub exclude_dev_dependencies: Option<String>,

    /// Exclude test projects
    #[arg(long, env = "INPUT_EXCLUDETESTPROJECTS", value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub exclude_test_projects: Option<String>,

    /// Comma separated name@version pairs to exclude
    #[arg(long, env = "INPUT_EXCLUDEFILTERLIST", value_name = "LIST")]
    pub exclude_filter_list: Option<String>,

    /// Resolve licenses through the GitHub API (needs username and token)
    #[arg(long, env = "INPUT_ENABLEGITHUBLICENSES", value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub enable_github_licenses: Option<String>,

    /// GitHub username for license resolution
    #[arg(long, env = "INPUT_GITHUBUSERNAME")]
    pub github_username: Option<String>,

    /// GitHub token for license resolution (prefer the environment variable)
    #[arg(long, env = "INPUT_GITHUBTOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// CycloneDX dotnet tool version to install
    #[arg(long, env = "CYCLONEDX_DOTNET_VERSION", value_name = "VERSION")]
    pub tool_version: Option<String>,

    /// Skip `dotnet tool update/install` and use whatever CycloneDX is on PATH
    #[arg(long, env = "INPUT_SKIPINSTALL", value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub skip_install: Option<String>,

    /// Print the planned CycloneDX invocation without running anything
    #[arg(long, env = "INPUT_DRYRUN", value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub dry_run: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
