//! Task input loading.
//!
//! Inputs are layered: command-line flags and `INPUT_*` environment variables
//! (both handled by clap) take precedence over an optional YAML config file.
//! This is also where the legacy `solutionFile` input name is folded into
//! `solutionFilePath`.

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::sbom_generation::domain::{GithubLicenseOptions, TaskConfiguration};
use crate::shared::error::SbomTaskError;
use crate::shared::Result;

/// File name picked up from the working directory when `--config` is absent
pub const CONFIG_FILENAME: &str = "cyclonedx-sbom-task.yml";

/// Config file schema. Keys match the task input names.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    pub solution_file_path: Option<String>,
    /// Legacy spelling of `solutionFilePath`
    pub solution_file: Option<String>,
    pub output_directory: Option<String>,
    pub filename: Option<String>,
    pub output_format: Option<String>,
    pub disable_package_restore: Option<BoolInput>,
    pub set_version: Option<String>,
    pub set_type: Option<String>,
    pub exclude_dev_dependencies: Option<BoolInput>,
    pub exclude_test_projects: Option<BoolInput>,
    pub exclude_filter_list: Option<String>,
    pub enable_github_licenses: Option<BoolInput>,
    pub github_username: Option<String>,
    pub github_token: Option<String>,
    pub tool_version: Option<String>,
    pub skip_install: Option<BoolInput>,
    pub dry_run: Option<BoolInput>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

/// A boolean key as written in YAML.
///
/// YAML 1.2 only types `true`/`false` as booleans, so `yes`, `off` or `1`
/// arrive as strings or integers and go through [`parse_bool`] like every
/// other input layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum BoolInput {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl BoolInput {
    pub fn resolve(&self, input: &str) -> Result<Option<bool>> {
        match self {
            BoolInput::Bool(value) => Ok(Some(*value)),
            BoolInput::Int(value) => parse_bool(input, &value.to_string()),
            BoolInput::Text(value) => parse_bool(input, value),
        }
    }
}

impl ConfigFile {
    pub fn unknown_field_warnings(&self) -> Vec<String> {
        self.unknown_fields
            .keys()
            .map(|key| format!("Unknown config field '{}' will be ignored.", key))
            .collect()
    }
}

/// Everything the binary needs besides the environment-derived search path
#[derive(Debug, Clone)]
pub struct ResolvedInputs {
    pub configuration: TaskConfiguration,
    pub tool_version: Option<String>,
    pub skip_install: bool,
    pub dry_run: bool,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| SbomTaskError::ConfigFile {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Merges command-line/environment inputs over the config file.
///
/// String values are trimmed; a value that is blank after trimming falls
/// through to the next layer.
///
/// # Errors
/// - a required path is missing in every layer
/// - a boolean input is not a recognised boolean
/// - GitHub enrichment is enabled without both credentials
pub fn resolve_inputs(args: &Args, file: Option<&ConfigFile>) -> Result<ResolvedInputs> {
    let empty = ConfigFile::default();
    let file = file.unwrap_or(&empty);

    let solution_path = first_non_blank(&[
        args.solution_file_path.as_deref(),
        args.solution_file.as_deref(),
        file.solution_file_path.as_deref(),
        file.solution_file.as_deref(),
    ])
    .ok_or_else(|| SbomTaskError::MissingInput {
        input: "solutionFilePath".to_string(),
    })?;

    let output_directory = first_non_blank(&[
        args.output_directory.as_deref(),
        file.output_directory.as_deref(),
    ])
    .ok_or_else(|| SbomTaskError::MissingInput {
        input: "outputDirectory".to_string(),
    })?;

    let mut builder = TaskConfiguration::builder()
        .solution_path(solution_path)
        .output_directory(output_directory)
        .disable_package_restore(bool_input(
            "disablePackageRestore",
            args.disable_package_restore.as_deref(),
            file.disable_package_restore.as_ref(),
        )?)
        .exclude_dev_dependencies(bool_input(
            "excludeDevDependencies",
            args.exclude_dev_dependencies.as_deref(),
            file.exclude_dev_dependencies.as_ref(),
        )?)
        .exclude_test_projects(bool_input(
            "excludeTestProjects",
            args.exclude_test_projects.as_deref(),
            file.exclude_test_projects.as_ref(),
        )?);

    if let Some(filename) = layered(args.filename.as_deref(), file.filename.as_deref()) {
        builder = builder.filename(filename);
    }
    if let Some(format) = layered(args.output_format.as_deref(), file.output_format.as_deref()) {
        builder = builder.output_format(format);
    }
    if let Some(version) = layered(args.set_version.as_deref(), file.set_version.as_deref()) {
        builder = builder.set_version(version);
    }
    if let Some(component_type) = layered(args.set_type.as_deref(), file.set_type.as_deref()) {
        builder = builder.set_type(component_type);
    }
    if let Some(list) = layered(
        args.exclude_filter_list.as_deref(),
        file.exclude_filter_list.as_deref(),
    ) {
        builder = builder.exclude_filter_list(list);
    }

    let github_enabled = bool_input(
        "enableGithubLicenses",
        args.enable_github_licenses.as_deref(),
        file.enable_github_licenses.as_ref(),
    )?;
    let github = GithubLicenseOptions {
        enabled: github_enabled,
        username: layered(args.github_username.as_deref(), file.github_username.as_deref())
            .map(str::to_string),
        token: layered(args.github_token.as_deref(), file.github_token.as_deref())
            .map(str::to_string),
    };

    let configuration = builder.github(github).build()?;

    Ok(ResolvedInputs {
        configuration,
        tool_version: layered(args.tool_version.as_deref(), file.tool_version.as_deref())
            .map(str::to_string),
        skip_install: bool_input(
            "skipInstall",
            args.skip_install.as_deref(),
            file.skip_install.as_ref(),
        )?,
        dry_run: bool_input("dryRun", args.dry_run.as_deref(), file.dry_run.as_ref())?,
    })
}

/// Home directory from `HOME`, falling back to `USERPROFILE`
pub fn home_dir_from_env() -> Option<PathBuf> {
    ["HOME", "USERPROFILE"]
        .iter()
        .filter_map(|var| env::var_os(var))
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Parses a pipeline-style boolean. Blank means "not set".
pub fn parse_bool(input: &str, value: &str) -> Result<Option<bool>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(Some(true)),
        "false" | "no" | "off" | "0" => Ok(Some(false)),
        _ => Err(SbomTaskError::Validation {
            message: format!("Input '{}' must be a boolean, got '{}'", input, value),
        }
        .into()),
    }
}

fn bool_input(input: &str, cli: Option<&str>, file: Option<&BoolInput>) -> Result<bool> {
    let from_cli = match cli {
        Some(value) => parse_bool(input, value)?,
        None => None,
    };
    if let Some(value) = from_cli {
        return Ok(value);
    }
    let from_file = match file {
        Some(value) => value.resolve(input)?,
        None => None,
    };
    Ok(from_file.unwrap_or(false))
}

fn layered<'a>(cli: Option<&'a str>, file: Option<&'a str>) -> Option<&'a str> {
    first_non_blank(&[cli, file])
}

fn first_non_blank<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
}
