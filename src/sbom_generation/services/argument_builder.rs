use crate::sbom_generation::domain::{OutputFormat, TaskConfiguration, DEFAULT_FILENAME};
use crate::shared::Result;

/// Arguments for the CycloneDX tool plus any non-fatal warnings raised while
/// building them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentList {
    pub args: Vec<String>,
    pub warnings: Vec<String>,
}

/// ArgumentBuilder - maps a [`TaskConfiguration`] to the CycloneDX CLI
///
/// The tool is positional-then-flagged, so order is fixed: solution path,
/// `--output`, `--filename`, format flag(s), then the optional flags.
pub struct ArgumentBuilder;

impl ArgumentBuilder {
    /// Builds the ordered argument list.
    ///
    /// The output directory is expected to exist already.
    ///
    /// # Errors
    /// Returns `GithubCredentialsMissing` when enrichment is enabled without
    /// both credentials. Unknown output formats are not errors; they fall back
    /// to `--json` with a warning.
    pub fn build(config: &TaskConfiguration) -> Result<ArgumentList> {
        let mut args: Vec<String> = Vec::new();
        let mut warnings = Vec::new();

        args.push(config.solution_path.clone());

        args.push("--output".to_string());
        args.push(config.output_directory.clone());

        let raw_filename = config.filename.as_deref().unwrap_or(DEFAULT_FILENAME);
        args.push("--filename".to_string());
        args.push(Self::sanitize_filename(raw_filename));

        let format = match OutputFormat::parse(&config.output_format) {
            Some(format) => format,
            None => {
                warnings.push(format!(
                    "Unknown outputFormat '{}', defaulting to --json",
                    config.output_format
                ));
                OutputFormat::Json
            }
        };
        args.extend(format.flags().iter().map(|f| f.to_string()));

        if config.disable_package_restore {
            args.push("--disable-package-restore".to_string());
        }
        if let Some(version) = trimmed(config.set_version.as_deref()) {
            args.push("--set-version".to_string());
            args.push(version.to_string());
        }
        if let Some(component_type) = trimmed(config.set_type.as_deref()) {
            args.push("--set-type".to_string());
            args.push(component_type.to_string());
        }

        if config.exclude_dev_dependencies {
            args.push("--exclude-dev".to_string());
        }
        if config.exclude_test_projects {
            args.push("--exclude-test-projects".to_string());
        }

        if let Some(list) = config.exclude_filter_list.as_deref() {
            let cleaned = Self::clean_exclude_list(list);
            if !cleaned.is_empty() {
                args.push("--exclude".to_string());
                args.push(cleaned);
            }
        }

        if let Some((username, token)) = config.github.credentials()? {
            args.push("--github-username".to_string());
            args.push(username.to_string());
            args.push("--github-token".to_string());
            args.push(token.to_string());
        }

        Ok(ArgumentList { args, warnings })
    }

    /// Strips path separators and surrounding whitespace.
    ///
    /// Falls back to `bom.json` if nothing is left.
    pub fn sanitize_filename(name: &str) -> String {
        let stripped: String = name.chars().filter(|c| *c != '/' && *c != '\\').collect();
        let trimmed = stripped.trim();
        if trimmed.is_empty() {
            DEFAULT_FILENAME.to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Removes all whitespace from a `name@version,name@version` list.
    pub fn clean_exclude_list(list: &str) -> String {
        list.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
