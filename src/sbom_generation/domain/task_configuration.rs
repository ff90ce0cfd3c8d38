use crate::shared::error::SbomTaskError;
use crate::shared::Result;
use std::fmt;
use std::path::Path;

/// Filename used when the `filename` input is absent or blank
pub const DEFAULT_FILENAME: &str = "bom.json";

/// Output format used when the `outputFormat` input is absent or blank
pub const DEFAULT_OUTPUT_FORMAT: &str = "json";

/// GitHub license enrichment options.
///
/// Enabling enrichment requires both credentials; the pair is checked by
/// [`GithubLicenseOptions::credentials`] before any process is spawned.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct GithubLicenseOptions {
    pub enabled: bool,
    pub username: Option<String>,
    pub token: Option<String>,
}

impl GithubLicenseOptions {
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn enabled(username: Option<String>, token: Option<String>) -> Self {
        Self {
            enabled: true,
            username,
            token,
        }
    }

    /// Returns the credential pair when enrichment is enabled.
    ///
    /// # Errors
    /// Returns `GithubCredentialsMissing` if enrichment is enabled and either
    /// the username or the token is absent or blank.
    pub fn credentials(&self) -> Result<Option<(&str, &str)>> {
        if !self.enabled {
            return Ok(None);
        }

        let username = non_blank(self.username.as_deref());
        let token = non_blank(self.token.as_deref());

        match (username, token) {
            (Some(username), Some(token)) => Ok(Some((username, token))),
            _ => Err(SbomTaskError::GithubCredentialsMissing.into()),
        }
    }
}

// The token must never reach logs through a derived Debug.
impl fmt::Debug for GithubLicenseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubLicenseOptions")
            .field("enabled", &self.enabled)
            .field("username", &self.username)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}

/// TaskConfiguration - every recognised task input for a single run
///
/// Built once at the input boundary and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskConfiguration {
    /// Solution or project file (or directory) handed to the tool unmodified
    pub solution_path: String,
    /// Directory the tool writes the SBOM into; created before invocation
    pub output_directory: String,
    /// Raw `filename` input, sanitised by the argument builder
    pub filename: Option<String>,
    /// Raw `outputFormat` input (`json` | `xml` | `unsafeJson`)
    pub output_format: String,
    pub disable_package_restore: bool,
    pub set_version: Option<String>,
    pub set_type: Option<String>,
    pub exclude_dev_dependencies: bool,
    pub exclude_test_projects: bool,
    /// Comma separated `name@version` pairs, whitespace tolerated
    pub exclude_filter_list: Option<String>,
    pub github: GithubLicenseOptions,
}

impl TaskConfiguration {
    pub fn builder() -> TaskConfigurationBuilder {
        TaskConfigurationBuilder::default()
    }

    pub fn output_directory_path(&self) -> &Path {
        Path::new(&self.output_directory)
    }

    /// Checks the invariants that must hold before anything is spawned.
    ///
    /// # Errors
    /// - `MissingInput` when a required path is empty
    /// - `GithubCredentialsMissing` when enrichment lacks a credential
    pub fn validate(&self) -> Result<()> {
        if self.solution_path.trim().is_empty() {
            return Err(SbomTaskError::MissingInput {
                input: "solutionFilePath".to_string(),
            }
            .into());
        }
        if self.output_directory.trim().is_empty() {
            return Err(SbomTaskError::MissingInput {
                input: "outputDirectory".to_string(),
            }
            .into());
        }
        self.github.credentials()?;
        Ok(())
    }
}

/// Builder for [`TaskConfiguration`]
#[derive(Debug, Default)]
pub struct TaskConfigurationBuilder {
    solution_path: Option<String>,
    output_directory: Option<String>,
    filename: Option<String>,
    output_format: Option<String>,
    disable_package_restore: bool,
    set_version: Option<String>,
    set_type: Option<String>,
    exclude_dev_dependencies: bool,
    exclude_test_projects: bool,
    exclude_filter_list: Option<String>,
    github: GithubLicenseOptions,
}

impl TaskConfigurationBuilder {
    pub fn solution_path(mut self, path: impl Into<String>) -> Self {
        self.solution_path = Some(path.into());
        self
    }

    pub fn output_directory(mut self, path: impl Into<String>) -> Self {
        self.output_directory = Some(path.into());
        self
    }

    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn output_format(mut self, format: impl Into<String>) -> Self {
        self.output_format = Some(format.into());
        self
    }

    pub fn disable_package_restore(mut self, value: bool) -> Self {
        self.disable_package_restore = value;
        self
    }

    pub fn set_version(mut self, version: impl Into<String>) -> Self {
        self.set_version = Some(version.into());
        self
    }

    pub fn set_type(mut self, component_type: impl Into<String>) -> Self {
        self.set_type = Some(component_type.into());
        self
    }

    pub fn exclude_dev_dependencies(mut self, value: bool) -> Self {
        self.exclude_dev_dependencies = value;
        self
    }

    pub fn exclude_test_projects(mut self, value: bool) -> Self {
        self.exclude_test_projects = value;
        self
    }

    pub fn exclude_filter_list(mut self, list: impl Into<String>) -> Self {
        self.exclude_filter_list = Some(list.into());
        self
    }

    pub fn github(mut self, github: GithubLicenseOptions) -> Self {
        self.github = github;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// Blank optional strings are normalised to `None`; a blank or absent
    /// output format becomes `json`.
    pub fn build(self) -> Result<TaskConfiguration> {
        let configuration = TaskConfiguration {
            solution_path: self.solution_path.unwrap_or_default(),
            output_directory: self.output_directory.unwrap_or_default(),
            filename: into_non_blank(self.filename),
            output_format: into_non_blank(self.output_format)
                .unwrap_or_else(|| DEFAULT_OUTPUT_FORMAT.to_string()),
            disable_package_restore: self.disable_package_restore,
            set_version: into_non_blank(self.set_version),
            set_type: into_non_blank(self.set_type),
            exclude_dev_dependencies: self.exclude_dev_dependencies,
            exclude_test_projects: self.exclude_test_projects,
            exclude_filter_list: into_non_blank(self.exclude_filter_list),
            github: self.github,
        };
        configuration.validate()?;
        Ok(configuration)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn into_non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
