use cyclonedx_sbom_task::adapters::outbound::filesystem::{
    FileSystemDirectoryManager, PathExecutableLocator,
};
use cyclonedx_sbom_task::adapters::outbound::pipeline::SYSTEM_DEBUG_VAR;
use cyclonedx_sbom_task::adapters::outbound::process::TokioProcessRunner;
use cyclonedx_sbom_task::application::dto::SbomTaskRequest;
use cyclonedx_sbom_task::application::factories::{ReporterFactory, ReporterType};
use cyclonedx_sbom_task::application::use_cases::GenerateSbomUseCase;
use cyclonedx_sbom_task::cli::Args;
use cyclonedx_sbom_task::config::{self, ConfigFile, ResolvedInputs};
use cyclonedx_sbom_task::ports::outbound::PipelineReporter;
use cyclonedx_sbom_task::sbom_generation::domain::{ExecutionOutcome, SearchPath};
use cyclonedx_sbom_task::sbom_generation::services::dotnet_tools_dir;
use cyclonedx_sbom_task::shared::error::ExitCode;
use cyclonedx_sbom_task::shared::Result;
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_logging();

    let reporter = ReporterFactory::create(ReporterType::detect());

    let inputs = match load_inputs(&args, reporter.as_ref()) {
        Ok(inputs) => inputs,
        Err(e) => {
            let outcome = ExecutionOutcome::failure(None, format!("{:#}", e));
            reporter.error(&outcome.message);
            reporter.complete(&outcome);
            process::exit(ExitCode::ConfigurationError.as_i32());
        }
    };

    let tools_dir = config::home_dir_from_env().map(|home| dotnet_tools_dir(&home));
    log::debug!("Resolved inputs: {:?}", inputs.configuration);

    let request = SbomTaskRequest::new(inputs.configuration, SearchPath::from_env())
        .with_tool_version(inputs.tool_version)
        .with_dotnet_tools_dir(tools_dir)
        .with_skip_install(inputs.skip_install)
        .with_dry_run(inputs.dry_run);

    // Create use case with injected dependencies
    let use_case = GenerateSbomUseCase::new(
        TokioProcessRunner::new(),
        PathExecutableLocator::new(),
        FileSystemDirectoryManager::new(),
        reporter,
    );

    let outcome = use_case.execute(request).await;
    process::exit(outcome.task_exit_code().as_i32());
}

/// `RUST_LOG` wins; otherwise follow the pipeline's debug switch.
fn init_logging() {
    let default_filter = if system_debug_enabled() {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn system_debug_enabled() -> bool {
    std::env::var(SYSTEM_DEBUG_VAR)
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn load_inputs(args: &Args, reporter: &dyn PipelineReporter) -> Result<ResolvedInputs> {
    let file = load_config_file(args)?;
    if let Some(file) = &file {
        for warning in file.unknown_field_warnings() {
            reporter.warning(&warning);
        }
    }
    config::resolve_inputs(args, file.as_ref())
}

fn load_config_file(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => {
            let cwd = std::env::current_dir()?;
            config::discover_config(&cwd)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_file_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yml");
        fs::write(&path, "solutionFilePath: App.sln\n").unwrap();

        let args = Args {
            config: Some(path),
            ..Args::default()
        };

        let file = load_config_file(&args).unwrap().unwrap();
        assert_eq!(file.solution_file_path.as_deref(), Some("App.sln"));
    }

    #[test]
    fn test_load_config_file_explicit_path_missing() {
        let args = Args {
            config: Some("/nonexistent/custom.yml".into()),
            ..Args::default()
        };

        assert!(load_config_file(&args).is_err());
    }
}
