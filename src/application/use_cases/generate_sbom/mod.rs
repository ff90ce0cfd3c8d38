use crate::application::dto::SbomTaskRequest;
use crate::ports::outbound::{DirectoryManager, ExecutableLocator, PipelineReporter, ProcessRunner};
use crate::sbom_generation::domain::{
    ExecutionOutcome, SearchPath, ToolInvocation, SUCCESS_MESSAGE,
};
use crate::sbom_generation::services::{
    ArgumentBuilder, ArgumentList, BinaryResolver, ProvisioningOutcome, ToolProvisioner,
};
use crate::shared::error::SbomTaskError;
use crate::shared::Result;


/// Message reported when a dry run completes
pub const DRY_RUN_MESSAGE: &str = "Dry run: CycloneDX invocation validated.";

/// GenerateSbomUseCase - runs the task from provisioning to the final report
///
/// The run moves strictly forward through Provisioning, Resolving, Invoking
/// and Reporting. There are no retries here; the only fallback lives inside
/// provisioning. Every failure funnels into a single `complete` call.
///
/// # Type Parameters
/// * `PR` - ProcessRunner implementation
/// * `EL` - ExecutableLocator implementation
/// * `DM` - DirectoryManager implementation
/// * `R` - PipelineReporter implementation
pub struct GenerateSbomUseCase<PR, EL, DM, R> {
    process_runner: PR,
    executable_locator: EL,
    directory_manager: DM,
    reporter: R,
}

impl<PR, EL, DM, R> GenerateSbomUseCase<PR, EL, DM, R>
where
    PR: ProcessRunner,
    EL: ExecutableLocator,
    DM: DirectoryManager,
    R: PipelineReporter,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(
        process_runner: PR,
        executable_locator: EL,
        directory_manager: DM,
        reporter: R,
    ) -> Self {
        Self {
            process_runner,
            executable_locator,
            directory_manager,
            reporter,
        }
    }

    /// Executes the task and reports exactly one terminal outcome.
    ///
    /// Never returns an error: failures become an `ExecutionOutcome` with
    /// `TaskResult::Failed` and the error's message.
    pub async fn execute(&self, request: SbomTaskRequest) -> ExecutionOutcome {
        if let Some(token) = request.configuration.github.token.as_deref() {
            self.reporter.register_secret(token);
        }

        let outcome = match self.run(&request).await {
            Ok(outcome) => outcome,
            Err(err) => {
                let outcome = Self::failure_outcome(&err);
                self.reporter.error(&outcome.message);
                outcome
            }
        };

        self.reporter.complete(&outcome);
        outcome
    }

    async fn run(&self, request: &SbomTaskRequest) -> Result<ExecutionOutcome> {
        let config = &request.configuration;
        config.validate()?;

        // Provisioning
        let search_path = self.provision(request).await;

        // Resolving
        let program = BinaryResolver::new(&self.executable_locator).resolve(&search_path);
        self.reporter
            .debug(&format!("Using CycloneDX binary: {}", program.display()));

        // Invoking
        self.directory_manager
            .ensure_directory(config.output_directory_path())?;

        let ArgumentList { args, warnings } = ArgumentBuilder::build(config)?;
        for warning in &warnings {
            self.reporter.warning(warning);
        }

        let invocation = ToolInvocation::new(program, args);
        self.reporter
            .debug(&format!("Final CycloneDX args: {:?}", invocation.redacted_args()));

        if request.dry_run {
            let planned = serde_json::to_string_pretty(&invocation)?;
            self.reporter.info(&planned);
            return Ok(ExecutionOutcome::success(None, DRY_RUN_MESSAGE));
        }

        let code = self.process_runner.run(&invocation, &search_path).await?;
        if code != 0 {
            return Err(SbomTaskError::ToolExitedWithCode { code }.into());
        }

        Ok(ExecutionOutcome::success(Some(code), SUCCESS_MESSAGE))
    }

    /// Prepends the tools directory and runs update/install unless skipped.
    ///
    /// Returns the search path every later state uses.
    async fn provision(&self, request: &SbomTaskRequest) -> SearchPath {
        let provisioner = ToolProvisioner::new(
            &self.process_runner,
            &self.directory_manager,
            &self.reporter,
        );

        let search_path =
            provisioner.prepare_search_path(request.dotnet_tools_dir.as_deref(), &request.search_path);

        if request.skip_install || request.dry_run {
            self.reporter
                .debug("Skipping CycloneDX tool update/install.");
            return search_path;
        }

        match provisioner
            .provision(request.tool_version.as_deref(), &search_path)
            .await
        {
            ProvisioningOutcome::Updated => self.reporter.debug("CycloneDX tool is up to date."),
            ProvisioningOutcome::Installed => self.reporter.debug("CycloneDX tool installed."),
            ProvisioningOutcome::Unavailable => {}
        }

        search_path
    }

    /// Best-effort message for any failure; keeps the tool's exit code when known
    fn failure_outcome(err: &anyhow::Error) -> ExecutionOutcome {
        let exit_code = match err.downcast_ref::<SbomTaskError>() {
            Some(SbomTaskError::ToolExitedWithCode { code }) => Some(*code),
            _ => None,
        };
        ExecutionOutcome::failure(exit_code, format!("{:#}", err))
    }
}
