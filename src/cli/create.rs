use clap::Args;
use tracing::warn;

use crate::models::project::{resolve_project_name, ProjectLayout};
use crate::models::pipeline::PipelineStep;
use crate::services::command_runner::SystemCommandRunner;
use crate::services::orchestrator::{Orchestrator, ScaffoldReport};
use crate::utils::config::ConfigParser;
use crate::utils::error::{Result, ScaffoldError};
use crate::utils::logging::init_logging;
use crate::utils::validation::project_name_warnings;

/// Create a new Next.js project in the current directory
#[derive(Debug, Args)]
pub struct CreateCommand {
    /// Project name (default: my-next-app)
    pub project_name: Option<String>,
}

impl CreateCommand {
    /// Execute the create command
    pub async fn run(&self) -> Result<ScaffoldReport> {
        let current_dir = std::env::current_dir().map_err(|source| ScaffoldError::Filesystem {
            step: PipelineStep::Start,
            path: ".".into(),
            source,
        })?;

        let config = ConfigParser::load_from_dir(&current_dir)?;
        init_logging(&config.log_level)?;

        let project_name = resolve_project_name(self.project_name.as_deref());
        for warning in project_name_warnings(&project_name) {
            warn!("{warning}");
        }

        let layout = ProjectLayout::new(current_dir, project_name);
        let orchestrator = Orchestrator::new(SystemCommandRunner::new(), config);
        orchestrator.run(&layout).await
    }
}
