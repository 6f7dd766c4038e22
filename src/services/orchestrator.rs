use std::path::PathBuf;
use tracing::{debug, info};

use crate::models::external_command::ExternalCommand;
use crate::models::pipeline::PipelineStep;
use crate::models::project::ProjectLayout;
use crate::services::command_runner::CommandRunner;
use crate::services::scaffold_writer::ScaffoldWriter;
use crate::templates::{config_templates, page_templates, PROJECT_DIRECTORIES, STALE_ENTRY_PAGE};
use crate::utils::config::ScaffoldConfig;
use crate::utils::error::Result;

/// Printed between the route pages and the configuration files
pub const CONFIG_FILES_BANNER: &str = "🛠️ Creating configuration files...";

/// Outcome of a completed scaffolding run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub project_root: PathBuf,
    /// Absolute paths of every template written
    pub files_written: Vec<PathBuf>,
    /// Whether `create-next-app`'s entry page was found and deleted
    pub removed_stale_entry: bool,
    /// Steps that ran, ending with `Done`
    pub completed_steps: Vec<PipelineStep>,
}

/// Drives a scaffolding run from the first generator to the final message
pub struct Orchestrator<R: CommandRunner> {
    runner: R,
    config: ScaffoldConfig,
}

impl<R: CommandRunner> Orchestrator<R> {
    pub const fn new(runner: R, config: ScaffoldConfig) -> Self {
        Self { runner, config }
    }

    pub const fn runner(&self) -> &R {
        &self.runner
    }

    /// External commands in the order they run
    pub fn commands(&self, layout: &ProjectLayout) -> Vec<ExternalCommand> {
        vec![
            ExternalCommand::create_next_app(layout.name(), &self.config.next_version),
            ExternalCommand::install_dependencies(self.config.package_manager, false),
            ExternalCommand::install_dependencies(self.config.package_manager, true),
            ExternalCommand::init_shadcn(&self.config.shadcn_version),
        ]
    }

    /// Run every step; the first failure ends the run
    pub async fn run(&self, layout: &ProjectLayout) -> Result<ScaffoldReport> {
        let mut completed_steps = vec![PipelineStep::Start];
        info!(project = layout.name(), root = %layout.root().display(), "starting scaffold");

        for command in self.commands(layout) {
            announce(command.step, layout);
            self.runner.run(&command, command.cwd(layout)).await?;
            completed_steps.push(command.step);
        }

        let writer = ScaffoldWriter::new(layout.root());

        announce(PipelineStep::CreatingDirectories, layout);
        writer.ensure_directories(PROJECT_DIRECTORIES).await?;
        completed_steps.push(PipelineStep::CreatingDirectories);

        let mut files_written = writer.write_template_files(page_templates()).await?;
        println!("{CONFIG_FILES_BANNER}");
        files_written.extend(writer.write_template_files(config_templates()).await?);
        debug!(count = files_written.len(), "templates written");
        completed_steps.push(PipelineStep::WritingFiles);

        let removed_stale_entry = writer.remove_file_if_present(STALE_ENTRY_PAGE).await?;
        if removed_stale_entry {
            println!("🗑️ Removed {STALE_ENTRY_PAGE}");
        }
        completed_steps.push(PipelineStep::RemovingStaleFile);

        println!("{}", completion_message(layout.name(), &self.config));
        completed_steps.push(PipelineStep::Done);
        info!(project = layout.name(), "scaffold complete");

        Ok(ScaffoldReport {
            project_root: layout.root().to_path_buf(),
            files_written,
            removed_stale_entry,
            completed_steps,
        })
    }
}

fn announce(step: PipelineStep, layout: &ProjectLayout) {
    if let Some(banner) = step.banner(layout.name()) {
        println!("{banner}");
    }
    debug!(%step, "entering step");
}

/// Next-step instructions printed after a successful run
pub fn completion_message(project_name: &str, config: &ScaffoldConfig) -> String {
    format!(
        "✅ Setup complete! Enter the directory and start the project:\n   cd {}\n   {}",
        project_name,
        config.package_manager.dev_command()
    )
}
