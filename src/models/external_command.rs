use std::fmt;
use std::path::Path;

use crate::models::package_manager::{PackageManager, DEV_DEPENDENCIES, RUNTIME_DEPENDENCIES};
use crate::models::pipeline::PipelineStep;
use crate::models::project::ProjectLayout;

/// Directory an external command runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkingDir {
    /// The directory the project gets created in
    Parent,
    /// The generated project itself
    ProjectRoot,
}

/// A generator or installer invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    pub step: PipelineStep,
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: WorkingDir,
}

impl ExternalCommand {
    /// `npx create-next-app@<version> <name> --ts --eslint`
    pub fn create_next_app(project_name: &str, version: &str) -> Self {
        Self {
            step: PipelineStep::ScaffoldingExternalApp,
            program: "npx".to_string(),
            args: vec![
                format!("create-next-app@{version}"),
                project_name.to_string(),
                "--ts".to_string(),
                "--eslint".to_string(),
            ],
            working_dir: WorkingDir::Parent,
        }
    }

    /// Add the fixed runtime or dev dependency set
    pub fn install_dependencies(package_manager: PackageManager, dev: bool) -> Self {
        let packages = if dev { DEV_DEPENDENCIES } else { RUNTIME_DEPENDENCIES };
        let args = package_manager
            .add_args(dev)
            .into_iter()
            .chain(packages.iter().copied())
            .map(str::to_string)
            .collect();

        Self {
            step: if dev {
                PipelineStep::InstallingDevDeps
            } else {
                PipelineStep::InstallingDeps
            },
            program: package_manager.program().to_string(),
            args,
            working_dir: WorkingDir::ProjectRoot,
        }
    }

    /// `npx shadcn@<version> init`
    pub fn init_shadcn(version: &str) -> Self {
        Self {
            step: PipelineStep::InitializingUiKit,
            program: "npx".to_string(),
            args: vec![format!("shadcn@{version}"), "init".to_string()],
            working_dir: WorkingDir::ProjectRoot,
        }
    }

    /// Concrete directory this command runs in for the given layout
    pub fn cwd<'a>(&self, layout: &'a ProjectLayout) -> &'a Path {
        match self.working_dir {
            WorkingDir::Parent => layout.parent(),
            WorkingDir::ProjectRoot => layout.root(),
        }
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
