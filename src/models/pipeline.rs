use std::fmt;

/// Stages of a scaffolding run, in execution order
///
/// Every transition happens only after the previous stage succeeded; any
/// failure ends the run in the stage it happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStep {
    Start,
    /// `create-next-app` generating the base project
    ScaffoldingExternalApp,
    /// Installing runtime dependencies
    InstallingDeps,
    /// Installing development-only dependencies
    InstallingDevDeps,
    /// `shadcn init` configuring the component library
    InitializingUiKit,
    CreatingDirectories,
    WritingFiles,
    /// Deleting the entry page left behind by `create-next-app`
    RemovingStaleFile,
    Done,
}

impl PipelineStep {
    /// All steps, from `Start` to `Done`
    pub const ALL: [Self; 9] = [
        Self::Start,
        Self::ScaffoldingExternalApp,
        Self::InstallingDeps,
        Self::InstallingDevDeps,
        Self::InitializingUiKit,
        Self::CreatingDirectories,
        Self::WritingFiles,
        Self::RemovingStaleFile,
        Self::Done,
    ];

    /// The step that follows this one on success
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Start => Some(Self::ScaffoldingExternalApp),
            Self::ScaffoldingExternalApp => Some(Self::InstallingDeps),
            Self::InstallingDeps => Some(Self::InstallingDevDeps),
            Self::InstallingDevDeps => Some(Self::InitializingUiKit),
            Self::InitializingUiKit => Some(Self::CreatingDirectories),
            Self::CreatingDirectories => Some(Self::WritingFiles),
            Self::WritingFiles => Some(Self::RemovingStaleFile),
            Self::RemovingStaleFile => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// Progress line printed when entering this step, if the step announces itself
    pub fn banner(self, project_name: &str) -> Option<String> {
        match self {
            Self::ScaffoldingExternalApp => {
                Some(format!("🚀 Creating Next.js project: {project_name}..."))
            }
            Self::InstallingDeps => Some("📦 Installing dependencies...".to_string()),
            Self::InitializingUiKit => Some("🎨 Configuring shadcn/ui...".to_string()),
            Self::CreatingDirectories => {
                Some("🛠️ Creating directory structure and files...".to_string())
            }
            _ => None,
        }
    }
}

impl fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Start => "starting",
            Self::ScaffoldingExternalApp => "scaffolding the Next.js app",
            Self::InstallingDeps => "installing dependencies",
            Self::InstallingDevDeps => "installing dev dependencies",
            Self::InitializingUiKit => "initializing shadcn/ui",
            Self::CreatingDirectories => "creating directories",
            Self::WritingFiles => "writing template files",
            Self::RemovingStaleFile => "removing the default entry page",
            Self::Done => "finishing",
        };
        f.write_str(text)
    }
}
