use std::path::{Path, PathBuf};

/// Name used when no project name (or an empty one) is given
pub const DEFAULT_PROJECT_NAME: &str = "my-next-app";

/// Pick the project name from the first positional argument
///
/// Any non-empty string is accepted as-is.
pub fn resolve_project_name(arg: Option<&str>) -> String {
    match arg {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_PROJECT_NAME.to_string(),
    }
}

/// Where a scaffolding run happens
///
/// `parent` is the directory the scaffolder is launched from, `root` is the
/// project directory it creates. Both are resolved once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    name: String,
    parent: PathBuf,
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(parent: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        let parent = parent.into();
        let name = name.into();
        let root = parent.join(&name);
        Self { name, parent, root }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> &Path {
        &self.parent
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a path relative to the project root
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}
