use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::models::pipeline::PipelineStep;
use crate::templates::TemplateFile;
use crate::utils::error::{Result, ScaffoldError};

/// Filesystem operations on a generated project
#[derive(Debug, Clone)]
pub struct ScaffoldWriter {
    root: PathBuf,
}

impl ScaffoldWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create every directory chain that does not exist yet
    pub async fn ensure_directories(&self, relative_paths: &[&str]) -> Result<()> {
        for relative in relative_paths {
            let path = self.root.join(relative);
            create_dir_all(&path, PipelineStep::CreatingDirectories).await?;
        }
        Ok(())
    }

    /// Write every template, replacing whatever is already there
    ///
    /// Returns the absolute paths written, in template order.
    pub async fn write_template_files(&self, files: &[TemplateFile]) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(files.len());

        for file in files {
            let path = self.root.join(file.path);
            if let Some(parent) = path.parent() {
                create_dir_all(parent, PipelineStep::WritingFiles).await?;
            }

            fs::write(&path, file.contents)
                .await
                .map_err(|source| ScaffoldError::Filesystem {
                    step: PipelineStep::WritingFiles,
                    path: path.clone(),
                    source,
                })?;

            debug!(path = %path.display(), bytes = file.contents.len(), "wrote template");
            written.push(path);
        }

        Ok(written)
    }

    /// Delete a file if it exists; returns whether something was removed
    pub async fn remove_file_if_present(&self, relative_path: &str) -> Result<bool> {
        let path = self.root.join(relative_path);

        let filesystem_error = |source| ScaffoldError::Filesystem {
            step: PipelineStep::RemovingStaleFile,
            path: path.clone(),
            source,
        };

        if !fs::try_exists(&path).await.map_err(filesystem_error)? {
            return Ok(false);
        }

        fs::remove_file(&path).await.map_err(filesystem_error)?;

        debug!(path = %path.display(), "removed file");
        Ok(true)
    }
}

async fn create_dir_all(path: &Path, step: PipelineStep) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|source| ScaffoldError::Filesystem {
            step,
            path: path.to_path_buf(),
            source,
        })
}
