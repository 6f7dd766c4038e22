// Common error types for next-scaffold

use std::path::PathBuf;

use crate::models::pipeline::PipelineStep;

#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    /// The external program could not be started at all
    #[error("Failed to start `{program}` while {step}: {source}")]
    SpawnFailed {
        step: PipelineStep,
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external program ran but did not exit successfully
    #[error("`{command}` {} while {step}", describe_exit(.code))]
    CommandFailed {
        step: PipelineStep,
        command: String,
        code: Option<i32>,
    },

    #[error("Filesystem error while {step} at {}: {source}", .path.display())]
    Filesystem {
        step: PipelineStep,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

impl ScaffoldError {
    /// The pipeline step the error happened in, if it happened inside the pipeline
    pub const fn step(&self) -> Option<PipelineStep> {
        match self {
            Self::SpawnFailed { step, .. }
            | Self::CommandFailed { step, .. }
            | Self::Filesystem { step, .. } => Some(*step),
            Self::ConfigError(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// User-facing rendering of a [`ScaffoldError`] plus the process exit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub hint: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_scaffold_error(err: &ScaffoldError) -> Self {
        let (hint, exit_code) = match err {
            ScaffoldError::SpawnFailed { program, .. } => (
                Some(format!(
                    "Make sure `{program}` is installed and available on your PATH."
                )),
                1,
            ),
            // A failing generator decides the exit code of the whole run
            ScaffoldError::CommandFailed { code, .. } => (
                Some("Check the output above for error details.".to_string()),
                match code {
                    Some(code) if *code != 0 => *code,
                    _ => 1,
                },
            ),
            ScaffoldError::Filesystem { .. } => (
                Some("Check permissions and free space in the target directory.".to_string()),
                1,
            ),
            ScaffoldError::ConfigError(_) => (
                Some("Fix or remove next-scaffold.toml and try again.".to_string()),
                1,
            ),
        };

        Self {
            message: err.to_string(),
            hint,
            exit_code,
        }
    }

    pub fn print(&self) {
        eprintln!("Error: {}", self.message);
        if let Some(hint) = &self.hint {
            eprintln!("\n{hint}");
        }
    }
}
