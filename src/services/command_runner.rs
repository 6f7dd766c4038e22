use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

use crate::models::external_command::ExternalCommand;
use crate::utils::error::{Result, ScaffoldError};

/// Runs external generators and installers
///
/// The orchestrator only needs to know whether a command succeeded; output
/// goes straight to the user's terminal.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` in `cwd` and wait for it to exit
    async fn run(&self, command: &ExternalCommand, cwd: &Path) -> Result<()>;
}

/// Spawns real child processes with inherited stdio
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub const fn new() -> Self {
        Self
    }

    fn build_process(command: &ExternalCommand, cwd: &Path) -> Command {
        // npx and yarn are .cmd shims on Windows
        let mut process = if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&command.program);
            cmd
        } else {
            Command::new(&command.program)
        };

        process
            .args(&command.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        process
    }
}

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(&self, command: &ExternalCommand, cwd: &Path) -> Result<()> {
        info!(step = %command.step, cwd = %cwd.display(), "running {}", command);

        let status = Self::build_process(command, cwd)
            .status()
            .await
            .map_err(|source| ScaffoldError::SpawnFailed {
                step: command.step,
                program: command.program.clone(),
                source,
            })?;

        debug!(status = %status, "{} finished", command.program);

        if status.success() {
            Ok(())
        } else {
            Err(ScaffoldError::CommandFailed {
                step: command.step,
                command: command.to_string(),
                code: status.code(),
            })
        }
    }
}
