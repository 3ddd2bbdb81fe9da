use std::io;
use std::process::{Command, Stdio};

use thiserror::Error;

pub const OSASCRIPT_COMMAND: &str = "osascript";

#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to run {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program} exited with non-zero status: {status}")]
    Failed { program: String, status: String },
}

pub type RunResult<T> = std::result::Result<T, RunError>;

/// Executes a built AppleScript expression.
pub trait ScriptRunner {
    fn run(&self, script: &str) -> RunResult<()>;
}

/// Runs scripts through `osascript -e`, forwarding its stderr.
#[derive(Debug, Clone)]
pub struct Osascript {
    program: String,
}

impl Osascript {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Osascript {
    fn default() -> Self {
        Self::new(OSASCRIPT_COMMAND)
    }
}

impl ScriptRunner for Osascript {
    fn run(&self, script: &str) -> RunResult<()> {
        tracing::debug!(program = %self.program, script, "running notification script");
        let status = Command::new(&self.program)
            .args(["-e", script])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|err| RunError::Launch {
                program: self.program.clone(),
                source: err,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(RunError::Failed {
                program: self.program.clone(),
                status: status.to_string(),
            })
        }
    }
}
