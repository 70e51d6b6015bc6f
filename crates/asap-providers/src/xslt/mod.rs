//! External XSLT Processor
//!
//! Compiled stylesheets (SEF JSON packages) are run by an external XSLT 3.0
//! processor such as the Saxon-JS `xslt3` command. This module spawns the
//! processor and makes remote packages available as local files.

mod materialize;

pub use materialize::{ArtifactMaterializer, MaterializedArtifact, default_cache_dir};

use std::process::Stdio;

use asap_domain::error::{Error, Result};
use tokio::process::Command;

/// Output captured from one processor run
#[derive(Debug, Clone)]
pub struct ProcessorOutput {
    /// Whether the processor exited successfully
    pub success: bool,
    /// Exit code, if the process exited normally
    pub code: Option<i32>,
    /// Captured standard output
    pub stdout: Vec<u8>,
    /// Captured standard error, lossily decoded
    pub stderr: String,
}

/// Spawns the configured processor command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XsltProcessor {
    command: String,
    args: Vec<String>,
}

impl XsltProcessor {
    /// Create a processor invoking `command` with leading `args`
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    /// Executable name or path
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Run the processor with additional arguments
    ///
    /// A failure to spawn is an I/O error; a non-zero exit is reported in
    /// the returned output for the caller to classify.
    pub async fn run(&self, extra_args: &[String]) -> Result<ProcessorOutput> {
        tracing::debug!(command = %self.command, args = ?extra_args, "running XSLT processor");
        let output = Command::new(&self.command)
            .args(&self.args)
            .args(extra_args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                Error::io_with_source(
                    format!("cannot start XSLT processor '{}'", self.command),
                    e,
                )
            })?;

        Ok(ProcessorOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: output.stdout,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

impl ProcessorOutput {
    /// Short diagnostic for a failed run
    pub fn diagnostic(&self) -> String {
        let code = self
            .code
            .map_or_else(|| "signal".to_string(), |c| c.to_string());
        if self.stderr.is_empty() {
            format!("processor exited with {code}")
        } else {
            format!("processor exited with {code}: {}", self.stderr)
        }
    }
}
