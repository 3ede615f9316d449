//! Go toolchain adapter.
//!
//! Runs `go mod init <identifier>` and `go mod tidy` in the destination
//! directory. A failed command surfaces its trimmed stderr as diagnostics.

use std::{
    io::{self, Read},
    path::Path,
    process::{Command, Output, Stdio},
    thread,
    time::Duration,
};

use tracing::{debug, instrument};
use wait_timeout::ChildExt;

use skel_core::{
    application::{ApplicationError, ports::ModuleTool},
    domain::ModuleIdentifier,
    error::SkelResult,
};

/// Default name of the Go binary, resolved through `PATH`.
pub const DEFAULT_GO_BINARY: &str = "go";

/// [`ModuleTool`] backed by the `go` command.
///
/// Without a timeout each call blocks until the command exits. With one, the
/// child is killed once it elapses and the call fails.
#[derive(Debug, Clone)]
pub struct GoModuleTool {
    binary: String,
    timeout: Option<Duration>,
}

impl GoModuleTool {
    pub fn new() -> Self {
        Self {
            binary: DEFAULT_GO_BINARY.to_string(),
            timeout: None,
        }
    }

    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Run `<binary> <args>` in `workdir`; `Err` carries the diagnostics.
    fn run(&self, args: &[&str], workdir: &Path) -> Result<(), String> {
        debug!(binary = %self.binary, ?args, workdir = %workdir.display(), "running module tool");

        let output = self
            .output(args, workdir)
            .map_err(|e| format!("failed to run `{}`: {e}", self.binary))?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
        if stderr.is_empty() {
            Err(format!("`{} {}` exited with {}", self.binary, args.join(" "), output.status))
        } else {
            Err(stderr)
        }
    }

    fn output(&self, args: &[&str], workdir: &Path) -> io::Result<Output> {
        let mut cmd = Command::new(&self.binary);
        cmd.args(args).current_dir(workdir);

        let Some(timeout) = self.timeout else {
            return cmd.output();
        };

        let mut child = cmd.stdout(Stdio::null()).stderr(Stdio::piped()).spawn()?;

        // Drain stderr while waiting so a chatty tool never blocks on a full pipe.
        let stderr = child.stderr.take().map(|mut pipe| {
            thread::spawn(move || {
                let mut buf = Vec::new();
                pipe.read_to_end(&mut buf).map(|_| buf)
            })
        });

        match child.wait_timeout(timeout)? {
            Some(status) => {
                let stderr = match stderr {
                    Some(reader) => reader
                        .join()
                        .map_err(|_| io::Error::other("stderr reader panicked"))??,
                    None => Vec::new(),
                };

                Ok(Output {
                    status,
                    stdout: Vec::new(),
                    stderr,
                })
            }
            None => {
                let _ = child.kill();
                let _ = child.wait();
                Err(io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("timed out after {} seconds", timeout.as_secs_f32()),
                ))
            }
        }
    }
}

impl Default for GoModuleTool {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleTool for GoModuleTool {
    #[instrument(skip(self, workdir), fields(workdir = %workdir.display()))]
    fn initialize(&self, workdir: &Path, identifier: &ModuleIdentifier) -> SkelResult<()> {
        self.run(&["mod", "init", identifier.as_str()], workdir)
            .map_err(|diagnostics| ApplicationError::ModuleInit { diagnostics }.into())
    }

    #[instrument(skip(self, workdir), fields(workdir = %workdir.display()))]
    fn resolve_dependencies(&self, workdir: &Path) -> SkelResult<()> {
        self.run(&["mod", "tidy"], workdir)
            .map_err(|diagnostics| ApplicationError::DependencyResolution { diagnostics }.into())
    }
}
