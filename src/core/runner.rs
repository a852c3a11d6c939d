//! External command execution.
//!
//! Commands run one at a time through the platform shell. The logged form
//! of a command never contains its secret: every occurrence is replaced by
//! [`MASK_PLACEHOLDER`] before anything is printed or traced.

use std::fmt;
use std::process::{Command, ExitStatus};
use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::constants::MASK_PLACEHOLDER;
use crate::error::{CommandError, Result};

const FULLY_REDACTED: &str = "***";

/// Replace every occurrence of `secret` in `text` with the placeholder.
///
/// An empty secret leaves the text untouched. If the replacement would
/// re-create the secret (it overlaps the placeholder text), the whole text
/// is replaced instead.
pub fn mask_secret(text: &str, secret: &str) -> String {
    if secret.is_empty() {
        return text.to_string();
    }
    let masked = text.replace(secret, MASK_PLACEHOLDER);
    if !masked.contains(secret) {
        return masked;
    }
    // FULLY_REDACTED shares no characters with the placeholder, so one of
    // the two never contains a non-empty secret
    if MASK_PLACEHOLDER.contains(secret) {
        FULLY_REDACTED.to_string()
    } else {
        MASK_PLACEHOLDER.to_string()
    }
}

/// A shell command line with an optional secret to keep out of logs.
#[derive(Clone)]
pub struct ShellCommand {
    line: Zeroizing<String>,
    mask: Option<Zeroizing<String>>,
}

impl ShellCommand {
    /// Command without secrets.
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: Zeroizing::new(line.into()),
            mask: None,
        }
    }

    /// Command whose log output must not contain `secret`.
    pub fn masked(line: impl Into<String>, secret: &str) -> Self {
        Self {
            line: Zeroizing::new(line.into()),
            mask: (!secret.is_empty()).then(|| Zeroizing::new(secret.to_string())),
        }
    }

    /// The exact line handed to the shell.
    pub fn line(&self) -> &str {
        self.line.as_str()
    }

    /// Whether a secret is attached.
    pub fn is_masked(&self) -> bool {
        self.mask.is_some()
    }

    /// Apply this command's mask to arbitrary text.
    pub fn redact(&self, text: &str) -> String {
        match &self.mask {
            Some(secret) => mask_secret(text, secret),
            None => text.to_string(),
        }
    }

    /// Loggable form of the command line.
    pub fn display(&self) -> String {
        self.redact(self.line())
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl fmt::Debug for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShellCommand")
            .field("line", &self.display())
            .field("masked", &self.is_masked())
            .finish()
    }
}

/// Executes shell commands.
pub trait CommandRunner {
    /// Run a command to completion.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` if the command cannot be started or does not
    /// exit successfully.
    fn run(&mut self, command: &ShellCommand) -> Result<()>;
}

/// Runs commands through `sh -c` (or `cmd /C` on Windows).
///
/// The child inherits the environment and working directory, so `${VAR}`
/// references in the command line are expanded by the shell.
#[derive(Debug, Default)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(unix)]
fn shell(line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(line);
    cmd
}

#[cfg(windows)]
fn shell(line: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(line);
    cmd
}

#[cfg(unix)]
fn signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal(_status: &ExitStatus) -> Option<i32> {
    None
}

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &ShellCommand) -> Result<()> {
        let shown = command.display();
        output::running(&shown);
        debug!(command = %shown, masked = command.is_masked(), "running command");

        let result = shell(command.line())
            .output()
            .map_err(|source| CommandError::Spawn {
                command: shown.clone(),
                source,
            })?;

        let stdout = command.redact(&String::from_utf8_lossy(&result.stdout));
        let stderr = command.redact(&String::from_utf8_lossy(&result.stderr));

        if !result.status.success() {
            debug!(status = %result.status, "command failed");
            return Err(CommandError::Failed {
                command: shown,
                code: result.status.code(),
                signal: signal(&result.status),
                stdout,
                stderr,
            }
            .into());
        }

        // Successful commands may still write diagnostics to stderr
        if !stdout.is_empty() {
            output::stream("stdout:", &stdout);
        }
        if !stderr.is_empty() {
            output::stream("stderr:", &stderr);
        }

        Ok(())
    }
}
