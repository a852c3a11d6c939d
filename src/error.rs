//! Error types.
//!
//! Every failure is fatal for the process; `main` is the only place that
//! turns an [`Error`] into an exit code.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Project configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("package.json not found in the current directory")]
    NotFound,

    #[error("failed to read package.json: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse package.json: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("No awsCodeArtifact config found")]
    MissingSection,

    #[error("Missing {field} config in awsCodeArtifact")]
    MissingField { field: &'static str },
}

/// External command errors.
///
/// The `command` fields always hold the masked command line.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command failed ({}): {command}{}", describe_status(.code, .signal), describe_output(.stdout, .stderr))]
    Failed {
        command: String,
        code: Option<i32>,
        signal: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

fn describe_status(code: &Option<i32>, signal: &Option<i32>) -> String {
    match (*code, *signal) {
        (Some(code), _) => format!("exit code {}", code),
        (None, Some(signal)) => format!("terminated by signal {}", signal),
        (None, None) => "unknown status".to_string(),
    }
}

fn describe_output(stdout: &str, stderr: &str) -> String {
    let mut out = String::new();
    for (label, text) in [("stdout", stdout), ("stderr", stderr)] {
        let text = text.trim_end();
        if !text.is_empty() {
            out.push_str(&format!("\n{}: {}", label, text));
        }
    }
    out
}

pub type Result<T> = std::result::Result<T, Error>;
