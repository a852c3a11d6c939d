//! Command-line interface.

pub mod login;
pub mod npm_config;
pub mod output;

use clap::Parser;
use tracing::debug;

use crate::error::Result;

/// codeartifact-npm - Configure npm for an AWS CodeArtifact repository.
#[derive(Parser)]
#[command(
    name = "codeartifact-npm",
    about = "Configure npm to authenticate against an AWS CodeArtifact repository",
    version,
    after_help = "Operations:\n  login               Log in with `aws codeartifact login --tool npm`\n  npm-project-config  Write registry and token settings to ./.npmrc"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Operation to perform (login, npm-project-config)
    #[arg(default_value = "default")]
    pub operation: String,
}

/// Known operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Log in to CodeArtifact through the AWS CLI
    Login,
    /// Configure the project `.npmrc`
    NpmProjectConfig,
    /// Anything else
    Unknown(String),
}

impl Operation {
    pub fn parse(name: &str) -> Self {
        match name {
            "login" => Self::Login,
            "npm-project-config" => Self::NpmProjectConfig,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Execute an operation by name.
///
/// Unknown operations are reported and treated as success.
pub fn execute(operation: &str) -> Result<()> {
    debug!(operation, "processing operation");

    match Operation::parse(operation) {
        Operation::Login => login::execute(),
        Operation::NpmProjectConfig => npm_config::execute(),
        Operation::Unknown(name) => {
            output::warn(&format!("command not found: {}", name));
            Ok(())
        }
    }
}
