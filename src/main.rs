//! codeartifact-npm - Configure npm for an AWS CodeArtifact repository.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use codeartifact_npm::cli::output;
use codeartifact_npm::cli::{execute, Cli};
use codeartifact_npm::core::constants;
use codeartifact_npm::error::{CommandError, ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("codeartifact_npm=debug")
        } else {
            EnvFilter::new("codeartifact_npm=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .init();

    if let Err(e) = execute(&cli.operation) {
        let error_msg = e.to_string();
        let suggestion = match &e {
            Error::Config(ConfigError::NotFound) => Some("run from your project root"),
            Error::Config(ConfigError::MissingSection) => {
                Some("add config.awsCodeArtifact to package.json")
            }
            Error::Command(CommandError::Spawn { .. }) => Some("check that a shell is available"),
            Error::Command(CommandError::Failed { code: Some(127), .. }) => {
                Some("install the aws and npm CLIs and make sure they are on PATH")
            }
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
