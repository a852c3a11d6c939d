//! Login command.
//!
//! Runs `aws codeartifact login --tool npm` for the configured repository.

use crate::cli::output;
use crate::core::config::RepositoryConfig;
use crate::core::login;
use crate::core::runner::ShellRunner;
use crate::error::Result;

/// Log in to CodeArtifact.
pub fn execute() -> Result<()> {
    let config = RepositoryConfig::load()?;
    login::configure_login(&config, &mut ShellRunner::new())?;
    output::success(&format!("logged in to {}/{}", config.domain, config.repository));
    Ok(())
}
