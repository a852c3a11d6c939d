//! Provider login.
//!
//! `aws codeartifact login --tool npm` fetches a token and writes registry
//! and `_authToken` entries to the user-level `~/.npmrc`.

use tracing::debug;

use crate::core::config::RepositoryConfig;
use crate::core::constants;
use crate::core::runner::{CommandRunner, ShellCommand};
use crate::error::Result;

/// Command logging npm in to the configured repository.
pub fn login_command(config: &RepositoryConfig) -> ShellCommand {
    let mut line = format!("{} codeartifact login --tool npm", constants::AWS);
    if let Some(scope) = config.scope() {
        line.push_str(&format!(" --namespace {}", scope));
    }
    line.push_str(&format!(
        " --repository {} --domain {}",
        config.repository, config.domain
    ));
    ShellCommand::new(line)
}

/// Log in to CodeArtifact for npm.
///
/// # Errors
///
/// Returns the `CommandError` raised by the runner.
pub fn configure_login(config: &RepositoryConfig, runner: &mut dyn CommandRunner) -> Result<()> {
    debug!(domain = %config.domain, repository = %config.repository, "logging in");
    runner.run(&login_command(config))
}
