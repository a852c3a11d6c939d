//! Project `.npmrc` configuration.
//!
//! Points npm at the CodeArtifact registry and installs the auth token in
//! the project-local `.npmrc`. Each setting is written by a separate
//! `npm config set` call; the calls run in order and the first failure
//! stops the sequence.

use tracing::debug;

use crate::core::config::RepositoryConfig;
use crate::core::constants;
use crate::core::registry::RegistryUrl;
use crate::core::runner::{CommandRunner, ShellCommand};
use crate::core::token::{AuthToken, TokenResolver};
use crate::error::Result;

/// Build an `npm config set` command targeting the project `.npmrc`.
fn config_set(key: &str, value: &str) -> String {
    format!(
        "{} config set {} {} --userconfig {}",
        constants::NPM,
        key,
        value,
        constants::NPMRC_FILE
    )
}

/// Command mapping the scope (or the default registry) to `registry`.
pub fn registry_command(config: &RepositoryConfig, registry: &RegistryUrl) -> ShellCommand {
    let key = match config.scope() {
        Some(scope) => format!("{}:registry", scope),
        None => "registry".to_string(),
    };
    ShellCommand::new(config_set(&key, &registry.https()))
}

/// Command enabling `always-auth` for the registry.
pub fn always_auth_command(registry: &RegistryUrl) -> ShellCommand {
    ShellCommand::new(config_set(
        &format!("{}:always-auth", registry.host_path()),
        "true",
    ))
}

/// Command installing the token for the registry.
///
/// The literal token is always passed as the mask, even when the command
/// only references the environment variable.
pub fn auth_token_command(registry: &RegistryUrl, token: &AuthToken) -> ShellCommand {
    ShellCommand::masked(
        config_set(
            &format!("{}:_authToken", registry.host_path()),
            &token.command_value(),
        ),
        token.secret(),
    )
}

/// Write registry, always-auth and token settings to the project `.npmrc`.
///
/// # Errors
///
/// Returns `ConfigError` if `accountId` or `region` is missing, or the
/// first `CommandError` raised by the runner. No command runs after a
/// failure.
pub fn configure_registry(
    config: &RepositoryConfig,
    resolver: &TokenResolver,
    runner: &mut dyn CommandRunner,
) -> Result<()> {
    let registry = RegistryUrl::from_config(config)?;
    debug!(registry = %registry, "configuring project registry");

    runner.run(&registry_command(config, &registry))?;
    runner.run(&always_auth_command(&registry))?;

    match resolver.resolve(registry.host_path())? {
        Some(token) => {
            debug!(source = token.source(), "installing auth token");
            runner.run(&auth_token_command(&registry, &token))?;
        }
        None => debug!("no auth token found, skipping"),
    }

    Ok(())
}
