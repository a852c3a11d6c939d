//! Project npm configuration command.
//!
//! Writes registry and auth settings to `./.npmrc`. The token comes from
//! `CODEARTIFACT_AUTH_TOKEN` if set, otherwise from `~/.npmrc`.

use crate::cli::output;
use crate::core::config::RepositoryConfig;
use crate::core::npmrc;
use crate::core::runner::ShellRunner;
use crate::core::token::TokenResolver;
use crate::error::Result;

/// Configure the project `.npmrc`.
pub fn execute() -> Result<()> {
    let config = RepositoryConfig::load()?;
    let resolver = TokenResolver::from_env();
    npmrc::configure_registry(&config, &resolver, &mut ShellRunner::new())?;
    output::success("project .npmrc configured");
    Ok(())
}
