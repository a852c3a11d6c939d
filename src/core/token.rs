//! Auth token resolution.
//!
//! The token comes from `CODEARTIFACT_AUTH_TOKEN` when it is set, otherwise
//! from the `_authToken` entry that `aws codeartifact login` writes to the
//! user-level `~/.npmrc`.

use regex::Regex;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::Result;

/// A resolved auth token and where it came from.
pub enum AuthToken {
    /// Set in the process environment.
    Environment(Zeroizing<String>),
    /// Read from the user-level npm config.
    UserConfig(Zeroizing<String>),
}

impl AuthToken {
    /// The literal token value.
    pub fn secret(&self) -> &str {
        match self {
            Self::Environment(value) | Self::UserConfig(value) => value.as_str(),
        }
    }

    /// Value to place in a generated command.
    ///
    /// Environment tokens are referenced by variable name so the shell
    /// substitutes them; file tokens are used literally.
    pub fn command_value(&self) -> Zeroizing<String> {
        match self {
            Self::Environment(_) => Zeroizing::new(format!("${{{}}}", constants::TOKEN_ENV)),
            Self::UserConfig(value) => value.clone(),
        }
    }

    /// Short name of the source, for logging.
    pub fn source(&self) -> &'static str {
        match self {
            Self::Environment(_) => "environment",
            Self::UserConfig(_) => "user config",
        }
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthToken({}, <masked>)", self.source())
    }
}

/// Finds the token to install for a registry.
#[derive(Debug, Clone, Default)]
pub struct TokenResolver {
    env_token: Option<String>,
    user_config: Option<PathBuf>,
}

impl TokenResolver {
    /// Build a resolver from explicit inputs.
    pub fn new(env_token: Option<String>, user_config: Option<PathBuf>) -> Self {
        Self {
            env_token,
            user_config,
        }
    }

    /// Build a resolver from `CODEARTIFACT_AUTH_TOKEN` and `~/.npmrc`.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(constants::TOKEN_ENV).ok(),
            dirs::home_dir().map(|home| home.join(constants::NPMRC_FILE)),
        )
    }

    /// Resolve the token for `host_path` (e.g. `//host/npm/repo/`).
    ///
    /// Returns `Ok(None)` when neither source provides a token.
    ///
    /// # Errors
    ///
    /// Returns an io error if the user config exists but cannot be read.
    pub fn resolve(&self, host_path: &str) -> Result<Option<AuthToken>> {
        if let Some(value) = self.env_token.as_deref().filter(|v| !v.is_empty()) {
            debug!(source = "environment", "auth token found");
            return Ok(Some(AuthToken::Environment(Zeroizing::new(
                value.to_string(),
            ))));
        }

        let Some(path) = &self.user_config else {
            debug!("no home directory, skipping user config");
            return Ok(None);
        };

        let token = scan_user_config(path, host_path)?;
        debug!(
            path = %path.display(),
            found = token.is_some(),
            "scanned user config"
        );
        Ok(token.map(AuthToken::UserConfig))
    }
}

/// Scan an npmrc file for `{host_path}:_authToken=VALUE`.
///
/// Every matching line replaces the previous match, so the last one wins.
/// An empty final value or a missing file yields `None`. Lines that are not
/// valid UTF-8 are decoded lossily and scanning continues.
pub fn scan_user_config(path: &Path, host_path: &str) -> Result<Option<Zeroizing<String>>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let pattern = token_pattern(host_path)?;
    let mut token = Zeroizing::new(String::new());

    for raw in BufReader::new(file).split(b'\n') {
        let mut raw = Zeroizing::new(raw?);
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        let line = Zeroizing::new(String::from_utf8_lossy(&raw).into_owned());
        if let Some(caps) = pattern.captures(&line) {
            token = Zeroizing::new(caps[1].to_string());
        }
    }

    Ok((!token.is_empty()).then_some(token))
}

fn token_pattern(host_path: &str) -> Result<Regex> {
    let pattern = format!("^{}:_authToken=(.*)", regex::escape(host_path));
    Ok(Regex::new(&pattern)?)
}
