//! Registry URL derivation.

use std::fmt;

use crate::core::config::RepositoryConfig;
use crate::error::{ConfigError, Result};

/// CodeArtifact npm registry location for one repository.
///
/// npm keys per-registry settings by the URL without its protocol
/// (`//host/path/`), so both forms are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryUrl {
    host_path: String,
}

impl RegistryUrl {
    /// Build the registry location from explicit coordinates.
    pub fn new(domain: &str, account_id: &str, region: &str, repository: &str) -> Self {
        Self {
            host_path: format!(
                "//{}-{}.d.codeartifact.{}.amazonaws.com/npm/{}/",
                domain, account_id, region, repository
            ),
        }
    }

    /// Derive the registry location from the project configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` if `accountId` or `region` is not set.
    pub fn from_config(config: &RepositoryConfig) -> Result<Self> {
        let account_id = config
            .account_id
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingField { field: "accountId" })?;
        let region = config
            .region
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingField { field: "region" })?;

        Ok(Self::new(
            &config.domain,
            account_id,
            region,
            &config.repository,
        ))
    }

    /// Host and path without protocol, e.g. `//d-1.d.codeartifact.../npm/r/`.
    pub fn host_path(&self) -> &str {
        &self.host_path
    }

    /// Full HTTPS URL.
    pub fn https(&self) -> String {
        format!("https:{}", self.host_path)
    }
}

impl fmt::Display for RegistryUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.https())
    }
}
