//! Project configuration.
//!
//! Reads the repository coordinates from the `config.awsCodeArtifact`
//! section of `package.json`:
//!
//! ```json
//! {
//!   "config": {
//!     "awsCodeArtifact": {
//!       "domain": "my-domain",
//!       "repository": "my-repo",
//!       "scope": "@myorg",
//!       "accountId": "123456789012",
//!       "region": "us-east-1"
//!     }
//!   }
//! }
//! ```

use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// CodeArtifact repository coordinates.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryConfig {
    /// CodeArtifact domain name
    #[serde(default)]
    pub domain: String,
    /// Repository name within the domain
    #[serde(default)]
    pub repository: String,
    /// npm scope mapped to the registry, e.g. `@myorg`
    #[serde(default)]
    pub scope: Option<String>,
    /// AWS account that owns the domain, as a string or a JSON number
    #[serde(default, deserialize_with = "string_or_number")]
    pub account_id: Option<String>,
    /// AWS region of the domain
    #[serde(default)]
    pub region: Option<String>,
}

#[derive(Deserialize)]
struct Manifest {
    #[serde(default)]
    config: Option<ManifestConfig>,
}

#[derive(Deserialize)]
struct ManifestConfig {
    #[serde(rename = "awsCodeArtifact", default)]
    aws_code_artifact: Option<RepositoryConfig>,
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}

impl RepositoryConfig {
    /// Path to `package.json` in the current directory.
    pub fn manifest_path() -> PathBuf {
        PathBuf::from(constants::PACKAGE_JSON)
    }

    /// Load the configuration from `package.json` in the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed, has no
    /// `awsCodeArtifact` section, or lacks `domain` or `repository`.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::manifest_path())
    }

    /// Load the configuration from a specific manifest.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&contents)
    }

    /// Parse the configuration from manifest contents.
    pub fn parse(contents: &str) -> Result<Self> {
        let manifest: Manifest = serde_json::from_str(contents).map_err(ConfigError::Parse)?;
        let config = manifest
            .config
            .and_then(|c| c.aws_code_artifact)
            .ok_or(ConfigError::MissingSection)?;

        config.validate()?;

        debug!(
            domain = %config.domain,
            repository = %config.repository,
            scope = config.scope.as_deref().unwrap_or("-"),
            "config loaded"
        );

        Ok(config)
    }

    /// Check that the required coordinates are present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` for an empty `domain` or `repository`.
    pub fn validate(&self) -> Result<()> {
        if self.domain.is_empty() {
            return Err(ConfigError::MissingField { field: "domain" }.into());
        }
        if self.repository.is_empty() {
            return Err(ConfigError::MissingField {
                field: "repository",
            }
            .into());
        }
        Ok(())
    }

    /// Scope, if configured and non-empty.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref().filter(|s| !s.is_empty())
    }
}
