//! Constants used throughout codeartifact-npm.
//!
//! Centralizes file names, environment variables and external tool names.

/// Project manifest holding the `config.awsCodeArtifact` section.
pub const PACKAGE_JSON: &str = "package.json";

/// npm configuration file name, used both in the project and in HOME.
pub const NPMRC_FILE: &str = ".npmrc";

/// Environment variable holding a CodeArtifact auth token.
pub const TOKEN_ENV: &str = "CODEARTIFACT_AUTH_TOKEN";

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "CODEARTIFACT_NPM_LOG";

/// Replacement for secrets in logged command lines.
pub const MASK_PLACEHOLDER: &str = "<masked>";

/// Package-manager CLI.
pub const NPM: &str = "npm";

/// Cloud-provider CLI.
pub const AWS: &str = "aws";
