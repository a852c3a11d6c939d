//! codeartifact-npm - Configure npm for an AWS CodeArtifact repository.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── login         # aws codeartifact login
//! │   ├── npm_config    # project .npmrc setup
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # package.json awsCodeArtifact section
//!     ├── registry      # Registry URL derivation
//!     ├── runner        # Shell command execution with secret masking
//!     ├── token         # Auth token resolution
//!     ├── npmrc         # npm config set pipeline
//!     └── login         # Login command
//! ```
//!
//! # Operations
//!
//! - `login` runs `aws codeartifact login --tool npm` for the repository
//! - `npm-project-config` writes the registry, `always-auth` and
//!   `_authToken` settings to the project `.npmrc`, taking the token from
//!   `CODEARTIFACT_AUTH_TOKEN` or `~/.npmrc`

pub mod cli;
pub mod core;
pub mod error;
