//! Core library components.
//!
//! Repository configuration, token resolution and the command pipelines
//! that configure npm.

pub mod config;
pub mod constants;
pub mod login;
pub mod npmrc;
pub mod registry;
pub mod runner;
pub mod token;
