//! changelog-yaml Core - Shared error types and configuration
//!
//! This crate provides the error hierarchy and the configuration system used
//! by the renderer and the command line tool.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{ChangelogYamlError, ConfigError, DocumentError, RenderError, Result};
