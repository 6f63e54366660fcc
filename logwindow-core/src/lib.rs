//! Core shared library for the LogWindow workspace.
//!
//! This crate exposes the primitives the service and the client both
//! depend on: common errors, configuration loading, JSON helpers and
//! logging setup.

pub mod config;
pub mod errors;
pub mod logging;
pub mod serde_utils;

pub use config::CoreConfig;
pub use errors::{ConfigError, LogWindowError, Result as CoreResult};
