//! Configuration management infrastructure
//!
//! Layered configuration resolution:
//! - Programmatic defaults
//! - Optional YAML file, merged with figment
//! - Fixed set of environment variable overrides
//!
//! The resolved [`Config`](crate::domain::models::Config) is built in full before
//! it is returned, so callers never see a partially overlaid value.

pub mod env;
pub mod loader;
pub mod source;

pub use env::{apply_env_overrides, scan_leading_int, EnvOverride, ENV_OVERRIDES};
pub use loader::{ConfigError, ConfigLoader};
pub use source::ConfigSource;
