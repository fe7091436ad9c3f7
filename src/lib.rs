//! aiproxy-config - runtime configuration for the aiproxy server
//!
//! Resolves one immutable [`Config`] snapshot from three layers, lowest
//! precedence first:
//!
//! 1. Built-in defaults, enough to start with no external configuration
//! 2. An optional YAML file
//! 3. A fixed set of environment variables (`PORT`, `DB_HOST`, `DB_PORT`,
//!    `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `JWT_SECRET`, `LOG_DIR`, `LOG_LEVEL`)
//!
//! The snapshot is resolved once at startup and handed to consumers behind an
//! `Arc`. Cache tunables are only readable through clamping accessors, and the
//! database section derives the connection string.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the configuration data model and derived values
//! - **Infrastructure Layer** (`infrastructure`): file/env resolution and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use aiproxy_config::ConfigLoader;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(ConfigLoader::resolve("config.yaml")?);
//!     println!("listening on {}", config.server.port);
//!     println!("session ttl {} min", config.cache.session_ttl());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{
    CacheConfig, Config, DatabaseConfig, JwtConfig, LoggingConfig, ServerConfig,
};
pub use infrastructure::config::{ConfigError, ConfigLoader, ConfigSource};
pub use infrastructure::logging::{LogConfig, LoggerImpl};
