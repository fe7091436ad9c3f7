//! Configuration data model

pub mod config;

pub use config::{CacheConfig, Config, DatabaseConfig, JwtConfig, LoggingConfig, ServerConfig};
