//! Printable view of a resolved snapshot

use anyhow::{Context, Result};
use serde::Serialize;

use super::types::OutputFormat;
use crate::domain::models::config::{CacheConfig, Config};

/// Redacted snapshot plus the values derived from it
#[derive(Debug, Serialize)]
pub struct ConfigReport {
    /// Snapshot with secrets masked
    pub config: Config,

    /// Derived values as downstream components see them
    pub derived: DerivedValues,
}

/// Values computed from the snapshot rather than stored in it
#[derive(Debug, Serialize)]
pub struct DerivedValues {
    /// Database connection string, password masked
    ///
    /// An empty password stays empty (`root:@tcp(...)`), so an account without
    /// a password is still recognisable; any other password shows as `***`.
    pub dsn: String,

    /// Cache tunables after clamping
    pub cache: EffectiveCache,
}

/// Cache tunables as returned by the clamping accessors
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct EffectiveCache {
    /// Session binding TTL
    pub session_ttl_minutes: i64,
    /// Session renewal threshold
    pub session_renewal_ttl_minutes: i64,
    /// Temporary-unavailability TTL
    pub unavailable_ttl_minutes: i64,
    /// Concurrency counter TTL
    pub concurrency_ttl_minutes: i64,
    /// Concurrency ceiling for keys without an explicit limit
    pub default_concurrency_max: i64,
}

impl From<&CacheConfig> for EffectiveCache {
    fn from(cache: &CacheConfig) -> Self {
        Self {
            session_ttl_minutes: cache.session_ttl(),
            session_renewal_ttl_minutes: cache.session_renewal_ttl(),
            unavailable_ttl_minutes: cache.unavailable_ttl(),
            concurrency_ttl_minutes: cache.concurrency_ttl(),
            default_concurrency_max: cache.default_concurrency_max(),
        }
    }
}

impl ConfigReport {
    /// Build a report; secrets never leave this function unmasked
    pub fn new(config: &Config) -> Self {
        let redacted = config.redacted();
        let derived = DerivedValues {
            dsn: redacted.database.dsn(),
            cache: EffectiveCache::from(&redacted.cache),
        };

        Self {
            config: redacted,
            derived,
        }
    }

    /// Serialize in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Yaml => serde_yaml::to_string(self).context("Failed to render YAML"),
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to render JSON")
            }
        }
    }
}
