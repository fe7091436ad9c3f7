use figment::providers::Serialized;
use figment::Figment;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::env::apply_env_overrides;
use super::source::ConfigSource;
use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but its contents do not deserialize into [`Config`]
    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying decode or YAML error
        #[source]
        source: ParseFailure,
    },
}

/// Configuration loader with layered merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Config file used when no path is given
    pub const DEFAULT_PATH: &'static str = "config.yaml";

    /// Resolve the configuration snapshot
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. YAML file at `path`, skipped when it does not exist
    /// 3. Environment variables (`PORT`, `DB_*`, `JWT_SECRET`, `LOG_*`)
    ///
    /// Nothing is returned unless every layer applied; a malformed file fails
    /// the whole resolution.
    pub fn resolve(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        Self::resolve_with(path, |name| env::var(name).ok())
    }

    /// Resolve using `lookup` in place of the process environment
    pub fn resolve_with<F>(path: impl AsRef<Path>, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        let source = ConfigSource::read(path);
        let mut config = Self::load_file(path, &source)?;
        let overrides = apply_env_overrides(&mut config, lookup);

        tracing::info!(
            path = %path.display(),
            source = source.label(),
            env_overrides = overrides,
            "configuration resolved"
        );

        Ok(config)
    }

    /// Defaults with the file layer applied, before environment overrides
    pub fn load_file(path: &Path, source: &ConfigSource) -> Result<Config, ConfigError> {
        let bytes = match source {
            ConfigSource::Loaded(bytes) => bytes,
            ConfigSource::Missing => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Config::default());
            }
            ConfigSource::Unreadable(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "config file unreadable, using defaults"
                );
                return Ok(Config::default());
            }
        };

        let contents = std::str::from_utf8(bytes).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            source: Box::new(err),
        })?;

        Self::merge_yaml(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overlay YAML `contents` onto the defaults
    ///
    /// Keys absent from `contents` keep their defaults; unknown keys are ignored.
    /// A key whose value is null (`password:`, or a section whose children are
    /// all commented out) counts as absent.
    pub fn merge_yaml(contents: &str) -> Result<Config, ParseFailure> {
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        let mut document: serde_yaml::Value = serde_yaml::from_str(contents)?;
        prune_nulls(&mut document);

        if document.is_null() {
            return Ok(Config::default());
        }

        let config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Serialized::defaults(document))
            .extract()?;

        Ok(config)
    }
}

/// Underlying cause carried by [`ConfigError::Parse`]
pub type ParseFailure = Box<dyn std::error::Error + Send + Sync>;

/// Drop mapping entries whose value is null, recursively
///
/// A section left empty by pruning is dropped as well.
fn prune_nulls(value: &mut serde_yaml::Value) {
    if let serde_yaml::Value::Mapping(mapping) = value {
        *mapping = std::mem::take(mapping)
            .into_iter()
            .filter_map(|(key, mut child)| {
                if child.is_null() {
                    return None;
                }
                prune_nulls(&mut child);
                match &child {
                    serde_yaml::Value::Mapping(inner) if inner.is_empty() => None,
                    _ => Some((key, child)),
                }
            })
            .collect();
    }
}
