use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Placeholder shown in place of secrets when a snapshot is displayed
pub const REDACTED: &str = "***";

/// Session binding TTL used when none is configured (minutes)
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;
/// Session renewal threshold used when none is configured (minutes)
pub const DEFAULT_SESSION_RENEWAL_TTL_MINUTES: i64 = 14;
/// Temporary-unavailability TTL used when none is configured (minutes)
pub const DEFAULT_UNAVAILABLE_TTL_MINUTES: i64 = 5;
/// Concurrency counter TTL used when none is configured (minutes)
pub const DEFAULT_CONCURRENCY_TTL_MINUTES: i64 = 5;
/// Per-key concurrency ceiling used when none is configured
pub const DEFAULT_CONCURRENCY_MAX: i64 = 5;

/// Resolved runtime configuration for the aiproxy server
///
/// Built once at startup by [`ConfigLoader`](crate::infrastructure::config::ConfigLoader)
/// and shared read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// `MySQL` connection configuration
    #[serde(default, rename = "mysql")]
    pub database: DatabaseConfig,

    /// Token signing configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// Log output configuration
    #[serde(default, rename = "log")]
    pub logging: LoggingConfig,

    /// Cache tunables, read through the clamping accessors
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Copy of this snapshot with secrets masked, for display and logging
    ///
    /// Empty secrets stay empty so an unset password is still visible as unset.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        copy.database.password = redact(&copy.database.password);
        copy.jwt.secret = redact(&copy.jwt.secret);
        copy
    }
}

fn redact(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        REDACTED.to_string()
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    /// Listening port
    #[serde(default = "default_server_port")]
    pub port: u16,

    /// Operating mode: debug, release, test
    #[serde(default = "default_server_mode")]
    pub mode: String,
}

const fn default_server_port() -> u16 {
    8080
}

fn default_server_mode() -> String {
    "release".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
            mode: default_server_mode(),
        }
    }
}

/// `MySQL` connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseConfig {
    /// Server host name or address
    #[serde(default = "default_database_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_database_port")]
    pub port: u16,

    /// Login user
    #[serde(default = "default_database_user")]
    pub user: String,

    /// Login password, empty when the account has none
    #[serde(default)]
    pub password: String,

    /// Schema name
    #[serde(default = "default_database_name")]
    pub database: String,

    /// Connection character set
    #[serde(default = "default_charset")]
    pub charset: String,

    /// Maximum idle connections kept in the pool
    #[serde(default = "default_max_idle_conns")]
    pub max_idle_conns: u32,

    /// Maximum open connections in the pool
    #[serde(default = "default_max_open_conns")]
    pub max_open_conns: u32,
}

fn default_database_host() -> String {
    "localhost".to_string()
}

const fn default_database_port() -> u16 {
    3306
}

fn default_database_user() -> String {
    "root".to_string()
}

fn default_database_name() -> String {
    "aiproxy".to_string()
}

fn default_charset() -> String {
    "utf8mb4".to_string()
}

const fn default_max_idle_conns() -> u32 {
    10
}

const fn default_max_open_conns() -> u32 {
    100
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_database_host(),
            port: default_database_port(),
            user: default_database_user(),
            password: String::new(),
            database: default_database_name(),
            charset: default_charset(),
            max_idle_conns: default_max_idle_conns(),
            max_open_conns: default_max_open_conns(),
        }
    }
}

impl DatabaseConfig {
    /// Connection string in the `user:password@tcp(host:port)/db` form
    ///
    /// Values are passed through verbatim; nothing is escaped or checked.
    pub fn dsn(&self) -> String {
        format!(
            "{}:{}@tcp({}:{})/{}?charset={}&parseTime=True&loc=Local",
            self.user, self.password, self.host, self.port, self.database, self.charset
        )
    }
}

/// Token signing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct JwtConfig {
    /// HMAC signing secret
    #[serde(default = "default_jwt_secret")]
    pub secret: String,

    /// Token lifetime in hours
    #[serde(default = "default_expire_hours")]
    pub expire_hours: u32,
}

fn default_jwt_secret() -> String {
    "change-me-in-production".to_string()
}

const fn default_expire_hours() -> u32 {
    24 * 7
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: default_jwt_secret(),
            expire_hours: default_expire_hours(),
        }
    }
}

/// Log output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Directory for log files
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,

    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

/// Cache tunables
///
/// A stored value of zero or less means "not configured". Fields are private;
/// read them through the accessors, which substitute the documented default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    #[serde(default = "default_session_ttl")]
    session_ttl: i64,

    #[serde(default = "default_session_renewal_ttl")]
    session_renewal_ttl: i64,

    #[serde(default = "default_unavailable_ttl")]
    unavailable_ttl: i64,

    #[serde(default = "default_concurrency_ttl")]
    concurrency_ttl: i64,

    #[serde(default = "default_concurrency_max")]
    default_concurrency_max: i64,
}

const fn default_session_ttl() -> i64 {
    DEFAULT_SESSION_TTL_MINUTES
}

const fn default_session_renewal_ttl() -> i64 {
    DEFAULT_SESSION_RENEWAL_TTL_MINUTES
}

const fn default_unavailable_ttl() -> i64 {
    DEFAULT_UNAVAILABLE_TTL_MINUTES
}

const fn default_concurrency_ttl() -> i64 {
    DEFAULT_CONCURRENCY_TTL_MINUTES
}

const fn default_concurrency_max() -> i64 {
    DEFAULT_CONCURRENCY_MAX
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            session_ttl: default_session_ttl(),
            session_renewal_ttl: default_session_renewal_ttl(),
            unavailable_ttl: default_unavailable_ttl(),
            concurrency_ttl: default_concurrency_ttl(),
            default_concurrency_max: default_concurrency_max(),
        }
    }
}

/// Stored value if positive, otherwise the fallback
const fn positive_or(value: i64, fallback: i64) -> i64 {
    if value <= 0 {
        fallback
    } else {
        value
    }
}

impl CacheConfig {
    /// Build from raw stored values, as they would appear in a config file
    pub const fn from_raw(
        session_ttl: i64,
        session_renewal_ttl: i64,
        unavailable_ttl: i64,
        concurrency_ttl: i64,
        default_concurrency_max: i64,
    ) -> Self {
        Self {
            session_ttl,
            session_renewal_ttl,
            unavailable_ttl,
            concurrency_ttl,
            default_concurrency_max,
        }
    }

    /// Session binding TTL in minutes (default 60)
    pub const fn session_ttl(&self) -> i64 {
        positive_or(self.session_ttl, DEFAULT_SESSION_TTL_MINUTES)
    }

    /// Remaining-lifetime threshold below which a session is renewed, in minutes (default 14)
    pub const fn session_renewal_ttl(&self) -> i64 {
        positive_or(self.session_renewal_ttl, DEFAULT_SESSION_RENEWAL_TTL_MINUTES)
    }

    /// How long an upstream stays marked temporarily unavailable, in minutes (default 5)
    pub const fn unavailable_ttl(&self) -> i64 {
        positive_or(self.unavailable_ttl, DEFAULT_UNAVAILABLE_TTL_MINUTES)
    }

    /// Concurrency counter TTL in minutes (default 5)
    pub const fn concurrency_ttl(&self) -> i64 {
        positive_or(self.concurrency_ttl, DEFAULT_CONCURRENCY_TTL_MINUTES)
    }

    /// Concurrency ceiling for keys without an explicit limit (default 5)
    pub const fn default_concurrency_max(&self) -> i64 {
        positive_or(self.default_concurrency_max, DEFAULT_CONCURRENCY_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.mode, "release");
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.user, "root");
        assert_eq!(config.database.password, "");
        assert_eq!(config.database.database, "aiproxy");
        assert_eq!(config.database.charset, "utf8mb4");
        assert_eq!(config.database.max_idle_conns, 10);
        assert_eq!(config.database.max_open_conns, 100);
        assert_eq!(config.jwt.secret, "change-me-in-production");
        assert_eq!(config.jwt.expire_hours, 168);
        assert_eq!(config.logging.dir, PathBuf::from("logs"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_default_cache_accessors() {
        let cache = CacheConfig::default();
        assert_eq!(cache.session_ttl(), 60);
        assert_eq!(cache.session_renewal_ttl(), 14);
        assert_eq!(cache.unavailable_ttl(), 5);
        assert_eq!(cache.concurrency_ttl(), 5);
        assert_eq!(cache.default_concurrency_max(), 5);
    }

    #[test]
    fn test_cache_accessors_fall_back_on_non_positive() {
        let zeroed = CacheConfig::from_raw(0, 0, 0, 0, 0);
        assert_eq!(zeroed.session_ttl(), 60);
        assert_eq!(zeroed.session_renewal_ttl(), 14);
        assert_eq!(zeroed.unavailable_ttl(), 5);
        assert_eq!(zeroed.concurrency_ttl(), 5);
        assert_eq!(zeroed.default_concurrency_max(), 5);

        let negative = CacheConfig::from_raw(-1, -30, -5, i64::MIN, -2);
        assert_eq!(negative.session_ttl(), 60);
        assert_eq!(negative.session_renewal_ttl(), 14);
        assert_eq!(negative.unavailable_ttl(), 5);
        assert_eq!(negative.concurrency_ttl(), 5);
        assert_eq!(negative.default_concurrency_max(), 5);
    }

    #[test]
    fn test_cache_accessors_keep_positive_values() {
        let cache = CacheConfig::from_raw(120, 30, 1, 10, 50);
        assert_eq!(cache.session_ttl(), 120);
        assert_eq!(cache.session_renewal_ttl(), 30);
        assert_eq!(cache.unavailable_ttl(), 1);
        assert_eq!(cache.concurrency_ttl(), 10);
        assert_eq!(cache.default_concurrency_max(), 50);
    }

    #[test]
    fn test_dsn() {
        let database = DatabaseConfig {
            host: "db1".to_string(),
            port: 5432,
            user: "u".to_string(),
            password: "p".to_string(),
            database: "d".to_string(),
            charset: "utf8mb4".to_string(),
            ..Default::default()
        };
        assert_eq!(
            database.dsn(),
            "u:p@tcp(db1:5432)/d?charset=utf8mb4&parseTime=True&loc=Local"
        );
    }

    #[test]
    fn test_dsn_passes_empty_password_through() {
        let database = DatabaseConfig::default();
        assert_eq!(
            database.dsn(),
            "root:@tcp(localhost:3306)/aiproxy?charset=utf8mb4&parseTime=True&loc=Local"
        );
    }

    #[test]
    fn test_yaml_parsing_partial_sections() {
        let yaml = r"
server:
  port: 9000
mysql:
  host: db.internal
  password: hunter2
cache:
  session_ttl: 0
  default_concurrency_max: 12
";

        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.mode, "release");
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.password, "hunter2");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.cache.session_ttl(), 60);
        assert_eq!(config.cache.default_concurrency_max(), 12);
        assert_eq!(config.cache.unavailable_ttl(), 5);
    }

    #[test]
    fn test_redacted_masks_secrets() {
        let mut config = Config::default();
        config.database.password = "hunter2".to_string();

        let redacted = config.redacted();
        assert_eq!(redacted.database.password, REDACTED);
        assert_eq!(redacted.jwt.secret, REDACTED);
        assert_eq!(redacted.database.host, config.database.host);
        assert_eq!(config.database.password, "hunter2");
    }

    #[test]
    fn test_redacted_keeps_empty_password_empty() {
        let redacted = Config::default().redacted();
        assert_eq!(redacted.database.password, "");
    }
}
