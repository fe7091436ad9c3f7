//! Environment variable overlay
//!
//! A fixed table of variables, each bound to one field of [`Config`]. A variable
//! that is unset or empty leaves its field alone. Numeric variables go through
//! [`scan_leading_int`]; when no integer can be scanned, or the scanned value
//! does not fit the field, the field keeps its previous value and a warning is
//! logged.

use crate::domain::models::config::Config;
use std::path::PathBuf;

/// One environment variable bound to a configuration field
#[derive(Clone, Copy)]
pub struct EnvOverride {
    /// Variable name, e.g. `DB_HOST`
    pub var: &'static str,

    /// Dotted path of the field it overrides, e.g. `mysql.host`
    pub field: &'static str,

    apply: fn(&mut Config, &str) -> bool,
}

impl std::fmt::Debug for EnvOverride {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvOverride")
            .field("var", &self.var)
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

/// Every variable consulted during resolution, in application order
pub const ENV_OVERRIDES: [EnvOverride; 9] = [
    EnvOverride {
        var: "PORT",
        field: "server.port",
        apply: |config, raw| set_number(&mut config.server.port, raw),
    },
    EnvOverride {
        var: "DB_HOST",
        field: "mysql.host",
        apply: |config, raw| set_text(&mut config.database.host, raw),
    },
    EnvOverride {
        var: "DB_PORT",
        field: "mysql.port",
        apply: |config, raw| set_number(&mut config.database.port, raw),
    },
    EnvOverride {
        var: "DB_USER",
        field: "mysql.user",
        apply: |config, raw| set_text(&mut config.database.user, raw),
    },
    EnvOverride {
        var: "DB_PASSWORD",
        field: "mysql.password",
        apply: |config, raw| set_text(&mut config.database.password, raw),
    },
    EnvOverride {
        var: "DB_NAME",
        field: "mysql.database",
        apply: |config, raw| set_text(&mut config.database.database, raw),
    },
    EnvOverride {
        var: "JWT_SECRET",
        field: "jwt.secret",
        apply: |config, raw| set_text(&mut config.jwt.secret, raw),
    },
    EnvOverride {
        var: "LOG_DIR",
        field: "log.dir",
        apply: |config, raw| {
            config.logging.dir = PathBuf::from(raw);
            true
        },
    },
    EnvOverride {
        var: "LOG_LEVEL",
        field: "log.level",
        apply: |config, raw| set_text(&mut config.logging.level, raw),
    },
];

/// Overlay environment values onto `config`, returning how many were applied
///
/// `lookup` maps a variable name to its value; in production this is the
/// process environment.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    let mut applied = 0;

    for entry in &ENV_OVERRIDES {
        let Some(raw) = lookup(entry.var).filter(|value| !value.is_empty()) else {
            continue;
        };

        if (entry.apply)(config, &raw) {
            tracing::debug!(var = entry.var, field = entry.field, "environment override applied");
            applied += 1;
        } else {
            tracing::warn!(
                var = entry.var,
                field = entry.field,
                value = %raw,
                "ignoring non-numeric or out-of-range environment override"
            );
        }
    }

    applied
}

/// Scan an integer prefix the way a `%d` scanner does
///
/// Leading whitespace is skipped, then an optional sign, then decimal digits up
/// to the first non-digit. Returns `None` when no digits are found or the
/// number does not fit in an `i64`.
pub fn scan_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits == 0 {
        return None;
    }

    trimmed[..sign_len + digits].parse().ok()
}

fn set_number<T: TryFrom<i64>>(slot: &mut T, raw: &str) -> bool {
    match scan_leading_int(raw).and_then(|value| T::try_from(value).ok()) {
        Some(value) => {
            *slot = value;
            true
        }
        None => false,
    }
}

fn set_text(slot: &mut String, raw: &str) -> bool {
    raw.clone_into(slot);
    true
}
