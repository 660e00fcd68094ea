use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use anyhow::{Result, anyhow};
use tracing::{info, warn};

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "change-me";
pub const DEFAULT_HASH_SALT: &str = "1234";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8787;

/// How submitted credentials are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Compare against the configured admin pair.
    Fixed,
    /// Exact match on a `users` row holding a plaintext password.
    Table,
    /// `users` row holding an Argon2 or salted SHA-256 hash.
    Hashed,
}

impl FromStr for AuthMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "table" => Ok(Self::Table),
            "hashed" => Ok(Self::Hashed),
            other => Err(anyhow!("unknown auth mode '{}'", other)),
        }
    }
}

pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub auth_mode: AuthMode,
    pub admin_username: String,
    pub admin_password: String,
    pub hash_salt: String,
    /// Require a live session token on `/api/updatepagedata`.
    pub enforce_session: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            host: try_load("LINKIN_HOST", DEFAULT_HOST)?,
            port: try_load("LINKIN_PORT", &DEFAULT_PORT.to_string())?,
            db_path: try_load("LINKIN_DB_PATH", "linkin.db")?,
            auth_mode: try_load("LINKIN_AUTH_MODE", "fixed")?,
            admin_username: try_load("LINKIN_ADMIN_USERNAME", DEFAULT_ADMIN_USERNAME)?,
            admin_password: load_secret("LINKIN_ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD),
            hash_salt: load_secret("LINKIN_HASH_SALT", DEFAULT_HASH_SALT),
            enforce_session: try_load("LINKIN_ENFORCE_SESSION", "false")?,
        };

        if config.admin_password == DEFAULT_ADMIN_PASSWORD {
            warn!("LINKIN_ADMIN_PASSWORD is still the built-in default");
        }
        if !config.enforce_session {
            warn!("Session tokens are not checked server-side (LINKIN_ENFORCE_SESSION=false)");
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            db_path: PathBuf::from("linkin.db"),
            auth_mode: AuthMode::Fixed,
            admin_username: DEFAULT_ADMIN_USERNAME.into(),
            admin_password: DEFAULT_ADMIN_PASSWORD.into(),
            hash_salt: DEFAULT_HASH_SALT.into(),
            enforce_session: false,
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| anyhow!("Invalid {key} value: {e}"))
}

/// Like `try_load`, without echoing the value.
fn load_secret(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default");
        default.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_mode_parses_case_insensitively() {
        assert_eq!("fixed".parse::<AuthMode>().unwrap(), AuthMode::Fixed);
        assert_eq!(" Table ".parse::<AuthMode>().unwrap(), AuthMode::Table);
        assert_eq!("HASHED".parse::<AuthMode>().unwrap(), AuthMode::Hashed);
        assert!("ldap".parse::<AuthMode>().is_err());
    }

    #[test]
    fn default_binds_where_the_binary_does() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8787);
        assert_eq!(config.auth_mode, AuthMode::Fixed);
        assert!(!config.enforce_session);
    }
}
