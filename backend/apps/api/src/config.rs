//! Server Configuration
//!
//! Reads process environment (after `.env` has been loaded) into a
//! `ServerConfig`. Every variable has a default except the pepper.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use base64::Engine;
use base64::engine::general_purpose;
use credential::CredentialConfig;
use credential::application::config::PasswordPolicy;

const DEFAULT_DATABASE_URL: &str = "sqlite://login.db?mode=rwc";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Storage backend, chosen by the `DATABASE_URL` scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackend {
    Postgres,
    Sqlite,
}

impl DatabaseBackend {
    fn from_url(url: &str) -> anyhow::Result<Self> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(Self::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(Self::Sqlite)
        } else {
            bail!("DATABASE_URL must start with postgres:// or sqlite:")
        }
    }
}

#[derive(Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub backend: DatabaseBackend,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub credential: CredentialConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = var("DATABASE_URL", DEFAULT_DATABASE_URL);
        let backend = DatabaseBackend::from_url(&database_url)?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v.parse().context("DATABASE_MAX_CONNECTIONS must be an integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let acquire_timeout_secs = match lookup("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            Some(v) => v
                .parse()
                .context("DATABASE_ACQUIRE_TIMEOUT_SECS must be an integer")?,
            None => DEFAULT_ACQUIRE_TIMEOUT_SECS,
        };

        let bind_addr = var("BIND_ADDR", DEFAULT_BIND_ADDR)
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let frontend_origins = var("FRONTEND_ORIGINS", DEFAULT_FRONTEND_ORIGINS)
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let defaults = PasswordPolicy::default();
        let min_length = match lookup("PASSWORD_MIN_LENGTH") {
            Some(v) => v.parse().context("PASSWORD_MIN_LENGTH must be an integer")?,
            None => defaults.min_length(),
        };
        let max_length = match lookup("PASSWORD_MAX_LENGTH") {
            Some(v) => v.parse().context("PASSWORD_MAX_LENGTH must be an integer")?,
            None => defaults.max_length(),
        };
        let password_policy = PasswordPolicy::new(min_length, max_length)?;

        let password_pepper = lookup("PASSWORD_PEPPER")
            .map(|b64| general_purpose::STANDARD.decode(b64.trim()))
            .transpose()
            .context("PASSWORD_PEPPER must be base64")?;

        Ok(Self {
            database_url,
            backend,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            bind_addr,
            frontend_origins,
            credential: CredentialConfig {
                password_policy,
                password_pepper,
                ..CredentialConfig::default()
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.backend, DatabaseBackend::Sqlite);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
        assert_eq!(config.frontend_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.credential.password_policy, PasswordPolicy::default());
        assert!(config.credential.pepper().is_none());
    }

    #[test]
    fn test_postgres_url_selects_postgres() {
        let config = load(&[("DATABASE_URL", "postgres://user:pw@localhost/login")]).unwrap();
        assert_eq!(config.backend, DatabaseBackend::Postgres);
    }

    #[test]
    fn test_unknown_scheme_rejected() {
        assert!(load(&[("DATABASE_URL", "mysql://localhost/login")]).is_err());
    }

    #[test]
    fn test_origins_are_split_and_trimmed() {
        let config = load(&[(
            "FRONTEND_ORIGINS",
            "http://a.example, http://b.example ,",
        )])
        .unwrap();
        assert_eq!(
            config.frontend_origins,
            vec!["http://a.example", "http://b.example"]
        );
    }

    #[test]
    fn test_password_bounds() {
        let config = load(&[("PASSWORD_MIN_LENGTH", "8"), ("PASSWORD_MAX_LENGTH", "64")]).unwrap();
        assert_eq!(config.credential.password_policy.min_length(), 8);
        assert_eq!(config.credential.password_policy.max_length(), 64);

        assert!(
            load(&[("PASSWORD_MIN_LENGTH", "10"), ("PASSWORD_MAX_LENGTH", "5")])
                .is_err()
        );
    }

    #[test]
    fn test_pepper_is_base64() {
        let config = load(&[("PASSWORD_PEPPER", "c2VjcmV0")]).unwrap();
        assert_eq!(config.credential.pepper(), Some(&b"secret"[..]));

        assert!(load(&[("PASSWORD_PEPPER", "not base64!")]).is_err());
    }

    #[test]
    fn test_bad_numbers_rejected() {
        assert!(load(&[("DATABASE_MAX_CONNECTIONS", "many")]).is_err());
        assert!(load(&[("BIND_ADDR", "nowhere")]).is_err());
    }
}
