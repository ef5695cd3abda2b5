use crate::auth::jwt::JwtConfig;

/// Default database when `DATABASE_URL` is unset: a local file-backed SQLite
/// database, created on first start.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db";

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },

    #[error("DATABASE_URL scheme '{0}' is not supported; only sqlite: URLs are")]
    UnsupportedDatabase(String),
}

/// Server configuration loaded from environment variables.
///
/// Everything except the signing secret has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Database connection string (default: [`DEFAULT_DATABASE_URL`]).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Bearer token verification settings.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `DATABASE_URL`         | `sqlite:///tmp/test.db`    |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `APP_SECRET_KEY`       | required                   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 3000)?;
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        check_database_scheme(&database_url)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;
        let jwt = JwtConfig::from_lookup(&lookup)?;

        Ok(Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            jwt,
        })
    }
}

/// Only SQLite is compiled in. Report the scheme alone so credentials in a
/// server URL never reach the logs.
fn check_database_scheme(database_url: &str) -> Result<(), ConfigError> {
    if database_url.starts_with("sqlite:") {
        return Ok(());
    }
    let scheme = database_url
        .split_once(':')
        .map_or(database_url, |(scheme, _)| scheme);
    Err(ConfigError::UnsupportedDatabase(scheme.to_string()))
}

/// Parse `key` with `FromStr`, falling back to `default` when unset.
pub(crate) fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => {
            let parsed = value.trim().parse();
            parsed.map_err(|_| ConfigError::Invalid { key, value })
        }
        None => Ok(default),
    }
}
