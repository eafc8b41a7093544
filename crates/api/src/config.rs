use std::net::IpAddr;
use std::str::FromStr;

use axum::http::HeaderValue;
use charsearch_catalog::api::DEFAULT_CATALOG_URL;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Catalog GraphQL endpoint.
    pub catalog_url: String,
    /// Per-request timeout of the catalog client in seconds (default: `10`).
    pub catalog_timeout_secs: u64,
}

/// A configuration variable that is set but cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("Invalid value for {var}: {value:?}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                              |
    /// |------------------------|--------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                            |
    /// | `PORT`                 | `3000`                               |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`              |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                 |
    /// | `CATALOG_URL`          | `https://rickandmortyapi.com/graphql`|
    /// | `CATALOG_TIMEOUT_SECS` | `10`                                 |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_var(&lookup, "HOST", "0.0.0.0")?;
        let port = parse_var(&lookup, "PORT", "3000")?;
        let request_timeout_secs = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", "30")?;
        let catalog_timeout_secs = parse_var(&lookup, "CATALOG_TIMEOUT_SECS", "10")?;

        let catalog_url =
            lookup("CATALOG_URL").unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());

        let raw_origins =
            lookup("CORS_ORIGINS").unwrap_or_else(|| "http://localhost:5173".to_string());
        let cors_origins = raw_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError {
                    var: "CORS_ORIGINS",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            catalog_url,
            catalog_timeout_secs,
        })
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let value = lookup(var).unwrap_or_else(|| default.to_string());
    let parsed = value.trim().parse();
    parsed.map_err(|_| ConfigError { var, value })
}
