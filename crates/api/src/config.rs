//! Environment-driven server configuration.

use crate::auth::jwt::JwtConfig;

/// Runtime settings for the HTTP server, read once at startup.
///
/// Everything except the JWT secret falls back to a local-development
/// default, so `cargo run` against a local database needs only
/// `DATABASE_URL` and `JWT_SECRET`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (`HOST`, default `0.0.0.0`).
    pub host: String,
    /// Bind port (`PORT`, default `3000`).
    pub port: u16,
    /// Allowed CORS origins (`CORS_ORIGINS`, comma-separated,
    /// default `http://localhost:5173`).
    pub cors_origins: Vec<String>,
    /// Per-request timeout in seconds (`REQUEST_TIMEOUT_SECS`, default `30`).
    pub request_timeout_secs: u64,
    /// Access-token validation settings.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Read settings from the environment.
    ///
    /// # Panics
    ///
    /// Panics on an unparsable value or a missing `JWT_SECRET`. A server
    /// with broken settings must not come up.
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: parsed_env_or("PORT", 3000),
            cors_origins: env_or("CORS_ORIGINS", "http://localhost:5173")
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            request_timeout_secs: parsed_env_or("REQUEST_TIMEOUT_SECS", 30),
            jwt: JwtConfig::from_env(),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed_env_or<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|err| panic!("{name}={raw} is not valid: {err}")),
        Err(_) => default,
    }
}
