//! Application configuration management.
//!
//! Configuration is loaded once at startup from environment variables (with
//! `.env` support for local iteration). The deployment mode is part of the
//! configuration: a running instance is either fully open or fully enforced,
//! decided here and never renegotiated per request.

use std::env;
use std::num::ParseIntError;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    MissingEnvVar(String),
    /// An environment variable has an invalid value.
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEnvVar(key) => {
                write!(formatter, "Missing environment variable: {key}")
            }
            Self::InvalidValue { key, message } => {
                write!(formatter, "Invalid value for {key}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Deployment-time authentication policy.
///
/// Selected once at process start; a single running instance can never
/// straddle both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// Every path is permitted regardless of token presence. Intended only
    /// for local iteration; protected handlers still require an identity
    /// and reject cleanly without one.
    Open,
    /// Only allow-listed paths bypass the gate; every other path requires a
    /// valid attached identity.
    Enforced,
}

impl AccessMode {
    /// Parses the `ACCESS_MODE` environment value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for anything other than `open`
    /// or `enforced` (case-insensitive).
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "enforced" => Ok(Self::Enforced),
            other => Err(ConfigError::InvalidValue {
                key: "ACCESS_MODE".to_string(),
                message: format!("expected 'open' or 'enforced', got '{other}'"),
            }),
        }
    }
}

/// Application configuration.
///
/// # Environment Variables
///
/// - `JWT_SECRET`: token signing secret (required)
/// - `JWT_EXPIRATION_SECS`: token lifetime (optional, default: 86400)
/// - `ACCESS_MODE`: `open` or `enforced` (optional, default: enforced)
/// - `CORS_ALLOWED_ORIGINS`: comma-separated origin list (optional)
/// - `DATABASE_URL`: Postgres connection string (optional; absent selects
///   the in-memory stores)
/// - `APP_HOST`: server host (optional, default: "0.0.0.0")
/// - `APP_PORT`: server port (optional, default: 8080)
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Token signing secret. Never logged in full.
    pub jwt_secret: String,
    /// Token lifetime in seconds.
    pub jwt_expiration_secs: u64,
    /// Authentication policy for this instance.
    pub access_mode: AccessMode,
    /// Origins allowed by the CORS layer.
    pub cors_allowed_origins: Vec<String>,
    /// Postgres connection URL; `None` selects the in-memory stores.
    pub database_url: Option<String>,
    /// HTTP server host address.
    pub app_host: String,
    /// HTTP server port.
    pub app_port: u16,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `JWT_SECRET` is not set, and
    /// `ConfigError::InvalidValue` if a variable has an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        let jwt_secret = get_required_env("JWT_SECRET")?;
        let jwt_expiration_secs = get_optional_env_parsed("JWT_EXPIRATION_SECS", 86_400)?;
        let access_mode = match env::var("ACCESS_MODE") {
            Ok(value) => AccessMode::parse(&value)?,
            Err(_) => AccessMode::Enforced,
        };
        let cors_allowed_origins = parse_origins(&get_optional_env(
            "CORS_ALLOWED_ORIGINS",
            "http://localhost:3000,http://localhost:5173".to_string(),
        ));
        let database_url = env::var("DATABASE_URL").ok();
        let app_host = get_optional_env("APP_HOST", "0.0.0.0".to_string());
        let app_port = get_optional_env_parsed("APP_PORT", 8080)?;

        Ok(Self {
            jwt_secret,
            jwt_expiration_secs,
            access_mode,
            cors_allowed_origins,
            database_url,
            app_host,
            app_port,
        })
    }

    /// Returns a bounded prefix of the signing secret for diagnostics.
    ///
    /// At most the first 8 characters are revealed; the rest is masked.
    #[must_use]
    pub fn masked_secret(&self) -> String {
        if self.jwt_secret.is_empty() {
            return "(empty)".to_string();
        }
        let prefix: String = self.jwt_secret.chars().take(8).collect();
        format!("{prefix}******")
    }
}

// The signing secret must never leak through Debug output.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AppConfig")
            .field("jwt_secret", &self.masked_secret())
            .field("jwt_expiration_secs", &self.jwt_expiration_secs)
            .field("access_mode", &self.access_mode)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("database_url", &self.database_url.as_deref().map(|_| "***"))
            .field("app_host", &self.app_host)
            .field("app_port", &self.app_port)
            .finish()
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Gets a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Gets an optional environment variable with a default value.
fn get_optional_env(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

/// Gets an optional environment variable and parses it, with a default value.
fn get_optional_env_parsed<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    env::var(key).map_or_else(
        |_| Ok(default),
        |value| {
            value
                .parse()
                .map_err(|error: ParseIntError| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: error.to_string(),
                })
        },
    )
}
