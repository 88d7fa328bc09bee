use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Fallback signing secret for local development only. Any deployment with
/// `RUN_MODE=production` must provide its own via `JWT__SECRET` or a config
/// file; startup fails otherwise.
pub const DEV_JWT_SECRET: &str = "insecure-dev-secret-change-me-before-deploying";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    /// Shared token-signing secret. Empty means "not configured".
    #[serde(default)]
    pub secret: String,

    /// Access-token lifetime in hours.
    #[serde(default = "default_expiration_hours")]
    pub expiration_hours: i64,
}

fn default_expiration_hours() -> i64 {
    auth::jwt::DEFAULT_TTL_HOURS
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, SERVER__HTTP_PORT, JWT__SECRET, ...)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// A missing signing secret is fatal under `RUN_MODE=production`; any
    /// other mode falls back to [`DEV_JWT_SECRET`] with a warning.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let mut config: Config = configuration.try_deserialize()?;

        if config.jwt.secret.is_empty() {
            if run_mode == "production" {
                return Err(ConfigError::Message(
                    "jwt.secret must be set when RUN_MODE=production".to_string(),
                ));
            }
            tracing::warn!(
                "jwt.secret is not configured; using the built-in development secret. \
                 Tokens signed with it are forgeable - never deploy like this"
            );
            config.jwt.secret = DEV_JWT_SECRET.to_string();
        }

        Ok(config)
    }
}
