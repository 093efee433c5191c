use config::{Config, ConfigError, Environment, File};
use executor::{DEFAULT_EXECUTE_URL, ExecutorConfig};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SubmissionConfig {
    /// Max submissions a user may create per minute. 0 disables rate limiting.
    pub rate_limit_per_minute: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub submission: SubmissionConfig,
    pub execution: ExecutorConfig,
}

/// Fallback signing secret, matching what development frontends expect.
/// Startup logs a warning when this is still in effect.
pub const DEFAULT_JWT_SECRET: &str = "default_secret";

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default(
                "server.cors.allow_origins",
                vec!["http://127.0.0.1:5500", "http://localhost:5500"],
            )?
            .set_default("server.cors.max_age", 3600)?
            .set_default("auth.jwt_secret", DEFAULT_JWT_SECRET)?
            .set_default("submission.rate_limit_per_minute", 0)?
            .set_default("execution.url", DEFAULT_EXECUTE_URL)?
            .set_default("execution.request_timeout_secs", 30)?
            .set_default("execution.throttle_ms", 120)?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., CODEPRACTICE__AUTH__JWT_SECRET)
            .add_source(Environment::with_prefix("CODEPRACTICE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
