use chrono::Duration;
use galaxy_core::{CoreError, CoreResult};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub admin: AdminConfig,
    #[serde(default)]
    pub sessions: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Match routes on whole path segments instead of substrings.
    #[serde(default)]
    pub strict_routes: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            strict_routes: false,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_seconds: u64,
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

fn default_max_connections() -> u32 { 5 }
fn default_acquire_timeout() -> u64 { 3 }
fn default_true() -> bool { true }

#[derive(Debug, Deserialize, Clone)]
pub struct AdminConfig {
    pub password: String,
    #[serde(default = "default_session_ttl")]
    pub session_ttl_seconds: u64,
}

// 8 hours
fn default_session_ttl() -> u64 { 8 * 60 * 60 }

impl AdminConfig {
    pub fn session_ttl(&self) -> CoreResult<Duration> {
        i64::try_from(self.session_ttl_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .ok_or_else(|| {
                CoreError::Configuration(format!(
                    "admin.session_ttl_seconds out of range: {}",
                    self.session_ttl_seconds
                ))
            })
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    #[default]
    Memory,
    Redis,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SessionConfig {
    #[serde(default)]
    pub backend: SessionBackend,
    pub redis_url: Option<String>,
}

impl Config {
    pub fn load() -> CoreResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `GALAXY_ADMIN__PASSWORD=secret` sets `admin.password`
            .add_source(
                config::Environment::with_prefix("GALAXY")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("database.url", env::var("DATABASE_URL").ok())
            .map_err(configuration_error)?;

        Self::from_builder(builder)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> CoreResult<Self> {
        let config: Self = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(configuration_error)?;

        if config.database.url.trim().is_empty() {
            return Err(CoreError::Configuration("DATABASE_URL must be set".to_string()));
        }

        Ok(config)
    }
}

fn configuration_error(err: config::ConfigError) -> CoreError {
    CoreError::Configuration(err.to_string())
}
