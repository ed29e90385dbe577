use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// PostgreSQL connection URL assembled from the individual components.
    pub fn connection_url(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }

    /// Same as [`Self::connection_url`] with the password masked, for logs.
    pub fn redacted_url(&self) -> String {
        format!(
            "postgresql://{}:***@{}:{}/{}",
            self.username, self.host, self.port, self.name
        )
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__HOST, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Self::environment())
            .build()?;

        configuration.try_deserialize()
    }

    /// Unprefixed variables, `__` nesting: DATABASE__HOST=db.internal sets
    /// `database.host`.
    fn environment() -> Environment {
        Environment::default().separator("__")
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        ConfigBuilder::builder()
            .set_default("database.host", "localhost")?
            .set_default("database.port", 5432)?
            .set_default("database.max_connections", 5)?
            .set_default("server.http_port", 1323)?
            .set_default("jwt.expiration_hours", auth::DEFAULT_TOKEN_LIFETIME_HOURS)
    }
}
