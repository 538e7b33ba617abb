//! Runtime settings.
//!
//! Layers, lowest priority first: built-in defaults, an optional
//! `trivia.{toml,yaml,json}` file, then `TRIVIA_*` environment variables with
//! `__` between nested keys (`TRIVIA_DATABASE__URL`, `TRIVIA_SERVER__PORT`).

use std::net::SocketAddr;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use secrecy::SecretString;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    /// sqlx connection string, e.g. `sqlite://trivia.db`
    pub url: SecretString,
    pub max_connections: u32,
}

impl ServerSettings {
    pub fn address(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name("trivia").required(false))
                .add_source(
                    Environment::with_prefix("TRIVIA")
                        .prefix_separator("_")
                        .separator("__"),
                ),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("database.max_connections", 5)?
            .build()?
            .try_deserialize()
    }
}
