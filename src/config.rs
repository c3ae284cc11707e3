use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub static_dir: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Defaults overlaid by environment variables (`DATABASE_URL`,
    /// `SERVER_HOST`, `SERVER_PORT`, `STATIC_DIR`, `LOG_FORMAT`).
    pub fn from_env() -> Result<Self> {
        Self::from_source(config::Environment::default())
    }

    fn from_source<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = config::Config::builder()
            .set_default("server_host", "0.0.0.0")?
            .set_default("server_port", 3000)?
            .set_default("static_dir", "static")?
            .set_default("log_format", "pretty")?
            .add_source(source)
            .build()
            .context("Failed to read configuration")?;

        if settings.get_string("database_url").is_err() {
            anyhow::bail!("DATABASE_URL must be set");
        }

        settings
            .try_deserialize()
            .context("SERVER_PORT must be a valid port number and LOG_FORMAT one of pretty, json")
    }
}
