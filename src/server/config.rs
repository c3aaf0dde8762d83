use dioxus_logger::tracing::Level;

use crate::server::error::config::ConfigError;

static DEFAULT_HOST: &str = "0.0.0.0";
static DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup, unset variables fall back to
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(port) => port.parse::<u16>().map_err(|e| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(level) => level
                .parse::<Level>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "LOG_LEVEL".to_string(),
                    reason: e.to_string(),
                })?,
            None => Level::INFO,
        };

        Ok(Self {
            host,
            port,
            log_level,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
