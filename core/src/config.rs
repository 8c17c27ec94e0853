use config::{ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    pub bot: BotConfig,
    pub poll: PollConfig,
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub endpoint: String,
    pub token: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub api_base: String,
    pub token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollConfig {
    pub interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub log_format: LogFormat,
    pub metrics_enabled: bool,
    pub metrics_port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        // Load default configuration
        builder = builder.add_source(config::Config::try_from(&Config::default())?);

        // Layer on config file if it exists
        if Path::new("config.toml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        // Layer on environment variables (WATCHER_ prefix)
        builder = builder.add_source(
            Environment::with_prefix("WATCHER")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let settings: Config = config.try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Missing secrets are a fatal configuration error; the process must
    /// refuse to enter the poll loop without all three.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.token.is_empty() {
            return Err(ConfigError::Message("api.token is required".into()));
        }

        if self.bot.token.is_empty() {
            return Err(ConfigError::Message("bot.token is required".into()));
        }

        if self.bot.chat_id.is_empty() {
            return Err(ConfigError::Message("bot.chat_id is required".into()));
        }

        if self.api.endpoint.is_empty() {
            return Err(ConfigError::Message("api.endpoint is required".into()));
        }

        if self.poll.interval_secs == 0 {
            return Err(ConfigError::Message(
                "poll.interval_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                endpoint: "https://practicum.yandex.ru/api/user_api/homework_statuses/"
                    .to_string(),
                token: String::new(),
                timeout_secs: 30,
            },
            bot: BotConfig {
                api_base: "https://api.telegram.org".to_string(),
                token: String::new(),
                chat_id: String::new(),
            },
            poll: PollConfig { interval_secs: 600 },
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
                log_format: LogFormat::Pretty,
                metrics_enabled: false,
                metrics_port: 9090,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn populated() -> Config {
        let mut config = Config::default();
        config.api.token = "practicum-token".into();
        config.bot.token = "123456:bot-token".into();
        config.bot.chat_id = "987654".into();
        config
    }

    #[test]
    fn defaults_use_the_fixed_interval_and_endpoint() {
        let config = Config::default();
        assert_eq!(config.poll.interval_secs, 600);
        assert_eq!(
            config.api.endpoint,
            "https://practicum.yandex.ru/api/user_api/homework_statuses/"
        );
    }

    #[test]
    fn validate_accepts_a_fully_populated_config() {
        assert!(populated().validate().is_ok());
    }

    #[test]
    fn validate_rejects_each_missing_secret() {
        let mut config = populated();
        config.api.token.clear();
        assert!(config.validate().is_err());

        let mut config = populated();
        config.bot.token.clear();
        assert!(config.validate().is_err());

        let mut config = populated();
        config.bot.chat_id.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_a_zero_interval() {
        let mut config = populated();
        config.poll.interval_secs = 0;
        assert!(config.validate().is_err());
    }
}
