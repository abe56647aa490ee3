use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

// Главная структура конфигурации
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub data: DataConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

// Источник данных, загружаемый один раз при старте
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app: AppConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                rust_log: "event_spots=debug,tower_http=debug".to_string(),
                log_format: LogFormat::Text,
            },
            data: DataConfig {
                path: PathBuf::from("data.json"),
            },
        }
    }
}

impl Config {
    /// Defaults overlaid with `HOST`, `PORT`, `RUST_LOG`, `LOG_FORMAT` and
    /// `DATA_FILE` from the environment.
    pub fn from_env() -> Result<Self, ::config::ConfigError> {
        ::config::Config::builder()
            .add_source(::config::Config::try_from(&Config::default())?)
            .set_override_option("app.host", env::var("HOST").ok())?
            .set_override_option("app.port", env::var("PORT").ok())?
            .set_override_option("app.rust_log", env::var("RUST_LOG").ok())?
            .set_override_option("app.log_format", env::var("LOG_FORMAT").ok())?
            .set_override_option("data.path", env::var("DATA_FILE").ok())?
            .build()?
            .try_deserialize()
    }
}
