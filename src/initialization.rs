use std::{env, fs};
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::logging::setup_logger;

const DEFAULT_CONFIG_PATH: &str = "config.toml";
const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

#[derive(Deserialize, Debug)]
pub struct WebServer {
    pub bind_address: String,
    pub bind_port: u16,
}

/// Settings needed by every outbound request to OpenWeather
///
#[derive(Deserialize, Debug, Clone)]
pub struct OpenWeatherConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_icon_base_url")]
    pub icon_base_url: String,
}

#[derive(Deserialize, Debug)]
pub struct General {
    pub log_path: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for General {
    fn default() -> Self {
        General { log_path: None, log_level: default_log_level() }
    }
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub web_server: WebServer,
    pub open_weather: OpenWeatherConfig,
    #[serde(default)]
    pub general: General,
}

fn default_base_url() -> String {
    "http://api.openweathermap.org/data/2.5".to_string()
}

fn default_icon_base_url() -> String {
    "http://openweathermap.org/img/wn".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Reads the configuration file and sets up logging
///
/// The config file path is taken from the first command line argument, falling back
/// to `config.toml` in the working directory. The API key can be given in the environment
/// variable `OPENWEATHER_API_KEY`, which then overrides whatever is in the file.
pub fn config() -> Result<Config, ConfigError> {
    let args: Vec<String> = env::args().collect();
    let config_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_CONFIG_PATH);

    let toml = fs::read_to_string(config_path)
        .map_err(|e| ConfigError(format!("failed to read {}: {}", config_path, e)))?;
    let config = parse_config(&toml, env::var(API_KEY_VAR).ok())?;

    setup_logger(&config.general)?;

    Ok(config)
}

/// Parses a toml configuration and applies an optional API key override
///
/// # Arguments
///
/// * 'toml' - the configuration as a toml string
/// * 'api_key' - API key that replaces the one in the configuration if given
pub fn parse_config(toml: &str, api_key: Option<String>) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(toml)?;

    if let Some(key) = api_key.filter(|k| !k.is_empty()) {
        config.open_weather.api_key = key;
    }
    if config.open_weather.api_key.is_empty() {
        return Err(ConfigError::from("no OpenWeather API key configured"));
    }

    Ok(config)
}
