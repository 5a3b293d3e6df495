use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Number of input partitions folded in parallel (0 = one per rayon thread)
    #[serde(default)]
    pub partitions: usize,
    /// Status code marking a cancelled flight
    #[serde(default = "default_cancelled_status")]
    pub cancelled_status: String,
    /// Carrier whose cancellations are scanned for strike days
    #[serde(default = "default_strike_airline")]
    pub strike_airline: String,
    /// Arrival airport codes counted as Berlin
    #[serde(default = "default_berlin_airports")]
    pub berlin_airports: Vec<String>,
}

fn default_cancelled_status() -> String {
    "X".to_string()
}

fn default_strike_airline() -> String {
    "FR".to_string()
}

fn default_berlin_airports() -> Vec<String> {
    vec!["SXF".to_string(), "BER".to_string()]
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            partitions: 0,
            cancelled_status: default_cancelled_status(),
            strike_airline: default_strike_airline(),
            berlin_airports: default_berlin_airports(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_stdout_level")]
    pub stdout_level: String,
    #[serde(default = "default_file_level")]
    pub file_level: String,
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_stdout_level() -> String {
    "info".to_string()
}

fn default_file_level() -> String {
    "debug".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            stdout_level: default_stdout_level(),
            file_level: default_file_level(),
        }
    }
}

use std::env;

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("AIRPORT_STATS_CONFIG").unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

/// Loads settings from `config_path` (extension optional, file optional),
/// overridden by `AIRPORT_STATS__<SECTION>__<KEY>` environment variables.
pub fn load_settings_from(config_path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(config_path).required(false))
        .add_source(
            config::Environment::with_prefix("AIRPORT_STATS")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
