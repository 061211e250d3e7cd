use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub booking: BookingRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingRules {
    #[serde(default = "default_reference_length")]
    pub reference_length: usize,
    /// Hard ceiling on passengers per booking, mirrored by the search form.
    #[serde(default = "default_max_passengers")]
    pub max_passengers: usize,
}

fn default_reference_length() -> usize {
    8
}

fn default_max_passengers() -> usize {
    9
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Environment-specific file is optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `VOYAGO__SERVER__PORT=9000` overrides the server port
            .add_source(config::Environment::with_prefix("VOYAGO").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
