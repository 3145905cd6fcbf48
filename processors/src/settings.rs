use config::{Config, ConfigError, File};
use mrv_core::RegulatorySchedules;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Test,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub environment: Environment,
    /// Regulatory constant tables shared with the read side; loaded here so
    /// schedule updates stay a configuration change.
    pub schedules: RegulatorySchedules,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            environment: Environment::Production,
            schedules: RegulatorySchedules::default(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/processors").required(false))
            .add_source(config::Environment::with_prefix("MRV_PROCESSORS").separator("__"))
            .build()?
            .try_deserialize()
    }
}
