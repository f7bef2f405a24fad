use crate::models::Recipient;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default = "default_recipients")]
    pub recipients: Vec<RecipientSettings>,
    #[serde(default)]
    pub predictor: PredictorSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

/// Point values for the donation matcher
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default = "default_exact_food_points")]
    pub exact_food_type: i32,
    #[serde(default = "default_any_food_points")]
    pub any_food_type: i32,
    #[serde(default = "default_quantity_fit_points")]
    pub quantity_fit: i32,
    #[serde(default = "default_freshness_points")]
    pub freshness: i32,
    #[serde(default = "default_freshness_window_hours")]
    pub freshness_window_hours: u32,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            exact_food_type: default_exact_food_points(),
            any_food_type: default_any_food_points(),
            quantity_fit: default_quantity_fit_points(),
            freshness: default_freshness_points(),
            freshness_window_hours: default_freshness_window_hours(),
        }
    }
}

fn default_exact_food_points() -> i32 { 2 }
fn default_any_food_points() -> i32 { 1 }
fn default_quantity_fit_points() -> i32 { 1 }
fn default_freshness_points() -> i32 { 1 }
fn default_freshness_window_hours() -> u32 { 12 }

/// A recipient entry as written in the configuration file
#[derive(Debug, Clone, Deserialize)]
pub struct RecipientSettings {
    pub name: String,
    pub desired_food_type: String,
    pub max_quantity: f64,
}

impl From<RecipientSettings> for Recipient {
    fn from(value: RecipientSettings) -> Self {
        Recipient {
            name: value.name,
            desired_food_type: value.desired_food_type,
            max_quantity: value.max_quantity,
        }
    }
}

fn default_recipients() -> Vec<RecipientSettings> {
    vec![
        RecipientSettings {
            name: "Feeding India".to_string(),
            desired_food_type: "Rice".to_string(),
            max_quantity: 10.0,
        },
        RecipientSettings {
            name: "Robin Hood Army".to_string(),
            desired_food_type: "Vegetables".to_string(),
            max_quantity: 15.0,
        },
        RecipientSettings {
            name: "AnyHelp".to_string(),
            desired_food_type: "Any".to_string(),
            max_quantity: 20.0,
        },
    ]
}

/// Gradient descent parameters for the startup model fit
#[derive(Debug, Clone, Deserialize)]
pub struct PredictorSettings {
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
}

impl Default for PredictorSettings {
    fn default() -> Self {
        Self {
            learning_rate: default_learning_rate(),
            iterations: default_iterations(),
        }
    }
}

fn default_learning_rate() -> f64 { 0.0005 }
fn default_iterations() -> u32 { 100_000 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with MEALBRIDGE_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with MEALBRIDGE_)
            // e.g., MEALBRIDGE_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("MEALBRIDGE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("MEALBRIDGE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Convert the configured recipient list into the runtime registry
    pub fn recipient_registry(&self) -> Vec<Recipient> {
        self.recipients.iter().cloned().map(Into::into).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring() {
        let scoring = ScoringSettings::default();
        assert_eq!(scoring.exact_food_type, 2);
        assert_eq!(scoring.any_food_type, 1);
        assert_eq!(scoring.quantity_fit, 1);
        assert_eq!(scoring.freshness, 1);
        assert_eq!(scoring.freshness_window_hours, 12);
    }

    #[test]
    fn test_default_recipients() {
        let recipients = default_recipients();
        assert_eq!(recipients.len(), 3);
        assert_eq!(recipients[0].name, "Feeding India");
        assert_eq!(recipients[2].desired_food_type, "Any");
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_settings_deserialize_from_empty_source() {
        let settings: Settings = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.recipient_registry().len(), 3);
    }
}
