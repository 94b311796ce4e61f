//! Configuration for intellisort
//!
//! Defaults are compiled in; an optional TOML file overrides any subset of keys.

use crate::error::ConfigError;
use crate::image_classifier::models::model_config::ModelConfig;
use crate::waste::Category;
use chrono::Offset;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ONNX export of the trained classification model
    pub model_path: PathBuf,
    /// Class names in model output order
    pub labels: Vec<String>,
    /// Square input edge length expected by the model
    pub input_size: u32,
    pub top_k: usize,
    pub host: String,
    pub port: u16,
    pub max_request_bytes: usize,
    pub logger_utc_offset_hours: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("model/best.onnx"),
            labels: Category::ALL
                .iter()
                .map(|category| category.as_str().to_string())
                .collect(),
            input_size: 224,
            top_k: 5,
            host: "0.0.0.0".to_string(),
            port: 5000,
            max_request_bytes: 16 * 1024 * 1024,
            logger_utc_offset_hours: 0,
        }
    }
}

impl Config {
    /// Reads `path` as TOML when given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                        path: path.to_path_buf(),
                        source,
                    })?;
                toml::from_str(&content)?
            }
            None => Config::default(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.labels.is_empty() {
            return Err(ConfigError::Invalid("labels must not be empty".to_string()));
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = self.labels.iter().find(|label| !seen.insert(label.as_str())) {
            return Err(ConfigError::Invalid(format!(
                "duplicate label \"{}\"",
                duplicate
            )));
        }

        if self.top_k == 0 {
            return Err(ConfigError::Invalid("top_k must be at least 1".to_string()));
        }

        if self.input_size == 0 {
            return Err(ConfigError::Invalid(
                "input_size must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    pub fn model_config(&self) -> ModelConfig {
        ModelConfig {
            onnx_model_path: self.model_path.clone(),
            input_shape: (self.input_size, self.input_size),
            labels: self.labels.clone(),
        }
    }

    pub fn logger_timezone(&self) -> chrono::FixedOffset {
        chrono::FixedOffset::east_opt(self.logger_utc_offset_hours * 3600)
            .unwrap_or_else(|| chrono::Utc.fix())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
