use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "canopy.config.json";

/// Canopy configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Design document to render, relative to the config directory
    #[serde(default = "default_document")]
    pub document: String,

    /// Viewport width used when a command does not pass `--width`
    #[serde(default = "default_width")]
    pub default_width: f64,
}

fn default_document() -> String {
    "design.json".to_string()
}

fn default_width() -> f64 {
    1280.0
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid config file {}", config_path.display()))?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Absolute path to the design document
    pub fn document_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.document)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document: default_document(),
            default_width: default_width(),
        }
    }
}
