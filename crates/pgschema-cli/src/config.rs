use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::formatter::OutputFormat;

/// pgschema configuration loaded from ~/.pgschemarc
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Default output format: table, json
    #[serde(default = "default_format")]
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level used when RUST_LOG is not set: trace, debug, info, warn, error
    #[serde(default = "default_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Skip statements other than CREATE TABLE instead of reporting them
    #[serde(default = "default_true")]
    pub skip_unsupported: bool,

    /// Keep going after a statement fails to parse
    #[serde(default)]
    pub continue_on_error: bool,
}

// Default value functions
fn default_format() -> String {
    "table".to_string()
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { format: default_format() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig { level: default_level() }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig { skip_unsupported: default_true(), continue_on_error: false }
    }
}

impl Config {
    /// Load configuration from `path`, or from ~/.pgschemarc when no path is given.
    ///
    /// A missing default file yields the defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = Self::config_path()?;
                if !default_path.exists() {
                    return Ok(Config::default());
                }
                default_path
            }
        };

        let content = fs::read_to_string(&config_path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", config_path.display(), e)
        })?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))
    }

    /// Get the configuration file path (~/.pgschemarc)
    pub fn config_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(home.join(".pgschemarc"))
    }

    /// Get the output format as OutputFormat enum
    pub fn get_output_format(&self) -> Option<OutputFormat> {
        OutputFormat::parse(&self.display.format)
    }
}
