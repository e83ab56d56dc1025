// ABOUTME: Configuration management for the acta application
// ABOUTME: Handles loading and merging configuration from files and environment variables

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::OutputFormat;
use crate::template::ContextBuilder;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_output_dir: Option<PathBuf>,

    #[serde(default)]
    pub output_format: OutputFormat,

    #[serde(default)]
    pub office: OfficeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Per-office values injected into every context
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfficeConfig {
    #[serde(default)]
    pub ville_signature: Option<String>,

    #[serde(default)]
    pub variables: IndexMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::find_config_file(),
        };

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            serde_yaml::from_str(&contents)?
        } else {
            Config::default()
        };

        config.merge_env();
        Ok(config)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> PathBuf {
        let possible_paths = [
            PathBuf::from("acta.yaml"),
            PathBuf::from("acta.yml"),
            PathBuf::from(".acta.yaml"),
            PathBuf::from(".acta.yml"),
        ];

        for path in possible_paths {
            if path.exists() {
                return path;
            }
        }

        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".acta").join("config.yaml");
            if home_config.exists() {
                return home_config;
            }
        }

        // Default path (may not exist)
        PathBuf::from("acta.yaml")
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) {
        if let Ok(level) = std::env::var("ACTA_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("ACTA_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Ok(ville) = std::env::var("ACTA_VILLE_SIGNATURE") {
            self.office.ville_signature = Some(ville);
        }
        if let Ok(dir) = std::env::var("ACTA_OUTPUT_DIR") {
            self.default_output_dir = Some(PathBuf::from(dir));
        }
    }

    /// Merge command line variables into office variables
    pub fn merge_variables(&mut self, vars: IndexMap<String, String>) {
        self.office.variables.extend(vars);
    }

    /// Context builder carrying this office's variables
    pub fn context_builder(&self) -> ContextBuilder {
        let mut builder = ContextBuilder::new();
        if let Some(ville) = &self.office.ville_signature {
            builder = builder.with_variable("ville_signature", ville.clone());
        }
        builder.with_variables(self.office.variables.clone())
    }

    /// Resolve an output path against `default_output_dir` when relative
    pub fn output_path(&self, path: PathBuf) -> PathBuf {
        match &self.default_output_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path,
        }
    }
}
