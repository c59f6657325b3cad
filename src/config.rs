use crate::error::{Result, XlsheetError};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y_%H%M";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub discovery: DiscoveryConfig,
    pub output: OutputConfig,
    pub sheets: SheetConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    pub recurse: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub output_root: Option<PathBuf>,
    pub log_root: Option<PathBuf>,
    pub date_format: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SheetConfig {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_root: None,
            log_root: None,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(XlsheetError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| XlsheetError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| XlsheetError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["xlsheet2csv.toml", ".xlsheet2csv.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if cli_args.recurse {
            self.discovery.recurse = true;
        }

        if let Some(ref output_root) = cli_args.output_root {
            self.output.output_root = Some(output_root.clone());
        }

        if let Some(ref log_root) = cli_args.log_root {
            self.output.log_root = Some(log_root.clone());
        }

        if let Some(ref date_format) = cli_args.date_format {
            self.output.date_format = date_format.clone();
        }

        if let Some(ref include) = cli_args.include {
            self.sheets.include = include.clone();
        }

        if let Some(ref exclude) = cli_args.exclude {
            self.sheets.exclude = exclude.clone();
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| XlsheetError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| XlsheetError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.output.date_format.is_empty() {
            return Err(XlsheetError::Config {
                message: "Date format must not be empty".to_string(),
            });
        }

        // chrono panics at format time on bad specifiers, so reject them here
        if StrftimeItems::new(&self.output.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(XlsheetError::Config {
                message: format!(
                    "Invalid strftime date format: {}",
                    self.output.date_format
                ),
            });
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub recurse: bool,
    pub output_root: Option<PathBuf>,
    pub log_root: Option<PathBuf>,
    pub date_format: Option<String>,
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recurse(mut self, recurse: bool) -> Self {
        self.recurse = recurse;
        self
    }

    pub fn with_output_root(mut self, output_root: Option<PathBuf>) -> Self {
        self.output_root = output_root;
        self
    }

    pub fn with_log_root(mut self, log_root: Option<PathBuf>) -> Self {
        self.log_root = log_root;
        self
    }

    pub fn with_date_format(mut self, date_format: Option<String>) -> Self {
        self.date_format = date_format;
        self
    }

    pub fn with_include(mut self, include: Option<Vec<String>>) -> Self {
        self.include = include;
        self
    }

    pub fn with_exclude(mut self, exclude: Option<Vec<String>>) -> Self {
        self.exclude = exclude;
        self
    }
}
