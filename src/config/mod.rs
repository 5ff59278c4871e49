use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::DEFAULT_BASE_URL;
use crate::error::{Error, Result};

/// Settings read from `suggest2csv.toml`. Every key is optional and
/// command-line flags take precedence.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub output_dir: Option<PathBuf>,
    pub verbose: bool,
}

impl FileConfig {
    /// First config file found on the search path, if any parses.
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Read an explicitly requested config file. Unlike [`FileConfig::load`],
    /// a missing or invalid file is an error.
    pub fn from_path(path: &Path) -> Result<Self> {
        let config_error = |reason: String| Error::Config {
            path: path.display().to_string(),
            reason,
        };

        if !path.exists() {
            return Err(config_error("file not found".to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| config_error(e.message().to_string()))
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("suggest2csv.toml"),
        PathBuf::from(".suggest2csv.toml"),
    ];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("suggest2csv").join("config.toml"));
        paths.push(config_dir.join("suggest2csv.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".suggest2csv.toml"));
    }

    paths
}

/// What a single conversion needs: where to ask, and for which city.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterConfig {
    pub base_url: String,
    pub city: String,
    /// `None` keeps the HTTP client's default timeout.
    pub timeout: Option<Duration>,
}

impl ConverterConfig {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            city: city.into(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full request URL for this city.
    pub fn url(&self) -> String {
        crate::api::build_url(&self.base_url, &self.city)
    }
}
