//! Configuration loading with environment variable overrides.

use crate::schema::Config;
use chartpdf_common::{ChartPdfError, Result as ChartPdfResult};
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "CHARTPDF_CONFIG_PATH";

/// File names probed in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["config.yaml", "config.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A value is out of range or malformed
    #[error("Invalid configuration for '{field}': {message}")]
    Invalid {
        /// Dotted path of the offending field
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Variable name
        var: String,
        /// Parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for ChartPdfError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source("Failed to load configuration", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse(&content)?;
        debug!(path = %path.display(), "Parsed configuration file");

        Self::apply_env_overrides(&mut config)?;
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from YAML text without overrides or validation
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from an explicit path, `CHARTPDF_CONFIG_PATH`, a
    /// `config.yaml`/`config.yml` in the working directory, or defaults.
    pub fn load(explicit: Option<&Path>) -> ChartPdfResult<Config> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(|| {
                DEFAULT_CONFIG_FILES
                    .iter()
                    .map(PathBuf::from)
                    .find(|candidate| candidate.exists())
            });

        let config = if let Some(path) = path {
            info!(path = %path.display(), "Loading configuration file");
            Self::load_config(&path)?
        } else {
            info!("No configuration file found, using defaults");
            let mut config = Config::default();
            Self::apply_env_overrides(&mut config)?;
            config.validate()?;
            config
        };

        Ok(config)
    }

    /// Apply process environment overrides to configuration
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |var| env::var(var).ok())
    }

    /// Apply overrides using `lookup` to resolve variable names
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("CHARTPDF_HOST") {
            config.server.host = host;
        }

        if let Some(port) = lookup("CHARTPDF_PORT") {
            config.server.port = parse_var("CHARTPDF_PORT", &port)?;
        }

        if let Some(limit) = lookup("CHARTPDF_MAX_UPLOAD_BYTES") {
            config.server.max_upload_bytes = parse_var("CHARTPDF_MAX_UPLOAD_BYTES", &limit)?;
        }

        if let Some(dir) = lookup("CHARTPDF_UPLOAD_DIR") {
            config.storage.upload_dir = non_empty_path(dir);
        }

        if let Some(dir) = lookup("CHARTPDF_OUTPUT_DIR") {
            config.storage.output_dir = non_empty_path(dir);
        }

        if let Some(level) = lookup("CHARTPDF_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.trim().parse().map_err(|e| ConfigError::EnvParse {
        var: var.to_string(),
        source: Box::new(e),
    })
}

fn non_empty_path(value: String) -> Option<PathBuf> {
    if value.trim().is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_overrides_applied() {
        let mut config = Config::default();
        let lookup = lookup_from(&[
            ("CHARTPDF_HOST", "127.0.0.1"),
            ("CHARTPDF_PORT", "8080"),
            ("CHARTPDF_OUTPUT_DIR", "/tmp/out"),
            ("CHARTPDF_LOG_LEVEL", "debug"),
        ]);

        ConfigLoader::apply_overrides(&mut config, lookup).unwrap();

        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.storage.output_dir, Some(PathBuf::from("/tmp/out")));
        assert!(config.storage.upload_dir.is_none());
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_bad_port_override() {
        let mut config = Config::default();
        let err = ConfigLoader::apply_overrides(&mut config, lookup_from(&[("CHARTPDF_PORT", "http")]))
            .unwrap_err();
        assert!(err.to_string().contains("CHARTPDF_PORT"));
    }

    #[test]
    fn test_empty_dir_override_clears() {
        let mut config = Config::default();
        config.storage.upload_dir = Some(PathBuf::from("uploads"));
        ConfigLoader::apply_overrides(&mut config, lookup_from(&[("CHARTPDF_UPLOAD_DIR", "")]))
            .unwrap();
        assert!(config.storage.upload_dir.is_none());
    }

    #[test]
    fn test_parse_partial_yaml() {
        let config = ConfigLoader::parse("server:\n  port: 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.render.histogram_bins, 10);
    }

    #[test]
    fn test_parse_empty_yaml() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config.server.port, 10000);
    }
}
