use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, ConfigCommand};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Loads a command tree from a TOML file and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), root = %config.root.name, "loaded command tree");
        Ok(config)
    }

    /// Parses and validates in-memory TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: PathBuf::from("<string>"),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the command tree.
    ///
    /// Checks:
    /// - The root command has a name
    /// - Command names are non-empty and don't start with `-`
    /// - Flag names start with `-` and are not a bare `--`
    /// - No duplicate sibling commands or duplicate flags on one command
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root.name.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Root command must have a name".to_string(),
            });
        }
        validate_command(&self.root, &self.root.name)
    }
}

fn validate_command(command: &ConfigCommand, path: &str) -> Result<(), ConfigError> {
    let mut flag_names = HashSet::new();
    for flag in &command.flags {
        if !flag.name.starts_with('-') || flag.name == "--" {
            return Err(ConfigError::ValidationError {
                message: format!("Invalid flag name '{}' on command '{}'", flag.name, path),
            });
        }
        if !flag_names.insert(flag.name.as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!("Duplicate flag '{}' on command '{}'", flag.name, path),
            });
        }
    }

    let mut command_names = HashSet::new();
    for child in &command.commands {
        if child.name.is_empty() || child.name.starts_with('-') {
            return Err(ConfigError::ValidationError {
                message: format!("Invalid subcommand name '{}' under '{}'", child.name, path),
            });
        }
        if !command_names.insert(child.name.as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!("Duplicate subcommand '{}' under '{}'", child.name, path),
            });
        }
        validate_command(child, &format!("{} {}", path, child.name))?;
    }

    Ok(())
}
