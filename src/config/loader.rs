use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::ProjectConfig;

/// Process environment variable naming the active build environment.
pub const ENV_NAME_VAR: &str = "PIOENV";

/// Default project file name, relative to the working directory.
pub const DEFAULT_PROJECT_FILE: &str = "csp.toml";

/// Errors that can occur when loading a project file or selecting an environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read project file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse project file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Environment '{name}' not found (available: {available})")]
    EnvironmentNotFound { name: String, available: String },

    #[error("Environment '{name}' has no custom_csp_options")]
    MissingOptions { name: String },

    #[error("No build environment selected: pass --env, set PIOENV, or set default_env")]
    NoEnvironment,
}

impl ProjectConfig {
    /// Loads a project file from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Picks the environment name: explicit choice, then the process
    /// environment value, then `default_env`.
    pub fn select_environment(
        &self,
        explicit: Option<&str>,
        from_process_env: Option<&str>,
    ) -> Result<String, ConfigError> {
        explicit
            .filter(non_empty)
            .or(from_process_env.filter(non_empty))
            .or(self.default_env.as_deref().filter(non_empty))
            .map(String::from)
            .ok_or(ConfigError::NoEnvironment)
    }

    /// Raw option text of environment `name`.
    pub fn options_for(&self, name: &str) -> Result<&str, ConfigError> {
        let env = self
            .env
            .get(name)
            .ok_or_else(|| ConfigError::EnvironmentNotFound {
                name: name.to_string(),
                available: self.env.keys().cloned().collect::<Vec<_>>().join(", "),
            })?;

        env.custom_csp_options
            .as_deref()
            .ok_or_else(|| ConfigError::MissingOptions {
                name: name.to_string(),
            })
    }
}

fn non_empty(name: &&str) -> bool {
    !name.is_empty()
}
