//! Project file describing the build environments and their CSP options.

mod loader;
mod types;

pub use loader::{ConfigError, DEFAULT_PROJECT_FILE, ENV_NAME_VAR};
pub use types::{EnvironmentConfig, ProjectConfig};
