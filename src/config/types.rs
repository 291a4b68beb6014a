use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root of a project file: named build environments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Environment used when neither `--env` nor `PIOENV` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_env: Option<String>,
    /// Build environments keyed by name (e.g. "linux_x86_64", "uno").
    #[serde(default)]
    pub env: BTreeMap<String, EnvironmentConfig>,
}

/// A single build environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Raw CSP option text, one option per line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_csp_options: Option<String>,
}
