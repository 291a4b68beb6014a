use std::fs;

use cspconf::config::{ConfigError, ProjectConfig};
use cspconf::options::resolve_environment;
use tempfile::TempDir;

const PROJECT: &str = r#"
default_env = "linux_x86_64"

[env.linux_x86_64]
custom_csp_options = """
    with-os=posix
    with-loglevel=debug
    with-rtable=cidr
    enable-can-socketcan
    with-driver-usart=linux
"""

[env.win]
custom_csp_options = """
    with-os=windows
    with-loglevel=error
    with-rtable=static
"""
"#;

fn write_project(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("csp.toml");
    fs::write(&path, content).expect("Failed to write project file");
    (temp_dir, path)
}

/// Test loading a project file and resolving its default environment.
#[test]
fn test_load_and_resolve_default_env() {
    let (_dir, path) = write_project(PROJECT);
    let project = ProjectConfig::load(&path).expect("Should load project");

    let name = project.select_environment(None, None).unwrap();
    assert_eq!(name, "linux_x86_64");

    let resolved = resolve_environment(&name, project.options_for(&name).unwrap()).unwrap();
    assert_eq!(resolved.environment, "linux_x86_64");
    assert_eq!(resolved.artifacts.libs, vec!["-lrt", "-lpthread", "-lutil"]);
    assert!(resolved
        .artifacts
        .src_filter
        .contains(&"+<drivers/can/can_socketcan.c>".to_string()));
    assert!(resolved.warnings.is_empty());
}

/// Test that the process environment value overrides default_env.
#[test]
fn test_process_env_selects_environment() {
    let (_dir, path) = write_project(PROJECT);
    let project = ProjectConfig::load(&path).unwrap();

    let name = project.select_environment(None, Some("win")).unwrap();
    let resolved = resolve_environment(&name, project.options_for(&name).unwrap()).unwrap();
    assert_eq!(resolved.artifacts.extra_flags, vec!["-D_WIN32_WINNT=0x0600"]);
}

/// Test that a missing file produces a read error naming the path.
#[test]
fn test_missing_file_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    match ProjectConfig::load(&path).unwrap_err() {
        ConfigError::ReadError { path: p, .. } => assert_eq!(p, path),
        other => panic!("Expected ReadError, got {other:?}"),
    }
}

/// Test that invalid TOML produces a parse error.
#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_project("this is not valid toml [[[");
    assert!(matches!(
        ProjectConfig::load(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

/// Test that an unknown environment is reported, not silently defaulted.
#[test]
fn test_unknown_environment() {
    let (_dir, path) = write_project(PROJECT);
    let project = ProjectConfig::load(&path).unwrap();

    assert!(matches!(
        project.options_for("uno"),
        Err(ConfigError::EnvironmentNotFound { name, .. }) if name == "uno"
    ));
}
