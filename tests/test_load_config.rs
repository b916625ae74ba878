use gittomd::load_config::{load_config, AppConfig, Overrides, GIT_BINARY_ENV};
use gittomd_core::config::CloneConfig;
use serial_test::serial;
use std::env;
use std::fs::write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn config_file(yaml: &str) -> NamedTempFile {
    let file = NamedTempFile::new().expect("temp file");
    write(file.path(), yaml).unwrap();
    file
}

#[test]
#[serial]
fn test_defaults_without_file() {
    env::remove_var(GIT_BINARY_ENV);
    let config = load_config(None, Overrides::default()).expect("defaults load");
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.clone.depth, 1);
    assert_eq!(config.clone.git_binary, "git");
}

#[test]
#[serial]
fn test_file_values_are_applied() {
    env::remove_var(GIT_BINARY_ENV);
    let file = config_file(
        r#"
clone:
  depth: 5
  reference: develop
  git_binary: /usr/local/bin/git
output: ./docs/repo.md
"#,
    );

    let config = load_config(Some(file.path()), Overrides::default()).unwrap();
    assert_eq!(
        config.clone,
        CloneConfig {
            depth: 5,
            reference: Some("develop".into()),
            git_binary: "/usr/local/bin/git".into(),
        }
    );
    assert_eq!(config.output, Some(PathBuf::from("./docs/repo.md")));
}

#[test]
#[serial]
fn test_flags_override_file_and_env_overrides_binary() {
    env::set_var(GIT_BINARY_ENV, "/opt/git");
    let file = config_file("clone:\n  depth: 5\n  reference: develop\n");

    let config = load_config(
        Some(file.path()),
        Overrides {
            depth: Some(0),
            reference: Some("v1.0".into()),
            output: Some(PathBuf::from("out.md")),
        },
    )
    .unwrap();
    env::remove_var(GIT_BINARY_ENV);

    assert_eq!(config.clone.depth, 0);
    assert_eq!(config.clone.reference.as_deref(), Some("v1.0"));
    assert_eq!(config.clone.git_binary, "/opt/git");
    assert_eq!(config.output, Some(PathBuf::from("out.md")));
}

#[test]
#[serial]
fn test_empty_file_means_defaults() {
    env::remove_var(GIT_BINARY_ENV);
    let file = config_file("");
    let config = load_config(Some(file.path()), Overrides::default()).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
#[serial]
fn test_invalid_yaml_is_rejected() {
    let file = config_file("clone:\n  depth: not-a-number\n");
    let err = load_config(Some(file.path()), Overrides::default()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config YAML"));
}
