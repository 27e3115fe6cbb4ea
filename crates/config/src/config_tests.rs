//! Unit tests for configuration loading

use crate::{parse_masters, ConfigLoader, ConfigSource, ManagerConfig};
use proptest::prelude::*;
use serial_test::serial;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;
use volman_core::{Error, VOLMAN_MASTERS_VAR, VOLMAN_USE_SSL_VAR};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_defaults_without_sources() {
    let (config, source) = ConfigLoader::new().load_with_env(env_from(&[])).unwrap();
    assert_eq!(config, ManagerConfig::default());
    assert_eq!(source, ConfigSource::Default);
}

#[test]
fn test_file_then_env_precedence() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("volman.json");
    fs::write(
        &path,
        r#"{ "masters": ["10.0.0.1:17010", "10.0.0.2:17010"], "useSsl": true }"#,
    )
    .unwrap();

    let (config, source) = ConfigLoader::new()
        .file(&path)
        .load_with_env(env_from(&[]))
        .unwrap();
    assert_eq!(config.masters, vec!["10.0.0.1:17010", "10.0.0.2:17010"]);
    assert!(config.use_ssl);
    assert_eq!(source, ConfigSource::ConfigFile(path.clone()));

    let (config, source) = ConfigLoader::new()
        .file(&path)
        .load_with_env(env_from(&[
            (VOLMAN_MASTERS_VAR, "m1:17010, m2:17010"),
            (VOLMAN_USE_SSL_VAR, "false"),
        ]))
        .unwrap();
    assert_eq!(config.masters, vec!["m1:17010", "m2:17010"]);
    assert!(!config.use_ssl);
    assert_eq!(
        source,
        ConfigSource::EnvironmentVariable(VOLMAN_MASTERS_VAR.to_string())
    );
}

#[test]
fn test_blank_endpoint_rejected() {
    let err = ConfigLoader::new()
        .load_with_env(env_from(&[(VOLMAN_MASTERS_VAR, "m1:17010,,m2:17010")]))
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("position 1"));
}

#[test]
fn test_require_masters() {
    let err = ConfigLoader::new()
        .require_masters(true)
        .load_with_env(env_from(&[]))
        .unwrap_err();
    assert!(err.to_string().contains("no master endpoints"));
}

#[test]
fn test_invalid_ssl_flag() {
    let err = ConfigLoader::new()
        .load_with_env(env_from(&[(VOLMAN_USE_SSL_VAR, "maybe")]))
        .unwrap_err();
    assert!(err.to_string().contains(VOLMAN_USE_SSL_VAR));
}

#[test]
fn test_missing_and_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.json");
    let err = ConfigLoader::new()
        .file(&missing)
        .load_with_env(env_from(&[]))
        .unwrap_err();
    assert!(matches!(err, Error::FileSystem { .. }));

    let malformed = temp_dir.path().join("bad.json");
    fs::write(&malformed, "{ masters: ").unwrap();
    let err = ConfigLoader::new()
        .file(&malformed)
        .load_with_env(env_from(&[]))
        .unwrap_err();
    assert!(matches!(err, Error::Json { .. }));
}

#[test]
#[serial]
fn test_load_reads_process_environment() {
    std::env::set_var(VOLMAN_MASTERS_VAR, "env-master:17010");
    std::env::set_var(VOLMAN_USE_SSL_VAR, "yes");
    let result = ConfigLoader::new().load();
    std::env::remove_var(VOLMAN_MASTERS_VAR);
    std::env::remove_var(VOLMAN_USE_SSL_VAR);

    let (config, _) = result.unwrap();
    assert_eq!(config.masters, vec!["env-master:17010"]);
    assert!(config.use_ssl);
}

#[test]
#[serial]
fn test_skip_env_ignores_process_environment() {
    std::env::set_var(VOLMAN_MASTERS_VAR, "ignored:17010");
    let result = ConfigLoader::new().skip_env(true).load();
    std::env::remove_var(VOLMAN_MASTERS_VAR);

    let (config, source) = result.unwrap();
    assert!(config.masters.is_empty());
    assert_eq!(source, ConfigSource::Default);
}

proptest! {
    #[test]
    fn prop_parse_masters_preserves_order(hosts in prop::collection::vec("[a-z0-9.]{1,16}:[0-9]{2,5}", 1..8)) {
        let raw = hosts.join(" , ");
        prop_assert_eq!(parse_masters(&raw), hosts);
    }
}
