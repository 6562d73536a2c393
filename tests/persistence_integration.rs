//! Integration tests for the settings store.
//!
//! These tests exercise `ConfigStore` over the file backend in a temp dir.

use tempfile::TempDir;

use jira_pilot::core::types::JiraConfig;
use jira_pilot::store::{ConfigStore, FileKvStore, KvStore, CONFIG_KEY};

fn sample() -> JiraConfig {
    JiraConfig {
        url: "https://acme.atlassian.net".to_string(),
        email: "qa@acme.test".to_string(),
        api_token: "secret-token".to_string(),
        project_key: "QA".to_string(),
    }
}

#[test]
fn saved_settings_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/store.toml");

    ConfigStore::open(Some(path.clone()))
        .unwrap()
        .save(CONFIG_KEY, &sample())
        .unwrap();

    let loaded = ConfigStore::open(Some(path))
        .unwrap()
        .load(CONFIG_KEY, JiraConfig::default());
    assert_eq!(loaded, sample());
}

#[test]
fn save_overwrites_previous_record() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::open(Some(dir.path().join("store.toml"))).unwrap();

    store.save(CONFIG_KEY, &sample()).unwrap();
    let mut updated = sample();
    updated.project_key = "WEB".to_string();
    store.save(CONFIG_KEY, &updated).unwrap();

    assert_eq!(store.load(CONFIG_KEY, JiraConfig::default()), updated);
}

#[test]
fn never_saved_key_returns_default() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::open(Some(dir.path().join("store.toml"))).unwrap();

    let default = JiraConfig {
        project_key: "DEFAULT".to_string(),
        ..JiraConfig::default()
    };
    assert_eq!(store.load(CONFIG_KEY, default.clone()), default);
}

#[test]
fn malformed_record_returns_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.toml");
    FileKvStore::with_path(&path)
        .set(CONFIG_KEY, "{not json")
        .unwrap();

    let store = ConfigStore::open(Some(path)).unwrap();
    assert_eq!(
        store.load(CONFIG_KEY, JiraConfig::default()),
        JiraConfig::default()
    );
}

#[test]
fn corrupt_store_file_returns_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.toml");
    std::fs::write(&path, "this is [not toml").unwrap();

    let store = ConfigStore::open(Some(path)).unwrap();
    assert_eq!(
        store.load(CONFIG_KEY, JiraConfig::default()),
        JiraConfig::default()
    );
}

#[test]
fn record_is_camel_case_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.toml");
    ConfigStore::open(Some(path.clone()))
        .unwrap()
        .save(CONFIG_KEY, &sample())
        .unwrap();

    let raw = FileKvStore::with_path(&path).get(CONFIG_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["apiToken"], "secret-token");
    assert_eq!(value["projectKey"], "QA");
}

#[cfg(unix)]
#[test]
fn store_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.toml");
    ConfigStore::open(Some(path.clone()))
        .unwrap()
        .save(CONFIG_KEY, &sample())
        .unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
