//! Configuration system tests
//!
//! Tests for config paths and the YAML preference file.

mod common;

use code_outline::config::{DisplayOptions, OptionId, PREFERENCE_NAMESPACE};
use code_outline::config_paths;
use code_outline::preferences::{PreferenceStore, PreferenceValue, YamlPreferenceStore};
use code_outline::runtime::OutlineRuntime;

use common::{stored, RecordingHost};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("code-outline"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    let config = config_paths::config_dir().unwrap();
    let logs = config_paths::logs_dir().unwrap();
    assert!(logs.starts_with(&config));
}

// ========================================================================
// Preference File Tests
// ========================================================================

#[test]
fn test_missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let mut store = YamlPreferenceStore::open(&path, PREFERENCE_NAMESPACE);
    let options = DisplayOptions::load(&mut store);

    assert_eq!(options, DisplayOptions::default());
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("outline:"));
    assert!(content.contains("enabled: true"));
    assert!(content.contains("unnamed: true"));
    assert!(content.contains("args: true"));
}

#[test]
fn test_stored_values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let mut store = YamlPreferenceStore::open(&path, PREFERENCE_NAMESPACE);
    store.set("args", PreferenceValue::Boolean(false));
    store.persist().unwrap();

    let mut reopened = YamlPreferenceStore::open(&path, PREFERENCE_NAMESPACE);
    let options = DisplayOptions::load(&mut reopened);
    assert!(!options.show_arguments);
    assert!(options.enabled);
}

#[test]
fn test_other_namespaces_are_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "editor:\n  theme: dark\noutline:\n  enabled: false\n").unwrap();

    let mut store = YamlPreferenceStore::open(&path, PREFERENCE_NAMESPACE);
    let options = DisplayOptions::load(&mut store);
    assert!(!options.enabled);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("theme: dark"));
    assert!(content.contains("enabled: false"));
}

#[test]
fn test_non_mapping_namespaces_are_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "recent:\n  - a.js\n  - b.js\noutline:\n  enabled: false\n").unwrap();

    let mut store = YamlPreferenceStore::open(&path, PREFERENCE_NAMESPACE);
    let options = DisplayOptions::load(&mut store);
    assert!(!options.enabled, "stored enabled: false must be kept");
    assert!(options.show_arguments);

    let content = std::fs::read_to_string(&path).unwrap();
    let document: serde_yaml::Value = serde_yaml::from_str(&content).unwrap();
    assert_eq!(
        document["recent"],
        serde_yaml::from_str::<serde_yaml::Value>("[a.js, b.js]").unwrap()
    );
    assert_eq!(document["outline"]["enabled"], serde_yaml::Value::Bool(false));
    assert_eq!(document["outline"]["args"], serde_yaml::Value::Bool(true));
}

#[test]
fn test_malformed_file_is_backed_up_then_repaired() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let malformed = "outline: [not, a, mapping";
    std::fs::write(&path, malformed).unwrap();

    let mut store = YamlPreferenceStore::open(&path, PREFERENCE_NAMESPACE);
    let options = DisplayOptions::load(&mut store);
    assert_eq!(options, DisplayOptions::default());

    let backup = dir.path().join("config.yaml.bak");
    assert_eq!(std::fs::read_to_string(backup).unwrap(), malformed);

    let reopened = YamlPreferenceStore::open(&path, PREFERENCE_NAMESPACE);
    assert_eq!(
        reopened.get("enabled"),
        Some(PreferenceValue::Boolean(true))
    );
}

#[test]
fn test_runtime_toggles_are_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let store = YamlPreferenceStore::open(&path, PREFERENCE_NAMESPACE);
    let mut runtime = OutlineRuntime::start(RecordingHost::default(), store);
    runtime.toggle(OptionId::ShowUnnamedFunctions);
    runtime.toggle(OptionId::Enabled);
    assert_eq!(stored(runtime.store(), OptionId::Enabled), Some(false));

    let reopened = YamlPreferenceStore::open(&path, PREFERENCE_NAMESPACE);
    assert_eq!(stored(&reopened, OptionId::Enabled), Some(false));
    assert_eq!(stored(&reopened, OptionId::ShowUnnamedFunctions), Some(false));
    assert_eq!(stored(&reopened, OptionId::ShowArguments), Some(true));
}
