//! Preference storage
//!
//! Preferences are namespaced key/value pairs persisted to
//! `~/.config/code-outline/config.yaml`, one YAML mapping per namespace:
//!
//! ```yaml
//! outline:
//!   enabled: true
//!   unnamed: true
//!   args: false
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_yaml::{Mapping, Value};

/// A scalar preference value
#[derive(Debug, Clone, PartialEq)]
pub enum PreferenceValue {
    Boolean(bool),
    Number(f64),
    Text(String),
}

impl PreferenceValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PreferenceValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    fn from_yaml(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(PreferenceValue::Boolean(*b)),
            Value::Number(n) => n.as_f64().map(PreferenceValue::Number),
            Value::String(s) => Some(PreferenceValue::Text(s.clone())),
            _ => None,
        }
    }

    fn to_yaml(&self) -> Value {
        match self {
            PreferenceValue::Boolean(b) => Value::Bool(*b),
            PreferenceValue::Number(n) => Value::Number((*n).into()),
            PreferenceValue::Text(s) => Value::String(s.clone()),
        }
    }
}

/// Declared type of a preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceType {
    Boolean,
    Number,
    Text,
}

/// Host preference storage, scoped to one namespace
pub trait PreferenceStore {
    /// Stored value, or the defined default when nothing is stored
    fn get(&self, key: &str) -> Option<PreferenceValue>;

    /// Store a value in memory (call [`PreferenceStore::persist`] to write it out)
    fn set(&mut self, key: &str, value: PreferenceValue);

    /// Declare a preference with its type and default
    fn define(&mut self, key: &str, kind: PreferenceType, default: PreferenceValue);

    /// Write all stored values to the backing medium
    fn persist(&mut self) -> Result<()>;
}

/// YAML file backed preference store
///
/// The file's top-level mapping is kept as read, so keys owned by other
/// namespaces survive a persist untouched. A store without a path keeps
/// everything in memory and persisting is a no-op.
#[derive(Debug, Clone)]
pub struct YamlPreferenceStore {
    path: Option<PathBuf>,
    namespace: String,
    document: Mapping,
    /// Set when the file existed but could not be parsed; it is backed up before the first write
    unparsed: bool,
    definitions: BTreeMap<String, (PreferenceType, PreferenceValue)>,
}

impl YamlPreferenceStore {
    /// Store that never touches the disk
    pub fn in_memory(namespace: &str) -> Self {
        Self {
            path: None,
            namespace: namespace.to_string(),
            document: Mapping::new(),
            unparsed: false,
            definitions: BTreeMap::new(),
        }
    }

    /// Store backed by the default config file, or in memory if there is no config directory
    pub fn load_default(namespace: &str) -> Self {
        match crate::config_paths::config_file() {
            Some(path) => Self::open(path, namespace),
            None => {
                tracing::debug!("No config directory available, keeping preferences in memory");
                Self::in_memory(namespace)
            }
        }
    }

    /// Load preferences from `path`
    ///
    /// A missing or unreadable file starts the store empty. An unparsable
    /// file also starts empty and is copied to `<path>.bak` before it is
    /// first overwritten.
    pub fn open(path: impl Into<PathBuf>, namespace: &str) -> Self {
        let path = path.into();
        let (document, unparsed) = match read_document(&path) {
            Ok(document) => (document, false),
            Err(e) => {
                tracing::warn!("Failed to parse preferences at {}: {}", path.display(), e);
                (Mapping::new(), true)
            }
        };

        Self {
            path: Some(path),
            namespace: namespace.to_string(),
            document,
            unparsed,
            definitions: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn values(&self) -> Option<&Mapping> {
        self.document
            .get(self.namespace.as_str())
            .and_then(Value::as_mapping)
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

/// Read the top-level mapping of the preference file
///
/// Missing, unreadable and empty files give an empty mapping; only content
/// that is not a YAML mapping is an error.
fn read_document(path: &Path) -> Result<Mapping> {
    if !path.exists() {
        tracing::debug!(
            "Preference file not found at {}, using defaults",
            path.display()
        );
        return Ok(Mapping::new());
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to read preferences at {}: {}", path.display(), e);
            return Ok(Mapping::new());
        }
    };

    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(&content)? {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(document) => {
            tracing::info!("Loaded preferences from {}", path.display());
            Ok(document)
        }
        _ => anyhow::bail!("top level is not a mapping"),
    }
}

impl PreferenceStore for YamlPreferenceStore {
    fn get(&self, key: &str) -> Option<PreferenceValue> {
        match self.values().and_then(|values| values.get(key)) {
            Some(stored) => PreferenceValue::from_yaml(stored),
            None => self
                .definitions
                .get(key)
                .map(|(_, default)| default.clone()),
        }
    }

    fn set(&mut self, key: &str, value: PreferenceValue) {
        let slot = self
            .document
            .entry(Value::String(self.namespace.clone()))
            .or_insert(Value::Mapping(Mapping::new()));
        if !slot.is_mapping() {
            tracing::warn!(
                "Preference namespace '{}' is not a mapping, replacing it",
                self.namespace
            );
            *slot = Value::Mapping(Mapping::new());
        }
        if let Value::Mapping(values) = slot {
            values.insert(Value::String(key.to_string()), value.to_yaml());
        }
    }

    fn define(&mut self, key: &str, kind: PreferenceType, default: PreferenceValue) {
        self.definitions.insert(key.to_string(), (kind, default));
    }

    fn persist(&mut self) -> Result<()> {
        let Some(path) = self.path.as_ref() else {
            tracing::debug!("In-memory preference store, nothing to persist");
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        if self.unparsed && path.exists() {
            let backup = backup_path(path);
            std::fs::copy(path, &backup)
                .with_context(|| format!("Failed to back up preferences to {}", backup.display()))?;
            tracing::warn!("Backed up unparsable preferences to {}", backup.display());
        }
        self.unparsed = false;

        let content =
            serde_yaml::to_string(&self.document).context("Failed to serialize preferences")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write preferences to {}", path.display()))?;

        tracing::info!(
            "Saved '{}' preferences to {}",
            self.namespace,
            path.display()
        );
        Ok(())
    }
}
