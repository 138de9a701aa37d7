//! Code Outline - navigable outlines for script and stylesheet documents
//!
//! This crate scans JavaScript and CSS text for function definitions and
//! selectors, and keeps a flat outline in sync with a host editor using
//! the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod dialect;
pub mod fs_watcher;
pub mod host;
pub mod messages;
pub mod model;
pub mod outline;
pub mod preferences;
pub mod runtime;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::{DisplayOptions, OptionId};
pub use dialect::Dialect;
pub use host::Host;
pub use messages::Msg;
pub use model::{OutlineModel, SourceDocument};
pub use outline::{build_outline, EntryCategory, OutlineEntry};
pub use preferences::{PreferenceStore, YamlPreferenceStore};
pub use runtime::OutlineRuntime;
