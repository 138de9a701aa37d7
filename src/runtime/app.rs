//! Command-line application loop

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::cli::StartupConfig;
use crate::config::PREFERENCE_NAMESPACE;
use crate::fs_watcher::{FileSystemEvent, FileSystemWatcher};
use crate::messages::LifecycleEvent;
use crate::model::SourceDocument;
use crate::preferences::{PreferenceStore, YamlPreferenceStore};

use super::terminal::TerminalHost;
use super::OutlineRuntime;

/// Runtime driving a terminal host
pub type TerminalRuntime<W, S> = OutlineRuntime<TerminalHost<W>, S>;

/// Run the outline for the files in `config`, printing to stdout
pub fn run(config: StartupConfig) -> Result<()> {
    let store = match &config.config_path {
        Some(path) => YamlPreferenceStore::open(path, PREFERENCE_NAMESPACE),
        None => YamlPreferenceStore::load_default(PREFERENCE_NAMESPACE),
    };
    let host = TerminalHost::new(config.format, io::stdout());

    let mut runtime = start(&config, host, store)?;

    if config.watch {
        watch(&mut runtime)?;
    }

    Ok(())
}

/// Open every file, apply `--toggle` and `--goto`, and hand back the runtime
///
/// Each file after the first becomes current through `currentDocumentChanged`,
/// so every file is rendered once and the last one stays current.
pub fn start<W: Write, S: PreferenceStore>(
    config: &StartupConfig,
    mut host: TerminalHost<W>,
    store: S,
) -> Result<TerminalRuntime<W, S>> {
    let paths = config
        .paths
        .iter()
        .map(|path| {
            std::fs::canonicalize(path)
                .with_context(|| format!("Failed to open {}", path.display()))
        })
        .collect::<Result<Vec<PathBuf>>>()?;

    let (first, rest) = paths.split_first().context("No files to outline")?;
    host.open(load(first, config.language.as_deref())?);

    let mut runtime = OutlineRuntime::start(host, store);

    for path in rest {
        let document = load(path, config.language.as_deref())?;
        runtime.host_mut().open(document);
        deliver(&mut runtime, LifecycleEvent::CurrentDocumentChanged);
    }

    for option in &config.toggles {
        runtime.toggle(*option);
    }

    if let Some(row) = config.goto_row {
        runtime.select(row);
        if runtime.host().cursor().is_none() {
            tracing::warn!("No outline row {}", row + 1);
        }
    }

    Ok(runtime)
}

fn load(path: &Path, language: Option<&str>) -> Result<SourceDocument> {
    let mut document = SourceDocument::from_file(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if let Some(language) = language {
        document.set_language(language);
    }
    if !document.dialect.has_outline() {
        tracing::warn!(
            "{} is {}, which has no outline",
            document.display_name(),
            document.language_name
        );
    }
    tracing::info!(
        "Loaded {} as {}",
        document.display_name(),
        document.language_name
    );
    Ok(document)
}

/// Deliver a lifecycle event the way an event bus would: only to subscribers
fn deliver<W: Write, S: PreferenceStore>(
    runtime: &mut TerminalRuntime<W, S>,
    event: LifecycleEvent,
) {
    if runtime.host().is_subscribed(event) {
        runtime.notify(event);
    }
}

/// Apply one file event to the working set
///
/// A change to the current document is a save; a removed file leaves the
/// working set.
pub fn apply_file_event<W: Write, S: PreferenceStore>(
    runtime: &mut TerminalRuntime<W, S>,
    event: &FileSystemEvent,
) {
    match event {
        FileSystemEvent::Changed(path) => {
            let text = match std::fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("Failed to reload {}: {}", path.display(), e);
                    return;
                }
            };
            if runtime.host_mut().reload(path, &text) == Some(true) {
                deliver(runtime, LifecycleEvent::DocumentSaved);
            }
        }
        FileSystemEvent::Removed(path) => {
            if runtime.host_mut().remove(path) {
                deliver(runtime, LifecycleEvent::WorkingSetEntryRemoved);
            }
        }
    }
}

fn watch<W: Write, S: PreferenceStore>(runtime: &mut TerminalRuntime<W, S>) -> Result<()> {
    let paths: Vec<PathBuf> = runtime
        .host()
        .documents()
        .iter()
        .filter_map(|doc| doc.file_path.clone())
        .collect();
    let mut watcher = FileSystemWatcher::new(&paths).context("Failed to start file watcher")?;

    while let Some(events) = watcher.wait_events(Duration::from_secs(1)) {
        for event in &events {
            if let FileSystemEvent::Removed(path) = event {
                watcher.forget(path);
            }
            apply_file_event(runtime, event);
        }

        if runtime.host().documents().is_empty() {
            tracing::info!("Working set is empty, stopping");
            break;
        }
    }

    Ok(())
}
