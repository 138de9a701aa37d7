//! File watching for outlined documents
//!
//! Uses the `notify` crate with debouncing to detect saves and deletions
//! of the files in the working set. The parent directory of each file is
//! watched so that editors replacing files by rename are still seen.

use notify_debouncer_mini::{new_debouncer, DebouncedEventKind, Debouncer};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

/// Debounce delay between the last write and the emitted event
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Events emitted by the file watcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSystemEvent {
    /// A watched file was written (or recreated)
    Changed(PathBuf),
    /// A watched file no longer exists
    Removed(PathBuf),
}

impl FileSystemEvent {
    pub fn path(&self) -> &Path {
        match self {
            FileSystemEvent::Changed(p) | FileSystemEvent::Removed(p) => p,
        }
    }
}

type DebounceResult = Result<Vec<notify_debouncer_mini::DebouncedEvent>, notify::Error>;

/// Debounced watcher for a fixed set of files
pub struct FileSystemWatcher {
    /// The debouncer handles watching and event coalescing
    _debouncer: Debouncer<notify::RecommendedWatcher>,
    rx: Receiver<DebounceResult>,
    files: BTreeSet<PathBuf>,
}

impl FileSystemWatcher {
    /// Start watching `files`
    ///
    /// Paths are compared verbatim with the paths notify reports, so pass
    /// canonical paths.
    pub fn new(files: &[PathBuf]) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = new_debouncer(DEBOUNCE, tx)?;

        let parents: BTreeSet<&Path> = files.iter().filter_map(|f| f.parent()).collect();
        for parent in parents {
            debouncer
                .watcher()
                .watch(parent, notify::RecursiveMode::NonRecursive)?;
            tracing::debug!("Watching directory: {}", parent.display());
        }

        tracing::info!("Started file watcher for {} file(s)", files.len());

        Ok(Self {
            _debouncer: debouncer,
            rx,
            files: files.iter().cloned().collect(),
        })
    }

    /// Whether `path` is one of the watched files
    pub fn is_watched(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    /// Stop reporting events for `path`
    pub fn forget(&mut self, path: &Path) {
        self.files.remove(path);
    }

    /// Poll for pending events (non-blocking)
    pub fn poll_events(&self) -> Vec<FileSystemEvent> {
        let mut events = Vec::new();
        while let Ok(result) = self.rx.try_recv() {
            self.collect(result, &mut events);
        }
        events
    }

    /// Block until events arrive or `timeout` passes
    ///
    /// Returns `None` once the watcher has shut down.
    pub fn wait_events(&self, timeout: Duration) -> Option<Vec<FileSystemEvent>> {
        let mut events = Vec::new();
        match self.rx.recv_timeout(timeout) {
            Ok(result) => self.collect(result, &mut events),
            Err(RecvTimeoutError::Timeout) => return Some(events),
            Err(RecvTimeoutError::Disconnected) => return None,
        }
        events.extend(self.poll_events());
        Some(events)
    }

    fn collect(&self, result: DebounceResult, events: &mut Vec<FileSystemEvent>) {
        let debounced = match result {
            Ok(debounced) => debounced,
            Err(e) => {
                tracing::warn!("File watcher error: {:?}", e);
                return;
            }
        };

        for event in debounced {
            if matches!(event.kind, DebouncedEventKind::AnyContinuous) {
                continue;
            }
            if !self.is_watched(&event.path) {
                continue;
            }

            let fs_event = if event.path.exists() {
                FileSystemEvent::Changed(event.path)
            } else {
                FileSystemEvent::Removed(event.path)
            };

            // Deduplicate: keep only the latest state per path
            events.retain(|e| e.path() != fs_event.path());
            events.push(fs_event);
        }

        if !events.is_empty() {
            tracing::debug!("File watcher detected {} changes", events.len());
        }
    }
}
