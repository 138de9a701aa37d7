//! Where code-outline keeps its preferences and logs
//!
//! ```text
//! code-outline/
//!   config.yaml   display options under the `outline:` key, next to other tools' keys
//!   logs/         daily-rotated `code-outline.log.*` files
//! ```
//!
//! The directory is `~/.config/code-outline/` (or `$XDG_CONFIG_HOME`) on
//! Unix and macOS, and `%APPDATA%\code-outline\` on Windows. `--config`
//! replaces only the preference file; logs stay here.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "code-outline";

/// Base name of the rolling log files
pub const LOG_FILE_PREFIX: &str = "code-outline.log";

/// Base config directory for code-outline
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/code-outline`
///   - Else: `~/.config/code-outline`
///
/// Windows:
///   - `%APPDATA%\code-outline`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/code-outline/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/code-outline/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure the base config dir exists, returning it
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    let dir = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let config = ensure_config_dir()?;
    let logs = config.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}
