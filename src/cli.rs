//! Command-line argument parsing
//!
//! Supports:
//! - Outlining one or more files (the last one is current)
//! - Text or JSON output
//! - Overriding the language of every opened file
//! - Toggling options (persisted like the menu toggles)
//! - Jumping to an outline row
//! - Watch mode, re-outlining on save

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::OptionId;

/// Outline the functions of JavaScript files and the selectors of CSS files
#[derive(Parser, Debug)]
#[command(
    name = "code-outline",
    version,
    about = "Outline functions and selectors in JavaScript and CSS files"
)]
pub struct CliArgs {
    /// Files to outline
    #[arg(value_name = "PATHS", required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format for outline rows
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Language name to use instead of detecting it from the extension
    #[arg(long, value_name = "NAME")]
    pub language: Option<String>,

    /// Flip an option and persist it (repeatable)
    #[arg(long = "toggle", value_enum, value_name = "OPTION")]
    pub toggles: Vec<ToggleArg>,

    /// Preferences file to use instead of the default config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep running and refresh the outline when files change on disk
    #[arg(short = 'w', long)]
    pub watch: bool,

    /// Select outline row N (1-based) and report the cursor position
    #[arg(long, value_name = "N")]
    pub goto: Option<usize>,
}

/// How outline rows are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `line:column  category  label`, one row per line
    #[default]
    Text,
    /// One JSON object per render
    Json,
}

/// Option names accepted by `--toggle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ToggleArg {
    Enabled,
    Unnamed,
    Args,
}

impl From<ToggleArg> for OptionId {
    fn from(arg: ToggleArg) -> Self {
        match arg {
            ToggleArg::Enabled => OptionId::Enabled,
            ToggleArg::Unnamed => OptionId::ShowUnnamedFunctions,
            ToggleArg::Args => OptionId::ShowArguments,
        }
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Files to open, in order
    pub paths: Vec<PathBuf>,
    pub format: OutputFormat,
    /// Language name override for every file
    pub language: Option<String>,
    /// Options to toggle after startup, in order
    pub toggles: Vec<OptionId>,
    /// Preferences file override
    pub config_path: Option<PathBuf>,
    pub watch: bool,
    /// Outline row to select - 1-indexed from user, converted to 0-indexed
    pub goto_row: Option<usize>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if let Some(dir) = self.paths.iter().find(|p| p.is_dir()) {
            return Err(format!("Cannot outline a directory: {}", dir.display()));
        }

        let goto_row = match self.goto {
            Some(0) => return Err("--goto rows start at 1".to_string()),
            Some(row) => Some(row - 1),
            None => None,
        };

        let language = self
            .language
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Ok(StartupConfig {
            paths: self.paths,
            format: self.format,
            language,
            toggles: self.toggles.into_iter().map(OptionId::from).collect(),
            config_path: self.config,
            watch: self.watch,
            goto_row,
        })
    }
}
