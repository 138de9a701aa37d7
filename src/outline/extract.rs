//! Outline extraction for the open document
//!
//! Picks the scanner pattern for the document's dialect, runs the line
//! scanner and turns raw matches into display entries according to the
//! current display options.

use std::sync::OnceLock;

use regex::Regex;

use super::{scan, EntryCategory, MatchTuple, OutlineEntry};
use crate::config::DisplayOptions;
use crate::dialect::Dialect;
use crate::model::SourceDocument;

/// `[var] [target =|:] function [name] (params)`, parameter list captured in group 5
const SCRIPT_WITH_ARGUMENTS: &str =
    r"((var\s+)?([0-9A-Za-z_]*)\s*[=:]\s*)?function\s*([0-9A-Za-z_]*)\s*(\([^\r\n]*\))";

/// Same shape, anchored on the opening parenthesis; group 5 is always empty
const SCRIPT_WITHOUT_ARGUMENTS: &str =
    r"((var\s+)?([0-9A-Za-z_]*)\s*[=:]\s*)?function\s+([0-9A-Za-z_]*)\s*()\(";

/// One selector of a selector list; the scanner checks that a block opens after it
const STYLESHEET_SELECTOR: &str = r"([^\r\n,{}]+)";

/// Label prefix for functions without a usable name
const UNNAMED_FUNCTION_LABEL: &str = "function";

/// Script pattern for the given "show arguments" setting
pub fn script_pattern(show_arguments: bool) -> &'static Regex {
    static WITH_ARGUMENTS: OnceLock<Regex> = OnceLock::new();
    static WITHOUT_ARGUMENTS: OnceLock<Regex> = OnceLock::new();

    if show_arguments {
        WITH_ARGUMENTS.get_or_init(|| {
            Regex::new(SCRIPT_WITH_ARGUMENTS).expect("valid script pattern with arguments")
        })
    } else {
        WITHOUT_ARGUMENTS.get_or_init(|| {
            Regex::new(SCRIPT_WITHOUT_ARGUMENTS).expect("valid script pattern without arguments")
        })
    }
}

/// Stylesheet selector pattern
pub fn stylesheet_pattern() -> &'static Regex {
    static SELECTOR: OnceLock<Regex> = OnceLock::new();
    SELECTOR.get_or_init(|| Regex::new(STYLESHEET_SELECTOR).expect("valid stylesheet pattern"))
}

/// Build the outline entries for a document
///
/// No document, or a dialect without an outline, yields an empty list.
/// Entries keep the scanner's `(name, line, column)` order.
pub fn build_outline(
    document: Option<&SourceDocument>,
    options: &DisplayOptions,
) -> Vec<OutlineEntry> {
    let Some(document) = document else {
        return Vec::new();
    };

    match document.dialect {
        Dialect::Script => {
            let text = document.text();
            let pattern = script_pattern(options.show_arguments);
            script_entries(scan(pattern, Dialect::Script, Some(text.as_str())), options)
        }
        Dialect::Stylesheet => {
            let text = document.text();
            let matches = scan(stylesheet_pattern(), Dialect::Stylesheet, Some(text.as_str()));
            stylesheet_entries(matches)
        }
        Dialect::Unrecognized => Vec::new(),
    }
}

fn script_entries(tuples: Vec<MatchTuple>, options: &DisplayOptions) -> Vec<OutlineEntry> {
    tuples
        .iter()
        .filter_map(|tuple| {
            if is_unnamed(&tuple.name) {
                if !options.show_unnamed_functions {
                    return None;
                }
                let label = format!("{}{}", UNNAMED_FUNCTION_LABEL, tuple.name);
                return Some(OutlineEntry::new(label, EntryCategory::Function, tuple));
            }
            Some(OutlineEntry::new(
                tuple.name.as_str(),
                EntryCategory::Function,
                tuple,
            ))
        })
        .collect()
}

/// Nothing captured in the name position, or only the parameter list
fn is_unnamed(name: &str) -> bool {
    name.is_empty() || name.starts_with('(')
}

fn stylesheet_entries(tuples: Vec<MatchTuple>) -> Vec<OutlineEntry> {
    tuples
        .iter()
        .map(|tuple| {
            let category = EntryCategory::from_selector(&tuple.name);
            OutlineEntry::new(tuple.name.as_str(), category, tuple)
        })
        .collect()
}
