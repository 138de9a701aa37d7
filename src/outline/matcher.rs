//! Line scanner shared by both dialects
//!
//! Applies a pattern to every line of a text and records each hit as a
//! [`MatchTuple`]. Name extraction differs per dialect; the output contract
//! is the same.

use regex::{Captures, Regex};

use super::MatchTuple;
use crate::dialect::Dialect;

/// Scan `text` line by line with `pattern`
///
/// Every non-overlapping match on a line is recorded, including matches whose
/// name is empty. The result is sorted by `(name, line, column)`.
/// Absent text yields no matches.
pub fn scan(pattern: &Regex, dialect: Dialect, text: Option<&str>) -> Vec<MatchTuple> {
    let Some(text) = text else {
        return Vec::new();
    };

    let mut result = Vec::new();

    for (index, line) in text.split('\n').enumerate() {
        let line_length = line.chars().count();

        for caps in pattern.captures_iter(line) {
            let name = match dialect {
                Dialect::Stylesheet => {
                    let end = caps.get(0).map_or(line.len(), |m| m.end());
                    if !opens_rule(&line[end..]) {
                        continue;
                    }
                    group(&caps, 1).to_string()
                }
                Dialect::Script => {
                    let declared = group(&caps, 4);
                    let target = if declared.is_empty() {
                        group(&caps, 3)
                    } else {
                        declared
                    };
                    format!("{}{}", target, group(&caps, 5))
                }
                Dialect::Unrecognized => String::new(),
            };

            result.push(MatchTuple {
                name: name.trim().to_string(),
                line: index,
                column: line_length,
            });
        }
    }

    result.sort();
    result
}

/// Text of a capture group; groups that did not participate are empty
fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

/// A selector only counts when the next brace on its line opens a block
fn opens_rule(rest: &str) -> bool {
    rest.chars().find(|ch| matches!(ch, '{' | '}')) == Some('{')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tuples: &[MatchTuple]) -> Vec<&str> {
        tuples.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_absent_text_yields_nothing() {
        let pattern = Regex::new(r"(\w+)").unwrap();
        assert!(scan(&pattern, Dialect::Script, None).is_empty());
        assert!(scan(&pattern, Dialect::Stylesheet, None).is_empty());
    }

    #[test]
    fn test_column_is_line_length() {
        let pattern = Regex::new(r"([^\r\n,{}]+)").unwrap();
        let tuples = scan(&pattern, Dialect::Stylesheet, Some("\n  body {"));
        assert_eq!(tuples.len(), 1);
        assert_eq!(tuples[0].name, "body");
        assert_eq!(tuples[0].line, 1);
        assert_eq!(tuples[0].column, 8);
    }

    #[test]
    fn test_column_counts_characters_not_bytes() {
        let pattern = Regex::new(r"([^\r\n,{}]+)").unwrap();
        let tuples = scan(&pattern, Dialect::Stylesheet, Some(".café {"));
        assert_eq!(tuples[0].column, 7);
    }

    #[test]
    fn test_column_counts_astral_character_once() {
        let pattern = Regex::new(r"([^\r\n,{}]+)").unwrap();
        let tuples = scan(&pattern, Dialect::Stylesheet, Some(".\u{1F600} {"));
        assert_eq!(tuples[0].name, ".\u{1F600}");
        assert_eq!(tuples[0].column, 4);
    }

    #[test]
    fn test_unrecognized_dialect_records_empty_names() {
        let pattern = Regex::new(r"\w+").unwrap();
        let tuples = scan(&pattern, Dialect::Unrecognized, Some("one two\nthree"));
        assert_eq!(tuples.len(), 3);
        assert!(tuples.iter().all(|t| t.name.is_empty()));
        let lines: Vec<_> = tuples.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![0, 0, 1]);
    }

    #[test]
    fn test_script_name_prefers_function_name_over_target() {
        let pattern = Regex::new(
            r"((var\s+)?([0-9A-Za-z_]*)\s*[=:]\s*)?function\s*([0-9A-Za-z_]*)\s*(\([^\r\n]*\))",
        )
        .unwrap();
        let text = "var a = function named(x) {\nb: function (y) {\nfunction (z) {";
        let tuples = scan(&pattern, Dialect::Script, Some(text));
        assert_eq!(names(&tuples), vec!["(z)", "b(y)", "named(x)"]);
    }

    #[test]
    fn test_stylesheet_skips_text_inside_rule_bodies() {
        let pattern = Regex::new(r"([^\r\n,{}]+)").unwrap();
        let tuples = scan(
            &pattern,
            Dialect::Stylesheet,
            Some("h1, h2 { color: red; } p {"),
        );
        assert_eq!(names(&tuples), vec!["h1", "h2", "p"]);
    }

    #[test]
    fn test_stylesheet_keeps_selector_split_across_lines() {
        let pattern = Regex::new(r"([^\r\n,{}]+)").unwrap();
        let tuples = scan(&pattern, Dialect::Stylesheet, Some("a,\nb {\n}"));
        // "a" is not followed by a brace on its own line
        assert_eq!(names(&tuples), vec!["b"]);
    }

    #[test]
    fn test_results_are_sorted_and_deterministic() {
        let pattern = Regex::new(r"([^\r\n,{}]+)").unwrap();
        let text = ".z {}\n#y {}\n.a, .a {}\nbody {}";
        let first = scan(&pattern, Dialect::Stylesheet, Some(text));
        let second = scan(&pattern, Dialect::Stylesheet, Some(text));
        assert_eq!(first, second);

        let mut sorted = first.clone();
        sorted.sort();
        assert_eq!(first, sorted);
        assert_eq!(names(&first), vec!["#y", ".a", ".a", ".z", "body"]);
    }

    #[test]
    fn test_carriage_return_stays_in_line_length() {
        let pattern = Regex::new(r"([^\r\n,{}]+)").unwrap();
        let tuples = scan(&pattern, Dialect::Stylesheet, Some("p {\r\n"));
        assert_eq!(tuples.len(), 1);
        assert_eq!(tuples[0].column, 4);
    }
}
