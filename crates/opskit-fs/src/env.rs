//! dotenv-style `KEY=value` parsing.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

static KEY_VALUE: Lazy<Regex> = Lazy::new(|| {
    // KEY and VALUE of `KEY = VALUE`; keys allow dots and dashes.
    Regex::new(r"^\s*([\w.-]+)\s*=\s*(.*)?\s*$").expect("key-value pattern is valid")
});

/// Parse `KEY=value` lines into a map.
///
/// Lines that don't match are skipped. Values in double quotes get their
/// `\n` sequences expanded; surrounding single or double quotes are
/// stripped and the remainder trimmed.
pub fn parse_key_value(src: &str) -> HashMap<String, String> {
    let mut parsed = HashMap::new();

    for line in src.lines() {
        let Some(captures) = KEY_VALUE.captures(line) else {
            continue;
        };
        let key = captures[1].to_string();
        let mut value = captures.get(2).map_or("", |m| m.as_str()).to_string();

        let double_quoted = value.len() >= 2 && value.starts_with('"') && value.ends_with('"');
        if double_quoted {
            value = value.replace("\\n", "\n");
        }
        let value = value
            .trim_start_matches(['\'', '"'])
            .trim_end_matches(['\'', '"'])
            .trim()
            .to_string();

        parsed.insert(key, value);
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_pairs() {
        let parsed = parse_key_value("A=1\nB=two\n");
        assert_eq!(parsed["A"], "1");
        assert_eq!(parsed["B"], "two");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let parsed = parse_key_value("  KEY =  value  ");
        assert_eq!(parsed["KEY"], "value");
    }

    #[test]
    fn test_parse_dotted_and_dashed_keys() {
        let parsed = parse_key_value("app.name=demo\ndb-host=local");
        assert_eq!(parsed["app.name"], "demo");
        assert_eq!(parsed["db-host"], "local");
    }

    #[test]
    fn test_parse_strips_quotes() {
        let parsed = parse_key_value("A=\"quoted\"\nB='single'");
        assert_eq!(parsed["A"], "quoted");
        assert_eq!(parsed["B"], "single");
    }

    #[test]
    fn test_parse_expands_newlines_in_double_quotes() {
        let parsed = parse_key_value("MULTI=\"line1\\nline2\"");
        assert_eq!(parsed["MULTI"], "line1\nline2");
    }

    #[test]
    fn test_parse_keeps_escaped_newline_unquoted() {
        let parsed = parse_key_value("RAW=line1\\nline2");
        assert_eq!(parsed["RAW"], "line1\\nline2");
    }

    #[test]
    fn test_parse_empty_value() {
        let parsed = parse_key_value("EMPTY=");
        assert_eq!(parsed["EMPTY"], "");
    }

    #[test]
    fn test_parse_skips_garbage_lines() {
        let parsed = parse_key_value("# comment\nnot a pair\nOK=1");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed["OK"], "1");
    }
}
