//! Minimal `key=value` properties file parser.
//!
//! Handles the subset of the Java properties format that publishing
//! settings files actually use: one pair per line, `#` or `!` comments,
//! the first `=` or `:` splits key from value, both sides trimmed.
//! Lines with no separator become a key with an empty value rather than
//! an error, so a malformed line can never abort credential resolution.

use std::collections::BTreeMap;

/// Parsed properties file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Parse properties from file contents. Total: never fails.
    pub fn parse(input: &str) -> Self {
        let mut entries = BTreeMap::new();
        for line in input.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let (key, value) = match line.split_once(['=', ':']) {
                Some((key, value)) => (key.trim(), value.trim()),
                None => (line, ""),
            };
            if key.is_empty() {
                continue;
            }
            entries.insert(key.to_string(), value.to_string());
        }
        Self { entries }
    }

    /// Look up a value by exact key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the key is present at all, even with an empty value.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of parsed pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the file parsed to nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_pairs() {
        let props = Properties::parse("s3.accessKey=AKIA123\ns3.secretKey=shh\n");
        assert_eq!(props.get("s3.accessKey"), Some("AKIA123"));
        assert_eq!(props.get("s3.secretKey"), Some("shh"));
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn trims_whitespace_around_key_and_value() {
        let props = Properties::parse("  s3.accessKey =  AKIA123  \n");
        assert_eq!(props.get("s3.accessKey"), Some("AKIA123"));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let props = Properties::parse("# aws keys\n! legacy comment\n\ns3.accessKey=x\n");
        assert_eq!(props.len(), 1);
        assert!(props.contains("s3.accessKey"));
    }

    #[test]
    fn first_separator_wins() {
        let props = Properties::parse("url=s3://bucket/path=deep\n");
        assert_eq!(props.get("url"), Some("s3://bucket/path=deep"));
    }

    #[test]
    fn colon_separator_is_accepted() {
        let props = Properties::parse("s3.accessKey: AKIA123\n");
        assert_eq!(props.get("s3.accessKey"), Some("AKIA123"));
    }

    #[test]
    fn line_without_separator_is_empty_valued_key() {
        let props = Properties::parse("s3.accessKey\n");
        assert!(props.contains("s3.accessKey"));
        assert_eq!(props.get("s3.accessKey"), Some(""));
    }

    #[test]
    fn empty_input_parses_to_empty() {
        assert!(Properties::parse("").is_empty());
        assert!(Properties::parse("\n\n# only comments\n").is_empty());
    }

    #[test]
    fn later_duplicate_overwrites_earlier() {
        let props = Properties::parse("k=first\nk=second\n");
        assert_eq!(props.get("k"), Some("second"));
    }
}
