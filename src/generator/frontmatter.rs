use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};
use serde_json::{Map, Value};

/// Result of parsing one front matter block.
#[derive(Debug, Default)]
pub(crate) struct FrontMatter {
    pub fields: Map<String, Value>,
    /// Non-blank lines dropped because they had no `:`.
    pub skipped: Vec<String>,
}

fn header_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // leading `---` line, shortest (possibly empty) body, closing `---` line
        RegexBuilder::new(r"\A---\r?\n(?:(.*?)\r?\n)??---\r?(?:\n|\z)")
            .dot_matches_new_line(true)
            .build()
            .expect("front matter pattern is valid")
    })
}

/// Returns the text between the first pair of `---` lines at the start of
/// `content`, if any.
pub(crate) fn extract_front_matter(content: &str) -> Option<&str> {
    header_pattern()
        .captures(content)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
}

/// Flat `key: value` parser. Malformed lines are collected, never fatal.
pub(crate) fn parse_front_matter(block: &str) -> FrontMatter {
    let mut front_matter = FrontMatter::default();
    for line in block.split('\n') {
        let Some((name, value)) = line.split_once(':') else {
            if !line.trim().is_empty() {
                front_matter.skipped.push(line.trim_end().to_string());
            }
            continue;
        };
        front_matter
            .fields
            .insert(name.trim().to_string(), coerce(value.trim()));
    }
    front_matter
}

fn coerce(value: &str) -> Value {
    match value {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ if value.starts_with('"') => {
            let inner = &value[1..];
            Value::String(inner.strip_suffix('"').unwrap_or(inner).to_string())
        }
        _ if value.starts_with('[') => {
            let inner = &value[1..];
            let inner = inner.strip_suffix(']').unwrap_or(inner);
            Value::Array(
                inner
                    .split(',')
                    .map(|s| Value::String(s.trim().to_string()))
                    .collect(),
            )
        }
        _ => Value::String(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_leading_block() {
        let content = "---\ntitle: Hello\ndate: 2025-01-01\n---\n# Body\n";
        assert_eq!(
            extract_front_matter(content),
            Some("title: Hello\ndate: 2025-01-01")
        );
    }

    #[test]
    fn extracts_only_first_block() {
        let content = "---\ntitle: First\n---\nbody\n---\ntitle: Second\n---\n";
        assert_eq!(extract_front_matter(content), Some("title: First"));
    }

    #[test]
    fn accepts_crlf_line_endings() {
        let content = "---\r\ntitle: Hello\r\n---\r\nbody";
        assert_eq!(extract_front_matter(content), Some("title: Hello"));
    }

    #[test]
    fn closing_delimiter_must_be_whole_line() {
        let content = "---\ntitle: a\n----\nmore: b\n---\n";
        assert_eq!(extract_front_matter(content), Some("title: a\n----\nmore: b"));
    }

    #[test]
    fn extracts_empty_block() {
        assert_eq!(extract_front_matter("---\n---\nbody"), Some(""));
        assert_eq!(extract_front_matter("---\r\n---"), Some(""));
        // the empty block is the first one; the later block is body
        assert_eq!(
            extract_front_matter("---\n---\ntitle: Later\n---\n"),
            Some("")
        );
    }

    #[test]
    fn returns_none_without_block() {
        assert_eq!(extract_front_matter("# Just a heading\n\ntext"), None);
        assert_eq!(extract_front_matter("intro\n---\ntitle: x\n---\n"), None);
        assert_eq!(extract_front_matter("---\ntitle: unterminated\n"), None);
    }

    #[test]
    fn coerces_values() {
        let fm = parse_front_matter(
            "title: \"Closures in React\"\n\
             date: 2025-07-18\n\
             draft: false\n\
             published: true\n\
             tags: [react, closure, component]\n\
             category: frontend",
        );
        assert_eq!(
            Value::Object(fm.fields),
            json!({
                "title": "Closures in React",
                "date": "2025-07-18",
                "draft": false,
                "published": true,
                "tags": ["react", "closure", "component"],
                "category": "frontend"
            })
        );
        assert!(fm.skipped.is_empty());
    }

    #[test]
    fn keeps_insertion_order() {
        let fm = parse_front_matter("zeta: 1\nalpha: 2\nmid: 3");
        let keys: Vec<_> = fm.fields.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn splits_at_first_colon_only() {
        let fm = parse_front_matter("title: Rust: the good parts\nurl: https://example.com");
        assert_eq!(fm.fields["title"], json!("Rust: the good parts"));
        assert_eq!(fm.fields["url"], json!("https://example.com"));
    }

    #[test]
    fn quotes_are_stripped_without_escapes() {
        let fm = parse_front_matter("a: \"x \\\" y\"\nb: \"open\nc: \"true\"");
        assert_eq!(fm.fields["a"], json!("x \\\" y"));
        assert_eq!(fm.fields["b"], json!("open"));
        assert_eq!(fm.fields["c"], json!("true"));
    }

    #[test]
    fn lists_are_naive() {
        let fm = parse_front_matter("a: [ one ,two,  three ]\nb: []\ne: [ ]\nc: [\"x\", y]\nd: [unclosed, list");
        assert_eq!(fm.fields["a"], json!(["one", "two", "three"]));
        assert_eq!(fm.fields["b"], json!([""]));
        assert_eq!(fm.fields["e"], json!([""]));
        assert_eq!(fm.fields["c"], json!(["\"x\"", "y"]));
        assert_eq!(fm.fields["d"], json!(["unclosed", "list"]));
    }

    #[test]
    fn duplicate_keys_keep_last_value() {
        let fm = parse_front_matter("title: first\ndate: 2025-01-01\ntitle: second");
        assert_eq!(fm.fields.len(), 2);
        assert_eq!(fm.fields["title"], json!("second"));
        let keys: Vec<_> = fm.fields.keys().map(String::as_str).collect();
        assert_eq!(keys, ["title", "date"]);
    }

    #[test]
    fn skips_lines_without_colon() {
        let fm = parse_front_matter("title: ok\n\n  - nested item\njust words\n");
        assert_eq!(fm.fields.len(), 1);
        assert_eq!(fm.skipped, ["  - nested item", "just words"]);
    }

    #[test]
    fn empty_block_has_no_fields() {
        let fm = parse_front_matter("");
        assert!(fm.fields.is_empty());
        assert!(fm.skipped.is_empty());
    }
}
