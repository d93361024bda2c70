//! HTML utility functions.
//!
//! - `escape()`, `escape_attr()` - HTML entity escaping for text and attributes
//! - `escape_script_json()` - make a JSON payload safe inside `<script>`

use std::borrow::Cow;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Characters that may end or confuse a raw-text `<script>` element.
const SCRIPT_CHARS: [char; 3] = ['<', '>', '&'];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Get the JSON unicode escape for a character unsafe inside `<script>`.
#[inline]
fn escape_script_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("\\u003c"),
        '>' => Some("\\u003e"),
        '&' => Some("\\u0026"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```ignore
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS, escape_char)
}

/// Escape HTML attribute values.
///
/// Identical to `escape()` but semantically indicates attribute context.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS, escape_char)
}

/// Escape serialized JSON for embedding in a `<script>` element.
///
/// `<`, `>` and `&` become `\u003c`, `\u003e` and `\u0026`. These only occur
/// inside JSON strings, where the unicode escape decodes to the same text,
/// so the payload still parses to an identical value.
#[inline]
pub fn escape_script_json(json: &str) -> Cow<'_, str> {
    escape_with(json, &SCRIPT_CHARS, escape_script_char)
}

/// Internal: escape with specified character set and replacement table.
#[inline]
fn escape_with<'a>(
    s: &'a str,
    chars: &[char],
    replace: fn(char) -> Option<&'static str>,
) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match replace(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_borrows_when_clean() {
        assert!(matches!(escape("hello"), Cow::Borrowed(_)));
        assert!(matches!(escape_script_json(r#"{"a":1}"#), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape("<b>Tom & Jerry</b>"), "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
    }

    #[test]
    fn test_escape_attr_quotes() {
        assert_eq!(
            escape_attr(r#"Click "Convert" it's"#),
            "Click &quot;Convert&quot; it&#39;s"
        );
    }

    #[test]
    fn test_escape_script_json_closing_tag() {
        let json = r#"{"text":"</script><script>alert(1)</script>"}"#;
        let escaped = escape_script_json(json);
        assert!(!escaped.contains("</script>"));
        assert!(escaped.contains("\\u003c/script\\u003e"));
    }

    #[test]
    fn test_escape_script_json_preserves_value() {
        let value = serde_json::json!({"name": "A & B <c>"});
        let json = serde_json::to_string(&value).unwrap();
        let escaped = escape_script_json(&json);
        let parsed: serde_json::Value = serde_json::from_str(&escaped).unwrap();
        assert_eq!(parsed, value);
    }
}
