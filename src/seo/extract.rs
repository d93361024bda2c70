//! JSON-LD extraction from rendered HTML.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// One `<script type="application/ld+json">` block.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonLdBlock {
    /// 1-based index of the block in the document.
    pub index: usize,
    pub payload: Result<Vec<Value>, String>,
}

fn script_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?is)<script[^>]*type\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script>"#,
        )
        .unwrap()
    })
}

/// Every JSON-LD block in `html`, with its parse result.
///
/// A payload that is a JSON array yields its elements, any other JSON value
/// yields itself. Invalid JSON is kept as the parser's error message.
pub fn json_ld_blocks(html: &str) -> Vec<JsonLdBlock> {
    script_regex()
        .captures_iter(html)
        .enumerate()
        .filter_map(|(i, cap)| {
            let body = cap.get(1)?.as_str().trim();
            let payload = match serde_json::from_str::<Value>(body) {
                Ok(Value::Array(items)) => Ok(items),
                Ok(value) => Ok(vec![value]),
                Err(e) => Err(e.to_string()),
            };
            Some(JsonLdBlock {
                index: i + 1,
                payload,
            })
        })
        .collect()
}

/// All JSON-LD objects in `html`. Blocks that fail to parse are skipped.
pub fn extract_json_ld(html: &str) -> Vec<Value> {
    json_ld_blocks(html)
        .into_iter()
        .filter_map(|block| block.payload.ok())
        .flatten()
        .collect()
}

/// `@type` values of every extracted object, string or array form.
pub fn schema_types(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .filter_map(|v| v.get("@type"))
        .flat_map(|t| match t {
            Value::String(s) => vec![s.clone()],
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect(),
            _ => Vec::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_and_array_payloads() {
        let html = r#"
            <head>
            <script type="application/ld+json">{"@type": "Organization"}</script>
            <script type='application/ld+json'>[{"@type": "WebSite"}, {"@type": "WebPage"}]</script>
            <script>var x = 1;</script>
            </head>"#;
        let values = extract_json_ld(html);
        assert_eq!(values.len(), 3);
        assert_eq!(schema_types(&values), ["Organization", "WebSite", "WebPage"]);
    }

    #[test]
    fn test_case_insensitive_multiline() {
        let html = "<SCRIPT id=\"ld\" TYPE=\"application/ld+json\">\n{\n\"@type\": \"HowTo\"\n}\n</SCRIPT>";
        assert_eq!(extract_json_ld(html), [json!({"@type": "HowTo"})]);
    }

    #[test]
    fn test_invalid_block_is_reported() {
        let html = r#"<script type="application/ld+json">{oops</script>
<script type="application/ld+json">{"@type": "FAQPage"}</script>"#;
        let blocks = json_ld_blocks(html);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].payload.is_err());
        assert_eq!(blocks[1].index, 2);
        assert_eq!(extract_json_ld(html).len(), 1);
    }

    #[test]
    fn test_type_arrays() {
        let values = vec![json!({"@type": ["WebPage", "ItemPage"]}), json!({"name": "x"})];
        assert_eq!(schema_types(&values), ["WebPage", "ItemPage"]);
    }
}
