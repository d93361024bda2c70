//! JSON-LD serialization and `<script>` embedding.

use crate::seo::{PageMeta, Schema};
use crate::utils::html::escape_script_json;
use anyhow::{Context, Result};
use serde::Serialize;

/// MIME type of JSON-LD script elements.
pub const JSON_LD_TYPE: &str = "application/ld+json";

/// Serialize any value as compact or pretty JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize JSON-LD")
}

/// One `<script type="application/ld+json">` element per schema, one per line.
pub fn render_scripts(schemas: &[Schema], pretty: bool) -> Result<String> {
    let mut out = String::with_capacity(schemas.len() * 1024);
    for schema in schemas {
        let json = to_json(schema, pretty)?;
        out.push_str(r#"<script type=""#);
        out.push_str(JSON_LD_TYPE);
        out.push_str(r#"">"#);
        if pretty {
            out.push('\n');
        }
        out.push_str(&escape_script_json(&json));
        if pretty {
            out.push('\n');
        }
        out.push_str("</script>\n");
    }
    Ok(out)
}

/// Meta tags followed by the schema scripts.
pub fn render_head(meta: &PageMeta, schemas: &[Schema], pretty: bool) -> Result<String> {
    let mut out = meta.render();
    out.push_str(&render_scripts(schemas, pretty)?);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_builtin_config;
    use crate::seo::extract::{extract_json_ld, schema_types};
    use crate::seo::generate_page_graph;
    use crate::utils::date::Date;

    fn schemas(path: &str) -> Vec<Schema> {
        generate_page_graph(path, &test_builtin_config(), Date::new(2025, 1, 15)).scripts()
    }

    #[test]
    fn test_to_json_context_first() {
        let json = to_json(&schemas("/")[0], false).unwrap();
        assert!(json.starts_with(r#"{"@context":"https://schema.org","@type":"Organization""#));
    }

    #[test]
    fn test_pretty_json_is_indented() {
        let json = to_json(&schemas("/")[..1], true).unwrap();
        assert!(json.starts_with("[\n  {\n    \"@context\""));
    }

    #[test]
    fn test_scripts_one_per_schema() {
        let schemas = schemas("/png-to-webp");
        let html = render_scripts(&schemas, false).unwrap();
        assert_eq!(html.lines().count(), schemas.len());
        assert!(html.lines().all(|l| l.starts_with(r#"<script type="application/ld+json">{"#)));
    }

    #[test]
    fn test_scripts_extract_back() {
        for pretty in [false, true] {
            let schemas = schemas("/png-to-webp");
            let html = render_scripts(&schemas, pretty).unwrap();
            let values = extract_json_ld(&html);
            assert_eq!(values.len(), schemas.len());
            assert_eq!(
                schema_types(&values),
                schemas.iter().map(Schema::type_name).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn test_script_payload_cannot_close_element() {
        let mut config = test_builtin_config();
        config.site.author.name = "</script><b>".into();
        let schemas = generate_page_graph("/", &config, Date::new(2025, 1, 15)).scripts();
        let html = render_scripts(&schemas, false).unwrap();
        assert_eq!(html.matches("</script>").count(), schemas.len());

        let values = extract_json_ld(&html);
        assert_eq!(values[0]["name"], "</script><b>");
    }

    #[test]
    fn test_head_meta_before_scripts() {
        let config = test_builtin_config();
        let meta = PageMeta::resolve("/colors", &config);
        let head = render_head(&meta, &schemas("/colors"), false).unwrap();
        let title = head.find("<title>").unwrap();
        let script = head.find("<script").unwrap();
        assert!(title < script);
    }
}
