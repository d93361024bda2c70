//! Route metadata table.
//!
//! Maps exact route paths to partial page metadata (title, description,
//! keywords). The only inheritance is an explicit fallback to the root
//! entry (`/`) for paths the table does not know.
//!
//! ```toml
//! [routes."/"]
//! title = "Free Online Tools: Image, Fonts & Colors | FreeConvert"
//!
//! [routes."/png-to-webp"]
//! title = "PNG to WebP Converter - Convert PNG Images to WebP Format"
//! description = "Convert PNG images to WebP format online for free."
//! keywords = "PNG to WebP, PNG converter"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Separator between a page's short name and its long title.
const TITLE_SEPARATOR: &str = " - ";

/// Per-route metadata overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
}

/// Entry returned when neither the path nor `/` is in the table.
static EMPTY: RouteMeta = RouteMeta {
    title: None,
    description: None,
    keywords: None,
};

impl RouteMeta {
    /// Title text before the first `" - "`, if a non-empty title is set.
    ///
    /// `"PNG to WebP Converter - Convert PNG Images"` -> `"PNG to WebP Converter"`
    pub fn short_title(&self) -> Option<&str> {
        let title = self.title.as_deref().filter(|t| !t.is_empty())?;
        title.split(TITLE_SEPARATOR).next()
    }

    /// Description, if a non-empty one is set.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// Static mapping from exact route path to [`RouteMeta`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable(BTreeMap<String, RouteMeta>);

impl RouteTable {
    pub const ROOT: &'static str = "/";

    /// Entry for the exact path, if present.
    #[inline]
    pub fn get(&self, path: &str) -> Option<&RouteMeta> {
        self.0.get(path)
    }

    /// Entry for the exact path, or the root entry if absent.
    ///
    /// Never fails: a table without `/` yields an empty entry.
    pub fn lookup(&self, path: &str) -> &RouteMeta {
        self.0
            .get(path)
            .or_else(|| self.0.get(Self::ROOT))
            .unwrap_or(&EMPTY)
    }

    /// Page name for `path`: the looked-up short title, else `site_name`.
    pub fn page_name<'a>(&'a self, path: &str, site_name: &'a str) -> &'a str {
        self.lookup(path).short_title().unwrap_or(site_name)
    }

    /// Page description for `path`, else `site_description`.
    pub fn page_description<'a>(&'a self, path: &str, site_description: &'a str) -> &'a str {
        self.lookup(path).description().unwrap_or(site_description)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    pub fn insert(&mut self, path: impl Into<String>, meta: RouteMeta) {
        self.0.insert(path.into(), meta);
    }

    /// All route paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteMeta)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, RouteMeta)> for RouteTable {
    fn from_iter<I: IntoIterator<Item = (String, RouteMeta)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(title: &str) -> RouteMeta {
        RouteMeta {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    fn table() -> RouteTable {
        [
            ("/".to_string(), meta("Home Title | Site")),
            ("/png-to-webp".to_string(), meta("PNG to WebP Converter - Convert PNG")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_lookup_exact() {
        let table = table();
        assert_eq!(
            table.lookup("/png-to-webp").short_title(),
            Some("PNG to WebP Converter")
        );
    }

    #[test]
    fn test_lookup_unknown_falls_back_to_root() {
        let table = table();
        assert_eq!(table.lookup("/does-not-exist"), table.lookup("/"));
        assert_eq!(table.lookup("/png-to-webp/"), table.lookup("/"));
    }

    #[test]
    fn test_lookup_without_root_is_empty() {
        let table: RouteTable = [("/a".to_string(), meta("A"))].into_iter().collect();
        assert_eq!(table.lookup("/b"), &RouteMeta::default());
    }

    #[test]
    fn test_page_name_and_description_fallbacks() {
        let mut table = table();
        assert_eq!(table.page_name("/png-to-webp", "Site"), "PNG to WebP Converter");
        assert_eq!(table.page_name("/unknown", "Site"), "Home Title | Site");
        assert_eq!(table.page_description("/png-to-webp", "Site desc"), "Site desc");

        table.insert("/", RouteMeta::default());
        assert_eq!(table.page_name("/unknown", "Site"), "Site");
    }

    #[test]
    fn test_short_title() {
        assert_eq!(meta("A - B - C").short_title(), Some("A"));
        assert_eq!(meta("No separator").short_title(), Some("No separator"));
        assert_eq!(meta("").short_title(), None);
        assert_eq!(RouteMeta::default().short_title(), None);
    }

    #[test]
    fn test_toml_table_keys() {
        let table: RouteTable = toml::from_str(
            r#"
            ["/"]
            title = "Root"

            ["/colors/picker"]
            description = "Pick colors"
            "#,
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("/colors/picker").and_then(RouteMeta::description), Some("Pick colors"));
        assert_eq!(table.paths().collect::<Vec<_>>(), ["/", "/colors/picker"]);
    }
}
