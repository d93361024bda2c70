//! `BreadcrumbList` schema derived from the route path.

use super::types::{BreadcrumbList, Context, ListItem, tag};
use crate::route::RouteTable;

/// Breadcrumb trail for `path`: `Home` at position 1, then one item per
/// path segment carrying the cumulative URL.
///
/// Labels come from the route table (short title of the prefix path), else
/// from the humanized segment.
pub fn breadcrumb_items(path: &str, base_url: &str, routes: &RouteTable) -> Vec<ListItem> {
    let mut items = vec![list_item(1, "Home".into(), base_url.into())];

    let mut current = String::with_capacity(path.len());
    for (index, segment) in path.split('/').filter(|s| !s.is_empty()).enumerate() {
        current.push('/');
        current.push_str(segment);

        let name = routes
            .get(&current)
            .and_then(|meta| meta.short_title())
            .map_or_else(|| humanize(segment), String::from);

        items.push(list_item(index as u32 + 2, name, format!("{base_url}{current}")));
    }

    items
}

pub fn breadcrumb_schema(path: &str, base_url: &str, routes: &RouteTable) -> BreadcrumbList {
    BreadcrumbList {
        context: Context::SchemaOrg,
        kind: tag::BreadcrumbList::BreadcrumbList,
        item_list_element: breadcrumb_items(path, base_url, routes),
    }
}

fn list_item(position: u32, name: String, item: String) -> ListItem {
    ListItem {
        kind: tag::ListItem::ListItem,
        position,
        name,
        item,
    }
}

/// `"remove-background"` -> `"Remove Background"`.
///
/// Dashes become spaces and every character starting a word is uppercased.
/// Word characters are ASCII alphanumerics and `_`.
pub fn humanize(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut prev_is_word = false;
    for ch in segment.chars() {
        let ch = if ch == '-' { ' ' } else { ch };
        let is_word = ch.is_ascii_alphanumeric() || ch == '_';
        if is_word && !prev_is_word {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
        prev_is_word = is_word;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::RouteMeta;

    const BASE: &str = "https://example.com";

    fn routes() -> RouteTable {
        [(
            "/colors".to_string(),
            RouteMeta {
                title: Some("Free Color Tools: Palette Generator & Picker | FreeConvert".into()),
                ..Default::default()
            },
        ), (
            "/colors/picker".to_string(),
            RouteMeta {
                title: Some("Color Picker - Interactive Color Selector".into()),
                ..Default::default()
            },
        )]
        .into_iter()
        .collect()
    }

    fn triples(items: &[ListItem]) -> Vec<(u32, &str, &str)> {
        items
            .iter()
            .map(|i| (i.position, i.name.as_str(), i.item.as_str()))
            .collect()
    }

    mod items {
        use super::*;

        #[test]
        fn two_segments_without_routes() {
            let items = breadcrumb_items("/a/b", BASE, &RouteTable::default());
            assert_eq!(
                triples(&items),
                [
                    (1, "Home", BASE),
                    (2, "A", "https://example.com/a"),
                    (3, "B", "https://example.com/a/b"),
                ]
            );
        }

        #[test]
        fn labels_from_route_titles() {
            let items = breadcrumb_items("/colors/picker", BASE, &routes());
            assert_eq!(
                triples(&items),
                [
                    (1, "Home", BASE),
                    (
                        2,
                        "Free Color Tools: Palette Generator & Picker | FreeConvert",
                        "https://example.com/colors"
                    ),
                    (3, "Color Picker", "https://example.com/colors/picker"),
                ]
            );
        }

        #[test]
        fn root_is_home_only() {
            let items = breadcrumb_items("/", BASE, &routes());
            assert_eq!(triples(&items), [(1, "Home", BASE)]);
        }

        #[test]
        fn empty_segments_are_skipped() {
            let items = breadcrumb_items("//texts//emojis/", BASE, &RouteTable::default());
            assert_eq!(items.len(), 3);
            assert_eq!(items[2].item, "https://example.com/texts/emojis");
        }

        #[test]
        fn deterministic() {
            let first = breadcrumb_schema("/colors/picker", BASE, &routes());
            let second = breadcrumb_schema("/colors/picker", BASE, &routes());
            assert_eq!(first, second);
        }
    }

    mod humanize {
        use super::super::humanize;

        #[test]
        fn dashes_to_title_case() {
            assert_eq!(humanize("remove-background"), "Remove Background");
            assert_eq!(humanize("png-to-webp"), "Png To Webp");
        }

        #[test]
        fn word_boundaries() {
            assert_eq!(humanize("v2.0-notes"), "V2.0 Notes");
            assert_eq!(humanize("already Upper"), "Already Upper");
            assert_eq!(humanize(""), "");
        }
    }
}
