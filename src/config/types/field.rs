//! Type-safe config field path.

use crate::logger::paint;
use owo_colors::Style;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Used with [`config_fields!`] to generate checked field path accessors
/// for diagnostics.
///
/// # Example
///
/// ```ignore
/// config_fields!(SiteInfoConfig => SiteInfoFields, "site" { url });
///
/// // Usage:
/// diag.error(SiteInfoConfig::FIELDS.url, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", paint(format_args!("`{}`", self.0), Style::new().bright_blue()))
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Generate a `FIELDS` constant of [`FieldPath`]s for a config section.
///
/// ```ignore
/// config_fields!(SchemaConfig => SchemaFields, "schema" { brand, date_published });
/// assert_eq!(SchemaConfig::FIELDS.brand.as_str(), "schema.brand");
/// ```
macro_rules! config_fields {
    ($ty:ident => $fields:ident, $section:literal { $($field:ident),* $(,)? }) => {
        /// Generated field path accessors.
        pub struct $fields {
            $(pub $field: $crate::config::FieldPath,)*
        }

        impl $ty {
            /// Field paths for diagnostic messages.
            pub const FIELDS: $fields = $fields {
                $($field: $crate::config::FieldPath::new(
                    concat!($section, ".", stringify!($field))
                ),)*
            };
        }
    };
}

pub(crate) use config_fields;

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;
    config_fields!(Probe => ProbeFields, "site.author" { name, twitter });

    #[test]
    fn test_generated_paths() {
        assert_eq!(Probe::FIELDS.name.as_str(), "site.author.name");
        assert_eq!(Probe::FIELDS.twitter, FieldPath::new("site.author.twitter"));
    }
}
