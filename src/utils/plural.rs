//! Pluralization helpers for log lines.

/// Return "s" suffix for plural counts
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "route")` -> `"0 routes"`
/// - `plural_count(1, "route")` -> `"1 route"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "route"), "0 routes");
        assert_eq!(plural_count(1, "route"), "1 route");
        assert_eq!(plural_count(31, "schema"), "31 schemas");
    }
}
