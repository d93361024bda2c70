//! UTC calendar dates without timezone dependencies.
//!
//! Schema.org `datePublished` / `dateModified` and sitemap `lastmod` only
//! need `YYYY-MM-DD`, so this module keeps a small `Date` type instead of
//! pulling in a full datetime crate.
//!
//! # Examples
//!
//! ```ignore
//! let date = Date::parse("2024-06-15").unwrap();
//! assert_eq!(date.to_string(), "2024-06-15");
//!
//! let today = Date::today();
//! ```

use anyhow::{Result, bail};
use std::fmt;

const SECS_PER_DAY: u64 = 86_400;

/// UTC calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Date {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Current UTC date from the system clock.
    pub fn today() -> Self {
        use std::time::SystemTime;
        let secs = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_unix_days(secs / SECS_PER_DAY)
    }

    /// Convert days since 1970-01-01 to a civil date.
    ///
    /// Howard Hinnant's `civil_from_days`, restricted to non-negative input.
    #[allow(clippy::cast_possible_truncation)] // Bounded by calendar ranges
    pub fn from_unix_days(days: u64) -> Self {
        let z = days + 719_468;
        let era = z / 146_097;
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
        let year = yoe + era * 400 + u64::from(month <= 2);
        Self::new(year as u16, month, day)
    }

    /// Parse from "YYYY-MM-DD".
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }

        let date = Self::new(
            parse_u16(&bytes[0..4])?,
            parse_u8(&bytes[5..7])?,
            parse_u8(&bytes[8..10])?,
        );
        date.validate().ok()?;
        Some(date)
    }

    pub fn validate(self) -> Result<()> {
        let Self { year, month, day } = self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }
        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(Date::parse("2024-06-15"), Some(Date::new(2024, 6, 15)));
        assert_eq!(Date::parse(" 2024-01-01 "), Some(Date::new(2024, 1, 1)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(Date::parse("2024-6-15"), None);
        assert_eq!(Date::parse("2024/06/15"), None);
        assert_eq!(Date::parse("2024-06-15T00:00:00Z"), None);
        assert_eq!(Date::parse("abcd-ef-gh"), None);
        assert_eq!(Date::parse(""), None);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(Date::parse("2024-13-01"), None);
        assert_eq!(Date::parse("2024-04-31"), None);
        assert_eq!(Date::parse("2023-02-29"), None);
        assert_eq!(Date::parse("1900-02-29"), None);
        assert!(Date::parse("2000-02-29").is_some());
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(Date::new(2024, 1, 5).to_string(), "2024-01-05");
    }

    #[test]
    fn test_from_unix_days() {
        assert_eq!(Date::from_unix_days(0), Date::new(1970, 1, 1));
        // 2000-03-01 follows a leap day
        assert_eq!(Date::from_unix_days(11_017), Date::new(2000, 3, 1));
        assert_eq!(Date::from_unix_days(19_782), Date::new(2024, 2, 29));
        assert_eq!(Date::from_unix_days(20_089), Date::new(2025, 1, 1));
    }

    #[test]
    fn test_today_is_valid() {
        assert!(Date::today().validate().is_ok());
    }
}
