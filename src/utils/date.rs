//! Calendar dates for blog posts.
//!
//! Dates come from file names (`2021-08-26-welcome.md`) or front matter
//! (`date: 2021-08-26` or `date: 2021-08-26T10:00:00Z`). Only the day matters
//! for routing and ordering.

use anyhow::{Result, bail};
use std::fmt;

/// A validated `YYYY-MM-DD` date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Date {
    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Parse `YYYY-MM-DD`, optionally followed by a `T...` time part.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.trim().as_bytes();
        if bytes.len() < 10 {
            return None;
        }
        if bytes.len() > 10 && !matches!(bytes[10], b'T' | b' ') {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        let date = Self::from_ymd(year, month, day);
        date.validate().ok()?;
        Some(date)
    }

    /// Split a `YYYY-MM-DD-rest` file stem into its date and the rest.
    ///
    /// `2021-08-26-welcome` -> `(2021-08-26, "welcome")`
    pub fn split_prefix(stem: &str) -> Option<(Self, &str)> {
        let (head, rest) = (stem.get(..10)?, stem.get(10..)?);
        let rest = rest.strip_prefix('-')?;
        if rest.is_empty() {
            return None;
        }
        Some((Self::parse(head)?, rest))
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

    /// URL segments `["YYYY", "MM", "DD"]`.
    pub fn segments(self) -> [String; 3] {
        [
            format!("{:04}", self.year),
            format!("{:02}", self.month),
            format!("{:02}", self.day),
        ]
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
