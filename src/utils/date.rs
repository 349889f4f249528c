//! UTC datetime utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` struct for the timestamps that end up
//! in sitemaps and feeds.
//!
//! # Features
//!
//! - Parses the ISO 8601 shapes post APIs actually return (date only,
//!   fractional seconds, `Z` or numeric offsets)
//! - Offsets are folded into UTC
//! - RFC 2822 (RSS) and RFC 3339 (sitemap, Atom) formatting
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::parse("2024-06-15T16:30:45.120+02:00").unwrap();
//! assert_eq!(dt.to_rfc3339(), "2024-06-15T14:30:45Z");
//! assert_eq!(dt.to_rfc2822(), "Sat, 15 Jun 2024 14:30:45 GMT");
//! ```

use anyhow::{Result, bail};
use std::time::{SystemTime, UNIX_EPOCH};

const SECS_PER_DAY: i64 = 86_400;

/// Years both feed formats can carry (four-digit, no year zero).
const YEAR_RANGE: std::ops::RangeInclusive<u16> = 1..=9999;

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Current wall-clock time.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| i64::try_from(d.as_secs()).unwrap_or(0))
            .unwrap_or(0);
        Self::from_unix(secs)
    }

    /// Build from seconds since the Unix epoch.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_unix(secs: i64) -> Self {
        let days = secs.div_euclid(SECS_PER_DAY);
        let rem = secs.rem_euclid(SECS_PER_DAY);
        let (year, month, day) = civil_from_days(days);

        Self::new(
            u16::try_from(year).unwrap_or(0),
            month as u8,
            day as u8,
            (rem / 3600) as u8,
            ((rem / 60) % 60) as u8,
            (rem % 60) as u8,
        )
    }

    /// Seconds since the Unix epoch.
    pub fn to_unix(self) -> i64 {
        let days = days_from_civil(
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        );
        days * SECS_PER_DAY
            + i64::from(self.hour) * 3600
            + i64::from(self.minute) * 60
            + i64::from(self.second)
    }

    /// Parse an ISO 8601 timestamp.
    ///
    /// Accepted shapes:
    /// - `YYYY-MM-DD`
    /// - `YYYY-MM-DDTHH:MM:SS` (a space may replace `T`)
    /// - optional fractional seconds (`.123`, dropped)
    /// - optional zone: `Z`, `+HH:MM`, `-HHMM`, `+HH` (no zone means UTC)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let bytes = s.as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 || !s.is_char_boundary(10) {
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

        if bytes.len() == 10 {
            let dt = Self::from_ymd(year, month, day);
            dt.validate().ok()?;
            return Some(dt);
        }

        if !matches!(bytes[10], b'T' | b't' | b' ') || bytes.len() < 19 {
            return None;
        }
        if bytes[13] != b':' || bytes[16] != b':' {
            return None;
        }
        let hour = parse_u8(&bytes[11..13])?;
        let minute = parse_u8(&bytes[14..16])?;
        let second = parse_u8(&bytes[17..19])?;

        let mut rest = s.get(19..)?;
        if let Some(fraction) = rest.strip_prefix('.') {
            let digits = fraction.bytes().take_while(u8::is_ascii_digit).count();
            if digits == 0 {
                return None;
            }
            rest = &fraction[digits..];
        }

        let offset = match rest {
            "" | "Z" | "z" => 0,
            zone => parse_offset(zone)?,
        };

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate().ok()?;
        if offset == 0 {
            return Some(dt);
        }

        // folding can cross a year boundary
        let utc = Self::from_unix(dt.to_unix() - offset);
        utc.validate().ok()?;
        Some(utc)
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !YEAR_RANGE.contains(&year) {
            bail!("year is out of range: {year}");
        }
        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
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

    /// Format as RFC 3339 (W3C datetime), used by sitemaps and Atom.
    ///
    /// Returns: `YYYY-MM-DDTHH:MM:SSZ`
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }

    /// Format as RFC 2822, used by RSS `pubDate`.
    pub fn to_rfc2822(self) -> String {
        const WEEKDAYS: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];

        format!(
            "{}, {:02} {} {:04} {:02}:{:02}:{:02} GMT",
            WEEKDAYS[self.weekday_index()],
            self.day,
            MONTHS[(self.month - 1) as usize],
            self.year,
            self.hour,
            self.minute,
            self.second
        )
    }

    // Zeller's congruence, 0 = Saturday
    #[inline]
    #[allow(clippy::cast_sign_loss)] // Result of % 7 is always 0-6
    fn weekday_index(self) -> usize {
        let (y, m) = if self.month < 3 {
            (i32::from(self.year) - 1, i32::from(self.month) + 12)
        } else {
            (i32::from(self.year), i32::from(self.month))
        };
        let d = i32::from(self.day);
        ((d + (13 * (m + 1)) / 5 + y + y / 4 - y / 100 + y / 400) % 7) as usize
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let yoe = year.rem_euclid(400);
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Parse a zone suffix (`+02:00`, `-0530`, `+01`) into seconds east of UTC.
fn parse_offset(zone: &str) -> Option<i64> {
    let bytes = zone.as_bytes();
    let sign = match bytes.first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };

    let (hours, minutes) = match bytes.len() {
        3 => (parse_u8(&bytes[1..3])?, 0),
        5 => (parse_u8(&bytes[1..3])?, parse_u8(&bytes[3..5])?),
        6 if bytes[3] == b':' => (parse_u8(&bytes[1..3])?, parse_u8(&bytes[4..6])?),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }

    Some(sign * (i64::from(hours) * 3600 + i64::from(minutes) * 60))
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
