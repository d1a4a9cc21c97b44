//! Date pattern families
//!
//! Each family looks for its first structural match in an upper-cased
//! identifier and turns the captured digits into a calendar date. A capture
//! that is not a real date (month 13, 30 FEBRUARI, ...) counts as no match.

use crate::domain::{Month, Result, SyncError};
use chrono::NaiveDate;
use regex::{Captures, Regex};

/// A single way of spelling a date inside an identifier
pub trait DatePattern: Send + Sync {
    /// Short name used in logs and the `plan` report
    fn name(&self) -> &'static str;

    /// Extracts a valid calendar date from an upper-cased identifier
    fn extract(&self, upper: &str) -> Option<NaiveDate>;
}

/// Builds a date, rejecting year 0 and anything chrono rejects
pub(crate) fn calendar_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if year < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| SyncError::Other(format!("Invalid date pattern {pattern}: {e}")))
}

fn number<T: std::str::FromStr>(caps: &Captures<'_>, group: usize) -> Option<T> {
    caps.get(group)?.as_str().parse().ok()
}

/// `21NOVEMBER2025`: day, Indonesian month name, four-digit year
pub struct MonthNamePattern {
    regex: Regex,
}

impl MonthNamePattern {
    /// Compiles the pattern from the recognized month names
    pub fn new() -> Result<Self> {
        let names = Month::ALL
            .iter()
            .map(|m| m.name())
            .collect::<Vec<_>>()
            .join("|");
        let regex = compile(&format!("(?i)([0-9]{{1,2}})({names})([0-9]{{4}})"))?;
        Ok(Self { regex })
    }
}

impl DatePattern for MonthNamePattern {
    fn name(&self) -> &'static str {
        "day-monthname-year"
    }

    fn extract(&self, upper: &str) -> Option<NaiveDate> {
        let caps = self.regex.captures(upper)?;
        let day: u32 = number(&caps, 1)?;
        let month = Month::from_name(caps.get(2)?.as_str()).ok()?;
        let year: i32 = number(&caps, 3)?;
        calendar_date(year, month.number(), day)
    }
}

/// `21-11-2025`, `21_11_2025`, `21.11.2025`, `21/11/2025`
pub struct DayMonthYearPattern {
    regex: Regex,
}

impl DayMonthYearPattern {
    pub fn new() -> Result<Self> {
        let regex = compile(r"([0-9]{1,2})[-_./]([0-9]{1,2})[-_./]([0-9]{4})")?;
        Ok(Self { regex })
    }
}

impl DatePattern for DayMonthYearPattern {
    fn name(&self) -> &'static str {
        "day-month-year"
    }

    fn extract(&self, upper: &str) -> Option<NaiveDate> {
        let caps = self.regex.captures(upper)?;
        calendar_date(number(&caps, 3)?, number(&caps, 2)?, number(&caps, 1)?)
    }
}

/// `2025-11-21` and the other separators, year first
pub struct YearMonthDayPattern {
    regex: Regex,
}

impl YearMonthDayPattern {
    pub fn new() -> Result<Self> {
        let regex = compile(r"([0-9]{4})[-_./]([0-9]{1,2})[-_./]([0-9]{1,2})")?;
        Ok(Self { regex })
    }
}

impl DatePattern for YearMonthDayPattern {
    fn name(&self) -> &'static str {
        "year-month-day"
    }

    fn extract(&self, upper: &str) -> Option<NaiveDate> {
        let caps = self.regex.captures(upper)?;
        calendar_date(number(&caps, 1)?, number(&caps, 2)?, number(&caps, 3)?)
    }
}

/// Eight digits in a row: `YYYYMMDD`, falling back to `DDMMYYYY`
pub struct CompactDigitsPattern {
    regex: Regex,
}

impl CompactDigitsPattern {
    pub fn new() -> Result<Self> {
        let regex = compile(r"[0-9]{8}")?;
        Ok(Self { regex })
    }
}

impl DatePattern for CompactDigitsPattern {
    fn name(&self) -> &'static str {
        "compact-digits"
    }

    fn extract(&self, upper: &str) -> Option<NaiveDate> {
        let digits = self.regex.find(upper)?.as_str();
        let part = |range: std::ops::Range<usize>| digits.get(range)?.parse::<u32>().ok();

        let year_first = calendar_date(part(0..4)? as i32, part(4..6)?, part(6..8)?);
        year_first.or_else(|| calendar_date(part(4..8)? as i32, part(2..4)?, part(0..2)?))
    }
}
