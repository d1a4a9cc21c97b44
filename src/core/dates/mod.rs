//! Date extraction from identifiers
//!
//! Identifiers carry their own expiry date in one of several spellings. The
//! [`DateExtractor`] tries each [`DatePattern`] in priority order and stops at
//! the first one that yields a real calendar date:
//!
//! 1. `21NOVEMBER2025` (day, Indonesian month name, year)
//! 2. `21-11-2025` (day first, `-` `_` `.` `/` separators)
//! 3. `2025-11-21` (year first)
//! 4. `20251121` or `21112025` (eight digits)
//!
//! An identifier without any date is not an error: it simply never expires.
//!
//! # Example
//!
//! ```rust
//! use playlist_sync::core::dates::DateExtractor;
//! use chrono::NaiveDate;
//!
//! # fn example() -> playlist_sync::domain::Result<()> {
//! let extractor = DateExtractor::new()?;
//! assert_eq!(
//!     extractor.extract("DC21NOVEMBER2025"),
//!     NaiveDate::from_ymd_opt(2025, 11, 21)
//! );
//! assert_eq!(extractor.extract("no-date-here"), None);
//! # Ok(())
//! # }
//! ```

pub mod patterns;

pub use patterns::{
    CompactDigitsPattern, DatePattern, DayMonthYearPattern, MonthNamePattern,
    YearMonthDayPattern,
};

use crate::domain::Result;
use chrono::NaiveDate;

/// A date found in an identifier, with the family that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateMatch {
    /// The extracted calendar date
    pub date: NaiveDate,

    /// Name of the pattern family that matched
    pub pattern: &'static str,
}

/// Ordered list of date pattern families
pub struct DateExtractor {
    patterns: Vec<Box<dyn DatePattern>>,
}

impl DateExtractor {
    /// Creates an extractor with the four standard families in priority order
    pub fn new() -> Result<Self> {
        Ok(Self::with_patterns(vec![
            Box::new(MonthNamePattern::new()?),
            Box::new(DayMonthYearPattern::new()?),
            Box::new(YearMonthDayPattern::new()?),
            Box::new(CompactDigitsPattern::new()?),
        ]))
    }

    /// Creates an extractor over a custom pattern list
    pub fn with_patterns(patterns: Vec<Box<dyn DatePattern>>) -> Self {
        Self { patterns }
    }

    /// Extracts the date embedded in `identifier`, if any
    pub fn extract(&self, identifier: &str) -> Option<NaiveDate> {
        self.extract_match(identifier).map(|m| m.date)
    }

    /// Like [`extract`](Self::extract), also reporting which family matched
    pub fn extract_match(&self, identifier: &str) -> Option<DateMatch> {
        let upper = identifier.to_uppercase();
        self.patterns.iter().find_map(|pattern| {
            pattern.extract(&upper).map(|date| DateMatch {
                date,
                pattern: pattern.name(),
            })
        })
    }

    /// Names of the configured families, in priority order
    pub fn pattern_names(&self) -> Vec<&'static str> {
        self.patterns.iter().map(|p| p.name()).collect()
    }
}
