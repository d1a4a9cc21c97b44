//! Indonesian month names
//!
//! Playlist identifiers spell the month out in Indonesian (`21NOVEMBER2025`,
//! `01FEBRUARI2024`). This module is the single source of truth for those names.

use super::errors::SyncError;
use chrono::NaiveDate;
use std::fmt;

/// Calendar month, named the way identifiers spell it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    Januari,
    Februari,
    Maret,
    April,
    Mei,
    Juni,
    Juli,
    Agustus,
    September,
    Oktober,
    November,
    Desember,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Month; 12] = [
        Month::Januari,
        Month::Februari,
        Month::Maret,
        Month::April,
        Month::Mei,
        Month::Juni,
        Month::Juli,
        Month::Agustus,
        Month::September,
        Month::Oktober,
        Month::November,
        Month::Desember,
    ];

    /// Upper-case name as it appears in identifiers
    pub fn name(self) -> &'static str {
        match self {
            Month::Januari => "JANUARI",
            Month::Februari => "FEBRUARI",
            Month::Maret => "MARET",
            Month::April => "APRIL",
            Month::Mei => "MEI",
            Month::Juni => "JUNI",
            Month::Juli => "JULI",
            Month::Agustus => "AGUSTUS",
            Month::September => "SEPTEMBER",
            Month::Oktober => "OKTOBER",
            Month::November => "NOVEMBER",
            Month::Desember => "DESEMBER",
        }
    }

    /// Month number, 1-based
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Parses a month name case-insensitively
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::UnrecognizedMonth`] listing the valid names.
    pub fn from_name(name: &str) -> Result<Self, SyncError> {
        let upper = name.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name() == upper)
            .ok_or_else(|| SyncError::UnrecognizedMonth {
                given: upper,
                valid: Self::valid_names(),
            })
    }

    /// Comma separated list of every recognized name
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|m| m.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Number of days this month has in `year`, leap years included
    ///
    /// Returns `None` only for years chrono cannot represent.
    pub fn days_in(self, year: i32) -> Option<u32> {
        let first = NaiveDate::from_ymd_opt(year, self.number(), 1)?;
        let next = match self {
            Month::Desember => NaiveDate::from_ymd_opt(year + 1, 1, 1)?,
            _ => NaiveDate::from_ymd_opt(year, self.number() + 1, 1)?,
        };
        u32::try_from(next.signed_duration_since(first).num_days()).ok()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
