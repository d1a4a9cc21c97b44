//! Target identifier generation
//!
//! One document per day of the target month: `WN01OKTOBER2026` through
//! `WN31OKTOBER2026`.

use crate::config::TargetConfig;
use crate::domain::{Identifier, Month, Result, SyncError};

/// Enumerates the identifiers for a month
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierGenerator;

impl IdentifierGenerator {
    /// Identifiers for every day of `month_name` in `year`, ascending
    ///
    /// # Errors
    ///
    /// - [`SyncError::UnrecognizedMonth`] for an unknown month name
    /// - [`SyncError::Configuration`] for a year chrono cannot represent or a
    ///   prefix that does not form a valid identifier
    pub fn generate(&self, month_name: &str, year: i32, prefix: &str) -> Result<Vec<Identifier>> {
        let month = Month::from_name(month_name)?;
        let days = month.days_in(year).ok_or_else(|| {
            SyncError::Configuration(format!("Year {year} is outside the supported range"))
        })?;

        (1..=days)
            .map(|day| {
                Identifier::new(format!("{prefix}{day:02}{}{year}", month.name()))
                    .map_err(SyncError::Configuration)
            })
            .collect()
    }

    /// Identifiers for the configured target month
    pub fn from_config(&self, target: &TargetConfig) -> Result<Vec<Identifier>> {
        self.generate(&target.month, target.year, &target.prefix)
    }
}
