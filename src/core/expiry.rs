//! Expiry decisions
//!
//! A document expires on the date found in its identifier at a fixed local
//! time (13:00 by default) in a fixed UTC offset (UTC+7 by default). Both the
//! cutoff and "now" are read in that offset, never in the host timezone.

use crate::config::ExpiryConfig;
use crate::core::dates::{DateExtractor, DateMatch};
use crate::domain::Result;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use std::sync::Arc;

/// Source of the current instant
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new<Tz: chrono::TimeZone>(instant: DateTime<Tz>) -> Self {
        Self(instant.with_timezone(&Utc))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Expiry details for one identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiryVerdict {
    /// Date found in the identifier, if any
    pub date: Option<DateMatch>,

    /// Cutoff instant derived from that date
    pub cutoff: Option<DateTime<FixedOffset>>,

    /// The instant the verdict was taken at
    pub now: DateTime<FixedOffset>,

    /// `now >= cutoff`; always false without a date
    pub expired: bool,
}

/// Decides whether identifiers have passed their cutoff
pub struct ExpiryClock {
    extractor: DateExtractor,
    clock: Arc<dyn Clock>,
    hour: u32,
    minute: u32,
    offset: FixedOffset,
}

impl ExpiryClock {
    /// Creates an expiry clock from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the cutoff time or offset is out of
    /// range, or an error if the date patterns fail to compile.
    pub fn from_config(config: &ExpiryConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            extractor: DateExtractor::new()?,
            clock,
            hour: config.hour,
            minute: config.minute,
            offset: config.offset()?,
        })
    }

    /// Current instant in the configured offset
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.clock.now().with_timezone(&self.offset)
    }

    /// Cutoff instant for a calendar date
    pub fn cutoff(&self, date: NaiveDate) -> Option<DateTime<FixedOffset>> {
        date.and_hms_opt(self.hour, self.minute, 0)?
            .and_local_timezone(self.offset)
            .single()
    }

    /// Full expiry details for an identifier
    pub fn verdict(&self, identifier: &str) -> ExpiryVerdict {
        let now = self.now();
        let date = self.extractor.extract_match(identifier);
        let cutoff = date.and_then(|m| self.cutoff(m.date));
        let expired = cutoff.map(|c| now >= c).unwrap_or(false);

        match (&date, &cutoff) {
            (Some(found), Some(cutoff)) => tracing::debug!(
                identifier = %identifier,
                date = %found.date,
                pattern = found.pattern,
                cutoff = %cutoff.to_rfc3339(),
                now = %now.to_rfc3339(),
                expired,
                "Expiry evaluated"
            ),
            (Some(found), None) => tracing::warn!(
                identifier = %identifier,
                date = %found.date,
                "Cutoff instant out of range, treating as never expiring"
            ),
            (None, _) => tracing::warn!(
                identifier = %identifier,
                "No date found in identifier, treating as never expiring"
            ),
        }

        ExpiryVerdict {
            date,
            cutoff,
            now,
            expired,
        }
    }

    /// Whether `identifier` has reached its cutoff
    pub fn is_expired(&self, identifier: &str) -> bool {
        self.verdict(identifier).expired
    }
}
