//! Plan command implementation
//!
//! Prints the identifiers a sync would touch with their extracted dates,
//! cutoffs and expiry verdicts. Works offline: no source fetch, no store
//! access, no credential needed.

use super::{exit_code_for, TargetArgs};
use crate::config::read_config;
use crate::core::expiry::{Clock, ExpiryClock, FixedClock, SystemClock};
use crate::core::targets::IdentifierGenerator;
use chrono::DateTime;
use clap::Args;
use std::sync::Arc;

/// Arguments for the plan command
#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Evaluate expiry at this RFC 3339 instant instead of now
    #[arg(long, value_name = "INSTANT")]
    pub at: Option<String>,
}

/// One row of the plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRow {
    pub identifier: String,
    pub date: Option<String>,
    pub cutoff: Option<String>,
    pub expired: bool,
}

impl PlanArgs {
    /// Execute the plan command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let mut config = match read_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load configuration: {e}");
                return Ok(exit_code_for(&e));
            }
        };
        self.target.apply(&mut config.target);

        if let Err(e) = config.validate_schedule() {
            eprintln!("Configuration validation failed: {e}");
            return Ok(exit_code_for(&e));
        }

        let clock: Arc<dyn Clock> = match &self.at {
            Some(at) => match DateTime::parse_from_rfc3339(at) {
                Ok(instant) => Arc::new(FixedClock::new(instant)),
                Err(e) => {
                    eprintln!("Invalid --at instant '{at}': {e}");
                    return Ok(2);
                }
            },
            None => Arc::new(SystemClock),
        };

        let expiry = match ExpiryClock::from_config(&config.expiry, clock) {
            Ok(e) => e,
            Err(e) => {
                eprintln!("{e}");
                return Ok(exit_code_for(&e));
            }
        };

        let identifiers = match IdentifierGenerator.from_config(&config.target) {
            Ok(ids) => ids,
            Err(e) => {
                eprintln!("{e}");
                return Ok(exit_code_for(&e));
            }
        };

        let rows = build_plan(&expiry, identifiers.iter().map(|id| id.as_str()));

        println!("📅 Plan at {}", expiry.now().to_rfc3339());
        println!();
        println!("  {:<24} {:<12} {:<27} STATE", "IDENTIFIER", "DATE", "CUTOFF");
        for row in &rows {
            println!(
                "  {:<24} {:<12} {:<27} {}",
                row.identifier,
                row.date.as_deref().unwrap_or("-"),
                row.cutoff.as_deref().unwrap_or("-"),
                if row.expired { "expired" } else { "live" }
            );
        }
        println!();
        let expired = rows.iter().filter(|r| r.expired).count();
        println!("  {} live, {} expired", rows.len() - expired, expired);

        Ok(0)
    }
}

/// Evaluates each identifier against the expiry clock
pub fn build_plan<'a>(
    expiry: &ExpiryClock,
    identifiers: impl IntoIterator<Item = &'a str>,
) -> Vec<PlanRow> {
    identifiers
        .into_iter()
        .map(|identifier| {
            let verdict = expiry.verdict(identifier);
            PlanRow {
                identifier: identifier.to_string(),
                date: verdict.date.map(|m| m.date.to_string()),
                cutoff: verdict.cutoff.map(|c| c.to_rfc3339()),
                expired: verdict.expired,
            }
        })
        .collect()
}
