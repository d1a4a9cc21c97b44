//! CLI command implementations
//!
//! Every command returns an exit code:
//! - 0 success
//! - 1 partial failure (some identifiers failed or conflicted)
//! - 2 configuration error
//! - 4 source or store unreachable
//! - 5 fatal error
//! - 130 interrupted

pub mod disable;
pub mod init;
pub mod plan;
pub mod sync;
pub mod validate;

use crate::config::TargetConfig;
use crate::domain::SyncError;
use clap::Args;

/// Target month overrides shared by `sync` and `plan`
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Override the target month (Indonesian name, e.g. OKTOBER)
    #[arg(long)]
    pub month: Option<String>,

    /// Override the target year
    #[arg(long)]
    pub year: Option<i32>,

    /// Override the identifier prefix
    #[arg(long)]
    pub prefix: Option<String>,
}

impl TargetArgs {
    /// Applies the overrides that were given
    pub fn apply(&self, target: &mut TargetConfig) {
        if let Some(month) = &self.month {
            tracing::info!(month = %month, "Overriding target month from CLI");
            target.month = month.clone();
        }
        if let Some(year) = self.year {
            tracing::info!(year, "Overriding target year from CLI");
            target.year = year;
        }
        if let Some(prefix) = &self.prefix {
            tracing::info!(prefix = %prefix, "Overriding identifier prefix from CLI");
            target.prefix = prefix.clone();
        }
    }
}

/// Exit code for a run-level error
pub fn exit_code_for(err: &SyncError) -> i32 {
    match err {
        SyncError::Configuration(_)
        | SyncError::MissingCredential(_)
        | SyncError::UnrecognizedMonth { .. } => 2,
        SyncError::Source(_) | SyncError::Store(_) => 4,
        _ => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SourceError, StoreError};

    #[test]
    fn test_target_args_apply() {
        let mut target = TargetConfig {
            month: "OKTOBER".to_string(),
            year: 2026,
            prefix: "WN".to_string(),
        };
        TargetArgs {
            month: Some("november".to_string()),
            year: None,
            prefix: Some("DC".to_string()),
        }
        .apply(&mut target);

        assert_eq!(target.month, "november");
        assert_eq!(target.year, 2026);
        assert_eq!(target.prefix, "DC");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code_for(&SyncError::Configuration("x".into())), 2);
        assert_eq!(exit_code_for(&SyncError::MissingCredential("x".into())), 2);
        assert_eq!(
            exit_code_for(&SyncError::UnrecognizedMonth {
                given: "OCTOBER".into(),
                valid: "OKTOBER".into()
            }),
            2
        );
        assert_eq!(
            exit_code_for(&SyncError::Source(SourceError::Timeout("t".into()))),
            4
        );
        assert_eq!(
            exit_code_for(&SyncError::Store(StoreError::NotFound("p".into()))),
            4
        );
        assert_eq!(exit_code_for(&SyncError::Other("x".into())), 5);
    }
}
