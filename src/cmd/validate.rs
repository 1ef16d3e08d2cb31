//! Log validation
//!
//! Warnings are logged and do not fail the command. Any error is logged and
//! fails the command, so no output is written.

use chrono::{DateTime, Utc};

use crate::adif::Logfile;
use crate::error::{Error, Result};
use crate::validate::{validate_log, Finding, ValidationContext};

/// Validate every record, returning the warnings when there are no errors
pub fn validate(log: &Logfile, required: &[String], now: DateTime<Utc>) -> Result<Vec<Finding>> {
    let ctx = ValidationContext::new().with_now(now);
    let (errors, warnings): (Vec<Finding>, Vec<Finding>) = validate_log(log, &ctx, required)
        .into_iter()
        .partition(|f| f.outcome.is_error());
    for w in &warnings {
        log::warn!("{}", w);
    }
    for e in &errors {
        log::error!("{}", e);
    }
    if !errors.is_empty() {
        let mut records: Vec<usize> = errors.iter().filter_map(|f| f.record).collect();
        records.dedup();
        return Err(Error::Validation(format!(
            "{} errors in {} of {} records",
            errors.len(),
            records.len(),
            log.records.len()
        )));
    }
    log::info!("{} records valid with {} warnings", log.records.len(), warnings.len());
    Ok(warnings)
}
