//! Log transformation commands
//!
//! Every command reads one or more logs, concatenated into a single log by
//! the runtime, transforms its records, and writes the result.
//!
//! ## Module Organization
//! - `runtime` - Input concatenation, output format selection, header synthesis
//! - `count` - Record counts, optionally grouped by field values
//! - `edit` - Add, set, rename and remove fields
//! - `find` - Keep records matching conditions
//! - `fix` - Normalize dates, times, locations and enumeration case
//! - `infer` - Fill fields derivable from other fields
//! - `select` - Keep only some fields
//! - `sort` - Order records by field values
//! - `validate` - Check every value against its field definition
//! - `save` - Write a log to files

mod runtime;
pub mod count;
pub mod edit;
pub mod find;
pub mod fix;
pub mod infer;
pub mod save;
pub mod select;
pub mod sort;
pub mod validate;

pub use runtime::Context;

use crate::error::{Error, Result};

/// Split `NAME=VALUE`; the name is upper-cased, the value kept as given
pub fn parse_assignment(s: &str) -> Result<(String, String)> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| Error::Usage(format!("expected FIELD=VALUE, got {:?}", s)))?;
    let name = field_name(name)?;
    Ok((name, value.to_string()))
}

/// Upper-cased field name, or a usage error when it is not a valid name
pub fn field_name(s: &str) -> Result<String> {
    let name = s.trim().to_uppercase();
    if !crate::adif::is_valid_field_name(&name) {
        return Err(Error::Usage(format!("invalid field name {:?}", s)));
    }
    Ok(name)
}

/// Upper-cased field names from a list of arguments, each of which may be
/// comma-separated
pub fn field_names<S: AsRef<str>>(args: &[S]) -> Result<Vec<String>> {
    let mut out: Vec<String> = Vec::new();
    for arg in args {
        for part in arg.as_ref().split(',').filter(|p| !p.trim().is_empty()) {
            let name = field_name(part)?;
            if !out.contains(&name) {
                out.push(name);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("my_gridsquare=FN31pr").unwrap(),
            ("MY_GRIDSQUARE".to_string(), "FN31pr".to_string())
        );
        assert_eq!(parse_assignment("NOTES=a=b").unwrap().1, "a=b");
        assert_eq!(parse_assignment("COMMENT=").unwrap().1, "");
        assert!(matches!(parse_assignment("CALL"), Err(Error::Usage(_))));
        assert!(parse_assignment("BAD NAME=x").is_err());
    }

    #[test]
    fn test_field_names() {
        let names = field_names(&["call,band", "Mode", "CALL"]).unwrap();
        assert_eq!(names, vec!["CALL", "BAND", "MODE"]);
        assert!(field_names(&["CALL,QSO-DATE"]).is_err());
    }
}
