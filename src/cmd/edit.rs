//! Field edits applied to every record
//!
//! Edits run in a fixed order: rename, add, set, remove, remove-blank.

use super::{field_name, parse_assignment};
use crate::adif::{Field, Logfile};
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditOps {
    /// Set only where the field is absent or empty
    pub add: Vec<(String, String)>,
    /// Set unconditionally
    pub set: Vec<(String, String)>,
    pub rename: Vec<(String, String)>,
    pub remove: Vec<String>,
    pub remove_blank: bool,
}

impl EditOps {
    /// Build from command-line arguments (`F=V`, `OLD=NEW`, `F`)
    pub fn parse(add: &[String], set: &[String], rename: &[String], remove: &[String], remove_blank: bool) -> Result<Self> {
        let assignments = |args: &[String]| args.iter().map(|a| parse_assignment(a)).collect::<Result<Vec<_>>>();
        let rename = rename
            .iter()
            .map(|a| {
                let (old, new) = parse_assignment(a)?;
                Ok((old, field_name(&new)?))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(EditOps {
            add: assignments(add)?,
            set: assignments(set)?,
            rename,
            remove: super::field_names(remove)?,
            remove_blank,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.add.is_empty()
            && self.set.is_empty()
            && self.rename.is_empty()
            && self.remove.is_empty()
            && !self.remove_blank
    }
}

/// Apply edits to every record
pub fn edit(log: &mut Logfile, ops: &EditOps) {
    if ops.is_empty() {
        log::warn!("edit: nothing to do");
    }
    let mut changed = 0usize;
    for r in &mut log.records {
        let before = r.clone();
        for (old, new) in &ops.rename {
            r.rename(old, new);
        }
        for (name, value) in &ops.add {
            if r.value(name).is_empty() {
                r.set(Field::new(name, value.as_str()));
            }
        }
        for (name, value) in &ops.set {
            r.set(Field::new(name, value.as_str()));
        }
        for name in &ops.remove {
            r.remove(name);
        }
        if ops.remove_blank {
            r.remove_blank();
        }
        if *r != before {
            changed += 1;
        }
    }
    log::info!("edited {} of {} records", changed, log.records.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adif::Record;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_ops() {
        let ops = EditOps::parse(
            &strings(&["my_state=CT"]),
            &[],
            &strings(&["gridsquare=my_gridsquare"]),
            &strings(&["notes,comment"]),
            true,
        )
        .unwrap();
        assert_eq!(ops.add, vec![("MY_STATE".to_string(), "CT".to_string())]);
        assert_eq!(ops.rename, vec![("GRIDSQUARE".to_string(), "MY_GRIDSQUARE".to_string())]);
        assert_eq!(ops.remove, strings(&["NOTES", "COMMENT"]));
        assert!(EditOps::parse(&[], &[], &strings(&["A=bad name"]), &[], false).is_err());
        assert!(EditOps::default().is_empty());
    }

    #[test]
    fn test_edit() {
        let mut log = Logfile::new();
        log.records.push(Record::from_pairs([("CALL", "W1AW"), ("MY_STATE", "NY"), ("NOTES", ""), ("RIG", "old")]));
        log.records.push(Record::from_pairs([("CALL", "K1JT"), ("COMMENT", "hi")]));
        let ops = EditOps {
            add: vec![("MY_STATE".into(), "CT".into())],
            set: vec![("TX_PWR".into(), "100".into())],
            rename: vec![("RIG".into(), "MY_RIG".into())],
            remove: vec!["COMMENT".into()],
            remove_blank: true,
        };
        edit(&mut log, &ops);
        let first: Vec<_> = log.records[0].fields().iter().map(|f| (f.name.as_str(), f.value.as_str())).collect();
        assert_eq!(first, vec![("CALL", "W1AW"), ("MY_STATE", "NY"), ("MY_RIG", "old"), ("TX_PWR", "100")]);
        let second: Vec<_> = log.records[1].fields().iter().map(|f| (f.name.as_str(), f.value.as_str())).collect();
        assert_eq!(second, vec![("CALL", "K1JT"), ("MY_STATE", "CT"), ("TX_PWR", "100")]);
    }
}
