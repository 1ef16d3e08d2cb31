//! Stable record sort by one or more fields
//!
//! Each key compares with its field's comparator; a leading `-` sorts that
//! key in descending order. Records equal on every key keep their input
//! order. A value a comparator cannot order aborts the sort and leaves the
//! records untouched.

use std::cmp::Ordering;
use std::str::FromStr;

use icu_locid::Locale;

use super::field_name;
use crate::adif::Logfile;
use crate::compare::{comparator_for, CompareError};
use crate::error::{Error, Result};
use crate::spec::{DataType, FieldDef};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub descending: bool,
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (descending, name) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        Ok(SortKey { field: field_name(name)?, descending })
    }
}

pub fn sort(log: &mut Logfile, keys: &[SortKey], locale: &Locale) -> Result<()> {
    let comparators: Vec<_> = keys
        .iter()
        .map(|k| {
            let def = log
                .field_def(&k.field)
                .cloned()
                .unwrap_or_else(|| FieldDef::new(&k.field, DataType::String));
            (k, comparator_for(&def, locale))
        })
        .collect();
    let records = &log.records;
    let mut failure: Option<CompareError> = None;
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by(|&i, &j| {
        for (key, compare) in &comparators {
            let (a, b) = (records[i].value(&key.field), records[j].value(&key.field));
            match compare(a, b) {
                Ok(Ordering::Equal) => continue,
                Ok(ord) if key.descending => return ord.reverse(),
                Ok(ord) => return ord,
                Err(e) => {
                    failure.get_or_insert(e);
                    return Ordering::Equal;
                }
            }
        }
        Ordering::Equal
    });
    if let Some(e) = failure {
        return Err(e.into());
    }
    let mut slots: Vec<_> = std::mem::take(&mut log.records).into_iter().map(Some).collect();
    log.records = order.into_iter().filter_map(|i| slots[i].take()).collect();
    log::info!("sorted {} records by {} keys", log.records.len(), keys.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adif::Record;

    fn log() -> Logfile {
        let mut l = Logfile::new();
        for (call, band, date, time) in [
            ("W1AW", "20m", "20230105", "1200"),
            ("K1JT", "40m", "20230105", "0900"),
            ("G4ABC", "20m", "20221231", "2359"),
            ("N0CALL", "160m", "20230105", "090000"),
            ("JA1XYZ", "", "20230101", "0000"),
        ] {
            l.records.push(Record::from_pairs([("CALL", call), ("BAND", band), ("QSO_DATE", date), ("TIME_ON", time)]));
        }
        l
    }

    fn sorted(keys: &[&str]) -> Vec<String> {
        let keys: Vec<SortKey> = keys.iter().map(|k| k.parse().unwrap()).collect();
        let mut l = log();
        sort(&mut l, &keys, &Locale::UND).unwrap();
        l.records.iter().map(|r| r.value("CALL").to_string()).collect()
    }

    #[test]
    fn test_parse_key() {
        assert_eq!("-band".parse::<SortKey>().unwrap(), SortKey { field: "BAND".into(), descending: true });
        assert!("-".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_sort() {
        assert_eq!(sorted(&["CALL"]), vec!["G4ABC", "JA1XYZ", "K1JT", "N0CALL", "W1AW"]);
        // empty first, then by frequency; ties keep input order
        assert_eq!(sorted(&["BAND"]), vec!["JA1XYZ", "N0CALL", "K1JT", "W1AW", "G4ABC"]);
        assert_eq!(sorted(&["-BAND"]), vec!["W1AW", "G4ABC", "K1JT", "N0CALL", "JA1XYZ"]);
        // 0900 and 090000 are the same time
        assert_eq!(
            sorted(&["QSO_DATE", "TIME_ON"]),
            vec!["G4ABC", "JA1XYZ", "K1JT", "N0CALL", "W1AW"]
        );
    }

    #[test]
    fn test_comparator_error_aborts() {
        let mut l = log();
        l.records[2].set_value("QSO_DATE", "yesterday");
        let before = l.records.clone();
        let keys = vec!["QSO_DATE".parse::<SortKey>().unwrap()];
        assert!(matches!(sort(&mut l, &keys, &Locale::UND), Err(Error::Compare(_))));
        assert_eq!(l.records, before);
    }
}
