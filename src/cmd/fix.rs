//! Normalization of common format slips
//!
//! - dates `YYYY-MM-DD` and `YYYY/MM/DD` become `YYYYMMDD`
//! - times `HH:MM[:SS]` become `HHMM[SS]`
//! - decimal degrees in location fields become `XDDD MM.MMM`
//! - enumeration values are rewritten in their canonical upper case
//!
//! Values that are already valid, or that cannot be repaired, are left
//! alone.

use crate::adif::{Field, Logfile, Record};
use crate::spec::{self, DataType, FieldDef};
use crate::validate::datetime::{normalize_date, normalize_time};
use crate::validate::geo::{parse_location, Location};

/// Repaired value of one field, or `None` when nothing changes
pub fn fix_value(def: &FieldDef, value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    let fixed = match def.data_type {
        DataType::Date => normalize_date(value),
        DataType::Time => normalize_time(value),
        DataType::Location => fix_location(def, value)?,
        _ => match def.enumeration.as_deref() {
            Some(e) => canonical_upper(e, value)?,
            None => return None,
        },
    };
    (fixed != value).then_some(fixed)
}

fn fix_location(def: &FieldDef, value: &str) -> Option<String> {
    if parse_location(value).is_ok() {
        return None;
    }
    let degrees: f64 = value.trim().parse().ok()?;
    let latitude = if def.is_latitude() {
        true
    } else if def.is_longitude() {
        false
    } else {
        return None;
    };
    Location::from_decimal(degrees, latitude).map(|l| l.to_string())
}

fn canonical_upper(enumeration: &str, value: &str) -> Option<String> {
    let found = spec::registry().lookup_enum_value(enumeration, value);
    let code = found.first()?.code();
    (code == code.to_uppercase()).then(|| code.to_string())
}

fn fix_record(log: &Logfile, record: &mut Record) -> usize {
    let updates: Vec<Field> = record
        .fields()
        .iter()
        .filter_map(|f| {
            let def = log.field_def(&f.name)?;
            let fixed = fix_value(def, &f.value)?;
            log::debug!("fix {}: {:?} -> {:?}", f.name, f.value, fixed);
            Some(Field { value: fixed, ..f.clone() })
        })
        .collect();
    let n = updates.len();
    for f in updates {
        record.set(f);
    }
    n
}

/// Fix every record; returns the number of values changed
pub fn fix(log: &mut Logfile) -> usize {
    let mut records = std::mem::take(&mut log.records);
    let changed: usize = records.iter_mut().map(|r| fix_record(log, r)).sum();
    log.records = records;
    log::info!("fixed {} values", changed);
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix() {
        let mut log = Logfile::new();
        log.records.push(Record::from_pairs([
            ("QSO_DATE", "2023-01-05"),
            ("TIME_ON", "7:11"),
            ("LAT", "-33.5"),
            ("LON", "151.25"),
            ("MODE", "ft8"),
            ("BAND", "20M"),
            ("CONT", "na"),
            ("CALL", "w1aw"),
        ]));
        assert_eq!(fix(&mut log), 6);
        let r = &log.records[0];
        assert_eq!(r.value("QSO_DATE"), "20230105");
        assert_eq!(r.value("TIME_ON"), "0711");
        assert_eq!(r.value("LAT"), "S033 30.000");
        assert_eq!(r.value("LON"), "E151 15.000");
        assert_eq!(r.value("MODE"), "FT8");
        // band names are canonically lower case
        assert_eq!(r.value("BAND"), "20M");
        assert_eq!(r.value("CONT"), "NA");
        assert_eq!(r.value("CALL"), "w1aw");
    }

    #[test]
    fn test_leaves_valid_and_hopeless_values() {
        let registry = spec::registry();
        let date = registry.field("QSO_DATE").unwrap();
        assert_eq!(fix_value(date, "20230105"), None);
        assert_eq!(fix_value(date, "Jan 5"), None);
        let lat = registry.field("LAT").unwrap();
        assert_eq!(fix_value(lat, "N045 00.000"), None);
        assert_eq!(fix_value(lat, "95.0"), None);
        let mode = registry.field("MODE").unwrap();
        assert_eq!(fix_value(mode, "NOT A MODE"), None);
    }
}
