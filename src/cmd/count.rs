//! Record counts
//!
//! Without fields the result is one record holding the total. With fields,
//! there is one record per distinct combination of their values, in order
//! of first appearance, each with a `COUNT` field.

use std::collections::HashMap;

use crate::adif::{Field, FieldOrder, Logfile, Record};

pub const COUNT_FIELD: &str = "COUNT";

pub fn count(log: &Logfile, fields: &[String]) -> Logfile {
    let mut groups: Vec<(Vec<&str>, usize)> = Vec::new();
    let mut index: HashMap<Vec<&str>, usize> = HashMap::new();
    for r in &log.records {
        let key: Vec<&str> = fields.iter().map(|f| r.value(f)).collect();
        match index.get(&key) {
            Some(&i) => groups[i].1 += 1,
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, 1));
            }
        }
    }
    if fields.is_empty() && groups.is_empty() {
        groups.push((Vec::new(), 0));
    }

    let mut out = Logfile::new();
    out.header = log.header.clone();
    out.field_order = FieldOrder::new(fields.iter().map(String::as_str).chain([COUNT_FIELD]));
    for (key, n) in groups {
        let mut r = Record::new();
        for (name, value) in fields.iter().zip(key) {
            r.set(Field::new(name, value));
        }
        r.set_value(COUNT_FIELD, n.to_string());
        out.records.push(r);
    }
    log::debug!("counted {} records in {} groups", log.records.len(), out.records.len());
    out
}
