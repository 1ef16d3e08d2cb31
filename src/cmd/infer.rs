//! Fill empty fields that follow from other fields of the same record
//!
//! Inferences run in table order, so a DXCC code inferred from the country
//! name is available to the zone and continent inferences after it. A field
//! that already has a value is never changed, and ambiguous sources (an
//! entity spanning several CQ zones, a country name shared by two current
//! entities) infer nothing.

use crate::adif::{Logfile, Record};
use crate::error::{Error, Result};
use crate::spec::{self, bands, dxcc, modes};
use crate::validate::scalar::parse_number;

type Inference = fn(&Record) -> Option<String>;

const INFERENCES: &[(&str, Inference)] = &[
    ("BAND", |r| band_from(r.value("FREQ"))),
    ("BAND_RX", |r| band_from(r.value("FREQ_RX"))),
    ("MODE", |r| modes::mode_for_submode(r.value("SUBMODE")).map(String::from)),
    ("STATION_CALLSIGN", |r| non_empty(r.value("OPERATOR"))),
    ("OPERATOR", |r| non_empty(r.value("STATION_CALLSIGN"))),
    ("DXCC", |r| dxcc_from(r.value("COUNTRY"), r.value("POTA_REF"))),
    ("MY_DXCC", |r| dxcc_from(r.value("MY_COUNTRY"), r.value("MY_POTA_REF"))),
    ("COUNTRY", |r| country_from(r.value("DXCC"))),
    ("MY_COUNTRY", |r| country_from(r.value("MY_DXCC"))),
    ("CONT", |r| continent_from(r.value("DXCC"))),
    ("CQZ", |r| single_zone(spec::registry().cq_zone_for(r.value("DXCC")))),
    ("ITUZ", |r| single_zone(spec::registry().itu_zone_for(r.value("DXCC")))),
    ("MY_CQ_ZONE", |r| single_zone(spec::registry().cq_zone_for(r.value("MY_DXCC")))),
    ("MY_ITU_ZONE", |r| single_zone(spec::registry().itu_zone_for(r.value("MY_DXCC")))),
];

/// Names of the fields `infer` can fill
pub fn inferable_fields() -> impl Iterator<Item = &'static str> {
    INFERENCES.iter().map(|(name, _)| *name)
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn band_from(freq: &str) -> Option<String> {
    let mhz = parse_number(freq)?;
    bands::freq_to_band(mhz).map(String::from)
}

fn entity(code: &str) -> Option<&'static dxcc::DxccEntity> {
    let code = code.trim().parse::<u16>().ok()?;
    dxcc::entity_by_code(code).filter(|e| !e.is_sentinel())
}

fn country_from(code: &str) -> Option<String> {
    entity(code).map(|e| e.name.to_string())
}

fn continent_from(code: &str) -> Option<String> {
    entity(code)?;
    spec::registry().continent_for(code).map(|v| v.code().to_string())
}

fn single_zone(zones: Vec<u8>) -> Option<String> {
    match zones.as_slice() {
        [z] => Some(z.to_string()),
        _ => None,
    }
}

/// Entity code from a country name, or else from the location of POTA
/// references (`K-0001@US-CT` or the `US-0001` program prefix)
fn dxcc_from(country: &str, pota: &str) -> Option<String> {
    if !country.trim().is_empty() && country.trim().parse::<u16>().is_err() {
        let current: Vec<_> = dxcc::entities_for(country)
            .into_iter()
            .filter(|e| !e.deleted && !e.is_sentinel())
            .collect();
        if let [e] = current.as_slice() {
            return Some(e.code.to_string());
        }
    }
    let mut codes: Vec<u16> = Vec::new();
    for reference in pota.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let location = match reference.split_once('@') {
            Some((_, loc)) => loc,
            None => reference.split('-').next().unwrap_or_default(),
        };
        match spec::registry().dxcc_for_iso(location).as_slice() {
            [code] => codes.push(*code),
            _ => return None,
        }
    }
    codes.dedup();
    match codes.as_slice() {
        [code] => Some(code.to_string()),
        _ => None,
    }
}

/// Fill inferable fields of every record. `fields` limits which fields are
/// filled; empty means all of them. Returns the number of values set.
pub fn infer(log: &mut Logfile, fields: &[String]) -> Result<usize> {
    for f in fields {
        if !inferable_fields().any(|n| n == f.as_str()) {
            let known: Vec<_> = inferable_fields().collect();
            return Err(Error::Usage(format!(
                "cannot infer {}; inferable fields are {}",
                f,
                known.join(", ")
            )));
        }
    }
    let mut set = 0usize;
    for r in &mut log.records {
        for (name, inference) in INFERENCES {
            if !fields.is_empty() && !fields.iter().any(|f| f == name) {
                continue;
            }
            if !r.value(name).is_empty() {
                continue;
            }
            if let Some(value) = inference(r) {
                log::debug!("inferred {}={}", name, value);
                r.set_value(name, value);
                set += 1;
            }
        }
    }
    log::info!("inferred {} values in {} records", set, log.records.len());
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inferred(pairs: &[(&str, &str)], fields: &[&str]) -> Record {
        let mut log = Logfile::new();
        log.records.push(Record::from_pairs(pairs.iter().copied()));
        let fields: Vec<String> = fields.iter().map(|s| s.to_string()).collect();
        infer(&mut log, &fields).unwrap();
        log.records.remove(0)
    }

    #[test]
    fn test_band_mode_and_callsigns() {
        let r = inferred(
            &[("FREQ", "14.074"), ("FREQ_RX", "7.074"), ("SUBMODE", "USB"), ("OPERATOR", "K1ABC")],
            &[],
        );
        assert_eq!(r.value("BAND"), "20m");
        assert_eq!(r.value("BAND_RX"), "40m");
        assert_eq!(r.value("MODE"), "SSB");
        assert_eq!(r.value("STATION_CALLSIGN"), "K1ABC");
        // existing values are kept
        let r = inferred(&[("FREQ", "14.074"), ("BAND", "40m")], &[]);
        assert_eq!(r.value("BAND"), "40m");
    }

    #[test]
    fn test_entity_fields() {
        let r = inferred(&[("DXCC", "90")], &[]);
        assert_eq!(r.value("COUNTRY"), "TRINIDAD & TOBAGO");
        assert_eq!(r.value("CONT"), "SA");
        assert_eq!(r.value("CQZ"), "9");
        assert_eq!(r.value("ITUZ"), "11");
        let r = inferred(&[("COUNTRY", "Trinidad & Tobago")], &["DXCC"]);
        assert_eq!(r.value("DXCC"), "90");
        assert!(!r.has("CQZ"));
        // Canada spans several zones
        let r = inferred(&[("DXCC", "1")], &[]);
        assert_eq!(r.value("CONT"), "NA");
        assert!(!r.has("CQZ"));
        // the sentinel entity has no country
        let r = inferred(&[("DXCC", "0")], &[]);
        assert!(!r.has("COUNTRY"));
    }

    #[test]
    fn test_unknown_target() {
        let mut log = Logfile::new();
        assert!(matches!(infer(&mut log, &["CALL".to_string()]), Err(Error::Usage(_))));
    }
}
