// Orderings for non-text data types

use std::cmp::Ordering;

use super::{CompareError, CompareResult};
use crate::spec::bands::band_edges;
use crate::validate::datetime::{parse_date, parse_time};
use crate::validate::geo::parse_location;
use crate::validate::scalar::parse_number;

/// Zero of either sign compares equal
fn unsigned_zero(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}

fn both<T>(
    field: &str,
    a: &str,
    b: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<(T, T), CompareError> {
    let x = parse(a).map_err(|e| CompareError::new(field, a, e))?;
    let y = parse(b).map_err(|e| CompareError::new(field, b, e))?;
    Ok((x, y))
}

pub(super) fn compare_numbers(field: &str, a: &str, b: &str) -> CompareResult {
    let (x, y) = both(field, a, b, |s| {
        parse_number(s.trim()).ok_or_else(|| "not a number".to_string())
    })?;
    Ok(unsigned_zero(x).total_cmp(&unsigned_zero(y)))
}

pub(super) fn compare_bands(field: &str, a: &str, b: &str) -> CompareResult {
    let (x, y) = both(field, a, b, |s| {
        band_edges(s).map(|(lo, _)| lo).ok_or_else(|| "not a known band".to_string())
    })?;
    Ok(x.total_cmp(&y))
}

pub(super) fn compare_dates(field: &str, a: &str, b: &str) -> CompareResult {
    let (x, y) = both(field, a, b, |s| parse_date(s).ok_or_else(|| "not a YYYYMMDD date".to_string()))?;
    Ok(x.cmp(&y))
}

pub(super) fn compare_times(field: &str, a: &str, b: &str) -> CompareResult {
    let (x, y) = both(field, a, b, |s| parse_time(s).ok_or_else(|| "not an HHMM[SS] time".to_string()))?;
    Ok(x.cmp(&y))
}

pub(super) fn compare_booleans(field: &str, a: &str, b: &str) -> CompareResult {
    let (x, y) = both(field, a, b, |s| match s {
        "Y" | "y" => Ok(true),
        "N" | "n" => Ok(false),
        _ => Err("not Y or N".to_string()),
    })?;
    Ok(x.cmp(&y))
}

/// Sort key for a location: longitudes (west to east) precede latitudes
/// (south to north). Only zero is folded across hemispheres, so W180 and
/// E180 stay at opposite ends.
pub fn location_key(value: &str) -> Result<(u8, f64), String> {
    let loc = parse_location(value)?;
    let class = if loc.is_latitude() { 1 } else { 0 };
    Ok((class, unsigned_zero(loc.decimal())))
}

pub fn compare_location(field: &str, a: &str, b: &str) -> CompareResult {
    let ((ca, x), (cb, y)) = both(field, a, b, location_key)?;
    Ok(ca.cmp(&cb).then(x.total_cmp(&y)))
}

pub(super) fn compare_ascii_folded(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Lists compare as sorted, case-folded element sequences
pub(super) fn compare_lists(a: &str, b: &str, sep: char) -> Ordering {
    let fold = |s: &str| {
        let mut items: Vec<String> = s.split(sep).map(|t| t.trim().to_lowercase()).collect();
        items.sort();
        items
    };
    fold(a).cmp(&fold(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_key() {
        assert_eq!(location_key("W000 00.000"), location_key("E000 00.000"));
        assert_eq!(location_key("E000 00.000"), Ok((0, 0.0)));
        assert_eq!(location_key("N045 30.000"), Ok((1, 45.5)));
        assert!(location_key("N45").is_err());
        assert_eq!(
            compare_location("LON", "E000 00.001", "N089 00.000"),
            Ok(Ordering::Less)
        );
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(compare_numbers("X", "-0", "0.0"), Ok(Ordering::Equal));
        assert_eq!(compare_numbers("X", "-.5", "0"), Ok(Ordering::Less));
    }

    #[test]
    fn test_ascii_folded() {
        assert_eq!(compare_ascii_folded("fn31PR", "FN31pr"), Ordering::Equal);
        assert_eq!(compare_ascii_folded("FN31", "FN31pr"), Ordering::Less);
    }
}
