// Locations (XDDD MM.MMM) and Maidenhead grid squares

use std::sync::OnceLock;

use regex::Regex;

use super::{error, warning, Validation, ValidationContext};
use crate::spec::FieldDef;

/// A parsed ADIF location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// One of N, E, S, W
    pub direction: char,
    pub degrees: u32,
    pub minutes: f64,
}

impl Location {
    pub fn is_latitude(&self) -> bool {
        matches!(self.direction, 'N' | 'S')
    }

    /// Signed decimal degrees; south and west are negative
    pub fn decimal(&self) -> f64 {
        let d = self.degrees as f64 + self.minutes / 60.0;
        match self.direction {
            'S' | 'W' => -d,
            _ => d,
        }
    }

    /// Format decimal degrees as a location, e.g. `-71.5` as `W071 30.000`
    pub fn from_decimal(value: f64, latitude: bool) -> Option<Location> {
        let limit = if latitude { 90.0 } else { 180.0 };
        if !value.is_finite() || value.abs() > limit {
            return None;
        }
        let direction = match (latitude, value < 0.0) {
            (true, false) => 'N',
            (true, true) => 'S',
            (false, false) => 'E',
            (false, true) => 'W',
        };
        let abs = value.abs();
        let mut degrees = abs.trunc() as u32;
        // round to the written precision before splitting out minutes
        let mut minutes = ((abs - abs.trunc()) * 60.0 * 1000.0).round() / 1000.0;
        if minutes >= 60.0 {
            degrees += 1;
            minutes = 0.0;
        }
        Some(Location { direction, degrees, minutes })
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:03} {:06.3}", self.direction, self.degrees, self.minutes)
    }
}

fn location_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([NESWnesw])([0-9]{3}) ([0-9]{2}\.[0-9]{3})$").expect("location pattern")
    })
}

/// Parse `XDDD MM.MMM`, checking degree and minute ranges
pub fn parse_location(value: &str) -> Result<Location, String> {
    let caps = location_regex()
        .captures(value)
        .ok_or_else(|| format!("{:?} is not in XDDD MM.MMM format", value))?;
    let direction = caps[1].chars().next().map(|c| c.to_ascii_uppercase()).unwrap_or('N');
    let degrees: u32 = caps[2].parse().map_err(|_| format!("bad degrees in {:?}", value))?;
    let minutes: f64 = caps[3].parse().map_err(|_| format!("bad minutes in {:?}", value))?;
    if degrees > 180 {
        return Err(format!("degrees out of range in {:?}", value));
    }
    if minutes >= 60.0 {
        return Err(format!("minutes out of range in {:?}", value));
    }
    let loc = Location { direction, degrees, minutes };
    if loc.is_latitude() && loc.decimal().abs() > 90.0 {
        return Err(format!("latitude beyond 90 degrees in {:?}", value));
    }
    if loc.decimal().abs() > 180.0 {
        return Err(format!("longitude beyond 180 degrees in {:?}", value));
    }
    Ok(loc)
}

/// Name of the other half of a coordinate pair: `MY_LAT` pairs with `MY_LON`
fn paired_field(name: &str) -> Option<String> {
    if let Some(prefix) = name.strip_suffix("LAT") {
        Some(format!("{}LON", prefix))
    } else {
        name.strip_suffix("LON").map(|prefix| format!("{}LAT", prefix))
    }
}

pub fn validate_location(value: &str, def: &FieldDef, ctx: &ValidationContext) -> Validation {
    let loc = match parse_location(value) {
        Ok(loc) => loc,
        Err(msg) => return error(format!("{}: {}", def.name, msg)),
    };
    if def.is_latitude() && !loc.is_latitude() {
        return error(format!("{} is a latitude and must start with N or S", def.name));
    }
    if def.is_longitude() && loc.is_latitude() {
        return error(format!("{} is a longitude and must start with E or W", def.name));
    }
    if def.is_latitude() || def.is_longitude() {
        if let (Some(pair), Some(_)) = (paired_field(&def.name), ctx.record) {
            if ctx.field_value(&pair).is_empty() {
                return warning(format!("{} is set but {} is empty", def.name, pair));
            }
        }
    }
    Validation::Valid
}

/// Letters at positions 0,1 (mod 4), digits at 2,3 (mod 4), even length
fn grid_shape(value: &str, max_len: usize) -> bool {
    let b = value.as_bytes();
    !b.is_empty()
        && b.len() <= max_len
        && b.len() % 2 == 0
        && b.iter().enumerate().all(|(i, c)| {
            if i % 4 < 2 {
                c.is_ascii_alphabetic()
            } else {
                c.is_ascii_digit()
            }
        })
}

pub fn validate_gridsquare(value: &str, def: &FieldDef, _: &ValidationContext) -> Validation {
    if grid_shape(value, 8) {
        Validation::Valid
    } else {
        error(format!("{} is not a 2, 4, 6 or 8 character Maidenhead locator: {:?}", def.name, value))
    }
}

pub fn validate_gridsquare_ext(value: &str, def: &FieldDef, _: &ValidationContext) -> Validation {
    if grid_shape(value, 4) {
        Validation::Valid
    } else {
        error(format!("{} is not a 2 or 4 character locator extension: {:?}", def.name, value))
    }
}

pub fn validate_gridsquare_list(value: &str, def: &FieldDef, _: &ValidationContext) -> Validation {
    match value.split(',').find(|g| !grid_shape(g.trim(), 8)) {
        None => Validation::Valid,
        Some(g) => error(format!("{} contains an invalid locator {:?}", def.name, g)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adif::Record;
    use crate::spec::registry;

    fn field(name: &str) -> &'static FieldDef {
        registry().field(name).unwrap()
    }

    #[test]
    fn test_parse_location() {
        let l = parse_location("W071 30.000").unwrap();
        assert_eq!(l.decimal(), -71.5);
        assert_eq!(l.to_string(), "W071 30.000");
        assert!(parse_location("E180 00.000").is_ok());
        assert!(parse_location("E180 00.001").is_err());
        assert!(parse_location("E181 00.000").is_err());
        assert!(parse_location("N045 60.000").is_err());
        assert!(parse_location("N091 00.000").is_err());
        assert!(parse_location("N45 30.000").is_err());
        assert!(parse_location("X045 30.000").is_err());
    }

    #[test]
    fn test_from_decimal() {
        assert_eq!(Location::from_decimal(-71.5, false).unwrap().to_string(), "W071 30.000");
        assert_eq!(Location::from_decimal(41.71484, true).unwrap().to_string(), "N041 42.890");
        assert_eq!(Location::from_decimal(10.99999999, true).unwrap().to_string(), "N011 00.000");
        assert!(Location::from_decimal(91.0, true).is_none());
    }

    #[test]
    fn test_location_direction_and_pair() {
        let ctx = ValidationContext::new();
        assert!(validate_location("N041 42.890", field("LAT"), &ctx).is_valid());
        assert!(validate_location("E041 42.890", field("LAT"), &ctx).is_error());
        assert!(validate_location("N041 42.890", field("LON"), &ctx).is_error());

        let lonely = Record::from_pairs([("LAT", "N041 42.890")]);
        let ctx = ValidationContext::new().with_record(&lonely);
        assert!(validate_location("N041 42.890", field("LAT"), &ctx).is_warning());
        let paired = Record::from_pairs([("MY_LAT", "N041 42.890"), ("MY_LON", "W072 43.660")]);
        let ctx = ValidationContext::new().with_record(&paired);
        assert!(validate_location("N041 42.890", field("MY_LAT"), &ctx).is_valid());
    }

    #[test]
    fn test_gridsquares() {
        let ctx = ValidationContext::new();
        let g = field("GRIDSQUARE");
        for ok in ["FN", "FN31", "FN31pr", "FN31pr42", "zz99zz99"] {
            assert!(validate_gridsquare(ok, g, &ctx).is_valid(), "{}", ok);
        }
        for bad in ["F", "FN3", "FN31p", "FN31pr42xx", "31FN", "FNAB"] {
            assert!(validate_gridsquare(bad, g, &ctx).is_error(), "{}", bad);
        }
        let ext = field("GRIDSQUARE_EXT");
        assert!(validate_gridsquare_ext("AB12", ext, &ctx).is_valid());
        assert!(validate_gridsquare_ext("AB12CD", ext, &ctx).is_error());
        let list = field("VUCC_GRIDS");
        assert!(validate_gridsquare_list("EN98,FM08,EM97,FM07", list, &ctx).is_valid());
        assert!(validate_gridsquare_list("EN98,FM0", list, &ctx).is_error());
    }
}
