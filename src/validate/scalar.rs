// Validators for booleans, characters, strings, numbers, dates and times

use std::sync::OnceLock;

use regex::Regex;

use super::datetime::{date_field_for_time, parse_date, parse_time, MIN_YEAR};
use super::{error, warning, Validation, ValidationContext};
use crate::spec::FieldDef;

pub fn validate_boolean(value: &str, def: &FieldDef, _: &ValidationContext) -> Validation {
    match value {
        "Y" | "y" | "N" | "n" => Validation::Valid,
        _ => error(format!("{} must be Y or N, got {:?}", def.name, value)),
    }
}

fn is_printable_ascii(c: char) -> bool {
    (' '..='~').contains(&c)
}

fn is_line_break(c: char) -> bool {
    c == '\r' || c == '\n'
}

fn single_char(value: &str, def: &FieldDef) -> Result<char, Validation> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(error(format!("{} must be a single character, got {:?}", def.name, value))),
    }
}

pub fn validate_character(value: &str, def: &FieldDef, _: &ValidationContext) -> Validation {
    match single_char(value, def) {
        Ok(c) if is_printable_ascii(c) => Validation::Valid,
        Ok(c) => error(format!("{} must be a printable ASCII character, got {:?}", def.name, c)),
        Err(v) => v,
    }
}

pub fn validate_intl_character(value: &str, def: &FieldDef, _: &ValidationContext) -> Validation {
    match single_char(value, def) {
        Ok(c) if c.is_control() => error(format!("{} may not be a control character", def.name)),
        Ok(_) => Validation::Valid,
        Err(v) => v,
    }
}

fn ascii_text(value: &str, def: &FieldDef, multiline: bool) -> Validation {
    match value
        .chars()
        .find(|&c| !(is_printable_ascii(c) || multiline && is_line_break(c)))
    {
        None => Validation::Valid,
        Some(c) if is_line_break(c) => error(format!("{} may not contain line breaks", def.name)),
        Some(c) => error(format!(
            "{} may only contain printable ASCII, found {:?}; use {}_INTL for other text",
            def.name, c, def.name
        )),
    }
}

pub fn validate_string(value: &str, def: &FieldDef, _: &ValidationContext) -> Validation {
    ascii_text(value, def, false)
}

pub fn validate_multiline_string(value: &str, def: &FieldDef, _: &ValidationContext) -> Validation {
    ascii_text(value, def, true)
}

pub fn validate_intl_string(value: &str, def: &FieldDef, _: &ValidationContext) -> Validation {
    if value.chars().any(is_line_break) {
        error(format!("{} may not contain line breaks", def.name))
    } else {
        Validation::Valid
    }
}

pub fn validate_intl_multiline_string(_: &str, _: &FieldDef, _: &ValidationContext) -> Validation {
    Validation::Valid
}

pub fn validate_digit(value: &str, def: &FieldDef, _: &ValidationContext) -> Validation {
    if value.len() == 1 && value.as_bytes()[0].is_ascii_digit() {
        Validation::Valid
    } else {
        error(format!("{} must be a single digit, got {:?}", def.name, value))
    }
}

fn number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?([0-9]+\.?[0-9]*|\.[0-9]+)$").expect("number pattern"))
}

/// Parse a value in the restricted ADIF decimal grammar: optional leading
/// `-`, digits, at most one `.`; no exponent, `+`, or separators
pub fn parse_number(value: &str) -> Option<f64> {
    if !number_regex().is_match(value) {
        return None;
    }
    value.parse().ok()
}

fn check_bounds(n: f64, value: &str, def: &FieldDef) -> Validation {
    let (lo, hi) = def.bounds();
    match (lo, hi) {
        (Some(lo), _) if n < lo => error(format!("{} value {} is below the minimum {}", def.name, value, lo)),
        (_, Some(hi)) if n > hi => error(format!("{} value {} is above the maximum {}", def.name, value, hi)),
        _ => Validation::Valid,
    }
}

pub fn validate_number(value: &str, def: &FieldDef, _: &ValidationContext) -> Validation {
    match parse_number(value) {
        Some(n) => check_bounds(n, value, def),
        None => error(format!("{} is not a decimal number: {:?}", def.name, value)),
    }
}

pub fn validate_integer(value: &str, def: &FieldDef, _: &ValidationContext) -> Validation {
    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return error(format!("{} is not an integer: {:?}", def.name, value));
    }
    match parse_number(value) {
        Some(n) => check_bounds(n, value, def),
        None => error(format!("{} is not an integer: {:?}", def.name, value)),
    }
}

pub fn validate_date(value: &str, def: &FieldDef, ctx: &ValidationContext) -> Validation {
    let Some(date) = parse_date(value) else {
        return error(format!(
            "{} must be a YYYYMMDD date in {} or later, got {:?}",
            def.name, MIN_YEAR, value
        ));
    };
    match ctx.now {
        Some(now) if date > now.date_naive() => {
            warning(format!("{} {} is in the future", def.name, value))
        }
        _ => Validation::Valid,
    }
}

pub fn validate_time(value: &str, def: &FieldDef, ctx: &ValidationContext) -> Validation {
    let Some(time) = parse_time(value) else {
        return error(format!("{} must be HHMM or HHMMSS, got {:?}", def.name, value));
    };
    let (Some(now), Some((date_field, fallback))) = (ctx.now, date_field_for_time(&def.name)) else {
        return Validation::Valid;
    };
    let mut date = ctx.field_value(date_field);
    if date.is_empty() {
        date = fallback.map(|f| ctx.field_value(f)).unwrap_or("");
    }
    match parse_date(date) {
        Some(d) if d == now.date_naive() && time > now.time() => {
            warning(format!("{} {} on {} is in the future", def.name, value, date))
        }
        _ => Validation::Valid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adif::Record;
    use crate::spec::{registry, DataType};
    use chrono::{TimeZone, Utc};

    fn field(name: &str) -> &'static FieldDef {
        registry().field(name).unwrap()
    }

    fn check(name: &str, value: &str) -> Validation {
        let def = field(name);
        super::super::validator_for(def.data_type)(value, def, &ValidationContext::new())
    }

    #[test]
    fn test_boolean() {
        for v in ["Y", "y", "N", "n"] {
            assert!(check("FORCE_INIT", v).is_valid());
        }
        assert!(check("FORCE_INIT", "yes").is_error());
        assert!(check("FORCE_INIT", "T").is_error());
    }

    #[test]
    fn test_character_types() {
        let ascii = FieldDef::new("X", DataType::Character);
        let intl = FieldDef::new("X", DataType::IntlCharacter);
        let ctx = ValidationContext::new();
        assert!(validate_character("a", &ascii, &ctx).is_valid());
        assert!(validate_character("é", &ascii, &ctx).is_error());
        assert!(validate_character("ab", &ascii, &ctx).is_error());
        assert!(validate_character("\n", &ascii, &ctx).is_error());
        assert!(validate_intl_character("é", &intl, &ctx).is_valid());
        assert!(validate_intl_character("\n", &intl, &ctx).is_error());
    }

    #[test]
    fn test_strings() {
        assert!(check("NAME", "Hiram Percy Maxim").is_valid());
        assert!(check("NAME", "Jéan").is_error());
        assert!(check("NAME", "two\nlines").is_error());
        assert!(check("NOTES", "two\r\nlines").is_valid());
        assert!(check("NOTES", "tab\there").is_error());
        assert!(check("NAME_INTL", "Jéàn Mîçhēl").is_valid());
        assert!(check("NAME_INTL", "a\nb").is_error());
        assert!(check("NOTES_INTL", "Straße\nZeile").is_valid());
    }

    #[test]
    fn test_numbers() {
        assert!(check("FREQ", "14.074").is_valid());
        assert!(check("FREQ", "-.5").is_valid());
        assert!(check("FREQ", "7.").is_valid());
        for bad in ["+7", "1e6", "1,000", "1.2.3", "-", ".", "7.0-", " 7"] {
            assert!(check("FREQ", bad).is_error(), "{}", bad);
        }
        assert!(check("ANT_EL", "-90").is_valid());
        assert!(check("ANT_EL", "90.5").is_error());
    }

    #[test]
    fn test_integers() {
        assert!(check("CQZ", "40").is_valid());
        assert!(check("CQZ", "41").is_error());
        assert!(check("CQZ", "0").is_error());
        assert!(check("CQZ", "5.0").is_error());
        assert!(check("K_INDEX", "9").is_valid());
        assert!(check("FISTS", "0").is_error());
    }

    #[test]
    fn test_digit() {
        let d = FieldDef::new("D", DataType::Digit);
        let ctx = ValidationContext::new();
        assert!(validate_digit("7", &d, &ctx).is_valid());
        assert!(validate_digit("10", &d, &ctx).is_error());
        assert!(validate_digit("x", &d, &ctx).is_error());
    }

    #[test]
    fn test_dates() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let ctx = ValidationContext::new().with_now(now);
        let def = field("QSO_DATE");
        assert!(validate_date("20240601", def, &ctx).is_valid());
        assert!(validate_date("20240602", def, &ctx).is_warning());
        assert!(validate_date("19300101", def, &ctx).is_valid());
        assert!(validate_date("19291231", def, &ctx).is_error());
        assert!(validate_date("20240631", def, &ctx).is_error());
        assert!(validate_date("20240602", def, &ValidationContext::new()).is_valid());
    }

    #[test]
    fn test_time_in_future() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let today = Record::from_pairs([("QSO_DATE", "20240601")]);
        let yesterday = Record::from_pairs([("QSO_DATE", "20240531")]);
        let def = field("TIME_ON");
        let ctx = ValidationContext::new().with_now(now).with_record(&today);
        assert!(validate_time("1159", def, &ctx).is_valid());
        assert!(validate_time("1201", def, &ctx).is_warning());
        let ctx = ValidationContext::new().with_now(now).with_record(&yesterday);
        assert!(validate_time("2359", def, &ctx).is_valid());
        assert!(validate_time("2460", def, &ctx).is_error());

        let off = field("TIME_OFF");
        let ctx = ValidationContext::new().with_now(now).with_record(&today);
        assert!(validate_time("1300", off, &ctx).is_warning());
    }
}
