//! Date and Time Utilities
//!
//! Parsing of ADIF dates (YYYYMMDD) and times (HHMM or HHMMSS), plus
//! normalization of the common near-misses (`1999-03-06`, `07:11`).

use chrono::{NaiveDate, NaiveTime};

/// Earliest year an ADIF date may carry
pub const MIN_YEAR: i32 = 1930;

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a YYYYMMDD date; `None` for anything else, including years
/// before 1930
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !all_digits(s) {
        return None;
    }
    let year: i32 = s[..4].parse().ok()?;
    let month: u32 = s[4..6].parse().ok()?;
    let day: u32 = s[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day).filter(|_| year >= MIN_YEAR)
}

/// Parse HHMM or HHMMSS; HHMM is HHMM00
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    if (s.len() != 4 && s.len() != 6) || !all_digits(s) {
        return None;
    }
    let hours: u32 = s[..2].parse().ok()?;
    let minutes: u32 = s[2..4].parse().ok()?;
    let seconds: u32 = if s.len() == 6 { s[4..6].parse().ok()? } else { 0 };
    NaiveTime::from_hms_opt(hours, minutes, seconds)
}

/// Date field that goes with a time field, for the "not in the future"
/// check
pub fn date_field_for_time(time_field: &str) -> Option<(&'static str, Option<&'static str>)> {
    match time_field {
        "TIME_ON" => Some(("QSO_DATE", None)),
        "TIME_OFF" => Some(("QSO_DATE_OFF", Some("QSO_DATE"))),
        _ => None,
    }
}

/// Rewrite `YYYY-MM-DD` and `YYYY/MM/DD` as YYYYMMDD. Other values are
/// returned unchanged.
pub fn normalize_date(s: &str) -> String {
    let clean = s.trim();
    for sep in ['-', '/'] {
        let parts: Vec<&str> = clean.split(sep).collect();
        if parts.len() == 3
            && parts[0].len() == 4
            && parts[1..].iter().all(|p| (1..=2).contains(&p.len()))
            && parts.iter().all(|p| all_digits(p))
        {
            return format!("{}{:0>2}{:0>2}", parts[0], parts[1], parts[2]);
        }
    }
    clean.to_string()
}

/// Rewrite `HH:MM` and `HH:MM:SS` as HHMM and HHMMSS. Other values are
/// returned unchanged.
pub fn normalize_time(s: &str) -> String {
    let clean = s.trim();
    if !clean.contains(':') {
        return clean.to_string();
    }
    let parts: Vec<&str> = clean.split(':').collect();
    if (parts.len() == 2 || parts.len() == 3)
        && parts.iter().all(|p| (1..=2).contains(&p.len()) && all_digits(p))
    {
        return parts.iter().map(|p| format!("{:0>2}", p)).collect();
    }
    clean.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("19990306"), NaiveDate::from_ymd_opt(1999, 3, 6));
        assert!(parse_date("19291231").is_none());
        assert!(parse_date("20230229").is_none());
        assert!(parse_date("20240229").is_some());
        assert!(parse_date("1999036").is_none());
        assert!(parse_date("1999-3-6").is_none());
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("0711"), NaiveTime::from_hms_opt(7, 11, 0));
        assert_eq!(parse_time("235959"), NaiveTime::from_hms_opt(23, 59, 59));
        assert!(parse_time("2400").is_none());
        assert!(parse_time("0760").is_none());
        assert!(parse_time("07115").is_none());
        assert!(parse_time("07:11").is_none());
    }

    #[test]
    fn test_normalize_date() {
        assert_eq!(normalize_date("1999-03-06"), "19990306");
        assert_eq!(normalize_date("2001/2/3"), "20010203");
        assert_eq!(normalize_date("19990306"), "19990306");
        assert_eq!(normalize_date("March 6"), "March 6");
    }

    #[test]
    fn test_normalize_time() {
        assert_eq!(normalize_time("07:11"), "0711");
        assert_eq!(normalize_time("7:11:05"), "071105");
        assert_eq!(normalize_time("0711"), "0711");
        assert_eq!(normalize_time("7:111"), "7:111");
    }
}
