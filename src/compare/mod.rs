// Field comparators
//
// `comparator_for` returns a closure ordering two string values of a field.
// Empty values sort first. Everything else is ordered by data type: text by
// Unicode collation ignoring case, width and accents; numbers, dates, times
// and bands numerically; locations geographically; lists token by token.

mod order;

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::Locale;
use thiserror::Error;

use crate::spec::{DataType, FieldDef};

pub use order::{compare_location, location_key};

/// A value that could not be ordered
#[derive(Debug, Clone, Error, PartialEq)]
#[error("cannot compare {field} value {value:?}: {reason}")]
pub struct CompareError {
    pub field: String,
    pub value: String,
    pub reason: String,
}

impl CompareError {
    pub(crate) fn new(field: &str, value: &str, reason: impl Into<String>) -> Self {
        CompareError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type CompareResult = Result<Ordering, CompareError>;

/// A total pre-order over the string values of one field
pub type Comparator = Box<dyn Fn(&str, &str) -> CompareResult>;

/// Parse a BCP-47 locale tag; empty means the root locale
pub fn parse_locale(tag: &str) -> Result<Locale, crate::error::Error> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Ok(Locale::UND);
    }
    tag.parse::<Locale>()
        .map_err(|e| crate::error::Error::Usage(format!("invalid locale {:?}: {}", tag, e)))
}

/// Primary-strength collator: differences of case, width and accents are
/// ignored
fn loose_collator(locale: &Locale) -> Collator {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Primary);
    match Collator::try_new(&locale.into(), options) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("no collation data for {}: {}; using root collation", locale, e);
            Collator::try_new(&(&Locale::UND).into(), options)
                .expect("root collation data is compiled in")
        }
    }
}

fn collating(locale: &Locale) -> Comparator {
    let collator = loose_collator(locale);
    Box::new(move |a, b| Ok(collator.compare(a, b)))
}

fn is_dxcc_code(def: &FieldDef) -> bool {
    def.enumeration
        .as_deref()
        .map_or(false, |e| e.eq_ignore_ascii_case("DXCC_Entity_Code"))
}

fn is_band(def: &FieldDef) -> bool {
    def.enumeration
        .as_deref()
        .map_or(false, |e| e.eq_ignore_ascii_case("Band"))
}

/// Comparator for values of `def`, collating international text by
/// `locale`
pub fn comparator_for(def: &FieldDef, locale: &Locale) -> Comparator {
    let name = def.name.clone();
    let inner: Comparator = if is_dxcc_code(def) || def.data_type.is_numeric() {
        Box::new(move |a, b| order::compare_numbers(&name, a, b))
    } else if is_band(def) {
        Box::new(move |a, b| order::compare_bands(&name, a, b))
    } else if let Some(sep) = def.data_type.list_separator() {
        Box::new(move |a, b| Ok(order::compare_lists(a, b, sep)))
    } else {
        match def.data_type {
            DataType::Boolean => Box::new(move |a, b| order::compare_booleans(&name, a, b)),
            DataType::Date => Box::new(move |a, b| order::compare_dates(&name, a, b)),
            DataType::Time => Box::new(move |a, b| order::compare_times(&name, a, b)),
            DataType::Location => Box::new(move |a, b| compare_location(&name, a, b)),
            DataType::GridSquare | DataType::GridSquareExt => {
                Box::new(|a, b| Ok(order::compare_ascii_folded(a, b)))
            }
            t if t.is_intl() => collating(locale),
            _ => collating(&Locale::UND),
        }
    };
    empty_first(inner)
}

/// Empty values sort before every non-empty value
pub fn empty_first(inner: Comparator) -> Comparator {
    Box::new(move |a, b| match (a.is_empty(), b.is_empty()) {
        (true, true) => Ok(Ordering::Equal),
        (true, false) => Ok(Ordering::Less),
        (false, true) => Ok(Ordering::Greater),
        (false, false) => inner(a, b),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::registry;
    use proptest::prelude::*;

    fn cmp_for(name: &str) -> Comparator {
        comparator_for(registry().field(name).unwrap(), &Locale::UND)
    }

    fn sorted(name: &str, values: &[&str]) -> Vec<String> {
        let cmp = cmp_for(name);
        let mut v: Vec<String> = values.iter().map(|s| s.to_string()).collect();
        v.sort_by(|a, b| cmp(a, b).unwrap());
        v
    }

    #[test]
    fn test_string_insensitivity() {
        let cmp = cmp_for("NAME");
        assert_eq!(cmp("DIPOLE", "dipole"), Ok(Ordering::Equal));
        assert_eq!(cmp("Jean Michel", "Jéàn Mîçhēl"), Ok(Ordering::Equal));
        assert_eq!(cmp("ＡＢＣ", "abc"), Ok(Ordering::Equal));
        assert_eq!(cmp("abc", "abd"), Ok(Ordering::Less));
    }

    #[test]
    fn test_intl_uses_locale() {
        let def = registry().field("NAME_INTL").unwrap();
        let sv = comparator_for(def, &"sv".parse().unwrap());
        let root = comparator_for(def, &Locale::UND);
        // Swedish sorts ö after z
        assert_eq!(sv("öl", "zebra"), Ok(Ordering::Greater));
        assert_eq!(root("öl", "zebra"), Ok(Ordering::Less));
    }

    #[test]
    fn test_empty_is_minimal() {
        for name in ["NAME", "FREQ", "QSO_DATE", "LAT", "BAND", "FORCE_INIT", "VUCC_GRIDS"] {
            let cmp = cmp_for(name);
            assert_eq!(cmp("", ""), Ok(Ordering::Equal), "{}", name);
            assert_eq!(cmp("", "x"), Ok(Ordering::Less), "{}", name);
            assert_eq!(cmp("x", ""), Ok(Ordering::Greater), "{}", name);
        }
    }

    #[test]
    fn test_gridsquare_order() {
        let want = [
            "AA00aa00", "AA00aa01", "AA00ab00", "AA09aa00", "AA10aa00", "AB00CD00", "dn00ab",
            "RR99xx", "RR99xx99",
        ];
        let mut input = want;
        input.reverse();
        assert_eq!(sorted("GRIDSQUARE", &input), want);
    }

    #[test]
    fn test_location_order() {
        let lon = [
            "W180 00.000", "W090 00.000", "W000 00.000", "E045 30.432", "E123 45.678", "E180 00.000",
        ];
        let mut input = lon;
        input.reverse();
        assert_eq!(sorted("LON", &input), lon);

        let lat = ["S090 00.000", "S000 00.000", "N000 00.000", "N090 00.000"];
        let cmp = cmp_for("LAT");
        for w in lat.windows(2) {
            assert_ne!(cmp(w[0], w[1]), Ok(Ordering::Greater), "{:?}", w);
        }
        assert_eq!(cmp("S000 00.000", "N000 00.000"), Ok(Ordering::Equal));
        assert_eq!(cmp("S090 00.000", "N090 00.000"), Ok(Ordering::Less));
        assert!(cmp("N091 00.000", "N000 00.000").is_err());
    }

    #[test]
    fn test_numeric_and_dxcc() {
        assert_eq!(sorted("FREQ", &["14.074", "7.074", "-1", "144"]), ["-1", "7.074", "14.074", "144"]);
        assert_eq!(sorted("DXCC", &["291", "90", "6"]), ["6", "90", "291"]);
        let cmp = cmp_for("FREQ");
        assert_eq!(cmp("7.0", "7"), Ok(Ordering::Equal));
        let err = cmp("seven", "7").unwrap_err();
        assert_eq!(err.field, "FREQ");
        assert_eq!(err.value, "seven");
    }

    #[test]
    fn test_band_order() {
        assert_eq!(sorted("BAND", &["2m", "160M", "20m", "70cm", "6m"]), ["160M", "20m", "6m", "2m", "70cm"]);
        assert!(cmp_for("BAND")("20m", "21m").is_err());
    }

    #[test]
    fn test_dates_times_booleans() {
        assert_eq!(sorted("QSO_DATE", &["20240101", "19991231"]), ["19991231", "20240101"]);
        let t = cmp_for("TIME_ON");
        assert_eq!(t("0711", "071100"), Ok(Ordering::Equal));
        assert_eq!(t("0711", "071101"), Ok(Ordering::Less));
        assert!(t("0761", "0700").is_err());
        let b = cmp_for("FORCE_INIT");
        assert_eq!(b("y", "N"), Ok(Ordering::Greater));
        assert_eq!(b("n", "N"), Ok(Ordering::Equal));
        assert!(b("T", "N").is_err());
    }

    #[test]
    fn test_lists() {
        let cmp = cmp_for("VUCC_GRIDS");
        assert_eq!(cmp("FN31,EN98", "en98,fn31"), Ok(Ordering::Equal));
        assert_eq!(cmp("EN98", "EN98,FN31"), Ok(Ordering::Less));
        assert_eq!(cmp("FN31", "EN98,FN31"), Ok(Ordering::Greater));
        let counties = cmp_for("USACA_COUNTIES");
        assert_eq!(counties("MA,Middlesex:NH,Cheshire", "nh,cheshire:ma,middlesex"), Ok(Ordering::Equal));
    }

    fn string_types() -> Vec<FieldDef> {
        ["NAME", "NOTES", "NAME_INTL", "MODE", "CONTEST_ID"]
            .iter()
            .map(|n| registry().field(n).unwrap().clone())
            .collect()
    }

    proptest! {
        #[test]
        fn prop_string_laws(a in "[ -~]{0,12}", b in "[ -~]{0,12}") {
            for def in string_types() {
                let cmp = comparator_for(&def, &Locale::UND);
                prop_assert_eq!(cmp(&a, &a), Ok(Ordering::Equal));
                prop_assert_eq!(cmp(&a, &b).map(Ordering::reverse), cmp(&b, &a));
                prop_assert_eq!(cmp(&a, &b), cmp(&a.to_lowercase(), &b.to_uppercase()));
                if !a.is_empty() {
                    prop_assert_eq!(cmp("", &a), Ok(Ordering::Less));
                }
            }
        }

        #[test]
        fn prop_number_laws(x in -1.0e6f64..1.0e6, y in -1.0e6f64..1.0e6, z in -1.0e6f64..1.0e6) {
            let cmp = cmp_for("FREQ");
            let (a, b, c) = (format!("{:.3}", x), format!("{:.3}", y), format!("{:.3}", z));
            prop_assert_eq!(cmp(&a, &a), Ok(Ordering::Equal));
            prop_assert_eq!(cmp(&a, &b).map(Ordering::reverse), cmp(&b, &a));
            if cmp(&a, &b) != Ok(Ordering::Greater) && cmp(&b, &c) != Ok(Ordering::Greater) {
                prop_assert_ne!(cmp(&a, &c), Ok(Ordering::Greater));
            }
        }

        #[test]
        fn prop_location_laws(
            d1 in 0u32..180, m1 in 0u32..60000, h1 in 0usize..4,
            d2 in 0u32..180, m2 in 0u32..60000, h2 in 0usize..4,
            d3 in 0u32..180, m3 in 0u32..60000, h3 in 0usize..4,
        ) {
            let fmt = |d: u32, m: u32, h: usize| {
                let dir = ['N', 'E', 'S', 'W'][h];
                let d = if dir == 'N' || dir == 'S' { d % 90 } else { d };
                format!("{}{:03} {:02}.{:03}", dir, d, m / 1000, m % 1000)
            };
            let (a, b, c) = (fmt(d1, m1, h1), fmt(d2, m2, h2), fmt(d3, m3, h3));
            let cmp = comparator_for(&FieldDef::new("WHERE", DataType::Location), &Locale::UND);
            prop_assert_eq!(cmp(&a, &a), Ok(Ordering::Equal));
            prop_assert_eq!(cmp(&a, &b).map(Ordering::reverse), cmp(&b, &a));
            if cmp(&a, &b) != Ok(Ordering::Greater) && cmp(&b, &c) != Ok(Ordering::Greater) {
                prop_assert_ne!(cmp(&a, &c), Ok(Ordering::Greater));
            }
        }
    }
}
