//! Record filtering
//!
//! A condition is `FIELD OP VALUE` with OP one of `=`, `!=`, `<`, `<=`, `>`,
//! `>=`. Values are compared with the field's comparator, so `BAND>=40m`
//! orders by frequency and `CALL=w1aw` ignores case. `=` and `!=` accept
//! `|`-separated alternatives. An empty value matches an empty field.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use icu_locid::Locale;

use super::field_name;
use crate::adif::{Logfile, Record};
use crate::compare::{comparator_for, Comparator};
use crate::error::{Error, Result};
use crate::spec::{DataType, FieldDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl Operator {
    /// Longest operators first so `<=` is not read as `<`
    const SYMBOLS: &'static [(&'static str, Operator)] = &[
        ("!=", Operator::NotEqual),
        ("<=", Operator::LessOrEqual),
        (">=", Operator::GreaterOrEqual),
        ("=", Operator::Equal),
        ("<", Operator::Less),
        (">", Operator::Greater),
    ];

    pub fn symbol(&self) -> &'static str {
        Self::SYMBOLS
            .iter()
            .find(|(_, op)| op == self)
            .map(|(s, _)| *s)
            .unwrap_or("?")
    }

    fn accepts(&self, ord: Ordering) -> bool {
        match self {
            Operator::Equal => ord == Ordering::Equal,
            Operator::NotEqual => ord != Ordering::Equal,
            Operator::Less => ord == Ordering::Less,
            Operator::LessOrEqual => ord != Ordering::Greater,
            Operator::Greater => ord == Ordering::Greater,
            Operator::GreaterOrEqual => ord != Ordering::Less,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub field: String,
    pub op: Operator,
    pub values: Vec<String>,
    /// Keep records that do not match
    pub negated: bool,
}

impl Condition {
    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }
}

impl FromStr for Condition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let at = s
            .find(|c: char| matches!(c, '=' | '!' | '<' | '>'))
            .ok_or_else(|| Error::Usage(format!("condition {:?} has no comparison operator", s)))?;
        let field = field_name(&s[..at])?;
        let rest = &s[at..];
        let (symbol, op) = Operator::SYMBOLS
            .iter()
            .find(|(sym, _)| rest.starts_with(*sym))
            .ok_or_else(|| Error::Usage(format!("condition {:?} has no comparison operator", s)))?;
        let value = &rest[symbol.len()..];
        let values: Vec<String> = match op {
            Operator::Equal | Operator::NotEqual => value.split('|').map(String::from).collect(),
            _ if value.contains('|') => {
                return Err(Error::Usage(format!(
                    "alternatives with | only work with = and !=, not {}",
                    symbol
                )))
            }
            _ => vec![value.to_string()],
        };
        Ok(Condition { field, op: *op, values, negated: false })
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("not ")?;
        }
        write!(f, "{}{}{}", self.field, self.op.symbol(), self.values.join("|"))
    }
}

struct Matcher<'a> {
    condition: &'a Condition,
    compare: Comparator,
}

impl Matcher<'_> {
    fn matches(&self, record: &Record) -> Result<bool> {
        let actual = record.value(&self.condition.field);
        let mut hit = false;
        for v in &self.condition.values {
            let ord = (self.compare)(actual, v)?;
            if self.condition.op == Operator::NotEqual {
                // != holds only when no alternative is equal
                if ord == Ordering::Equal {
                    hit = false;
                    break;
                }
                hit = true;
            } else if self.condition.op.accepts(ord) {
                hit = true;
                break;
            }
        }
        Ok(hit != self.condition.negated)
    }
}

/// Keep the records that satisfy every condition. Fails on a value the
/// field's comparator cannot order.
pub fn find(log: &mut Logfile, conditions: &[Condition], locale: &Locale) -> Result<()> {
    let matchers: Vec<Matcher> = conditions
        .iter()
        .map(|c| {
            let def = log
                .field_def(&c.field)
                .cloned()
                .unwrap_or_else(|| FieldDef::new(&c.field, DataType::String));
            Matcher { condition: c, compare: comparator_for(&def, locale) }
        })
        .collect();
    let mut keep = Vec::with_capacity(log.records.len());
    for r in &log.records {
        let mut all = true;
        for m in &matchers {
            if !m.matches(r)? {
                all = false;
                break;
            }
        }
        keep.push(all);
    }
    let before = log.records.len();
    let mut keep = keep.into_iter();
    log.records.retain(|_| keep.next().unwrap_or(false));
    log::info!("kept {} of {} records", log.records.len(), before);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log() -> Logfile {
        let mut l = Logfile::new();
        for (call, band, freq, date) in [
            ("W1AW", "20m", "14.074", "20230105"),
            ("K1JT", "40m", "7.074", "20230210"),
            ("g4abc", "2m", "144.174", "20221231"),
            ("N0CALL", "", "", "20230301"),
        ] {
            l.records.push(Record::from_pairs([("CALL", call), ("BAND", band), ("FREQ", freq), ("QSO_DATE", date)]));
        }
        l
    }

    fn calls(conds: &[&str]) -> Vec<String> {
        let conds: Vec<Condition> = conds.iter().map(|c| c.parse().unwrap()).collect();
        let mut l = log();
        find(&mut l, &conds, &Locale::UND).unwrap();
        l.records.iter().map(|r| r.value("CALL").to_string()).collect()
    }

    #[test]
    fn test_parse_condition() {
        let c: Condition = "band<=40M".parse().unwrap();
        assert_eq!((c.field.as_str(), c.op, c.values.as_slice()), ("BAND", Operator::LessOrEqual, &["40M".to_string()][..]));
        let c: Condition = "call!=W1AW|K1JT".parse().unwrap();
        assert_eq!(c.op, Operator::NotEqual);
        assert_eq!(c.values.len(), 2);
        assert_eq!(c.to_string(), "CALL!=W1AW|K1JT");
        let c: Condition = "NOTES=".parse().unwrap();
        assert_eq!(c.values, vec![String::new()]);
        assert!("CALL".parse::<Condition>().is_err());
        assert!("BAND>20m|40m".parse::<Condition>().is_err());
        assert!("=W1AW".parse::<Condition>().is_err());
    }

    #[test]
    fn test_find() {
        assert_eq!(calls(&["CALL=G4ABC"]), vec!["g4abc"]);
        assert_eq!(calls(&["CALL=w1aw|k1jt"]), vec!["W1AW", "K1JT"]);
        assert_eq!(calls(&["CALL!=w1aw|k1jt"]), vec!["g4abc", "N0CALL"]);
        assert_eq!(calls(&["BAND="]), vec!["N0CALL"]);
        // bands order by frequency, not text
        assert_eq!(calls(&["BAND>=20m"]), vec!["W1AW", "g4abc"]);
        assert_eq!(calls(&["FREQ<10"]), vec!["K1JT", "N0CALL"]);
        assert_eq!(calls(&["QSO_DATE>=20230101", "QSO_DATE<20230301"]), vec!["W1AW", "K1JT"]);
    }

    #[test]
    fn test_negated_and_errors() {
        let cond = "BAND=20m".parse::<Condition>().unwrap().negate();
        let mut l = log();
        find(&mut l, &[cond], &Locale::UND).unwrap();
        assert_eq!(l.records.len(), 3);
        let bad: Condition = "FREQ>ten".parse().unwrap();
        assert!(matches!(find(&mut log(), &[bad], &Locale::UND), Err(Error::Compare(_))));
    }
}
