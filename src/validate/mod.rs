// Field validation
//
// Every data type has a validator returning one of three outcomes. Cross
// field checks (zones within an entity, paired coordinates, times in the
// future) read other fields of the same record through the context.

pub mod datetime;
pub mod enums;
pub mod geo;
pub mod lists;
pub mod scalar;

use std::fmt;

use chrono::{DateTime, Utc};

use crate::adif::{app_field_parts, Logfile, Record};
use crate::spec::{DataType, FieldDef};

/// Outcome of validating one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Error(String),
    Warning(String),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Validation::Error(_))
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Validation::Warning(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Validation::Valid => None,
            Validation::Error(m) | Validation::Warning(m) => Some(m),
        }
    }

    /// Run `next` only when this outcome is valid
    pub fn and_then(self, next: impl FnOnce() -> Validation) -> Validation {
        match self {
            Validation::Valid => next(),
            other => other,
        }
    }

    /// Turn an error into a warning
    pub fn downgrade(self) -> Validation {
        match self {
            Validation::Error(m) => Validation::Warning(m),
            other => other,
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validation::Valid => f.write_str("valid"),
            Validation::Error(m) => write!(f, "error: {}", m),
            Validation::Warning(m) => write!(f, "warning: {}", m),
        }
    }
}

pub(crate) fn error(msg: impl Into<String>) -> Validation {
    Validation::Error(msg.into())
}

pub(crate) fn warning(msg: impl Into<String>) -> Validation {
    Validation::Warning(msg.into())
}

/// What a validator may know beyond the value itself
#[derive(Debug, Clone, Default)]
pub struct ValidationContext<'a> {
    /// Values later than this are suspicious; `None` disables the check
    pub now: Option<DateTime<Utc>>,
    /// Report values missing from an enumeration as warnings
    pub unknown_enum_value_warning: bool,
    /// Record the value belongs to, for cross-field checks
    pub record: Option<&'a Record>,
}

impl<'a> ValidationContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    pub fn with_record(mut self, record: &'a Record) -> Self {
        self.record = Some(record);
        self
    }

    /// Value of another field in the same record, `""` when absent
    pub fn field_value(&self, name: &str) -> &'a str {
        self.record.map(|r| r.value(name)).unwrap_or("")
    }
}

/// Validates a non-empty value of one data type
pub type Validator = fn(&str, &FieldDef, &ValidationContext) -> Validation;

/// The validator for a data type
pub fn validator_for(data_type: DataType) -> Validator {
    match data_type {
        DataType::Boolean => scalar::validate_boolean,
        DataType::Character => scalar::validate_character,
        DataType::IntlCharacter => scalar::validate_intl_character,
        DataType::String => scalar::validate_string,
        DataType::MultilineString => scalar::validate_multiline_string,
        DataType::IntlString => scalar::validate_intl_string,
        DataType::IntlMultilineString => scalar::validate_intl_multiline_string,
        DataType::Digit => scalar::validate_digit,
        DataType::Number => scalar::validate_number,
        DataType::Integer | DataType::PositiveInteger => scalar::validate_integer,
        DataType::Date => scalar::validate_date,
        DataType::Time => scalar::validate_time,
        DataType::Location => geo::validate_location,
        DataType::GridSquare => geo::validate_gridsquare,
        DataType::GridSquareExt => geo::validate_gridsquare_ext,
        DataType::GridSquareList => geo::validate_gridsquare_list,
        DataType::IOTARefNo => lists::validate_iota,
        DataType::SOTARef => lists::validate_sota,
        DataType::WWFFRef => lists::validate_wwff,
        DataType::POTARef => lists::validate_pota,
        DataType::POTARefList => lists::validate_pota_list,
        DataType::AwardList => lists::validate_award_list,
        DataType::CreditList => lists::validate_credit_list,
        DataType::SponsoredAwardList => lists::validate_sponsored_award_list,
        DataType::SecondarySubdivisionList => lists::validate_subdivision_list,
        DataType::Enumeration => enums::validate_enumeration,
    }
}

/// Validate one value of a field, including enumeration membership,
/// deprecation, and cross-field checks. Empty values are always valid.
pub fn validate(def: &FieldDef, value: &str, ctx: &ValidationContext) -> Validation {
    if value.is_empty() {
        return Validation::Valid;
    }
    let typed = validator_for(def.data_type)(value, def, ctx);
    let result = typed.and_then(|| {
        if def.data_type != DataType::Enumeration && def.enumeration.is_some() {
            // string fields with a suggested value list
            let lenient = ValidationContext { unknown_enum_value_warning: true, ..ctx.clone() };
            enums::validate_enumeration(value, def, &lenient)
        } else {
            Validation::Valid
        }
    });
    let result = result.and_then(|| enums::validate_cross_field(value, def, ctx));
    if result.is_valid() && def.import_only {
        return warning(format!("{} is deprecated and should not be written", def.name));
    }
    result
}

/// One validation finding within a log
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    /// Index of the record, `None` for the header
    pub record: Option<usize>,
    pub field: String,
    pub value: String,
    pub outcome: Validation,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.record {
            Some(i) => write!(f, "record {}: {}", i + 1, self.outcome),
            None => write!(f, "header: {}", self.outcome),
        }
    }
}

/// Validate every field of a record; only non-valid outcomes are returned
pub fn validate_record(log: &Logfile, record: &Record, ctx: &ValidationContext) -> Vec<(String, Validation)> {
    let ctx = ValidationContext { record: Some(record), ..ctx.clone() };
    let mut out = Vec::new();
    for f in record.fields() {
        let outcome = match log.field_def(&f.name) {
            Some(def) => validate(def, &f.value, &ctx),
            None if app_field_parts(&f.name).is_some() => Validation::Valid,
            None => error(format!("{} is not a known field and is not declared as USERDEF", f.name)),
        };
        if !outcome.is_valid() {
            out.push((f.name.clone(), outcome));
        }
    }
    out
}

/// Validate a whole log; findings are in record order
pub fn validate_log(log: &Logfile, ctx: &ValidationContext, required: &[String]) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (i, record) in log.records.iter().enumerate() {
        for name in required {
            if record.value(name).is_empty() {
                findings.push(Finding {
                    record: Some(i),
                    field: name.to_uppercase(),
                    value: String::new(),
                    outcome: error(format!("{} is required", name.to_uppercase())),
                });
            }
        }
        for (field, outcome) in validate_record(log, record, ctx) {
            findings.push(Finding {
                record: Some(i),
                value: record.value(&field).to_string(),
                field,
                outcome,
            });
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::registry;

    fn def(name: &str) -> &'static FieldDef {
        registry().field(name).unwrap()
    }

    #[test]
    fn test_empty_always_valid() {
        let ctx = ValidationContext::new();
        for f in registry().fields() {
            assert_eq!(validate(f, "", &ctx), Validation::Valid, "{}", f.name);
        }
    }

    #[test]
    fn test_import_only_field_warns() {
        let ctx = ValidationContext::new();
        assert!(validate(def("VE_PROV"), "ON", &ctx).is_warning());
        assert!(validate(def("VE_PROV"), "ON\n", &ctx).is_error());
    }

    #[test]
    fn test_string_with_enum_downgrades() {
        let ctx = ValidationContext::new();
        assert!(validate(def("CONTEST_ID"), "CQ-WW-CW", &ctx).is_valid());
        assert!(validate(def("CONTEST_ID"), "MY-LOCAL-SPRINT", &ctx).is_warning());
        assert!(validate(def("MODE"), "SPARKGAP", &ctx).is_error());
    }

    #[test]
    fn test_cross_field_zone() {
        let record = Record::from_pairs([("DXCC", "Trinidad & Tobago")]);
        let ctx = ValidationContext::new().with_record(&record);
        assert_eq!(validate(def("CQZ"), "9", &ctx), Validation::Valid);
        assert!(validate(def("CQZ"), "29", &ctx).is_error());
    }

    #[test]
    fn test_validate_log_findings() {
        let mut log = Logfile::new();
        log.records.push(Record::from_pairs([("CALL", "W1AW"), ("QSO_DATE", "19291231")]));
        log.records.push(Record::from_pairs([("CALL", "K1ABC"), ("SHOE_SIZE", "11")]));
        log.records.push(Record::from_pairs([("APP_N1MM_ID", "x"), ("BAND", "20m")]));
        let findings = validate_log(&log, &ValidationContext::new(), &["CALL".to_string()]);
        let summary: Vec<_> = findings.iter().map(|f| (f.record, f.field.as_str())).collect();
        assert_eq!(summary, vec![(Some(0), "QSO_DATE"), (Some(1), "SHOE_SIZE"), (Some(2), "CALL")]);
        assert!(findings.iter().all(|f| f.outcome.is_error()));
        assert!(findings[0].to_string().starts_with("record 1: error:"));
    }

    #[test]
    fn test_validation_helpers() {
        assert_eq!(error("x").downgrade(), warning("x"));
        assert_eq!(Validation::Valid.and_then(|| error("y")), error("y"));
        assert_eq!(warning("w").and_then(|| error("y")), warning("w"));
        assert_eq!(error("bad").message(), Some("bad"));
    }
}
