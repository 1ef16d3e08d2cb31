// A complete log: header, records, user-defined field declarations and
// file-level comments

use chrono::{DateTime, Utc};

use super::record::{app_field_parts, FieldOrder, Record};
use crate::error::{Error, Result};
use crate::spec::{self, FieldDef};

pub const PROGRAM_ID: &str = "adif-multitool";
pub const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");

/// `CREATED_TIMESTAMP` layout
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d %H%M%S";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Logfile {
    pub header: Record,
    pub records: Vec<Record>,
    pub userdefs: Vec<FieldDef>,
    /// Comments not attached to any record
    pub comments: Vec<String>,
    pub field_order: FieldOrder,
}

impl Logfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn userdef(&self, name: &str) -> Option<&FieldDef> {
        let name = name.trim();
        self.userdefs.iter().find(|d| d.name.eq_ignore_ascii_case(name))
    }

    /// Declare a user-defined field. Names may not shadow registry fields
    /// or repeat an earlier declaration.
    pub fn add_userdef(&mut self, def: FieldDef) -> Result<()> {
        if spec::registry().field(&def.name).is_some() {
            return Err(Error::schema(
                "adif",
                format!("user-defined field {} shadows a standard field", def.name),
            ));
        }
        if self.userdef(&def.name).is_some() {
            return Err(Error::schema(
                "adif",
                format!("user-defined field {} declared twice", def.name),
            ));
        }
        self.userdefs.push(def);
        Ok(())
    }

    /// Descriptor for a field name: registry field, then user-defined
    /// field. Application-defined and unknown fields have none.
    pub fn field_def(&self, name: &str) -> Option<&FieldDef> {
        spec::registry().field(name).or_else(|| self.userdef(name))
    }

    pub fn add_comment(&mut self, comment: impl Into<String>) {
        let c = comment.into();
        if !c.trim().is_empty() {
            self.comments.push(c.trim().to_string());
        }
    }

    /// Union of field names across all records, in preferred order
    pub fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for r in &self.records {
            for f in r.fields() {
                if !names.contains(&f.name) {
                    names.push(f.name.clone());
                }
            }
        }
        self.field_order.apply(names)
    }

    /// Append another log: its records follow ours, its app-defined header
    /// fields and declarations fold into ours, comments are kept.
    pub fn append(&mut self, other: Logfile) -> Result<()> {
        if self.header.is_empty() && self.records.is_empty() && self.userdefs.is_empty() {
            let order = std::mem::take(&mut self.field_order);
            let mut comments = std::mem::take(&mut self.comments);
            *self = other;
            comments.append(&mut self.comments);
            self.comments = comments;
            if !order.is_empty() {
                self.field_order = order;
            }
            return Ok(());
        }
        for f in other.header.fields() {
            if app_field_parts(&f.name).is_some() && !self.header.has(&f.name) {
                self.header.set(f.clone());
            }
        }
        for def in other.userdefs {
            match self.userdef(&def.name) {
                Some(existing) if *existing == def => {}
                Some(existing) => {
                    return Err(Error::schema(
                        "adif",
                        format!(
                            "user-defined field {} declared as {} and {}",
                            def.name, existing.data_type, def.data_type
                        ),
                    ))
                }
                None => self.userdefs.push(def),
            }
        }
        self.records.extend(other.records);
        self.comments.extend(other.comments);
        Ok(())
    }

    /// Set the header fields every written log carries
    pub fn synthesize_header(&mut self, now: DateTime<Utc>) {
        self.header.set_value("ADIF_VER", spec::ADIF_VERSION);
        self.header
            .set_value("CREATED_TIMESTAMP", now.format(TIMESTAMP_FORMAT).to_string());
        self.header.set_value("PROGRAMID", PROGRAM_ID);
        self.header.set_value("PROGRAMVERSION", PROGRAM_VERSION);
    }

    /// Comment emitted at the top of formats that support comments
    pub fn preamble(&self) -> String {
        format!(
            "Generated by {} version {}, {} records",
            PROGRAM_ID,
            PROGRAM_VERSION,
            self.records.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adif::record::Field;
    use crate::spec::DataType;
    use chrono::TimeZone;

    fn log_with(call: &str) -> Logfile {
        let mut l = Logfile::new();
        l.records.push(Record::from_pairs([("CALL", call)]));
        l
    }

    #[test]
    fn test_userdefs() {
        let mut l = Logfile::new();
        l.add_userdef(FieldDef::user_defined("SWEATER", DataType::String, vec![], None, None))
            .unwrap();
        assert!(l.field_def("sweater").unwrap().user_defined);
        assert!(l.field_def("CALL").is_some());
        assert!(l.field_def("APP_X_Y").is_none());
        let dup = FieldDef::user_defined("sweater", DataType::String, vec![], None, None);
        assert!(l.add_userdef(dup).is_err());
        let shadow = FieldDef::user_defined("CALL", DataType::String, vec![], None, None);
        assert!(l.add_userdef(shadow).is_err());
    }

    #[test]
    fn test_append_keeps_order_and_app_fields() {
        let mut a = log_with("W1AW");
        a.header.set_value("ADIF_VER", "3.1.4");
        let mut b = log_with("K1ABC");
        b.header.set(Field::new("APP_N1MM_CONTEST", "CQWW"));
        b.header.set_value("ADIF_VER", "2.2");
        b.add_comment("from b");
        a.append(b).unwrap();
        let calls: Vec<_> = a.records.iter().map(|r| r.value("CALL")).collect();
        assert_eq!(calls, vec!["W1AW", "K1ABC"]);
        assert_eq!(a.header.value("APP_N1MM_CONTEST"), "CQWW");
        assert_eq!(a.header.value("ADIF_VER"), "3.1.4");
        assert_eq!(a.comments, vec!["from b"]);
    }

    #[test]
    fn test_append_into_empty_takes_header() {
        let mut a = Logfile::new();
        a.field_order = FieldOrder::parse("CALL");
        let mut b = log_with("W1AW");
        b.header.set_value("PROGRAMID", "other");
        a.append(b).unwrap();
        assert_eq!(a.header.value("PROGRAMID"), "other");
        assert_eq!(a.field_order, FieldOrder::parse("CALL"));
    }

    #[test]
    fn test_append_conflicting_userdef() {
        let mut a = log_with("W1AW");
        a.add_userdef(FieldDef::user_defined("X", DataType::String, vec![], None, None)).unwrap();
        let mut b = log_with("K1ABC");
        b.add_userdef(FieldDef::user_defined("X", DataType::Number, vec![], None, None)).unwrap();
        assert!(a.append(b).is_err());
    }

    #[test]
    fn test_synthesize_header() {
        let mut l = log_with("W1AW");
        let now = Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 1).unwrap();
        l.synthesize_header(now);
        assert_eq!(l.header.value("ADIF_VER"), "3.1.4");
        assert_eq!(l.header.value("CREATED_TIMESTAMP"), "20240229 235901");
        assert_eq!(l.header.value("PROGRAMID"), "adif-multitool");
        assert!(l.preamble().ends_with("1 records"));
    }

    #[test]
    fn test_field_names_union() {
        let mut l = Logfile::new();
        l.records.push(Record::from_pairs([("CALL", "A"), ("MODE", "CW")]));
        l.records.push(Record::from_pairs([("BAND", "20m"), ("CALL", "B")]));
        assert_eq!(l.field_names(), vec!["CALL", "MODE", "BAND"]);
        l.field_order = FieldOrder::parse("BAND");
        assert_eq!(l.field_names(), vec!["BAND", "CALL", "MODE"]);
    }
}
