// JSON: {"HEADER": {...}, "RECORDS": [{...}, ...]}
//
// Values are strings unless typed output is on, in which case numeric fields
// become JSON numbers and Boolean fields become true/false. Reading accepts
// either form.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use serde_json::ser::{CompactFormatter, PrettyFormatter};
use serde_json::{Map, Number, Value};

use super::{LogReader, LogWriter};
use crate::adif::{is_valid_field_name, Field, Logfile, Record};
use crate::error::{Error, Result};
use crate::spec::DataType;

const FORMAT: &str = "json";

#[derive(Debug, Clone)]
pub struct JsonConfig {
    /// Spaces per nesting level; 0 writes everything on one line
    pub indent: usize,
    pub typed_output: bool,
}

impl Default for JsonConfig {
    fn default() -> Self {
        JsonConfig { indent: 1, typed_output: false }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Document {
    #[serde(rename = "HEADER", default)]
    header: Map<String, Value>,
    #[serde(rename = "RECORDS")]
    records: Vec<Map<String, Value>>,
}

#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    config: JsonConfig,
}

impl JsonCodec {
    pub fn new(config: JsonConfig) -> Self {
        JsonCodec { config }
    }

    fn json_value(&self, log: &Logfile, field: &Field) -> Value {
        if !self.config.typed_output || field.value.is_empty() {
            return Value::String(field.value.clone());
        }
        let data_type = field
            .data_type
            .or_else(|| log.field_def(&field.name).map(|d| d.data_type));
        match data_type {
            Some(DataType::Boolean) => match field.value.as_str() {
                "Y" | "y" => Value::Bool(true),
                "N" | "n" => Value::Bool(false),
                _ => Value::String(field.value.clone()),
            },
            Some(t) if t.is_numeric() => typed_number(&field.value)
                .unwrap_or_else(|| Value::String(field.value.clone())),
            _ => Value::String(field.value.clone()),
        }
    }

    fn object(&self, log: &Logfile, record: &Record) -> Map<String, Value> {
        record
            .ordered_fields(&log.field_order)
            .into_iter()
            .map(|f| (f.name.clone(), self.json_value(log, f)))
            .collect()
    }

    pub fn parse(&self, text: &str) -> Result<Logfile> {
        let doc: Document = serde_json::from_str(text)?;
        let mut log = Logfile::new();
        log.header = record_from(doc.header)?;
        for (i, obj) in doc.records.into_iter().enumerate() {
            let r = record_from(obj).map_err(|e| match e {
                Error::Schema { message, .. } => {
                    Error::schema(FORMAT, format!("record {}: {}", i + 1, message))
                }
                other => other,
            })?;
            log.records.push(r);
        }
        log::debug!("parsed {} JSON records", log.records.len());
        Ok(log)
    }

    pub fn format(&self, log: &Logfile) -> Result<Vec<u8>> {
        let doc = Document {
            header: self.object(log, &log.header),
            records: log.records.iter().map(|r| self.object(log, r)).collect(),
        };
        let mut out = Vec::new();
        if self.config.indent == 0 {
            let mut ser = serde_json::Serializer::with_formatter(&mut out, CompactFormatter);
            doc.serialize(&mut ser)?;
        } else {
            let indent = " ".repeat(self.config.indent);
            let formatter = PrettyFormatter::with_indent(indent.as_bytes());
            let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
            doc.serialize(&mut ser)?;
        }
        out.push(b'\n');
        Ok(out)
    }
}

/// A JSON number carrying exactly the digits of `s`; values that are not
/// JSON number literals (`.5`, `007`, padded text) stay strings
fn typed_number(s: &str) -> Option<Value> {
    if s.trim() != s {
        return None;
    }
    s.parse::<Number>().ok().map(Value::Number)
}

fn record_from(obj: Map<String, Value>) -> Result<Record> {
    let mut r = Record::new();
    for (name, v) in obj {
        if !is_valid_field_name(name.trim()) {
            return Err(Error::schema(FORMAT, format!("invalid field name {:?}", name)));
        }
        let value = match v {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => String::from(if b { "Y" } else { "N" }),
            Value::Array(_) | Value::Object(_) => {
                return Err(Error::schema(
                    FORMAT,
                    format!("{} must be a string, number or boolean", name),
                ))
            }
        };
        r.set(Field::new(&name, value));
    }
    Ok(r)
}

impl LogReader for JsonCodec {
    fn read(&self, input: &mut dyn Read) -> Result<Logfile> {
        let text = super::read_text(FORMAT, input)?;
        self.parse(&text)
    }
}

impl LogWriter for JsonCodec {
    fn write(&self, log: &Logfile, out: &mut dyn Write) -> Result<()> {
        out.write_all(&self.format(log)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::testutil::{read_str, write_string};

    fn sample() -> Logfile {
        let mut log = Logfile::new();
        log.header.set_value("ADIF_VER", "3.1.4");
        log.records.push(Record::from_pairs([
            ("CALL", "W1AW"),
            ("FREQ", "14.074"),
            ("TX_PWR", "100"),
            ("QSO_RANDOM", "Y"),
        ]));
        log
    }

    #[test]
    fn test_write_strings() {
        let codec = JsonCodec::new(JsonConfig { indent: 0, typed_output: false });
        assert_eq!(
            write_string(&codec, &sample()),
            r#"{"HEADER":{"ADIF_VER":"3.1.4"},"RECORDS":[{"CALL":"W1AW","FREQ":"14.074","TX_PWR":"100","QSO_RANDOM":"Y"}]}"#
                .to_string()
                + "\n"
        );
    }

    #[test]
    fn test_write_typed() {
        let codec = JsonCodec::new(JsonConfig { indent: 2, typed_output: true });
        let out = write_string(&codec, &sample());
        assert!(out.starts_with("{\n  \"HEADER\": {\n    \"ADIF_VER\": \"3.1.4\""));
        let v: Value = serde_json::from_str(&out).unwrap();
        let rec = &v["RECORDS"][0];
        assert_eq!(rec["CALL"], Value::String("W1AW".into()));
        assert_eq!(rec["FREQ"].as_f64(), Some(14.074));
        assert_eq!(rec["TX_PWR"].as_i64(), Some(100));
        assert_eq!(rec["QSO_RANDOM"], Value::Bool(true));
        // typed values read back as their string forms
        let back = codec.parse(&out).unwrap();
        assert_eq!(back.records, sample().records);
        assert_eq!(back.header.value("ADIF_VER"), "3.1.4");
    }

    #[test]
    fn test_typed_numbers_keep_precision() {
        let codec = JsonCodec::new(JsonConfig { indent: 0, typed_output: true });
        let mut log = Logfile::new();
        log.records.push(Record::from_pairs([
            ("FREQ", "14.07412345678901234"),
            ("STX", "98765432109876543210"),
            ("TX_PWR", ".5"),
            ("RX_PWR", "1.50"),
        ]));
        let out = write_string(&codec, &log);
        assert_eq!(
            out,
            r#"{"HEADER":{},"RECORDS":[{"FREQ":14.07412345678901234,"STX":98765432109876543210,"TX_PWR":".5","RX_PWR":1.50}]}"#
                .to_string()
                + "\n"
        );
        let back = codec.parse(&out).unwrap();
        assert_eq!(back.records, log.records);
    }

    #[test]
    fn test_read() {
        let text = r#"{"RECORDS": [{"call": "K1JT", "cqz": 5, "swl": false, "notes": null}, {}]}"#;
        let log = read_str(&JsonCodec::default(), text).unwrap();
        assert_eq!(log.records.len(), 2);
        let r = &log.records[0];
        assert_eq!(r.value("CALL"), "K1JT");
        assert_eq!(r.value("CQZ"), "5");
        assert_eq!(r.value("SWL"), "N");
        assert!(!r.has("NOTES"));
        assert!(log.header.is_empty());
    }

    #[test]
    fn test_read_errors() {
        assert!(matches!(
            read_str(&JsonCodec::default(), r#"{"HEADER": {}}"#),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            read_str(&JsonCodec::default(), r#"{"RECORDS": [{"CALL": ["A", "B"]}]}"#),
            Err(Error::Schema { .. })
        ));
        assert!(read_str(&JsonCodec::default(), r#"{"RECORDS": [{"BAD NAME": "x"}]}"#).is_err());
        assert!(read_str(&JsonCodec::default(), "[1, 2]").is_err());
    }
}
