// CSV: one header row of field names, one row per record
//
// Header fields, declarations and comments have no place in CSV and are not
// written.

use std::io::{Read, Write};

use ::csv::{ReaderBuilder, WriterBuilder};

use super::{LogReader, LogWriter};
use crate::adif::{is_valid_field_name, Field, Logfile, Record};
use crate::error::{Error, Position, Result};

const FORMAT: &str = "csv";

#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Field delimiter byte
    pub comma: u8,
}

impl Default for CsvConfig {
    fn default() -> Self {
        CsvConfig { comma: b',' }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CsvCodec {
    config: CsvConfig,
}

impl CsvCodec {
    pub fn new(config: CsvConfig) -> Self {
        CsvCodec { config }
    }
}

/// Upper-cased header names, rejecting invalid and repeated names
pub(crate) fn header_names<'a>(
    format: &'static str,
    cells: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<String>> {
    let mut names: Vec<String> = Vec::new();
    for cell in cells {
        let name = cell.trim().to_uppercase();
        if !is_valid_field_name(&name) {
            return Err(Error::schema(format, format!("invalid field name {:?} in header", cell)));
        }
        if names.contains(&name) {
            return Err(Error::schema(format, format!("field {} appears twice in header", name)));
        }
        names.push(name);
    }
    Ok(names)
}

/// A record from one row; empty cells are left out and a row with no
/// values yields no record
pub(crate) fn row_record<'a>(
    format: &'static str,
    line: usize,
    names: &[String],
    cells: impl IntoIterator<Item = &'a str>,
) -> Result<Option<Record>> {
    let mut r = Record::new();
    for (i, cell) in cells.into_iter().enumerate() {
        let name = names.get(i).ok_or_else(|| {
            Error::parse(
                format,
                Position::Line(line),
                format!("row has more than the {} columns of the header", names.len()),
            )
        })?;
        if !cell.is_empty() {
            r.set(Field::new(name, cell));
        }
    }
    Ok(Some(r).filter(|r| !r.is_empty()))
}

impl LogReader for CsvCodec {
    fn read(&self, input: &mut dyn Read) -> Result<Logfile> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.config.comma)
            .from_reader(input);
        let names = header_names(FORMAT, reader.headers()?.iter())?;
        let mut log = Logfile::new();
        for row in reader.records() {
            let row = row?;
            let line = row.position().map_or(0, |p| p.line() as usize);
            match row_record(FORMAT, line, &names, row.iter())? {
                Some(record) => log.records.push(record),
                None => log::debug!("skipping blank row at line {}", line),
            }
        }
        log.field_order = crate::adif::FieldOrder::new(&names);
        log::debug!("parsed {} CSV records with {} columns", log.records.len(), names.len());
        Ok(log)
    }
}

impl LogWriter for CsvCodec {
    fn write(&self, log: &Logfile, out: &mut dyn Write) -> Result<()> {
        let names = log.field_names();
        if names.is_empty() {
            return Ok(());
        }
        let mut w = WriterBuilder::new().delimiter(self.config.comma).from_writer(out);
        w.write_record(&names)?;
        for r in &log.records {
            w.write_record(names.iter().map(|n| r.value(n)))?;
        }
        w.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::testutil::{read_str, write_string};

    #[test]
    fn test_read() {
        let text = "call,Band,NOTES\nW1AW,20m,\"hello, world\"\nK1JT,40m\n";
        let log = read_str(&CsvCodec::default(), text).unwrap();
        assert_eq!(log.records.len(), 2);
        assert_eq!(log.records[0].value("NOTES"), "hello, world");
        assert!(!log.records[1].has("NOTES"));
        assert_eq!(log.records[1].value("BAND"), "40m");
    }

    #[test]
    fn test_blank_rows_skipped() {
        let log = read_str(&CsvCodec::default(), "CALL,BAND\nW1AW,20m\n,\n\nK1JT,\n").unwrap();
        assert_eq!(log.records.len(), 2);
        assert_eq!(log.records[1].value("CALL"), "K1JT");
    }

    #[test]
    fn test_read_errors() {
        assert!(read_str(&CsvCodec::default(), "CALL,CALL\nA,B\n").is_err());
        assert!(read_str(&CsvCodec::default(), "CALL,BAD NAME\nA,B\n").is_err());
        match read_str(&CsvCodec::default(), "CALL\nW1AW\nK1JT,extra\n") {
            Err(Error::Parse { position, .. }) => assert_eq!(position, Position::Line(3)),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_union_of_fields() {
        let mut log = Logfile::new();
        log.records.push(Record::from_pairs([("CALL", "W1AW"), ("NOTES", "a \"quoted\" note")]));
        log.records.push(Record::from_pairs([("CALL", "K1JT"), ("BAND", "20m")]));
        let out = write_string(&CsvCodec::default(), &log);
        assert_eq!(out, "CALL,NOTES,BAND\nW1AW,\"a \"\"quoted\"\" note\",\nK1JT,,20m\n");
        let semi = CsvCodec::new(CsvConfig { comma: b';' });
        let back = read_str(&semi, &write_string(&semi, &log)).unwrap();
        assert_eq!(back.records, log.records);
    }
}
