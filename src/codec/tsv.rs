// TSV: tab-separated values with a header row
//
// Values may not contain tabs or line breaks unless escaping is enabled, in
// which case `\t`, `\r`, `\n` and `\\` stand for them.

use std::io::{Read, Write};

use super::csv::{header_names, row_record};
use super::{LogReader, LogWriter};
use crate::adif::{FieldOrder, Logfile};
use crate::error::{Error, Position, Result};

const FORMAT: &str = "tsv";

#[derive(Debug, Clone, Default)]
pub struct TsvConfig {
    /// End lines with CRLF instead of LF
    pub crlf: bool,
    /// Backslash-escape tabs, line breaks and backslashes
    pub escape_special: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TsvCodec {
    config: TsvConfig,
}

impl TsvCodec {
    pub fn new(config: TsvConfig) -> Self {
        TsvCodec { config }
    }

    fn unescape(&self, line: usize, cell: &str) -> Result<String> {
        if !self.config.escape_special || !cell.contains('\\') {
            return Ok(cell.to_string());
        }
        let mut out = String::with_capacity(cell.len());
        let mut chars = cell.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some('n') => out.push('\n'),
                Some('\\') => out.push('\\'),
                other => {
                    return Err(Error::parse(
                        FORMAT,
                        Position::Line(line),
                        format!("unknown escape \\{}", other.map(String::from).unwrap_or_default()),
                    ))
                }
            }
        }
        Ok(out)
    }

    fn escape(&self, name: &str, value: &str) -> Result<String> {
        if self.config.escape_special {
            return Ok(value
                .replace('\\', "\\\\")
                .replace('\t', "\\t")
                .replace('\r', "\\r")
                .replace('\n', "\\n"));
        }
        if value.contains(|c: char| matches!(c, '\t' | '\r' | '\n')) {
            return Err(Error::schema(
                FORMAT,
                format!("{} contains a tab or line break; enable escaping to write it", name),
            ));
        }
        Ok(value.to_string())
    }

    pub fn parse(&self, text: &str) -> Result<Logfile> {
        let mut lines = text
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .enumerate()
            .map(|(i, l)| (i + 1, l))
            .filter(|(_, l)| !l.is_empty());
        let mut log = Logfile::new();
        let Some((_, header)) = lines.next() else {
            return Ok(log);
        };
        let names = header_names(FORMAT, header.split('\t'))?;
        for (n, line) in lines {
            let cells = line
                .split('\t')
                .map(|c| self.unescape(n, c))
                .collect::<Result<Vec<String>>>()?;
            if let Some(record) = row_record(FORMAT, n, &names, cells.iter().map(String::as_str))? {
                log.records.push(record);
            }
        }
        log.field_order = FieldOrder::new(&names);
        log::debug!("parsed {} TSV records", log.records.len());
        Ok(log)
    }

    pub fn format(&self, log: &Logfile) -> Result<String> {
        let names = log.field_names();
        let eol = if self.config.crlf { "\r\n" } else { "\n" };
        let mut out = String::new();
        if names.is_empty() {
            return Ok(out);
        }
        out.push_str(&names.join("\t"));
        out.push_str(eol);
        for r in &log.records {
            let cells = names
                .iter()
                .map(|n| self.escape(n, r.value(n)))
                .collect::<Result<Vec<String>>>()?;
            out.push_str(&cells.join("\t"));
            out.push_str(eol);
        }
        Ok(out)
    }
}

impl LogReader for TsvCodec {
    fn read(&self, input: &mut dyn Read) -> Result<Logfile> {
        let text = super::read_text(FORMAT, input)?;
        self.parse(&text)
    }
}

impl LogWriter for TsvCodec {
    fn write(&self, log: &Logfile, out: &mut dyn Write) -> Result<()> {
        out.write_all(self.format(log)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adif::Record;

    fn sample() -> Logfile {
        let mut log = Logfile::new();
        log.records.push(Record::from_pairs([("CALL", "W1AW"), ("NOTES", "line one\nline\ttwo \\o/")]));
        log.records.push(Record::from_pairs([("CALL", "K1JT"), ("BAND", "20m")]));
        log
    }

    #[test]
    fn test_special_characters_need_escaping() {
        assert!(TsvCodec::default().format(&sample()).is_err());
        let codec = TsvCodec::new(TsvConfig { crlf: true, escape_special: true });
        let out = codec.format(&sample()).unwrap();
        assert_eq!(
            out,
            "CALL\tNOTES\tBAND\r\nW1AW\tline one\\nline\\ttwo \\\\o/\t\r\nK1JT\t\t20m\r\n"
        );
        let back = codec.parse(&out).unwrap();
        assert_eq!(back.records, sample().records);
    }

    #[test]
    fn test_read_plain() {
        let log = TsvCodec::default().parse("call\tband\nW1AW\t20m\n\n\t\nK1JT\n").unwrap();
        assert_eq!(log.records.len(), 2);
        assert_eq!(log.records[0].value("BAND"), "20m");
        // backslashes are literal without escaping
        let log = TsvCodec::default().parse("NOTES\nC:\\log\n").unwrap();
        assert_eq!(log.records[0].value("NOTES"), "C:\\log");
    }

    #[test]
    fn test_read_errors() {
        let escaping = TsvCodec::new(TsvConfig { escape_special: true, ..TsvConfig::default() });
        assert!(escaping.parse("NOTES\nbad \\q escape\n").is_err());
        match TsvCodec::default().parse("CALL\nW1AW\textra\n") {
            Err(Error::Parse { position, .. }) => assert_eq!(position, Position::Line(2)),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
