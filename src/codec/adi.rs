// ADI: the tag-length-value format
//
// A field is `<NAME:LEN[:T]>value` where LEN counts bytes, not characters.
// The header, present when the file does not start with `<`, ends with
// `<EOH>`; each record ends with `<EOR>`. Anything outside a tag is comment
// text: before the first record it belongs to the file, between records to
// the record that follows, and after the last record to the file again.

use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use super::{LogReader, LogWriter};
use crate::adif::{userdef, Field, Logfile, Record, PROGRAM_ID};
use crate::error::{Error, Position, Result};
use crate::spec::DataType;

const FORMAT: &str = "adi";

/// Whitespace written between fields and after records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Space,
    Newline,
    TwoNewlines,
    Tab,
}

impl Separator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Space => " ",
            Separator::Newline => "\n",
            Separator::TwoNewlines => "\n\n",
            Separator::Tab => "\t",
        }
    }
}

impl FromStr for Separator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "space" => Ok(Separator::Space),
            "newline" => Ok(Separator::Newline),
            "2newline" => Ok(Separator::TwoNewlines),
            "tab" => Ok(Separator::Tab),
            _ => Err(Error::Usage(format!(
                "unknown separator {:?}, expected space, newline, 2newline or tab",
                s
            ))),
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Separator::Space => "space",
            Separator::Newline => "newline",
            Separator::TwoNewlines => "2newline",
            Separator::Tab => "tab",
        })
    }
}

#[derive(Debug, Clone)]
pub struct AdiConfig {
    pub field_separator: Separator,
    pub record_separator: Separator,
    /// Write tag names in lower case
    pub lower_case: bool,
    /// Refuse any byte outside 7-bit ASCII, reading and writing
    pub ascii_only: bool,
    /// Treat `<...>` that is not a field tag as comment text
    pub allow_unknown_tag: bool,
}

impl Default for AdiConfig {
    fn default() -> Self {
        AdiConfig {
            field_separator: Separator::Space,
            record_separator: Separator::Newline,
            lower_case: false,
            ascii_only: false,
            allow_unknown_tag: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AdiCodec {
    config: AdiConfig,
}

impl AdiCodec {
    pub fn new(config: AdiConfig) -> Self {
        AdiCodec { config }
    }
}

/// A parsed tag and the byte offset just past it
enum Tag<'a> {
    EndOfHeader,
    EndOfRecord,
    Field {
        name: &'a str,
        value: &'a str,
        data_type: Option<DataType>,
    },
    /// Not a field tag; kept as comment text
    Unknown(&'a str),
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
    config: &'a AdiConfig,
}

impl<'a> Parser<'a> {
    fn err(&self, at: usize, msg: impl Into<String>) -> Error {
        Error::parse(FORMAT, Position::Byte(at), msg)
    }

    /// Text up to the next `<`, advancing past it
    fn comment(&mut self) -> &'a str {
        let text = self.text;
        let rest = &text[self.pos..];
        let len = rest.find('<').unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Parse the tag starting at `self.pos`, which must be a `<`
    fn tag(&mut self) -> Result<Tag<'a>> {
        let text = self.text;
        let start = self.pos;
        let rest = &text[start + 1..];
        let close = rest
            .find('>')
            .ok_or_else(|| self.err(start, "tag is missing its closing '>'"))?;
        let spec = &rest[..close];
        let after = start + 1 + close + 1;
        let mut parts = spec.split(':');
        let name = parts.next().unwrap_or_default().trim();
        let len = parts.next();
        let indicator = parts.next();
        if parts.next().is_some() || !crate::adif::is_valid_field_name(name) {
            return self.unknown(start, after, spec);
        }
        let Some(len) = len else {
            self.pos = after;
            return match name.to_ascii_uppercase().as_str() {
                "EOH" => Ok(Tag::EndOfHeader),
                "EOR" => Ok(Tag::EndOfRecord),
                _ => self.unknown(start, after, spec),
            };
        };
        let len: usize = match len.trim().parse() {
            Ok(n) => n,
            Err(_) => return self.unknown(start, after, spec),
        };
        let data_type = match indicator.map(str::trim).filter(|s| !s.is_empty()) {
            None => None,
            Some(ind) => {
                let mut chars = ind.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(DataType::from_indicator(c).ok_or_else(|| {
                        self.err(start, format!("unknown type indicator {:?} on {}", ind, name))
                    })?),
                    _ => return Err(self.err(start, format!("bad type indicator {:?} on {}", ind, name))),
                }
            }
        };
        let end = after + len;
        if end > text.len() {
            return Err(Error::schema(
                FORMAT,
                format!(
                    "{} at byte {} declares {} bytes but only {} remain",
                    name,
                    start,
                    len,
                    text.len() - after
                ),
            ));
        }
        let value = text.get(after..end).ok_or_else(|| {
            self.err(after, format!("{} length {} ends inside a multi-byte character", name, len))
        })?;
        self.pos = end;
        Ok(Tag::Field { name, value, data_type })
    }

    fn unknown(&mut self, start: usize, after: usize, spec: &str) -> Result<Tag<'a>> {
        if self.config.allow_unknown_tag {
            log::debug!("treating <{}> at byte {} as comment text", spec, start);
            self.pos = after;
            let text = self.text;
            Ok(Tag::Unknown(&text[start..after]))
        } else {
            Err(self.err(start, format!("malformed tag <{}>", spec)))
        }
    }
}

fn check_ascii(text: &str) -> Result<()> {
    match text.bytes().position(|b| b >= 0x80) {
        Some(at) => Err(Error::parse(FORMAT, Position::Byte(at), "non-ASCII byte")),
        None => Ok(()),
    }
}

impl AdiCodec {
    pub fn parse(&self, text: &str) -> Result<Logfile> {
        if self.config.ascii_only {
            check_ascii(text)?;
        }
        let mut log = Logfile::new();
        let mut p = Parser { text, pos: 0, config: &self.config };

        if !text.is_empty() && !text.starts_with('<') {
            let mut comment = String::new();
            loop {
                comment.push_str(p.comment());
                if p.at_end() {
                    return Err(p.err(p.pos, "end of input before <EOH>"));
                }
                match p.tag()? {
                    Tag::EndOfHeader => break,
                    Tag::EndOfRecord => return Err(p.err(p.pos, "<EOR> inside the header")),
                    Tag::Unknown(t) => comment.push_str(t),
                    Tag::Field { name, value, data_type } => {
                        self.header_field(&mut log, name, value, data_type)?
                    }
                }
            }
            log.add_comment(comment);
        }

        let mut record = Record::new();
        let mut pending = String::new();
        loop {
            let text = p.comment();
            if record.is_empty() {
                pending.push_str(text);
            } else {
                record.add_comment(text);
            }
            if p.at_end() {
                break;
            }
            let tag_at = p.pos;
            match p.tag()? {
                Tag::EndOfHeader => return Err(p.err(tag_at, "unexpected <EOH>")),
                Tag::Unknown(t) if record.is_empty() => pending.push_str(t),
                Tag::Unknown(t) => record.add_comment(t),
                Tag::EndOfRecord => {
                    if !record.is_empty() {
                        log.records.push(std::mem::take(&mut record));
                    } else {
                        log::warn!("skipping empty record at byte {}", tag_at);
                    }
                }
                Tag::Field { name, value, data_type } => {
                    if record.is_empty() {
                        let comment = std::mem::take(&mut pending);
                        if log.records.is_empty() {
                            log.add_comment(comment);
                        } else {
                            record.add_comment(comment);
                        }
                    }
                    let field = match data_type {
                        Some(t) => Field::typed(name, value, t),
                        None => Field::new(name, value),
                    };
                    if let Some(old) = record.set(field) {
                        log::warn!("{} repeated in record {}, keeping the last value", old.name, log.records.len() + 1);
                    }
                }
            }
        }
        if !record.is_empty() {
            return Err(p.err(text.len(), "end of input inside a record, missing <EOR>"));
        }
        log.add_comment(pending);
        log::debug!("parsed {} ADI records", log.records.len());
        Ok(log)
    }

    fn header_field(
        &self,
        log: &mut Logfile,
        name: &str,
        value: &str,
        data_type: Option<DataType>,
    ) -> Result<()> {
        let upper = name.to_ascii_uppercase();
        if upper.starts_with("USERDEF") && upper[7..].bytes().all(|b| b.is_ascii_digit()) {
            let data_type = data_type.ok_or_else(|| {
                Error::schema(FORMAT, format!("{} is missing its type indicator", upper))
            })?;
            log.add_userdef(userdef::parse_declaration(value, data_type)?)
        } else {
            log.header.set(Field::new(name, value));
            Ok(())
        }
    }

    fn tag_name(&self, name: &str) -> String {
        if self.config.lower_case {
            name.to_ascii_lowercase()
        } else {
            name.to_ascii_uppercase()
        }
    }

    fn push_field(&self, out: &mut String, name: &str, value: &str, indicator: Option<char>) {
        out.push('<');
        out.push_str(&self.tag_name(name));
        out.push(':');
        out.push_str(&value.len().to_string());
        if let Some(c) = indicator {
            out.push(':');
            out.push(c);
        }
        out.push('>');
        out.push_str(value);
    }

    /// Comments may not contain `<`; those that do are dropped
    fn push_comment(&self, out: &mut String, comment: &str) -> bool {
        if comment.contains('<') {
            log::warn!("dropping comment containing '<': {:?}", comment);
            return false;
        }
        out.push_str(comment);
        true
    }

    pub fn format(&self, log: &Logfile) -> Result<String> {
        let fs = self.config.field_separator.as_str();
        let rs = self.config.record_separator.as_str();
        let mut out = String::new();
        out.push_str(&log.preamble());
        out.push('\n');
        for f in log.header.fields() {
            self.push_field(&mut out, &f.name, &f.value, None);
            out.push_str(fs);
        }
        for (i, def) in log.userdefs.iter().enumerate() {
            let decl = userdef::format_declaration(def);
            self.push_field(
                &mut out,
                &format!("USERDEF{}", i + 1),
                &decl,
                Some(def.data_type.indicator()),
            );
            out.push_str(fs);
        }
        out.push('<');
        out.push_str(&self.tag_name("EOH"));
        out.push('>');
        out.push_str(rs);

        for r in &log.records {
            for c in &r.comments {
                if self.push_comment(&mut out, c) {
                    out.push_str(fs);
                }
            }
            for f in r.ordered_fields(&log.field_order) {
                let indicator = f.data_type.map(|t| t.indicator());
                self.push_field(&mut out, &f.name, &f.value, indicator);
                out.push_str(fs);
            }
            out.push('<');
            out.push_str(&self.tag_name("EOR"));
            out.push('>');
            out.push_str(rs);
        }
        // file-level comments trail the last record
        for c in log.comments.iter().filter(|c| !c.starts_with(&format!("Generated by {}", PROGRAM_ID))) {
            if self.push_comment(&mut out, c) {
                out.push('\n');
            }
        }
        if self.config.ascii_only {
            check_ascii(&out).map_err(|_| {
                Error::schema(FORMAT, "log contains non-ASCII text and ASCII-only output was requested")
            })?;
        }
        Ok(out)
    }
}

impl LogReader for AdiCodec {
    fn read(&self, input: &mut dyn Read) -> Result<Logfile> {
        let text = super::read_text(FORMAT, input)?;
        self.parse(&text)
    }
}

impl LogWriter for AdiCodec {
    fn write(&self, log: &Logfile, out: &mut dyn Write) -> Result<()> {
        out.write_all(self.format(log)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Logfile> {
        AdiCodec::default().parse(text)
    }

    #[test]
    fn test_header_and_records() {
        let log = parse(
            "Exported from a logger\n<ADIF_VER:5>3.1.4 <PROGRAMID:4>LoTW\n<EOH>\n\
             <CALL:5>W1ABC <BAND:3>20M <MODE:3>FT8 <EOR>\n\
             <call:4>K1JT <qso_date:8:d>20260103 <eor>\n",
        )
        .unwrap();
        assert_eq!(log.header.value("PROGRAMID"), "LoTW");
        assert_eq!(log.comments, vec!["Exported from a logger"]);
        assert_eq!(log.records.len(), 2);
        assert_eq!(log.records[0].value("BAND"), "20M");
        let date = log.records[1].get("QSO_DATE").unwrap();
        assert_eq!(date.value, "20260103");
        assert_eq!(date.data_type, Some(DataType::Date));
    }

    #[test]
    fn test_no_header() {
        let log = parse("<CALL:4>W1AW<EOR>").unwrap();
        assert!(log.header.is_empty());
        assert_eq!(log.records[0].value("CALL"), "W1AW");
    }

    #[test]
    fn test_lengths_are_bytes() {
        let log = parse("<STX_STRING:7>Straße<EOR>").unwrap();
        assert_eq!(log.records[0].value("STX_STRING"), "Straße");
        let out = AdiCodec::default().format(&log).unwrap();
        assert!(out.contains("<STX_STRING:7>Straße"));
    }

    #[test]
    fn test_values_are_not_scanned() {
        let log = parse("<NOTES:13>a <b> <EOR> c<EOR>").unwrap();
        assert_eq!(log.records[0].value("NOTES"), "a <b> <EOR> c");
    }

    #[test]
    fn test_comment_attachment() {
        let log = parse("<CALL:1>A<EOR> between\n<CALL:1>B inside<EOR>\ntrailing\n").unwrap();
        assert!(log.records[0].comments.is_empty());
        assert_eq!(log.records[1].comments, vec!["between", "inside"]);
        assert_eq!(log.comments, vec!["trailing"]);
    }

    #[test]
    fn test_file_comments_written_last() {
        let log = parse("exported\n<ADIF_VER:5>3.1.4<EOH>\n<CALL:1>A<EOR>\nsee you\n").unwrap();
        assert_eq!(log.comments, vec!["exported", "see you"]);
        let out = AdiCodec::default().format(&log).unwrap();
        let tail = out.rsplit_once("<EOR>").unwrap().1;
        assert_eq!(tail, "\nexported\nsee you\n");
        let back = parse(&out).unwrap();
        assert!(back.comments[0].starts_with("Generated by adif-multitool"));
        assert_eq!(back.comments[1], "exported\nsee you");
        assert_eq!(back.records, log.records);
    }

    #[test]
    fn test_length_errors() {
        match parse("<CALL:20>W1AW<EOR>") {
            Err(Error::Schema { .. }) => {}
            other => panic!("expected schema error, got {:?}", other),
        }
        match parse("<STX_STRING:5>Straße<EOR>") {
            Err(Error::Parse { position, .. }) => assert_eq!(position, Position::Byte(14)),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_structure_errors() {
        assert!(parse("header text <CALL:4>W1AW").is_err());
        assert!(parse("<CALL:4>W1AW").is_err());
        assert!(parse("<CALL:4>W1AW<EOH>").is_err());
        assert!(parse("<CALL:4:Q>W1AW<EOR>").is_err());
        assert!(parse("<CALL:4>W1AW <see below> <EOR>").is_err());
    }

    #[test]
    fn test_unknown_tags_allowed() {
        let codec = AdiCodec::new(AdiConfig { allow_unknown_tag: true, ..AdiConfig::default() });
        let log = codec.parse("<CALL:4>W1AW <see below> <EOR>").unwrap();
        assert_eq!(log.records[0].comments, vec!["<see below>"]);
    }

    #[test]
    fn test_ascii_only() {
        let codec = AdiCodec::new(AdiConfig { ascii_only: true, ..AdiConfig::default() });
        assert!(codec.parse("<NAME:3>Éa<EOR>").is_err());
        let mut log = Logfile::new();
        log.records.push(Record::from_pairs([("NAME_INTL", "Jéan")]));
        assert!(codec.format(&log).is_err());
    }

    #[test]
    fn test_userdefs() {
        let log = parse(
            "hdr <USERDEF1:19:E>SweaterSize,{S,M,L} <USERDEF2:15:N>ShoeSize,{5:20}<EOH>\
             <CALL:4>W1AW <SWEATERSIZE:1>M <EOR>",
        )
        .unwrap();
        assert_eq!(log.userdefs.len(), 2);
        assert_eq!(log.userdefs[1].maximum, Some(20.0));
        let out = AdiCodec::default().format(&log).unwrap();
        assert!(out.contains("<USERDEF1:19:E>SWEATERSIZE,{S,M,L}"), "{}", out);
        assert!(out.contains("<USERDEF2:15:N>SHOESIZE,{5:20}"), "{}", out);
        assert!(parse("hdr <USERDEF1:4>SIZE<EOH>").is_err());
    }

    #[test]
    fn test_write_layout() {
        let mut log = Logfile::new();
        log.header.set_value("ADIF_VER", "3.1.4");
        log.records.push(Record::from_pairs([("CALL", "W1AW"), ("BAND", "20m")]));
        let codec = AdiCodec::new(AdiConfig {
            field_separator: Separator::Newline,
            record_separator: Separator::TwoNewlines,
            lower_case: true,
            ..AdiConfig::default()
        });
        let out = codec.format(&log).unwrap();
        let body = out.split_once('\n').unwrap().1;
        assert_eq!(body, "<adif_ver:5>3.1.4\n<eoh>\n\n<call:4>W1AW\n<band:3>20m\n<eor>\n\n");
        let back = codec.parse(&out).unwrap();
        assert_eq!(back.records, log.records);
    }

    #[test]
    fn test_separator_names() {
        assert_eq!("2newline".parse::<Separator>().unwrap(), Separator::TwoNewlines);
        assert!("comma".parse::<Separator>().is_err());
        assert_eq!(Separator::Tab.to_string(), "tab");
    }
}
