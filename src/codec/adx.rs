// ADX: the XML form of ADIF
//
// <ADX><HEADER>...</HEADER><RECORDS><RECORD>...</RECORD></RECORDS></ADX>
//
// Standard fields are elements named after the field. User-defined fields
// are declared in the header as `USERDEF` elements and appear in records as
// `<USERDEF FIELDNAME="...">`. Application fields are
// `<APP PROGRAMID="..." FIELDNAME="..." TYPE="...">`.

use std::collections::HashMap;
use std::io::{Read, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use super::{LogReader, LogWriter};
use crate::adif::{app_field_parts, userdef, Field, Logfile, Record, PROGRAM_ID};
use crate::error::{Error, Position, Result};
use crate::spec::DataType;

const FORMAT: &str = "adx";

#[derive(Debug, Clone)]
pub struct AdxConfig {
    /// Spaces per nesting level; 0 writes no whitespace between elements
    pub indent: usize,
}

impl Default for AdxConfig {
    fn default() -> Self {
        AdxConfig { indent: 1 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AdxCodec {
    config: AdxConfig,
}

impl AdxCodec {
    pub fn new(config: AdxConfig) -> Self {
        AdxCodec { config }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    Outside,
    Adx,
    Header,
    Records,
    Record,
    Done,
}

/// A field element being collected
#[derive(Default)]
struct Element {
    tag: String,
    attrs: HashMap<String, String>,
    text: String,
    /// Name and text of a nested element (`ENUM`, `RANGE`)
    child: Option<(String, String)>,
}

impl Element {
    fn start(e: &BytesStart) -> Result<Element> {
        let mut attrs = HashMap::new();
        for attr in e.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_ascii_uppercase();
            attrs.insert(key, attr.unescape_value()?.into_owned());
        }
        Ok(Element {
            tag: tag_name(e),
            attrs,
            ..Element::default()
        })
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    fn data_type(&self) -> Result<Option<DataType>> {
        match self.attr("TYPE").map(str::trim).filter(|t| !t.is_empty()) {
            None => Ok(None),
            Some(t) => {
                let mut chars = t.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => DataType::from_indicator(c)
                        .map(Some)
                        .ok_or_else(|| Error::schema(FORMAT, format!("unknown TYPE {:?} on {}", t, self.tag))),
                    _ => Err(Error::schema(FORMAT, format!("bad TYPE {:?} on {}", t, self.tag))),
                }
            }
        }
    }

    fn app_name(&self) -> Result<String> {
        match (self.attr("PROGRAMID"), self.attr("FIELDNAME")) {
            (Some(p), Some(f)) if !p.is_empty() && !f.is_empty() => Ok(format!("APP_{}_{}", p, f)),
            _ => Err(Error::schema(FORMAT, "APP element needs PROGRAMID and FIELDNAME")),
        }
    }

    fn into_field(self, name: String) -> Result<Field> {
        Ok(match self.data_type()? {
            Some(t) => Field::typed(&name, self.text, t),
            None => Field::new(&name, self.text),
        })
    }
}

fn tag_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.name().as_ref()).to_ascii_uppercase()
}

fn line_at(text: &str, pos: usize) -> Position {
    let pos = pos.min(text.len());
    Position::Line(text.as_bytes()[..pos].iter().filter(|&&b| b == b'\n').count() + 1)
}

/// Wrap in braces if needed, e.g. `S,M,L` as `{S,M,L}`
fn braced(s: &str) -> String {
    let s = s.trim();
    if s.starts_with('{') {
        s.to_string()
    } else {
        format!("{{{}}}", s)
    }
}

impl AdxCodec {
    pub fn parse(&self, text: &str) -> Result<Logfile> {
        let mut reader = Reader::from_str(text);
        let mut log = Logfile::new();
        let mut section = Section::Outside;
        let mut element: Option<Element> = None;
        let mut record = Record::new();
        let mut pending: Vec<String> = Vec::new();

        loop {
            let at = reader.buffer_position();
            let event = reader
                .read_event()
                .map_err(|e| Error::parse(FORMAT, line_at(text, at), e.to_string()))?;
            match event {
                Event::Start(e) => {
                    let tag = tag_name(&e);
                    match (section, element.as_mut()) {
                        (Section::Header | Section::Record, Some(el)) => {
                            el.child = Some((tag, String::new()));
                        }
                        (Section::Header | Section::Record, None) => element = Some(Element::start(&e)?),
                        (Section::Outside, _) if tag == "ADX" => section = Section::Adx,
                        (Section::Adx, _) if tag == "HEADER" => section = Section::Header,
                        (Section::Adx, _) if tag == "RECORDS" => section = Section::Records,
                        (Section::Records, _) if tag == "RECORD" => {
                            section = Section::Record;
                            record = Record::new();
                            for c in pending.drain(..) {
                                record.add_comment(c);
                            }
                        }
                        _ => {
                            return Err(Error::parse(
                                FORMAT,
                                line_at(text, at),
                                format!("unexpected element <{}>", tag),
                            ))
                        }
                    }
                }
                Event::Empty(e) => match section {
                    Section::Header | Section::Record if element.is_none() => {
                        let el = Element::start(&e)?;
                        self.finish(&mut log, &mut record, section, el)?;
                    }
                    Section::Adx | Section::Records => {}
                    _ => {
                        return Err(Error::parse(
                            FORMAT,
                            line_at(text, at),
                            format!("unexpected element <{}/>", tag_name(&e)),
                        ))
                    }
                },
                Event::Text(t) => {
                    let value = t.unescape()?;
                    match element.as_mut() {
                        Some(Element { child: Some((_, child_text)), .. }) => child_text.push_str(&value),
                        Some(el) => el.text.push_str(&value),
                        None if value.trim().is_empty() => {}
                        None => {
                            return Err(Error::parse(
                                FORMAT,
                                line_at(text, at),
                                format!("unexpected text {:?}", value.trim()),
                            ))
                        }
                    }
                }
                Event::CData(t) => {
                    let value = String::from_utf8_lossy(&t).into_owned();
                    if let Some(el) = element.as_mut() {
                        el.text.push_str(&value);
                    }
                }
                Event::Comment(c) => {
                    let comment = reader.decoder().decode(&c)?.trim().to_string();
                    match section {
                        Section::Record => record.add_comment(comment),
                        Section::Records => pending.push(comment),
                        _ => log.add_comment(comment),
                    }
                }
                Event::End(_) => {
                    if let Some(el) = element.as_mut() {
                        if let Some((name, value)) = el.child.take() {
                            el.attrs.insert(name, value);
                            continue;
                        }
                    }
                    if let Some(el) = element.take() {
                        self.finish(&mut log, &mut record, section, el)?;
                        continue;
                    }
                    section = match section {
                        Section::Record => {
                            if !record.is_empty() {
                                log.records.push(std::mem::take(&mut record));
                            }
                            Section::Records
                        }
                        Section::Header | Section::Records => Section::Adx,
                        Section::Adx => Section::Done,
                        s => s,
                    };
                }
                Event::Eof => break,
                Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            }
        }
        if section != Section::Done {
            return Err(Error::schema(FORMAT, "document is not a complete <ADX> element"));
        }
        for c in pending {
            log.add_comment(c);
        }
        log::debug!("parsed {} ADX records", log.records.len());
        Ok(log)
    }

    fn finish(&self, log: &mut Logfile, record: &mut Record, section: Section, el: Element) -> Result<()> {
        match (section, el.tag.as_str()) {
            (Section::Header, "USERDEF") => {
                let data_type = el.data_type()?.ok_or_else(|| {
                    Error::schema(FORMAT, format!("USERDEF {} is missing its TYPE", el.text.trim()))
                })?;
                let mut decl = el.text.trim().to_string();
                if let Some(values) = el.attr("ENUM") {
                    decl = format!("{},{}", decl, braced(values));
                } else if let Some(range) = el.attr("RANGE") {
                    decl = format!("{},{}", decl, braced(range));
                }
                log.add_userdef(userdef::parse_declaration(&decl, data_type)?)
            }
            (Section::Header, "APP") => {
                let name = el.app_name()?;
                log.header.set(el.into_field(name)?);
                Ok(())
            }
            (Section::Header, _) => {
                let name = el.tag.clone();
                log.header.set(el.into_field(name)?);
                Ok(())
            }
            (_, "USERDEF") => {
                let name = el
                    .attr("FIELDNAME")
                    .map(str::to_string)
                    .ok_or_else(|| Error::schema(FORMAT, "USERDEF field without FIELDNAME"))?;
                record.set(el.into_field(name)?);
                Ok(())
            }
            (_, "APP") => {
                let name = el.app_name()?;
                record.set(el.into_field(name)?);
                Ok(())
            }
            _ => {
                let name = el.tag.clone();
                record.set(el.into_field(name)?);
                Ok(())
            }
        }
    }

    pub fn format(&self, log: &Logfile) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        {
            let mut w = if self.config.indent > 0 {
                Writer::new_with_indent(&mut out, b' ', self.config.indent)
            } else {
                Writer::new(&mut out)
            };
            w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
            write_comment(&mut w, &log.preamble())?;
            w.write_event(Event::Start(BytesStart::new("ADX")))?;

            w.write_event(Event::Start(BytesStart::new("HEADER")))?;
            for f in log.header.fields() {
                write_field(&mut w, f, false)?;
            }
            for (i, def) in log.userdefs.iter().enumerate() {
                let id = (i + 1).to_string();
                let indicator = def.data_type.indicator().to_string();
                let mut start = BytesStart::new("USERDEF");
                start.push_attribute(("FIELDID", id.as_str()));
                start.push_attribute(("TYPE", indicator.as_str()));
                let values = format!("{{{}}}", def.values.join(","));
                let range = match (def.minimum, def.maximum) {
                    (Some(lo), Some(hi)) => Some(format!("{{{}:{}}}", lo, hi)),
                    _ => None,
                };
                if !def.values.is_empty() {
                    start.push_attribute(("ENUM", values.as_str()));
                } else if let Some(r) = &range {
                    start.push_attribute(("RANGE", r.as_str()));
                }
                write_text_element(&mut w, start, &def.name)?;
            }
            w.write_event(Event::End(BytesEnd::new("HEADER")))?;

            w.write_event(Event::Start(BytesStart::new("RECORDS")))?;
            for r in &log.records {
                w.write_event(Event::Start(BytesStart::new("RECORD")))?;
                for c in &r.comments {
                    write_comment(&mut w, c)?;
                }
                for f in r.ordered_fields(&log.field_order) {
                    write_field(&mut w, f, log.userdef(&f.name).is_some())?;
                }
                w.write_event(Event::End(BytesEnd::new("RECORD")))?;
            }
            w.write_event(Event::End(BytesEnd::new("RECORDS")))?;
            // file-level comments trail the records
            for c in log.comments.iter().filter(|c| !c.starts_with(&format!("Generated by {}", PROGRAM_ID))) {
                write_comment(&mut w, c)?;
            }
            w.write_event(Event::End(BytesEnd::new("ADX")))?;
        }
        out.push(b'\n');
        Ok(out)
    }
}

fn write_comment<W: Write>(w: &mut Writer<W>, comment: &str) -> Result<()> {
    // "--" may not appear inside an XML comment
    let safe = format!(" {} ", comment.replace("--", "- -"));
    w.write_event(Event::Comment(BytesText::from_escaped(safe)))?;
    Ok(())
}

fn write_text_element<W: Write>(w: &mut Writer<W>, start: BytesStart, text: &str) -> Result<()> {
    let end = start.to_end().into_owned();
    w.write_event(Event::Start(start))?;
    w.write_event(Event::Text(BytesText::new(text)))?;
    w.write_event(Event::End(end))?;
    Ok(())
}

fn write_field<W: Write>(w: &mut Writer<W>, f: &Field, user_defined: bool) -> Result<()> {
    let indicator = f.data_type.map(|t| t.indicator().to_string());
    let start = if let Some((program, name)) = app_field_parts(&f.name) {
        let mut s = BytesStart::new("APP");
        s.push_attribute(("PROGRAMID", program));
        s.push_attribute(("FIELDNAME", name));
        if let Some(t) = &indicator {
            s.push_attribute(("TYPE", t.as_str()));
        }
        s
    } else if user_defined {
        let mut s = BytesStart::new("USERDEF");
        s.push_attribute(("FIELDNAME", f.name.as_str()));
        s
    } else {
        BytesStart::new(f.name.as_str())
    };
    write_text_element(w, start, &f.value)
}

impl LogReader for AdxCodec {
    fn read(&self, input: &mut dyn Read) -> Result<Logfile> {
        let text = super::read_text(FORMAT, input)?;
        self.parse(&text)
    }
}

impl LogWriter for AdxCodec {
    fn write(&self, log: &Logfile, out: &mut dyn Write) -> Result<()> {
        out.write_all(&self.format(log)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::FieldDef;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- exported for testing -->
<ADX>
  <HEADER>
    <ADIF_VER>3.1.4</ADIF_VER>
    <APP PROGRAMID="N1MM" FIELDNAME="CONTEST" TYPE="S">CQWW</APP>
    <USERDEF FIELDID="1" TYPE="E" ENUM="{S,M,L}">SWEATERSIZE</USERDEF>
    <USERDEF FIELDID="2" TYPE="N"><RANGE>{5:20}</RANGE>SHOESIZE</USERDEF>
  </HEADER>
  <RECORDS>
    <!-- first contact -->
    <RECORD>
      <CALL>W1AW</CALL>
      <NAME_INTL>Jéan &amp; Co</NAME_INTL>
      <USERDEF FIELDNAME="SWEATERSIZE">M</USERDEF>
      <APP PROGRAMID="MONOLOG" FIELDNAME="COMPRESSION" TYPE="S">off</APP>
      <NOTES/>
    </RECORD>
    <RECORD><CALL>K1JT</CALL></RECORD>
  </RECORDS>
</ADX>
"#;

    #[test]
    fn test_read_sample() {
        let log = AdxCodec::default().parse(SAMPLE).unwrap();
        assert_eq!(log.comments, vec!["exported for testing"]);
        assert_eq!(log.header.value("ADIF_VER"), "3.1.4");
        assert_eq!(log.header.value("APP_N1MM_CONTEST"), "CQWW");
        assert_eq!(log.userdefs.len(), 2);
        assert_eq!(log.userdefs[0].values, vec!["S", "M", "L"]);
        assert_eq!(log.userdefs[1].maximum, Some(20.0));
        assert_eq!(log.records.len(), 2);
        let r = &log.records[0];
        assert_eq!(r.comments, vec!["first contact"]);
        assert_eq!(r.value("NAME_INTL"), "Jéan & Co");
        assert_eq!(r.value("SWEATERSIZE"), "M");
        assert_eq!(r.get("APP_MONOLOG_COMPRESSION").unwrap().data_type, Some(DataType::String));
        assert!(r.has("NOTES"));
        assert_eq!(log.records[1].value("CALL"), "K1JT");
    }

    #[test]
    fn test_write_then_read() {
        let mut log = Logfile::new();
        log.header.set_value("ADIF_VER", "3.1.4");
        log.header.set_value("APP_N1MM_CONTEST", "CQWW");
        log.add_userdef(FieldDef::user_defined(
            "SWEATERSIZE",
            DataType::Enumeration,
            vec!["S".into(), "M".into()],
            None,
            None,
        ))
        .unwrap();
        let mut r = Record::from_pairs([("CALL", "W1AW"), ("NOTES", "a < b\nline two"), ("SWEATERSIZE", "S")]);
        r.add_comment("check -- this");
        log.records.push(r);

        let codec = AdxCodec::default();
        let bytes = codec.format(&log).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains(r#"<USERDEF FIELDID="1" TYPE="E" ENUM="{S,M}">SWEATERSIZE</USERDEF>"#), "{}", text);
        assert!(text.contains(r#"<APP PROGRAMID="N1MM" FIELDNAME="CONTEST">CQWW</APP>"#), "{}", text);
        assert!(text.contains(r#"<USERDEF FIELDNAME="SWEATERSIZE">S</USERDEF>"#), "{}", text);
        assert!(text.contains("a &lt; b"), "{}", text);
        assert!(!text.contains('\r'));

        let back = codec.parse(&text).unwrap();
        assert_eq!(back.header.value("APP_N1MM_CONTEST"), "CQWW");
        assert_eq!(back.userdefs, log.userdefs);
        assert_eq!(back.records[0].value("NOTES"), "a < b\nline two");
        assert_eq!(back.records[0].value("SWEATERSIZE"), "S");
        assert_eq!(back.records[0].comments, vec!["check - - this"]);
    }

    #[test]
    fn test_file_comments_written_last() {
        let mut log = Logfile::new();
        log.add_comment("exported for testing");
        log.records.push(Record::from_pairs([("CALL", "W1AW")]));
        let codec = AdxCodec::new(AdxConfig { indent: 0 });
        let text = String::from_utf8(codec.format(&log).unwrap()).unwrap();
        assert!(text.ends_with("</RECORDS><!-- exported for testing --></ADX>\n"), "{}", text);
        let back = codec.parse(&text).unwrap();
        assert_eq!(back.comments.last().map(String::as_str), Some("exported for testing"));
    }

    #[test]
    fn test_no_indent() {
        let mut log = Logfile::new();
        log.records.push(Record::from_pairs([("CALL", "W1AW")]));
        let codec = AdxCodec::new(AdxConfig { indent: 0 });
        let text = String::from_utf8(codec.format(&log).unwrap()).unwrap();
        assert!(text.contains("<ADX><HEADER></HEADER><RECORDS><RECORD><CALL>W1AW</CALL></RECORD></RECORDS></ADX>"), "{}", text);
    }

    #[test]
    fn test_structure_errors() {
        let codec = AdxCodec::default();
        assert!(codec.parse("<LOG></LOG>").is_err());
        assert!(codec.parse("<ADX><RECORDS><RECORD><CALL>W1AW</CALL></RECORD>").is_err());
        assert!(codec.parse("<ADX><RECORDS><CALL>W1AW</CALL></RECORDS></ADX>").is_err());
        assert!(codec.parse("<ADX><RECORDS><RECORD><APP>x</APP></RECORD></RECORDS></ADX>").is_err());
        match codec.parse("<ADX>\n<RECORDS>\n<RECORD><CALL>W1AW</RECORD>") {
            Err(Error::Parse { position, .. }) => assert_eq!(position, Position::Line(3)),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
