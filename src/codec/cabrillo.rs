// Cabrillo 3.0 contest logs
// Reference: https://wwrof.org/cabrillo/
//
// A Cabrillo log is a sequence of `KEY: value` lines between
// `START-OF-LOG: 3.0` and `END-OF-LOG:`. Contacts are `QSO:` (or `X-QSO:`)
// lines with positional columns:
//
//   freq mode date time my-call my-exchange... their-call their-exchange... [tx]
//
// Which ADIF fields make up each exchange is configured per contest with
// `ExchangeField`s. Headers that have no ADIF counterpart are kept on the
// log header as APP_CABRILLO_<KEY>.

use std::collections::BTreeSet;
use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use chrono::NaiveDate;

use super::{LogReader, LogWriter};
use crate::adif::{Field, Logfile, Record, PROGRAM_ID, PROGRAM_VERSION};
use crate::error::{Error, Position, Result};
use crate::spec::bands::freq_to_band;
use crate::spec::cabrillo::{band_for_label, cabrillo_band, category_for_code, code_for_mode, label_for_band, mode_for_code};
use crate::validate::datetime::parse_date;
use crate::validate::scalar::parse_number;

const FORMAT: &str = "cabrillo";
const APP_PREFIX: &str = "APP_CABRILLO_";
pub const TRANSMITTER_ID: &str = "APP_CABRILLO_TRANSMITTER_ID";
pub const XQSO: &str = "APP_CABRILLO_XQSO";

/// Headers written before the category block, in this order
const STANDARD_HEADERS: &[&str] = &[
    "CALLSIGN",
    "CONTEST",
    "CLAIMED-SCORE",
    "CLUB",
    "CREATED-BY",
    "EMAIL",
    "GRID-LOCATOR",
    "LOCATION",
    "NAME",
    "ADDRESS",
    "ADDRESS-CITY",
    "ADDRESS-STATE-PROVINCE",
    "ADDRESS-POSTALCODE",
    "ADDRESS-COUNTRY",
    "OPERATORS",
    "OFFTIME",
    "SOAPBOX",
    "CERTIFICATE",
];

const CATEGORY_HEADERS: &[&str] = &[
    "CATEGORY-ASSISTED",
    "CATEGORY-BAND",
    "CATEGORY-MODE",
    "CATEGORY-OPERATOR",
    "CATEGORY-POWER",
    "CATEGORY-STATION",
    "CATEGORY-TIME",
    "CATEGORY-TRANSMITTER",
    "CATEGORY-OVERLAY",
];

/// Headers copied into every record when they hold a single value
const PROMOTED_HEADERS: &[(&str, &str)] = &[
    ("OPERATORS", "OPERATOR"),
    ("CONTEST", "CONTEST_ID"),
    ("GRID-LOCATOR", "GRIDSQUARE"),
];

/// One exchange column: `LABEL:FIELD[/ALT...][?|=default]`
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeField {
    pub label: String,
    /// Field read into and written from first
    pub field: String,
    /// Fields tried in order when `field` is empty
    pub alternates: Vec<String>,
    /// An empty value is written as `-`
    pub optional: bool,
    pub default: Option<String>,
}

impl ExchangeField {
    /// Parse a list of exchange columns separated by spaces or commas
    pub fn parse_list(s: &str) -> Result<Vec<ExchangeField>> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(str::parse)
            .collect()
    }

    /// Value for this column in a record
    fn value<'a>(&'a self, record: &'a Record) -> Option<&'a str> {
        std::iter::once(&self.field)
            .chain(self.alternates.iter())
            .map(|f| record.value(f))
            .find(|v| !v.is_empty())
            .or(self.default.as_deref())
    }
}

impl FromStr for ExchangeField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::Usage(format!("bad exchange field {:?}, expected LABEL:FIELD[/ALT][?|=default]", s));
        let (label, rest) = s.split_once(':').ok_or_else(bad)?;
        let (fields, optional, default) = if let Some((f, d)) = rest.split_once('=') {
            (f, false, Some(d.to_string()))
        } else if let Some(f) = rest.strip_suffix('?') {
            (f, true, None)
        } else {
            (rest, false, None)
        };
        let mut names = fields.split('/').map(|f| f.trim().to_uppercase());
        let field = names.next().filter(|f| crate::adif::is_valid_field_name(f)).ok_or_else(bad)?;
        let alternates: Vec<String> = names.collect();
        if label.trim().is_empty() || alternates.iter().any(|a| !crate::adif::is_valid_field_name(a)) {
            return Err(bad());
        }
        Ok(ExchangeField {
            label: label.trim().to_string(),
            field,
            alternates,
            optional,
            default,
        })
    }
}

impl fmt::Display for ExchangeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.label, self.field)?;
        for a in &self.alternates {
            write!(f, "/{}", a)?;
        }
        match &self.default {
            Some(d) => write!(f, "={}", d),
            None if self.optional => f.write_str("?"),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CabrilloConfig {
    pub my_exchange: Vec<ExchangeField>,
    pub their_exchange: Vec<ExchangeField>,
    /// Separate QSO columns with tabs instead of aligning with spaces
    pub tab_delimiter: bool,
    /// Highest TX_PWR for CATEGORY-POWER: QRP
    pub max_qrp_power: f64,
    /// Highest TX_PWR for CATEGORY-POWER: LOW
    pub max_low_power: f64,
    /// Header values that take precedence over the log and derived values
    pub headers: Vec<(String, String)>,
}

impl Default for CabrilloConfig {
    fn default() -> Self {
        let ex = |s: &str| ExchangeField::parse_list(s).unwrap_or_default();
        CabrilloConfig {
            my_exchange: ex("rst:RST_SENT=59 exch:STX_STRING/STX?"),
            their_exchange: ex("rst:RST_RCVD=59 exch:SRX_STRING/SRX?"),
            tab_delimiter: false,
            max_qrp_power: 5.0,
            max_low_power: 100.0,
            headers: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CabrilloCodec {
    config: CabrilloConfig,
}

/// CW, SSB, AM and FM are distinct for CATEGORY-MODE; other modes fall
/// into their Cabrillo category
fn mode_class(mode: &str) -> &'static str {
    match mode.to_ascii_uppercase().as_str() {
        "CW" => "CW",
        "SSB" => "SSB",
        "AM" => "AM",
        "FM" => "FM",
        other => category_for_code(code_for_mode(other)),
    }
}

fn header_field(key: &str) -> String {
    format!("{}{}", APP_PREFIX, key.to_ascii_uppercase().replace('-', "_"))
}

fn header_key(field: &str) -> Option<String> {
    field
        .strip_prefix(APP_PREFIX)
        .map(|k| k.replace('_', "-"))
}

/// `3799` kHz as `3.799` MHz, by moving the decimal point
fn khz_to_mhz(khz: &str) -> String {
    let padded = format!("{:0>4}", khz);
    let (whole, frac) = padded.split_at(padded.len() - 3);
    let frac = frac.trim_end_matches('0');
    if frac.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, frac)
    }
}

impl CabrilloCodec {
    pub fn new(config: CabrilloConfig) -> Self {
        CabrilloCodec { config }
    }

    pub fn parse(&self, text: &str) -> Result<Logfile> {
        let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));
        let err = |line: usize, msg: String| Error::parse(FORMAT, Position::Line(line), msg);

        match lines.next() {
            Some((_, first)) if first.trim().eq_ignore_ascii_case("START-OF-LOG: 3.0") => {}
            Some((_, first)) => return Err(err(1, format!("expected START-OF-LOG: 3.0, found {:?}", first))),
            None => return Err(err(1, "empty input, expected START-OF-LOG: 3.0".into())),
        }

        let mut log = Logfile::new();
        let mut ended = false;
        for (n, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            if ended {
                return Err(err(n, "text after END-OF-LOG:".into()));
            }
            let (key, value) = line
                .split_once(':')
                .ok_or_else(|| err(n, format!("expected KEY: value, found {:?}", line)))?;
            let key = key.trim().to_ascii_uppercase();
            let value = value.trim();
            match key.as_str() {
                "END-OF-LOG" => ended = true,
                "QSO" | "X-QSO" => {
                    let mut record = self.parse_qso(value).map_err(|m| err(n, m))?;
                    if key == "X-QSO" {
                        record.set_value(XQSO, "Y");
                    }
                    log.records.push(record);
                }
                // column schematic written by `format`
                "X-Q" => {}
                "START-OF-LOG" => return Err(err(n, "repeated START-OF-LOG".into())),
                _ => {
                    let name = header_field(&key);
                    let joined = match log.header.get(&name) {
                        Some(f) if !f.value.is_empty() => format!("{}\n{}", f.value, value),
                        _ => value.to_string(),
                    };
                    log.header.set_value(&name, joined);
                }
            }
        }
        if !ended {
            return Err(Error::parse(FORMAT, Position::Unknown, "end of input before END-OF-LOG:"));
        }

        for (key, field) in PROMOTED_HEADERS {
            let value = log.header.value(&header_field(key)).to_string();
            if value.is_empty() || value.contains(|c: char| c == ',' || c.is_whitespace()) {
                continue;
            }
            for r in log.records.iter_mut().filter(|r| !r.has(field)) {
                r.set_value(field, value.clone());
            }
        }
        log::debug!("parsed {} Cabrillo QSOs", log.records.len());
        Ok(log)
    }

    fn parse_qso(&self, value: &str) -> std::result::Result<Record, String> {
        let tokens: Vec<&str> = value.split_whitespace().collect();
        let (mine, theirs) = (&self.config.my_exchange, &self.config.their_exchange);
        let expected = 6 + mine.len() + theirs.len();
        if tokens.len() != expected && tokens.len() != expected + 1 {
            return Err(format!(
                "QSO line has {} columns, expected {} or {} for this exchange",
                tokens.len(),
                expected,
                expected + 1
            ));
        }
        let mut r = Record::new();
        let freq = tokens[0];
        if let Some(band) = band_for_label(freq) {
            r.set_value("BAND", band);
        } else if freq.bytes().all(|b| b.is_ascii_digit()) {
            let mhz = khz_to_mhz(freq);
            match parse_number(&mhz).and_then(freq_to_band) {
                Some(band) => {
                    r.set_value("FREQ", mhz);
                    r.set_value("BAND", band);
                }
                None => {
                    log::warn!("frequency {} kHz is outside every amateur band", freq);
                    r.set_value("FREQ", mhz);
                }
            }
        } else {
            return Err(format!("{:?} is neither a kHz frequency nor a band label", freq));
        }
        let mode = mode_for_code(tokens[1]).ok_or_else(|| format!("unknown mode {:?}", tokens[1]))?;
        r.set_value("MODE", mode);
        let date = NaiveDate::parse_from_str(tokens[2], "%Y-%m-%d")
            .map_err(|_| format!("date {:?} is not YYYY-MM-DD", tokens[2]))?;
        r.set_value("QSO_DATE", date.format("%Y%m%d").to_string());
        let time = tokens[3];
        if time.len() != 4 || !time.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("time {:?} is not HHMM", time));
        }
        r.set_value("TIME_ON", time);

        let mut col = 4;
        r.set_value("STATION_CALLSIGN", tokens[col]);
        col += 1;
        for ex in mine {
            set_exchange(&mut r, ex, tokens[col]);
            col += 1;
        }
        r.set_value("CALL", tokens[col]);
        col += 1;
        for ex in theirs {
            set_exchange(&mut r, ex, tokens[col]);
            col += 1;
        }
        if let Some(tx) = tokens.get(col) {
            r.set_value(TRANSMITTER_ID, *tx);
        }
        Ok(r)
    }

    /// Header value: configuration, then the log, then `derived`
    fn header_value(&self, log: &Logfile, key: &str, derived: impl FnOnce() -> Option<String>) -> Option<String> {
        self.config
            .headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.clone())
            .or_else(|| Some(log.header.value(&header_field(key)).to_string()).filter(|v| !v.is_empty()))
            .or_else(derived)
    }

    fn derive_category(&self, log: &Logfile, key: &str) -> Option<String> {
        match key {
            "CATEGORY-MODE" => {
                let modes: BTreeSet<&str> = log
                    .records
                    .iter()
                    .map(|r| r.value("MODE"))
                    .filter(|m| !m.is_empty())
                    .map(mode_class)
                    .collect();
                match modes.len() {
                    0 => None,
                    1 => modes.into_iter().next().map(|m| (if m == "AM" { "SSB" } else { m }).to_string()),
                    _ => Some("MIXED".to_string()),
                }
            }
            "CATEGORY-BAND" => {
                let bands: BTreeSet<Option<&str>> = log
                    .records
                    .iter()
                    .filter_map(|r| record_band(r))
                    .map(|b| cabrillo_band(b).and_then(|c| c.category))
                    .collect();
                match bands.len() {
                    0 => None,
                    1 => Some(bands.into_iter().next().flatten().unwrap_or("ALL").to_string()),
                    _ => Some("ALL".to_string()),
                }
            }
            "CATEGORY-POWER" => {
                let max = log
                    .records
                    .iter()
                    .filter_map(|r| parse_number(r.value("TX_PWR")))
                    .fold(None, |acc: Option<f64>, p| Some(acc.map_or(p, |a| a.max(p))))?;
                Some(
                    if max <= self.config.max_qrp_power {
                        "QRP"
                    } else if max <= self.config.max_low_power {
                        "LOW"
                    } else {
                        "HIGH"
                    }
                    .to_string(),
                )
            }
            _ => None,
        }
    }

    fn derive_header(&self, log: &Logfile, key: &str) -> Option<String> {
        let uniform = |field: &str| {
            let values: BTreeSet<&str> = log.records.iter().map(|r| r.value(field)).filter(|v| !v.is_empty()).collect();
            (values.len() == 1).then(|| values.into_iter().next().unwrap_or_default().to_string())
        };
        match key {
            "CALLSIGN" => uniform("STATION_CALLSIGN").or_else(|| uniform("OPERATOR")),
            "CONTEST" => uniform("CONTEST_ID"),
            "GRID-LOCATOR" => uniform("MY_GRIDSQUARE"),
            "NAME" => uniform("MY_NAME"),
            "OPERATORS" => {
                let ops: BTreeSet<&str> = log.records.iter().map(|r| r.value("OPERATOR")).filter(|v| !v.is_empty()).collect();
                (!ops.is_empty()).then(|| ops.into_iter().collect::<Vec<_>>().join(" "))
            }
            "CREATED-BY" => Some(format!("{} {}", PROGRAM_ID, PROGRAM_VERSION)),
            _ => None,
        }
    }

    fn qso_columns(&self, log: &Logfile, index: usize, r: &Record, with_tx: bool) -> Result<Vec<String>> {
        let missing = |what: &str| Error::schema(FORMAT, format!("record {} has no {}", index + 1, what));
        let freq = match parse_number(r.value("FREQ")) {
            Some(mhz) => format!("{:.0}", mhz * 1000.0),
            None => record_band(r)
                .and_then(label_for_band)
                .map(str::to_string)
                .ok_or_else(|| missing("FREQ or BAND"))?,
        };
        let mode = r.value("MODE");
        if mode.is_empty() {
            return Err(missing("MODE"));
        }
        let date = parse_date(r.value("QSO_DATE")).ok_or_else(|| missing("valid QSO_DATE"))?;
        let time = r.value("TIME_ON").get(..4).ok_or_else(|| missing("TIME_ON"))?;
        let my_call = [r.value("STATION_CALLSIGN"), r.value("OPERATOR")]
            .into_iter()
            .find(|v| !v.is_empty())
            .map(str::to_string)
            .or_else(|| self.header_value(log, "CALLSIGN", || None))
            .ok_or_else(|| missing("STATION_CALLSIGN"))?;
        let call = r.value("CALL");
        if call.is_empty() {
            return Err(missing("CALL"));
        }

        let mut cols = vec![
            freq,
            code_for_mode(mode).to_string(),
            date.format("%Y-%m-%d").to_string(),
            time.to_string(),
            my_call,
        ];
        let exchange = |ex: &ExchangeField| -> Result<String> {
            match ex.value(r) {
                Some(v) if v.contains(char::is_whitespace) => Err(Error::schema(
                    FORMAT,
                    format!("record {} {} value {:?} contains whitespace", index + 1, ex.field, v),
                )),
                Some(v) => Ok(v.to_string()),
                None if ex.optional => Ok("-".to_string()),
                None => Err(missing(&format!("{} for exchange column {}", ex.field, ex.label))),
            }
        };
        for ex in &self.config.my_exchange {
            cols.push(exchange(ex)?);
        }
        cols.push(call.to_string());
        for ex in &self.config.their_exchange {
            cols.push(exchange(ex)?);
        }
        if with_tx {
            let tx = r.value(TRANSMITTER_ID);
            cols.push(if tx.is_empty() { "0".to_string() } else { tx.to_string() });
        }
        Ok(cols)
    }

    pub fn format(&self, log: &Logfile) -> Result<String> {
        let mut out = String::from("START-OF-LOG: 3.0\n");
        let mut push = |key: &str, value: &str| {
            for line in value.lines() {
                out.push_str(&format!("{}: {}\n", key, line));
            }
        };
        for key in STANDARD_HEADERS {
            if let Some(v) = self.header_value(log, key, || self.derive_header(log, key)) {
                push(key, &v);
            }
        }
        let known = |k: &str| STANDARD_HEADERS.contains(&k) || CATEGORY_HEADERS.contains(&k);
        for f in log.header.fields() {
            if let Some(key) = header_key(&f.name).filter(|k| !known(k)) {
                push(&key, &f.value);
            }
        }
        for (key, value) in &self.config.headers {
            let key = key.to_ascii_uppercase();
            if !known(&key) && !log.header.has(&header_field(&key)) {
                push(&key, value);
            }
        }
        for key in CATEGORY_HEADERS {
            if let Some(v) = self.header_value(log, key, || self.derive_category(log, key)) {
                push(key, &v);
            }
        }

        let with_tx = log.records.iter().any(|r| !r.value(TRANSMITTER_ID).is_empty());
        let rows: Vec<(bool, Vec<String>)> = log
            .records
            .iter()
            .enumerate()
            .map(|(i, r)| -> Result<(bool, Vec<String>)> {
                Ok((r.value(XQSO).eq_ignore_ascii_case("Y"), self.qso_columns(log, i, r, with_tx)?))
            })
            .collect::<Result<_>>()?;
        let ncols = rows.first().map_or(0, |(_, c)| c.len());
        let widths: Vec<usize> = (0..ncols)
            .map(|i| rows.iter().map(|(_, c)| c[i].len()).max().unwrap_or(0))
            .collect();
        let join = |cols: &[String]| -> String {
            if self.config.tab_delimiter {
                cols.join("\t")
            } else {
                let padded: Vec<String> = cols.iter().zip(&widths).map(|(c, w)| format!("{:<w$}", c, w = *w)).collect();
                padded.join(" ").trim_end().to_string()
            }
        };
        if !rows.is_empty() {
            let schematic: Vec<String> = widths.iter().map(|w| "*".repeat(*w)).collect();
            out.push_str(&format!("X-Q: {}\n", join(&schematic)));
        }
        for (xqso, cols) in &rows {
            let key = if *xqso { "X-QSO" } else { "QSO" };
            out.push_str(&format!("{}: {}\n", key, join(cols)));
        }
        out.push_str("END-OF-LOG:\n");
        Ok(out)
    }
}

fn set_exchange(r: &mut Record, ex: &ExchangeField, token: &str) {
    if token != "-" {
        r.set(Field::new(&ex.field, token));
    }
}

/// BAND, or the band FREQ falls in
fn record_band(r: &Record) -> Option<&str> {
    let band = r.value("BAND");
    if !band.is_empty() {
        return Some(band);
    }
    parse_number(r.value("FREQ")).and_then(freq_to_band)
}

impl LogReader for CabrilloCodec {
    fn read(&self, input: &mut dyn Read) -> Result<Logfile> {
        let text = super::read_text(FORMAT, input)?;
        self.parse(&text)
    }
}

impl LogWriter for CabrilloCodec {
    fn write(&self, log: &Logfile, out: &mut dyn Write) -> Result<()> {
        out.write_all(self.format(log)?.as_bytes())?;
        Ok(())
    }
}
