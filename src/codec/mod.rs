// Log file formats
//
// Every format has a codec implementing `LogReader` and `LogWriter` over
// one configuration value. Readers consume their whole input and return a
// complete log or an error; they never return a partial log.

pub mod adi;
pub mod adx;
pub mod cabrillo;
pub mod csv;
pub mod json;
pub mod tsv;

use std::fmt;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use crate::adif::Logfile;
use crate::error::{Error, Position, Result};

pub use adi::{AdiCodec, AdiConfig, Separator};
pub use adx::{AdxCodec, AdxConfig};
pub use cabrillo::{CabrilloCodec, CabrilloConfig, ExchangeField};
pub use self::csv::{CsvCodec, CsvConfig};
pub use json::{JsonCodec, JsonConfig};
pub use tsv::{TsvCodec, TsvConfig};

/// Decodes a whole input into a log
pub trait LogReader {
    fn read(&self, input: &mut dyn Read) -> Result<Logfile>;
}

/// Encodes a log
pub trait LogWriter {
    fn write(&self, log: &Logfile, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Adi,
    Adx,
    Cabrillo,
    Csv,
    Tsv,
    Json,
}

impl Format {
    pub const ALL: &'static [Format] = &[
        Format::Adi,
        Format::Adx,
        Format::Cabrillo,
        Format::Csv,
        Format::Tsv,
        Format::Json,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Format::Adi => "adi",
            Format::Adx => "adx",
            Format::Cabrillo => "cabrillo",
            Format::Csv => "csv",
            Format::Tsv => "tsv",
            Format::Json => "json",
        }
    }

    /// Format for a name or file extension (case-insensitive)
    pub fn from_name(name: &str) -> Option<Format> {
        match name.trim().trim_start_matches('.').to_ascii_lowercase().as_str() {
            "adi" | "adif" => Some(Format::Adi),
            "adx" => Some(Format::Adx),
            "cabrillo" | "log" | "cbr" => Some(Format::Cabrillo),
            "csv" => Some(Format::Csv),
            "tsv" | "tab" => Some(Format::Tsv),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    /// Format implied by a path's extension
    pub fn from_path(path: &Path) -> Option<Format> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Format::from_name)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Format::from_name(s).ok_or_else(|| {
            let names: Vec<_> = Format::ALL.iter().map(Format::name).collect();
            Error::Usage(format!("unknown format {:?}, expected one of {}", s, names.join(", ")))
        })
    }
}

/// Settings for every codec; a format only reads its own part
#[derive(Debug, Clone, Default)]
pub struct CodecConfig {
    pub adi: AdiConfig,
    pub adx: AdxConfig,
    pub cabrillo: CabrilloConfig,
    pub csv: CsvConfig,
    pub tsv: TsvConfig,
    pub json: JsonConfig,
}

impl CodecConfig {
    pub fn reader(&self, format: Format) -> Box<dyn LogReader> {
        match format {
            Format::Adi => Box::new(AdiCodec::new(self.adi.clone())),
            Format::Adx => Box::new(AdxCodec::new(self.adx.clone())),
            Format::Cabrillo => Box::new(CabrilloCodec::new(self.cabrillo.clone())),
            Format::Csv => Box::new(CsvCodec::new(self.csv.clone())),
            Format::Tsv => Box::new(TsvCodec::new(self.tsv.clone())),
            Format::Json => Box::new(JsonCodec::new(self.json.clone())),
        }
    }

    pub fn writer(&self, format: Format) -> Box<dyn LogWriter> {
        match format {
            Format::Adi => Box::new(AdiCodec::new(self.adi.clone())),
            Format::Adx => Box::new(AdxCodec::new(self.adx.clone())),
            Format::Cabrillo => Box::new(CabrilloCodec::new(self.cabrillo.clone())),
            Format::Csv => Box::new(CsvCodec::new(self.csv.clone())),
            Format::Tsv => Box::new(TsvCodec::new(self.tsv.clone())),
            Format::Json => Box::new(JsonCodec::new(self.json.clone())),
        }
    }
}

/// Read a whole input as UTF-8 text
pub(crate) fn read_text(format: &'static str, input: &mut dyn Read) -> Result<String> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    String::from_utf8(bytes).map_err(|e| {
        Error::parse(
            format,
            Position::Byte(e.utf8_error().valid_up_to()),
            "input is not valid UTF-8",
        )
    })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names() {
        assert_eq!(Format::from_name("ADI"), Some(Format::Adi));
        assert_eq!(Format::from_name(".cbr"), Some(Format::Cabrillo));
        assert_eq!(Format::from_name("log"), Some(Format::Cabrillo));
        assert_eq!(Format::from_name("xlsx"), None);
        assert!("xlsx".parse::<Format>().is_err());
        assert_eq!("tsv".parse::<Format>().unwrap(), Format::Tsv);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("out/contest.LOG")), Some(Format::Cabrillo));
        assert_eq!(Format::from_path(Path::new("a.adx")), Some(Format::Adx));
        assert_eq!(Format::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_read_text_rejects_bad_utf8() {
        let bytes: &[u8] = b"<CALL:2>\xff\xfe";
        match read_text("adi", &mut &bytes[..]) {
            Err(Error::Parse { position, .. }) => assert_eq!(position, Position::Byte(8)),
            other => panic!("unexpected {:?}", other),
        }
    }
}
