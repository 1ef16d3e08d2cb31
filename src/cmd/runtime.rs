// Command runtime: reading and concatenating inputs, writing output
//
// Inputs are read whole, one after another, and appended to a single log.
// The first input supplies the header; later inputs contribute records,
// application-defined header fields and field declarations.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use icu_locid::Locale;

use crate::adif::{FieldOrder, Logfile};
use crate::codec::{CodecConfig, Format};
use crate::error::{Error, Result};

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct Context {
    pub codecs: CodecConfig,
    /// Format of every input; otherwise inferred from each path
    pub input_format: Option<Format>,
    /// Format of standard output; ADI when unset
    pub output_format: Option<Format>,
    pub field_order: FieldOrder,
    /// Collation locale for international text
    pub locale: Locale,
    /// Creation time stamped into written headers; the current time when
    /// unset
    pub now: Option<DateTime<Utc>>,
}

impl Default for Context {
    fn default() -> Self {
        Context {
            codecs: CodecConfig::default(),
            input_format: None,
            output_format: None,
            field_order: FieldOrder::default(),
            locale: Locale::UND,
            now: None,
        }
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

impl Context {
    pub fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }

    /// Format for reading `path`: the configured input format, ADI for
    /// standard input, otherwise the path's extension
    pub fn input_format_for(&self, path: &Path) -> Result<Format> {
        if let Some(f) = self.input_format {
            return Ok(f);
        }
        if is_stdin(path) {
            return Ok(Format::Adi);
        }
        Format::from_path(path).ok_or_else(|| {
            Error::Usage(format!(
                "cannot tell the format of {} from its name; use --input",
                path.display()
            ))
        })
    }

    /// Format for writing `path`: the path's extension, then the configured
    /// output format
    pub fn output_format_for(&self, path: &Path) -> Result<Format> {
        Format::from_path(path).or(self.output_format).ok_or_else(|| {
            Error::Usage(format!(
                "cannot tell the format of {} from its name; use --output",
                path.display()
            ))
        })
    }

    /// Decode one input
    pub fn read_log(&self, format: Format, input: &mut dyn Read) -> Result<Logfile> {
        self.codecs.reader(format).read(input)
    }

    /// Read and concatenate inputs in order. No paths means standard input.
    pub fn read_inputs(&self, paths: &[PathBuf]) -> Result<Logfile> {
        let stdin_only = [PathBuf::from("-")];
        let paths = if paths.is_empty() { &stdin_only[..] } else { paths };
        let mut combined = Logfile::new();
        for path in paths {
            let format = self.input_format_for(path)?;
            let log = if is_stdin(path) {
                self.read_log(format, &mut io::stdin().lock())?
            } else {
                let file = File::open(path).map_err(|e| {
                    Error::Io(io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
                })?;
                self.read_log(format, &mut BufReader::new(file))?
            };
            log::info!("read {} records from {} as {}", log.records.len(), path.display(), format);
            combined.append(log)?;
        }
        if !self.field_order.is_empty() {
            combined.field_order = self.field_order.clone();
        }
        Ok(combined)
    }

    /// Stamp the header fields every written log carries
    pub fn prepare(&self, log: &mut Logfile) {
        log.synthesize_header(self.now());
        if !self.field_order.is_empty() {
            log.field_order = self.field_order.clone();
        }
    }

    /// Encode a prepared log
    pub fn write_log(&self, log: &Logfile, format: Format, out: &mut dyn Write) -> Result<()> {
        self.codecs.writer(format).write(log, out)
    }

    /// Prepare and write a log to standard output
    pub fn write_stdout(&self, log: &mut Logfile) -> Result<()> {
        let format = self.output_format.unwrap_or(Format::Adi);
        self.prepare(log);
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        self.write_log(log, format, &mut out)?;
        out.flush()?;
        log::info!("wrote {} records as {}", log.records.len(), format);
        Ok(())
    }
}
