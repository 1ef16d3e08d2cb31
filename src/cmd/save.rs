//! Write a log to one or more files
//!
//! Each path is written in the format its extension names (or the
//! configured output format). Existing files are refused unless
//! overwriting is allowed; every path is checked before any is written.

use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::Context;
use crate::adif::Logfile;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct SaveOptions {
    pub overwrite: bool,
    /// Create missing parent directories
    pub create_dirs: bool,
}

pub fn save(ctx: &Context, log: &mut Logfile, paths: &[PathBuf], opts: SaveOptions) -> Result<()> {
    if paths.is_empty() {
        return Err(Error::Usage("save needs at least one output file".to_string()));
    }
    let mut targets = Vec::with_capacity(paths.len());
    for path in paths {
        let format = ctx.output_format_for(path)?;
        if !opts.overwrite && path.exists() {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists; use --overwrite to replace it", path.display()),
            )));
        }
        targets.push((path, format));
    }

    ctx.prepare(log);
    for (path, format) in targets {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if opts.create_dirs {
                fs::create_dir_all(dir)?;
            } else if !dir.is_dir() {
                return Err(Error::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("directory {} does not exist; use --create-dirs", dir.display()),
                )));
            }
        }
        let mut options = OpenOptions::new();
        options.write(true);
        if opts.overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }
        let file = options
            .open(path)
            .map_err(|e| Error::Io(io::Error::new(e.kind(), format!("{}: {}", path.display(), e))))?;
        let mut out = BufWriter::new(file);
        ctx.write_log(log, format, &mut out)?;
        out.flush()?;
        log::info!("wrote {} records to {} as {}", log.records.len(), path.display(), format);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adif::Record;
    use crate::codec::Format;

    fn log() -> Logfile {
        let mut l = Logfile::new();
        l.records.push(Record::from_pairs([("CALL", "W1AW"), ("BAND", "20m")]));
        l
    }

    #[test]
    fn test_save_per_extension() {
        let dir = tempfile::tempdir().unwrap();
        let adi = dir.path().join("out.adi");
        let csv = dir.path().join("nested/out.csv");
        let opts = SaveOptions { overwrite: false, create_dirs: true };
        save(&Context::default(), &mut log(), &[adi.clone(), csv.clone()], opts).unwrap();
        assert!(fs::read_to_string(&adi).unwrap().contains("<CALL:4>W1AW"));
        assert_eq!(fs::read_to_string(&csv).unwrap(), "CALL,BAND\nW1AW,20m\n");
    }

    #[test]
    fn test_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "keep me").unwrap();
        let err = save(&Context::default(), &mut log(), &[path.clone()], SaveOptions::default()).unwrap_err();
        assert!(err.to_string().contains("--overwrite"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");

        let opts = SaveOptions { overwrite: true, create_dirs: false };
        save(&Context::default(), &mut log(), &[path.clone()], opts).unwrap();
        let back = Context::default().read_log(Format::Json, &mut fs::File::open(&path).unwrap()).unwrap();
        assert_eq!(back.records[0].value("CALL"), "W1AW");
        assert_eq!(back.header.value("PROGRAMID"), "adif-multitool");
    }

    #[test]
    fn test_missing_directory_and_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("missing/out.adi");
        assert!(save(&Context::default(), &mut log(), &[nested.clone()], SaveOptions::default()).is_err());
        assert!(!nested.exists());
        let odd = dir.path().join("out.xyz");
        assert!(matches!(
            save(&Context::default(), &mut log(), &[odd], SaveOptions::default()),
            Err(Error::Usage(_))
        ));
    }
}
