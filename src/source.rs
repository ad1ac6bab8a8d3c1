use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Where a ROM image is read from.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => write!(f, "standard input"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read the whole image before anything is formatted.
pub fn read_all_bytes(source: &Source) -> Result<Vec<u8>> {
    let buf = match source {
        Source::Stdin => {
            let stdin = io::stdin();
            let lock = stdin.lock();
            read_from(lock).map_err(|e| Error::for_stream("standard input", "reading", e))?
        }
        Source::File(path) => {
            let file = File::open(path).map_err(|e| Error::for_path(path, "opening", e))?;
            read_from(file).map_err(|e| Error::for_path(path, "reading", e))?
        }
    };

    log::debug!("read {} bytes from {}", buf.len(), source);
    Ok(buf)
}

pub fn read_from<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}
