use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Where a listing is written to.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Sink {
    Stdout,
    File(PathBuf),
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stdout => write!(f, "standard output"),
            Sink::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Write `text` to `sink`, replacing whatever a file sink held before.
pub fn write_text(sink: &Sink, text: &str) -> Result<()> {
    match sink {
        Sink::Stdout => {
            let stdout = io::stdout();
            let lock = stdout.lock();
            write_to(lock, text).map_err(|e| Error::for_stream("standard output", "writing", e))?;
        }
        Sink::File(path) => {
            let file = File::create(path).map_err(|e| Error::for_path(path, "creating", e))?;
            write_to(BufWriter::new(file), text).map_err(|e| Error::for_path(path, "writing", e))?;
        }
    }

    log::debug!("wrote {} bytes to {}", text.len(), sink);
    Ok(())
}

pub fn write_to<W: Write>(mut output: W, text: &str) -> io::Result<()> {
    output.write_all(text.as_bytes())?;
    output.flush()
}
