use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};
use tracing::debug;

/// Lazily yields the lines of a reader, one buffer at a time.
///
/// Bytes are decoded lossily, so invalid UTF-8 never fails a read; the
/// replacement characters it produces are not letters.
#[derive(Debug)]
pub struct Lines<R> {
    reader: R,
    buf: Vec<u8>,
    origin: PathBuf,
}

/// Wraps an already buffered reader. `origin` is only used in error messages.
pub fn lines<R: BufRead>(reader: R, origin: impl Into<PathBuf>) -> Lines<R> {
    Lines {
        reader,
        buf: Vec::new(),
        origin: origin.into(),
    }
}

pub fn open(path: &Path) -> Result<Lines<BufReader<File>>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    debug!("opened {}", path.display());
    Ok(lines(BufReader::new(file), path))
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e).with_context(|| format!("read {}", self.origin.display()))),
        }
    }
}
