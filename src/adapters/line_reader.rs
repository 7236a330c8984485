//! File and stdin readers producing raw record lines.

use crate::domain::error::TradepipeError;
use crate::ports::reader_port::ReaderPort;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Collects lines from `reader`, dropping blank ones when `skip_blank` is set.
pub fn read_lines<R: BufRead>(
    reader: R,
    source_name: &str,
    skip_blank: bool,
) -> Result<Vec<String>, TradepipeError> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| TradepipeError::Read {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })?;
        if skip_blank && line.trim().is_empty() {
            continue;
        }
        lines.push(line);
    }
    Ok(lines)
}

pub struct FileReader {
    path: PathBuf,
    skip_blank: bool,
}

impl FileReader {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            skip_blank: true,
        }
    }

    pub fn skip_blank(mut self, skip: bool) -> Self {
        self.skip_blank = skip;
        self
    }
}

impl ReaderPort for FileReader {
    fn read_data(&self) -> Result<Vec<String>, TradepipeError> {
        let name = self.path.display().to_string();
        let file = File::open(&self.path).map_err(|e| TradepipeError::Read {
            source_name: name.clone(),
            reason: e.to_string(),
        })?;
        read_lines(BufReader::new(file), &name, self.skip_blank)
    }
}

pub struct StdinReader {
    skip_blank: bool,
}

impl StdinReader {
    pub fn new(skip_blank: bool) -> Self {
        Self { skip_blank }
    }
}

impl ReaderPort for StdinReader {
    fn read_data(&self) -> Result<Vec<String>, TradepipeError> {
        read_lines(io::stdin().lock(), "stdin", self.skip_blank)
    }
}
