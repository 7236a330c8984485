//! Delimiter-based record splitter backed by the `csv` crate.

use crate::domain::error::MalformedRecordError;
use crate::domain::record::FieldList;
use crate::ports::splitter_port::SplitterPort;

/// Splits one line on a single-byte delimiter. Quoted fields may contain the
/// delimiter; surrounding whitespace is trimmed from every field.
pub struct DelimitedSplitter {
    delimiter: u8,
}

impl DelimitedSplitter {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn comma() -> Self {
        Self::new(b',')
    }
}

impl Default for DelimitedSplitter {
    fn default() -> Self {
        Self::comma()
    }
}

impl SplitterPort for DelimitedSplitter {
    fn split_fields(&self, record: &str) -> Result<FieldList, MalformedRecordError> {
        if record.trim().is_empty() {
            return Err(MalformedRecordError::new("empty record"));
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_reader(record.as_bytes());

        let mut rows = rdr.records();
        let row = match rows.next() {
            Some(Ok(row)) => row,
            Some(Err(e)) => return Err(MalformedRecordError::new(e.to_string())),
            None => return Err(MalformedRecordError::new("empty record")),
        };
        if rows.next().is_some() {
            return Err(MalformedRecordError::new("record spans more than one line"));
        }

        Ok(row.iter().map(str::to_string).collect())
    }
}
