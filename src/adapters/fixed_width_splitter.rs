//! Fixed-width column splitter.

use crate::domain::error::{MalformedRecordError, TradepipeError};
use crate::domain::record::FieldList;
use crate::ports::splitter_port::SplitterPort;

/// Cuts a record into consecutive columns of the given character widths.
///
/// Content past the last column must be blank.
pub struct FixedWidthSplitter {
    widths: Vec<usize>,
    record_width: usize,
}

impl FixedWidthSplitter {
    pub fn new(widths: Vec<usize>) -> Result<Self, TradepipeError> {
        if widths.is_empty() || widths.contains(&0) {
            return Err(TradepipeError::ConfigInvalid {
                section: "parser".into(),
                key: "widths".into(),
                reason: "widths must be a non-empty list of positive numbers".into(),
            });
        }
        let record_width = widths
            .iter()
            .try_fold(0usize, |total, w| total.checked_add(*w))
            .ok_or_else(|| TradepipeError::ConfigInvalid {
                section: "parser".into(),
                key: "widths".into(),
                reason: "total record width is too large".into(),
            })?;
        Ok(Self {
            widths,
            record_width,
        })
    }

    pub fn record_width(&self) -> usize {
        self.record_width
    }
}

impl SplitterPort for FixedWidthSplitter {
    fn split_fields(&self, record: &str) -> Result<FieldList, MalformedRecordError> {
        if record.trim().is_empty() {
            return Err(MalformedRecordError::new("empty record"));
        }

        let chars: Vec<char> = record.chars().collect();
        let width = self.record_width();
        if chars.len() < width {
            return Err(MalformedRecordError::new(format!(
                "record has {} characters, expected {}",
                chars.len(),
                width
            )));
        }
        if chars[width..].iter().any(|c| !c.is_whitespace()) {
            return Err(MalformedRecordError::new(format!(
                "unexpected content after column {width}"
            )));
        }

        let mut fields = Vec::with_capacity(self.widths.len());
        let mut start = 0;
        for w in &self.widths {
            let column: String = chars[start..start + w].iter().collect();
            fields.push(column.trim().to_string());
            start += w;
        }
        Ok(fields)
    }
}
