//! Record splitting port trait.

use crate::domain::error::MalformedRecordError;
use crate::domain::record::FieldList;

/// Decomposes one raw record into its ordered fields.
pub trait SplitterPort {
    fn split_fields(&self, record: &str) -> Result<FieldList, MalformedRecordError>;
}

impl<T: SplitterPort + ?Sized> SplitterPort for Box<T> {
    fn split_fields(&self, record: &str) -> Result<FieldList, MalformedRecordError> {
        (**self).split_fields(record)
    }
}
