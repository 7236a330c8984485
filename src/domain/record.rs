//! Raw record vocabulary shared by the pipeline and its ports.

/// Ordered fields obtained by splitting one raw record.
pub type FieldList = Vec<String>;

/// 1-based position of a record within its input batch.
pub type RecordIndex = usize;
