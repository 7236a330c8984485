//! Domain error types.

/// A raw record that could not be decomposed into fields.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("malformed record: {reason}")]
pub struct MalformedRecordError {
    pub reason: String,
}

impl MalformedRecordError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A validated field list that the mapper could not turn into a trade.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("cannot map {field}: {reason}")]
pub struct MappingError {
    pub field: String,
    pub reason: String,
}

/// Top-level error type for tradepipe.
#[derive(Debug, thiserror::Error)]
pub enum TradepipeError {
    #[error("record {index}: {source}")]
    MalformedRecord {
        index: usize,
        #[source]
        source: MalformedRecordError,
    },

    #[error("record {index}: {source}")]
    Mapping {
        index: usize,
        #[source]
        source: MappingError,
    },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("failed to read {source_name}: {reason}")]
    Read { source_name: String, reason: String },

    #[error("storage error: {reason}")]
    Storage { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TradepipeError> for std::process::ExitCode {
    fn from(err: &TradepipeError) -> Self {
        let code: u8 = match err {
            TradepipeError::Io(_) | TradepipeError::Read { .. } => 1,
            TradepipeError::ConfigParse { .. }
            | TradepipeError::ConfigMissing { .. }
            | TradepipeError::ConfigInvalid { .. } => 2,
            TradepipeError::Storage { .. } => 3,
            TradepipeError::MalformedRecord { .. } | TradepipeError::Mapping { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
