//! Field validation port trait.

use crate::domain::record::RecordIndex;
use crate::ports::logger_port::LoggerPort;

/// Pass/fail check on a field list.
///
/// `false` is an ordinary outcome: the record is skipped. The logger is the
/// only side-effect channel and carries the reason for a rejection.
pub trait ValidatorPort {
    fn validate(&self, fields: &[String], index: RecordIndex, logger: &dyn LoggerPort) -> bool;
}
