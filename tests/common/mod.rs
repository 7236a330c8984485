#![allow(dead_code)]

use std::cell::RefCell;
use tradepipe::domain::error::{MalformedRecordError, MappingError, TradepipeError};
use tradepipe::domain::record::{FieldList, RecordIndex};
pub use tradepipe::domain::trade::TradeRecord;
use tradepipe::ports::logger_port::LoggerPort;
use tradepipe::ports::mapper_port::MapperPort;
use tradepipe::ports::reader_port::ReaderPort;
use tradepipe::ports::repository_port::RepositoryPort;
use tradepipe::ports::splitter_port::SplitterPort;
use tradepipe::ports::validator_port::ValidatorPort;

/// Collaborator calls in the order they happened.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Split(String),
    Validate(usize),
    Map(Vec<String>),
}

pub type CallLog = RefCell<Vec<Call>>;

/// Comma splitter that fails on records listed in `malformed`.
pub struct MockSplitter<'a> {
    pub calls: &'a CallLog,
    pub malformed: Vec<String>,
}

impl<'a> MockSplitter<'a> {
    pub fn new(calls: &'a CallLog) -> Self {
        Self {
            calls,
            malformed: Vec::new(),
        }
    }

    pub fn failing_on(mut self, record: &str) -> Self {
        self.malformed.push(record.to_string());
        self
    }
}

impl SplitterPort for MockSplitter<'_> {
    fn split_fields(&self, record: &str) -> Result<FieldList, MalformedRecordError> {
        self.calls.borrow_mut().push(Call::Split(record.to_string()));
        if self.malformed.iter().any(|m| m == record) {
            return Err(MalformedRecordError::new("mock malformed"));
        }
        Ok(record.split(',').map(str::to_string).collect())
    }
}

/// Rejects the listed 1-based indices.
pub struct MockValidator<'a> {
    pub calls: &'a CallLog,
    pub rejected: Vec<RecordIndex>,
}

impl<'a> MockValidator<'a> {
    pub fn accepting(calls: &'a CallLog) -> Self {
        Self {
            calls,
            rejected: Vec::new(),
        }
    }

    pub fn rejecting(calls: &'a CallLog, rejected: &[RecordIndex]) -> Self {
        Self {
            calls,
            rejected: rejected.to_vec(),
        }
    }
}

impl ValidatorPort for MockValidator<'_> {
    fn validate(&self, _fields: &[String], index: RecordIndex, logger: &dyn LoggerPort) -> bool {
        self.calls.borrow_mut().push(Call::Validate(index));
        if self.rejected.contains(&index) {
            logger.log(&format!("WARN: record {index} rejected"));
            return false;
        }
        true
    }
}

/// Maps a field list to its fields joined by `|`.
pub struct MockMapper<'a> {
    pub calls: &'a CallLog,
}

impl MapperPort for MockMapper<'_> {
    type Output = String;

    fn map(&self, fields: &[String]) -> Result<String, MappingError> {
        self.calls.borrow_mut().push(Call::Map(fields.to_vec()));
        Ok(fields.join("|"))
    }
}

#[derive(Default)]
pub struct MemoryLogger {
    pub lines: RefCell<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl LoggerPort for MemoryLogger {
    fn log(&self, message: &str) {
        self.lines.borrow_mut().push(message.to_string());
    }
}

pub struct MockReader {
    pub lines: Vec<String>,
    pub error: Option<String>,
}

impl MockReader {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            error: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            lines: Vec::new(),
            error: Some(reason.to_string()),
        }
    }
}

impl ReaderPort for MockReader {
    fn read_data(&self) -> Result<Vec<String>, TradepipeError> {
        if let Some(reason) = &self.error {
            return Err(TradepipeError::Read {
                source_name: "mock".into(),
                reason: reason.clone(),
            });
        }
        Ok(self.lines.clone())
    }
}

#[derive(Default)]
pub struct MemoryRepository {
    pub stored: RefCell<Vec<TradeRecord>>,
}

impl RepositoryPort for MemoryRepository {
    fn store_records(
        &self,
        records: &[TradeRecord],
        logger: &dyn LoggerPort,
    ) -> Result<(), TradepipeError> {
        self.stored.borrow_mut().extend_from_slice(records);
        logger.log(&format!("INFO: {} trades processed", records.len()));
        Ok(())
    }
}

pub fn make_trade(pair: &str, lots: f64, price: f64) -> TradeRecord {
    TradeRecord {
        source_currency: pair[..3].to_string(),
        destination_currency: pair[3..].to_string(),
        lots,
        price,
    }
}
