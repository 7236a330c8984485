//! Record pipeline: split, validate and map raw records into trades.
//!
//! The pipeline owns its three collaborators and nothing else. Every call to
//! [`RecordPipeline::process`] is independent of the previous one.
//!
//! Per record the collaborators run in the fixed order split → validate →
//! map. A rejected record is skipped silently; a record that cannot be split
//! or mapped aborts the whole batch and no trades are returned.

use crate::domain::error::TradepipeError;
use crate::domain::record::RecordIndex;
use crate::ports::logger_port::LoggerPort;
use crate::ports::mapper_port::MapperPort;
use crate::ports::splitter_port::SplitterPort;
use crate::ports::validator_port::ValidatorPort;

/// Counts gathered over one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcessSummary {
    pub total: usize,
    pub accepted: usize,
    pub rejected: usize,
}

pub struct RecordPipeline<S, V, M> {
    splitter: S,
    validator: V,
    mapper: M,
}

impl<S, V, M> RecordPipeline<S, V, M>
where
    S: SplitterPort,
    V: ValidatorPort,
    M: MapperPort,
{
    pub fn new(splitter: S, validator: V, mapper: M) -> Self {
        Self {
            splitter,
            validator,
            mapper,
        }
    }

    /// Turns `records` into trades, preserving input order.
    pub fn process<R: AsRef<str>>(
        &self,
        records: &[R],
        logger: &dyn LoggerPort,
    ) -> Result<Vec<M::Output>, TradepipeError> {
        self.process_with_summary(records, logger)
            .map(|(trades, _)| trades)
    }

    pub fn process_with_summary<R: AsRef<str>>(
        &self,
        records: &[R],
        logger: &dyn LoggerPort,
    ) -> Result<(Vec<M::Output>, ProcessSummary), TradepipeError> {
        let mut trades = Vec::new();
        let mut summary = ProcessSummary {
            total: records.len(),
            ..ProcessSummary::default()
        };

        for (offset, record) in records.iter().enumerate() {
            let index: RecordIndex = offset + 1;

            let fields = self
                .splitter
                .split_fields(record.as_ref())
                .map_err(|source| TradepipeError::MalformedRecord { index, source })?;

            if !self.validator.validate(&fields, index, logger) {
                summary.rejected += 1;
                continue;
            }

            let trade = self
                .mapper
                .map(&fields)
                .map_err(|source| TradepipeError::Mapping { index, source })?;
            trades.push(trade);
            summary.accepted += 1;
        }

        Ok((trades, summary))
    }
}
