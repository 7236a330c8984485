//! Persistence port trait.

use crate::domain::error::TradepipeError;
use crate::domain::trade::TradeRecord;
use crate::ports::logger_port::LoggerPort;

pub trait RepositoryPort {
    fn store_records(
        &self,
        records: &[TradeRecord],
        logger: &dyn LoggerPort,
    ) -> Result<(), TradepipeError>;
}
