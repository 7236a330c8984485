//! Validation rules for `PAIR,AMOUNT,PRICE` trade records.

use crate::domain::record::RecordIndex;
use crate::ports::logger_port::LoggerPort;
use crate::ports::validator_port::ValidatorPort;

pub const TRADE_FIELD_COUNT: usize = 3;

#[derive(Debug, Default, Clone, Copy)]
pub struct TradeValidator;

impl TradeValidator {
    pub fn new() -> Self {
        Self
    }

    /// Reason a field list is unacceptable, or `None` if it is a valid trade.
    pub fn rejection(&self, fields: &[String], index: RecordIndex) -> Option<String> {
        if fields.len() != TRADE_FIELD_COUNT {
            return Some(format!(
                "WARN: Line {index} malformed. Expected {TRADE_FIELD_COUNT} fields, found {}.",
                fields.len()
            ));
        }

        let pair = &fields[0];
        if pair.len() != 6 || !pair.chars().all(|c| c.is_ascii_alphabetic()) {
            return Some(format!(
                "WARN: Trade currencies on line {index} malformed: '{pair}'"
            ));
        }

        let amount = &fields[1];
        if amount.parse::<i64>().is_err() {
            return Some(format!(
                "WARN: Trade amount on line {index} not a valid integer: '{amount}'"
            ));
        }

        let price = &fields[2];
        if !price.parse::<f64>().is_ok_and(f64::is_finite) {
            return Some(format!(
                "WARN: Trade price on line {index} not a valid decimal: '{price}'"
            ));
        }

        None
    }
}

impl ValidatorPort for TradeValidator {
    fn validate(&self, fields: &[String], index: RecordIndex, logger: &dyn LoggerPort) -> bool {
        match self.rejection(fields, index) {
            Some(message) => {
                logger.log(&message);
                false
            }
            None => true,
        }
    }
}
