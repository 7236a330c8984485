//! Maps validated `PAIR,AMOUNT,PRICE` fields to [`TradeRecord`]s.

use crate::domain::error::MappingError;
use crate::domain::trade::{TradeRecord, DEFAULT_LOT_SIZE};
use crate::ports::mapper_port::MapperPort;

pub struct TradeMapper {
    lot_size: f64,
}

impl TradeMapper {
    pub fn new(lot_size: f64) -> Self {
        Self { lot_size }
    }

    pub fn lot_size(&self) -> f64 {
        self.lot_size
    }
}

impl Default for TradeMapper {
    fn default() -> Self {
        Self::new(DEFAULT_LOT_SIZE)
    }
}

fn field<'a>(fields: &'a [String], position: usize, name: &str) -> Result<&'a str, MappingError> {
    fields
        .get(position)
        .map(String::as_str)
        .ok_or_else(|| MappingError {
            field: name.to_string(),
            reason: "missing".to_string(),
        })
}

impl MapperPort for TradeMapper {
    type Output = TradeRecord;

    fn map(&self, fields: &[String]) -> Result<TradeRecord, MappingError> {
        let pair = field(fields, 0, "currency_pair")?;
        if pair.len() != 6 || !pair.is_ascii() {
            return Err(MappingError {
                field: "currency_pair".into(),
                reason: format!("'{pair}' is not a six-letter pair"),
            });
        }

        let amount: i64 = field(fields, 1, "amount")?
            .parse()
            .map_err(|e| MappingError {
                field: "amount".into(),
                reason: format!("{e}"),
            })?;

        let price: f64 = field(fields, 2, "price")?
            .parse()
            .map_err(|e| MappingError {
                field: "price".into(),
                reason: format!("{e}"),
            })?;

        Ok(TradeRecord {
            source_currency: pair[..3].to_ascii_uppercase(),
            destination_currency: pair[3..].to_ascii_uppercase(),
            lots: amount as f64 / self.lot_size,
            price,
        })
    }
}
