//! Raw input port trait.

use crate::domain::error::TradepipeError;

pub trait ReaderPort {
    /// Returns the raw input lines in source order.
    fn read_data(&self) -> Result<Vec<String>, TradepipeError>;
}
