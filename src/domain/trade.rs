//! Trade domain object.

/// Number of currency units in one standard lot.
pub const DEFAULT_LOT_SIZE: f64 = 100_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TradeRecord {
    pub source_currency: String,
    pub destination_currency: String,
    pub lots: f64,
    pub price: f64,
}

impl TradeRecord {
    /// Six-letter pair, e.g. `GBPUSD`.
    pub fn currency_pair(&self) -> String {
        format!("{}{}", self.source_currency, self.destination_currency)
    }

    /// Units of the source currency traded.
    pub fn notional(&self, lot_size: f64) -> f64 {
        self.lots * lot_size
    }
}
