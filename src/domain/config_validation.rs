//! Configuration validation.
//!
//! Validates all config fields before a run starts.

use crate::domain::error::TradepipeError;
use crate::domain::settings::{parse_delimiter, parse_pool_size, parse_widths, OutputKind};
use crate::ports::config_port::ConfigPort;

pub fn validate_pipeline_config(config: &dyn ConfigPort) -> Result<(), TradepipeError> {
    validate_parser(config)?;
    validate_lot_size(config)?;
    validate_output(config)?;
    parse_pool_size(config)?;
    Ok(())
}

fn validate_parser(config: &dyn ConfigPort) -> Result<(), TradepipeError> {
    let mode = config
        .get_string("parser", "mode")
        .unwrap_or_else(|| "delimited".to_string());

    match mode.trim().to_lowercase().as_str() {
        "delimited" => {
            parse_delimiter(config.get_string("parser", "delimiter").as_deref())?;
            Ok(())
        }
        "fixed" => match config.get_string("parser", "widths") {
            Some(raw) => parse_widths(&raw).map(|_| ()),
            None => Err(TradepipeError::ConfigMissing {
                section: "parser".to_string(),
                key: "widths".to_string(),
            }),
        },
        _ => Err(TradepipeError::ConfigInvalid {
            section: "parser".to_string(),
            key: "mode".to_string(),
            reason: "mode must be delimited or fixed".to_string(),
        }),
    }
}

fn validate_lot_size(config: &dyn ConfigPort) -> Result<(), TradepipeError> {
    if let Some(raw) = config.get_string("mapper", "lot_size") {
        if raw.trim().parse::<f64>().is_err() {
            return Err(TradepipeError::ConfigInvalid {
                section: "mapper".to_string(),
                key: "lot_size".to_string(),
                reason: format!("'{}' is not a number", raw.trim()),
            });
        }
    }
    let value = config.get_double("mapper", "lot_size", 1.0);
    if !value.is_finite() || value <= 0.0 {
        return Err(TradepipeError::ConfigInvalid {
            section: "mapper".to_string(),
            key: "lot_size".to_string(),
            reason: "lot_size must be positive".to_string(),
        });
    }
    Ok(())
}

fn validate_output(config: &dyn ConfigPort) -> Result<(), TradepipeError> {
    let Some(raw) = config.get_string("output", "kind") else {
        return Ok(());
    };
    match OutputKind::parse(&raw) {
        Some(OutputKind::Csv) => Ok(()),
        Some(OutputKind::Sqlite) if cfg!(feature = "sqlite") => Ok(()),
        Some(OutputKind::Sqlite) => Err(TradepipeError::ConfigInvalid {
            section: "output".to_string(),
            key: "kind".to_string(),
            reason: "sqlite output requires the sqlite feature".to_string(),
        }),
        None => Err(TradepipeError::ConfigInvalid {
            section: "output".to_string(),
            key: "kind".to_string(),
            reason: "kind must be csv or sqlite".to_string(),
        }),
    }
}
