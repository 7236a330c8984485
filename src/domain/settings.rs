//! Resolved run settings, built from a [`ConfigPort`].

use crate::domain::error::TradepipeError;
use crate::domain::trade::DEFAULT_LOT_SIZE;
use crate::ports::config_port::ConfigPort;

#[derive(Debug, Clone, PartialEq)]
pub enum SplitMode {
    Delimited { delimiter: u8 },
    FixedWidth { widths: Vec<usize> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Csv,
    Sqlite,
}

impl OutputKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "sqlite" => Some(Self::Sqlite),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSettings {
    pub input_path: Option<String>,
    pub skip_blank: bool,
    pub split: SplitMode,
    pub lot_size: f64,
    pub output_kind: OutputKind,
    pub output_path: Option<String>,
    pub quiet: bool,
}

impl PipelineSettings {
    /// Reads settings without re-checking them; run
    /// [`validate_pipeline_config`](crate::domain::config_validation::validate_pipeline_config)
    /// first for precise error messages.
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, TradepipeError> {
        let mode = config
            .get_string("parser", "mode")
            .unwrap_or_else(|| "delimited".to_string());

        let split = match mode.trim().to_lowercase().as_str() {
            "delimited" => SplitMode::Delimited {
                delimiter: parse_delimiter(config.get_string("parser", "delimiter").as_deref())?,
            },
            "fixed" => {
                let raw = config.get_string("parser", "widths").ok_or_else(|| {
                    TradepipeError::ConfigMissing {
                        section: "parser".into(),
                        key: "widths".into(),
                    }
                })?;
                SplitMode::FixedWidth {
                    widths: parse_widths(&raw)?,
                }
            }
            other => {
                return Err(TradepipeError::ConfigInvalid {
                    section: "parser".into(),
                    key: "mode".into(),
                    reason: format!("unknown mode '{other}' (expected delimited or fixed)"),
                });
            }
        };

        let output_kind = match config.get_string("output", "kind") {
            None => OutputKind::Csv,
            Some(raw) => OutputKind::parse(&raw).ok_or_else(|| TradepipeError::ConfigInvalid {
                section: "output".into(),
                key: "kind".into(),
                reason: format!("unknown kind '{}' (expected csv or sqlite)", raw.trim()),
            })?,
        };

        Ok(Self {
            input_path: non_empty(config.get_string("input", "path")),
            skip_blank: config.get_bool("input", "skip_blank", true),
            split,
            lot_size: config.get_double("mapper", "lot_size", DEFAULT_LOT_SIZE),
            output_kind,
            output_path: non_empty(config.get_string("output", "path")),
            quiet: config.get_bool("log", "quiet", false),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// `None` means the default comma. Characters that INI files treat as
/// comment markers can be given by name (`semicolon`, `hash`).
pub fn parse_delimiter(value: Option<&str>) -> Result<u8, TradepipeError> {
    let invalid = |reason: &str| TradepipeError::ConfigInvalid {
        section: "parser".into(),
        key: "delimiter".into(),
        reason: reason.to_string(),
    };

    let Some(raw) = value else {
        return Ok(b',');
    };
    match raw.trim().to_lowercase().as_str() {
        "\\t" | "tab" => return Ok(b'\t'),
        "space" => return Ok(b' '),
        "comma" => return Ok(b','),
        "pipe" => return Ok(b'|'),
        "semicolon" => return Ok(b';'),
        "hash" => return Ok(b'#'),
        _ => {}
    }
    let trimmed = if raw.trim().is_empty() { raw } else { raw.trim() };
    let bytes = trimmed.as_bytes();
    if bytes.len() != 1 || !bytes[0].is_ascii() {
        return Err(invalid("delimiter must be a single ASCII character"));
    }
    if bytes[0] == b'"' || bytes[0] == b'\n' || bytes[0] == b'\r' {
        return Err(invalid("delimiter cannot be a quote or line break"));
    }
    Ok(bytes[0])
}

/// Comma-separated list of positive column widths.
pub fn parse_widths(value: &str) -> Result<Vec<usize>, TradepipeError> {
    let invalid = |reason: String| TradepipeError::ConfigInvalid {
        section: "parser".into(),
        key: "widths".into(),
        reason,
    };

    let widths = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<usize>() {
            Ok(0) => Err(invalid("widths must be positive".to_string())),
            Ok(w) => Ok(w),
            Err(_) => Err(invalid(format!("'{s}' is not a width"))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if widths.is_empty() {
        return Err(invalid("at least one width is required".to_string()));
    }
    if widths
        .iter()
        .try_fold(0usize, |total, w| total.checked_add(*w))
        .is_none()
    {
        return Err(invalid("total record width is too large".to_string()));
    }
    Ok(widths)
}

/// `[sqlite] pool_size`, defaulting to 4. Must fit a positive `u32`.
pub fn parse_pool_size(config: &dyn ConfigPort) -> Result<u32, TradepipeError> {
    let raw = config.get_int("sqlite", "pool_size", 4);
    match u32::try_from(raw) {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(TradepipeError::ConfigInvalid {
            section: "sqlite".into(),
            key: "pool_size".into(),
            reason: format!("pool_size must be between 1 and {}, got {raw}", u32::MAX),
        }),
    }
}
