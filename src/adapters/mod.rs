//! Concrete adapter implementations for ports.

pub mod csv_repository;
pub mod delimited_splitter;
pub mod file_config_adapter;
pub mod fixed_width_splitter;
pub mod line_reader;
pub mod logger;
#[cfg(feature = "sqlite")]
pub mod sqlite_repository;
pub mod trade_mapper;
pub mod trade_validator;
