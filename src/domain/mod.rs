//! Core domain types and logic.

pub mod config_validation;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod settings;
pub mod trade;
