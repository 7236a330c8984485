//! tradepipe: raw trade record ingestion.
//!
//! Hexagonal architecture: the record pipeline and domain types live in
//! [`domain`], one-capability port traits in [`ports`], concrete
//! implementations in [`adapters`].

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;
