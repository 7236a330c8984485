//! Port traits: one narrow capability per role.

pub mod config_port;
pub mod logger_port;
pub mod mapper_port;
pub mod reader_port;
pub mod repository_port;
pub mod splitter_port;
pub mod validator_port;
