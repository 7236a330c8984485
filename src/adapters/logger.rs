//! Logger adapters.

use crate::ports::logger_port::LoggerPort;
use chrono::{DateTime, SecondsFormat, Utc};

/// Writes `[timestamp] message` lines to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrLogger;

impl StderrLogger {
    pub fn format_line(at: DateTime<Utc>, message: &str) -> String {
        format!("[{}] {}", at.to_rfc3339_opts(SecondsFormat::Secs, true), message)
    }
}

impl LoggerPort for StderrLogger {
    fn log(&self, message: &str) {
        eprintln!("{}", Self::format_line(Utc::now(), message));
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl LoggerPort for NullLogger {
    fn log(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_line_prefixes_utc_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 5).unwrap();
        assert_eq!(
            StderrLogger::format_line(at, "INFO: 2 trades processed"),
            "[2024-03-01T09:30:05Z] INFO: 2 trades processed"
        );
    }
}
