//! Logging port trait.

/// Fire-and-forget diagnostic sink.
///
/// Passed explicitly to whichever operation wants to report something;
/// nothing in the crate stores a logger.
pub trait LoggerPort {
    fn log(&self, message: &str);
}
