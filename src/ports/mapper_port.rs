//! Field-to-domain mapping port trait.

use crate::domain::error::MappingError;

/// Converts a validated field list into a domain object.
pub trait MapperPort {
    type Output;

    fn map(&self, fields: &[String]) -> Result<Self::Output, MappingError>;
}
