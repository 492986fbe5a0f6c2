use std::collections::BTreeMap;

use thiserror::Error;

/// A single user-correctable problem with a request parameter. The
/// `#[error]` strings are the messages callers see on the wire.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("empty search term")]
    EmptySearchTerm,
    #[error("limit value must be an integer")]
    LimitWrongType { limit: String },
    #[error("limit cannot be a negative value")]
    NegativeLimit { limit: String },
    #[error("limit exceeded maximum value, limit cannot be greater than [{max}]")]
    LimitTooHigh { limit: String, max: usize },
    #[error("offset value must be an integer")]
    OffsetWrongType { offset: String },
    #[error("offset cannot be a negative value")]
    NegativeOffset { offset: String },
    #[error("the maximum offset has been reached, the offset cannot be more than {max}")]
    MaximumOffsetReached { offset: usize, max: usize },
    #[error("invalid filters")]
    InvalidFilters { filters: String },
    #[error("duplicate filters")]
    DuplicateFilters { filters: String },
    #[error("cannot filter on both full_time and part_time")]
    MultipleModes,
    #[error("invalid countries")]
    InvalidCountries { countries: String },
    #[error("length of course values must be integers")]
    LengthOfCourseWrongType { length_of_course: String },
    #[error("length of course values must be between 1 and 7")]
    LengthOfCourseOutOfRange { length_of_course: String },
}

impl ValidationError {
    /// The offending raw values, keyed as they appear in the error body.
    pub fn error_values(&self) -> BTreeMap<String, String> {
        let (key, value) = match self {
            Self::EmptySearchTerm => ("q", String::new()),
            Self::LimitWrongType { limit }
            | Self::NegativeLimit { limit }
            | Self::LimitTooHigh { limit, .. } => ("limit", limit.clone()),
            Self::OffsetWrongType { offset } | Self::NegativeOffset { offset } => {
                ("offset", offset.clone())
            }
            Self::MaximumOffsetReached { offset, .. } => ("offset", offset.to_string()),
            Self::InvalidFilters { filters } | Self::DuplicateFilters { filters } => {
                ("filters", filters.clone())
            }
            Self::MultipleModes => ("filters", "part_time,full_time".to_string()),
            Self::InvalidCountries { countries } => ("countries", countries.clone()),
            Self::LengthOfCourseWrongType { length_of_course }
            | Self::LengthOfCourseOutOfRange { length_of_course } => {
                ("length_of_course", length_of_course.clone())
            }
        };

        BTreeMap::from([(key.to_string(), value)])
    }
}

/// The search term is required and must be non-empty.
pub fn parse_term(raw: Option<&str>) -> Result<String, ValidationError> {
    match raw {
        Some(term) if !term.is_empty() => Ok(term.to_string()),
        _ => Err(ValidationError::EmptySearchTerm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_is_required() {
        assert_eq!(parse_term(None), Err(ValidationError::EmptySearchTerm));
        assert_eq!(parse_term(Some("")), Err(ValidationError::EmptySearchTerm));
        assert_eq!(parse_term(Some("economics")), Ok("economics".to_string()));
    }

    #[test]
    fn messages_carry_the_maximum() {
        let error = ValidationError::MaximumOffsetReached {
            offset: 1200,
            max: 1000,
        };
        assert_eq!(
            error.to_string(),
            "the maximum offset has been reached, the offset cannot be more than 1000"
        );
        assert_eq!(error.error_values()["offset"], "1200");
    }
}
