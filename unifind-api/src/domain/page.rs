use super::ValidationError;

/// Pagination window for one request, valid against the configured
/// maximum result count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

/// Parses the `limit` parameter, falling back to the default when absent.
pub fn parse_limit(
    raw: Option<&str>,
    default: usize,
    max: usize,
) -> Result<usize, ValidationError> {
    let raw = match raw {
        None | Some("") => return Ok(default),
        Some(raw) => raw,
    };

    let limit: i64 = raw.parse().map_err(|_| ValidationError::LimitWrongType {
        limit: raw.to_string(),
    })?;

    if limit < 0 {
        return Err(ValidationError::NegativeLimit {
            limit: raw.to_string(),
        });
    }
    if limit as usize > max {
        return Err(ValidationError::LimitTooHigh {
            limit: raw.to_string(),
            max,
        });
    }

    Ok(limit as usize)
}

/// Parses the `offset` parameter; absent means the first page.
pub fn parse_offset(raw: Option<&str>) -> Result<usize, ValidationError> {
    let raw = match raw {
        None | Some("") => return Ok(0),
        Some(raw) => raw,
    };

    let offset: i64 = raw.parse().map_err(|_| ValidationError::OffsetWrongType {
        offset: raw.to_string(),
    })?;

    if offset < 0 {
        return Err(ValidationError::NegativeOffset {
            offset: raw.to_string(),
        });
    }

    Ok(offset as usize)
}

/// Applies the window invariant once limit and offset are individually
/// valid: an offset at or past the maximum is an error, a window reaching
/// past the maximum is clamped silently.
pub fn finalize(limit: usize, offset: usize, max_results: usize) -> Result<Page, ValidationError> {
    if offset >= max_results {
        return Err(ValidationError::MaximumOffsetReached {
            offset,
            max: max_results,
        });
    }

    Ok(Page {
        limit: limit.min(max_results - offset),
        offset,
    })
}

/// Runs the page validators, pushing every failure on `errors`. The
/// returned fallback window keeps later validators running; it is never
/// queried when `errors` is non-empty.
pub fn validate_page(
    limit: Option<&str>,
    offset: Option<&str>,
    default_limit: usize,
    max_results: usize,
    errors: &mut Vec<ValidationError>,
) -> Page {
    let limit = parse_limit(limit, default_limit, max_results).unwrap_or_else(|error| {
        errors.push(error);
        default_limit
    });
    let offset = parse_offset(offset).unwrap_or_else(|error| {
        errors.push(error);
        0
    });

    finalize(limit, offset, max_results).unwrap_or_else(|error| {
        errors.push(error);
        Page { limit, offset: 0 }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_limit_falls_back_to_default() {
        assert_eq!(parse_limit(None, 20, 1000), Ok(20));
        assert_eq!(parse_limit(Some(""), 20, 1000), Ok(20));
    }

    #[test]
    fn limit_errors_are_distinct() {
        assert_eq!(
            parse_limit(Some("five"), 20, 1000),
            Err(ValidationError::LimitWrongType {
                limit: "five".to_string()
            })
        );
        assert_eq!(
            parse_limit(Some("-2"), 20, 1000),
            Err(ValidationError::NegativeLimit {
                limit: "-2".to_string()
            })
        );
        assert_eq!(
            parse_limit(Some("1001"), 20, 1000),
            Err(ValidationError::LimitTooHigh {
                limit: "1001".to_string(),
                max: 1000
            })
        );
    }

    #[test]
    fn offset_errors_are_distinct() {
        assert_eq!(parse_offset(None), Ok(0));
        assert_eq!(
            parse_offset(Some("ten")),
            Err(ValidationError::OffsetWrongType {
                offset: "ten".to_string()
            })
        );
        assert_eq!(
            parse_offset(Some("-1")),
            Err(ValidationError::NegativeOffset {
                offset: "-1".to_string()
            })
        );
    }

    #[test]
    fn window_is_clamped_to_the_maximum() {
        assert_eq!(
            finalize(20, 990, 1000),
            Ok(Page {
                limit: 10,
                offset: 990
            })
        );
        assert_eq!(
            finalize(20, 0, 1000),
            Ok(Page {
                limit: 20,
                offset: 0
            })
        );
    }

    #[test]
    fn offset_at_the_maximum_is_an_error() {
        for limit in [0, 1, 500] {
            assert_eq!(
                finalize(limit, 1000, 1000),
                Err(ValidationError::MaximumOffsetReached {
                    offset: 1000,
                    max: 1000
                })
            );
        }
    }

    #[test]
    fn validate_page_collects_both_failures() {
        let mut errors = Vec::new();
        validate_page(Some("x"), Some("y"), 20, 1000, &mut errors);
        assert_eq!(errors.len(), 2);
    }
}
