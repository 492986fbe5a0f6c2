use super::ValidationError;

/// Parses the `length_of_course` parameter: comma-separated years in
/// `[1,7]`. Tokens that are not integers and tokens out of range are
/// reported as separate errors, both possibly at once; in-range values are
/// kept regardless.
pub fn parse_lengths(raw: &str) -> (Vec<u8>, Vec<ValidationError>) {
    let mut lengths = Vec::new();
    let mut wrong_type: Vec<&str> = Vec::new();
    let mut out_of_range: Vec<&str> = Vec::new();

    for token in raw.split(',') {
        match token.parse::<i64>() {
            Err(_) => wrong_type.push(token),
            Ok(length) if !(1..=7).contains(&length) => out_of_range.push(token),
            Ok(length) => lengths.push(length as u8),
        }
    }

    let mut errors = Vec::new();
    if !wrong_type.is_empty() {
        errors.push(ValidationError::LengthOfCourseWrongType {
            length_of_course: wrong_type.join(","),
        });
    }
    if !out_of_range.is_empty() {
        errors.push(ValidationError::LengthOfCourseOutOfRange {
            length_of_course: out_of_range.join(","),
        });
    }

    (lengths, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_values_are_kept() {
        let (lengths, errors) = parse_lengths("1,4,7");
        assert_eq!(lengths, vec![1, 4, 7]);
        assert!(errors.is_empty());
    }

    #[test]
    fn both_error_kinds_fire_together() {
        let (lengths, errors) = parse_lengths("0,8,3");
        assert_eq!(lengths, vec![3]);
        assert_eq!(
            errors,
            vec![ValidationError::LengthOfCourseOutOfRange {
                length_of_course: "0,8".to_string()
            }]
        );

        let (lengths, errors) = parse_lengths("two,9,5");
        assert_eq!(lengths, vec![5]);
        assert_eq!(
            errors,
            vec![
                ValidationError::LengthOfCourseWrongType {
                    length_of_course: "two".to_string()
                },
                ValidationError::LengthOfCourseOutOfRange {
                    length_of_course: "9".to_string()
                },
            ]
        );
    }
}
