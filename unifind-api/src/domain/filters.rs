use std::str::FromStr;

use strum::{Display, EnumString};

use super::ValidationError;

/// Whitelisted course attributes a search can filter on. `FullTime` and
/// `PartTime` both constrain the mode field and are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Filter {
    DistanceLearning,
    HonoursAward,
    FoundationYear,
    SandwichYear,
    YearAbroad,
    FullTime,
    PartTime,
}

/// Parses the `filters` parameter: comma-separated names, a `-` prefix
/// asking for the attribute to be false. Returns the parsed set in
/// first-seen order together with every error the input produced; on a
/// repeated name the last polarity wins.
pub fn parse_filters(raw: &str) -> (Vec<(Filter, bool)>, Vec<ValidationError>) {
    let mut parsed: Vec<(Filter, bool)> = Vec::new();
    let mut invalid: Vec<&str> = Vec::new();
    let mut duplicates: Vec<Filter> = Vec::new();

    for token in raw.split(',') {
        let (name, wanted) = match token.strip_prefix('-') {
            Some(name) => (name, false),
            None => (token, true),
        };

        let Ok(filter) = Filter::from_str(name) else {
            invalid.push(token);
            continue;
        };

        match parsed.iter_mut().find(|(seen, _)| *seen == filter) {
            Some(entry) => {
                entry.1 = wanted;
                if !duplicates.contains(&filter) {
                    duplicates.push(filter);
                }
            }
            None => parsed.push((filter, wanted)),
        }
    }

    let mut errors = Vec::new();
    if !invalid.is_empty() {
        errors.push(ValidationError::InvalidFilters {
            filters: invalid.join(","),
        });
    }
    if !duplicates.is_empty() {
        errors.push(ValidationError::DuplicateFilters {
            filters: duplicates
                .iter()
                .map(Filter::to_string)
                .collect::<Vec<_>>()
                .join(","),
        });
    }

    let has = |mode: Filter| parsed.iter().any(|(filter, _)| *filter == mode);
    if has(Filter::FullTime) && has(Filter::PartTime) {
        errors.push(ValidationError::MultipleModes);
    }

    (parsed, errors)
}

/// Institution names are free text: lower-cased, split on commas, empty
/// entries dropped.
pub fn parse_institutions(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split(',')
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_prefix_sets_polarity() {
        let (parsed, errors) = parse_filters("distance_learning,-sandwich_year");
        assert!(errors.is_empty());
        assert_eq!(
            parsed,
            vec![
                (Filter::DistanceLearning, true),
                (Filter::SandwichYear, false)
            ]
        );
    }

    #[test]
    fn unknown_names_are_joined_into_one_error() {
        let (parsed, errors) = parse_filters("foo,-bar,year_abroad");
        assert_eq!(parsed, vec![(Filter::YearAbroad, true)]);
        assert_eq!(
            errors,
            vec![ValidationError::InvalidFilters {
                filters: "foo,-bar".to_string()
            }]
        );
    }

    #[test]
    fn duplicates_are_reported_once_and_last_polarity_wins() {
        let (parsed, errors) = parse_filters("full_time,-full_time,full_time");
        assert_eq!(parsed, vec![(Filter::FullTime, true)]);
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateFilters {
                filters: "full_time".to_string()
            }]
        );
    }

    #[test]
    fn both_modes_together_are_rejected() {
        let (_, errors) = parse_filters("full_time,part_time");
        assert_eq!(errors, vec![ValidationError::MultipleModes]);
        assert_eq!(
            errors[0].error_values()["filters"],
            "part_time,full_time".to_string()
        );
    }

    #[test]
    fn every_error_kind_can_fire_at_once() {
        let (parsed, errors) = parse_filters("full_time,part_time,part_time,nope");
        assert_eq!(
            parsed,
            vec![(Filter::FullTime, true), (Filter::PartTime, true)]
        );
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn institutions_are_lowercased_and_split() {
        assert_eq!(
            parse_institutions("University of Sheffield,DURHAM UNIVERSITY"),
            vec![
                "university of sheffield".to_string(),
                "durham university".to_string()
            ]
        );
        assert!(parse_institutions("").is_empty());
    }
}
