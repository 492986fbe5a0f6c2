use std::str::FromStr;

use strum::{Display, EnumString};

use super::ValidationError;

/// Countries a course search can be narrowed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Country {
    England,
    NorthernIreland,
    Scotland,
    Wales,
}

impl Country {
    pub const ALL: [Country; 4] = [
        Country::England,
        Country::NorthernIreland,
        Country::Scotland,
        Country::Wales,
    ];

    /// Registry code the index stores for this country.
    pub fn code(&self) -> &'static str {
        match self {
            Country::England => "XF",
            Country::NorthernIreland => "XG",
            Country::Scotland => "XH",
            Country::Wales => "XI",
        }
    }
}

/// Resolves the `countries` parameter to the effective inclusion list of
/// country codes. Any inclusion entries win outright; otherwise the
/// exclusions are complemented against the whole whitelist, in whitelist
/// order.
pub fn parse_countries(raw: &str) -> Result<Vec<&'static str>, ValidationError> {
    let mut include = Vec::new();
    let mut exclude = Vec::new();
    let mut invalid = Vec::new();

    for token in raw.split(',') {
        let (name, excluded) = match token.strip_prefix('-') {
            Some(name) => (name, true),
            None => (token, false),
        };

        let Ok(country) = Country::from_str(name) else {
            invalid.push(token);
            continue;
        };

        if excluded {
            exclude.push(country);
        } else {
            include.push(country.code());
        }
    }

    if !invalid.is_empty() {
        return Err(ValidationError::InvalidCountries {
            countries: invalid.join(","),
        });
    }

    if !include.is_empty() {
        return Ok(include);
    }

    Ok(Country::ALL
        .into_iter()
        .filter(|country| !exclude.contains(country))
        .map(|country| country.code())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusions_map_to_codes() {
        assert_eq!(parse_countries("england,wales"), Ok(vec!["XF", "XI"]));
    }

    #[test]
    fn exclusions_complement_the_whitelist() {
        assert_eq!(parse_countries("-england"), Ok(vec!["XG", "XH", "XI"]));
        assert_eq!(parse_countries("-scotland,-wales"), Ok(vec!["XF", "XG"]));
    }

    #[test]
    fn inclusions_take_precedence_over_exclusions() {
        assert_eq!(parse_countries("england,-wales"), Ok(vec!["XF"]));
    }

    #[test]
    fn excluding_everything_leaves_no_codes() {
        assert_eq!(
            parse_countries("-england,-northern_ireland,-scotland,-wales"),
            Ok(vec![])
        );
    }

    #[test]
    fn unknown_names_are_joined_into_one_error() {
        assert_eq!(
            parse_countries("narnia,england,-mordor"),
            Err(ValidationError::InvalidCountries {
                countries: "narnia,-mordor".to_string()
            })
        );
    }
}
