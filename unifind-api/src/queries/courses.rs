use elastic::query::{BoolQuery, Highlight, SearchBody, SortClause, TermsClause};

use super::{term_matches, SEARCH_FIELDS};
use crate::domain::{fields, Filter, Page};

/// Filtered course search: the term against every searchable field plus a
/// terms filter per requested attribute, institution name ascending then
/// best score first.
pub fn courses_search(
    term: &str,
    page: Page,
    filters: &[(Filter, bool)],
    countries: &[&'static str],
    lengths: &[u8],
    institutions: &[String],
) -> SearchBody {
    let mut filter_clauses: Vec<TermsClause> = filters
        .iter()
        .map(|&(filter, wanted)| filter_terms(filter, wanted))
        .collect();

    if !countries.is_empty() {
        filter_clauses.push(TermsClause::new(
            fields::COUNTRY_CODE,
            countries.iter().map(|code| code.to_string()).collect(),
        ));
    }
    if !lengths.is_empty() {
        filter_clauses.push(TermsClause::new(
            fields::LENGTH_OF_COURSE,
            lengths.iter().map(u8::to_string).collect(),
        ));
    }
    if !institutions.is_empty() {
        filter_clauses.push(TermsClause::new(
            fields::INSTITUTION_UKPRN_NAME,
            institutions.to_vec(),
        ));
    }

    SearchBody {
        from: page.offset as u64,
        size: page.limit as u64,
        query: BoolQuery {
            should: term_matches(term),
            filter: filter_clauses,
            minimum_should_match: Some(1),
        }
        .into(),
        sort: vec![
            SortClause::asc(fields::SORT_NAME),
            SortClause::desc(fields::SCORE),
        ],
        highlight: Some(Highlight::tagged(&SEARCH_FIELDS)),
    }
}

/// Indexed value sets per attribute. Availability fields code
/// 0 = not offered, 1 = optional, 2 = compulsory; distance learning codes
/// 0 = campus only, 1 = distance only, 2 = either; honours is a plain
/// 0/1 flag; mode codes 1 = full-time, 2 = part-time, 3 = both.
fn filter_terms(filter: Filter, wanted: bool) -> TermsClause {
    let (field, values): (&str, &[&str]) = match (filter, wanted) {
        (Filter::DistanceLearning, true) => (fields::DISTANCE_LEARNING, &["1", "2"]),
        (Filter::DistanceLearning, false) => (fields::DISTANCE_LEARNING, &["0", "2"]),
        (Filter::HonoursAward, true) => (fields::HONOURS_AWARD, &["1"]),
        (Filter::HonoursAward, false) => (fields::HONOURS_AWARD, &["0"]),
        (Filter::FoundationYear, true) => (fields::FOUNDATION_YEAR, &["1", "2"]),
        (Filter::FoundationYear, false) => (fields::FOUNDATION_YEAR, &["0", "1"]),
        (Filter::SandwichYear, true) => (fields::SANDWICH_YEAR, &["1", "2"]),
        (Filter::SandwichYear, false) => (fields::SANDWICH_YEAR, &["0", "1"]),
        (Filter::YearAbroad, true) => (fields::YEAR_ABROAD, &["1", "2"]),
        (Filter::YearAbroad, false) => (fields::YEAR_ABROAD, &["0", "1"]),
        (Filter::FullTime, true) => (fields::MODE, &["1", "3"]),
        (Filter::FullTime, false) => (fields::MODE, &["2"]),
        (Filter::PartTime, true) => (fields::MODE, &["2", "3"]),
        (Filter::PartTime, false) => (fields::MODE, &["1"]),
    };

    TermsClause::new(field, values.iter().map(|value| value.to_string()).collect())
}
