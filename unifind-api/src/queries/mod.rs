mod basic;
mod courses;
mod institutions;

pub use basic::*;
pub use courses::*;
pub use institutions::*;

use elastic::query::MatchClause;

use crate::domain::fields;

/// Fields a free-text term is matched and highlighted against.
const SEARCH_FIELDS: [&str; 4] = [
    fields::KIS_COURSE_ID,
    fields::ENGLISH_TITLE,
    fields::WELSH_TITLE,
    fields::INSTITUTION_PUBLIC_NAME,
];

fn term_matches(term: &str) -> Vec<MatchClause> {
    SEARCH_FIELDS
        .iter()
        .map(|field| MatchClause::new(field, term))
        .collect()
}
