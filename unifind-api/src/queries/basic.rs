use elastic::query::{BoolQuery, Highlight, SearchBody, SortClause};

use super::{term_matches, SEARCH_FIELDS};
use crate::domain::{fields, Page};

/// Unfiltered course search: the term against every searchable field,
/// best scores first.
pub fn basic_search(term: &str, page: Page) -> SearchBody {
    SearchBody {
        from: page.offset as u64,
        size: page.limit as u64,
        query: BoolQuery {
            should: term_matches(term),
            filter: Vec::new(),
            minimum_should_match: Some(1),
        }
        .into(),
        sort: vec![SortClause::desc(fields::SCORE)],
        highlight: Some(Highlight::tagged(&SEARCH_FIELDS)),
    }
}
