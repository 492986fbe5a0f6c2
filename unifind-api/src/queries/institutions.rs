use elastic::query::{BoolQuery, MatchClause, SearchBody, SortClause};

use crate::domain::fields;

/// How many course hits a grouping query pulls in one request. Grouping
/// happens after the fetch, so the window has to cover every hit the term
/// can produce; the indexed corpus stays well under this.
pub const GROUPING_WINDOW: u64 = 3500;

/// Course search for grouping by institution: title matches only, no
/// highlighting, the whole window in one fetch, institution name
/// ascending so groups come out alphabetically. Pagination applies to the
/// groups afterwards, not here.
pub fn institution_courses_search(term: &str) -> SearchBody {
    SearchBody {
        from: 0,
        size: GROUPING_WINDOW,
        query: BoolQuery {
            should: vec![
                MatchClause::new(fields::ENGLISH_TITLE, term),
                MatchClause::new(fields::WELSH_TITLE, term),
            ],
            filter: Vec::new(),
            minimum_should_match: Some(1),
        }
        .into(),
        sort: vec![
            SortClause::asc(fields::SORT_NAME),
            SortClause::desc(fields::SCORE),
        ],
        highlight: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fetches_the_whole_window_sorted_by_institution() {
        let body = institution_courses_search("physics");
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["from"], 0);
        assert_eq!(value["size"], 3500);
        assert_eq!(
            value["query"]["bool"]["should"],
            json!([
                {"match": {"doc.english_title": "physics"}},
                {"match": {"doc.welsh_title": "physics"}},
            ])
        );
        assert_eq!(value["query"]["bool"]["minimum_should_match"], 1);
        assert_eq!(
            value["sort"],
            json!([
                {"doc.institution_name": {"order": "asc"}},
                {"_score": {"order": "desc"}},
            ])
        );
        assert!(value.get("highlight").is_none());
    }
}
