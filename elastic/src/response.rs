use std::collections::HashMap;

use serde::Deserialize;

/// Envelope of a `_search` response, generic over the indexed document.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse<T> {
    pub hits: Hits<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hits<T> {
    pub total: u64,
    pub hits: Vec<Hit<T>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hit<T> {
    #[serde(rename = "_score")]
    pub score: Option<f64>,
    #[serde(rename = "_source")]
    pub source: T,
    /// Highlight fragments keyed by the field names the query asked for.
    /// Absent when the query had no highlight section or nothing matched.
    #[serde(default)]
    pub highlight: HashMap<String, Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Course {
        title: String,
    }

    #[test]
    fn parses_hits_with_scores_and_highlights() {
        let raw = r#"{
            "took": 4,
            "timed_out": false,
            "hits": {
                "total": 2,
                "max_score": 1.7,
                "hits": [
                    {
                        "_score": 1.7,
                        "_source": {"title": "Economics"},
                        "highlight": {"doc.english_title": ["\u0001SEconomics\u0001E"]}
                    },
                    {
                        "_score": null,
                        "_source": {"title": "Econometrics"}
                    }
                ]
            }
        }"#;

        let response: SearchResponse<Course> = serde_json::from_str(raw).unwrap();
        assert_eq!(response.hits.total, 2);
        assert_eq!(response.hits.hits.len(), 2);

        let first = &response.hits.hits[0];
        assert_eq!(first.score, Some(1.7));
        assert_eq!(first.source.title, "Economics");
        assert_eq!(
            first.highlight["doc.english_title"],
            vec!["\u{1}SEconomics\u{1}E"]
        );

        let second = &response.hits.hits[1];
        assert_eq!(second.score, None);
        assert!(second.highlight.is_empty());
    }

    #[test]
    fn parses_empty_result() {
        let raw = r#"{"hits": {"total": 0, "hits": []}}"#;
        let response: SearchResponse<Course> = serde_json::from_str(raw).unwrap();
        assert_eq!(response.hits.total, 0);
        assert!(response.hits.hits.is_empty());
    }
}
