use std::collections::BTreeMap;

use serde::Serialize;

/// Markers wrapped around matched terms in highlight fragments. Control
/// characters so they cannot collide with document text.
pub const PRE_TAG: &str = "\u{1}S";
pub const POST_TAG: &str = "\u{1}E";

/// Body of a `_search` request.
#[derive(Debug, Clone, Serialize)]
pub struct SearchBody {
    pub from: u64,
    pub size: u64,
    pub query: Query,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<SortClause>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Highlight>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Query {
    #[serde(rename = "bool")]
    pub bool_query: BoolQuery,
}

impl From<BoolQuery> for Query {
    fn from(bool_query: BoolQuery) -> Self {
        Self { bool_query }
    }
}

/// `should` clauses are OR-ed, `filter` clauses are AND-ed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BoolQuery {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub should: Vec<MatchClause>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<TermsClause>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_should_match: Option<u32>,
}

/// `{"match": {field: term}}`
#[derive(Debug, Clone, Serialize)]
pub struct MatchClause {
    #[serde(rename = "match")]
    match_field: BTreeMap<String, String>,
}

impl MatchClause {
    pub fn new(field: &str, term: &str) -> Self {
        Self {
            match_field: BTreeMap::from([(field.to_string(), term.to_string())]),
        }
    }
}

/// `{"terms": {field: [values...]}}`
#[derive(Debug, Clone, Serialize)]
pub struct TermsClause {
    terms: BTreeMap<String, Vec<String>>,
}

impl TermsClause {
    pub fn new(field: &str, values: Vec<String>) -> Self {
        Self {
            terms: BTreeMap::from([(field.to_string(), values)]),
        }
    }
}

/// `{field: {"order": "asc"}}`. Clause order is significant, so sorts are
/// carried as a list of single-field clauses.
#[derive(Debug, Clone, Serialize)]
pub struct SortClause(BTreeMap<String, SortOrder>);

impl SortClause {
    pub fn asc(field: &str) -> Self {
        Self(BTreeMap::from([(field.to_string(), SortOrder { order: Order::Asc })]))
    }

    pub fn desc(field: &str) -> Self {
        Self(BTreeMap::from([(field.to_string(), SortOrder { order: Order::Desc })]))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SortOrder {
    pub order: Order,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Serialize)]
pub struct Highlight {
    pub pre_tags: Vec<String>,
    pub post_tags: Vec<String>,
    pub fields: BTreeMap<String, HighlightField>,
}

impl Highlight {
    /// Highlight the given fields with the private marker pair.
    pub fn tagged(fields: &[&str]) -> Self {
        Self {
            pre_tags: vec![PRE_TAG.to_string()],
            post_tags: vec![POST_TAG.to_string()],
            fields: fields
                .iter()
                .map(|field| (field.to_string(), HighlightField {}))
                .collect(),
        }
    }
}

/// Serializes to `{}`; the engine takes per-field settings here, none of
/// which are used.
#[derive(Debug, Clone, Serialize)]
pub struct HighlightField {}
