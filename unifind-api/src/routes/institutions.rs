use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    app_state::AppState,
    domain::{
        group_by_institution, paginate, parse_term, shape_hits, validate_page, InstitutionResults,
    },
    queries,
    routes::ErrorResponse,
};

#[derive(Debug, Deserialize)]
pub struct Params {
    q: Option<String>,
    limit: Option<String>,
    offset: Option<String>,
}

/// One engine round-trip fetches the whole grouping window; limit and
/// offset then page through the grouped institutions, not the raw hits.
#[instrument(name = "search_institution_courses", skip(app_state))]
pub async fn search_institution_courses(
    State(app_state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Json<InstitutionResults>, ErrorResponse> {
    let mut errors = Vec::new();

    let term = parse_term(params.q.as_deref()).unwrap_or_else(|error| {
        errors.push(error);
        String::new()
    });
    let page = validate_page(
        params.limit.as_deref(),
        params.offset.as_deref(),
        app_state.default_limit,
        app_state.max_results,
        &mut errors,
    );

    if !errors.is_empty() {
        return Err(ErrorResponse::bad_request(errors));
    }

    let body = queries::institution_courses_search(&term);
    let response = app_state.index.search(&body).await.map_err(|error| {
        tracing::error!("course index query failed: {error}");
        ErrorResponse::internal()
    })?;

    let total_results = response.hits.total;
    let shaped = shape_hits(response.hits.hits, app_state.show_scores);
    let items = paginate(group_by_institution(shaped), page);
    let number_of_items = items.len();

    Ok(Json(InstitutionResults {
        total_results,
        items,
        limit: page.limit,
        offset: page.offset,
        number_of_items,
    }))
}
