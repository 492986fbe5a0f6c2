use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    app_state::AppState,
    domain::{parse_term, shape_hits, validate_page, CourseResults},
    queries,
    routes::ErrorResponse,
};

/// Parameters arrive as raw strings so that type problems surface as our
/// validation errors instead of extractor rejections.
#[derive(Debug, Deserialize)]
pub struct Params {
    q: Option<String>,
    limit: Option<String>,
    offset: Option<String>,
}

#[instrument(name = "search_all", skip(app_state))]
pub async fn search_all(
    State(app_state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Json<CourseResults>, ErrorResponse> {
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

    let body = queries::basic_search(&term, page);
    let response = app_state.index.search(&body).await.map_err(|error| {
        tracing::error!("course index query failed: {error}");
        ErrorResponse::internal()
    })?;

    let total_results = response.hits.total;
    let items = shape_hits(response.hits.hits, app_state.show_scores);
    let number_of_items = items.len();

    Ok(Json(CourseResults {
        total_results,
        number_of_items,
        items,
        limit: page.limit,
        offset: page.offset,
    }))
}
