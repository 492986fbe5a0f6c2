use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    app_state::AppState,
    domain::{
        parse_countries, parse_filters, parse_institutions, parse_lengths, parse_term,
        shape_hits, validate_page, CourseResults,
    },
    queries,
    routes::ErrorResponse,
};

#[derive(Debug, Deserialize)]
pub struct Params {
    q: Option<String>,
    limit: Option<String>,
    offset: Option<String>,
    filters: Option<String>,
    countries: Option<String>,
    length_of_course: Option<String>,
    institutions: Option<String>,
}

/// Validation accumulates: every parameter is checked even after earlier
/// ones have failed, so one response carries everything to fix.
#[instrument(name = "search_courses", skip(app_state))]
pub async fn search_courses(
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

    let filters = match params.filters.as_deref() {
        Some(raw) if !raw.is_empty() => {
            let (parsed, filter_errors) = parse_filters(raw);
            errors.extend(filter_errors);
            parsed
        }
        _ => Vec::new(),
    };

    let countries = match params.countries.as_deref() {
        Some(raw) if !raw.is_empty() => parse_countries(raw).unwrap_or_else(|error| {
            errors.push(error);
            Vec::new()
        }),
        _ => Vec::new(),
    };

    let lengths = match params.length_of_course.as_deref() {
        Some(raw) if !raw.is_empty() => {
            let (parsed, length_errors) = parse_lengths(raw);
            errors.extend(length_errors);
            parsed
        }
        _ => Vec::new(),
    };

    let institutions = params
        .institutions
        .as_deref()
        .map(parse_institutions)
        .unwrap_or_default();

    if !errors.is_empty() {
        return Err(ErrorResponse::bad_request(errors));
    }

    let body = queries::courses_search(&term, page, &filters, &countries, &lengths, &institutions);
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
