use axum::{http::Method, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, routes};

pub fn create(app_state: AppState) -> Router<()> {
    // Read-only search API, open to any origin.
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(["content-type".parse().unwrap()])
        .allow_origin(Any);

    Router::new()
        .route("/search", get(routes::search::search_all))
        .route("/search/courses", get(routes::courses::search_courses))
        .route(
            "/search/institution-courses",
            get(routes::institutions::search_institution_courses),
        )
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
