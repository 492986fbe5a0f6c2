use std::sync::Arc;

use crate::{config::Settings, search_index::CourseIndex};

#[derive(Clone)]
pub struct AppState {
    pub index: Arc<dyn CourseIndex>,
    pub default_limit: usize,
    pub max_results: usize,
    pub show_scores: bool,
}

impl AppState {
    pub fn new(index: Arc<dyn CourseIndex>, settings: &Settings) -> Self {
        Self {
            index,
            default_limit: settings.results.default_limit,
            max_results: settings.results.max_results,
            show_scores: settings.elasticsearch.show_scores,
        }
    }
}
