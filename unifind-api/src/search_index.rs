use async_trait::async_trait;
use elastic::{query::SearchBody, response::SearchResponse, ElasticClient, ElasticFetchError};

use crate::domain::CourseSource;

/// The course index as the route handlers see it. The seam keeps handlers
/// testable without a live engine.
#[async_trait]
pub trait CourseIndex: Send + Sync {
    async fn search(
        &self,
        body: &SearchBody,
    ) -> Result<SearchResponse<CourseSource>, ElasticFetchError>;
}

pub struct ElasticCourseIndex {
    client: ElasticClient,
    index: String,
}

impl ElasticCourseIndex {
    pub fn new(client: ElasticClient, index: String) -> Self {
        Self { client, index }
    }
}

#[async_trait]
impl CourseIndex for ElasticCourseIndex {
    async fn search(
        &self,
        body: &SearchBody,
    ) -> Result<SearchResponse<CourseSource>, ElasticFetchError> {
        self.client.search(&self.index, body).await
    }
}
