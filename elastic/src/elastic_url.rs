#[derive(Debug, Clone)]
pub struct ElasticUrl(String);

impl AsRef<str> for ElasticUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElasticUrl {
    fn from(url: &str) -> Self {
        Self(url.trim_end_matches('/').to_string())
    }
}

impl ElasticUrl {
    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_path_joins_with_single_slash() {
        let url = ElasticUrl::from("http://localhost:9200/");
        assert_eq!(url.append_path("/courses").as_ref(), "http://localhost:9200/courses");
        assert_eq!(url.append_path("courses").as_ref(), "http://localhost:9200/courses");
    }

    #[test]
    fn append_path_chains() {
        let url = ElasticUrl::from("http://localhost:9200");
        let search = url.append_path("courses").append_path("_search");
        assert_eq!(search.as_ref(), "http://localhost:9200/courses/_search");
    }
}
