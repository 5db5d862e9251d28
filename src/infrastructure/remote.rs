//! HTTP client for the placeholder quote server.
//!
//! The remote source is a generic post list with no native category
//! concept: the `title` field of each record becomes the quote text and the
//! category is fixed to [`SERVER_CATEGORY`]. Pushes go out as post bodies
//! whose response is never inspected.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Quote, Result, SyncConfig, SERVER_CATEGORY};

/// Shape of a record on the remote read endpoint. Extra fields are ignored.
#[derive(Debug, Deserialize)]
pub struct RemotePost {
    /// Title-like text field; becomes the quote text.
    pub title: String,
}

/// Body sent to the remote write endpoint.
#[derive(Debug, Serialize)]
struct PushBody<'a> {
    title: &'a str,
    body: &'a str,
}

/// Client for the remote read and write endpoints.
pub struct RemoteClient {
    http: reqwest::Client,
    server_url: String,
    fetch_limit: usize,
}

impl RemoteClient {
    /// Build a client from the sync configuration.
    ///
    /// # Errors
    /// Returns error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &SyncConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("quotekeeper/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(AppError::network)?;

        Ok(Self {
            http,
            server_url: config.server_url.trim_end_matches('/').to_string(),
            fetch_limit: config.fetch_limit,
        })
    }

    /// Fetch the remote snapshot and map it into local quote shape.
    ///
    /// # Errors
    /// Returns `AppError::Network` when the request fails, the server
    /// responds with an error status, or the body is not the expected list
    /// shape.
    pub async fn fetch_quotes(&self) -> Result<Vec<Quote>> {
        let url = format!("{}/posts?_limit={}", self.server_url, self.fetch_limit);

        let posts = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(AppError::network)?
            .error_for_status()
            .map_err(AppError::network)?
            .json::<Vec<RemotePost>>()
            .await
            .map_err(AppError::network)?;

        tracing::debug!(count = posts.len(), "Fetched remote posts");

        Ok(map_posts(posts))
    }

    /// Send one quote to the remote sink. The response body is ignored.
    ///
    /// # Errors
    /// Returns `AppError::Network` when the request fails.
    pub async fn push_quote(&self, quote: &Quote) -> Result<()> {
        let url = format!("{}/posts", self.server_url);

        self.http
            .post(&url)
            .json(&PushBody {
                title: &quote.text,
                body: &quote.category,
            })
            .send()
            .await
            .map_err(AppError::network)?
            .error_for_status()
            .map_err(AppError::network)?;

        Ok(())
    }
}

/// Map remote records into local quotes under the fixed server category.
#[must_use]
pub fn map_posts(posts: Vec<RemotePost>) -> Vec<Quote> {
    posts
        .into_iter()
        .map(|p| Quote::new(p.title, SERVER_CATEGORY))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_post_ignores_extra_fields() {
        let json = r#"[{"userId":1,"id":1,"title":"Stay curious.","body":"x"}]"#;
        let posts: Vec<RemotePost> = serde_json::from_str(json).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Stay curious.");
    }

    #[test]
    fn test_non_list_body_is_rejected() {
        let json = r#"{"title":"Stay curious."}"#;
        assert!(serde_json::from_str::<Vec<RemotePost>>(json).is_err());
    }

    #[test]
    fn test_map_posts_fixes_category() {
        let quotes = map_posts(vec![RemotePost {
            title: "Stay curious.".to_string(),
        }]);
        assert_eq!(quotes, vec![Quote::new("Stay curious.", "Server")]);
    }
}
