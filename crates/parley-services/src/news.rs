//! Top-headlines lookup.

use std::fmt;

use async_trait::async_trait;
use parley_core::config::NewsConfig;
use parley_core::ParleyError;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::http::{build_client, trim_base_url};

/// Which headlines to ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlinesQuery {
    pub category: String,
    pub country: String,
    pub limit: u32,
}

impl HeadlinesQuery {
    pub fn from_config(config: &NewsConfig) -> Self {
        Self {
            category: config.category.clone(),
            country: config.country.clone(),
            limit: config.limit,
        }
    }
}

impl Default for HeadlinesQuery {
    fn default() -> Self {
        Self::from_config(&NewsConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub title: String,
    pub source: String,
}

/// A non-empty, numbered list of headlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headlines {
    pub articles: Vec<Headline>,
}

impl fmt::Display for Headlines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "📰 Latest Headlines:")?;
        for (i, article) in self.articles.iter().enumerate() {
            write!(
                f,
                "\n\n{}. {}\n   Source: {}",
                i + 1,
                article.title,
                article.source
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewsFailure {
    #[error("News API key not configured. Please set {env_var} in your environment variables.")]
    MissingApiKey { env_var: String },
    #[error("News API key was rejected. Please check {env_var}.")]
    InvalidApiKey { env_var: String },
    #[error("Sorry, I couldn't fetch the latest news right now.")]
    NoArticles,
    #[error("Sorry, I couldn't fetch the latest news right now. Please try again later.")]
    Unavailable,
}

#[async_trait]
pub trait NewsService: Send + Sync {
    async fn fetch_top_headlines(&self, query: &HeadlinesQuery) -> Result<Headlines, NewsFailure>;
}

/// NewsAPI `top-headlines` client.
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    api_key_env: String,
}

#[derive(Debug, Deserialize)]
struct TopHeadlines {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    title: Option<String>,
    source: Option<Source>,
}

#[derive(Debug, Deserialize)]
struct Source {
    name: Option<String>,
}

impl NewsApiClient {
    pub fn new(config: &NewsConfig) -> Result<Self, ParleyError> {
        Ok(Self {
            client: build_client(config.timeout_secs)?,
            base_url: trim_base_url(&config.base_url),
            api_key: config.resolve_api_key(),
            api_key_env: config.api_key_env.clone(),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    async fn request(&self, api_key: &str, query: &HeadlinesQuery) -> Result<Headlines, NewsFailure> {
        let page_size = query.limit.to_string();
        let response = self
            .client
            .get(format!("{}/v2/top-headlines", self.base_url))
            .header("X-Api-Key", api_key)
            .query(&[
                ("category", query.category.as_str()),
                ("country", query.country.as_str()),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "News request failed");
                NewsFailure::Unavailable
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(NewsFailure::InvalidApiKey {
                env_var: self.api_key_env.clone(),
            });
        }
        if !status.is_success() {
            warn!(%status, "News service returned an error");
            return Err(NewsFailure::Unavailable);
        }

        let body: TopHeadlines = response.json().await.map_err(|e| {
            warn!(error = %e, "News response could not be decoded");
            NewsFailure::Unavailable
        })?;

        let articles: Vec<Headline> = body
            .articles
            .into_iter()
            .filter_map(|a| {
                let title = a.title.filter(|t| !t.trim().is_empty())?;
                let source = a
                    .source
                    .and_then(|s| s.name)
                    .unwrap_or_else(|| "Unknown".to_string());
                Some(Headline { title, source })
            })
            .take(query.limit as usize)
            .collect();

        if articles.is_empty() {
            return Err(NewsFailure::NoArticles);
        }
        Ok(Headlines { articles })
    }
}

#[async_trait]
impl NewsService for NewsApiClient {
    async fn fetch_top_headlines(&self, query: &HeadlinesQuery) -> Result<Headlines, NewsFailure> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(NewsFailure::MissingApiKey {
                env_var: self.api_key_env.clone(),
            });
        };
        debug!(category = %query.category, country = %query.country, "Fetching headlines");
        let result = self.request(api_key, query).await;
        if let Err(failure) = &result {
            warn!(reason = ?failure, "Headline lookup failed");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    const BODY: &str = r#"{
        "status": "ok",
        "totalResults": 3,
        "articles": [
            {"source": {"id": null, "name": "Reuters"}, "title": "Markets rally"},
            {"source": {"id": "bbc-news", "name": "BBC News"}, "title": "Storm warning issued"},
            {"source": {"id": null, "name": "Nobody"}, "title": null}
        ]
    }"#;

    fn client(base_url: &str, api_key: Option<&str>) -> NewsApiClient {
        let config = NewsConfig {
            api_key: api_key.map(str::to_string),
            api_key_env: "PARLEY_TEST_UNSET_NEWS_KEY".into(),
            base_url: base_url.to_string(),
            ..NewsConfig::default()
        };
        NewsApiClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_headlines() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Regex("^/v2/top-headlines".into()))
            .match_header("x-api-key", "secret")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("category".into(), "general".into()),
                Matcher::UrlEncoded("country".into(), "us".into()),
                Matcher::UrlEncoded("pageSize".into(), "5".into()),
            ]))
            .with_status(200)
            .with_body(BODY)
            .create_async()
            .await;

        let headlines = client(&server.url(), Some("secret"))
            .fetch_top_headlines(&HeadlinesQuery::default())
            .await
            .unwrap();
        mock.assert_async().await;

        assert_eq!(headlines.articles.len(), 2);
        assert_eq!(
            headlines.to_string(),
            "📰 Latest Headlines:\n\n\
             1. Markets rally\n   Source: Reuters\n\n\
             2. Storm warning issued\n   Source: BBC News"
        );
    }

    #[tokio::test]
    async fn test_limit_is_applied() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", Matcher::Any)
            .with_status(200)
            .with_body(BODY)
            .create_async()
            .await;

        let query = HeadlinesQuery {
            limit: 1,
            ..HeadlinesQuery::default()
        };
        let headlines = client(&server.url(), Some("secret"))
            .fetch_top_headlines(&query)
            .await
            .unwrap();
        assert_eq!(headlines.articles.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_key_makes_no_request() {
        let mut server = Server::new_async().await;
        let mock = server.mock("GET", Matcher::Any).expect(0).create_async().await;

        let news = client(&server.url(), None);
        assert!(!news.has_api_key());
        assert!(client(&server.url(), Some("secret")).has_api_key());

        let failure = news
            .fetch_top_headlines(&HeadlinesQuery::default())
            .await
            .unwrap_err();
        mock.assert_async().await;
        assert!(matches!(failure, NewsFailure::MissingApiKey { .. }));
        assert!(failure.to_string().starts_with("News API key not configured."));
    }

    #[tokio::test]
    async fn test_empty_result() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", Matcher::Any)
            .with_status(200)
            .with_body(r#"{"status":"ok","totalResults":0,"articles":[]}"#)
            .create_async()
            .await;

        let failure = client(&server.url(), Some("secret"))
            .fetch_top_headlines(&HeadlinesQuery::default())
            .await
            .unwrap_err();
        assert_eq!(failure, NewsFailure::NoArticles);
        assert_eq!(
            failure.to_string(),
            "Sorry, I couldn't fetch the latest news right now."
        );
    }

    #[tokio::test]
    async fn test_rejected_key_and_server_error() {
        let mut server = Server::new_async().await;
        let rejected = server
            .mock("GET", Matcher::Any)
            .with_status(401)
            .with_body(r#"{"status":"error","code":"apiKeyInvalid"}"#)
            .create_async()
            .await;
        let failure = client(&server.url(), Some("wrong"))
            .fetch_top_headlines(&HeadlinesQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(failure, NewsFailure::InvalidApiKey { .. }));
        rejected.remove_async().await;

        server
            .mock("GET", Matcher::Any)
            .with_status(503)
            .create_async()
            .await;
        let failure = client(&server.url(), Some("secret"))
            .fetch_top_headlines(&HeadlinesQuery::default())
            .await
            .unwrap_err();
        assert_eq!(failure, NewsFailure::Unavailable);
    }
}
