//! Encyclopedia lookup backed by the MediaWiki API.

use std::fmt;

use async_trait::async_trait;
use parley_core::config::KnowledgeConfig;
use parley_core::ParleyError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::http::{build_client, trim_base_url};

/// A short summary of the best article for a search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeSummary {
    /// The term the user asked about.
    pub term: String,
    /// Title of the article the summary comes from.
    pub title: String,
    pub summary: String,
}

impl fmt::Display for KnowledgeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "📚 Information about {}:\n\n{}\n\nSource: Wikipedia",
            self.term, self.summary
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupFailure {
    #[error("Multiple results found for '{term}'. Please be more specific.")]
    Ambiguous { term: String },
    #[error("Sorry, I couldn't find information about '{term}'.")]
    NotFound { term: String },
    #[error("Sorry, I couldn't search for '{term}' right now.")]
    Unavailable { term: String },
}

#[async_trait]
pub trait KnowledgeService: Send + Sync {
    async fn lookup(&self, term: &str) -> Result<KnowledgeSummary, LookupFailure>;
}

/// Searches Wikipedia, then summarises the intro of the top candidate.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    client: reqwest::Client,
    base_url: String,
    candidates: u32,
    sentences: usize,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
struct PagesResponse {
    query: Option<PagesQuery>,
}

#[derive(Debug, Deserialize)]
struct PagesQuery {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    title: String,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    extract: String,
    #[serde(default)]
    pageprops: Option<PageProps>,
}

#[derive(Debug, Deserialize)]
struct PageProps {
    disambiguation: Option<serde_json::Value>,
}

impl WikipediaClient {
    pub fn new(config: &KnowledgeConfig) -> Result<Self, ParleyError> {
        Ok(Self {
            client: build_client(config.timeout_secs)?,
            base_url: trim_base_url(&config.base_url),
            candidates: config.candidates.max(1),
            sentences: config.sentences.max(1),
        })
    }

    fn api_url(&self) -> String {
        format!("{}/w/api.php", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        params: &[(&str, &str)],
    ) -> Result<T, reqwest::Error> {
        self.client
            .get(self.api_url())
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    async fn search(&self, term: &str) -> Result<Vec<String>, reqwest::Error> {
        let limit = self.candidates.to_string();
        let response: SearchResponse = self
            .get_json(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", term),
                ("srlimit", limit.as_str()),
                ("srprop", ""),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .await?;
        Ok(response
            .query
            .map(|q| q.search.into_iter().map(|hit| hit.title).collect())
            .unwrap_or_default())
    }

    async fn intro(&self, title: &str) -> Result<Option<Page>, reqwest::Error> {
        let response: PagesResponse = self
            .get_json(&[
                ("action", "query"),
                ("prop", "extracts|pageprops"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("titles", title),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .await?;
        Ok(response.query.and_then(|q| q.pages.into_iter().next()))
    }

    async fn resolve(&self, term: &str) -> Result<KnowledgeSummary, LookupFailure> {
        let unavailable = |e: reqwest::Error| {
            warn!(error = %e, "Knowledge request failed");
            LookupFailure::Unavailable {
                term: term.to_string(),
            }
        };
        let not_found = || LookupFailure::NotFound {
            term: term.to_string(),
        };

        let titles = self.search(term).await.map_err(unavailable)?;
        let Some(first) = titles.first() else {
            return Err(not_found());
        };

        let page = self
            .intro(first)
            .await
            .map_err(unavailable)?
            .filter(|p| !p.missing)
            .ok_or_else(not_found)?;

        if page
            .pageprops
            .as_ref()
            .is_some_and(|props| props.disambiguation.is_some())
        {
            return Err(LookupFailure::Ambiguous {
                term: term.to_string(),
            });
        }

        let summary = first_sentences(&page.extract, self.sentences);
        if summary.is_empty() {
            return Err(not_found());
        }

        Ok(KnowledgeSummary {
            term: term.to_string(),
            title: page.title,
            summary,
        })
    }
}

#[async_trait]
impl KnowledgeService for WikipediaClient {
    async fn lookup(&self, term: &str) -> Result<KnowledgeSummary, LookupFailure> {
        debug!(term, "Looking up term");
        let result = self.resolve(term).await;
        if let Err(failure) = &result {
            warn!(term, reason = ?failure, "Knowledge lookup failed");
        }
        result
    }
}

/// The first `n` sentences of `text`, trimmed.
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace or the end of the
/// text. Text with fewer sentences is returned whole.
pub fn first_sentences(text: &str, n: usize) -> String {
    let text = text.trim();
    let mut seen = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let at_boundary = chars
            .peek()
            .map_or(true, |(_, next)| next.is_whitespace());
        if at_boundary {
            seen += 1;
            if seen >= n {
                return text[..i + c.len_utf8()].to_string();
            }
        }
    }
    text.to_string()
}
