//! Maps a classified intent and its entities to a reply.

use std::fmt;
use std::sync::Arc;

use parley_core::{Entities, EntityKind};
use parley_nlu::taxonomy::{self, Intent};
use parley_services::{HeadlinesQuery, KnowledgeService, NewsService, WeatherService};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

pub const LOCATION_PROMPT: &str =
    "Please specify a location for the weather query (e.g., 'weather in London').";
pub const SEARCH_PROMPT: &str =
    "Please specify what you'd like me to search for (e.g., 'tell me about Python programming').";
pub const FALLBACK_RESPONSE: &str =
    "I'm sorry, I didn't understand that. Try asking for help to see what I can do!";

/// How a reply was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// One of the intent's templates.
    Template,
    /// A fixed prompt asking for a missing entity.
    Prompt,
    Weather,
    News,
    Knowledge,
    /// The label matched no known intent.
    Fallback,
    /// The utterance failed input validation.
    Rejected,
    /// Processing failed unexpectedly.
    Error,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Template => "template",
            Route::Prompt => "prompt",
            Route::Weather => "weather",
            Route::News => "news",
            Route::Knowledge => "knowledge",
            Route::Fallback => "fallback",
            Route::Rejected => "rejected",
            Route::Error => "error",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub text: String,
    pub route: Route,
    /// Rendered template naming the entity a collaborator was called with.
    pub acknowledgement: Option<String>,
}

impl Outcome {
    fn plain(text: impl Into<String>, route: Route) -> Self {
        Self {
            text: text.into(),
            route,
            acknowledgement: None,
        }
    }
}

/// Decision table from intent to reply. Holds no per-request state; the
/// randomness source is passed in by the caller.
pub struct Dispatcher {
    weather: Arc<dyn WeatherService>,
    news: Arc<dyn NewsService>,
    knowledge: Arc<dyn KnowledgeService>,
    headlines: HeadlinesQuery,
}

impl Dispatcher {
    pub fn new(
        weather: Arc<dyn WeatherService>,
        news: Arc<dyn NewsService>,
        knowledge: Arc<dyn KnowledgeService>,
        headlines: HeadlinesQuery,
    ) -> Self {
        Self {
            weather,
            news,
            knowledge,
            headlines,
        }
    }

    /// Produce the reply for `label`. Makes at most one collaborator call and
    /// never fails: collaborator failures become their user-facing text.
    pub async fn dispatch<R: Rng + ?Sized>(
        &self,
        taxonomy: &'static [Intent],
        label: &str,
        entities: &Entities,
        rng: &mut R,
    ) -> Outcome {
        let Some(intent) = taxonomy::find(taxonomy, label) else {
            return Outcome::plain(FALLBACK_RESPONSE, Route::Fallback);
        };

        match intent.name {
            "weather" => {
                let Some(location) = entities.get(EntityKind::Location) else {
                    return Outcome::plain(LOCATION_PROMPT, Route::Prompt);
                };
                let acknowledgement = acknowledge(intent, location, rng);
                let text = match self.weather.fetch_weather(location).await {
                    Ok(report) => report.to_string(),
                    Err(failure) => failure.to_string(),
                };
                Outcome {
                    text,
                    route: Route::Weather,
                    acknowledgement,
                }
            }
            "search" => {
                let Some(term) = entities.get(EntityKind::SearchTerm) else {
                    return Outcome::plain(SEARCH_PROMPT, Route::Prompt);
                };
                let acknowledgement = acknowledge(intent, term, rng);
                let text = match self.knowledge.lookup(term).await {
                    Ok(summary) => summary.to_string(),
                    Err(failure) => failure.to_string(),
                };
                Outcome {
                    text,
                    route: Route::Knowledge,
                    acknowledgement,
                }
            }
            "news" => {
                let text = match self.news.fetch_top_headlines(&self.headlines).await {
                    Ok(headlines) => headlines.to_string(),
                    Err(failure) => failure.to_string(),
                };
                Outcome::plain(text, Route::News)
            }
            _ => match intent.responses.choose(rng) {
                Some(template) => Outcome::plain(Intent::render(template, None), Route::Template),
                None => Outcome::plain(FALLBACK_RESPONSE, Route::Fallback),
            },
        }
    }
}

fn acknowledge<R: Rng + ?Sized>(intent: &Intent, entity: &str, rng: &mut R) -> Option<String> {
    intent
        .responses
        .choose(rng)
        .map(|template| Intent::render(template, Some(entity)))
}
