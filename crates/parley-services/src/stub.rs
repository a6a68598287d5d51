//! In-process collaborators with canned answers and call counting.
//!
//! Used to exercise the chat pipeline and the HTTP API without network
//! access or API keys.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::knowledge::{KnowledgeService, KnowledgeSummary, LookupFailure};
use crate::news::{Headline, Headlines, HeadlinesQuery, NewsFailure, NewsService};
use crate::weather::{Units, WeatherFailure, WeatherReport, WeatherService};

/// Counts calls and remembers the last argument.
#[derive(Debug, Default)]
struct CallLog<A> {
    calls: AtomicUsize,
    last: Mutex<Option<A>>,
}

impl<A: Clone> CallLog<A> {
    fn record(&self, arg: A) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last.lock() {
            *last = Some(arg);
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last(&self) -> Option<A> {
        self.last.lock().ok().and_then(|last| last.clone())
    }
}

#[derive(Debug)]
pub struct StubWeather {
    result: Result<WeatherReport, WeatherFailure>,
    log: CallLog<String>,
}

impl StubWeather {
    pub fn returning(report: WeatherReport) -> Self {
        Self {
            result: Ok(report),
            log: CallLog::default(),
        }
    }

    pub fn failing(failure: WeatherFailure) -> Self {
        Self {
            result: Err(failure),
            log: CallLog::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.log.calls()
    }

    pub fn last_location(&self) -> Option<String> {
        self.log.last()
    }
}

impl Default for StubWeather {
    fn default() -> Self {
        Self::returning(WeatherReport {
            place: "Stubville".into(),
            condition: "clear sky".into(),
            temperature: 21.0,
            feels_like: 20.5,
            humidity: 40.0,
            wind_speed: 2.0,
            units: Units::Metric,
        })
    }
}

#[async_trait]
impl WeatherService for StubWeather {
    async fn fetch_weather(&self, location: &str) -> Result<WeatherReport, WeatherFailure> {
        self.log.record(location.to_string());
        self.result.clone()
    }
}

#[derive(Debug)]
pub struct StubNews {
    result: Result<Headlines, NewsFailure>,
    log: CallLog<HeadlinesQuery>,
}

impl StubNews {
    pub fn returning(headlines: Headlines) -> Self {
        Self {
            result: Ok(headlines),
            log: CallLog::default(),
        }
    }

    pub fn failing(failure: NewsFailure) -> Self {
        Self {
            result: Err(failure),
            log: CallLog::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.log.calls()
    }

    pub fn last_query(&self) -> Option<HeadlinesQuery> {
        self.log.last()
    }
}

impl Default for StubNews {
    fn default() -> Self {
        Self::returning(Headlines {
            articles: vec![Headline {
                title: "Nothing happened today".into(),
                source: "Stub Times".into(),
            }],
        })
    }
}

#[async_trait]
impl NewsService for StubNews {
    async fn fetch_top_headlines(&self, query: &HeadlinesQuery) -> Result<Headlines, NewsFailure> {
        self.log.record(query.clone());
        self.result.clone()
    }
}

/// Answers every term with the same summary text.
#[derive(Debug)]
pub struct StubKnowledge {
    result: Result<String, LookupFailure>,
    log: CallLog<String>,
}

impl StubKnowledge {
    pub fn returning(summary: impl Into<String>) -> Self {
        Self {
            result: Ok(summary.into()),
            log: CallLog::default(),
        }
    }

    pub fn failing(failure: LookupFailure) -> Self {
        Self {
            result: Err(failure),
            log: CallLog::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.log.calls()
    }

    pub fn last_term(&self) -> Option<String> {
        self.log.last()
    }
}

impl Default for StubKnowledge {
    fn default() -> Self {
        Self::returning("A stub summary.")
    }
}

#[async_trait]
impl KnowledgeService for StubKnowledge {
    async fn lookup(&self, term: &str) -> Result<KnowledgeSummary, LookupFailure> {
        self.log.record(term.to_string());
        self.result.clone().map(|summary| KnowledgeSummary {
            term: term.to_string(),
            title: term.to_string(),
            summary,
        })
    }
}
