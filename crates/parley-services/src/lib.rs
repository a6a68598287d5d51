//! Clients for the external information services the chat layer delegates to.
//!
//! Every collaborator exposes one operation that never errors in the `?`
//! sense: failures come back as values whose `Display` text is safe to show
//! the user.

pub mod http;
pub mod knowledge;
pub mod news;
pub mod stub;
pub mod weather;

pub use http::build_client;
pub use knowledge::{KnowledgeService, KnowledgeSummary, LookupFailure, WikipediaClient};
pub use news::{Headline, Headlines, HeadlinesQuery, NewsApiClient, NewsFailure, NewsService};
pub use stub::{StubKnowledge, StubNews, StubWeather};
pub use weather::{OpenWeatherClient, Units, WeatherFailure, WeatherReport, WeatherService};
