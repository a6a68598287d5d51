//! Conversational front end for Parley.
//!
//! Validates utterances, runs them through the intent model and entity
//! extractor, and dispatches to a template reply or an external collaborator.

pub mod dispatcher;
pub mod error;
pub mod service;

pub use dispatcher::{Dispatcher, Outcome, Route, FALLBACK_RESPONSE, LOCATION_PROMPT, SEARCH_PROMPT};
pub use error::ChatError;
pub use service::{ChatService, Reply, APOLOGY};
