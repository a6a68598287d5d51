//! The request boundary: validate, classify, extract, dispatch.

use std::sync::Arc;

use parley_core::config::ChatConfig;
use parley_core::Entities;
use parley_nlu::{EntityExtractor, TrainedModel};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, error};

use crate::dispatcher::{Dispatcher, Route};
use crate::error::ChatError;

/// Reply used when processing a request fails unexpectedly.
pub const APOLOGY: &str = "Sorry, something went wrong. Please try again.";

/// A reply plus what the pipeline decided on the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub text: String,
    /// `None` when the utterance never reached the classifier.
    pub intent: Option<String>,
    pub confidence: Option<f64>,
    pub entities: Entities,
    pub route: Route,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledgement: Option<String>,
}

impl Reply {
    fn unclassified(text: impl Into<String>, route: Route) -> Self {
        Self {
            text: text.into(),
            intent: None,
            confidence: None,
            entities: Entities::default(),
            route,
            acknowledgement: None,
        }
    }
}

/// Stateless chat front end; cheap to clone and share across handlers.
#[derive(Clone)]
pub struct ChatService {
    model: Arc<TrainedModel>,
    extractor: Arc<EntityExtractor>,
    dispatcher: Arc<Dispatcher>,
    max_message_length: usize,
    seed: Option<u64>,
}

impl ChatService {
    pub fn new(
        model: Arc<TrainedModel>,
        extractor: Arc<EntityExtractor>,
        dispatcher: Arc<Dispatcher>,
        config: &ChatConfig,
    ) -> Self {
        Self {
            model,
            extractor,
            dispatcher,
            max_message_length: config.max_message_length,
            seed: config.seed,
        }
    }

    pub fn model(&self) -> &TrainedModel {
        &self.model
    }

    /// Answer one utterance. Always returns a user-facing string.
    pub async fn respond(&self, utterance: &str) -> String {
        self.reply(utterance).await.text
    }

    /// Answer one utterance with the pipeline's intermediate results.
    ///
    /// Processing runs on its own task; if it panics, the panic is logged
    /// and the reply is [`APOLOGY`].
    pub async fn reply(&self, utterance: &str) -> Reply {
        let message = match self.validate(utterance) {
            Ok(message) => message.to_string(),
            Err(err) => {
                debug!(reason = %err, "Rejected message");
                return Reply::unclassified(err.user_message(), Route::Rejected);
            }
        };

        let this = self.clone();
        match tokio::spawn(async move { this.process(&message).await }).await {
            Ok(reply) => reply,
            Err(join_error) => {
                error!(error = %join_error, "Chat request failed");
                Reply::unclassified(APOLOGY, Route::Error)
            }
        }
    }

    /// Trim the utterance and check it against the length limit, counted in
    /// characters.
    pub fn validate<'a>(&self, utterance: &'a str) -> Result<&'a str, ChatError> {
        let message = utterance.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if message.chars().count() > self.max_message_length {
            return Err(ChatError::MessageTooLong(self.max_message_length));
        }
        Ok(message)
    }

    async fn process(&self, message: &str) -> Reply {
        let prediction = self.model.classify(message);
        let entities = self.extractor.extract(message);

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let outcome = self
            .dispatcher
            .dispatch(self.model.taxonomy(), &prediction.intent, &entities, &mut rng)
            .await;

        debug!(
            intent = %prediction.intent,
            confidence = prediction.confidence,
            route = %outcome.route,
            "Handled message"
        );

        Reply {
            text: outcome.text,
            intent: Some(prediction.intent),
            confidence: Some(prediction.confidence),
            entities,
            route: outcome.route,
            acknowledgement: outcome.acknowledgement,
        }
    }
}
