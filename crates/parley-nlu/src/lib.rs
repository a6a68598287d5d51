pub mod classifier;
pub mod entity;
pub mod error;
pub mod gazetteer;
pub mod model;
pub mod recognizer;
pub mod resources;
pub mod taxonomy;
pub mod text;
pub mod vectorizer;

pub use classifier::Prediction;
pub use entity::EntityExtractor;
pub use error::{NluError, Result};
pub use model::TrainedModel;
pub use recognizer::{EntitySpan, GazetteerRecognizer, NamedEntityRecognizer};
pub use taxonomy::{Intent, INTENTS};
