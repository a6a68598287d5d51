//! HTTP API for Parley: the browser chat page, health, taxonomy listing, and
//! the chat endpoint.

pub mod error;
pub mod handlers;
pub mod page;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
