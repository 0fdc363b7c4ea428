//! Itinerary module - trip requests, prompt construction, the model client and
//! the HTTP handlers that tie them to the document renderer.

pub mod client;
pub mod duration;
pub mod handlers;
pub mod models;
pub mod prompt;

pub use client::{generate_itinerary, strip_markdown, GeminiClient, ItineraryModel, ModelError};
pub use duration::calculate_duration;
pub use models::{ItineraryResponse, TripRequest};
pub use prompt::build_prompt;

use thiserror::Error;

use crate::document::DocumentError;
use crate::storage::StorageError;

/// Everything that can fail while serving a generation request.
#[derive(Debug, Error)]
pub enum ItineraryError {
    #[error("invalid {field} '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
