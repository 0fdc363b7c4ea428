use std::sync::Arc;

use crate::config::AppConfig;
use crate::document::{DocumentRenderer, TypstRenderer};
use crate::itinerary::{GeminiClient, ItineraryModel, ModelError};
use crate::storage::OutputStore;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ItineraryModel>,
    pub renderer: Arc<dyn DocumentRenderer>,
    pub store: Arc<OutputStore>,
}

impl AppState {
    pub fn new(
        model: Arc<dyn ItineraryModel>,
        renderer: Arc<dyn DocumentRenderer>,
        store: OutputStore,
    ) -> Self {
        Self {
            model,
            renderer,
            store: Arc::new(store),
        }
    }

    /// Production wiring: Gemini client, Typst renderer, output directory
    /// from the configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, ModelError> {
        let model = GeminiClient::new(config.model.clone())?;
        let renderer = TypstRenderer::from_config(&config.document);
        let store = OutputStore::new(config.document.output_dir.clone());
        Ok(Self::new(Arc::new(model), Arc::new(renderer), store))
    }
}
