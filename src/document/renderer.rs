use super::engine::TypstRenderEngine;
use super::lines::classify_lines;
use super::template::render_source;
use super::DocumentError;
use crate::config::DocumentConfig;

/// Turns itinerary text into PDF bytes.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, itinerary_text: &str) -> Result<Vec<u8>, DocumentError>;
}

/// Renderer backed by the Typst CLI.
#[derive(Debug, Clone)]
pub struct TypstRenderer {
    title: String,
    engine: TypstRenderEngine,
}

impl TypstRenderer {
    pub fn new(title: impl Into<String>, engine: TypstRenderEngine) -> Self {
        Self {
            title: title.into(),
            engine,
        }
    }

    pub fn from_config(config: &DocumentConfig) -> Self {
        Self::new(
            config.title.clone(),
            TypstRenderEngine::new(config.typst_bin.clone()),
        )
    }

    /// Typst source for `itinerary_text`, without compiling it.
    pub fn source_for(&self, itinerary_text: &str) -> String {
        render_source(&self.title, &classify_lines(itinerary_text))
    }
}

impl DocumentRenderer for TypstRenderer {
    fn render(&self, itinerary_text: &str) -> Result<Vec<u8>, DocumentError> {
        self.engine.compile(&self.source_for(itinerary_text))
    }
}
