#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use itinerary_pdf_server::document::{DocumentError, DocumentRenderer};
use itinerary_pdf_server::itinerary::{ItineraryModel, ModelError};
use itinerary_pdf_server::storage::OutputStore;
use itinerary_pdf_server::AppState;
use tempfile::TempDir;

/// Mock model replying with queued completions and recording every prompt.
pub struct MockModel {
    replies: Mutex<VecDeque<Result<String, ModelError>>>,
    pub prompts: Mutex<Vec<String>>,
}

impl Default for MockModel {
    fn default() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

impl MockModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: &str) -> Self {
        self.replies.lock().unwrap().push_back(Ok(text.to_string()));
        self
    }

    pub fn fail(self, err: ModelError) -> Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl ItineraryModel for MockModel {
    async fn complete(&self, prompt: &str) -> Result<String, ModelError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ModelError::EmptyCompletion))
    }
}

/// Renderer that produces a fake PDF embedding the itinerary text.
pub struct MockRenderer {
    pub fail: bool,
}

impl DocumentRenderer for MockRenderer {
    fn render(&self, itinerary_text: &str) -> Result<Vec<u8>, DocumentError> {
        if self.fail {
            return Err(DocumentError::TypstExit(1));
        }
        Ok(format!("%PDF-mock\n{itinerary_text}").into_bytes())
    }
}

/// Build an AppState over a fresh temporary output directory.
pub fn setup_test_app_state(model: Arc<MockModel>, renderer: MockRenderer) -> (AppState, TempDir) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let state = AppState::new(model, Arc::new(renderer), OutputStore::new(dir.path()));
    (state, dir)
}
