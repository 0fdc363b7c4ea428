//! Document module - turns itinerary text into a paginated PDF.
//!
//! - `lines` - currency clean-up and per-line classification
//! - `template` - Typst source with the fixed header and footer
//! - `engine` - invokes the Typst compiler
//! - `renderer` - the [`DocumentRenderer`] seam used by the HTTP layer

pub mod engine;
pub mod lines;
pub mod renderer;
pub mod template;

pub use engine::TypstRenderEngine;
pub use lines::{classify_line, classify_lines, normalize_currency, ItineraryLine, LineKind};
pub use renderer::{DocumentRenderer, TypstRenderer};

use thiserror::Error;

/// Errors that can occur during document rendering.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error("failed to write Typst source: {0}")]
    WriteSource(#[source] std::io::Error),
    #[error("Typst CLI execution failed: {0}")]
    TypstIo(#[source] std::io::Error),
    #[error("Typst CLI exited with status {0}")]
    TypstExit(i32),
    #[error("failed to read generated PDF: {0}")]
    ReadPdf(#[source] std::io::Error),
    #[error("rendering task failed: {0}")]
    Blocking(String),
}
