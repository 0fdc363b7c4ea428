//! Typst rendering engine.
//!
//! Handles the low-level details of writing Typst source to a temporary
//! directory, invoking the compiler, and reading back the output PDF.

use std::fs;
use std::process::{Command, Stdio};

use log::{debug, error};
use tempfile::{tempdir, TempDir};

use super::DocumentError;

const SOURCE_FILENAME: &str = "itinerary.typ";
const OUTPUT_FILENAME: &str = "itinerary.pdf";

/// Engine for compiling Typst source to PDF through the `typst` CLI.
#[derive(Debug, Clone)]
pub struct TypstRenderEngine {
    typst_bin: String,
}

impl Default for TypstRenderEngine {
    fn default() -> Self {
        Self::new("typst")
    }
}

impl TypstRenderEngine {
    pub fn new(typst_bin: impl Into<String>) -> Self {
        Self {
            typst_bin: typst_bin.into(),
        }
    }

    /// Compile a complete Typst source string and return the PDF bytes.
    pub fn compile(&self, typst_source: &str) -> Result<Vec<u8>, DocumentError> {
        let temp_dir = tempdir().map_err(DocumentError::TempDir)?;
        let typ_path = temp_dir.path().join(SOURCE_FILENAME);

        fs::write(&typ_path, typst_source).map_err(DocumentError::WriteSource)?;

        self.compile_in(&temp_dir)
    }

    fn compile_in(&self, temp_dir: &TempDir) -> Result<Vec<u8>, DocumentError> {
        let typ_path = temp_dir.path().join(SOURCE_FILENAME);
        let output_path = temp_dir.path().join(OUTPUT_FILENAME);

        debug!("Compiling {} with {}", typ_path.display(), self.typst_bin);
        let output = Command::new(&self.typst_bin)
            .arg("compile")
            .arg(&typ_path)
            .arg(&output_path)
            .current_dir(temp_dir.path())
            .stdin(Stdio::null())
            .output()
            .map_err(DocumentError::TypstIo)?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            error!(
                "Typst exited with status {}: {}",
                code,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Err(DocumentError::TypstExit(code));
        }

        fs::read(&output_path).map_err(DocumentError::ReadPdf)
    }
}
