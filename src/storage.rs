//! Output storage for the rendered itinerary PDF.
//!
//! There is exactly one artifact, `itinerary.pdf` in the output directory,
//! replaced on every generation. Writers are serialised and each write goes
//! through a temporary file that is renamed over the target, so readers
//! never observe a half-written document.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use actix_web::web;
use log::info;
use parking_lot::RwLock;
use tempfile::NamedTempFile;
use thiserror::Error;
use tokio::sync::Mutex;

pub const PDF_FILENAME: &str = "itinerary.pdf";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no itinerary PDF has been generated yet")]
    NotGenerated,
    #[error("failed to write itinerary PDF: {0}")]
    Write(#[source] std::io::Error),
    #[error("blocking task failed: {0}")]
    Blocking(String),
}

pub struct OutputStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
    latest: RwLock<Option<PathBuf>>,
}

impl OutputStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
            latest: RwLock::new(None),
        }
    }

    /// Location of the single output file.
    pub fn pdf_path(&self) -> PathBuf {
        self.dir.join(PDF_FILENAME)
    }

    /// Replace the stored PDF with `pdf` and return its path.
    pub async fn save(&self, pdf: Vec<u8>) -> Result<PathBuf, StorageError> {
        let _guard = self.write_lock.lock().await;

        let dir = self.dir.clone();
        let target = self.pdf_path();
        let size = pdf.len();
        let written = web::block(move || write_atomically(&dir, &target, &pdf))
            .await
            .map_err(|e| StorageError::Blocking(e.to_string()))??;

        info!("Stored itinerary PDF ({} bytes) at {}", size, written.display());
        *self.latest.write() = Some(written.clone());
        Ok(written)
    }

    /// Path of the most recent PDF generated by this process.
    pub fn latest(&self) -> Result<PathBuf, StorageError> {
        self.latest.read().clone().ok_or(StorageError::NotGenerated)
    }
}

fn write_atomically(dir: &Path, target: &Path, pdf: &[u8]) -> Result<PathBuf, StorageError> {
    fs::create_dir_all(dir).map_err(StorageError::Write)?;

    let mut file = NamedTempFile::new_in(dir).map_err(StorageError::Write)?;
    file.write_all(pdf).map_err(StorageError::Write)?;
    file.as_file().sync_all().map_err(StorageError::Write)?;
    file.persist(target).map_err(|e| StorageError::Write(e.error))?;

    Ok(target.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_latest_before_any_save() {
        let dir = tempfile::tempdir().unwrap();
        let store = OutputStore::new(dir.path());
        assert!(matches!(store.latest(), Err(StorageError::NotGenerated)));
    }

    #[actix_web::test]
    async fn test_preexisting_file_is_not_served() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PDF_FILENAME), b"%PDF-stale").unwrap();

        let store = OutputStore::new(dir.path());
        assert!(matches!(store.latest(), Err(StorageError::NotGenerated)));
    }

    #[actix_web::test]
    async fn test_save_overwrites_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = OutputStore::new(dir.path());

        store.save(b"%PDF-first document, longer".to_vec()).await.unwrap();
        let path = store.save(b"%PDF-second".to_vec()).await.unwrap();

        assert_eq!(path, dir.path().join(PDF_FILENAME));
        assert_eq!(store.latest().unwrap(), path);
        assert_eq!(fs::read(&path).unwrap(), b"%PDF-second");

        let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[actix_web::test]
    async fn test_save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("pdf");
        let store = OutputStore::new(&nested);

        let path = store.save(b"%PDF-1".to_vec()).await.unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_never_expose_partial_documents() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(OutputStore::new(dir.path()));
        let payloads: Vec<Vec<u8>> = (0..16u8)
            .map(|i| {
                let mut pdf = format!("%PDF-{i:02}\n").into_bytes();
                pdf.resize(200 * 1024 + usize::from(i) * 1024, b'a' + i);
                pdf
            })
            .collect();

        let done = Arc::new(AtomicBool::new(false));
        let reader = {
            let path = store.pdf_path();
            let payloads = payloads.clone();
            let done = done.clone();
            std::thread::spawn(move || {
                let mut reads = 0usize;
                while !done.load(Ordering::SeqCst) || reads == 0 {
                    match fs::read(&path) {
                        Ok(bytes) => {
                            assert!(
                                payloads.contains(&bytes),
                                "read {} bytes that match no saved document",
                                bytes.len()
                            );
                            reads += 1;
                        }
                        Err(e) if e.kind() == ErrorKind::NotFound => {}
                        Err(e) => panic!("failed to read itinerary PDF: {e}"),
                    }
                }
                reads
            })
        };

        let saves: Vec<_> = payloads
            .iter()
            .cloned()
            .map(|pdf| {
                let store = store.clone();
                tokio::spawn(async move { store.save(pdf).await })
            })
            .collect();
        for save in saves {
            save.await.unwrap().unwrap();
        }

        done.store(true, Ordering::SeqCst);
        let reads = reader.join().unwrap();
        assert!(reads > 0);

        let last = fs::read(store.latest().unwrap()).unwrap();
        assert!(payloads.contains(&last));

        let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }
}
