//! Uploaded-Document Storage
//!
//! Filesystem store for proof-of-ownership documents. References handed out
//! are opaque strings (random filenames); the workflow never interprets file
//! contents, only stores/resolves/streams them.

use std::path::{Path, PathBuf};

use rand::RngCore;
use thiserror::Error;

/// Accepted upload formats for ownership documents
const ACCEPTED_TYPES: &[(&str, &str)] = &[
    ("application/pdf", "pdf"),
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
];

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Unsupported document type: {0}")]
    UnsupportedType(String),

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Invalid document reference: {0}")]
    InvalidReference(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Map a content type to its file extension, if accepted
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    ACCEPTED_TYPES
        .iter()
        .find(|(mime, _)| content_type.eq_ignore_ascii_case(mime))
        .map(|(_, ext)| *ext)
}

/// Filesystem-backed document store
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Ensure the storage directory exists
    pub async fn init(&self) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Persist document bytes, returning an opaque reference
    pub async fn store(
        &self,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<String, StorageError> {
        let ext = extension_for(content_type)
            .ok_or_else(|| StorageError::UnsupportedType(content_type.to_string()))?;

        let mut name_bytes = [0u8; 16];
        rand::rngs::OsRng.fill_bytes(&mut name_bytes);
        let reference = format!("{}.{}", hex_encode(&name_bytes), ext);

        tokio::fs::write(self.root.join(&reference), bytes).await?;

        tracing::debug!(reference = %reference, size = bytes.len(), "Stored document");

        Ok(reference)
    }

    /// Load document bytes by reference
    pub async fn load(&self, reference: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.resolve(reference)?;

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(reference.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Best-effort content type for a stored reference (by extension)
    pub fn content_type_of(reference: &str) -> &'static str {
        let ext = Path::new(reference)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ACCEPTED_TYPES
            .iter()
            .find(|(_, e)| ext.eq_ignore_ascii_case(e))
            .map(|(mime, _)| *mime)
            .unwrap_or("application/octet-stream")
    }

    /// References must be bare filenames; reject anything path-like
    fn resolve(&self, reference: &str) -> Result<PathBuf, StorageError> {
        if reference.is_empty()
            || reference.contains('/')
            || reference.contains('\\')
            || reference.contains("..")
        {
            return Err(StorageError::InvalidReference(reference.to_string()));
        }
        Ok(self.root.join(reference))
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
