use async_trait::async_trait;

use crate::modules::media::application::ports::outgoing::FileStorage;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServeUploadError {
    #[error("File not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServedFile {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Reads back files kept by the local storage backend.
#[async_trait]
pub trait ServeUploadUseCase: Send + Sync {
    async fn execute(&self, key: &str) -> Result<ServedFile, ServeUploadError>;
}

pub struct ServeUploadService<S>
where
    S: FileStorage,
{
    storage: S,
}

impl<S> ServeUploadService<S>
where
    S: FileStorage,
{
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

fn content_type_for(key: &str) -> &'static str {
    let ext = key
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl<S> ServeUploadUseCase for ServeUploadService<S>
where
    S: FileStorage,
{
    async fn execute(&self, key: &str) -> Result<ServedFile, ServeUploadError> {
        let bytes = self
            .storage
            .read(key)
            .await
            .map_err(|e| ServeUploadError::Storage(e.to_string()))?
            .ok_or(ServeUploadError::NotFound)?;

        Ok(ServedFile {
            content_type: content_type_for(key),
            bytes,
        })
    }
}
