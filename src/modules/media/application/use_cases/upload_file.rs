use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::media::application::domain::entities::{
    UploadInput, UploadRejection, UploadedFile, ValidatedUpload,
};
use crate::modules::media::application::domain::upload_policy::UploadKind;
use crate::modules::media::application::ports::outgoing::{FileStorage, FileStorageError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadFileError {
    #[error(transparent)]
    Rejected(#[from] UploadRejection),

    #[error("Storage error: {0}")]
    Storage(#[from] FileStorageError),
}

/// Unlike content writes, uploads are awaited: the caller needs the URL.
#[async_trait]
pub trait UploadFileUseCase: Send + Sync {
    async fn execute(
        &self,
        kind: UploadKind,
        input: UploadInput,
    ) -> Result<UploadedFile, UploadFileError>;
}

pub struct UploadFileService<S>
where
    S: FileStorage,
{
    storage: S,
}

impl<S> UploadFileService<S>
where
    S: FileStorage,
{
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S> UploadFileUseCase for UploadFileService<S>
where
    S: FileStorage,
{
    async fn execute(
        &self,
        kind: UploadKind,
        input: UploadInput,
    ) -> Result<UploadedFile, UploadFileError> {
        let upload = ValidatedUpload::new(kind, input)?;
        let key = upload.key().to_string();
        let content_type = upload.content_type().to_string();
        let size = upload.size();

        let url = self
            .storage
            .put(&key, &content_type, upload.into_bytes())
            .await
            .inspect_err(|e| warn!(%key, "Upload failed: {}", e))?;

        info!(%key, %content_type, size, "Stored upload");
        Ok(UploadedFile { url })
    }
}
