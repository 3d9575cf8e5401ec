use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileStorageError {
    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Where uploaded files end up.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Stores `bytes` under `key` and returns the public URL.
    async fn put(
        &self,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, FileStorageError>;

    /// Reads a file back for backends that serve their own files. Backends
    /// with public URLs of their own return `None`.
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, FileStorageError>;
}
