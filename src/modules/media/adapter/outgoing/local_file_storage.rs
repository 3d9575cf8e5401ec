use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::modules::media::application::ports::outgoing::{FileStorage, FileStorageError};

/// Development fallback: files live under a local directory and are served
/// back by the application at `/uploads/{key}`.
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
    public_base_url: String,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>, public_base_url: &str) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Only plain relative paths are allowed below the root.
    fn resolve(&self, key: &str) -> Result<PathBuf, FileStorageError> {
        let relative = Path::new(key);
        let plain = !key.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));

        if !plain {
            return Err(FileStorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn put(
        &self,
        key: &str,
        _content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, FileStorageError> {
        let path = self.resolve(key)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| FileStorageError::Io(e.to_string()))?;
        }
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| FileStorageError::Io(e.to_string()))?;

        Ok(format!("{}/uploads/{}", self.public_base_url, key))
    }

    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, FileStorageError> {
        let path = self.resolve(key)?;

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FileStorageError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn scratch() -> LocalFileStorage {
        let root = std::env::temp_dir().join(format!("uploads-{}", Uuid::new_v4()));
        LocalFileStorage::new(root, "http://localhost:8080/")
    }

    #[tokio::test]
    async fn put_then_read_round_trips() {
        let storage = scratch();

        let url = storage
            .put("image/abc-avatar.png", "image/png", vec![9, 8, 7])
            .await
            .unwrap();

        assert_eq!(url, "http://localhost:8080/uploads/image/abc-avatar.png");
        assert_eq!(
            storage.read("image/abc-avatar.png").await.unwrap(),
            Some(vec![9, 8, 7])
        );

        let _ = tokio::fs::remove_dir_all(&storage.root).await;
    }

    #[tokio::test]
    async fn missing_file_reads_as_none() {
        assert_eq!(scratch().read("image/nothing.png").await, Ok(None));
    }

    #[tokio::test]
    async fn traversal_keys_are_rejected() {
        let storage = scratch();

        for key in ["../secret", "image/../../secret", "/etc/passwd", ""] {
            assert!(
                matches!(storage.read(key).await, Err(FileStorageError::InvalidKey(_))),
                "{key}"
            );
        }
    }
}
