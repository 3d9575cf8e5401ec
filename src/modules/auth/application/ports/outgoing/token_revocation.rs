use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenRevocationError {
    #[error("token already expired")]
    AlreadyExpired,

    #[error("revocation store error: {0}")]
    StoreError(String),
}

/// Revoked refresh tokens, keyed by their SHA-256 hash and kept until the
/// token would have expired anyway.
#[async_trait]
pub trait TokenRevocationStore: Send + Sync {
    async fn revoke(
        &self,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRevocationError>;

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, TokenRevocationError>;
}
