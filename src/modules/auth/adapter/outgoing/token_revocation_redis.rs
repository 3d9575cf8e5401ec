use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::{
    TokenRevocationError, TokenRevocationStore,
};

/// Redis-backed refresh token revocation list.
///
/// ```text
/// auth:revoked:{token_hash} -> "1"   (TTL = remaining token lifetime)
/// ```
///
/// Redis TTL is the only cleanup mechanism.
#[derive(Clone)]
pub struct RedisTokenRevocationStore {
    pool: Arc<Pool>,
}

impl RedisTokenRevocationStore {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn key(token_hash: &str) -> String {
        format!("auth:revoked:{token_hash}")
    }

    async fn conn(&self) -> Result<deadpool_redis::Connection, TokenRevocationError> {
        self.pool
            .get()
            .await
            .map_err(|e| TokenRevocationError::StoreError(format!("pool error: {e}")))
    }
}

/// Seconds left until `expires_at`, `None` once it has passed.
pub(crate) fn remaining_ttl(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> Option<i64> {
    let ttl = (expires_at - now).num_seconds();
    (ttl > 0).then_some(ttl)
}

#[async_trait]
impl TokenRevocationStore for RedisTokenRevocationStore {
    async fn revoke(
        &self,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRevocationError> {
        let ttl =
            remaining_ttl(expires_at, Utc::now()).ok_or(TokenRevocationError::AlreadyExpired)?;
        let key = Self::key(token_hash);
        let mut conn = self.conn().await?;

        deadpool_redis::redis::pipe()
            .atomic()
            .cmd("SET")
            .arg(&key)
            .arg("1")
            .ignore()
            .cmd("EXPIRE")
            .arg(&key)
            .arg(ttl)
            .ignore()
            .query_async::<()>(&mut *conn)
            .await
            .map_err(|e| TokenRevocationError::StoreError(e.to_string()))
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, TokenRevocationError> {
        let mut conn = self.conn().await?;

        conn.exists(Self::key(token_hash))
            .await
            .map_err(|e| TokenRevocationError::StoreError(e.to_string()))
    }
}
