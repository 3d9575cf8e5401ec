use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::auth::application::ports::outgoing::{
    hash_token, TokenError, TokenProvider, TokenRevocationError, TokenRevocationStore, TokenType,
};
use crate::modules::auth::application::use_cases::refresh_session::RefreshTokenRequest;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Invalid refresh token: {0}")]
    InvalidToken(TokenError),

    #[error("Token revocation failed: {0}")]
    RevocationFailed(String),
}

#[async_trait]
pub trait LogoutAdminUseCase: Send + Sync {
    async fn execute(&self, request: RefreshTokenRequest) -> Result<(), LogoutError>;
}

pub struct LogoutAdminService<S>
where
    S: TokenRevocationStore,
{
    revocations: S,
    tokens: Arc<dyn TokenProvider>,
}

impl<S> LogoutAdminService<S>
where
    S: TokenRevocationStore,
{
    pub fn new(revocations: S, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            revocations,
            tokens,
        }
    }
}

#[async_trait]
impl<S> LogoutAdminUseCase for LogoutAdminService<S>
where
    S: TokenRevocationStore,
{
    async fn execute(&self, request: RefreshTokenRequest) -> Result<(), LogoutError> {
        let claims = self
            .tokens
            .verify_token_of_type(request.refresh_token(), TokenType::Refresh)
            .map_err(LogoutError::InvalidToken)?;

        let expires_at =
            DateTime::<Utc>::from_timestamp(claims.exp, 0).unwrap_or_else(Utc::now);

        match self
            .revocations
            .revoke(&hash_token(request.refresh_token()), expires_at)
            .await
        {
            Ok(()) => {
                tracing::info!(admin_id = %claims.sub, "refresh token revoked");
                Ok(())
            }
            // Inside the leeway window: nothing left to revoke.
            Err(TokenRevocationError::AlreadyExpired) => Ok(()),
            Err(e) => Err(LogoutError::RevocationFailed(e.to_string())),
        }
    }
}
