use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::modules::auth::application::ports::outgoing::{
    hash_token, TokenError, TokenProvider, TokenRevocationStore, TokenType,
};

// ========================= Request =========================

#[derive(Debug, Clone)]
pub struct RefreshTokenRequest {
    refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshTokenRequestError {
    #[error("Refresh token cannot be empty")]
    EmptyToken,
}

impl RefreshTokenRequest {
    pub fn new(refresh_token: String) -> Result<Self, RefreshTokenRequestError> {
        let refresh_token = refresh_token.trim();
        if refresh_token.is_empty() {
            return Err(RefreshTokenRequestError::EmptyToken);
        }
        Ok(Self {
            refresh_token: refresh_token.to_string(),
        })
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

impl<'de> Deserialize<'de> for RefreshTokenRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Helper {
            refresh_token: String,
        }

        let helper = Helper::deserialize(deserializer)?;
        RefreshTokenRequest::new(helper.refresh_token).map_err(serde::de::Error::custom)
    }
}

// ========================= Error =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Refresh token has expired")]
    TokenExpired,

    #[error("Invalid refresh token")]
    TokenInvalid,

    #[error("Invalid token type")]
    InvalidTokenType,

    #[error("Refresh token has been revoked")]
    TokenRevoked,

    #[error("Revocation check failed: {0}")]
    RevocationCheckFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

impl From<TokenError> for RefreshTokenError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::TokenExpired => RefreshTokenError::TokenExpired,
            TokenError::InvalidTokenType(_) => RefreshTokenError::InvalidTokenType,
            TokenError::EncodingError(msg) => RefreshTokenError::TokenGenerationFailed(msg),
            TokenError::TokenNotYetValid
            | TokenError::InvalidSignature
            | TokenError::MalformedToken => RefreshTokenError::TokenInvalid,
        }
    }
}

// ========================= Response =========================

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponse {
    pub access_token: String,
}

// ========================= Use Case =========================

#[async_trait]
pub trait RefreshSessionUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError>;
}

pub struct RefreshSessionService<S>
where
    S: TokenRevocationStore,
{
    revocations: S,
    tokens: Arc<dyn TokenProvider>,
}

impl<S> RefreshSessionService<S>
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
impl<S> RefreshSessionUseCase for RefreshSessionService<S>
where
    S: TokenRevocationStore,
{
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        let claims = self
            .tokens
            .verify_token_of_type(request.refresh_token(), TokenType::Refresh)?;

        let revoked = self
            .revocations
            .is_revoked(&hash_token(request.refresh_token()))
            .await
            .map_err(|e| RefreshTokenError::RevocationCheckFailed(e.to_string()))?;

        if revoked {
            tracing::warn!(admin_id = %claims.sub, "revoked refresh token presented");
            return Err(RefreshTokenError::TokenRevoked);
        }

        let access_token = self.tokens.generate_access_token(claims.sub)?;

        Ok(RefreshTokenResponse { access_token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::auth_helper::test_jwt_service;
    use crate::tests::support::stubs::InMemoryRevocations;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn service(revocations: InMemoryRevocations) -> RefreshSessionService<InMemoryRevocations> {
        RefreshSessionService::new(revocations, Arc::new(test_jwt_service()))
    }

    fn request(token: &str) -> RefreshTokenRequest {
        RefreshTokenRequest::new(token.to_string()).unwrap()
    }

    #[test]
    fn empty_token_is_rejected_at_construction() {
        assert_eq!(
            RefreshTokenRequest::new("   ".to_string()).unwrap_err(),
            RefreshTokenRequestError::EmptyToken
        );
    }

    #[tokio::test]
    async fn valid_refresh_token_yields_access_token() {
        let jwt = test_jwt_service();
        let admin_id = Uuid::new_v4();
        let refresh = jwt.generate_refresh_token(admin_id).unwrap();

        let res = service(InMemoryRevocations::default())
            .execute(request(&refresh))
            .await
            .unwrap();

        let claims = jwt.verify_token(&res.access_token).unwrap();
        assert_eq!(claims.sub, admin_id);
        assert_eq!(claims.token_type, TokenType::Access);
    }

    #[tokio::test]
    async fn access_token_cannot_refresh() {
        let access = test_jwt_service()
            .generate_access_token(Uuid::new_v4())
            .unwrap();

        let res = service(InMemoryRevocations::default())
            .execute(request(&access))
            .await;

        assert!(matches!(res, Err(RefreshTokenError::InvalidTokenType)));
    }

    #[tokio::test]
    async fn revoked_token_is_refused() {
        let refresh = test_jwt_service()
            .generate_refresh_token(Uuid::new_v4())
            .unwrap();
        let revocations = InMemoryRevocations::default();
        revocations
            .revoke(&hash_token(&refresh), Utc::now() + Duration::hours(1))
            .await
            .unwrap();

        let res = service(revocations).execute(request(&refresh)).await;

        assert!(matches!(res, Err(RefreshTokenError::TokenRevoked)));
    }

    #[tokio::test]
    async fn garbage_token_is_invalid() {
        let res = service(InMemoryRevocations::default())
            .execute(request("not.a.jwt"))
            .await;

        assert!(matches!(res, Err(RefreshTokenError::TokenInvalid)));
    }
}
