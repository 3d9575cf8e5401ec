use actix_web::{post, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::refresh_session::{
    RefreshTokenError, RefreshTokenRequest, RefreshTokenResponse,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Refresh access token
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body(content = inline(crate::api::schemas::RefreshTokenBody)),
    responses(
        (status = 200, description = "New access token", body = inline(SuccessResponse<RefreshTokenResponse>)),
        (status = 401, description = "Refresh token invalid, expired or revoked", body = ErrorResponse),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_handler(
    req: web::Json<RefreshTokenRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.refresh.execute(req.into_inner()).await {
        Ok(response) => ApiResponse::success(response),

        Err(RefreshTokenError::TokenExpired) => {
            ApiResponse::unauthorized("TOKEN_EXPIRED", "Refresh token has expired")
        }
        Err(RefreshTokenError::InvalidTokenType) => {
            ApiResponse::unauthorized("INVALID_TOKEN_TYPE", "Invalid token type")
        }
        Err(RefreshTokenError::TokenRevoked) => {
            warn!("Revoked refresh token used");
            ApiResponse::unauthorized("TOKEN_REVOKED", "Refresh token has been revoked")
        }
        Err(RefreshTokenError::TokenInvalid) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }

        Err(e) => {
            error!("Token refresh failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
