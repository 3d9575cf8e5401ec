use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::application::use_cases::logout_admin::LogoutError;
use crate::modules::auth::application::use_cases::refresh_session::RefreshTokenRequest;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Logout
///
/// Revokes the given refresh token. The access token simply runs out.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    request_body(content = inline(crate::api::schemas::RefreshTokenBody)),
    responses(
        (status = 204, description = "Refresh token revoked"),
        (status = 401, description = "Not a valid refresh token", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_handler(
    req: web::Json<RefreshTokenRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.logout.execute(req.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),

        Err(LogoutError::InvalidToken(e)) => {
            tracing::debug!("Logout with invalid token: {}", e);
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }

        Err(e) => {
            error!("Logout failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
