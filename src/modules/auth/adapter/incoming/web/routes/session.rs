use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::auth::application::domain::entities::AdminProfile;
use crate::modules::auth::application::use_cases::current_admin::CurrentAdminError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current admin session
///
/// Used by the dashboard shell to decide between the login page and the app.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Session is valid", body = inline(SuccessResponse<AdminProfile>)),
        (status = 401, description = "No valid session", body = ErrorResponse),
    )
)]
#[get("/api/auth/session")]
pub async fn session_handler(admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.auth.current.execute(admin.admin_id).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(CurrentAdminError::NotFound) => {
            ApiResponse::unauthorized("ADMIN_NOT_FOUND", "Admin account no longer exists")
        }

        Err(e) => {
            error!("Session lookup failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
