use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::contact::application::domain::entities::ContactInbox;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List contact messages
///
/// Newest first, with the number still unread.
#[utoipa::path(
    get,
    path = "/api/admin/contact-submissions",
    tag = "contact",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "The inbox", body = inline(SuccessResponse<ContactInbox>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse),
    )
)]
#[get("/api/admin/contact-submissions")]
pub async fn list_submissions_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.list.execute().await {
        Ok(inbox) => ApiResponse::success(inbox),
        Err(e) => {
            error!("Failed to list contact submissions: {}", e);
            ApiResponse::internal_error()
        }
    }
}
