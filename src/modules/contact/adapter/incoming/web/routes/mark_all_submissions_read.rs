use actix_web::{post, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::actions::ActionResult;
use crate::AppState;

/// Mark every contact message read
///
/// Idempotent. Repeating the call with nothing unread still succeeds.
#[utoipa::path(
    post,
    path = "/api/admin/contact-submissions/read-all",
    tag = "contact",
    security(("BearerAuth" = [])),
    responses(
        (status = 202, description = "Write accepted", body = inline(SuccessResponse<ActionResult>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[post("/api/admin/contact-submissions/read-all")]
pub async fn mark_all_submissions_read_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    data.contact.mark_all_read.execute().into_response()
}
