use actix_web::{patch, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::actions::ActionResult;
use crate::AppState;

/// Mark a contact message read
#[utoipa::path(
    patch,
    path = "/api/admin/contact-submissions/{id}/read",
    tag = "contact",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Submission id")),
    responses(
        (status = 202, description = "Write accepted", body = inline(SuccessResponse<ActionResult>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[patch("/api/admin/contact-submissions/{id}/read")]
pub async fn mark_submission_read_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    data.contact.mark_read.execute(path.into_inner()).into_response()
}
