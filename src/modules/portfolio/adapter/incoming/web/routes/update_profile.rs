use actix_web::{put, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::portfolio::application::domain::forms::ProfileInput;
use crate::shared::actions::ActionResult;
use crate::AppState;

/// Update hero, about subtitle and contact details
#[utoipa::path(
    put,
    path = "/api/admin/profile",
    tag = "portfolio",
    security(("BearerAuth" = [])),
    request_body = ProfileInput,
    responses(
        (status = 202, description = "Write accepted", body = inline(SuccessResponse<ActionResult>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[put("/api/admin/profile")]
pub async fn update_profile_handler(
    _admin: AdminUser,
    req: web::Json<ProfileInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    data.portfolio
        .update_profile
        .execute(req.into_inner())
        .into_response()
}
