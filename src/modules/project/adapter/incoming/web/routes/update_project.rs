use actix_web::{put, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::domain::entities::ProjectInput;
use crate::shared::actions::ActionResult;
use crate::AppState;

/// Replace a project
#[utoipa::path(
    put,
    path = "/api/admin/projects/{id}",
    tag = "projects",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Project id")),
    request_body = ProjectInput,
    responses(
        (status = 202, description = "Write accepted", body = inline(SuccessResponse<ActionResult>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[put("/api/admin/projects/{id}")]
pub async fn update_project_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<ProjectInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    data.project
        .update
        .execute(path.into_inner(), req.into_inner())
        .into_response()
}
