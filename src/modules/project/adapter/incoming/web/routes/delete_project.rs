use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::actions::ActionResult;
use crate::AppState;

/// Delete a project
#[utoipa::path(
    delete,
    path = "/api/admin/projects/{id}",
    tag = "projects",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 202, description = "Delete accepted", body = inline(SuccessResponse<ActionResult>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[delete("/api/admin/projects/{id}")]
pub async fn delete_project_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    data.project.delete.execute(path.into_inner()).into_response()
}
