use actix_web::{post, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::domain::entities::ProjectInput;
use crate::shared::actions::ActionResult;
use crate::AppState;

/// Create a project
///
/// The id is allocated up front and returned before the row is written.
#[utoipa::path(
    post,
    path = "/api/admin/projects",
    tag = "projects",
    security(("BearerAuth" = [])),
    request_body = ProjectInput,
    responses(
        (status = 202, description = "Write accepted", body = inline(SuccessResponse<ActionResult>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[post("/api/admin/projects")]
pub async fn create_project_handler(
    _admin: AdminUser,
    req: web::Json<ProjectInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    data.project.create.execute(req.into_inner()).into_response()
}
