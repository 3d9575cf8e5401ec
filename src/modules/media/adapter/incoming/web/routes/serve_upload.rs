use actix_web::{get, http::header, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::media::application::use_cases::ServeUploadError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Files kept by the local storage backend. Cloud-stored files are served by
/// the bucket and 404 here.
#[utoipa::path(
    get,
    path = "/uploads/{key}",
    tag = "media",
    params(("key" = String, Path, description = "Storage key of the file")),
    responses(
        (status = 200, description = "File bytes"),
        (status = 404, description = "File not found", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/uploads/{key:.*}")]
pub async fn serve_upload_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.media.serve.execute(&path.into_inner()).await {
        Ok(file) => HttpResponse::Ok()
            .insert_header((header::CONTENT_TYPE, file.content_type))
            .insert_header((header::CACHE_CONTROL, "public, max-age=31536000, immutable"))
            .body(file.bytes),
        Err(ServeUploadError::NotFound) => ApiResponse::not_found("FILE_NOT_FOUND", "File not found"),
        Err(e) => {
            error!("Failed to serve upload: {}", e);
            ApiResponse::not_found("FILE_NOT_FOUND", "File not found")
        }
    }
}
