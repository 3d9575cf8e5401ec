use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use futures::TryStreamExt;
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::media::application::domain::entities::{
    UploadInput, UploadRejection, UploadedFile,
};
use crate::modules::media::application::domain::upload_policy::UploadKind;
use crate::modules::media::application::use_cases::UploadFileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug)]
enum PartError {
    Malformed(String),
    TooLarge(usize),
}

/// Reads the first part that carries a file name. Stops reading as soon as
/// the part grows past `limit`.
async fn read_file_part(
    mut payload: Multipart,
    limit: usize,
) -> Result<Option<UploadInput>, PartError> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| PartError::Malformed(e.to_string()))?
    {
        let Some(file_name) = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string)
        else {
            continue;
        };
        let content_type = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| PartError::Malformed(e.to_string()))?
        {
            if bytes.len() + chunk.len() > limit {
                return Err(PartError::TooLarge(limit));
            }
            bytes.extend_from_slice(&chunk);
        }

        return Ok(Some(UploadInput {
            file_name,
            content_type,
            bytes,
        }));
    }

    Ok(None)
}

fn too_large(limit: usize) -> actix_web::HttpResponse {
    ApiResponse::payload_too_large(
        "FILE_TOO_LARGE",
        &format!("File exceeds the {} byte limit", limit),
    )
}

/// Upload an image or a resume
///
/// Images: jpeg, png, webp or gif up to 5 MiB. Resumes: pdf up to 10 MiB.
#[utoipa::path(
    post,
    path = "/api/admin/uploads/{kind}",
    tag = "media",
    security(("BearerAuth" = [])),
    params(("kind" = UploadKind, Path, description = "`image` or `resume`")),
    request_body(
        content = inline(crate::api::schemas::UploadForm),
        content_type = "multipart/form-data",
        description = "One file part",
    ),
    responses(
        (status = 201, description = "Stored", body = inline(SuccessResponse<UploadedFile>)),
        (status = 400, description = "Rejected by the upload policy", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Unknown upload kind", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
    )
)]
#[post("/api/admin/uploads/{kind}")]
pub async fn upload_file_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let kind: UploadKind = match path.parse() {
        Ok(kind) => kind,
        Err(e) => return ApiResponse::not_found("UNKNOWN_UPLOAD_KIND", &e.to_string()),
    };

    let input = match read_file_part(payload, kind.max_bytes()).await {
        Ok(Some(input)) => input,
        Ok(None) => {
            return ApiResponse::bad_request("MISSING_FILE", "Request must contain a file part")
        }
        Err(PartError::TooLarge(limit)) => return too_large(limit),
        Err(PartError::Malformed(msg)) => return ApiResponse::bad_request("INVALID_MULTIPART", &msg),
    };

    match data.media.upload.execute(kind, input).await {
        Ok(uploaded) => ApiResponse::created(uploaded),
        Err(UploadFileError::Rejected(UploadRejection::TooLarge { limit })) => too_large(limit),
        Err(UploadFileError::Rejected(r @ UploadRejection::UnsupportedType(_))) => {
            ApiResponse::bad_request("UNSUPPORTED_FILE_TYPE", &r.to_string())
        }
        Err(UploadFileError::Rejected(rejection)) => ApiResponse::invalid(rejection),
        Err(e @ UploadFileError::Storage(_)) => {
            error!("Upload failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use std::sync::Arc;

    use crate::modules::media::application::use_cases::UploadFileService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, token_provider_data};
    use crate::tests::support::memory_store::InMemoryFiles;

    const BOUNDARY: &str = "----upload-test-boundary";

    fn multipart(file_name: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn upload(uri: &str, body: Vec<u8>) -> test::TestRequest {
        test::TestRequest::post()
            .uri(uri)
            .insert_header(("Authorization", admin_bearer()))
            .insert_header((
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(body)
    }

    fn state(files: InMemoryFiles) -> web::Data<AppState> {
        TestAppStateBuilder::default()
            .with_upload(Arc::new(UploadFileService::new(files)))
            .build()
    }

    #[actix_web::test]
    async fn image_upload_is_201_with_url() {
        let files = InMemoryFiles::default();
        let app = test::init_service(
            App::new()
                .app_data(state(files.clone()))
                .app_data(token_provider_data())
                .service(upload_file_handler),
        )
        .await;

        let req = upload("/api/admin/uploads/image", multipart("me.png", "image/png", b"png-bytes"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        let url = body["data"]["url"].as_str().unwrap();
        assert!(url.starts_with("https://files.test/image/"));
        assert!(url.ends_with("-me.png"));
        assert_eq!(files.keys().len(), 1);
    }

    #[actix_web::test]
    async fn resume_must_be_pdf() {
        let app = test::init_service(
            App::new()
                .app_data(state(InMemoryFiles::default()))
                .app_data(token_provider_data())
                .service(upload_file_handler),
        )
        .await;

        let req = upload("/api/admin/uploads/resume", multipart("cv.png", "image/png", b"x"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UNSUPPORTED_FILE_TYPE");
    }

    #[actix_web::test]
    async fn oversized_image_is_413() {
        let files = InMemoryFiles::default();
        let app = test::init_service(
            App::new()
                .app_data(state(files.clone()))
                .app_data(token_provider_data())
                .service(upload_file_handler),
        )
        .await;

        let big = vec![0u8; UploadKind::Image.max_bytes() + 1];
        let req = upload("/api/admin/uploads/image", multipart("big.png", "image/png", &big))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert!(files.keys().is_empty());
    }

    #[actix_web::test]
    async fn empty_file_is_400() {
        let app = test::init_service(
            App::new()
                .app_data(state(InMemoryFiles::default()))
                .app_data(token_provider_data())
                .service(upload_file_handler),
        )
        .await;

        let req = upload("/api/admin/uploads/image", multipart("e.png", "image/png", b""))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "File is empty");
    }

    #[actix_web::test]
    async fn unknown_kind_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(state(InMemoryFiles::default()))
                .app_data(token_provider_data())
                .service(upload_file_handler),
        )
        .await;

        let req = upload("/api/admin/uploads/video", multipart("v.mp4", "video/mp4", b"x"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn requires_admin() {
        let app = test::init_service(
            App::new()
                .app_data(state(InMemoryFiles::default()))
                .app_data(token_provider_data())
                .service(upload_file_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/uploads/image")
            .insert_header((
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(multipart("me.png", "image/png", b"x"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
