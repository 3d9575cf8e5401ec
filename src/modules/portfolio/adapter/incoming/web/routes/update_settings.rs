use actix_web::{put, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::portfolio::application::domain::forms::SettingsInput;
use crate::shared::actions::ActionResult;
use crate::AppState;

/// Update site settings
#[utoipa::path(
    put,
    path = "/api/admin/settings",
    tag = "portfolio",
    security(("BearerAuth" = [])),
    request_body = SettingsInput,
    responses(
        (status = 202, description = "Write accepted", body = inline(SuccessResponse<ActionResult>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    )
)]
#[put("/api/admin/settings")]
pub async fn update_settings_handler(
    _admin: AdminUser,
    req: web::Json<SettingsInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    data.portfolio
        .update_settings
        .execute(req.into_inner())
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::modules::portfolio::application::use_cases::UpdateSettingsService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, token_provider_data};
    use crate::tests::support::events::test_dispatcher;
    use crate::tests::support::memory_store::InMemoryPortfolio;

    #[actix_web::test]
    async fn long_description_is_rejected() {
        let (writes, _, _) = test_dispatcher();
        let state = TestAppStateBuilder::default()
            .with_update_settings(Arc::new(UpdateSettingsService::new(
                InMemoryPortfolio::default(),
                writes,
            )))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(update_settings_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/admin/settings")
            .insert_header(("Authorization", admin_bearer()))
            .set_json(json!({
                "siteTitle": "My site",
                "siteDescription": "x".repeat(301),
                "contactFormEnabled": true,
                "maintenanceMode": false
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "siteDescription: must be at most 300 characters");
    }
}
