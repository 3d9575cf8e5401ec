use actix_web::{post, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::domain::entities::ContactInput;
use crate::shared::actions::ActionResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Send a contact message
///
/// Public. Refused with 403 while the contact form is switched off in the
/// site settings.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactInput,
    responses(
        (status = 202, description = "Message accepted", body = inline(SuccessResponse<ActionResult>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Contact form disabled", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<ContactInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    if !data.contact.submit.form_enabled().await {
        return ApiResponse::forbidden(
            "CONTACT_FORM_DISABLED",
            "The contact form is currently disabled",
        );
    }

    data.contact.submit.execute(req.into_inner()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::modules::contact::application::use_cases::SubmitContactService;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::events::{expect_notice, test_dispatcher};
    use crate::tests::support::memory_store::{sample_document, InMemoryContacts, InMemoryPortfolio};
    use crate::tests::support::stubs::RecordingNotifier;

    fn body() -> Value {
        json!({
            "name": "Sam Carter",
            "email": "sam@example.com",
            "subject": "Project enquiry",
            "message": "I would like to talk about a new website."
        })
    }

    #[actix_web::test]
    async fn public_submission_is_accepted_and_stored() {
        let (writes, feed, _) = test_dispatcher();
        let mut notices = feed.subscribe();
        let contacts = InMemoryContacts::default();
        let state = TestAppStateBuilder::default()
            .with_submit_contact(Arc::new(SubmitContactService::new(
                contacts.clone(),
                InMemoryPortfolio::default(),
                Arc::new(RecordingNotifier::default()),
                writes,
            )))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .service(submit_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::ACCEPTED);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["success"], true);
        assert_eq!(json["data"]["message"], "Message sent");

        expect_notice(&mut notices).await;
        assert_eq!(contacts.snapshot()[0].subject, "Project enquiry");
    }

    #[actix_web::test]
    async fn disabled_form_is_403() {
        let (writes, _, _) = test_dispatcher();
        let mut document = sample_document();
        document.settings.contact_form_enabled = false;
        let contacts = InMemoryContacts::default();
        let state = TestAppStateBuilder::default()
            .with_submit_contact(Arc::new(SubmitContactService::new(
                contacts.clone(),
                InMemoryPortfolio::with(document),
                Arc::new(RecordingNotifier::default()),
                writes,
            )))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .service(submit_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "CONTACT_FORM_DISABLED");
        assert!(contacts.snapshot().is_empty());
    }

    #[actix_web::test]
    async fn invalid_email_is_400() {
        let (writes, _, _) = test_dispatcher();
        let state = TestAppStateBuilder::default()
            .with_submit_contact(Arc::new(SubmitContactService::new(
                InMemoryContacts::default(),
                InMemoryPortfolio::default(),
                Arc::new(RecordingNotifier::default()),
                writes,
            )))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .service(submit_contact_handler),
        )
        .await;

        let mut payload = body();
        payload["email"] = json!("nope");
        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["message"], "email: must be a valid email address");
    }
}
