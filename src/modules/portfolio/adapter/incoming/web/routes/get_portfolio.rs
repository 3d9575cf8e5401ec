use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::portfolio::application::domain::entities::PortfolioData;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Whole public portfolio
///
/// Falls back to bundled content for any part the store cannot provide.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (status = 200, description = "Portfolio content", body = inline(SuccessResponse<PortfolioData>)),
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.portfolio.get.execute().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use std::sync::Arc;

    use crate::modules::portfolio::application::use_cases::GetPortfolioService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::memory_store::{
        sample_document, sample_project, InMemoryPortfolio, InMemoryProjects,
    };

    #[actix_web::test]
    async fn returns_merged_portfolio() {
        let state = TestAppStateBuilder::default()
            .with_get_portfolio(Arc::new(GetPortfolioService::new(
                InMemoryPortfolio::with(sample_document()),
                InMemoryProjects::with(vec![sample_project("Shown")]),
            )))
            .build();
        let app = test::init_service(App::new().app_data(state).service(get_portfolio_handler)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/portfolio").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["projects"][0]["title"], "Shown");
        assert!(body["data"]["about"]["skills"].is_array());
    }

    #[actix_web::test]
    async fn unreachable_store_still_answers_200() {
        let state = TestAppStateBuilder::default()
            .with_get_portfolio(Arc::new(GetPortfolioService::new(
                InMemoryPortfolio::failing("connection refused"),
                InMemoryProjects::failing("connection refused"),
            )))
            .build();
        let app = test::init_service(App::new().app_data(state).service(get_portfolio_handler)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/portfolio").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
