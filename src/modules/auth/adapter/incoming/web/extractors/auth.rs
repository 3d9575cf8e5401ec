use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use serde::Deserialize;
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::modules::auth::application::domain::entities::AdminId;
use crate::modules::auth::application::ports::outgoing::{TokenError, TokenProvider, TokenType};
use crate::shared::api::ApiResponse;

/// How the token provider is registered as app data.
pub type SharedTokenProvider = Arc<dyn TokenProvider>;

/// An admin holding a valid access token.
#[derive(Debug, Clone, Copy)]
pub struct AdminUser {
    pub admin_id: AdminId,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn token_provider(req: &HttpRequest) -> Option<&web::Data<SharedTokenProvider>> {
    req.app_data::<web::Data<SharedTokenProvider>>()
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(tokens) = token_provider(req) else {
            tracing::error!("token provider is not registered as app data");
            return ready(Err(create_api_error(ApiResponse::internal_error())));
        };

        let Some(token) = extract_token_from_header(req) else {
            return ready(Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            ))));
        };

        match tokens.verify_token_of_type(&token, TokenType::Access) {
            Ok(claims) => ready(Ok(AdminUser {
                admin_id: AdminId::from(claims.sub),
            })),
            Err(TokenError::InvalidTokenType(_)) => ready(Err(create_api_error(
                ApiResponse::unauthorized("INVALID_TOKEN_TYPE", "Invalid token type"),
            ))),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

/// Admin session if one is presented, otherwise anonymous. Never rejects.
///
/// Also reads `?access_token=` because `EventSource` cannot set headers.
#[derive(Debug, Clone, Copy)]
pub struct OptionalAdmin(pub Option<AdminId>);

#[derive(Deserialize)]
struct TokenQuery {
    access_token: Option<String>,
}

impl FromRequest for OptionalAdmin {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(tokens) = token_provider(req) else {
            return ready(Ok(OptionalAdmin(None)));
        };

        let token = extract_token_from_header(req).or_else(|| {
            web::Query::<TokenQuery>::from_query(req.query_string())
                .ok()
                .and_then(|q| q.into_inner().access_token)
        });

        let admin = token
            .and_then(|t| tokens.verify_token_of_type(&t, TokenType::Access).ok())
            .map(|claims| AdminId::from(claims.sub));

        ready(Ok(OptionalAdmin(admin)))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
