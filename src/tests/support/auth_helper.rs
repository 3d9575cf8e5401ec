use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::SharedTokenProvider;
use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::ports::outgoing::TokenProvider;

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        issuer: "portfolio-cms".to_string(),
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86_400,
    })
}

/// The token provider the auth extractors look up.
pub fn token_provider_data() -> web::Data<SharedTokenProvider> {
    let tokens: SharedTokenProvider = Arc::new(test_jwt_service());
    web::Data::new(tokens)
}

pub fn admin_token() -> String {
    test_jwt_service()
        .generate_access_token(Uuid::new_v4())
        .expect("test access token")
}

pub fn admin_bearer() -> String {
    format!("Bearer {}", admin_token())
}
