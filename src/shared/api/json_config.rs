use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Upper bound for JSON bodies on admin forms.
const JSON_LIMIT_BYTES: usize = 256 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_LIMIT_BYTES)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(err, ApiResponse::invalid(message))
                .into()
        })
}
