use crate::config::{ConfigError, ConfigSource};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64,  // seconds
    pub refresh_token_expiry: i64, // seconds
}

impl JwtConfig {
    pub const MIN_SECRET_LEN: usize = 32;

    pub fn from_source(src: &impl ConfigSource) -> Result<Self, ConfigError> {
        let secret_key = src.required("JWT_SECRET")?;

        // HS256 wants at least 256 bits of key material
        if secret_key.len() < Self::MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                name: "JWT_SECRET",
                reason: format!("must be at least {} characters", Self::MIN_SECRET_LEN),
            });
        }

        let access_token_expiry = src.parsed_or("JWT_ACCESS_EXPIRY", 1800i64)?;
        let refresh_token_expiry = src.parsed_or("JWT_REFRESH_EXPIRY", 604_800i64)?;

        if !(1..=86_400).contains(&access_token_expiry) {
            return Err(ConfigError::Invalid {
                name: "JWT_ACCESS_EXPIRY",
                reason: "must be between 1 and 86400 seconds".to_string(),
            });
        }

        if refresh_token_expiry <= access_token_expiry {
            return Err(ConfigError::Invalid {
                name: "JWT_REFRESH_EXPIRY",
                reason: "must be greater than JWT_ACCESS_EXPIRY".to_string(),
            });
        }

        Ok(Self {
            secret_key,
            issuer: src
                .optional("JWT_ISSUER")
                .unwrap_or_else(|| "portfolio-cms".to_string()),
            access_token_expiry,
            refresh_token_expiry,
        })
    }
}
