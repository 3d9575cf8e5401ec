//! Process configuration, read once at startup from the environment.

use std::env;

use crate::modules::auth::adapter::outgoing::jwt::JwtConfig;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Source of raw values. The process environment in production, a map in tests.
pub trait ConfigSource {
    fn get(&self, name: &str) -> Option<String>;

    fn required(&self, name: &'static str) -> Result<String, ConfigError> {
        self.optional(name).ok_or(ConfigError::Missing(name))
    }

    /// Unset and blank are the same thing.
    fn optional(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parsed_or<T>(&self, name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match self.optional(name) {
            None => Ok(default),
            Some(raw) => raw.parse::<T>().map_err(|e| ConfigError::Invalid {
                name,
                reason: e.to_string(),
            }),
        }
    }
}

pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    /// Absent for local relays such as Mailpit.
    pub credentials: Option<(String, String)>,
    pub from: String,
}

#[derive(Debug, Clone)]
pub struct MediaConfig {
    pub bucket: Option<String>,
    pub credentials_path: Option<String>,
    pub upload_dir: String,
    pub public_base_url: String,
}

impl MediaConfig {
    /// Cloud storage needs both a bucket and a service-account credential.
    pub fn uses_cloud_storage(&self) -> bool {
        self.bucket.is_some() && self.credentials_path.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub redis_url: String,
    pub run_migrations: bool,
    pub jwt: JwtConfig,
    pub media: MediaConfig,
    pub smtp: Option<SmtpConfig>,
    pub contact_notify_email: Option<String>,
    pub admin_seed: Option<AdminSeed>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&ProcessEnv)
    }

    pub fn from_source(src: &impl ConfigSource) -> Result<Self, ConfigError> {
        let environment = src
            .optional("RUST_ENV")
            .unwrap_or_else(|| "development".to_string());
        let host = src.optional("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = src.parsed_or("PORT", 8080u16)?;

        let public_base_url = src
            .optional("PUBLIC_BASE_URL")
            .unwrap_or_else(|| format!("http://{host}:{port}"));

        let smtp = match src.optional("SMTP_HOST") {
            None => None,
            Some(host) => Some(SmtpConfig {
                host,
                port: src.parsed_or("SMTP_PORT", 587u16)?,
                credentials: src
                    .optional("SMTP_USERNAME")
                    .zip(src.optional("SMTP_PASSWORD")),
                from: src.required("EMAIL_FROM")?,
            }),
        };

        let admin_seed = src
            .optional("ADMIN_EMAIL")
            .zip(src.optional("ADMIN_PASSWORD"))
            .map(|(email, password)| AdminSeed { email, password });

        Ok(Self {
            environment,
            port,
            database_url: src.required("DATABASE_URL")?,
            redis_url: src.required("REDIS_URL")?,
            run_migrations: src.parsed_or("RUN_MIGRATIONS", false)?,
            jwt: JwtConfig::from_source(src)?,
            media: MediaConfig {
                bucket: src.optional("MEDIA_BUCKET"),
                credentials_path: src.optional("GOOGLE_APPLICATION_CREDENTIALS"),
                upload_dir: src
                    .optional("UPLOAD_DIR")
                    .unwrap_or_else(|| "./uploads".to_string()),
                public_base_url,
            },
            smtp,
            contact_notify_email: src.optional("CONTACT_NOTIFY_EMAIL"),
            admin_seed,
            host,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
