use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{AdminProfile, NewAdmin};
use crate::modules::auth::application::ports::outgoing::{
    AdminQuery, AdminRepository, AdminRepositoryError, PasswordHasher,
};
use crate::shared::validation::{self, ValidationError};

pub const MIN_PASSWORD_LEN: usize = 12;

#[derive(Debug, Clone)]
pub struct SeedAdminCommand {
    email: String,
    password: String,
    display_name: String,
}

impl SeedAdminCommand {
    pub fn new(email: &str, password: &str) -> Result<Self, ValidationError> {
        let email = validation::email("ADMIN_EMAIL", email)?.to_lowercase();
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::new(
                "ADMIN_PASSWORD",
                format!("must be at least {MIN_PASSWORD_LEN} characters"),
            ));
        }

        let display_name = email
            .split('@')
            .next()
            .filter(|local| !local.is_empty())
            .unwrap_or("admin")
            .to_string();

        Ok(Self {
            email,
            password: password.to_string(),
            display_name,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Created(AdminProfile),
    AlreadySeeded,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SeedAdminError {
    #[error("Password hashing failed: {0}")]
    HashFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SeedAdminUseCase: Send + Sync {
    async fn execute(&self, command: SeedAdminCommand) -> Result<SeedOutcome, SeedAdminError>;
}

/// Creates the first admin account. Does nothing once any admin exists.
pub struct SeedAdminService<Q, R>
where
    Q: AdminQuery,
    R: AdminRepository,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> SeedAdminService<Q, R>
where
    Q: AdminQuery,
    R: AdminRepository,
{
    pub fn new(query: Q, repository: R, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            hasher,
        }
    }
}

#[async_trait]
impl<Q, R> SeedAdminUseCase for SeedAdminService<Q, R>
where
    Q: AdminQuery,
    R: AdminRepository,
{
    async fn execute(&self, command: SeedAdminCommand) -> Result<SeedOutcome, SeedAdminError> {
        let existing = self
            .query
            .count()
            .await
            .map_err(|e| SeedAdminError::RepositoryError(e.to_string()))?;

        if existing > 0 {
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let password_hash = self
            .hasher
            .hash_password(&command.password)
            .await
            .map_err(|e| SeedAdminError::HashFailed(e.to_string()))?;

        let created = self
            .repository
            .create(NewAdmin {
                email: command.email,
                display_name: command.display_name,
                password_hash,
            })
            .await;

        match created {
            Ok(admin) => Ok(SeedOutcome::Created(AdminProfile::from(&admin))),
            // Another instance won the race
            Err(AdminRepositoryError::EmailAlreadyExists) => Ok(SeedOutcome::AlreadySeeded),
            Err(AdminRepositoryError::DatabaseError(msg)) => {
                Err(SeedAdminError::RepositoryError(msg))
            }
        }
    }
}
