//! Hand-written fakes for ports that need more than a canned answer.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Admin, AdminId, NewAdmin};
use crate::modules::auth::application::ports::outgoing::{
    AdminQuery, AdminQueryError, AdminRepository, AdminRepositoryError, HashError,
    PasswordHasher, TokenRevocationError, TokenRevocationStore,
};
use crate::modules::contact::application::domain::entities::{ContactInbox, ContactSubmission};
use crate::modules::email::application::ports::outgoing::{
    ContactNotificationError, ContactNotifier,
};
use crate::modules::portfolio::application::domain::defaults::bundled_defaults;
use crate::modules::realtime::application::domain::entities::Snapshot;
use crate::modules::realtime::application::ports::outgoing::SnapshotSource;
use crate::shared::actions::StoreFailure;
use crate::shared::events::Collection;

// ============================================================================
// Admins
// ============================================================================

pub fn sample_admin(email: &str, password: &str) -> Admin {
    let now = Utc::now();
    Admin {
        id: AdminId::from(Uuid::new_v4()),
        email: email.to_string(),
        display_name: email.split('@').next().unwrap_or(email).to_string(),
        password_hash: format!("hashed:{password}"),
        created_at: now,
        updated_at: now,
    }
}

/// Stores `hashed:<password>`.
#[derive(Clone, Copy, Default)]
pub struct FakeHasher;

#[async_trait]
impl PasswordHasher for FakeHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{password}"))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryAdmins {
    admins: Arc<Mutex<Vec<Admin>>>,
    failing: bool,
}

impl InMemoryAdmins {
    pub fn with(admins: Vec<Admin>) -> Self {
        Self {
            admins: Arc::new(Mutex::new(admins)),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), AdminQueryError> {
        if self.failing {
            return Err(AdminQueryError::DatabaseError("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl AdminQuery for InMemoryAdmins {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AdminQueryError> {
        self.check()?;
        let admins = self.admins.lock().unwrap();
        Ok(admins.iter().find(|a| a.email == email).cloned())
    }

    async fn find_by_id(&self, id: AdminId) -> Result<Option<Admin>, AdminQueryError> {
        self.check()?;
        let admins = self.admins.lock().unwrap();
        Ok(admins.iter().find(|a| a.id == id).cloned())
    }

    async fn count(&self) -> Result<u64, AdminQueryError> {
        self.check()?;
        Ok(self.admins.lock().unwrap().len() as u64)
    }
}

#[async_trait]
impl AdminRepository for InMemoryAdmins {
    async fn create(&self, admin: NewAdmin) -> Result<Admin, AdminRepositoryError> {
        if self.failing {
            return Err(AdminRepositoryError::DatabaseError(
                "connection refused".to_string(),
            ));
        }
        let mut admins = self.admins.lock().unwrap();
        if admins.iter().any(|a| a.email == admin.email) {
            return Err(AdminRepositoryError::EmailAlreadyExists);
        }
        let now = Utc::now();
        let created = Admin {
            id: AdminId::from(Uuid::new_v4()),
            email: admin.email,
            display_name: admin.display_name,
            password_hash: admin.password_hash,
            created_at: now,
            updated_at: now,
        };
        admins.push(created.clone());
        Ok(created)
    }
}

// ============================================================================
// Revoked refresh tokens
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryRevocations {
    revoked: Arc<Mutex<HashMap<String, DateTime<Utc>>>>,
    failing: bool,
}

impl InMemoryRevocations {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl TokenRevocationStore for InMemoryRevocations {
    async fn revoke(
        &self,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRevocationError> {
        if self.failing {
            return Err(TokenRevocationError::StoreError("redis down".to_string()));
        }
        if expires_at <= Utc::now() {
            return Err(TokenRevocationError::AlreadyExpired);
        }
        self.revoked
            .lock()
            .unwrap()
            .insert(token_hash.to_string(), expires_at);
        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, TokenRevocationError> {
        if self.failing {
            return Err(TokenRevocationError::StoreError("redis down".to_string()));
        }
        Ok(self.revoked.lock().unwrap().contains_key(token_hash))
    }
}

// ============================================================================
// Contact notifications
// ============================================================================

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notified: Arc<Mutex<Vec<Uuid>>>,
    failing: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    /// Ids of the submissions a notification was attempted for and succeeded.
    pub fn notified(&self) -> Vec<Uuid> {
        self.notified.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactNotifier for RecordingNotifier {
    async fn notify_new_submission(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), ContactNotificationError> {
        if self.failing {
            return Err(ContactNotificationError::EmailSendingFailed(
                "smtp unreachable".to_string(),
            ));
        }
        self.notified.lock().unwrap().push(submission.id);
        Ok(())
    }
}

// ============================================================================
// Live snapshots
// ============================================================================

/// Answers every read with fixed content and counts reads per collection.
#[derive(Clone, Default)]
pub struct FakeSnapshots {
    reads: Arc<Mutex<HashMap<Collection, usize>>>,
    failure: Option<String>,
}

impl FakeSnapshots {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn reads_of(&self, collection: Collection) -> usize {
        self.reads
            .lock()
            .unwrap()
            .get(&collection)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl SnapshotSource for FakeSnapshots {
    async fn read(&self, collection: Collection) -> Result<Snapshot, StoreFailure> {
        *self.reads.lock().unwrap().entry(collection).or_insert(0) += 1;

        if let Some(msg) = &self.failure {
            return Err(StoreFailure::classify(msg.clone()));
        }

        Ok(match collection {
            Collection::Portfolio => Snapshot::Portfolio(bundled_defaults().document.clone()),
            Collection::Projects => Snapshot::Projects(Vec::new()),
            Collection::ContactSubmissions => Snapshot::ContactSubmissions(ContactInbox {
                items: Vec::new(),
                unread_count: 0,
            }),
        })
    }
}
