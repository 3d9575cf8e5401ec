use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdminId(Uuid);

impl AdminId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for AdminId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<AdminId> for Uuid {
    fn from(id: AdminId) -> Self {
        id.0
    }
}

/// Stored admin account, password hash included. Never serialized.
#[derive(Debug, Clone)]
pub struct Admin {
    pub id: AdminId,
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
}

impl From<&Admin> for AdminProfile {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id.value(),
            email: admin.email.clone(),
            display_name: admin.display_name.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
}
