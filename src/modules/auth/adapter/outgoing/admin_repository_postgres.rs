use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::admin_query_postgres::model_to_admin;
use crate::modules::auth::adapter::outgoing::sea_orm_entity::admin_users::ActiveModel;
use crate::modules::auth::application::domain::entities::{Admin, NewAdmin};
use crate::modules::auth::application::ports::outgoing::{AdminRepository, AdminRepositoryError};

#[derive(Clone)]
pub struct AdminRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminRepository for AdminRepositoryPostgres {
    async fn create(&self, admin: NewAdmin) -> Result<Admin, AdminRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(admin.email),
            display_name: Set(admin.display_name),
            password_hash: Set(admin.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_email_error)?;
        Ok(model_to_admin(inserted))
    }
}

fn map_email_error(e: DbErr) -> AdminRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("email")
    {
        AdminRepositoryError::EmailAlreadyExists
    } else {
        AdminRepositoryError::DatabaseError(e.to_string())
    }
}
