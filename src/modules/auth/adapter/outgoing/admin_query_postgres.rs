use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use std::sync::Arc;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::admin_users::{
    self, Column, Entity,
};
use crate::modules::auth::application::domain::entities::{Admin, AdminId};
use crate::modules::auth::application::ports::outgoing::{AdminQuery, AdminQueryError};

#[derive(Clone)]
pub struct AdminQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn model_to_admin(model: admin_users::Model) -> Admin {
    Admin {
        id: AdminId::from(model.id),
        email: model.email,
        display_name: model.display_name,
        password_hash: model.password_hash,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

#[async_trait]
impl AdminQuery for AdminQueryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AdminQueryError> {
        Entity::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map(|m| m.map(model_to_admin))
            .map_err(|e| AdminQueryError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: AdminId) -> Result<Option<Admin>, AdminQueryError> {
        Entity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map(|m| m.map(model_to_admin))
            .map_err(|e| AdminQueryError::DatabaseError(e.to_string()))
    }

    async fn count(&self) -> Result<u64, AdminQueryError> {
        Entity::find()
            .count(&*self.db)
            .await
            .map_err(|e| AdminQueryError::DatabaseError(e.to_string()))
    }
}
