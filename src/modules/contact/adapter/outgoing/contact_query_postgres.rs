use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_submissions::{
    self, Column, Entity,
};
use crate::modules::contact::application::domain::entities::ContactSubmission;
use crate::modules::contact::application::ports::outgoing::{ContactQuery, ContactQueryError};

#[derive(Clone)]
pub struct ContactQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<contact_submissions::Model> for ContactSubmission {
    fn from(model: contact_submissions::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            subject: model.subject,
            message: model.message,
            is_read: model.is_read,
            created_at: model.created_at.into(),
        }
    }
}

#[async_trait]
impl ContactQuery for ContactQueryPostgres {
    async fn list(&self) -> Result<Vec<ContactSubmission>, ContactQueryError> {
        let rows = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| ContactQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(ContactSubmission::from).collect())
    }

    async fn unread_count(&self) -> Result<u64, ContactQueryError> {
        Entity::find()
            .filter(Column::IsRead.eq(false))
            .count(&*self.db)
            .await
            .map_err(|e| ContactQueryError::DatabaseError(e.to_string()))
    }
}
