use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_submissions::{
    ActiveModel, Column, Entity,
};
use crate::modules::contact::application::domain::entities::ContactSubmission;
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};

#[derive(Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn insert(&self, submission: ContactSubmission) -> Result<(), ContactRepositoryError> {
        let model = ActiveModel {
            id: Set(submission.id),
            name: Set(submission.name),
            email: Set(submission.email),
            subject: Set(submission.subject),
            message: Set(submission.message),
            is_read: Set(submission.is_read),
            created_at: Set(submission.created_at.fixed_offset()),
        };

        Entity::insert(model)
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn mark_read(&self, id: Uuid) -> Result<(), ContactRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ContactRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn mark_all_read(&self) -> Result<u64, ContactRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::IsRead.eq(false))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContactRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ContactRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> ContactRepositoryError {
    match e {
        DbErr::RecordNotFound(_) => ContactRepositoryError::NotFound,
        other => ContactRepositoryError::DatabaseError(other.to_string()),
    }
}
