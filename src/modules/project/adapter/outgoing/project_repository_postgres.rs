use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    ActiveModel, Column, Entity,
};
use crate::modules::project::application::domain::entities::ProjectDraft;
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create(&self, id: Uuid, draft: ProjectDraft) -> Result<(), ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        let mut model = editable_fields(&draft);
        model.id = Set(id);
        model.created_at = Set(now);
        model.updated_at = Set(now);

        Entity::insert(model)
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn update(&self, id: Uuid, draft: ProjectDraft) -> Result<(), ProjectRepositoryError> {
        let mut model = editable_fields(&draft);
        model.updated_at = Set(Utc::now().fixed_offset());

        let result = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn editable_fields(draft: &ProjectDraft) -> ActiveModel {
    ActiveModel {
        title: Set(draft.title().to_string()),
        description: Set(draft.description().to_string()),
        tags: Set(serde_json::Value::from(draft.tags().to_vec())),
        image_url: Set(draft.image_url().to_string()),
        live_url: Set(draft.live_url().map(str::to_string)),
        source_url: Set(draft.source_url().map(str::to_string)),
        ..Default::default()
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    match e {
        DbErr::RecordNotFound(_) => ProjectRepositoryError::NotFound,
        other => ProjectRepositoryError::DatabaseError(other.to_string()),
    }
}

// ============================================================================
// Tests
// ============================================================================
