use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{self, Column, Entity};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectQueryError};

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_project(model: projects::Model) -> Result<Project, ProjectQueryError> {
    let tags: Vec<String> = serde_json::from_value(model.tags).map_err(|e| {
        ProjectQueryError::DatabaseError(format!("project {} has malformed tags: {}", model.id, e))
    })?;

    Ok(Project {
        id: model.id,
        title: model.title,
        description: model.description,
        tags,
        image_url: model.image_url,
        live_url: model.live_url,
        source_url: model.source_url,
        created_at: model.created_at.into(),
    })
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list(&self) -> Result<Vec<Project>, ProjectQueryError> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| ProjectQueryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(model_to_project)
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, ProjectQueryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| ProjectQueryError::DatabaseError(e.to_string()))?
            .map(model_to_project)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use serde_json::json;

    fn model(title: &str, tags: serde_json::Value) -> projects::Model {
        let now = Utc::now().fixed_offset();
        projects::Model {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: "Some description".to_string(),
            tags,
            image_url: "https://cdn.example.com/a.png".to_string(),
            live_url: None,
            source_url: Some("https://github.com/me/a".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn list_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                model("B", json!(["rust"])),
                model("A", json!(["go", "k8s"])),
            ]])
            .into_connection();

        let projects = ProjectQueryPostgres::new(Arc::new(db)).list().await.unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].title, "B");
        assert_eq!(projects[1].tags, ["go", "k8s"]);
        assert_eq!(projects[1].source_url.as_deref(), Some("https://github.com/me/a"));
    }

    #[tokio::test]
    async fn malformed_tags_are_a_query_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("Broken", json!({"not": "a list"}))]])
            .into_connection();

        let res = ProjectQueryPostgres::new(Arc::new(db)).list().await;
        assert!(matches!(res, Err(ProjectQueryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn find_by_id_returns_none_when_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<projects::Model>::new()])
            .into_connection();

        let res = ProjectQueryPostgres::new(Arc::new(db))
            .find_by_id(Uuid::new_v4())
            .await
            .unwrap();
        assert!(res.is_none());
    }

    #[tokio::test]
    async fn database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection reset".into())])
            .into_connection();

        let res = ProjectQueryPostgres::new(Arc::new(db)).list().await;
        assert!(matches!(res, Err(ProjectQueryError::DatabaseError(_))));
    }
}
