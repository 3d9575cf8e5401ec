use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolio::{
    self, ActiveModel, Column, Entity, SINGLETON_ID,
};
use crate::modules::portfolio::application::domain::defaults::bundled_defaults;
use crate::modules::portfolio::application::domain::entities::{
    About, PortfolioDocument, PortfolioPatch,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct PortfolioRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PortfolioRepository for PortfolioRepositoryPostgres {
    async fn load(&self) -> Result<Option<PortfolioDocument>, PortfolioRepositoryError> {
        Entity::find_by_id(SINGLETON_ID.to_string())
            .one(&*self.db)
            .await
            .map_err(|e| PortfolioRepositoryError::DatabaseError(e.to_string()))?
            .map(model_to_document)
            .transpose()
    }

    async fn merge(&self, patch: PortfolioPatch) -> Result<(), PortfolioRepositoryError> {
        if patch.is_empty() {
            return Ok(());
        }

        // INSERT writes defaults + patch; on conflict only the patched
        // columns are taken from EXCLUDED.
        let mut columns = patched_columns(&patch);
        columns.push(Column::UpdatedAt);

        let mut seed = bundled_defaults().document.clone();
        patch.apply_to(&mut seed);
        let row = document_to_active_model(&seed)?;

        Entity::insert(row)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns(columns)
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(|e| PortfolioRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn patched_columns(patch: &PortfolioPatch) -> Vec<Column> {
    [
        (patch.hero.is_some(), Column::Hero),
        (patch.about_subtitle.is_some(), Column::AboutSubtitle),
        (patch.skills.is_some(), Column::Skills),
        (patch.experience.is_some(), Column::Experience),
        (patch.achievements.is_some(), Column::Achievements),
        (patch.services.is_some(), Column::Services),
        (patch.contact.is_some(), Column::Contact),
        (patch.settings.is_some(), Column::Settings),
    ]
    .into_iter()
    .filter_map(|(present, column)| present.then_some(column))
    .collect()
}

fn section<T: DeserializeOwned>(name: &str, value: serde_json::Value) -> Result<T, PortfolioRepositoryError> {
    serde_json::from_value(value)
        .map_err(|e| PortfolioRepositoryError::MalformedDocument(format!("{name}: {e}")))
}

fn to_json<T: Serialize>(name: &str, value: &T) -> Result<serde_json::Value, PortfolioRepositoryError> {
    serde_json::to_value(value)
        .map_err(|e| PortfolioRepositoryError::MalformedDocument(format!("{name}: {e}")))
}

fn model_to_document(model: portfolio::Model) -> Result<PortfolioDocument, PortfolioRepositoryError> {
    Ok(PortfolioDocument {
        hero: section("hero", model.hero)?,
        about: About {
            subtitle: model.about_subtitle,
            skills: section("skills", model.skills)?,
            experience: section("experience", model.experience)?,
        },
        achievements: section("achievements", model.achievements)?,
        services: section("services", model.services)?,
        contact: section("contact", model.contact)?,
        settings: section("settings", model.settings)?,
    })
}

fn document_to_active_model(doc: &PortfolioDocument) -> Result<ActiveModel, PortfolioRepositoryError> {
    Ok(ActiveModel {
        id: Set(SINGLETON_ID.to_string()),
        hero: Set(to_json("hero", &doc.hero)?),
        about_subtitle: Set(doc.about.subtitle.clone()),
        skills: Set(to_json("skills", &doc.about.skills)?),
        experience: Set(to_json("experience", &doc.about.experience)?),
        achievements: Set(to_json("achievements", &doc.achievements)?),
        services: Set(to_json("services", &doc.services)?),
        contact: Set(to_json("contact", &doc.contact)?),
        settings: Set(to_json("settings", &doc.settings)?),
        updated_at: Set(Utc::now().fixed_offset()),
    })
}

// ============================================================================
// Tests
// ============================================================================
