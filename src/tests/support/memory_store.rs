//! In-memory stand-ins for the Postgres and file storage adapters.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::ContactSubmission;
use crate::modules::contact::application::ports::outgoing::{
    ContactQuery, ContactQueryError, ContactRepository, ContactRepositoryError,
};
use crate::modules::media::application::ports::outgoing::{FileStorage, FileStorageError};
use crate::modules::portfolio::application::domain::defaults::bundled_defaults;
use crate::modules::portfolio::application::domain::entities::{PortfolioDocument, PortfolioPatch};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};
use crate::modules::project::application::domain::entities::{Project, ProjectDraft};
use crate::modules::project::application::ports::outgoing::{
    ProjectQuery, ProjectQueryError, ProjectRepository, ProjectRepositoryError,
};

// ============================================================================
// Portfolio
// ============================================================================

pub fn sample_document() -> PortfolioDocument {
    let mut document = bundled_defaults().document.clone();
    document.hero.name = "Test Owner".to_string();
    document.about.subtitle = "Stored subtitle for tests".to_string();
    document
}

#[derive(Clone, Default)]
pub struct InMemoryPortfolio {
    document: Arc<Mutex<Option<PortfolioDocument>>>,
    failure: Option<String>,
}

impl InMemoryPortfolio {
    pub fn with(document: PortfolioDocument) -> Self {
        Self {
            document: Arc::new(Mutex::new(Some(document))),
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn snapshot(&self) -> Option<PortfolioDocument> {
        self.document.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), PortfolioRepositoryError> {
        match &self.failure {
            Some(msg) => Err(PortfolioRepositoryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryPortfolio {
    async fn load(&self) -> Result<Option<PortfolioDocument>, PortfolioRepositoryError> {
        self.check()?;
        Ok(self.snapshot())
    }

    async fn merge(&self, patch: PortfolioPatch) -> Result<(), PortfolioRepositoryError> {
        self.check()?;
        let mut guard = self.document.lock().unwrap();
        let document = guard.get_or_insert_with(|| bundled_defaults().document.clone());
        patch.apply_to(document);
        Ok(())
    }
}

// ============================================================================
// Projects
// ============================================================================

pub fn sample_project(title: &str) -> Project {
    Project {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: "A project used in tests.".to_string(),
        tags: vec!["rust".to_string()],
        image_url: "https://example.com/project.png".to_string(),
        live_url: Some("https://example.com".to_string()),
        source_url: None,
        created_at: Utc::now(),
    }
}

#[derive(Clone, Default)]
pub struct InMemoryProjects {
    projects: Arc<Mutex<Vec<Project>>>,
    failure: Option<String>,
}

impl InMemoryProjects {
    pub fn with(projects: Vec<Project>) -> Self {
        Self {
            projects: Arc::new(Mutex::new(projects)),
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.lock().unwrap().clone()
    }

    fn failure(&self) -> Option<String> {
        self.failure.clone()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjects {
    async fn create(&self, id: Uuid, draft: ProjectDraft) -> Result<(), ProjectRepositoryError> {
        if let Some(msg) = self.failure() {
            return Err(ProjectRepositoryError::DatabaseError(msg));
        }
        self.projects
            .lock()
            .unwrap()
            .push(draft.into_project(id, Utc::now()));
        Ok(())
    }

    async fn update(&self, id: Uuid, draft: ProjectDraft) -> Result<(), ProjectRepositoryError> {
        if let Some(msg) = self.failure() {
            return Err(ProjectRepositoryError::DatabaseError(msg));
        }
        let mut projects = self.projects.lock().unwrap();
        let slot = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProjectRepositoryError::NotFound)?;
        *slot = draft.into_project(id, slot.created_at);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        if let Some(msg) = self.failure() {
            return Err(ProjectRepositoryError::DatabaseError(msg));
        }
        let mut projects = self.projects.lock().unwrap();
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectQuery for InMemoryProjects {
    async fn list(&self) -> Result<Vec<Project>, ProjectQueryError> {
        if let Some(msg) = self.failure() {
            return Err(ProjectQueryError::DatabaseError(msg));
        }
        let mut projects = self.snapshot();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, ProjectQueryError> {
        if let Some(msg) = self.failure() {
            return Err(ProjectQueryError::DatabaseError(msg));
        }
        Ok(self.snapshot().into_iter().find(|p| p.id == id))
    }
}

// ============================================================================
// Contact submissions
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryContacts {
    submissions: Arc<Mutex<Vec<ContactSubmission>>>,
    failure: Option<String>,
}

impl InMemoryContacts {
    pub fn with(submissions: Vec<ContactSubmission>) -> Self {
        Self {
            submissions: Arc::new(Mutex::new(submissions)),
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn snapshot(&self) -> Vec<ContactSubmission> {
        self.submissions.lock().unwrap().clone()
    }

    fn write_check(&self) -> Result<(), ContactRepositoryError> {
        match &self.failure {
            Some(msg) => Err(ContactRepositoryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }

    fn read_check(&self) -> Result<(), ContactQueryError> {
        match &self.failure {
            Some(msg) => Err(ContactQueryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContactRepository for InMemoryContacts {
    async fn insert(&self, submission: ContactSubmission) -> Result<(), ContactRepositoryError> {
        self.write_check()?;
        self.submissions.lock().unwrap().push(submission);
        Ok(())
    }

    async fn mark_read(&self, id: Uuid) -> Result<(), ContactRepositoryError> {
        self.write_check()?;
        let mut submissions = self.submissions.lock().unwrap();
        let target = submissions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(ContactRepositoryError::NotFound)?;
        target.is_read = true;
        Ok(())
    }

    async fn mark_all_read(&self) -> Result<u64, ContactRepositoryError> {
        self.write_check()?;
        let mut changed = 0;
        for submission in self.submissions.lock().unwrap().iter_mut() {
            if !submission.is_read {
                submission.is_read = true;
                changed += 1;
            }
        }
        Ok(changed)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContactRepositoryError> {
        self.write_check()?;
        let mut submissions = self.submissions.lock().unwrap();
        let before = submissions.len();
        submissions.retain(|s| s.id != id);
        if submissions.len() == before {
            return Err(ContactRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ContactQuery for InMemoryContacts {
    async fn list(&self) -> Result<Vec<ContactSubmission>, ContactQueryError> {
        self.read_check()?;
        let mut submissions = self.snapshot();
        submissions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(submissions)
    }

    async fn unread_count(&self) -> Result<u64, ContactQueryError> {
        self.read_check()?;
        Ok(self.snapshot().iter().filter(|s| !s.is_read).count() as u64)
    }
}

// ============================================================================
// Files
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryFiles {
    files: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
    failing: bool,
}

impl InMemoryFiles {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.files.lock().unwrap().keys().cloned().collect()
    }
}

#[async_trait]
impl FileStorage for InMemoryFiles {
    async fn put(
        &self,
        key: &str,
        _content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, FileStorageError> {
        if self.failing {
            return Err(FileStorageError::Unavailable("bucket offline".to_string()));
        }
        self.files.lock().unwrap().insert(key.to_string(), bytes);
        Ok(format!("https://files.test/{key}"))
    }

    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, FileStorageError> {
        if self.failing {
            return Err(FileStorageError::Unavailable("bucket offline".to_string()));
        }
        Ok(self.files.lock().unwrap().get(key).cloned())
    }
}
