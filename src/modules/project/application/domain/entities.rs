use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{self, ValidationError};

// ============================================================================
// Project
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image_url: String,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Project form
// ============================================================================

/// Raw project form as submitted by the dashboard.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image_url: String,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

/// A project form that passed validation. Only [`ProjectDraft::new`] builds one.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    title: String,
    description: String,
    tags: Vec<String>,
    image_url: String,
    live_url: Option<String>,
    source_url: Option<String>,
}

impl ProjectDraft {
    pub const TITLE_MAX: usize = 100;
    pub const DESCRIPTION_MAX: usize = 2000;
    pub const MAX_TAGS: usize = 10;
    pub const TAG_MAX: usize = 30;

    pub fn new(input: ProjectInput) -> Result<Self, ValidationError> {
        Ok(Self {
            title: validation::text("title", &input.title, 2, Self::TITLE_MAX)?,
            description: validation::text(
                "description",
                &input.description,
                10,
                Self::DESCRIPTION_MAX,
            )?,
            tags: validation::text_list("tags", &input.tags, (1, Self::MAX_TAGS), Self::TAG_MAX)?,
            image_url: validation::url("imageUrl", &input.image_url)?,
            live_url: validation::optional_url("liveUrl", input.live_url.as_deref())?,
            source_url: validation::optional_url("sourceUrl", input.source_url.as_deref())?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn live_url(&self) -> Option<&str> {
        self.live_url.as_deref()
    }

    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    pub fn into_project(self, id: Uuid, created_at: DateTime<Utc>) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            tags: self.tags,
            image_url: self.image_url,
            live_url: self.live_url,
            source_url: self.source_url,
            created_at,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn valid_input() -> ProjectInput {
        ProjectInput {
            title: "Portfolio CMS".to_string(),
            description: "A small CMS for a personal site.".to_string(),
            tags: vec!["rust".to_string(), "actix".to_string()],
            image_url: "https://cdn.example.com/cms.png".to_string(),
            live_url: Some("https://example.com".to_string()),
            source_url: None,
        }
    }

    #[test]
    fn accepts_valid_input_and_trims() {
        let mut input = valid_input();
        input.title = "  Portfolio CMS  ".to_string();

        let draft = ProjectDraft::new(input).unwrap();
        assert_eq!(draft.title(), "Portfolio CMS");
        assert_eq!(draft.tags(), ["rust", "actix"]);
        assert_eq!(draft.live_url(), Some("https://example.com"));
        assert_eq!(draft.source_url(), None);
    }

    #[test]
    fn title_length_boundaries() {
        let mut input = valid_input();
        input.title = "ab".to_string();
        assert!(ProjectDraft::new(input.clone()).is_ok());

        input.title = "a".to_string();
        assert_eq!(ProjectDraft::new(input.clone()).unwrap_err().field, "title");

        input.title = "x".repeat(ProjectDraft::TITLE_MAX);
        assert!(ProjectDraft::new(input.clone()).is_ok());

        input.title = "x".repeat(ProjectDraft::TITLE_MAX + 1);
        assert_eq!(ProjectDraft::new(input).unwrap_err().field, "title");
    }

    #[test]
    fn description_needs_ten_characters() {
        let mut input = valid_input();
        input.description = "123456789".to_string();
        assert_eq!(ProjectDraft::new(input.clone()).unwrap_err().field, "description");

        input.description = "1234567890".to_string();
        assert!(ProjectDraft::new(input).is_ok());
    }

    #[test]
    fn tags_count_boundaries() {
        let mut input = valid_input();
        input.tags = vec![];
        assert_eq!(ProjectDraft::new(input.clone()).unwrap_err().field, "tags");

        input.tags = (0..ProjectDraft::MAX_TAGS).map(|i| format!("t{i}")).collect();
        assert!(ProjectDraft::new(input.clone()).is_ok());

        input.tags.push("one-too-many".to_string());
        assert_eq!(ProjectDraft::new(input).unwrap_err().field, "tags");
    }

    #[test]
    fn tag_length_boundaries() {
        let mut input = valid_input();
        input.tags = vec!["x".repeat(ProjectDraft::TAG_MAX)];
        assert!(ProjectDraft::new(input.clone()).is_ok());

        input.tags = vec!["x".repeat(ProjectDraft::TAG_MAX + 1)];
        assert_eq!(ProjectDraft::new(input.clone()).unwrap_err().field, "tags");

        input.tags = vec!["   ".to_string()];
        assert_eq!(ProjectDraft::new(input).unwrap_err().field, "tags");
    }

    #[test]
    fn image_url_must_be_http() {
        let mut input = valid_input();
        input.image_url = "ftp://cdn.example.com/cms.png".to_string();
        assert_eq!(ProjectDraft::new(input).unwrap_err().field, "imageUrl");
    }

    #[test]
    fn blank_optional_urls_are_absent() {
        let mut input = valid_input();
        input.live_url = Some("   ".to_string());
        input.source_url = Some(String::new());

        let draft = ProjectDraft::new(input).unwrap();
        assert_eq!(draft.live_url(), None);
        assert_eq!(draft.source_url(), None);
    }

    #[test]
    fn bad_optional_url_is_rejected() {
        let mut input = valid_input();
        input.source_url = Some("github.com/me/repo".to_string());
        assert_eq!(ProjectDraft::new(input).unwrap_err().field, "sourceUrl");
    }

    #[test]
    fn serializes_in_camel_case() {
        let project = ProjectDraft::new(valid_input())
            .unwrap()
            .into_project(Uuid::nil(), Utc::now());
        let json = serde_json::to_value(&project).unwrap();

        assert!(json.get("imageUrl").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json["sourceUrl"].is_null());
    }
}
