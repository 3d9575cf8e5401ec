use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::portfolio::application::domain::entities::{
    Achievement, ContactInfo, Experience, Hero, PortfolioDocument, PortfolioPatch, Service,
    SiteSettings, SkillCategory,
};
use crate::shared::validation::{self, ValidationError};

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    pub name: String,
    pub title: String,
    pub description: String,
    pub about_subtitle: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub twitter_url: Option<String>,
}

/// A validated profile form. Touches the hero, the about subtitle and the
/// contact block.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileUpdate {
    hero: Hero,
    about_subtitle: String,
    contact: ContactInfo,
}

impl ProfileUpdate {
    pub fn new(input: ProfileInput) -> Result<Self, ValidationError> {
        let hero = Hero {
            name: validation::text("name", &input.name, 2, 100)?,
            title: validation::text("title", &input.title, 2, 100)?,
            description: validation::text("description", &input.description, 10, 500)?,
            avatar_url: validation::optional_url("avatarUrl", input.avatar_url.as_deref())?,
            resume_url: validation::optional_url("resumeUrl", input.resume_url.as_deref())?,
        };
        let about_subtitle = validation::text("aboutSubtitle", &input.about_subtitle, 10, 1000)?;
        let contact = ContactInfo {
            email: validation::email("email", &input.email)?,
            phone: validation::optional_text("phone", input.phone.as_deref(), 30)?,
            location: validation::optional_text("location", input.location.as_deref(), 100)?,
            github_url: validation::optional_url("githubUrl", input.github_url.as_deref())?,
            linkedin_url: validation::optional_url("linkedinUrl", input.linkedin_url.as_deref())?,
            twitter_url: validation::optional_url("twitterUrl", input.twitter_url.as_deref())?,
        };

        Ok(Self {
            hero,
            about_subtitle,
            contact,
        })
    }

    pub fn into_patch(self) -> PortfolioPatch {
        PortfolioPatch {
            hero: Some(self.hero),
            about_subtitle: Some(self.about_subtitle),
            contact: Some(self.contact),
            ..Default::default()
        }
    }
}

// ============================================================================
// Settings
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsInput {
    pub site_title: String,
    #[serde(default)]
    pub site_description: String,
    pub contact_form_enabled: bool,
    pub maintenance_mode: bool,
}

impl SiteSettings {
    pub fn new(input: SettingsInput) -> Result<Self, ValidationError> {
        Ok(Self {
            site_title: validation::text("siteTitle", &input.site_title, 2, 100)?,
            site_description: validation::text("siteDescription", &input.site_description, 0, 300)?,
            contact_form_enabled: input.contact_form_enabled,
            maintenance_mode: input.maintenance_mode,
        })
    }
}

// ============================================================================
// Embedded list items
// ============================================================================

/// An item kept as an array inside the portfolio document.
pub trait EmbeddedItem: Clone + Send + Sync + 'static {
    type Input: Send + 'static;

    /// Snake-case name used in operation names, e.g. `add_skill_category`.
    const KIND: &'static str;
    /// Human name used in action messages.
    const LABEL: &'static str;

    fn id(&self) -> &str;

    /// Validates `input` into the item stored under `id`.
    fn new(id: String, input: Self::Input) -> Result<Self, ValidationError>;

    fn section(document: &PortfolioDocument) -> &[Self];

    fn into_patch(items: Vec<Self>) -> PortfolioPatch;
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategoryInput {
    pub title: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl EmbeddedItem for SkillCategory {
    type Input = SkillCategoryInput;
    const KIND: &'static str = "skill_category";
    const LABEL: &'static str = "Skill category";

    fn id(&self) -> &str {
        &self.id
    }

    fn new(id: String, input: SkillCategoryInput) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            title: validation::text("title", &input.title, 2, 50)?,
            skills: validation::text_list("skills", &input.skills, (1, 30), 50)?,
        })
    }

    fn section(document: &PortfolioDocument) -> &[Self] {
        &document.about.skills
    }

    fn into_patch(items: Vec<Self>) -> PortfolioPatch {
        PortfolioPatch {
            skills: Some(items),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceInput {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

impl EmbeddedItem for Experience {
    type Input = ExperienceInput;
    const KIND: &'static str = "experience";
    const LABEL: &'static str = "Experience";

    fn id(&self) -> &str {
        &self.id
    }

    fn new(id: String, input: ExperienceInput) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            role: validation::text("role", &input.role, 2, 100)?,
            company: validation::text("company", &input.company, 2, 100)?,
            period: validation::text("period", &input.period, 2, 50)?,
            description: validation::text("description", &input.description, 10, 1000)?,
        })
    }

    fn section(document: &PortfolioDocument) -> &[Self] {
        &document.about.experience
    }

    fn into_patch(items: Vec<Self>) -> PortfolioPatch {
        PortfolioPatch {
            experience: Some(items),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AchievementInput {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
}

impl EmbeddedItem for Achievement {
    type Input = AchievementInput;
    const KIND: &'static str = "achievement";
    const LABEL: &'static str = "Achievement";

    fn id(&self) -> &str {
        &self.id
    }

    fn new(id: String, input: AchievementInput) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            title: validation::text("title", &input.title, 2, 100)?,
            issuer: validation::text("issuer", &input.issuer, 2, 100)?,
            date: validation::text("date", &input.date, 2, 50)?,
            description: validation::text("description", &input.description, 10, 500)?,
        })
    }

    fn section(document: &PortfolioDocument) -> &[Self] {
        &document.achievements
    }

    fn into_patch(items: Vec<Self>) -> PortfolioPatch {
        PortfolioPatch {
            achievements: Some(items),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInput {
    pub title: String,
    pub description: String,
}

impl EmbeddedItem for Service {
    type Input = ServiceInput;
    const KIND: &'static str = "service";
    const LABEL: &'static str = "Service";

    fn id(&self) -> &str {
        &self.id
    }

    fn new(id: String, input: ServiceInput) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            title: validation::text("title", &input.title, 2, 100)?,
            description: validation::text("description", &input.description, 10, 500)?,
        })
    }

    fn section(document: &PortfolioDocument) -> &[Self] {
        &document.services
    }

    fn into_patch(items: Vec<Self>) -> PortfolioPatch {
        PortfolioPatch {
            services: Some(items),
            ..Default::default()
        }
    }
}
