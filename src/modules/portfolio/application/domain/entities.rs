use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::project::application::domain::entities::Project;

// ============================================================================
// Sections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub name: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub subtitle: String,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub id: String,
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub site_title: String,
    pub site_description: String,
    pub contact_form_enabled: bool,
    pub maintenance_mode: bool,
}

// ============================================================================
// Aggregates
// ============================================================================

/// The stored singleton. Projects live in their own collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDocument {
    pub hero: Hero,
    pub about: About,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub services: Vec<Service>,
    pub contact: ContactInfo,
    pub settings: SiteSettings,
}

/// What the public site renders: the singleton merged with all projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub hero: Hero,
    pub about: About,
    pub achievements: Vec<Achievement>,
    pub projects: Vec<Project>,
    pub services: Vec<Service>,
    pub contact: ContactInfo,
    pub settings: SiteSettings,
}

impl PortfolioData {
    pub fn assemble(document: PortfolioDocument, projects: Vec<Project>) -> Self {
        Self {
            hero: document.hero,
            about: document.about,
            achievements: document.achievements,
            projects,
            services: document.services,
            contact: document.contact,
            settings: document.settings,
        }
    }
}

// ============================================================================
// Merge patch
// ============================================================================

/// Sections to overwrite on the singleton. `None` leaves a section untouched.
///
/// `about` is split in three so a profile edit never races a skills edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioPatch {
    pub hero: Option<Hero>,
    pub about_subtitle: Option<String>,
    pub skills: Option<Vec<SkillCategory>>,
    pub experience: Option<Vec<Experience>>,
    pub achievements: Option<Vec<Achievement>>,
    pub services: Option<Vec<Service>>,
    pub contact: Option<ContactInfo>,
    pub settings: Option<SiteSettings>,
}

impl PortfolioPatch {
    pub fn is_empty(&self) -> bool {
        self == &PortfolioPatch::default()
    }

    pub fn apply_to(self, document: &mut PortfolioDocument) {
        if let Some(hero) = self.hero {
            document.hero = hero;
        }
        if let Some(subtitle) = self.about_subtitle {
            document.about.subtitle = subtitle;
        }
        if let Some(skills) = self.skills {
            document.about.skills = skills;
        }
        if let Some(experience) = self.experience {
            document.about.experience = experience;
        }
        if let Some(achievements) = self.achievements {
            document.achievements = achievements;
        }
        if let Some(services) = self.services {
            document.services = services;
        }
        if let Some(contact) = self.contact {
            document.contact = contact;
        }
        if let Some(settings) = self.settings {
            document.settings = settings;
        }
    }
}
