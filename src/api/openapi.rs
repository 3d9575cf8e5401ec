use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse, RefreshTokenBody, UploadForm};
use crate::modules::auth::adapter::incoming::web::routes::LoginRequestDto;
use crate::modules::auth::application::domain::entities::AdminProfile;
use crate::modules::auth::application::use_cases::login_admin::LoginResponse;
use crate::modules::auth::application::use_cases::refresh_session::RefreshTokenResponse;
use crate::modules::contact::application::domain::entities::{
    ContactInbox, ContactInput, ContactSubmission,
};
use crate::modules::media::application::domain::entities::UploadedFile;
use crate::modules::media::application::domain::upload_policy::UploadKind;
use crate::modules::portfolio::application::domain::entities::{
    About, Achievement, ContactInfo, Experience, Hero, PortfolioData, PortfolioDocument, Service,
    SiteSettings, SkillCategory,
};
use crate::modules::portfolio::application::domain::forms::{
    AchievementInput, ExperienceInput, ProfileInput, ServiceInput, SettingsInput,
    SkillCategoryInput,
};
use crate::modules::project::application::domain::entities::{Project, ProjectInput};
use crate::modules::realtime::application::domain::entities::{ProviderState, Scope};
use crate::shared::actions::ActionResult;
use crate::shared::events::{Collection, StoreErrorEvent, StoreErrorKind};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Public portfolio content, live updates and the admin dashboard API",
    ),
    paths(
        // Auth
        crate::modules::auth::adapter::incoming::web::routes::login_handler,
        crate::modules::auth::adapter::incoming::web::routes::refresh_handler,
        crate::modules::auth::adapter::incoming::web::routes::logout_handler,
        crate::modules::auth::adapter::incoming::web::routes::session_handler,

        // Portfolio
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::update_profile_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::update_settings_handler,

        // Projects
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_single_project_handler,
        crate::modules::project::adapter::incoming::web::routes::create_project_handler,
        crate::modules::project::adapter::incoming::web::routes::update_project_handler,
        crate::modules::project::adapter::incoming::web::routes::delete_project_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler,
        crate::modules::contact::adapter::incoming::web::routes::list_submissions_handler,
        crate::modules::contact::adapter::incoming::web::routes::mark_submission_read_handler,
        crate::modules::contact::adapter::incoming::web::routes::mark_all_submissions_read_handler,
        crate::modules::contact::adapter::incoming::web::routes::delete_submission_handler,

        // Media
        crate::modules::media::adapter::incoming::web::routes::upload_file_handler,
        crate::modules::media::adapter::incoming::web::routes::serve_upload_handler,

        // Live
        crate::modules::realtime::adapter::incoming::web::routes::live_events_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            ActionResult,
            RefreshTokenBody,

            // Auth
            LoginRequestDto,
            LoginResponse,
            RefreshTokenResponse,
            AdminProfile,

            // Portfolio
            PortfolioData,
            PortfolioDocument,
            Hero,
            About,
            SkillCategory,
            Experience,
            Achievement,
            Service,
            ContactInfo,
            SiteSettings,
            ProfileInput,
            SettingsInput,
            SkillCategoryInput,
            ExperienceInput,
            AchievementInput,
            ServiceInput,

            // Projects
            Project,
            ProjectInput,

            // Contact
            ContactInput,
            ContactSubmission,
            ContactInbox,

            // Media
            UploadForm,
            UploadKind,
            UploadedFile,

            // Live
            Scope,
            ProviderState,
            Collection,
            StoreErrorKind,
            StoreErrorEvent,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin session endpoints"),
        (name = "portfolio", description = "Portfolio content"),
        (name = "projects", description = "Project management"),
        (name = "contact", description = "Contact form and inbox"),
        (name = "media", description = "Image and resume uploads"),
        (name = "live", description = "Server-sent live content updates"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin access token"))
                        .build(),
                ),
            )
        }
    }
}
