use actix_web::web;
use std::sync::Arc;

use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::use_cases::current_admin::{
    CurrentAdminService, CurrentAdminUseCase,
};
use crate::modules::auth::application::use_cases::login_admin::{
    LoginAdminService, LoginAdminUseCase,
};
use crate::modules::auth::application::use_cases::logout_admin::{
    LogoutAdminService, LogoutAdminUseCase,
};
use crate::modules::auth::application::use_cases::refresh_session::{
    RefreshSessionService, RefreshSessionUseCase,
};
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::use_cases::{
    DeleteSubmissionService, DeleteSubmissionUseCase, ListSubmissionsService,
    ListSubmissionsUseCase, MarkAllSubmissionsReadService, MarkAllSubmissionsReadUseCase,
    MarkSubmissionReadService, MarkSubmissionReadUseCase, SubmitContactService,
    SubmitContactUseCase,
};
use crate::modules::media::application::media_use_cases::MediaUseCases;
use crate::modules::media::application::use_cases::{
    ServeUploadService, ServeUploadUseCase, UploadFileService, UploadFileUseCase,
};
use crate::modules::portfolio::application::domain::entities::{
    Achievement, Experience, Service, SkillCategory,
};
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::use_cases::{
    GetPortfolioService, GetPortfolioUseCase, ManageListService, ManageListUseCase,
    UpdateProfileService, UpdateProfileUseCase, UpdateSettingsService, UpdateSettingsUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::use_cases::{
    CreateProjectService, CreateProjectUseCase, DeleteProjectService, DeleteProjectUseCase,
    GetProjectsService, GetProjectsUseCase, GetSingleProjectService, GetSingleProjectUseCase,
    UpdateProjectService, UpdateProjectUseCase,
};
use crate::modules::realtime::application::live_context::LiveContext;
use crate::tests::support::auth_helper::test_jwt_service;
use crate::tests::support::events::test_dispatcher;
use crate::tests::support::memory_store::{
    InMemoryContacts, InMemoryFiles, InMemoryPortfolio, InMemoryProjects,
};
use crate::tests::support::stubs::{
    FakeHasher, FakeSnapshots, InMemoryAdmins, InMemoryRevocations, RecordingNotifier,
};
use crate::AppState;

/// Application state for route tests. Every use case starts out backed by
/// empty in-memory stores; tests swap in the ones they exercise.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    portfolio: PortfolioUseCases,
    project: ProjectUseCases,
    contact: ContactUseCases,
    media: MediaUseCases,
    live: LiveContext,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let (writes, feed, errors) = test_dispatcher();
        let tokens = Arc::new(test_jwt_service());
        let admins = InMemoryAdmins::default();
        let revocations = InMemoryRevocations::default();
        let portfolio = InMemoryPortfolio::default();
        let projects = InMemoryProjects::default();
        let contacts = InMemoryContacts::default();
        let files = InMemoryFiles::default();

        Self {
            auth: AuthUseCases {
                login: Arc::new(LoginAdminService::new(
                    admins.clone(),
                    Arc::new(FakeHasher),
                    tokens.clone(),
                )),
                refresh: Arc::new(RefreshSessionService::new(
                    revocations.clone(),
                    tokens.clone(),
                )),
                logout: Arc::new(LogoutAdminService::new(revocations, tokens)),
                current: Arc::new(CurrentAdminService::new(admins)),
            },
            portfolio: PortfolioUseCases {
                get: Arc::new(GetPortfolioService::new(portfolio.clone(), projects.clone())),
                update_profile: Arc::new(UpdateProfileService::new(
                    portfolio.clone(),
                    writes.clone(),
                )),
                update_settings: Arc::new(UpdateSettingsService::new(
                    portfolio.clone(),
                    writes.clone(),
                )),
                skills: Arc::new(ManageListService::<_, SkillCategory>::new(
                    portfolio.clone(),
                    writes.clone(),
                )),
                experience: Arc::new(ManageListService::<_, Experience>::new(
                    portfolio.clone(),
                    writes.clone(),
                )),
                achievements: Arc::new(ManageListService::<_, Achievement>::new(
                    portfolio.clone(),
                    writes.clone(),
                )),
                services: Arc::new(ManageListService::<_, Service>::new(
                    portfolio.clone(),
                    writes.clone(),
                )),
            },
            project: ProjectUseCases {
                create: Arc::new(CreateProjectService::new(projects.clone(), writes.clone())),
                update: Arc::new(UpdateProjectService::new(projects.clone(), writes.clone())),
                delete: Arc::new(DeleteProjectService::new(projects.clone(), writes.clone())),
                list: Arc::new(GetProjectsService::new(projects.clone())),
                single: Arc::new(GetSingleProjectService::new(projects)),
            },
            contact: ContactUseCases {
                submit: Arc::new(SubmitContactService::new(
                    contacts.clone(),
                    portfolio,
                    Arc::new(RecordingNotifier::default()),
                    writes.clone(),
                )),
                mark_read: Arc::new(MarkSubmissionReadService::new(
                    contacts.clone(),
                    writes.clone(),
                )),
                mark_all_read: Arc::new(MarkAllSubmissionsReadService::new(
                    contacts.clone(),
                    writes.clone(),
                )),
                delete: Arc::new(DeleteSubmissionService::new(contacts.clone(), writes)),
                list: Arc::new(ListSubmissionsService::new(contacts)),
            },
            media: MediaUseCases {
                upload: Arc::new(UploadFileService::new(files.clone())),
                serve: Arc::new(ServeUploadService::new(files)),
            },
            live: LiveContext {
                source: Arc::new(FakeSnapshots::default()),
                feed,
                errors,
            },
        }
    }
}

impl TestAppStateBuilder {
    // ==================== auth ====================

    pub fn with_login(mut self, uc: Arc<dyn LoginAdminUseCase>) -> Self {
        self.auth.login = uc;
        self
    }

    pub fn with_refresh(mut self, uc: Arc<dyn RefreshSessionUseCase>) -> Self {
        self.auth.refresh = uc;
        self
    }

    pub fn with_logout(mut self, uc: Arc<dyn LogoutAdminUseCase>) -> Self {
        self.auth.logout = uc;
        self
    }

    pub fn with_current_admin(mut self, uc: Arc<dyn CurrentAdminUseCase>) -> Self {
        self.auth.current = uc;
        self
    }

    // ==================== portfolio ====================

    pub fn with_get_portfolio(mut self, uc: Arc<dyn GetPortfolioUseCase>) -> Self {
        self.portfolio.get = uc;
        self
    }

    pub fn with_update_profile(mut self, uc: Arc<dyn UpdateProfileUseCase>) -> Self {
        self.portfolio.update_profile = uc;
        self
    }

    pub fn with_update_settings(mut self, uc: Arc<dyn UpdateSettingsUseCase>) -> Self {
        self.portfolio.update_settings = uc;
        self
    }

    pub fn with_skills(mut self, uc: Arc<dyn ManageListUseCase<SkillCategory>>) -> Self {
        self.portfolio.skills = uc;
        self
    }

    pub fn with_experience(mut self, uc: Arc<dyn ManageListUseCase<Experience>>) -> Self {
        self.portfolio.experience = uc;
        self
    }

    pub fn with_achievements(mut self, uc: Arc<dyn ManageListUseCase<Achievement>>) -> Self {
        self.portfolio.achievements = uc;
        self
    }

    pub fn with_services(mut self, uc: Arc<dyn ManageListUseCase<Service>>) -> Self {
        self.portfolio.services = uc;
        self
    }

    // ==================== projects ====================

    pub fn with_create_project(mut self, uc: Arc<dyn CreateProjectUseCase>) -> Self {
        self.project.create = uc;
        self
    }

    pub fn with_update_project(mut self, uc: Arc<dyn UpdateProjectUseCase>) -> Self {
        self.project.update = uc;
        self
    }

    pub fn with_delete_project(mut self, uc: Arc<dyn DeleteProjectUseCase>) -> Self {
        self.project.delete = uc;
        self
    }

    pub fn with_list_projects(mut self, uc: Arc<dyn GetProjectsUseCase>) -> Self {
        self.project.list = uc;
        self
    }

    pub fn with_single_project(mut self, uc: Arc<dyn GetSingleProjectUseCase>) -> Self {
        self.project.single = uc;
        self
    }

    // ==================== contact ====================

    pub fn with_submit_contact(mut self, uc: Arc<dyn SubmitContactUseCase>) -> Self {
        self.contact.submit = uc;
        self
    }

    pub fn with_mark_submission_read(mut self, uc: Arc<dyn MarkSubmissionReadUseCase>) -> Self {
        self.contact.mark_read = uc;
        self
    }

    pub fn with_mark_all_read(mut self, uc: Arc<dyn MarkAllSubmissionsReadUseCase>) -> Self {
        self.contact.mark_all_read = uc;
        self
    }

    pub fn with_delete_submission(mut self, uc: Arc<dyn DeleteSubmissionUseCase>) -> Self {
        self.contact.delete = uc;
        self
    }

    pub fn with_list_submissions(mut self, uc: Arc<dyn ListSubmissionsUseCase>) -> Self {
        self.contact.list = uc;
        self
    }

    // ==================== media ====================

    pub fn with_upload(mut self, uc: Arc<dyn UploadFileUseCase>) -> Self {
        self.media.upload = uc;
        self
    }

    pub fn with_serve_upload(mut self, uc: Arc<dyn ServeUploadUseCase>) -> Self {
        self.media.serve = uc;
        self
    }

    // ==================== live ====================

    pub fn with_live(mut self, live: LiveContext) -> Self {
        self.live = live;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            portfolio: self.portfolio,
            project: self.project,
            contact: self.contact,
            media: self.media,
            live: self.live,
        })
    }
}
