use std::sync::Arc;

use crate::modules::portfolio::application::domain::entities::{
    Achievement, Experience, Service, SkillCategory,
};
use crate::modules::portfolio::application::use_cases::{
    GetPortfolioUseCase, ManageListUseCase, UpdateProfileUseCase, UpdateSettingsUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get: Arc<dyn GetPortfolioUseCase>,
    pub update_profile: Arc<dyn UpdateProfileUseCase>,
    pub update_settings: Arc<dyn UpdateSettingsUseCase>,
    pub skills: Arc<dyn ManageListUseCase<SkillCategory>>,
    pub experience: Arc<dyn ManageListUseCase<Experience>>,
    pub achievements: Arc<dyn ManageListUseCase<Achievement>>,
    pub services: Arc<dyn ManageListUseCase<Service>>,
}
