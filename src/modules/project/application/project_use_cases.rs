use std::sync::Arc;

use crate::modules::project::application::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, GetSingleProjectUseCase,
    UpdateProjectUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub create: Arc<dyn CreateProjectUseCase>,
    pub update: Arc<dyn UpdateProjectUseCase>,
    pub delete: Arc<dyn DeleteProjectUseCase>,
    pub list: Arc<dyn GetProjectsUseCase>,
    pub single: Arc<dyn GetSingleProjectUseCase>,
}
