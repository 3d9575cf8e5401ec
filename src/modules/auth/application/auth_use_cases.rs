use std::sync::Arc;

use crate::modules::auth::application::use_cases::{
    current_admin::CurrentAdminUseCase, login_admin::LoginAdminUseCase,
    logout_admin::LogoutAdminUseCase, refresh_session::RefreshSessionUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginAdminUseCase>,
    pub refresh: Arc<dyn RefreshSessionUseCase>,
    pub logout: Arc<dyn LogoutAdminUseCase>,
    pub current: Arc<dyn CurrentAdminUseCase>,
}
