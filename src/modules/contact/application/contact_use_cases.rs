use std::sync::Arc;

use crate::modules::contact::application::use_cases::{
    DeleteSubmissionUseCase, ListSubmissionsUseCase, MarkAllSubmissionsReadUseCase,
    MarkSubmissionReadUseCase, SubmitContactUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn SubmitContactUseCase>,
    pub mark_read: Arc<dyn MarkSubmissionReadUseCase>,
    pub mark_all_read: Arc<dyn MarkAllSubmissionsReadUseCase>,
    pub delete: Arc<dyn DeleteSubmissionUseCase>,
    pub list: Arc<dyn ListSubmissionsUseCase>,
}
