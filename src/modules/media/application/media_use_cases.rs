use std::sync::Arc;

use crate::modules::media::application::use_cases::{ServeUploadUseCase, UploadFileUseCase};

#[derive(Clone)]
pub struct MediaUseCases {
    pub upload: Arc<dyn UploadFileUseCase>,
    pub serve: Arc<dyn ServeUploadUseCase>,
}
