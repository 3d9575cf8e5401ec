pub mod serve_upload;
pub mod upload_file;

pub use serve_upload::{ServeUploadError, ServeUploadService, ServeUploadUseCase, ServedFile};
pub use upload_file::{UploadFileError, UploadFileService, UploadFileUseCase};
