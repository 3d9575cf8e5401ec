mod serve_upload;
mod upload_file;

pub use serve_upload::*;
pub use upload_file::*;
