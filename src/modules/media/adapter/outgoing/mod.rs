pub mod gcs_file_storage;
pub mod local_file_storage;

pub use gcs_file_storage::GcsFileStorage;
pub use local_file_storage::LocalFileStorage;
