mod delete_submission;
mod list_submissions;
mod mark_all_submissions_read;
mod mark_submission_read;
mod submit_contact;

pub use delete_submission::*;
pub use list_submissions::*;
pub use mark_all_submissions_read::*;
pub use mark_submission_read::*;
pub use submit_contact::*;
