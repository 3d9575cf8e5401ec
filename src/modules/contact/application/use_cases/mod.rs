pub mod delete_submission;
pub mod list_submissions;
pub mod mark_all_submissions_read;
pub mod mark_submission_read;
pub mod submit_contact;

pub use delete_submission::{DeleteSubmissionService, DeleteSubmissionUseCase};
pub use list_submissions::{ListSubmissionsError, ListSubmissionsService, ListSubmissionsUseCase};
pub use mark_all_submissions_read::{MarkAllSubmissionsReadService, MarkAllSubmissionsReadUseCase};
pub use mark_submission_read::{MarkSubmissionReadService, MarkSubmissionReadUseCase};
pub use submit_contact::{SubmitContactService, SubmitContactUseCase};
