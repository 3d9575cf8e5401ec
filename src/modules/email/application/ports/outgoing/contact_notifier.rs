use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactSubmission;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

/// Tells the site owner about a new contact message.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify_new_submission(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), ContactNotificationError>;
}
