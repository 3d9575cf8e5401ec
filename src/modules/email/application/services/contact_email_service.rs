use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::modules::contact::application::domain::entities::ContactSubmission;
use crate::modules::email::application::ports::outgoing::{
    ContactNotificationError, ContactNotifier, EmailSender,
};

/// Mails the site owner a plain-text copy of every contact message.
#[derive(Clone)]
pub struct ContactEmailService {
    sender: Arc<dyn EmailSender>,
    recipient: String,
}

impl fmt::Debug for ContactEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("recipient", &self.recipient)
            .finish()
    }
}

impl ContactEmailService {
    pub fn new(sender: Arc<dyn EmailSender>, recipient: impl Into<String>) -> Self {
        Self {
            sender,
            recipient: recipient.into(),
        }
    }

    fn subject(submission: &ContactSubmission) -> String {
        format!("New contact message: {}", submission.subject)
    }

    fn body(submission: &ContactSubmission) -> String {
        format!(
            "From: {} <{}>\nReceived: {}\nSubject: {}\n\n{}\n",
            submission.name,
            submission.email,
            submission.created_at.to_rfc3339(),
            submission.subject,
            submission.message,
        )
    }
}

#[async_trait]
impl ContactNotifier for ContactEmailService {
    async fn notify_new_submission(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), ContactNotificationError> {
        self.sender
            .send_email(
                &self.recipient,
                &Self::subject(submission),
                &Self::body(submission),
            )
            .await
            .map_err(|e| ContactNotificationError::EmailSendingFailed(e.to_string()))
    }
}
