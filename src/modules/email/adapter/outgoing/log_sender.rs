use async_trait::async_trait;

use crate::modules::email::application::ports::outgoing::{EmailError, EmailSender};

/// Stands in for SMTP when no relay is configured. Messages are only logged.
#[derive(Debug, Clone, Default)]
pub struct LogEmailSender;

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError> {
        tracing::info!(%to, %subject, body_len = body.len(), "Email delivery skipped, no SMTP relay configured");
        Ok(())
    }
}
