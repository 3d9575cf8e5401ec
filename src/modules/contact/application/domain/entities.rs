use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{self, ValidationError};

// ============================================================================
// Submission
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Admin view of the inbox, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactInbox {
    pub items: Vec<ContactSubmission>,
    pub unread_count: u64,
}

// ============================================================================
// Contact form
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactDraft {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl ContactDraft {
    pub const NAME_MAX: usize = 100;
    pub const SUBJECT_MAX: usize = 150;
    pub const MESSAGE_MAX: usize = 5000;

    pub fn new(input: ContactInput) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validation::text("name", &input.name, 2, Self::NAME_MAX)?,
            email: validation::email("email", &input.email)?,
            subject: validation::text("subject", &input.subject, 2, Self::SUBJECT_MAX)?,
            message: validation::text("message", &input.message, 10, Self::MESSAGE_MAX)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// New submissions always start unread.
    pub fn into_submission(self, id: Uuid, created_at: DateTime<Utc>) -> ContactSubmission {
        ContactSubmission {
            id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            is_read: false,
            created_at,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn valid_input() -> ContactInput {
        ContactInput {
            name: "Sam Carter".to_string(),
            email: "sam@example.com".to_string(),
            subject: "Project enquiry".to_string(),
            message: "I would like to talk about a new website.".to_string(),
        }
    }

    pub(crate) fn sample_submission() -> ContactSubmission {
        ContactDraft::new(valid_input())
            .unwrap()
            .into_submission(Uuid::new_v4(), Utc::now())
    }

    #[test]
    fn valid_form_becomes_unread_submission() {
        let mut input = valid_input();
        input.email = "  sam@example.com ".to_string();

        let draft = ContactDraft::new(input).unwrap();
        assert_eq!(draft.email(), "sam@example.com");

        let submission = draft.into_submission(Uuid::nil(), Utc::now());
        assert!(!submission.is_read);
        assert_eq!(submission.name, "Sam Carter");
    }

    #[test]
    fn name_length_boundaries() {
        let mut input = valid_input();
        input.name = "Al".to_string();
        assert!(ContactDraft::new(input.clone()).is_ok());

        input.name = "A".to_string();
        assert_eq!(ContactDraft::new(input.clone()).unwrap_err().field, "name");

        input.name = "n".repeat(ContactDraft::NAME_MAX + 1);
        assert_eq!(ContactDraft::new(input).unwrap_err().field, "name");
    }

    #[test]
    fn email_must_be_valid() {
        let mut input = valid_input();
        input.email = "sam.example.com".to_string();
        let err = ContactDraft::new(input).unwrap_err();
        assert_eq!(err.to_string(), "email: must be a valid email address");
    }

    #[test]
    fn subject_length_boundaries() {
        let mut input = valid_input();
        input.subject = "s".repeat(ContactDraft::SUBJECT_MAX);
        assert!(ContactDraft::new(input.clone()).is_ok());

        input.subject = "s".repeat(ContactDraft::SUBJECT_MAX + 1);
        assert_eq!(ContactDraft::new(input).unwrap_err().field, "subject");
    }

    #[test]
    fn message_length_boundaries() {
        let mut input = valid_input();
        input.message = "123456789".to_string();
        assert_eq!(ContactDraft::new(input.clone()).unwrap_err().field, "message");

        input.message = "1234567890".to_string();
        assert!(ContactDraft::new(input.clone()).is_ok());

        input.message = "m".repeat(ContactDraft::MESSAGE_MAX);
        assert!(ContactDraft::new(input.clone()).is_ok());

        input.message = "m".repeat(ContactDraft::MESSAGE_MAX + 1);
        assert_eq!(ContactDraft::new(input).unwrap_err().field, "message");
    }

    #[test]
    fn inbox_serializes_in_camel_case() {
        let inbox = ContactInbox {
            items: vec![sample_submission()],
            unread_count: 1,
        };
        let json = serde_json::to_value(&inbox).unwrap();

        assert_eq!(json["unreadCount"], 1);
        assert_eq!(json["items"][0]["isRead"], false);
        assert!(json["items"][0].get("createdAt").is_some());
    }
}
