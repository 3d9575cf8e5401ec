use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::media::application::domain::upload_policy::UploadKind;
use crate::shared::validation::{self, ValidationError};

/// A file part as received, before any policy check.
#[derive(Debug, Clone)]
pub struct UploadInput {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("File is empty")]
    Empty,

    #[error("{0} files are not accepted here")]
    UnsupportedType(String),

    #[error("File exceeds the {limit} byte limit")]
    TooLarge { limit: usize },
}

/// An upload that passed the policy for its kind, with its storage key.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedUpload {
    key: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl ValidatedUpload {
    pub fn new(kind: UploadKind, input: UploadInput) -> Result<Self, UploadRejection> {
        let file_name = validation::text(
            "fileName",
            &input.file_name,
            1,
            UploadKind::MAX_FILE_NAME_LEN,
        )?;

        if input.bytes.is_empty() {
            return Err(UploadRejection::Empty);
        }
        if !kind.accepts(&input.content_type) {
            return Err(UploadRejection::UnsupportedType(input.content_type));
        }
        if input.bytes.len() > kind.max_bytes() {
            return Err(UploadRejection::TooLarge {
                limit: kind.max_bytes(),
            });
        }

        Ok(Self {
            key: format!(
                "{}/{}-{}",
                kind.as_str(),
                Uuid::new_v4(),
                sanitize_file_name(&file_name)
            ),
            content_type: input.content_type.trim().to_ascii_lowercase(),
            bytes: input.bytes,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UploadedFile {
    pub url: String,
}

/// Keeps `[A-Za-z0-9._-]`, turns anything else into `-` and squeezes runs.
pub fn sanitize_file_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let c = if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
            c
        } else {
            '-'
        };
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }

    let trimmed = out.trim_matches(|c| c == '-' || c == '.');
    if trimmed.is_empty() {
        "file".to_string()
    } else {
        trimmed.to_string()
    }
}
