use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const MIB: usize = 1024 * 1024;

/// What an upload is for. Each kind has its own size cap and accepted types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UploadKind {
    Image,
    Resume,
}

impl UploadKind {
    pub const MAX_FILE_NAME_LEN: usize = 255;

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadKind::Image => "image",
            UploadKind::Resume => "resume",
        }
    }

    pub fn max_bytes(&self) -> usize {
        match self {
            UploadKind::Image => 5 * MIB,
            UploadKind::Resume => 10 * MIB,
        }
    }

    pub fn allowed_types(&self) -> &'static [&'static str] {
        match self {
            UploadKind::Image => &["image/jpeg", "image/png", "image/webp", "image/gif"],
            UploadKind::Resume => &["application/pdf"],
        }
    }

    pub fn accepts(&self, content_type: &str) -> bool {
        self.allowed_types()
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(content_type.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown upload kind: {0}")]
pub struct UnknownUploadKind(pub String);

impl FromStr for UploadKind {
    type Err = UnknownUploadKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(UploadKind::Image),
            "resume" => Ok(UploadKind::Resume),
            other => Err(UnknownUploadKind(other.to_string())),
        }
    }
}
