//! Field rules shared by every form command.
//!
//! Lengths are counted in characters after trimming. Optional fields treat an
//! empty (or all-whitespace) string as absent.

use std::sync::LazyLock;

use email_address::EmailAddress;
use regex::Regex;

static HTTP_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("url pattern compiles")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub fn text(field: &'static str, value: &str, min: usize, max: usize) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();

    if len < min {
        return Err(if min == 1 {
            ValidationError::new(field, "must not be empty")
        } else {
            ValidationError::new(field, format!("must be at least {min} characters"))
        });
    }
    if len > max {
        return Err(ValidationError::new(
            field,
            format!("must be at most {max} characters"),
        ));
    }

    Ok(trimmed.to_string())
}

pub fn optional_text(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    match non_empty(value) {
        None => Ok(None),
        Some(v) => text(field, v, 1, max).map(Some),
    }
}

pub fn url(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if !HTTP_URL.is_match(trimmed) {
        return Err(ValidationError::new(field, "must be a valid http(s) URL"));
    }
    Ok(trimmed.to_string())
}

pub fn optional_url(field: &'static str, value: Option<&str>) -> Result<Option<String>, ValidationError> {
    non_empty(value).map(|v| url(field, v)).transpose()
}

pub fn email(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if !EmailAddress::is_valid(trimmed) {
        return Err(ValidationError::new(field, "must be a valid email address"));
    }
    Ok(trimmed.to_string())
}

/// A list of short labels (tags, skills). Blank entries count as too short.
pub fn text_list(
    field: &'static str,
    items: &[String],
    count: (usize, usize),
    item_max: usize,
) -> Result<Vec<String>, ValidationError> {
    let (min_items, max_items) = count;

    if items.len() < min_items {
        return Err(ValidationError::new(
            field,
            format!("must contain at least {min_items} item(s)"),
        ));
    }
    if items.len() > max_items {
        return Err(ValidationError::new(
            field,
            format!("must contain at most {max_items} items"),
        ));
    }

    items
        .iter()
        .map(|item| {
            text(field, item, 1, item_max).map_err(|e| {
                ValidationError::new(field, format!("each item {}", e.message))
            })
        })
        .collect()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
