use chrono::{DateTime, Utc};

use crate::error::ValidationError;

pub const CONTENT_MIN_LEN: usize = 10;
pub const CONTENT_MAX_LEN: usize = 2000;

/// Minutes after creation during which a comment may still be edited.
pub const EDIT_WINDOW_MINUTES: i64 = 15;

#[derive(Debug, Default, PartialEq, Clone)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub user_id: String,
    pub prompt_id: String,
    pub is_edited: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A comment joined with its author's username.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub username: String,
}

impl Comment {
    /// Whole minutes elapsed since creation, rounded toward negative infinity.
    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_milliseconds().div_euclid(60_000)
    }

    /// The window is measured from `created_at`, so earlier edits never
    /// extend it.
    pub fn is_editable_at(&self, now: DateTime<Utc>) -> bool {
        self.elapsed_minutes(now) < EDIT_WINDOW_MINUTES
    }
}

/// Comment text, trimmed and within the allowed length.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Content(String);

impl Content {
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        let raw = match raw {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Err(ValidationError::ContentRequired),
        };

        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        if !(CONTENT_MIN_LEN..=CONTENT_MAX_LEN).contains(&len) {
            return Err(ValidationError::ContentLength);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
