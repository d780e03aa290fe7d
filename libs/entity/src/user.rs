use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::error::ValidationError;

#[derive(Debug, Default, PartialEq, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// A username that has passed format validation.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Username(String);

fn username_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_]{3,20}$").expect("username pattern compiles")
    })
}

impl Username {
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        let raw = match raw {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Err(ValidationError::UsernameRequired),
        };

        if !username_pattern().is_match(raw) {
            return Err(ValidationError::InvalidUsername);
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
