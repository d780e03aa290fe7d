use crate::comment::{CONTENT_MAX_LEN, CONTENT_MIN_LEN};

#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum ValidationError {
    #[error("Username is required")]
    UsernameRequired,

    #[error("Invalid username format")]
    InvalidUsername,

    #[error("Content is required")]
    ContentRequired,

    #[error(
        "Content must be between {} and {} characters",
        CONTENT_MIN_LEN,
        CONTENT_MAX_LEN
    )]
    ContentLength,

    #[error("{0} must be a positive integer")]
    NotPositive(&'static str),

    #[error("{0} is too large")]
    TooLarge(&'static str),
}
