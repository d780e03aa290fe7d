use chrono::{DateTime, Utc};

#[derive(Debug, Default, PartialEq, Clone)]
pub struct Prompt {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// A prompt together with the number of comments attached to it.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct PromptWithCount {
    pub prompt: Prompt,
    pub comment_count: u64,
}
