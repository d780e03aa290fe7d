pub mod comment;
pub mod error;
pub mod pagination;
pub mod prompt;
pub mod user;

pub mod prelude {
    pub use crate::comment::Comment as CommentEntity;
    pub use crate::prompt::Prompt as PromptEntity;
    pub use crate::user::User as UserEntity;
}
