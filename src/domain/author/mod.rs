//! Author Context - 作者限界上下文
//!
//! 职责:
//! - 作者资料聚合
//! - 字段清洗与校验

mod aggregate;
mod errors;
mod sanitize;
mod value_objects;

pub use aggregate::Author;
pub use errors::{AuthorError, AuthorField};
pub use sanitize::sanitize_text;
pub use value_objects::{ActivationToken, AuthorId, AvatarUrl, Email, PasswordHash, Username};
