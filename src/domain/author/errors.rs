//! Author Context - Errors

use std::fmt;

use thiserror::Error;

/// 作者实体的字段
///
/// 顺序即构造时的校验顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorField {
    Id,
    AvatarUrl,
    ActivationToken,
    Email,
    Hash,
    Username,
}

impl AuthorField {
    /// 全部字段，按校验顺序
    pub const ALL: [AuthorField; 6] = [
        AuthorField::Id,
        AuthorField::AvatarUrl,
        AuthorField::ActivationToken,
        AuthorField::Email,
        AuthorField::Hash,
        AuthorField::Username,
    ];

    /// 对外展示用的字段名（camelCase）
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorField::Id => "id",
            AuthorField::AvatarUrl => "avatarUrl",
            AuthorField::ActivationToken => "activationToken",
            AuthorField::Email => "email",
            AuthorField::Hash => "hash",
            AuthorField::Username => "username",
        }
    }

    /// 存储层列名
    pub fn column(&self) -> &'static str {
        match self {
            AuthorField::Id => "authorId",
            AuthorField::AvatarUrl => "authorAvatarUrl",
            AuthorField::ActivationToken => "authorActivationToken",
            AuthorField::Email => "authorEmail",
            AuthorField::Hash => "authorHash",
            AuthorField::Username => "authorUsername",
        }
    }
}

impl fmt::Display for AuthorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 作者校验错误
///
/// 全部是输入错误，由调用方修正后重试
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorError {
    #[error("无效的作者 ID: {0}")]
    InvalidIdentifier(String),

    #[error("字段 {field} 为空或包含不安全内容")]
    EmptyOrUnsafeValue { field: AuthorField },

    #[error("字段 {field} 过长: {actual} 个字符，最多 {max} 个")]
    ValueTooLong {
        field: AuthorField,
        max: usize,
        actual: usize,
    },
}

impl AuthorError {
    /// 出错的字段
    pub fn field(&self) -> AuthorField {
        match self {
            AuthorError::InvalidIdentifier(_) => AuthorField::Id,
            AuthorError::EmptyOrUnsafeValue { field } => *field,
            AuthorError::ValueTooLong { field, .. } => *field,
        }
    }
}
