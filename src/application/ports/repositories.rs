//! Repository Ports - 出站端口
//!
//! 定义作者持久化的抽象接口
//! 具体实现在 infrastructure 层（目前只有内存实现）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::author::{Author, AuthorError, AuthorField, AuthorId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Corrupt row {id}: {source}")]
    CorruptRow {
        id: String,
        #[source]
        source: AuthorError,
    },

    #[error("Storage error: {0}")]
    StorageError(String),
}

// ============================================================================
// Storage contract
// ============================================================================

/// 表名
pub const AUTHOR_TABLE: &str = "author";

/// 列名，按存储顺序
pub const AUTHOR_COLUMNS: [&str; 6] = [
    "authorId",
    "authorAvatarUrl",
    "authorActivationToken",
    "authorEmail",
    "authorHash",
    "authorUsername",
];

/// 作者记录（用于持久化）
///
/// 读回时必须经过 `Author::new` 重新校验
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    pub author_id: [u8; 16],
    pub avatar_url: String,
    pub activation_token: String,
    pub email: String,
    pub hash: String,
    pub username: String,
}

impl AuthorRecord {
    /// 取出可搜索列的值
    pub fn column(&self, field: AuthorSearchField) -> &str {
        match field {
            AuthorSearchField::AvatarUrl => &self.avatar_url,
            AuthorSearchField::ActivationToken => &self.activation_token,
            AuthorSearchField::Email => &self.email,
            AuthorSearchField::Hash => &self.hash,
            AuthorSearchField::Username => &self.username,
        }
    }
}

impl From<&Author> for AuthorRecord {
    fn from(author: &Author) -> Self {
        Self {
            author_id: *author.id().as_bytes(),
            avatar_url: author.avatar_url().to_string(),
            activation_token: author.activation_token().to_string(),
            email: author.email().to_string(),
            hash: author.hash().to_string(),
            username: author.username().to_string(),
        }
    }
}

impl TryFrom<AuthorRecord> for Author {
    type Error = RepositoryError;

    fn try_from(record: AuthorRecord) -> Result<Self, Self::Error> {
        let id = AuthorId::from_bytes(record.author_id).to_string();
        Author::new(
            &id,
            &record.avatar_url,
            &record.activation_token,
            &record.email,
            &record.hash,
            &record.username,
        )
        .map_err(|source| RepositoryError::CorruptRow { id, source })
    }
}

/// 支持子串搜索的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorSearchField {
    AvatarUrl,
    ActivationToken,
    Email,
    Hash,
    Username,
}

impl AuthorSearchField {
    pub fn as_str(&self) -> &'static str {
        self.field().as_str()
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "avatarUrl" => Some(AuthorSearchField::AvatarUrl),
            "activationToken" => Some(AuthorSearchField::ActivationToken),
            "email" => Some(AuthorSearchField::Email),
            "hash" => Some(AuthorSearchField::Hash),
            "username" => Some(AuthorSearchField::Username),
            _ => None,
        }
    }

    /// 对应的领域字段
    pub fn field(&self) -> AuthorField {
        match self {
            AuthorSearchField::AvatarUrl => AuthorField::AvatarUrl,
            AuthorSearchField::ActivationToken => AuthorField::ActivationToken,
            AuthorSearchField::Email => AuthorField::Email,
            AuthorSearchField::Hash => AuthorField::Hash,
            AuthorSearchField::Username => AuthorField::Username,
        }
    }

    /// 存储层列名
    pub fn column(&self) -> &'static str {
        self.field().column()
    }
}

// ============================================================================
// Author Repository
// ============================================================================

/// Author Repository Port
#[async_trait]
pub trait AuthorRepositoryPort: Send + Sync {
    /// 新增作者，ID 已存在时返回 Duplicate
    async fn insert(&self, author: &Author) -> Result<(), RepositoryError>;

    /// 覆盖已有作者，ID 不存在时返回 NotFound
    async fn update(&self, author: &Author) -> Result<(), RepositoryError>;

    /// 删除作者
    async fn delete(&self, id: &AuthorId) -> Result<(), RepositoryError>;

    /// 根据 ID 查找作者
    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, RepositoryError>;

    /// 按字段子串查找
    async fn find_by_field(
        &self,
        field: AuthorSearchField,
        needle: &str,
    ) -> Result<Vec<Author>, RepositoryError>;

    /// 获取所有作者
    async fn find_all(&self) -> Result<Vec<Author>, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_ID: &str = "d441c4d8-efd0-4898-876a-1c39f94dc197";

    fn author() -> Author {
        Author::new(
            VALID_ID,
            "www.google.com",
            "abcdefghijklmnopqrstuvwxyzabcdef",
            "test@test.com",
            "hash",
            "Testuser",
        )
        .unwrap()
    }

    #[test]
    fn test_columns_match_fields() {
        let columns: Vec<&str> = AuthorField::ALL.iter().map(|f| f.column()).collect();
        assert_eq!(columns, AUTHOR_COLUMNS);
        assert_eq!(AUTHOR_TABLE, "author");
    }

    #[test]
    fn test_record_roundtrip() {
        let author = author();
        let record = AuthorRecord::from(&author);
        assert_eq!(&record.author_id, author.id().as_bytes());

        let restored = Author::try_from(record).unwrap();
        assert_eq!(restored, author);
    }

    #[test]
    fn test_corrupt_record_is_rejected() {
        let mut record = AuthorRecord::from(&author());
        record.username = "x".repeat(40);

        let err = Author::try_from(record).unwrap_err();
        match err {
            RepositoryError::CorruptRow { id, source } => {
                assert_eq!(id, VALID_ID);
                assert_eq!(source.field(), AuthorField::Username);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_search_field_names() {
        for field in [
            AuthorSearchField::AvatarUrl,
            AuthorSearchField::ActivationToken,
            AuthorSearchField::Email,
            AuthorSearchField::Hash,
            AuthorSearchField::Username,
        ] {
            assert_eq!(AuthorSearchField::from_str(field.as_str()), Some(field));
        }
        assert_eq!(AuthorSearchField::from_str("id"), None);
        assert_eq!(AuthorSearchField::Email.column(), "authorEmail");
    }
}
