//! Author Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{sanitize_text, AuthorError, AuthorField};

/// 作者唯一标识
///
/// 对外总是以标准的带连字符小写形式展示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(Uuid);

impl AuthorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// 解析 UUID 字符串
    pub fn parse(value: &str) -> Result<Self, AuthorError> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| AuthorError::InvalidIdentifier(value.to_string()))
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// 从存储层的原始字节恢复
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// 存储层使用的原始字节
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for AuthorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AuthorId {
    type Err = AuthorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// 清洗并校验一个文本字段
fn bounded_text(field: AuthorField, max: usize, raw: &str) -> Result<String, AuthorError> {
    let value = sanitize_text(raw);
    if value.is_empty() {
        return Err(AuthorError::EmptyOrUnsafeValue { field });
    }

    let actual = value.chars().count();
    if actual > max {
        return Err(AuthorError::ValueTooLong { field, max, actual });
    }

    Ok(value)
}

macro_rules! bounded_text_type {
    ($(#[$meta:meta])* $name:ident, $field:expr, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// 最大字符数
            pub const MAX_LEN: usize = $max;

            pub fn new(value: &str) -> Result<Self, AuthorError> {
                bounded_text($field, Self::MAX_LEN, value).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = AuthorError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(&value)
            }
        }
    };
}

bounded_text_type!(
    /// 头像地址
    AvatarUrl,
    AuthorField::AvatarUrl,
    255
);

bounded_text_type!(
    /// 账户激活令牌
    ActivationToken,
    AuthorField::ActivationToken,
    32
);

bounded_text_type!(
    /// 邮箱
    Email,
    AuthorField::Email,
    128
);

bounded_text_type!(
    /// 密码哈希（argon2 编码串最长 97 字符）
    PasswordHash,
    AuthorField::Hash,
    97
);

bounded_text_type!(
    /// 用户名
    Username,
    AuthorField::Username,
    32
);
