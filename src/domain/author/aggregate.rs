//! Author Context - Aggregate Root

use serde::{Deserialize, Serialize};

use super::{
    ActivationToken, AuthorError, AuthorId, AvatarUrl, Email, PasswordHash, Username,
};

/// Author 聚合根
///
/// 不变量:
/// - id 总是合法的 UUID
/// - 所有文本字段清洗后非空，且不超过各自的最大长度
/// - 修改失败时保留原值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthorDto", into = "AuthorDto")]
pub struct Author {
    id: AuthorId,
    avatar_url: AvatarUrl,
    activation_token: ActivationToken,
    email: Email,
    hash: PasswordHash,
    username: Username,
}

impl Author {
    /// 从原始输入创建作者
    ///
    /// 按 id → avatarUrl → activationToken → email → hash → username
    /// 的顺序校验，返回第一个错误
    pub fn new(
        id: &str,
        avatar_url: &str,
        activation_token: &str,
        email: &str,
        hash: &str,
        username: &str,
    ) -> Result<Self, AuthorError> {
        Ok(Self::from_parts(
            AuthorId::parse(id)?,
            AvatarUrl::new(avatar_url)?,
            ActivationToken::new(activation_token)?,
            Email::new(email)?,
            PasswordHash::new(hash)?,
            Username::new(username)?,
        ))
    }

    /// 用已校验的值对象创建作者
    pub fn from_parts(
        id: AuthorId,
        avatar_url: AvatarUrl,
        activation_token: ActivationToken,
        email: Email,
        hash: PasswordHash,
        username: Username,
    ) -> Self {
        Self {
            id,
            avatar_url,
            activation_token,
            email,
            hash,
            username,
        }
    }

    pub fn set_id(&mut self, id: &str) -> Result<(), AuthorError> {
        self.id = AuthorId::parse(id)?;
        Ok(())
    }

    pub fn set_avatar_url(&mut self, avatar_url: &str) -> Result<(), AuthorError> {
        self.avatar_url = AvatarUrl::new(avatar_url)?;
        Ok(())
    }

    pub fn set_activation_token(&mut self, activation_token: &str) -> Result<(), AuthorError> {
        self.activation_token = ActivationToken::new(activation_token)?;
        Ok(())
    }

    pub fn set_email(&mut self, email: &str) -> Result<(), AuthorError> {
        self.email = Email::new(email)?;
        Ok(())
    }

    pub fn set_hash(&mut self, hash: &str) -> Result<(), AuthorError> {
        self.hash = PasswordHash::new(hash)?;
        Ok(())
    }

    pub fn set_username(&mut self, username: &str) -> Result<(), AuthorError> {
        self.username = Username::new(username)?;
        Ok(())
    }

    // Getters
    pub fn id(&self) -> &AuthorId {
        &self.id
    }

    pub fn avatar_url(&self) -> &str {
        self.avatar_url.as_str()
    }

    pub fn activation_token(&self) -> &str {
        self.activation_token.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn hash(&self) -> &str {
        self.hash.as_str()
    }

    pub fn username(&self) -> &str {
        self.username.as_str()
    }
}

/// 对外展示格式
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthorDto {
    id: String,
    avatar_url: String,
    activation_token: String,
    email: String,
    hash: String,
    username: String,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.to_string(),
            avatar_url: author.avatar_url.into(),
            activation_token: author.activation_token.into(),
            email: author.email.into(),
            hash: author.hash.into(),
            username: author.username.into(),
        }
    }
}

impl TryFrom<AuthorDto> for Author {
    type Error = AuthorError;

    fn try_from(dto: AuthorDto) -> Result<Self, Self::Error> {
        Author::new(
            &dto.id,
            &dto.avatar_url,
            &dto.activation_token,
            &dto.email,
            &dto.hash,
            &dto.username,
        )
    }
}
