//! Author Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateAuthor, DeleteAuthor, ImportAuthors, UpdateAuthor};
use crate::application::error::ApplicationError;
use crate::application::ports::{AuthorRepositoryPort, RepositoryError};
use crate::application::queries::handlers::AuthorResponse;
use crate::domain::author::{Author, AuthorError, AuthorField, AuthorId};

/// 从命令构造实体，字段顺序与 `Author::new` 一致
fn author_from_command(command: &CreateAuthor) -> Result<Author, AuthorError> {
    Author::new(
        &command.id,
        &command.avatar_url,
        &command.activation_token,
        &command.email,
        &command.hash,
        &command.username,
    )
}

// ============================================================================
// CreateAuthor
// ============================================================================

/// CreateAuthor Handler
pub struct CreateAuthorHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl CreateAuthorHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(&self, command: CreateAuthor) -> Result<AuthorResponse, ApplicationError> {
        let author = author_from_command(&command)?;

        self.author_repo.insert(&author).await?;

        tracing::info!(
            author_id = %author.id(),
            username = %author.username(),
            "Author created"
        );

        Ok(AuthorResponse::from(author))
    }
}

// ============================================================================
// UpdateAuthor
// ============================================================================

/// UpdateAuthor Handler
///
/// 在副本上逐个调用 mutator，全部成功才写回仓储
pub struct UpdateAuthorHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl UpdateAuthorHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(&self, command: UpdateAuthor) -> Result<AuthorResponse, ApplicationError> {
        let author_id = AuthorId::parse(&command.author_id)?;

        let mut author = self
            .author_repo
            .find_by_id(&author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Author", *author_id.as_uuid()))?;

        if let Some(avatar_url) = &command.avatar_url {
            author.set_avatar_url(avatar_url)?;
        }
        if let Some(activation_token) = &command.activation_token {
            author.set_activation_token(activation_token)?;
        }
        if let Some(email) = &command.email {
            author.set_email(email)?;
        }
        if let Some(hash) = &command.hash {
            author.set_hash(hash)?;
        }
        if let Some(username) = &command.username {
            author.set_username(username)?;
        }

        self.author_repo.update(&author).await?;

        tracing::info!(author_id = %author_id, "Author updated");

        Ok(AuthorResponse::from(author))
    }
}

// ============================================================================
// DeleteAuthor
// ============================================================================

/// DeleteAuthor Handler
pub struct DeleteAuthorHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl DeleteAuthorHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    /// 不读取旧记录，未通过校验的记录也能删除
    pub async fn handle(&self, command: DeleteAuthor) -> Result<(), ApplicationError> {
        let author_id = AuthorId::parse(&command.author_id)?;

        self.author_repo
            .delete(&author_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound(_) => {
                    ApplicationError::not_found("Author", *author_id.as_uuid())
                }
                other => other.into(),
            })?;

        tracing::info!(author_id = %author_id, "Author deleted");

        Ok(())
    }
}

// ============================================================================
// ImportAuthors
// ============================================================================

/// 被拒绝的导入行
#[derive(Debug)]
pub struct ImportRejection {
    /// 在输入中的下标
    pub index: usize,
    pub error: ApplicationError,
}

impl ImportRejection {
    /// 校验失败的字段；重复 ID 等非字段错误返回 None
    pub fn field(&self) -> Option<AuthorField> {
        match &self.error {
            ApplicationError::Validation(e) => Some(e.field()),
            ApplicationError::Repository(RepositoryError::CorruptRow { source, .. }) => {
                Some(source.field())
            }
            _ => None,
        }
    }
}

/// 导入结果
#[derive(Debug, Default)]
pub struct ImportReport {
    pub imported: Vec<AuthorId>,
    pub rejected: Vec<ImportRejection>,
    /// fail_fast 时未处理的行数
    pub skipped: usize,
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty() && self.skipped == 0
    }
}

/// ImportAuthors Handler
///
/// 每一行独立校验、独立写入
pub struct ImportAuthorsHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl ImportAuthorsHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(&self, command: ImportAuthors) -> Result<ImportReport, ApplicationError> {
        let total = command.authors.len();
        let mut report = ImportReport::default();

        for (index, row) in command.authors.iter().enumerate() {
            let result: Result<AuthorId, ApplicationError> = match author_from_command(row) {
                Ok(author) => self
                    .author_repo
                    .insert(&author)
                    .await
                    .map(|_| *author.id())
                    .map_err(ApplicationError::from),
                Err(e) => Err(e.into()),
            };

            match result {
                Ok(author_id) => {
                    tracing::debug!(index, author_id = %author_id, "Author imported");
                    report.imported.push(author_id);
                }
                Err(error) => {
                    tracing::warn!(index, error = %error, "Author rejected");
                    report.rejected.push(ImportRejection { index, error });
                    if command.fail_fast {
                        report.skipped = total - index - 1;
                        break;
                    }
                }
            }
        }

        tracing::info!(
            imported = report.imported.len(),
            rejected = report.rejected.len(),
            skipped = report.skipped,
            "Author import finished"
        );

        Ok(report)
    }
}
