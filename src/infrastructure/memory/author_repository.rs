//! In-Memory Author Repository Implementation

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::ports::{
    AuthorRecord, AuthorRepositoryPort, AuthorSearchField, RepositoryError,
};
use crate::domain::author::{Author, AuthorId};

/// 内存作者仓储
///
/// 保存的是存储层记录，每次读取都经过 `Author::new` 重新校验
pub struct InMemoryAuthorRepository {
    rows: DashMap<Uuid, AuthorRecord>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 绕过实体直接写入记录，用于构造损坏数据
    #[cfg(test)]
    pub(crate) fn put_record(&self, record: AuthorRecord) {
        self.rows.insert(Uuid::from_bytes(record.author_id), record);
    }

    /// 按用户名、ID 排序，保证输出稳定
    fn sorted(mut authors: Vec<Author>) -> Vec<Author> {
        authors.sort_by(|a, b| {
            a.username()
                .cmp(b.username())
                .then_with(|| a.id().cmp(b.id()))
        });
        authors
    }
}

impl Default for InMemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthorRepositoryPort for InMemoryAuthorRepository {
    async fn insert(&self, author: &Author) -> Result<(), RepositoryError> {
        let key = *author.id().as_uuid();
        match self.rows.entry(key) {
            dashmap::mapref::entry::Entry::Occupied(_) => {
                Err(RepositoryError::Duplicate(key.to_string()))
            }
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                entry.insert(AuthorRecord::from(author));
                tracing::debug!(author_id = %key, "Author row inserted");
                Ok(())
            }
        }
    }

    async fn update(&self, author: &Author) -> Result<(), RepositoryError> {
        let key = *author.id().as_uuid();
        let mut row = self
            .rows
            .get_mut(&key)
            .ok_or_else(|| RepositoryError::NotFound(key.to_string()))?;
        *row = AuthorRecord::from(author);
        tracing::debug!(author_id = %key, "Author row updated");
        Ok(())
    }

    async fn delete(&self, id: &AuthorId) -> Result<(), RepositoryError> {
        self.rows
            .remove(id.as_uuid())
            .map(|_| {
                tracing::debug!(author_id = %id, "Author row deleted");
            })
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, RepositoryError> {
        let record = self.rows.get(id.as_uuid()).map(|r| r.clone());
        record.map(Author::try_from).transpose()
    }

    async fn find_by_field(
        &self,
        field: AuthorSearchField,
        needle: &str,
    ) -> Result<Vec<Author>, RepositoryError> {
        let records: Vec<AuthorRecord> = self
            .rows
            .iter()
            .filter(|entry| entry.column(field).contains(needle))
            .map(|entry| entry.value().clone())
            .collect();

        let authors = records
            .into_iter()
            .map(Author::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::sorted(authors))
    }

    async fn find_all(&self) -> Result<Vec<Author>, RepositoryError> {
        let records: Vec<AuthorRecord> = self.rows.iter().map(|e| e.value().clone()).collect();

        let authors = records
            .into_iter()
            .map(Author::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::sorted(authors))
    }
}
