//! Author Query Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{AuthorRepositoryPort, AuthorSearchField};
use crate::application::queries::{GetAuthor, ListAuthors, SearchAuthors};
use crate::domain::author::{sanitize_text, Author, AuthorId};

// ============================================================================
// Response DTOs
// ============================================================================

/// 作者详情响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: String,
    pub avatar_url: String,
    pub activation_token: String,
    pub email: String,
    pub hash: String,
    pub username: String,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id().to_string(),
            avatar_url: author.avatar_url().to_string(),
            activation_token: author.activation_token().to_string(),
            email: author.email().to_string(),
            hash: author.hash().to_string(),
            username: author.username().to_string(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetAuthor Handler
pub struct GetAuthorHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl GetAuthorHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(&self, query: GetAuthor) -> Result<AuthorResponse, ApplicationError> {
        let author_id = AuthorId::parse(&query.author_id)?;

        let author = self
            .author_repo
            .find_by_id(&author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Author", *author_id.as_uuid()))?;

        Ok(AuthorResponse::from(author))
    }
}

/// SearchAuthors Handler
///
/// 搜索词与字段值使用同一套清洗规则
pub struct SearchAuthorsHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl SearchAuthorsHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(
        &self,
        query: SearchAuthors,
    ) -> Result<Vec<AuthorResponse>, ApplicationError> {
        let field = AuthorSearchField::from_str(&query.field).ok_or_else(|| {
            ApplicationError::invalid_input(format!("unsearchable field: {}", query.field))
        })?;

        let needle = sanitize_text(&query.needle);
        if needle.is_empty() {
            return Err(ApplicationError::invalid_input("search term is empty"));
        }

        let authors = self.author_repo.find_by_field(field, &needle).await?;

        tracing::debug!(
            field = field.as_str(),
            needle = %needle,
            matches = authors.len(),
            "Author search"
        );

        Ok(authors.into_iter().map(AuthorResponse::from).collect())
    }
}

/// ListAuthors Handler
pub struct ListAuthorsHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl ListAuthorsHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(
        &self,
        _query: ListAuthors,
    ) -> Result<Vec<AuthorResponse>, ApplicationError> {
        let authors = self.author_repo.find_all().await?;
        Ok(authors.into_iter().map(AuthorResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::author::AuthorError;
    use crate::infrastructure::memory::InMemoryAuthorRepository;

    const VALID_ID: &str = "d441c4d8-efd0-4898-876a-1c39f94dc197";
    const OTHER_ID: &str = "0f8fad5b-d9cb-469f-a165-70867728950e";

    async fn seeded_repo() -> Arc<dyn AuthorRepositoryPort> {
        let repo: Arc<dyn AuthorRepositoryPort> = Arc::new(InMemoryAuthorRepository::new());
        let first = Author::new(
            VALID_ID,
            "www.google.com",
            "abcdefghijklmnopqrstuvwxyzabcdef",
            "test@test.com",
            "hash-one",
            "Testuser",
        )
        .unwrap();
        let second = Author::new(
            OTHER_ID,
            "https://example.com/avatar.png",
            "0123456789",
            "someone@example.com",
            "hash-two",
            "Another",
        )
        .unwrap();
        repo.insert(&first).await.unwrap();
        repo.insert(&second).await.unwrap();
        repo
    }

    #[tokio::test]
    async fn test_get_author() {
        let handler = GetAuthorHandler::new(seeded_repo().await);

        let response = handler
            .handle(GetAuthor {
                author_id: VALID_ID.to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.id, VALID_ID);
        assert_eq!(response.username, "Testuser");
    }

    #[tokio::test]
    async fn test_get_author_errors() {
        let handler = GetAuthorHandler::new(seeded_repo().await);

        let result = handler
            .handle(GetAuthor {
                author_id: "not-a-uuid".to_string(),
            })
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Validation(AuthorError::InvalidIdentifier(_)))
        ));

        let result = handler
            .handle(GetAuthor {
                author_id: "11111111-2222-3333-4444-555555555555".to_string(),
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_search_authors() {
        let handler = SearchAuthorsHandler::new(seeded_repo().await);

        let results = handler
            .handle(SearchAuthors {
                field: "email".to_string(),
                needle: " example ".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, OTHER_ID);

        let results = handler
            .handle(SearchAuthors {
                field: "hash".to_string(),
                needle: "hash-".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_search_rejects_bad_input() {
        let handler = SearchAuthorsHandler::new(seeded_repo().await);

        let result = handler
            .handle(SearchAuthors {
                field: "id".to_string(),
                needle: "d441".to_string(),
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::InvalidInput(_))));

        let result = handler
            .handle(SearchAuthors {
                field: "username".to_string(),
                needle: "  <b></b> ".to_string(),
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_list_authors() {
        let handler = ListAuthorsHandler::new(seeded_repo().await);
        let results = handler.handle(ListAuthors).await.unwrap();

        let names: Vec<&str> = results.iter().map(|a| a.username.as_str()).collect();
        assert_eq!(names, vec!["Another", "Testuser"]);
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let author = Author::new(
            VALID_ID,
            "www.google.com",
            "token",
            "test@test.com",
            "hash",
            "Testuser",
        )
        .unwrap();
        let json = serde_json::to_value(AuthorResponse::from(author)).unwrap();
        assert_eq!(json["avatarUrl"], "www.google.com");
        assert_eq!(json["activationToken"], "token");
        assert_eq!(json["id"], VALID_ID);
    }
}
