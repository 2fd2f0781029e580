//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（AuthorRepository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    CreateAuthor,
    DeleteAuthor,
    ImportAuthors,
    UpdateAuthor,
    // Handlers
    handlers::{
        CreateAuthorHandler, DeleteAuthorHandler, ImportAuthorsHandler, ImportRejection,
        ImportReport, UpdateAuthorHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    AuthorRecord, AuthorRepositoryPort, AuthorSearchField, RepositoryError, AUTHOR_COLUMNS,
    AUTHOR_TABLE,
};

pub use queries::{
    GetAuthor,
    ListAuthors,
    SearchAuthors,
    // Handlers
    handlers::{AuthorResponse, GetAuthorHandler, ListAuthorsHandler, SearchAuthorsHandler},
};
