//! Memory Layer - In-Memory State Management
//!
//! 实现 AuthorRepositoryPort 的内存版本，用于导入校验和测试

mod author_repository;

pub use author_repository::InMemoryAuthorRepository;
