//! Quill - 作者资料登记
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Author Context: 作者资料、字段清洗与校验
//!
//! 应用层 (application/):
//! - Ports: 端口定义（AuthorRepository）
//! - Commands: CQRS 命令处理器（创建、修改、删除、批量导入）
//! - Queries: CQRS 查询处理器（按 ID、按字段子串、全部）
//!
//! 基础设施层 (infrastructure/):
//! - Memory: AuthorRepository 内存实现
//! - Adapters: JSON 种子文件读取

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
pub use domain::author::{Author, AuthorError, AuthorId};
