//! Domain Layer - 领域层
//!
//! 目前只有一个限界上下文:
//! - Author Context: 作者资料

pub mod author;
