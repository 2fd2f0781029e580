//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod author_handlers;

pub use author_handlers::*;
