//! Author Queries

/// 获取作者详情查询
#[derive(Debug, Clone)]
pub struct GetAuthor {
    pub author_id: String,
}

/// 按字段子串搜索作者
#[derive(Debug, Clone)]
pub struct SearchAuthors {
    /// 字段名（camelCase，如 `email`）
    pub field: String,
    pub needle: String,
}

/// 列出所有作者查询
#[derive(Debug, Clone)]
pub struct ListAuthors;
