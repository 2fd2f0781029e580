//! Author Commands

use serde::Deserialize;

/// 创建作者命令
///
/// 也是种子文件中每一行的格式
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthor {
    pub id: String,
    pub avatar_url: String,
    pub activation_token: String,
    pub email: String,
    pub hash: String,
    pub username: String,
}

/// 修改作者命令
///
/// 只修改给出的字段；ID 不可修改
#[derive(Debug, Clone, Default)]
pub struct UpdateAuthor {
    pub author_id: String,
    pub avatar_url: Option<String>,
    pub activation_token: Option<String>,
    pub email: Option<String>,
    pub hash: Option<String>,
    pub username: Option<String>,
}

/// 删除作者命令
#[derive(Debug, Clone)]
pub struct DeleteAuthor {
    pub author_id: String,
}

/// 批量导入命令
#[derive(Debug, Clone)]
pub struct ImportAuthors {
    pub authors: Vec<CreateAuthor>,
    /// 遇到第一条被拒绝的记录即停止
    pub fail_fast: bool,
}
