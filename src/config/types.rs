//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 导入配置
    #[serde(default)]
    pub import: ImportConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 导入配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportConfig {
    /// 种子文件路径（JSON 数组），未设置则不导入
    #[serde(default)]
    pub seed_file: Option<PathBuf>,

    /// 遇到第一条被拒绝的记录即停止导入
    #[serde(default)]
    pub fail_fast: bool,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
