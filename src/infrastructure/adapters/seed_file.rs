//! Seed File - JSON 种子文件读取
//!
//! 文件内容是 `CreateAuthor` 的 JSON 数组（camelCase 字段）

use std::path::Path;
use thiserror::Error;
use tokio::fs;

use crate::application::commands::CreateAuthor;

/// 种子文件错误
#[derive(Debug, Error)]
pub enum SeedFileError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// 读取种子文件
///
/// 这里只做 JSON 结构解析，字段校验交给导入命令逐行完成
pub async fn read_seed_file(path: impl AsRef<Path>) -> Result<Vec<CreateAuthor>, SeedFileError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).await.map_err(|source| SeedFileError::Io {
        path: path_str.clone(),
        source,
    })?;

    let rows: Vec<CreateAuthor> =
        serde_json::from_str(&content).map_err(|source| SeedFileError::Parse {
            path: path_str.clone(),
            source,
        })?;

    tracing::debug!(path = %path_str, rows = rows.len(), "Seed file loaded");

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_read_seed_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("authors.json");
        let content = r#"[
            {
                "id": "d441c4d8-efd0-4898-876a-1c39f94dc197",
                "avatarUrl": "www.google.com",
                "activationToken": "abcdefghijklmnopqrstuvwxyzabcdef",
                "email": "test@test.com",
                "hash": "hash",
                "username": "Testuser"
            },
            {
                "id": "not-a-uuid",
                "avatarUrl": "",
                "activationToken": "",
                "email": "",
                "hash": "",
                "username": ""
            }
        ]"#;
        fs::write(&path, content).await.unwrap();

        let rows = read_seed_file(&path).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].avatar_url, "www.google.com");
        // 结构合法即可读取，校验在导入时进行
        assert_eq!(rows[1].id, "not-a-uuid");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let temp_dir = tempdir().unwrap();
        let result = read_seed_file(temp_dir.path().join("missing.json")).await;
        assert!(matches!(result, Err(SeedFileError::Io { .. })));
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, r#"[{"id": "x"}]"#).await.unwrap();

        let result = read_seed_file(&path).await;
        assert!(matches!(result, Err(SeedFileError::Parse { .. })));
    }
}
