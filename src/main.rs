//! Quill - 作者资料登记
//!
//! 启动流程:
//! - 加载配置、初始化日志
//! - 创建内存仓储
//! - 导入种子文件并逐行校验
//! - 输出导入结果

use std::sync::Arc;

use quill::application::{
    AuthorRepositoryPort, ImportAuthors, ImportAuthorsHandler, ListAuthors, ListAuthorsHandler,
};
use quill::config::{load_config, print_config, LogConfig};
use quill::infrastructure::{read_seed_file, InMemoryAuthorRepository};

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},quill={}", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Quill - 作者资料登记");
    print_config(&config);

    let author_repo: Arc<dyn AuthorRepositoryPort> = Arc::new(InMemoryAuthorRepository::new());

    let Some(seed_file) = &config.import.seed_file else {
        tracing::info!("No seed file configured, nothing to import");
        return Ok(());
    };

    let rows = read_seed_file(seed_file).await?;

    let report = ImportAuthorsHandler::new(author_repo.clone())
        .handle(ImportAuthors {
            authors: rows,
            fail_fast: config.import.fail_fast,
        })
        .await?;

    let authors = ListAuthorsHandler::new(author_repo).handle(ListAuthors).await?;
    for author in &authors {
        tracing::info!(author_id = %author.id, username = %author.username, "Registered author");
    }

    if !report.is_clean() {
        anyhow::bail!(
            "Import finished with {} rejected and {} skipped rows",
            report.rejected.len(),
            report.skipped
        );
    }

    tracing::info!(count = authors.len(), "Import complete");

    Ok(())
}
