//! Catalog - 商品与分类目录
//!
//! 启动流程: 配置 -> 日志 -> 连接池 -> 建表 -> 目录概要

use catalog::application::ListProducts;
use catalog::config::{load_config, print_config};
use catalog::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};
use catalog::infrastructure::CatalogState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!("{},catalog={}", config.log.level, config.log.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Catalog - 商品与分类目录");
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
        busy_timeout: config.database.busy_timeout(),
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    let state = CatalogState::from_pool(pool.clone());

    let categories = state.category_repo.count().await?;
    let products = state
        .list_products_handler
        .handle(ListProducts::default())
        .await?;

    tracing::info!(
        categories,
        products = products.pagination.total,
        "Catalog ready"
    );

    pool.close().await;

    Ok(())
}
