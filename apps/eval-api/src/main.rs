//! 设备指标评估 HTTP API 与请求追踪 ID。

mod handlers;
mod middleware;
mod routes;
mod utils;

use eval_catalog::IndicatorCatalog;
use eval_config::AppConfig;
use eval_scoring::{Evaluator, LevelBands, ScoringConfig};
use eval_storage::{HistoryStore, InMemoryHistoryStore, InMemorySchemeStore, SchemeStore};
use eval_telemetry::init_tracing;
use eval_weighting::{AhpConfig, RandomIndexTable};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<IndicatorCatalog>,
    pub evaluator: Arc<Evaluator>,
    pub ahp: Arc<AhpConfig>,
    pub scheme_store: Arc<dyn SchemeStore>,
    pub history_store: Arc<dyn HistoryStore>,
}

impl AppState {
    /// 内存存储 + 给定指标体系目录。
    pub fn in_memory(
        catalog: IndicatorCatalog,
        scoring: ScoringConfig,
        ahp: AhpConfig,
        history_limit: usize,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            evaluator: Arc::new(Evaluator::new(scoring)),
            ahp: Arc::new(ahp),
            scheme_store: Arc::new(InMemorySchemeStore::new()),
            history_store: Arc::new(InMemoryHistoryStore::new(history_limit)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    let catalog = match &config.catalog_path {
        Some(path) => IndicatorCatalog::load(Path::new(path))?,
        None => {
            warn!("EVAL_CATALOG_PATH not set, starting with an empty indicator catalog");
            IndicatorCatalog::default()
        }
    };
    let scoring = ScoringConfig {
        fallback_score: config.fallback_score,
        level_bands: LevelBands::new(config.level_bands.clone()),
    };
    let ahp = AhpConfig {
        max_iterations: config.ahp_max_iterations,
        tolerance: config.ahp_tolerance,
        consistency_threshold: config.ahp_cr_threshold,
        random_index: RandomIndexTable::default(),
    };
    let state = AppState::in_memory(catalog, scoring, ahp, config.history_limit);
    let app = routes::build_app(state);

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    info!(addr = %config.http_addr, "eval-api listening");
    axum::serve(listener, app).await?;
    Ok(())
}
