//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers。
//! 路由包括：
//! - 健康检查：/health
//! - 指标体系：/systems/*
//! - 设备评估与历史：/evaluations/*
//! - 权重推导：/weights/*
//! - 权重方案：/schemes/*
//! - 计数快照：/metrics

use super::AppState;
use super::handlers::*;
use crate::middleware::request_context;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

/// 创建 API 路由
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(get_metrics))
        .route("/systems", get(list_systems))
        .route("/systems/:system_id/indicators", get(get_system_indicators))
        .route("/evaluations", post(evaluate_devices))
        .route(
            "/evaluations/history",
            get(list_history).delete(clear_history),
        )
        .route("/weights/ahp", post(derive_ahp))
        .route("/weights/entropy", post(derive_entropy))
        .route("/schemes", get(list_schemes).post(save_scheme))
        .route("/schemes/active", put(set_active_scheme))
        .route("/schemes/export", get(export_schemes))
        .route("/schemes/import", post(import_schemes))
        .route("/schemes/:scheme_id", delete(delete_scheme))
}

/// 组装完整应用：同时挂载在 / 与 /api 下，并注入请求追踪。
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(create_api_router())
        .nest("/api", create_api_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_context))
}
