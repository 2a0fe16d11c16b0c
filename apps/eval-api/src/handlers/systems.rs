//! 指标体系查询
//!
//! - GET /systems
//! - GET /systems/:system_id/indicators

use api_contract::{ApiResponse, SystemSummaryDto};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::AppState;
use crate::utils::response::not_found_error;

#[derive(serde::Deserialize)]
pub struct SystemPath {
    system_id: String,
}

/// 列出指标体系
pub async fn list_systems(State(state): State<AppState>) -> Response {
    let systems: Vec<SystemSummaryDto> = state
        .catalog
        .systems()
        .iter()
        .map(|system| SystemSummaryDto {
            id: system.id.clone(),
            name: system.name.clone(),
            applicable_systems: system.applicable_systems.clone(),
            min_primary_selection: system.min_primary_selection,
            selectable_indicator_ids: state
                .catalog
                .secondary_ids(&system.id)
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
        .collect();
    (StatusCode::OK, Json(ApiResponse::success(systems))).into_response()
}

/// 指标树
pub async fn get_system_indicators(
    State(state): State<AppState>,
    Path(path): Path<SystemPath>,
) -> Response {
    match state.catalog.system(&path.system_id) {
        Some(system) => {
            (StatusCode::OK, Json(ApiResponse::success(&system.tree))).into_response()
        }
        None => not_found_error(),
    }
}
