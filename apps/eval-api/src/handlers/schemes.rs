//! 权重方案管理
//!
//! - GET/POST /schemes
//! - DELETE /schemes/:scheme_id
//! - PUT /schemes/active
//! - GET /schemes/export
//! - POST /schemes/import

use api_contract::{
    ApiResponse, ImportSchemesResponse, SaveSchemeRequest, SchemeListDto, SchemePayloadDto,
    SetActiveSchemeRequest,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::WeightScheme;
use eval_storage::StorageError;
use eval_telemetry::{record_scheme_import, record_scheme_import_failure};
use tracing::{info, warn};

use crate::AppState;
use crate::utils::now_epoch_ms;
use crate::utils::response::{not_found_error, scheme_format_error, storage_error};
use crate::utils::validation::{normalize_optional, normalize_required, require_weights};

#[derive(serde::Deserialize)]
pub struct SchemePath {
    scheme_id: String,
}

/// 列出方案及当前方案
pub async fn list_schemes(State(state): State<AppState>) -> Response {
    let schemes = match state.scheme_store.list().await {
        Ok(schemes) => schemes,
        Err(err) => return storage_error(err),
    };
    let active_scheme_id = match state.scheme_store.active().await {
        Ok(active) => active.map(|scheme| scheme.id),
        Err(err) => return storage_error(err),
    };
    let response = SchemeListDto {
        schemes,
        active_scheme_id,
    };
    (StatusCode::OK, Json(ApiResponse::success(response))).into_response()
}

/// 新增或覆盖方案，并设为当前方案
pub async fn save_scheme(
    State(state): State<AppState>,
    Json(req): Json<SaveSchemeRequest>,
) -> Response {
    let name = match normalize_required(req.name, "name") {
        Ok(name) => name,
        Err(response) => return response,
    };
    let id = match normalize_optional(req.id, "id") {
        Ok(id) => id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
        Err(response) => return response,
    };
    if let Err(response) = require_weights(&req.indicator_weights) {
        return response;
    }

    let scheme = WeightScheme {
        id,
        name,
        created_at_ms: now_epoch_ms(),
        method: req.method,
        indicator_weights: req.indicator_weights,
        description: req.description,
    };
    match state.scheme_store.save(scheme).await {
        Ok(scheme) => (StatusCode::OK, Json(ApiResponse::success(scheme))).into_response(),
        Err(err) => storage_error(err),
    }
}

/// 删除方案
pub async fn delete_scheme(
    State(state): State<AppState>,
    Path(path): Path<SchemePath>,
) -> Response {
    match state.scheme_store.delete(&path.scheme_id).await {
        Ok(true) => (StatusCode::OK, Json(ApiResponse::success(()))).into_response(),
        Ok(false) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

/// 切换当前方案
pub async fn set_active_scheme(
    State(state): State<AppState>,
    Json(req): Json<SetActiveSchemeRequest>,
) -> Response {
    match state.scheme_store.set_active(&req.scheme_id).await {
        Ok(scheme) => (StatusCode::OK, Json(ApiResponse::success(scheme))).into_response(),
        Err(StorageError::NotFound(_)) => not_found_error(),
        Err(err) => storage_error(err),
    }
}

/// 导出全部方案
pub async fn export_schemes(State(state): State<AppState>) -> Response {
    match state.scheme_store.export().await {
        Ok(payload) => (
            StatusCode::OK,
            Json(ApiResponse::success(SchemePayloadDto { payload })),
        )
            .into_response(),
        Err(err) => storage_error(err),
    }
}

/// 导入方案，替换现有全部方案；格式错误时保持原状
pub async fn import_schemes(
    State(state): State<AppState>,
    Json(req): Json<SchemePayloadDto>,
) -> Response {
    let imported = match state.scheme_store.import(&req.payload).await {
        Ok(count) => count,
        Err(err @ StorageError::Codec(_)) => {
            record_scheme_import_failure();
            warn!(error = %err, "weight scheme import rejected");
            return scheme_format_error(err);
        }
        Err(err) => {
            record_scheme_import_failure();
            return storage_error(err);
        }
    };
    record_scheme_import();
    let active_scheme_id = match state.scheme_store.active().await {
        Ok(active) => active.map(|scheme| scheme.id),
        Err(err) => return storage_error(err),
    };
    info!(imported, "weight schemes imported");
    let response = ImportSchemesResponse {
        imported,
        active_scheme_id,
    };
    (StatusCode::OK, Json(ApiResponse::success(response))).into_response()
}
