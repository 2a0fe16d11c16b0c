//! 设备评估与评估历史
//!
//! - POST /evaluations
//! - GET /evaluations/history
//! - DELETE /evaluations/history
//!
//! 权重来源优先级：请求内联权重 > `schemeId` 指定方案 > 当前方案 > 等权。
//! 无论来源如何，权重都只在已选指标上归一化。

use api_contract::{ApiResponse, DeviceEvaluationDto, EvaluateRequest, EvaluateResponse};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{IndicatorNode, WeightMap};
use eval_catalog::{Selection, check_coverage};
use eval_scoring::{apply_result, build_bar_series, build_datasets, build_radar_series};
use eval_telemetry::{
    record_evaluation, record_evaluation_latency_ms, record_indicators_scored,
    record_indicators_skipped, record_rule_fallbacks,
};
use eval_weighting::{apply_weight_scheme, normalize_weights};
use std::time::Instant;
use tracing::info;

use crate::AppState;
use crate::utils::now_epoch_ms;
use crate::utils::response::{
    bad_request_error, bar_to_dto, coverage_to_dto, not_found_error, radar_to_dto,
    selection_error, storage_error,
};
use crate::utils::validation::{normalize_required, require_weights};

/// 批量评估设备
pub async fn evaluate_devices(
    State(state): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> Response {
    let system_id = match normalize_required(req.system_id, "systemId") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let Some(system) = state.catalog.system(&system_id) else {
        return not_found_error();
    };
    if req.devices.is_empty() {
        return bad_request_error("devices required");
    }

    let selection = Selection::new(req.indicator_ids);
    let indicators = state.catalog.resolve(&system_id, selection.ids());
    if indicators.is_empty() {
        return bad_request_error("no known indicators selected");
    }
    let coverage = check_coverage(Some(system), &indicators);
    if !coverage.satisfied {
        return selection_error(&coverage);
    }

    let (scheme_id, weights) =
        match resolve_weights(&state, req.scheme_id, req.weights, &indicators).await {
            Ok(resolved) => resolved,
            Err(response) => return response,
        };

    let datasets = build_datasets(&req.devices, &indicators);
    let evaluated_at_ms = now_epoch_ms();
    let started = Instant::now();
    let results = state.evaluator.evaluate_batch(
        &req.devices,
        &indicators,
        &weights,
        Some(&datasets),
        evaluated_at_ms,
    );
    record_evaluation_latency_ms(started.elapsed().as_millis() as u64);

    let scored: usize = results.iter().map(|result| result.details.len()).sum();
    let fallbacks = results
        .iter()
        .flat_map(|result| &result.details)
        .filter(|detail| detail.rule_matched.is_none())
        .count();
    record_evaluation(results.len() as u64);
    record_indicators_scored(scored as u64);
    record_indicators_skipped((results.len() * indicators.len()).saturating_sub(scored) as u64);
    record_rule_fallbacks(fallbacks as u64);
    info!(
        system_id = %system_id,
        scheme_id = ?scheme_id,
        devices = results.len(),
        indicators = indicators.len(),
        scored,
        fallbacks,
        "evaluation completed"
    );

    if req.record_history.unwrap_or(true) {
        if let Err(err) = state.history_store.append(results.clone()).await {
            return storage_error(err);
        }
    }

    let evaluations = req
        .devices
        .into_iter()
        .zip(results)
        .map(|(mut device, result)| {
            apply_result(&mut device, &result);
            DeviceEvaluationDto {
                radar: radar_to_dto(build_radar_series(&result.details)),
                bar: bar_to_dto(build_bar_series(&result.details)),
                device,
                result,
            }
        })
        .collect();

    let response = EvaluateResponse {
        system_id,
        scheme_id,
        weights,
        coverage: coverage_to_dto(&coverage),
        evaluations,
    };
    (StatusCode::OK, Json(ApiResponse::success(response))).into_response()
}

/// 评估历史（最新在前）
pub async fn list_history(State(state): State<AppState>) -> Response {
    match state.history_store.list().await {
        Ok(records) => (StatusCode::OK, Json(ApiResponse::success(records))).into_response(),
        Err(err) => storage_error(err),
    }
}

/// 清空评估历史
pub async fn clear_history(State(state): State<AppState>) -> Response {
    match state.history_store.clear().await {
        Ok(()) => (StatusCode::OK, Json(ApiResponse::success(()))).into_response(),
        Err(err) => storage_error(err),
    }
}

async fn resolve_weights(
    state: &AppState,
    scheme_id: Option<String>,
    inline: Option<WeightMap>,
    indicators: &[&IndicatorNode],
) -> Result<(Option<String>, WeightMap), Response> {
    if let Some(weights) = inline.filter(|weights| !weights.is_empty()) {
        require_weights(&weights)?;
        let selected: WeightMap = indicators
            .iter()
            .map(|indicator| {
                let weight = weights.get(&indicator.id).copied().unwrap_or(0.0);
                (indicator.id.clone(), weight)
            })
            .collect();
        return Ok((None, normalize_weights(&selected)));
    }

    let scheme = match scheme_id {
        Some(scheme_id) => match state.scheme_store.find(&scheme_id).await {
            Ok(Some(scheme)) => Some(scheme),
            Ok(None) => return Err(not_found_error()),
            Err(err) => return Err(storage_error(err)),
        },
        None => state.scheme_store.active().await.map_err(storage_error)?,
    };

    match scheme {
        Some(scheme) => {
            let weights = apply_weight_scheme(&scheme, indicators);
            Ok((Some(scheme.id), weights))
        }
        None => {
            let equal: WeightMap = indicators
                .iter()
                .map(|indicator| (indicator.id.clone(), 1.0))
                .collect();
            Ok((None, normalize_weights(&equal)))
        }
    }
}
