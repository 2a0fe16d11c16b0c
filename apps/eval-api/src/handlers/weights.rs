//! 权重推导
//!
//! - POST /weights/ahp
//! - POST /weights/entropy
//!
//! `save = true` 时把推导结果保存为新的权重方案并设为当前方案。

use api_contract::{AhpRequest, AhpResponse, ApiResponse, EntropyRequest, EntropyResponse};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{WeightMap, WeightMethod, WeightScheme};
use eval_telemetry::{record_inconsistent_matrix, record_weight_derivation};
use eval_weighting::{derive_ahp_weights, entropy_weights, scheme_from_weights, weights_by_id};
use tracing::{info, warn};

use crate::AppState;
use crate::utils::now_epoch_ms;
use crate::utils::response::storage_error;
use crate::utils::validation::{
    normalize_optional, require_indicator_ids, require_pairwise_matrix, require_samples,
};

/// 层次分析法
pub async fn derive_ahp(State(state): State<AppState>, Json(req): Json<AhpRequest>) -> Response {
    if let Err(response) = require_indicator_ids(&req.indicator_ids) {
        return response;
    }
    if let Err(response) = require_pairwise_matrix(&req.matrix, req.indicator_ids.len()) {
        return response;
    }
    let name = match normalize_optional(req.name, "name") {
        Ok(name) => name,
        Err(response) => return response,
    };

    let outcome = derive_ahp_weights(&req.matrix, &state.ahp);
    record_weight_derivation();
    let consistent = outcome.is_consistent(state.ahp.consistency_threshold);
    if !consistent {
        record_inconsistent_matrix();
        warn!(
            consistency_ratio = outcome.consistency_ratio,
            threshold = state.ahp.consistency_threshold,
            "pairwise matrix failed the consistency check"
        );
    }
    let weights = weights_by_id(&req.indicator_ids, &outcome.weights);

    let scheme = if req.save {
        let mut scheme = new_scheme(
            name.unwrap_or_else(|| "AHP 权重方案".to_string()),
            WeightMethod::Ahp,
            weights.clone(),
        );
        scheme.description = Some(format!("CR = {:.4}", outcome.consistency_ratio));
        match state.scheme_store.save(scheme).await {
            Ok(scheme) => Some(scheme),
            Err(err) => return storage_error(err),
        }
    } else {
        None
    };

    info!(
        indicators = req.indicator_ids.len(),
        iterations = outcome.iterations,
        consistency_ratio = outcome.consistency_ratio,
        saved = scheme.is_some(),
        "ahp weights derived"
    );
    let response = AhpResponse {
        weights,
        lambda_max: outcome.lambda_max,
        consistency_index: outcome.consistency_index,
        consistency_ratio: outcome.consistency_ratio,
        consistent,
        iterations: outcome.iterations,
        scheme,
    };
    (StatusCode::OK, Json(ApiResponse::success(response))).into_response()
}

/// 熵权法
pub async fn derive_entropy(
    State(state): State<AppState>,
    Json(req): Json<EntropyRequest>,
) -> Response {
    if let Err(response) = require_indicator_ids(&req.indicator_ids) {
        return response;
    }
    if let Err(response) = require_samples(&req.samples, req.indicator_ids.len()) {
        return response;
    }
    let name = match normalize_optional(req.name, "name") {
        Ok(name) => name,
        Err(response) => return response,
    };

    let weights = weights_by_id(&req.indicator_ids, &entropy_weights(&req.samples));
    record_weight_derivation();

    let scheme = if req.save {
        let scheme = new_scheme(
            name.unwrap_or_else(|| "熵权法权重方案".to_string()),
            WeightMethod::Entropy,
            weights.clone(),
        );
        match state.scheme_store.save(scheme).await {
            Ok(scheme) => Some(scheme),
            Err(err) => return storage_error(err),
        }
    } else {
        None
    };

    info!(
        indicators = req.indicator_ids.len(),
        samples = req.samples.len(),
        saved = scheme.is_some(),
        "entropy weights derived"
    );
    let response = EntropyResponse { weights, scheme };
    (StatusCode::OK, Json(ApiResponse::success(response))).into_response()
}

fn new_scheme(name: String, method: WeightMethod, weights: WeightMap) -> WeightScheme {
    scheme_from_weights(
        uuid::Uuid::new_v4().to_string(),
        name,
        method,
        weights,
        now_epoch_ms(),
    )
}
