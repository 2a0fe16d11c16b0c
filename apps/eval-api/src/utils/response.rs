//! HTTP 响应辅助函数和 DTO 转换
//!
//! - 错误响应：bad_request_error, not_found_error, selection_error, scheme_format_error, storage_error
//! - DTO 转换：coverage_to_dto, radar_to_dto, bar_to_dto, metrics_to_dto

use api_contract::{
    ApiResponse, BarSeriesDto, CoverageDto, MetricsSnapshotDto, RadarIndicatorDto,
    RadarSeriesDto,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use eval_catalog::CoverageReport;
use eval_scoring::{BarSeries, RadarSeries};
use eval_storage::StorageError;
use eval_telemetry::MetricsSnapshot;

/// 错误请求响应
pub fn bad_request_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error("INVALID.REQUEST", message.into())),
    )
        .into_response()
}

/// 资源未找到错误响应
pub fn not_found_error() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error("RESOURCE.NOT_FOUND", "not found")),
    )
        .into_response()
}

/// 已选指标覆盖的一级指标不足
pub fn selection_error(report: &CoverageReport) -> Response {
    let message = format!(
        "selected indicators cover {} primary groups, at least {} required",
        report.distinct_groups, report.required
    );
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error("SELECTION.INSUFFICIENT", message)),
    )
        .into_response()
}

/// 方案导入格式错误
pub fn scheme_format_error(err: StorageError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error("SCHEME.FORMAT", err.to_string())),
    )
        .into_response()
}

/// 存储错误响应
pub fn storage_error(err: StorageError) -> Response {
    let message = err.to_string();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("INTERNAL.ERROR", message)),
    )
        .into_response()
}

pub fn coverage_to_dto(report: &CoverageReport) -> CoverageDto {
    CoverageDto {
        distinct_groups: report.distinct_groups,
        required: report.required,
        satisfied: report.satisfied,
    }
}

pub fn radar_to_dto(series: RadarSeries) -> RadarSeriesDto {
    RadarSeriesDto {
        indicator: series
            .indicator
            .into_iter()
            .map(|item| RadarIndicatorDto {
                name: item.name,
                max: item.max,
            })
            .collect(),
        value: series.value,
    }
}

pub fn bar_to_dto(series: BarSeries) -> BarSeriesDto {
    BarSeriesDto {
        categories: series.categories,
        values: series.values,
    }
}

pub fn metrics_to_dto(snapshot: MetricsSnapshot) -> MetricsSnapshotDto {
    MetricsSnapshotDto {
        evaluations: snapshot.evaluations,
        devices_evaluated: snapshot.devices_evaluated,
        indicators_scored: snapshot.indicators_scored,
        indicators_skipped: snapshot.indicators_skipped,
        rule_fallbacks: snapshot.rule_fallbacks,
        evaluation_latency_ms_total: snapshot.evaluation_latency_ms_total,
        evaluation_latency_ms_count: snapshot.evaluation_latency_ms_count,
        weight_derivations: snapshot.weight_derivations,
        inconsistent_matrices: snapshot.inconsistent_matrices,
        scheme_imports: snapshot.scheme_imports,
        scheme_import_failures: snapshot.scheme_import_failures,
    }
}
