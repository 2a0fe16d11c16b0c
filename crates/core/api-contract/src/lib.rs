//! 稳定的 DTO 与 API 响应契约。

use domain::{
    DeviceEvaluationResult, DeviceRecord, WeightMap, WeightMethod, WeightScheme,
};
use serde::{Deserialize, Serialize};

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// 指标体系概要。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSummaryDto {
    pub id: String,
    pub name: String,
    pub applicable_systems: Vec<String>,
    pub min_primary_selection: usize,
    pub selectable_indicator_ids: Vec<String>,
}

/// 评估请求体。
///
/// `weights` 非空时直接使用（仍会按已选指标归一化）；否则使用 `schemeId` 指定的方案，
/// 两者都缺省时使用当前方案。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    pub system_id: String,
    pub indicator_ids: Vec<String>,
    #[serde(default)]
    pub scheme_id: Option<String>,
    #[serde(default)]
    pub weights: Option<WeightMap>,
    pub devices: Vec<DeviceRecord>,
    #[serde(default)]
    pub record_history: Option<bool>,
}

/// 一级指标覆盖情况。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageDto {
    pub distinct_groups: usize,
    pub required: usize,
    pub satisfied: bool,
}

/// 雷达图序列。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarSeriesDto {
    pub indicator: Vec<RadarIndicatorDto>,
    pub value: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct RadarIndicatorDto {
    pub name: String,
    pub max: f64,
}

/// 柱状图序列。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSeriesDto {
    pub categories: Vec<String>,
    pub values: Vec<f64>,
}

/// 单台设备的评估结果及图表序列。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceEvaluationDto {
    pub result: DeviceEvaluationResult,
    pub device: DeviceRecord,
    pub radar: RadarSeriesDto,
    pub bar: BarSeriesDto,
}

/// 评估响应体。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResponse {
    pub system_id: String,
    pub scheme_id: Option<String>,
    pub weights: WeightMap,
    pub coverage: CoverageDto,
    pub evaluations: Vec<DeviceEvaluationDto>,
}

/// AHP 权重推导请求体。`matrix[i][j]` 为指标 i 相对指标 j 的重要度。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AhpRequest {
    pub indicator_ids: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
    #[serde(default)]
    pub save: bool,
    #[serde(default)]
    pub name: Option<String>,
}

/// AHP 权重推导响应体。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AhpResponse {
    pub weights: WeightMap,
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub consistency_ratio: f64,
    pub consistent: bool,
    pub iterations: usize,
    pub scheme: Option<WeightScheme>,
}

/// 熵权法请求体。`samples` 每行一个样本，每列对应 `indicatorIds` 中的一个指标。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntropyRequest {
    pub indicator_ids: Vec<String>,
    pub samples: Vec<Vec<f64>>,
    #[serde(default)]
    pub save: bool,
    #[serde(default)]
    pub name: Option<String>,
}

/// 熵权法响应体。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntropyResponse {
    pub weights: WeightMap,
    pub scheme: Option<WeightScheme>,
}

/// 保存权重方案请求体。未提供 `id` 时由服务端生成。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSchemeRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default = "default_method")]
    pub method: WeightMethod,
    pub indicator_weights: WeightMap,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_method() -> WeightMethod {
    WeightMethod::Manual
}

/// 切换当前方案请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetActiveSchemeRequest {
    pub scheme_id: String,
}

/// 方案列表响应体。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeListDto {
    pub schemes: Vec<WeightScheme>,
    pub active_scheme_id: Option<String>,
}

/// 导出/导入使用的方案 JSON 文本。
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemePayloadDto {
    pub payload: String,
}

/// 导入结果。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSchemesResponse {
    pub imported: usize,
    pub active_scheme_id: Option<String>,
}

/// 计数快照。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshotDto {
    pub evaluations: u64,
    pub devices_evaluated: u64,
    pub indicators_scored: u64,
    pub indicators_skipped: u64,
    pub rule_fallbacks: u64,
    pub evaluation_latency_ms_total: u64,
    pub evaluation_latency_ms_count: u64,
    pub weight_derivations: u64,
    pub inconsistent_matrices: u64,
    pub scheme_imports: u64,
    pub scheme_import_failures: u64,
}
