//! 权重方案。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 指标 ID -> 权重。
pub type WeightMap = BTreeMap<String, f64>;

/// 权重来源。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightMethod {
    #[serde(rename = "AHP")]
    Ahp,
    Entropy,
    Manual,
}

/// 权重方案。
///
/// 权重非负但不要求和为 1，使用方读取时自行归一化。方案可以引用当前指标体系中
/// 不存在的指标，评估时按 0 权重处理。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightScheme {
    pub id: String,
    pub name: String,
    pub created_at_ms: i64,
    pub method: WeightMethod,
    pub indicator_weights: WeightMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
