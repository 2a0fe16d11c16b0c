//! 权重方案 -> 评估用权重表。

use domain::{IndicatorNode, WeightMap, WeightMethod, WeightScheme};

/// 各权重除以总和并保留 4 位小数；总和为 0 时全部为 0。
pub fn normalize_weights(weights: &WeightMap) -> WeightMap {
    let sum: f64 = weights.values().sum();
    weights
        .iter()
        .map(|(id, weight)| {
            let normalized = if sum == 0.0 { 0.0 } else { round4(weight / sum) };
            (id.clone(), normalized)
        })
        .collect()
}

/// 取方案中已选指标的权重并在这些指标上归一化；方案里没有的指标记 0。
///
/// 方案中引用了未选中（或已不在指标体系中）的指标时，这些条目不参与归一化。
pub fn apply_weight_scheme(scheme: &WeightScheme, indicators: &[&IndicatorNode]) -> WeightMap {
    let selected: WeightMap = indicators
        .iter()
        .map(|indicator| {
            let weight = scheme
                .indicator_weights
                .get(&indicator.id)
                .copied()
                .unwrap_or(0.0);
            (indicator.id.clone(), weight)
        })
        .collect();
    normalize_weights(&selected)
}

/// 把推导出的权重向量按顺序对应到指标 ID；长度不一致时以较短者为准。
pub fn weights_by_id(indicator_ids: &[String], weights: &[f64]) -> WeightMap {
    indicator_ids
        .iter()
        .cloned()
        .zip(weights.iter().copied())
        .collect()
}

/// 由推导结果构造新的权重方案。
pub fn scheme_from_weights(
    id: impl Into<String>,
    name: impl Into<String>,
    method: WeightMethod,
    indicator_weights: WeightMap,
    created_at_ms: i64,
) -> WeightScheme {
    WeightScheme {
        id: id.into(),
        name: name.into(),
        created_at_ms,
        method,
        indicator_weights,
        description: None,
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
