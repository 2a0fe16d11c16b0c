//! 加权汇总。

use crate::matcher::{DEFAULT_FALLBACK_SCORE, match_score_with_fallback};
use crate::normalize::normalize;
use domain::{DeviceRecord, EvaluationResultDetail, IndicatorNode, MetricValue, WeightMap};
use std::collections::HashMap;
use tracing::debug;

/// 指标 ID -> 归一化参照总体。
pub type Datasets = HashMap<String, Vec<f64>>;

/// 单台设备的汇总结果。
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub total: f64,
    pub details: Vec<EvaluationResultDetail>,
}

/// 按指标顺序汇总得分，默认 60 分兜底。
pub fn evaluate(
    device: &DeviceRecord,
    indicators: &[&IndicatorNode],
    weights: &WeightMap,
    datasets: Option<&Datasets>,
) -> Evaluation {
    evaluate_with_fallback(device, indicators, weights, datasets, DEFAULT_FALLBACK_SCORE)
}

/// 按指标顺序汇总得分。
///
/// 设备缺少某指标的测量值时静默跳过，不产生明细。总分是贡献值之和，不做封顶；
/// 需要 0–100 分制时调用方应先把权重归一化为和 1。
pub fn evaluate_with_fallback(
    device: &DeviceRecord,
    indicators: &[&IndicatorNode],
    weights: &WeightMap,
    datasets: Option<&Datasets>,
    fallback_score: f64,
) -> Evaluation {
    let mut details = Vec::with_capacity(indicators.len());
    let mut total = 0.0;

    for indicator in indicators {
        let Some(metric) = device.metric(&indicator.id) else {
            continue;
        };
        let raw_value = &metric.value;

        let normalized = match raw_value {
            MetricValue::Number(value) => {
                let dataset = datasets
                    .and_then(|sets| sets.get(&indicator.id))
                    .filter(|set| !set.is_empty())
                    .map(Vec::as_slice);
                let goodness = match dataset {
                    Some(dataset) => normalize(indicator, *value, dataset),
                    None => normalize(indicator, *value, std::slice::from_ref(value)),
                };
                if goodness.is_finite() { goodness } else { 0.0 }
            }
            MetricValue::Text(_) => 1.0,
        };

        let matched = match_score_with_fallback(indicator, raw_value, fallback_score);
        let weight = weights.get(&indicator.id).copied().unwrap_or(0.0);
        let contribution = matched.score * weight;
        total += contribution;

        details.push(EvaluationResultDetail {
            indicator_id: indicator.id.clone(),
            indicator_name: indicator.name.clone(),
            value: raw_value.as_number(),
            raw_value: raw_value.clone(),
            normalized,
            weight,
            contribution,
            score: matched.score,
            rule_matched: matched.rule.map(|rule| rule.label.clone()),
        });
    }

    if !indicators.is_empty() {
        let weight_sum: f64 = indicators
            .iter()
            .filter_map(|indicator| weights.get(&indicator.id))
            .sum();
        if (weight_sum - 1.0).abs() > 1e-3 {
            debug!(
                device_id = %device.id,
                weight_sum,
                "applied weights do not sum to 1, total score is not on a 0-100 scale"
            );
        }
    }

    Evaluation { total, details }
}

/// 收集每个指标在设备群中的数值测量，作为归一化参照总体。
///
/// 每台设备只取该指标的第一条测量值，分类值不计入。
pub fn build_datasets(devices: &[DeviceRecord], indicators: &[&IndicatorNode]) -> Datasets {
    indicators
        .iter()
        .map(|indicator| {
            let values = devices
                .iter()
                .filter_map(|device| device.metric(&indicator.id))
                .filter_map(|metric| metric.value.as_number())
                .collect();
            (indicator.id.clone(), values)
        })
        .collect()
}
