//! 设备评估入口：汇总 + 等级，批量评估。

use crate::aggregate::{Datasets, Evaluation, evaluate_with_fallback};
use crate::grade::LevelBands;
use crate::matcher::DEFAULT_FALLBACK_SCORE;
use domain::{DeviceEvaluationResult, DeviceRecord, IndicatorNode, WeightMap};
use tracing::debug;

/// 评分参数。
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub fallback_score: f64,
    pub level_bands: LevelBands,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            fallback_score: DEFAULT_FALLBACK_SCORE,
            level_bands: LevelBands::default(),
        }
    }
}

/// 无状态评估器。
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: ScoringConfig,
}

impl Evaluator {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn evaluate(
        &self,
        device: &DeviceRecord,
        indicators: &[&IndicatorNode],
        weights: &WeightMap,
        datasets: Option<&Datasets>,
    ) -> Evaluation {
        evaluate_with_fallback(
            device,
            indicators,
            weights,
            datasets,
            self.config.fallback_score,
        )
    }

    /// 评估单台设备并定级，时间戳由调用方给出。
    pub fn evaluate_device(
        &self,
        device: &DeviceRecord,
        indicators: &[&IndicatorNode],
        weights: &WeightMap,
        datasets: Option<&Datasets>,
        evaluated_at_ms: i64,
    ) -> DeviceEvaluationResult {
        let Evaluation { total, details } = self.evaluate(device, indicators, weights, datasets);
        let level = self.config.level_bands.classify(total);
        debug!(
            device_id = %device.id,
            total_score = total,
            level = %level,
            scored = details.len(),
            selected = indicators.len(),
            "device evaluated"
        );

        DeviceEvaluationResult {
            device_id: device.id.clone(),
            device_name: device.name.clone(),
            system_id: device.system_id.clone(),
            total_score: total,
            level,
            evaluated_at_ms,
            details,
        }
    }

    /// 批量评估，结果顺序与设备顺序一致。各设备之间互不依赖。
    pub fn evaluate_batch(
        &self,
        devices: &[DeviceRecord],
        indicators: &[&IndicatorNode],
        weights: &WeightMap,
        datasets: Option<&Datasets>,
        evaluated_at_ms: i64,
    ) -> Vec<DeviceEvaluationResult> {
        devices
            .iter()
            .map(|device| {
                self.evaluate_device(device, indicators, weights, datasets, evaluated_at_ms)
            })
            .collect()
    }
}

/// 将评估结果回写到设备记录（得分、评估时间、状态）。
pub fn apply_result(device: &mut DeviceRecord, result: &DeviceEvaluationResult) {
    device.score = Some(result.total_score);
    device.status = result.level.device_status();
    device.last_eval_at_ms = Some(result.evaluated_at_ms);
}
