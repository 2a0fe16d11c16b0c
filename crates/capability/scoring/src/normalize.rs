//! 原始值 -> [0,1] 优良度。
//!
//! 结果只用于展示，不参与加权汇总。

use domain::{IndicatorDirection, IndicatorNode};

/// 以 `dataset` 为参照总体，按指标方向计算优良度。
pub fn normalize(indicator: &IndicatorNode, raw: f64, dataset: &[f64]) -> f64 {
    normalize_direction(indicator.direction, raw, dataset)
}

/// 同 [`normalize`]，直接接收指标方向。
///
/// - 参照总体为空时返回 0
/// - 正向/负向指标在 `max == min` 时返回 1
/// - 区间型指标以中点为理想值，极差为 0 时按 1 处理
pub fn normalize_direction(direction: IndicatorDirection, raw: f64, dataset: &[f64]) -> f64 {
    if dataset.is_empty() {
        return 0.0;
    }
    let (min, max) = dataset
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
            (min.min(*value), max.max(*value))
        });

    let goodness = match direction {
        IndicatorDirection::Positive => {
            if max == min {
                1.0
            } else {
                (raw - min) / (max - min)
            }
        }
        IndicatorDirection::Negative => {
            if max == min {
                1.0
            } else {
                (max - raw) / (max - min)
            }
        }
        IndicatorDirection::Interval => {
            let mid = (max + min) / 2.0;
            let range = if max == min { 1.0 } else { max - min };
            1.0 - (raw - mid).abs() / (range / 2.0)
        }
    };
    // 原始值落在参照总体之外时同样收敛到 [0,1]
    goodness.clamp(0.0, 1.0)
}
