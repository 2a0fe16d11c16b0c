//! 评估结果与等级。

use crate::device::{DeviceStatus, MetricValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 评估等级。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    A,
    B,
    C,
    D,
}

impl Level {
    /// 等级对应的设备状态。
    pub fn device_status(self) -> DeviceStatus {
        match self {
            Self::A => DeviceStatus::Normal,
            Self::B => DeviceStatus::Attention,
            Self::C => DeviceStatus::Warning,
            Self::D => DeviceStatus::Severe,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "A" | "a" => Some(Self::A),
            "B" | "b" => Some(Self::B),
            "C" | "c" => Some(Self::C),
            "D" | "d" => Some(Self::D),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        };
        f.write_str(label)
    }
}

/// 等级分档 `[min, max)`，`max` 为空表示无上界。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelBand {
    pub min: f64,
    #[serde(default)]
    pub max: Option<f64>,
    pub level: Level,
}

impl LevelBand {
    pub fn new(min: f64, max: Option<f64>, level: Level) -> Self {
        Self { min, max, level }
    }

    pub fn contains(&self, score: f64) -> bool {
        score >= self.min && self.max.is_none_or(|max| score < max)
    }
}

/// 单项指标的评估明细。
///
/// `value` 为参与计算的数值；原始值为分类字符串时为空。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResultDetail {
    pub indicator_id: String,
    pub indicator_name: String,
    pub value: Option<f64>,
    pub raw_value: MetricValue,
    pub normalized: f64,
    pub weight: f64,
    pub contribution: f64,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_matched: Option<String>,
}

/// 单台设备的一次评估结果。
///
/// `total_score` 为贡献值之和，不做封顶。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceEvaluationResult {
    pub device_id: String,
    pub device_name: String,
    pub system_id: String,
    pub total_score: f64,
    pub level: Level,
    pub evaluated_at_ms: i64,
    pub details: Vec<EvaluationResultDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_is_half_open() {
        let band = LevelBand::new(60.0, Some(90.0), Level::B);
        assert!(band.contains(60.0));
        assert!(band.contains(89.999));
        assert!(!band.contains(90.0));

        let top = LevelBand::new(90.0, None, Level::A);
        assert!(top.contains(150.0));
    }

    #[test]
    fn level_maps_to_status() {
        assert_eq!(Level::A.device_status(), DeviceStatus::Normal);
        assert_eq!(Level::D.device_status(), DeviceStatus::Severe);
        assert_eq!(Level::parse(" c"), Some(Level::C));
        assert_eq!(Level::parse("E"), None);
    }
}
