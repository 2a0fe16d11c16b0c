//! 设备台账与测量值。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 测量值：数值或分类字符串。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl MetricValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(value) => Some(value),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// 设备运行状态（由最近一次评估等级推导）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    Normal,
    Attention,
    Warning,
    Severe,
}

/// 设备的单项测量。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceMetric {
    pub indicator_id: String,
    #[serde(default)]
    pub name: String,
    pub value: MetricValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default)]
    pub updated_at_ms: i64,
}

impl DeviceMetric {
    pub fn new(indicator_id: impl Into<String>, value: impl Into<MetricValue>) -> Self {
        Self {
            indicator_id: indicator_id.into(),
            name: String::new(),
            value: value.into(),
            unit: None,
            updated_at_ms: 0,
        }
    }
}

/// 设备记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: String,
    pub system_id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub commission_date: String,
    #[serde(default = "default_status")]
    pub status: DeviceStatus,
    #[serde(default)]
    pub key_params: BTreeMap<String, MetricValue>,
    #[serde(default)]
    pub metrics: Vec<DeviceMetric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_eval_at_ms: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

fn default_status() -> DeviceStatus {
    DeviceStatus::Normal
}

impl DeviceRecord {
    /// 构造只含测量值的最小设备记录。
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        system_id: impl Into<String>,
        metrics: Vec<DeviceMetric>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: String::new(),
            system_id: system_id.into(),
            category: String::new(),
            location: String::new(),
            commission_date: String::new(),
            status: DeviceStatus::Normal,
            key_params: BTreeMap::new(),
            metrics,
            last_eval_at_ms: None,
            score: None,
        }
    }

    /// 指定指标的测量值；重复时取第一条。
    pub fn metric(&self, indicator_id: &str) -> Option<&DeviceMetric> {
        self.metrics
            .iter()
            .find(|metric| metric.indicator_id == indicator_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_metric_wins_on_duplicates() {
        let device = DeviceRecord::new(
            "dev-1",
            "1# 牵引变压器",
            "traction",
            vec![
                DeviceMetric::new("1.1", 10.0),
                DeviceMetric::new("1.1", 99.0),
            ],
        );
        let metric = device.metric("1.1").expect("metric");
        assert_eq!(metric.value, MetricValue::Number(10.0));
        assert!(device.metric("2.1").is_none());
    }

    #[test]
    fn metric_value_is_untagged() {
        let number: MetricValue = serde_json::from_str("12.5").expect("number");
        let text: MetricValue = serde_json::from_str(r#""良好""#).expect("text");
        assert_eq!(number.as_number(), Some(12.5));
        assert_eq!(text.as_text(), Some("良好"));
    }
}
