//! 指标体系定义。

use crate::device::MetricValue;
use serde::{Deserialize, Serialize};

/// 指标方向：决定原始值越大越好、越小越好，还是越接近区间中点越好。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorDirection {
    Positive,
    Negative,
    Interval,
}

/// 规则比较符（用于没有区间的规则）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleComparator {
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
}

impl RuleComparator {
    /// `lhs <op> rhs`。
    pub fn compare(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Self::Lt => lhs < rhs,
            Self::Le => lhs <= rhs,
            Self::Gt => lhs > rhs,
            Self::Ge => lhs >= rhs,
            Self::Eq => lhs == rhs,
            Self::Ne => lhs != rhs,
        }
    }
}

/// 单条评分规则。
///
/// `range` 为左闭右开区间 `[min, max)`，任一端为 `None` 表示该方向无界。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorRule {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<(Option<f64>, Option<f64>)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparator: Option<RuleComparator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<MetricValue>,
    pub score: f64,
}

impl IndicatorRule {
    /// 区间规则。
    pub fn range(label: impl Into<String>, min: Option<f64>, max: Option<f64>, score: f64) -> Self {
        Self {
            label: label.into(),
            description: None,
            range: Some((min, max)),
            comparator: None,
            value: None,
            score,
        }
    }

    /// 分类值规则（字符串精确匹配）。
    pub fn category(label: impl Into<String>, value: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            description: None,
            range: None,
            comparator: None,
            value: Some(MetricValue::Text(value.into())),
            score,
        }
    }

    /// 比较符规则（`raw <op> threshold`）。
    pub fn threshold(
        label: impl Into<String>,
        comparator: RuleComparator,
        threshold: f64,
        score: f64,
    ) -> Self {
        Self {
            label: label.into(),
            description: None,
            range: None,
            comparator: Some(comparator),
            value: Some(MetricValue::Number(threshold)),
            score,
        }
    }
}

/// 指标树节点。
///
/// `id` 全局唯一且以点分隔，`"1.2"` 表示一级指标 `1` 下的第 2 个子指标。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub direction: IndicatorDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_description: Option<String>,
    #[serde(default)]
    pub rules: Vec<IndicatorRule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<IndicatorNode>,
}

impl IndicatorNode {
    /// 构造不带子节点的叶子指标。
    pub fn leaf(
        id: impl Into<String>,
        name: impl Into<String>,
        direction: IndicatorDirection,
        rules: Vec<IndicatorRule>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            definition: String::new(),
            unit: None,
            direction,
            threshold_description: None,
            rules,
            children: Vec::new(),
        }
    }

    /// 一级指标分组（第一个点之前的片段）。
    pub fn primary_group(&self) -> &str {
        self.id.split('.').next().unwrap_or(&self.id)
    }
}

/// 指标体系：一棵指标树及其适用范围。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSystem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub applicable_systems: Vec<String>,
    #[serde(default = "default_min_primary_selection")]
    pub min_primary_selection: usize,
    #[serde(default)]
    pub tree: Vec<IndicatorNode>,
}

fn default_min_primary_selection() -> usize {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_group_is_first_segment() {
        let node = IndicatorNode::leaf("3.1.2", "绝缘电阻", IndicatorDirection::Positive, vec![]);
        assert_eq!(node.primary_group(), "3");

        let root = IndicatorNode::leaf("4", "运行环境", IndicatorDirection::Interval, vec![]);
        assert_eq!(root.primary_group(), "4");
    }

    #[test]
    fn rule_range_uses_nullable_bounds() {
        let payload = r#"{"label":"优","range":[null,20],"score":95}"#;
        let rule: IndicatorRule = serde_json::from_str(payload).expect("parse");
        assert_eq!(rule.range, Some((None, Some(20.0))));
        assert!(rule.comparator.is_none());
    }

    #[test]
    fn comparator_uses_symbols() {
        let payload = r#"{"label":"超限","comparator":">=","value":80,"score":40}"#;
        let rule: IndicatorRule = serde_json::from_str(payload).expect("parse");
        assert_eq!(rule.comparator, Some(RuleComparator::Ge));
        assert_eq!(rule.value, Some(MetricValue::Number(80.0)));
        assert!(RuleComparator::Ge.compare(80.0, 80.0));
        assert!(!RuleComparator::Lt.compare(80.0, 80.0));
    }
}
