//! 评估明细 -> 图表序列（雷达图、柱状图）。

use domain::EvaluationResultDetail;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarIndicator {
    pub name: String,
    pub max: f64,
}

/// 雷达图：各指标得分。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub indicator: Vec<RadarIndicator>,
    pub value: Vec<f64>,
}

/// 柱状图：各指标贡献值。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub categories: Vec<String>,
    pub values: Vec<f64>,
}

pub fn build_radar_series(details: &[EvaluationResultDetail]) -> RadarSeries {
    RadarSeries {
        indicator: details
            .iter()
            .map(|item| RadarIndicator {
                name: item.indicator_name.clone(),
                max: 100.0,
            })
            .collect(),
        value: details.iter().map(|item| round2(item.score)).collect(),
    }
}

pub fn build_bar_series(details: &[EvaluationResultDetail]) -> BarSeries {
    BarSeries {
        categories: details
            .iter()
            .map(|item| item.indicator_name.clone())
            .collect(),
        values: details.iter().map(|item| round2(item.contribution)).collect(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::MetricValue;

    fn detail(name: &str, score: f64, contribution: f64) -> EvaluationResultDetail {
        EvaluationResultDetail {
            indicator_id: name.to_string(),
            indicator_name: name.to_string(),
            value: Some(1.0),
            raw_value: MetricValue::Number(1.0),
            normalized: 1.0,
            weight: 0.0,
            contribution,
            score,
            rule_matched: None,
        }
    }

    #[test]
    fn series_follow_detail_order_and_round() {
        let details = vec![detail("温度", 88.456, 26.5368), detail("绝缘", 70.0, 21.0)];

        let radar = build_radar_series(&details);
        assert_eq!(radar.indicator.len(), 2);
        assert_eq!(radar.indicator[0].name, "温度");
        assert_eq!(radar.indicator[0].max, 100.0);
        assert_eq!(radar.value, vec![88.46, 70.0]);

        let bar = build_bar_series(&details);
        assert_eq!(bar.categories, vec!["温度".to_string(), "绝缘".to_string()]);
        assert_eq!(bar.values, vec![26.54, 21.0]);
    }
}
