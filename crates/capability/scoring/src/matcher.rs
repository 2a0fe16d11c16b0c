//! 规则匹配。

use domain::{IndicatorNode, IndicatorRule, MetricValue};

/// 没有规则命中时的得分。
pub const DEFAULT_FALLBACK_SCORE: f64 = 60.0;

/// 规则匹配结果。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreMatch<'a> {
    pub score: f64,
    pub rule: Option<&'a IndicatorRule>,
}

/// 按声明顺序匹配规则，首个命中的规则生效；未命中返回 60 分。
pub fn match_score<'a>(indicator: &'a IndicatorNode, raw: &MetricValue) -> ScoreMatch<'a> {
    match_score_with_fallback(indicator, raw, DEFAULT_FALLBACK_SCORE)
}

/// 同 [`match_score`]，未命中时返回 `fallback`。
pub fn match_score_with_fallback<'a>(
    indicator: &'a IndicatorNode,
    raw: &MetricValue,
    fallback: f64,
) -> ScoreMatch<'a> {
    let matched = match raw {
        MetricValue::Number(value) => indicator
            .rules
            .iter()
            .find(|rule| numeric_rule_matches(rule, *value)),
        MetricValue::Text(value) => indicator
            .rules
            .iter()
            .find(|rule| rule.value.as_ref().and_then(MetricValue::as_text) == Some(value.as_str())),
    };

    match matched {
        Some(rule) => ScoreMatch {
            score: rule.score,
            rule: Some(rule),
        },
        None => ScoreMatch {
            score: fallback,
            rule: None,
        },
    }
}

fn numeric_rule_matches(rule: &IndicatorRule, raw: f64) -> bool {
    if let Some((min, max)) = rule.range {
        return min.is_none_or(|min| raw >= min) && max.is_none_or(|max| raw < max);
    }
    // 无区间的规则退化为比较符 + 数值阈值
    match (
        rule.comparator,
        rule.value.as_ref().and_then(MetricValue::as_number),
    ) {
        (Some(comparator), Some(threshold)) => comparator.compare(raw, threshold),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{IndicatorDirection, RuleComparator};

    fn temperature() -> IndicatorNode {
        IndicatorNode::leaf(
            "2.1",
            "绕组温度",
            IndicatorDirection::Negative,
            vec![
                IndicatorRule::range("优", None, Some(60.0), 95.0),
                IndicatorRule::range("良", Some(60.0), Some(80.0), 80.0),
                IndicatorRule::range("重叠", Some(70.0), Some(90.0), 10.0),
                IndicatorRule::range("差", Some(80.0), None, 40.0),
            ],
        )
    }

    #[test]
    fn range_is_half_open() {
        let indicator = temperature();
        let at_bound = match_score(&indicator, &MetricValue::Number(60.0));
        assert_eq!(at_bound.score, 80.0);
        assert_eq!(at_bound.rule.map(|rule| rule.label.as_str()), Some("良"));

        let below = match_score(&indicator, &MetricValue::Number(59.99));
        assert_eq!(below.score, 95.0);
    }

    #[test]
    fn first_declared_rule_wins_on_overlap() {
        let indicator = temperature();
        for _ in 0..3 {
            let matched = match_score(&indicator, &MetricValue::Number(75.0));
            assert_eq!(matched.score, 80.0);
            assert_eq!(matched.rule.map(|rule| rule.label.as_str()), Some("良"));
        }
    }

    #[test]
    fn unbounded_upper_range_matches_large_values() {
        let indicator = temperature();
        let matched = match_score(&indicator, &MetricValue::Number(1.0e9));
        assert_eq!(matched.score, 40.0);
    }

    #[test]
    fn categorical_match_is_exact() {
        let indicator = IndicatorNode::leaf(
            "3.2",
            "外观检查",
            IndicatorDirection::Positive,
            vec![
                IndicatorRule::category("良好", "良好", 90.0),
                IndicatorRule::category("Worn", "Worn", 50.0),
            ],
        );
        assert_eq!(match_score(&indicator, &MetricValue::from("良好")).score, 90.0);
        assert_eq!(match_score(&indicator, &MetricValue::from("Worn")).score, 50.0);

        let miss = match_score(&indicator, &MetricValue::from("worn"));
        assert_eq!(miss.score, DEFAULT_FALLBACK_SCORE);
        assert!(miss.rule.is_none());
    }

    #[test]
    fn numeric_value_never_matches_categorical_rule() {
        let indicator = IndicatorNode::leaf(
            "3.3",
            "等级",
            IndicatorDirection::Positive,
            vec![IndicatorRule::category("一级", "1", 100.0)],
        );
        let matched = match_score(&indicator, &MetricValue::Number(1.0));
        assert_eq!(matched.score, DEFAULT_FALLBACK_SCORE);
        assert!(matched.rule.is_none());
    }

    #[test]
    fn comparator_rule_without_range() {
        let indicator = IndicatorNode::leaf(
            "1.4",
            "局放量",
            IndicatorDirection::Negative,
            vec![
                IndicatorRule::threshold("超限", RuleComparator::Ge, 500.0, 30.0),
                IndicatorRule::threshold("正常", RuleComparator::Lt, 500.0, 90.0),
            ],
        );
        assert_eq!(match_score(&indicator, &MetricValue::Number(500.0)).score, 30.0);
        assert_eq!(match_score(&indicator, &MetricValue::Number(120.0)).score, 90.0);
    }

    #[test]
    fn no_rules_uses_custom_fallback() {
        let indicator = IndicatorNode::leaf("9.9", "未配置", IndicatorDirection::Positive, vec![]);
        let matched = match_score_with_fallback(&indicator, &MetricValue::Number(1.0), 55.0);
        assert_eq!(matched.score, 55.0);
        assert!(matched.rule.is_none());
    }
}
