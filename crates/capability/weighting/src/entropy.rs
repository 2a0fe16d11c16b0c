//! 熵权法。

const REDUNDANCY_EPSILON: f64 = 1e-12;

/// 由样本 × 指标矩阵推导权重，结果与列一一对应且和为 1。
///
/// 每行先按行和归一化为比例（行和为 0 时整行为 0），再对每列求信息熵
/// `H_j = -k Σ p ln p`（`k = 1 / ln m`，只累加非零比例），冗余度
/// `d_j = 1 - H_j`，权重为 `d_j / Σ d`。区分度越低的指标熵越大、权重越小。
///
/// 只有一个样本时 `k` 取 0，各列等权；`Σ d` 为 0 时全部返回 0。
pub fn entropy_weights(dataset: &[Vec<f64>]) -> Vec<f64> {
    let samples = dataset.len();
    let columns = dataset.first().map(Vec::len).unwrap_or(0);
    if samples == 0 || columns == 0 {
        return Vec::new();
    }

    let proportions: Vec<Vec<f64>> = dataset
        .iter()
        .map(|row| {
            let sum: f64 = row.iter().sum();
            (0..columns)
                .map(|column| {
                    let value = row.get(column).copied().unwrap_or(0.0);
                    if sum == 0.0 { 0.0 } else { value / sum }
                })
                .collect()
        })
        .collect();

    let k = if samples > 1 {
        1.0 / (samples as f64).ln()
    } else {
        0.0
    };

    let redundancies: Vec<f64> = (0..columns)
        .map(|column| {
            let entropy: f64 = proportions
                .iter()
                .filter_map(|row| row.get(column).copied())
                .filter(|p| *p > 0.0)
                .map(|p| -p * p.ln())
                .sum();
            // 行比例下单列熵可能略大于 1；浮点噪声级的冗余度同样视为 0
            let redundancy = 1.0 - k * entropy;
            if redundancy < REDUNDANCY_EPSILON {
                0.0
            } else {
                redundancy
            }
        })
        .collect();

    let total: f64 = redundancies.iter().sum();
    redundancies
        .iter()
        .map(|value| if total == 0.0 { 0.0 } else { value / total })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one_and_are_non_negative() {
        let dataset = vec![
            vec![1.0, 2.0, 3.0],
            vec![2.0, 2.0, 2.0],
            vec![3.0, 1.0, 5.0],
        ];
        let weights = entropy_weights(&dataset);
        assert_eq!(weights.len(), 3);
        let sum: f64 = weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(weights.iter().all(|weight| *weight >= 0.0));
        // 第二列区分度最高
        assert!(weights[1] > weights[0]);
        assert!(weights[1] > weights[2]);
    }

    #[test]
    fn larger_population_sums_to_one() {
        let dataset = vec![
            vec![12.0, 0.5, 80.0, 3.0],
            vec![15.0, 0.7, 60.0, 1.0],
            vec![9.0, 0.2, 95.0, 4.0],
            vec![20.0, 0.9, 40.0, 2.0],
            vec![11.0, 0.4, 70.0, 0.0],
        ];
        let weights = entropy_weights(&dataset);
        let sum: f64 = weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(weights.iter().all(|weight| *weight >= 0.0));
    }

    #[test]
    fn identical_samples_carry_no_weight() {
        let dataset = vec![vec![1.0, 1.0], vec![1.0, 1.0]];
        assert_eq!(entropy_weights(&dataset), vec![0.0, 0.0]);
    }

    #[test]
    fn single_sample_is_uniform() {
        assert_eq!(entropy_weights(&[vec![4.0, 5.0]]), vec![0.5, 0.5]);
    }

    #[test]
    fn empty_and_zero_rows() {
        assert!(entropy_weights(&[]).is_empty());
        assert!(entropy_weights(&[vec![]]).is_empty());

        let weights = entropy_weights(&[vec![0.0, 0.0], vec![1.0, 3.0]]);
        let sum: f64 = weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
