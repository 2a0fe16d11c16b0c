//! 层次分析法：幂迭代求判断矩阵的主特征向量，并给出一致性检验指标。

use tracing::{debug, warn};

/// 平均随机一致性指标 RI，按矩阵阶数查表。
#[derive(Debug, Clone, PartialEq)]
pub struct RandomIndexTable {
    values: Vec<f64>,
    beyond: f64,
}

impl RandomIndexTable {
    /// `values[k]` 对应 `k + 1` 阶矩阵；超出表长的阶数使用 `beyond`。
    pub fn new(values: Vec<f64>, beyond: f64) -> Self {
        Self { values, beyond }
    }

    pub fn lookup(&self, size: usize) -> f64 {
        match size.checked_sub(1) {
            Some(index) => self.values.get(index).copied().unwrap_or(self.beyond),
            None => 0.0,
        }
    }
}

impl Default for RandomIndexTable {
    fn default() -> Self {
        Self::new(
            vec![0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45],
            1.5,
        )
    }
}

/// 幂迭代参数。
#[derive(Debug, Clone, PartialEq)]
pub struct AhpConfig {
    pub max_iterations: usize,
    pub tolerance: f64,
    /// 一致性比率上限，超过即视为判断矩阵不一致。
    pub consistency_threshold: f64,
    pub random_index: RandomIndexTable,
}

impl Default for AhpConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-6,
            consistency_threshold: 0.1,
            random_index: RandomIndexTable::default(),
        }
    }
}

/// 推导结果：权重向量（和为 1）与一致性诊断。
#[derive(Debug, Clone, PartialEq)]
pub struct AhpOutcome {
    pub weights: Vec<f64>,
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub consistency_ratio: f64,
    pub iterations: usize,
}

impl AhpOutcome {
    pub fn is_consistent(&self, threshold: f64) -> bool {
        self.consistency_ratio <= threshold
    }
}

/// 由两两比较矩阵推导权重。
///
/// 初始向量为均匀分布 `1/n`；每轮做一次矩阵乘法并归一化到和为 1，L1 变化量小于
/// `tolerance` 或达到 `max_iterations` 时停止。`lambda_max` 取
/// `(row_i · w) / w_i` 的均值，`CI = (lambda_max - n) / (n - 1)`，`CR = CI / RI`。
///
/// 退化输入不报错：空矩阵返回空权重；某轮乘积和为 0 时保留上一轮向量；行长度不足的
/// 缺失元素按 0 计；权重为 0 的行不参与 `lambda_max` 均值；1、2 阶矩阵 CR 恒为 0。
pub fn derive_ahp_weights(matrix: &[Vec<f64>], config: &AhpConfig) -> AhpOutcome {
    let size = matrix.len();
    if size == 0 {
        return AhpOutcome {
            weights: Vec::new(),
            lambda_max: 0.0,
            consistency_index: 0.0,
            consistency_ratio: 0.0,
            iterations: 0,
        };
    }

    let mut vector = vec![1.0 / size as f64; size];
    let mut iterations = 0;
    for _ in 0..config.max_iterations {
        iterations += 1;
        let next: Vec<f64> = matrix.iter().map(|row| row_dot(row, &vector)).collect();
        let sum: f64 = next.iter().sum();
        if sum == 0.0 || !sum.is_finite() {
            warn!(size, iterations, "pairwise matrix product degenerated, keeping previous vector");
            break;
        }
        let normalized: Vec<f64> = next.iter().map(|value| value / sum).collect();
        let change: f64 = normalized
            .iter()
            .zip(&vector)
            .map(|(current, previous)| (current - previous).abs())
            .sum();
        vector = normalized;
        if change < config.tolerance {
            break;
        }
    }

    let (ratio_sum, counted) = matrix
        .iter()
        .zip(&vector)
        .filter(|(_, weight)| **weight != 0.0)
        .fold((0.0, 0usize), |(sum, count), (row, weight)| {
            (sum + row_dot(row, &vector) / weight, count + 1)
        });
    let lambda_max = if counted == 0 {
        0.0
    } else {
        ratio_sum / counted as f64
    };

    let consistency_index = if size > 1 {
        (lambda_max - size as f64) / (size as f64 - 1.0)
    } else {
        0.0
    };
    let random_index = config.random_index.lookup(size);
    let consistency_ratio = if random_index == 0.0 {
        0.0
    } else {
        consistency_index / random_index
    };

    debug!(
        size,
        iterations,
        lambda_max,
        consistency_ratio,
        "pairwise weights derived"
    );

    AhpOutcome {
        weights: vector,
        lambda_max,
        consistency_index,
        consistency_ratio,
        iterations,
    }
}

fn row_dot(row: &[f64], vector: &[f64]) -> f64 {
    vector
        .iter()
        .enumerate()
        .map(|(column, weight)| row.get(column).copied().unwrap_or(0.0) * weight)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reciprocal(ratios: &[f64]) -> Vec<Vec<f64>> {
        ratios
            .iter()
            .map(|row| ratios.iter().map(|column| row / column).collect())
            .collect()
    }

    #[test]
    fn random_index_lookup() {
        let table = RandomIndexTable::default();
        assert_eq!(table.lookup(0), 0.0);
        assert_eq!(table.lookup(2), 0.0);
        assert_eq!(table.lookup(3), 0.58);
        assert_eq!(table.lookup(9), 1.45);
        assert_eq!(table.lookup(15), 1.5);
    }

    #[test]
    fn recovers_consistent_ratios() {
        let matrix = reciprocal(&[5.0, 3.0, 2.0]);
        let outcome = derive_ahp_weights(&matrix, &AhpConfig::default());

        let expected = [0.5, 0.3, 0.2];
        for (weight, expected) in outcome.weights.iter().zip(expected) {
            assert!((weight - expected).abs() < 1e-6, "{weight} vs {expected}");
        }
        assert!((outcome.lambda_max - 3.0).abs() < 1e-9);
        assert!(outcome.consistency_ratio.abs() < 1e-9);
        assert!(outcome.is_consistent(0.1));
    }

    #[test]
    fn flags_inconsistent_judgements() {
        let matrix = vec![
            vec![1.0, 9.0, 1.0 / 9.0],
            vec![1.0 / 9.0, 1.0, 9.0],
            vec![9.0, 1.0 / 9.0, 1.0],
        ];
        let outcome = derive_ahp_weights(&matrix, &AhpConfig::default());
        let sum: f64 = outcome.weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(outcome.consistency_ratio > 1.0);
        assert!(!outcome.is_consistent(0.1));
    }

    #[test]
    fn small_matrices_are_trivially_consistent() {
        let single = derive_ahp_weights(&[vec![1.0]], &AhpConfig::default());
        assert_eq!(single.weights, vec![1.0]);
        assert_eq!(single.consistency_index, 0.0);
        assert_eq!(single.consistency_ratio, 0.0);

        let pair = derive_ahp_weights(&[vec![1.0, 3.0], vec![1.0 / 3.0, 1.0]], &AhpConfig::default());
        assert!((pair.weights[0] - 0.75).abs() < 1e-9);
        assert!((pair.weights[1] - 0.25).abs() < 1e-9);
        assert_eq!(pair.consistency_ratio, 0.0);
    }

    #[test]
    fn degenerate_inputs_fall_back() {
        let empty = derive_ahp_weights(&[], &AhpConfig::default());
        assert!(empty.weights.is_empty());
        assert_eq!(empty.consistency_ratio, 0.0);

        let zero = derive_ahp_weights(&[vec![0.0, 0.0], vec![0.0, 0.0]], &AhpConfig::default());
        assert_eq!(zero.weights, vec![0.5, 0.5]);
        assert_eq!(zero.iterations, 1);
        assert_eq!(zero.consistency_ratio, 0.0);
    }

    #[test]
    fn iteration_cap_is_respected() {
        let matrix = reciprocal(&[4.0, 2.0, 1.0, 1.0]);
        let config = AhpConfig {
            max_iterations: 1,
            ..AhpConfig::default()
        };
        let outcome = derive_ahp_weights(&matrix, &config);
        assert_eq!(outcome.iterations, 1);
    }
}
