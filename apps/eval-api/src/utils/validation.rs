//! 输入验证辅助函数
//!
//! 失败统一返回 bad_request_error 响应。

use crate::utils::response::bad_request_error;
use axum::response::Response;
use domain::WeightMap;

/// 验证必填字段，去除空格并检查非空
pub fn normalize_required(value: String, field: &str) -> Result<String, Response> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(bad_request_error(format!("{field} required")));
    }
    Ok(trimmed.to_string())
}

/// 验证可选字段，如果提供则去除空格并检查非空
pub fn normalize_optional(value: Option<String>, field: &str) -> Result<Option<String>, Response> {
    match value {
        Some(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(bad_request_error(format!("{field} required")));
            }
            Ok(Some(trimmed.to_string()))
        }
        None => Ok(None),
    }
}

/// 指标 ID 列表非空且不重复
pub fn require_indicator_ids(ids: &[String]) -> Result<(), Response> {
    if ids.is_empty() {
        return Err(bad_request_error("indicatorIds required"));
    }
    for (index, id) in ids.iter().enumerate() {
        if ids[..index].contains(id) {
            return Err(bad_request_error(format!("duplicate indicator id: {id}")));
        }
    }
    Ok(())
}

/// 判断矩阵必须是与指标数同阶的方阵，元素为正的有限数
pub fn require_pairwise_matrix(matrix: &[Vec<f64>], size: usize) -> Result<(), Response> {
    if matrix.len() != size || matrix.iter().any(|row| row.len() != size) {
        return Err(bad_request_error(format!(
            "matrix must be {size}x{size}"
        )));
    }
    if matrix
        .iter()
        .flatten()
        .any(|value| !value.is_finite() || *value <= 0.0)
    {
        return Err(bad_request_error("matrix entries must be positive"));
    }
    Ok(())
}

/// 样本矩阵每行的列数与指标数一致，元素为非负有限数
pub fn require_samples(samples: &[Vec<f64>], columns: usize) -> Result<(), Response> {
    if samples.is_empty() {
        return Err(bad_request_error("samples required"));
    }
    if samples.iter().any(|row| row.len() != columns) {
        return Err(bad_request_error(format!(
            "every sample must have {columns} values"
        )));
    }
    if samples
        .iter()
        .flatten()
        .any(|value| !value.is_finite() || *value < 0.0)
    {
        return Err(bad_request_error("samples must be non-negative"));
    }
    Ok(())
}

/// 权重必须是非负有限数
pub fn require_weights(weights: &WeightMap) -> Result<(), Response> {
    match weights
        .iter()
        .find(|(_, weight)| !weight.is_finite() || **weight < 0.0)
    {
        Some((id, _)) => Err(bad_request_error(format!("invalid weight for {id}"))),
        None => Ok(()),
    }
}
