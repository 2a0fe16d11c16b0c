//! 权重方案 JSON 导入导出。

use domain::WeightScheme;
use serde_json::Value;

/// 导入导出错误。
#[derive(Debug, thiserror::Error)]
pub enum SchemeCodecError {
    #[error("invalid json: {0}")]
    Json(serde_json::Error),
    #[error("import format error: {0}")]
    Format(String),
}

/// 导出为带缩进的 JSON 数组。
pub fn export_schemes(schemes: &[WeightScheme]) -> Result<String, SchemeCodecError> {
    serde_json::to_string_pretty(schemes).map_err(SchemeCodecError::Json)
}

/// 解析导出的 JSON。顶层不是数组或任一元素不是权重方案时返回 `Format`。
pub fn import_schemes(payload: &str) -> Result<Vec<WeightScheme>, SchemeCodecError> {
    let value: Value = serde_json::from_str(payload).map_err(SchemeCodecError::Json)?;
    let Value::Array(items) = value else {
        return Err(SchemeCodecError::Format(
            "payload must be an array of weight schemes".to_string(),
        ));
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|err| SchemeCodecError::Format(format!("scheme #{index}: {err}")))
        })
        .collect()
}
