//! 存储接口 Trait 定义
//!
//! - SchemeStore：权重方案及当前方案
//! - HistoryStore：评估历史

use crate::error::StorageError;
use async_trait::async_trait;
use domain::{DeviceEvaluationResult, WeightScheme};

/// 权重方案存储接口
#[async_trait]
pub trait SchemeStore: Send + Sync {
    /// 按保存顺序列出全部方案
    async fn list(&self) -> Result<Vec<WeightScheme>, StorageError>;

    async fn find(&self, scheme_id: &str) -> Result<Option<WeightScheme>, StorageError>;

    /// 按 ID 新增或替换，并设为当前方案
    async fn save(&self, scheme: WeightScheme) -> Result<WeightScheme, StorageError>;

    /// 删除方案；删除的是当前方案时改用剩余的第一个
    async fn delete(&self, scheme_id: &str) -> Result<bool, StorageError>;

    /// 当前方案
    async fn active(&self) -> Result<Option<WeightScheme>, StorageError>;

    /// 切换当前方案，方案不存在时返回 `NotFound`
    async fn set_active(&self, scheme_id: &str) -> Result<WeightScheme, StorageError>;

    /// 导出全部方案（JSON 数组）
    async fn export(&self) -> Result<String, StorageError>;

    /// 用导入的方案替换全部方案，第一个成为当前方案；返回导入数量
    async fn import(&self, payload: &str) -> Result<usize, StorageError>;
}

/// 评估历史存储接口
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// 新记录排在最前，超过上限的旧记录被丢弃
    async fn append(&self, records: Vec<DeviceEvaluationResult>) -> Result<(), StorageError>;

    async fn list(&self) -> Result<Vec<DeviceEvaluationResult>, StorageError>;

    async fn clear(&self) -> Result<(), StorageError>;
}
