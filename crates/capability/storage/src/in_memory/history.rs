//! 评估历史内存存储实现

use crate::error::StorageError;
use crate::traits::HistoryStore;
use domain::DeviceEvaluationResult;
use std::sync::RwLock;

/// 默认保留的历史记录条数
pub const DEFAULT_HISTORY_LIMIT: usize = 30;

/// 评估历史内存存储，最新的记录在最前。
#[derive(Debug)]
pub struct InMemoryHistoryStore {
    limit: usize,
    records: RwLock<Vec<DeviceEvaluationResult>>,
}

impl InMemoryHistoryStore {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            records: RwLock::new(Vec::new()),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for InMemoryHistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

#[async_trait::async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn append(&self, records: Vec<DeviceEvaluationResult>) -> Result<(), StorageError> {
        let mut history = self.records.write().map_err(|_| StorageError::Lock)?;
        let mut merged = records;
        merged.append(&mut history);
        merged.truncate(self.limit);
        *history = merged;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<DeviceEvaluationResult>, StorageError> {
        let records = self
            .records
            .read()
            .map(|records| records.clone())
            .unwrap_or_default();
        Ok(records)
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut history = self.records.write().map_err(|_| StorageError::Lock)?;
        history.clear();
        Ok(())
    }
}
