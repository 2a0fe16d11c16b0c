//! 权重方案内存存储实现
//!
//! 方案列表与当前方案 ID 放在同一把锁里，导入时一次性替换。

use crate::error::StorageError;
use crate::traits::SchemeStore;
use domain::WeightScheme;
use eval_weighting::{export_schemes, import_schemes};
use std::sync::RwLock;
use tracing::{debug, info};

#[derive(Debug, Default)]
struct SchemeState {
    schemes: Vec<WeightScheme>,
    active_id: Option<String>,
}

impl SchemeState {
    fn active(&self) -> Option<&WeightScheme> {
        let active_id = self.active_id.as_deref()?;
        self.schemes.iter().find(|scheme| scheme.id == active_id)
    }
}

/// 权重方案内存存储
#[derive(Debug, Default)]
pub struct InMemorySchemeStore {
    state: RwLock<SchemeState>,
}

impl InMemorySchemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置方案，第一个为当前方案。
    pub fn with_schemes(schemes: Vec<WeightScheme>) -> Self {
        let active_id = schemes.first().map(|scheme| scheme.id.clone());
        Self {
            state: RwLock::new(SchemeState { schemes, active_id }),
        }
    }
}

#[async_trait::async_trait]
impl SchemeStore for InMemorySchemeStore {
    async fn list(&self) -> Result<Vec<WeightScheme>, StorageError> {
        let schemes = self
            .state
            .read()
            .map(|state| state.schemes.clone())
            .unwrap_or_default();
        Ok(schemes)
    }

    async fn find(&self, scheme_id: &str) -> Result<Option<WeightScheme>, StorageError> {
        let scheme = self.state.read().ok().and_then(|state| {
            state
                .schemes
                .iter()
                .find(|scheme| scheme.id == scheme_id)
                .cloned()
        });
        Ok(scheme)
    }

    async fn save(&self, scheme: WeightScheme) -> Result<WeightScheme, StorageError> {
        let mut state = self.state.write().map_err(|_| StorageError::Lock)?;
        match state.schemes.iter_mut().find(|item| item.id == scheme.id) {
            Some(existing) => *existing = scheme.clone(),
            None => state.schemes.push(scheme.clone()),
        }
        state.active_id = Some(scheme.id.clone());
        debug!(scheme_id = %scheme.id, "weight scheme saved");
        Ok(scheme)
    }

    async fn delete(&self, scheme_id: &str) -> Result<bool, StorageError> {
        let mut state = self.state.write().map_err(|_| StorageError::Lock)?;
        let before = state.schemes.len();
        state.schemes.retain(|scheme| scheme.id != scheme_id);
        if state.schemes.len() == before {
            return Ok(false);
        }
        if state.active_id.as_deref() == Some(scheme_id) {
            state.active_id = state.schemes.first().map(|scheme| scheme.id.clone());
        }
        Ok(true)
    }

    async fn active(&self) -> Result<Option<WeightScheme>, StorageError> {
        let scheme = self
            .state
            .read()
            .ok()
            .and_then(|state| state.active().cloned());
        Ok(scheme)
    }

    async fn set_active(&self, scheme_id: &str) -> Result<WeightScheme, StorageError> {
        let mut state = self.state.write().map_err(|_| StorageError::Lock)?;
        let scheme = state
            .schemes
            .iter()
            .find(|scheme| scheme.id == scheme_id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(scheme_id.to_string()))?;
        state.active_id = Some(scheme.id.clone());
        Ok(scheme)
    }

    async fn export(&self) -> Result<String, StorageError> {
        let state = self.state.read().map_err(|_| StorageError::Lock)?;
        Ok(export_schemes(&state.schemes)?)
    }

    async fn import(&self, payload: &str) -> Result<usize, StorageError> {
        // 先完整解析，失败时不触碰现有状态
        let schemes = import_schemes(payload)?;
        let count = schemes.len();
        let mut state = self.state.write().map_err(|_| StorageError::Lock)?;
        state.active_id = schemes.first().map(|scheme| scheme.id.clone());
        state.schemes = schemes;
        info!(count, "weight schemes imported");
        Ok(count)
    }
}
