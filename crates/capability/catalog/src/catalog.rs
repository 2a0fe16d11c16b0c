//! 指标体系目录。

use crate::tree::{flatten_indicators, secondary_ids};
use domain::{IndicatorNode, IndicatorSystem};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// 目录加载错误。
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog parse failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// 只读的指标体系集合。
#[derive(Debug, Clone, Default)]
pub struct IndicatorCatalog {
    systems: Vec<IndicatorSystem>,
}

impl IndicatorCatalog {
    pub fn new(systems: Vec<IndicatorSystem>) -> Self {
        Self { systems }
    }

    /// 解析 `Vec<IndicatorSystem>` 形式的 JSON。
    pub fn from_json(payload: &str) -> Result<Self, CatalogError> {
        let systems: Vec<IndicatorSystem> = serde_json::from_str(payload)?;
        Ok(Self::new(systems))
    }

    /// 从 JSON 文件加载。
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let payload = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&payload)?;
        info!(
            path = %path.display(),
            systems = catalog.systems.len(),
            "indicator catalog loaded"
        );
        Ok(catalog)
    }

    pub fn systems(&self) -> &[IndicatorSystem] {
        &self.systems
    }

    pub fn system(&self, system_id: &str) -> Option<&IndicatorSystem> {
        self.systems.iter().find(|system| system.id == system_id)
    }

    /// 指定体系的全部指标（任意层级）；体系不存在时为空。
    pub fn indicator_map(&self, system_id: &str) -> HashMap<&str, &IndicatorNode> {
        self.system(system_id)
            .map(|system| flatten_indicators(&system.tree))
            .unwrap_or_default()
    }

    /// 把指标 ID 列表解析为节点，丢弃体系中不存在的 ID，保持原顺序。
    pub fn resolve(&self, system_id: &str, indicator_ids: &[String]) -> Vec<&IndicatorNode> {
        let map = self.indicator_map(system_id);
        let resolved: Vec<&IndicatorNode> = indicator_ids
            .iter()
            .filter_map(|id| map.get(id.as_str()).copied())
            .collect();
        if resolved.len() != indicator_ids.len() {
            debug!(
                system_id,
                requested = indicator_ids.len(),
                resolved = resolved.len(),
                "unknown indicator ids dropped"
            );
        }
        resolved
    }

    /// 指定体系可选的二级指标 ID。
    pub fn secondary_ids(&self, system_id: &str) -> Vec<&str> {
        self.system(system_id)
            .map(secondary_ids)
            .unwrap_or_default()
    }
}
