//! 已选指标与覆盖校验。

use crate::tree::secondary_ids;
use domain::{IndicatorNode, IndicatorSystem};
use serde::Serialize;
use std::collections::BTreeSet;

/// 切换体系后选择为空时默认选中的二级指标个数。
const DEFAULT_PICK: usize = 3;

/// 有序、去重的已选指标 ID。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new(ids: Vec<String>) -> Self {
        let mut selection = Self::default();
        selection.set(ids);
        selection
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|item| item == id)
    }

    /// 勾选时追加到末尾（已存在则不变），取消勾选时移除。
    pub fn toggle(&mut self, id: &str, checked: bool) {
        if checked {
            if !self.contains(id) {
                self.ids.push(id.to_string());
            }
        } else {
            self.ids.retain(|item| item != id);
        }
    }

    /// 整体替换，重复 ID 只保留第一次出现。
    pub fn set(&mut self, ids: Vec<String>) {
        let mut seen = BTreeSet::new();
        self.ids = ids
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();
    }

    /// 切换体系时只保留该体系的二级指标；全部被移除时默认选中前 3 个。
    /// 体系没有二级指标时选择不变。
    pub fn retain_available(&mut self, system: &IndicatorSystem) {
        let available = secondary_ids(system);
        if available.is_empty() {
            return;
        }
        self.ids.retain(|id| available.contains(&id.as_str()));
        if self.ids.is_empty() {
            self.ids = available
                .iter()
                .take(DEFAULT_PICK)
                .map(|id| id.to_string())
                .collect();
        }
    }
}

/// 一级指标覆盖情况。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageReport {
    pub distinct_groups: usize,
    pub required: usize,
    pub satisfied: bool,
}

/// 统计已选指标覆盖的一级指标分组数；体系未知时至少要求 1 组。
pub fn check_coverage(
    system: Option<&IndicatorSystem>,
    selected: &[&IndicatorNode],
) -> CoverageReport {
    let groups: BTreeSet<&str> = selected.iter().map(|node| node.primary_group()).collect();
    let required = system.map_or(1, |system| system.min_primary_selection);
    CoverageReport {
        distinct_groups: groups.len(),
        required,
        satisfied: groups.len() >= required,
    }
}
