//! 指标树展开。

use domain::{IndicatorNode, IndicatorSystem};
use std::collections::HashMap;

/// 深度优先展开整棵指标树：ID -> 节点，包含所有层级。
pub fn flatten_indicators(tree: &[IndicatorNode]) -> HashMap<&str, &IndicatorNode> {
    let mut result = HashMap::new();
    walk(tree, &mut result);
    result
}

fn walk<'a>(nodes: &'a [IndicatorNode], result: &mut HashMap<&'a str, &'a IndicatorNode>) {
    for node in nodes {
        result.insert(node.id.as_str(), node);
        if !node.children.is_empty() {
            walk(&node.children, result);
        }
    }
}

/// 一级指标下的二级指标 ID（可供选择的评估指标），保持声明顺序。
pub fn secondary_ids(system: &IndicatorSystem) -> Vec<&str> {
    system
        .tree
        .iter()
        .flat_map(|node| node.children.iter().map(|child| child.id.as_str()))
        .collect()
}
