//! 指标体系目录与指标选择。
//!
//! - [`tree`]：指标树展开
//! - [`catalog`]：按体系查找指标，JSON 加载
//! - [`selection`]：已选指标列表与一级指标覆盖校验

pub mod catalog;
pub mod selection;
pub mod tree;

pub use catalog::{CatalogError, IndicatorCatalog};
pub use selection::{CoverageReport, Selection, check_coverage};
pub use tree::{flatten_indicators, secondary_ids};
