//! 评估引擎共享的领域模型。
//!
//! 所有类型都是纯数据结构，由指标体系、设备台账、权重方案等外部协作方提供，
//! 评估引擎只读取它们并返回新的结果结构。

pub mod device;
pub mod indicator;
pub mod result;
pub mod scheme;

pub use device::{DeviceMetric, DeviceRecord, DeviceStatus, MetricValue};
pub use indicator::{
    IndicatorDirection, IndicatorNode, IndicatorRule, IndicatorSystem, RuleComparator,
};
pub use result::{DeviceEvaluationResult, EvaluationResultDetail, Level, LevelBand};
pub use scheme::{WeightMap, WeightMethod, WeightScheme};
