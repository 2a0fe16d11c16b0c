//! # Eval Storage 模块
//!
//! 权重方案与评估历史的存储抽象。
//!
//! ## 模块说明
//!
//! - [`traits`]：存储接口（`SchemeStore`、`HistoryStore`）
//! - [`error`]：存储错误类型
//! - [`in_memory`]：内存实现，使用 `RwLock` 提供线程安全访问
//!
//! ## 设计约束
//!
//! - 评估计算本身是纯函数，结果由调用方显式写入存储
//! - 方案导入是原子的：解析失败时方案列表和当前方案都保持不变
//! - 历史记录按时间倒序保存，超过上限的旧记录被丢弃

pub mod error;
pub mod in_memory;
pub mod traits;

pub use error::*;
pub use in_memory::{DEFAULT_HISTORY_LIMIT, InMemoryHistoryStore, InMemorySchemeStore};
pub use traits::*;
