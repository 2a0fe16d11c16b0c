//! 内存存储实现模块
//!
//! - SchemeStore: InMemorySchemeStore
//! - HistoryStore: InMemoryHistoryStore

pub mod history;
pub mod scheme;

pub use history::*;
pub use scheme::*;
