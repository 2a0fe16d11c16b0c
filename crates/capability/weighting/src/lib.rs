//! 指标权重：层次分析法（幂迭代求主特征向量）、熵权法、权重方案归一化与导入导出。

pub mod ahp;
pub mod codec;
pub mod entropy;
pub mod scheme;

pub use ahp::{AhpConfig, AhpOutcome, RandomIndexTable, derive_ahp_weights};
pub use codec::{SchemeCodecError, export_schemes, import_schemes};
pub use entropy::entropy_weights;
pub use scheme::{apply_weight_scheme, normalize_weights, scheme_from_weights, weights_by_id};
