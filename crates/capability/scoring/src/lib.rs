//! 设备指标评分：规则匹配、归一化、加权汇总、等级划分与图表序列。
//!
//! 评分流程：
//! 1. 按指标 ID 找到设备的测量值，缺失则跳过该指标
//! 2. `normalize` 计算 [0,1] 优良度（仅用于展示）
//! 3. `match_score` 按规则得到指标得分
//! 4. 得分 × 权重得到贡献值，累加为总分
//! 5. `LevelBands::classify` 将总分映射为等级
//!
//! 所有函数都是纯计算，无 I/O、无共享可变状态。

pub mod aggregate;
pub mod evaluator;
pub mod grade;
pub mod matcher;
pub mod normalize;
pub mod series;

pub use aggregate::{Datasets, Evaluation, build_datasets, evaluate, evaluate_with_fallback};
pub use evaluator::{Evaluator, ScoringConfig, apply_result};
pub use grade::LevelBands;
pub use matcher::{DEFAULT_FALLBACK_SCORE, ScoreMatch, match_score, match_score_with_fallback};
pub use normalize::{normalize, normalize_direction};
pub use series::{BarSeries, RadarIndicator, RadarSeries, build_bar_series, build_radar_series};
