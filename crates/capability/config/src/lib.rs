//! 应用运行配置加载。

use domain::{Level, LevelBand};
use std::env;
use std::str::FromStr;

/// 默认等级分档：`level:min:max`，max 留空表示无上界。
pub const DEFAULT_LEVEL_BANDS: &str = "A:90:,B:60:90,C:40:60,D:0:40";

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(String),
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    pub catalog_path: Option<String>,
    pub ahp_max_iterations: usize,
    pub ahp_tolerance: f64,
    pub ahp_cr_threshold: f64,
    pub fallback_score: f64,
    pub history_limit: usize,
    pub level_bands: Vec<LevelBand>,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_addr = env::var("EVAL_HTTP_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let catalog_path = read_optional("EVAL_CATALOG_PATH");
        let ahp_max_iterations = read_with_default("EVAL_AHP_MAX_ITERATIONS", 100_usize)?;
        let ahp_tolerance = read_with_default("EVAL_AHP_TOLERANCE", 1e-6_f64)?;
        let ahp_cr_threshold = read_with_default("EVAL_AHP_CR_THRESHOLD", 0.1_f64)?;
        let fallback_score = read_with_default("EVAL_FALLBACK_SCORE", 60.0_f64)?;
        let history_limit = read_with_default("EVAL_HISTORY_LIMIT", 30_usize)?;
        let bands = env::var("EVAL_LEVEL_BANDS").unwrap_or_else(|_| DEFAULT_LEVEL_BANDS.to_string());
        let level_bands = parse_level_bands(&bands)
            .ok_or_else(|| ConfigError::Invalid("EVAL_LEVEL_BANDS".to_string(), bands.clone()))?;

        if ahp_max_iterations == 0 {
            return Err(ConfigError::Invalid(
                "EVAL_AHP_MAX_ITERATIONS".to_string(),
                ahp_max_iterations.to_string(),
            ));
        }
        if ahp_tolerance.is_nan() || ahp_tolerance <= 0.0 {
            return Err(ConfigError::Invalid(
                "EVAL_AHP_TOLERANCE".to_string(),
                ahp_tolerance.to_string(),
            ));
        }

        Ok(Self {
            http_addr,
            catalog_path,
            ahp_max_iterations,
            ahp_tolerance,
            ahp_cr_threshold,
            fallback_score,
            history_limit,
            level_bands,
        })
    }
}

/// 解析 `A:90:,B:60:90` 形式的等级分档，保持书写顺序；任一段非法或结果为空时返回 `None`。
pub fn parse_level_bands(value: &str) -> Option<Vec<LevelBand>> {
    let bands = value
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_band)
        .collect::<Option<Vec<_>>>()?;
    if bands.is_empty() { None } else { Some(bands) }
}

fn parse_band(segment: &str) -> Option<LevelBand> {
    let mut parts = segment.split(':');
    let level = Level::parse(parts.next()?)?;
    let min = parts.next()?.trim().parse::<f64>().ok()?;
    let max = match parts.next().map(str::trim) {
        None | Some("") => None,
        Some(max) => Some(max.parse::<f64>().ok()?),
    };
    if parts.next().is_some() || max.is_some_and(|max| max <= min) {
        return None;
    }
    Some(LevelBand::new(min, max, level))
}

fn read_with_default<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}
