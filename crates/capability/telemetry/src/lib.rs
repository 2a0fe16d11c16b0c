//! 追踪、请求 ID 生成与评估计数。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 计数快照。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub evaluations: u64,
    pub devices_evaluated: u64,
    pub indicators_scored: u64,
    pub indicators_skipped: u64,
    pub rule_fallbacks: u64,
    pub evaluation_latency_ms_total: u64,
    pub evaluation_latency_ms_count: u64,
    pub weight_derivations: u64,
    pub inconsistent_matrices: u64,
    pub scheme_imports: u64,
    pub scheme_import_failures: u64,
}

/// 进程级计数器。
pub struct TelemetryMetrics {
    evaluations: AtomicU64,
    devices_evaluated: AtomicU64,
    indicators_scored: AtomicU64,
    indicators_skipped: AtomicU64,
    rule_fallbacks: AtomicU64,
    evaluation_latency_ms_total: AtomicU64,
    evaluation_latency_ms_count: AtomicU64,
    weight_derivations: AtomicU64,
    inconsistent_matrices: AtomicU64,
    scheme_imports: AtomicU64,
    scheme_import_failures: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            evaluations: AtomicU64::new(0),
            devices_evaluated: AtomicU64::new(0),
            indicators_scored: AtomicU64::new(0),
            indicators_skipped: AtomicU64::new(0),
            rule_fallbacks: AtomicU64::new(0),
            evaluation_latency_ms_total: AtomicU64::new(0),
            evaluation_latency_ms_count: AtomicU64::new(0),
            weight_derivations: AtomicU64::new(0),
            inconsistent_matrices: AtomicU64::new(0),
            scheme_imports: AtomicU64::new(0),
            scheme_import_failures: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            evaluations: self.evaluations.load(Ordering::Relaxed),
            devices_evaluated: self.devices_evaluated.load(Ordering::Relaxed),
            indicators_scored: self.indicators_scored.load(Ordering::Relaxed),
            indicators_skipped: self.indicators_skipped.load(Ordering::Relaxed),
            rule_fallbacks: self.rule_fallbacks.load(Ordering::Relaxed),
            evaluation_latency_ms_total: self.evaluation_latency_ms_total.load(Ordering::Relaxed),
            evaluation_latency_ms_count: self.evaluation_latency_ms_count.load(Ordering::Relaxed),
            weight_derivations: self.weight_derivations.load(Ordering::Relaxed),
            inconsistent_matrices: self.inconsistent_matrices.load(Ordering::Relaxed),
            scheme_imports: self.scheme_imports.load(Ordering::Relaxed),
            scheme_import_failures: self.scheme_import_failures.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局计数实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录一次批量评估及其设备数。
pub fn record_evaluation(devices: u64) {
    let metrics = metrics();
    metrics.evaluations.fetch_add(1, Ordering::Relaxed);
    metrics
        .devices_evaluated
        .fetch_add(devices, Ordering::Relaxed);
}

/// 记录参与计分的指标项数。
pub fn record_indicators_scored(count: u64) {
    metrics()
        .indicators_scored
        .fetch_add(count, Ordering::Relaxed);
}

/// 记录因设备缺少测点而跳过的指标项数。
pub fn record_indicators_skipped(count: u64) {
    metrics()
        .indicators_skipped
        .fetch_add(count, Ordering::Relaxed);
}

/// 记录未命中任何规则、使用兜底分的指标项数。
pub fn record_rule_fallbacks(count: u64) {
    metrics().rule_fallbacks.fetch_add(count, Ordering::Relaxed);
}

/// 记录评估耗时（毫秒）。
pub fn record_evaluation_latency_ms(latency_ms: u64) {
    let metrics = metrics();
    metrics
        .evaluation_latency_ms_total
        .fetch_add(latency_ms, Ordering::Relaxed);
    metrics
        .evaluation_latency_ms_count
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录权重推导次数（AHP 或熵权）。
pub fn record_weight_derivation() {
    metrics().weight_derivations.fetch_add(1, Ordering::Relaxed);
}

/// 记录一致性检验未通过的判断矩阵。
pub fn record_inconsistent_matrix() {
    metrics()
        .inconsistent_matrices
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录方案导入成功次数。
pub fn record_scheme_import() {
    metrics().scheme_imports.fetch_add(1, Ordering::Relaxed);
}

/// 记录方案导入失败次数。
pub fn record_scheme_import_failure() {
    metrics()
        .scheme_import_failures
        .fetch_add(1, Ordering::Relaxed);
}
