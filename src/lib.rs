//! Pure formatting and classification core for an annotation-activity
//! stats surface: duration labels, per-metric emoji tiers with labels and
//! tooltips, and a project mood emoji. The only async piece is the
//! bounded-retry fetch seam around the metrics source.

mod client;
mod duration;
mod metrics;
mod mood;
mod utils;

pub use client::{fetch_with_retry, MetricsSource, RetryConfig};
pub use duration::format_duration;
pub use metrics::{
    classify, display_rows, format_metric_value, metric_emoji, MetricDisplay, MetricKey,
    MetricValue, TierRule, TierTable, UserMetricsResponse,
};
pub use mood::{project_mood, MoodConfig, ProjectProgress};
