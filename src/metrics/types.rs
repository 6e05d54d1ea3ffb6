use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The user-activity metrics the stats surface knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    AnnotationsToday,
    AnnotationsWeek,
    AnnotationsQuarter,
    TotalTimeWeek,
    AvgAnnotationTime,
    Regularity,
    ProjectsContributed,
}

impl MetricKey {
    /// Canonical card order: volume counts first, then time, then habits.
    pub const DISPLAY_ORDER: [MetricKey; 7] = [
        MetricKey::AnnotationsToday,
        MetricKey::AnnotationsWeek,
        MetricKey::AnnotationsQuarter,
        MetricKey::TotalTimeWeek,
        MetricKey::AvgAnnotationTime,
        MetricKey::Regularity,
        MetricKey::ProjectsContributed,
    ];

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "annotations_today" => Some(Self::AnnotationsToday),
            "annotations_week" => Some(Self::AnnotationsWeek),
            "annotations_quarter" => Some(Self::AnnotationsQuarter),
            "total_time_week" => Some(Self::TotalTimeWeek),
            "avg_annotation_time" => Some(Self::AvgAnnotationTime),
            "regularity" => Some(Self::Regularity),
            "projects_contributed" => Some(Self::ProjectsContributed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AnnotationsToday => "annotations_today",
            Self::AnnotationsWeek => "annotations_week",
            Self::AnnotationsQuarter => "annotations_quarter",
            Self::TotalTimeWeek => "total_time_week",
            Self::AvgAnnotationTime => "avg_annotation_time",
            Self::Regularity => "regularity",
            Self::ProjectsContributed => "projects_contributed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AnnotationsToday => "Today",
            Self::AnnotationsWeek => "This Week",
            Self::AnnotationsQuarter => "This Quarter",
            Self::TotalTimeWeek => "Hours This Week",
            Self::AvgAnnotationTime => "Avg Time",
            Self::Regularity => "Regularity",
            Self::ProjectsContributed => "Projects",
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            Self::AnnotationsToday => "Number of annotations you created today",
            Self::AnnotationsWeek => "Number of annotations you created in the last 7 days",
            Self::AnnotationsQuarter => "Number of annotations you created in the last 90 days",
            Self::TotalTimeWeek => "Total time spent annotating this week",
            Self::AvgAnnotationTime => {
                "Average time spent per annotation (excluding top/bottom 10%)"
            }
            Self::Regularity => {
                "Percentage of the last 10 days where you created 3 or more annotations"
            }
            Self::ProjectsContributed => "Number of different projects you have contributed to",
        }
    }
}

/// A metric value as it arrives on the wire: the stats endpoint sends
/// some values as numbers and some as numeric strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl MetricValue {
    /// Coerce to f64 for tier lookup. Unparsable text becomes NaN, which
    /// fails every tier comparison and lands on the catch-all tier.
    pub fn as_f64(&self) -> f64 {
        match self {
            MetricValue::Number(n) => *n,
            MetricValue::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Number(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Text(value.to_string())
    }
}

/// The user-metrics response: metric key to value. Keyed by raw string so
/// keys this build does not know about still deserialize and render with
/// fallbacks instead of failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetricsResponse(pub BTreeMap<String, MetricValue>);

impl UserMetricsResponse {
    pub fn get(&self, key: MetricKey) -> Option<&MetricValue> {
        self.0.get(key.as_str())
    }
}
