mod tiers;
mod types;

pub use tiers::{metric_emoji, TierRule, TierTable};
pub use types::{MetricKey, MetricValue, UserMetricsResponse};

use serde::Serialize;

use crate::duration::format_duration;

/// One rendered row of the stats card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDisplay {
    pub key: String,
    pub label: String,
    pub formatted_value: String,
    pub tooltip: String,
    pub emoji: String,
}

/// Classify a single metric into its display row. Unknown keys never fail:
/// they render the raw key as label with an empty tooltip and emoji.
pub fn classify(key: &str, value: &MetricValue) -> MetricDisplay {
    let known = MetricKey::parse(key);
    let (label, tooltip) = match known {
        Some(known) => (known.label().to_string(), known.tooltip().to_string()),
        None => (key.to_string(), String::new()),
    };

    MetricDisplay {
        key: key.to_string(),
        label,
        formatted_value: format_metric_value(known, value),
        tooltip,
        emoji: metric_emoji(known, value.as_f64()).to_string(),
    }
}

/// Render a whole response: known keys in canonical card order, then any
/// unknown keys in sorted order.
pub fn display_rows(response: &UserMetricsResponse) -> Vec<MetricDisplay> {
    let mut rows = Vec::with_capacity(response.0.len());

    for key in MetricKey::DISPLAY_ORDER {
        if let Some(value) = response.get(key) {
            rows.push(classify(key.as_str(), value));
        }
    }

    for (key, value) in &response.0 {
        if MetricKey::parse(key).is_none() {
            rows.push(classify(key, value));
        }
    }

    rows
}

/// Per-key value formatting: average time renders as a duration, regularity
/// as a percentage, weekly hours with an `h` suffix, everything else as a
/// thousands-grouped number.
pub fn format_metric_value(key: Option<MetricKey>, value: &MetricValue) -> String {
    match key {
        Some(MetricKey::AvgAnnotationTime) => format_duration(value.as_f64()),
        Some(MetricKey::Regularity) => format!("{}%", plain_value(value)),
        Some(MetricKey::TotalTimeWeek) => format!("{}h", plain_value(value)),
        _ => match value {
            MetricValue::Number(n) => group_thousands(*n),
            MetricValue::Text(s) => s.clone(),
        },
    }
}

/// The value as sent, without grouping. Suffixed formats keep the wire
/// representation so "87.5" renders as "87.5%".
fn plain_value(value: &MetricValue) -> String {
    match value {
        MetricValue::Number(n) => n.to_string(),
        MetricValue::Text(s) => s.clone(),
    }
}

/// Group the integer part of a number with `,` separators, keeping any
/// fractional digits as-is.
fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let text = value.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1234.0), "1,234");
        assert_eq!(group_thousands(123456.0), "123,456");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
        assert_eq!(group_thousands(-1234.5), "-1,234.5");
    }

    #[test]
    fn avg_time_renders_as_duration() {
        let row = classify("avg_annotation_time", &MetricValue::Number(90.0));
        assert_eq!(row.formatted_value, "1m 30s");
        assert_eq!(row.label, "Avg Time");
        assert_eq!(row.emoji, "👣");
    }

    #[test]
    fn regularity_and_weekly_hours_get_suffixes() {
        let row = classify("regularity", &MetricValue::Number(80.0));
        assert_eq!(row.formatted_value, "80%");
        assert_eq!(row.emoji, "🌤️");

        let row = classify("total_time_week", &MetricValue::Number(6.0));
        assert_eq!(row.formatted_value, "6h");
        assert_eq!(row.emoji, "🕰️");
    }

    #[test]
    fn suffixed_formats_keep_the_wire_representation() {
        let row = classify("regularity", &MetricValue::from("87.5"));
        assert_eq!(row.formatted_value, "87.5%");
        assert_eq!(row.emoji, "🌤️");
    }

    #[test]
    fn counts_are_grouped() {
        let row = classify("annotations_quarter", &MetricValue::Number(1250.0));
        assert_eq!(row.formatted_value, "1,250");
        assert_eq!(row.emoji, "🌕");
    }

    #[test]
    fn unknown_key_degrades_instead_of_failing() {
        let row = classify("streak_days", &MetricValue::Number(4.0));
        assert_eq!(row.label, "streak_days");
        assert_eq!(row.tooltip, "");
        assert_eq!(row.emoji, "");
        assert_eq!(row.formatted_value, "4");
    }

    #[test]
    fn unparsable_text_lands_on_the_catch_all_tier() {
        let row = classify("annotations_week", &MetricValue::from("lots"));
        assert_eq!(row.emoji, "🌟");
        assert_eq!(row.formatted_value, "lots");
    }

    #[test]
    fn rows_follow_canonical_order_with_unknowns_last() {
        let response: UserMetricsResponse = serde_json::from_str(
            r#"{
                "regularity": 80,
                "annotations_today": 12,
                "streak_days": 4,
                "annotations_week": 45
            }"#,
        )
        .unwrap();

        let rows = display_rows(&response);
        let keys: Vec<&str> = rows.iter().map(|row| row.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "annotations_today",
                "annotations_week",
                "regularity",
                "streak_days"
            ]
        );
    }

    #[test]
    fn classification_is_referentially_transparent() {
        let value = MetricValue::Number(42.0);
        assert_eq!(
            classify("annotations_week", &value),
            classify("annotations_week", &value)
        );
    }
}
