//! Emoji tier tables for each user metric.
//!
//! Each table is an ordered list of rules scanned top to bottom; the first
//! matching rule wins and the final symbol is an unbounded catch-all. The
//! tables are total over all f64 input: NaN fails both `==` and `<`, so a
//! value that could not be coerced always classifies into the catch-all.

use super::MetricKey;

/// One step of a tier table. `Eq` handles the exact special cases
/// (idle zero, single project); `Lt` is an exclusive upper bound.
#[derive(Debug, Clone, Copy)]
pub enum TierRule {
    Eq(f64, &'static str),
    Lt(f64, &'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct TierTable {
    rules: &'static [TierRule],
    fallback: &'static str,
}

impl TierTable {
    pub const fn new(rules: &'static [TierRule], fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    /// First-match scan over the ordered rules.
    pub fn emoji(&self, value: f64) -> &'static str {
        for rule in self.rules {
            match *rule {
                TierRule::Eq(bound, symbol) if value == bound => return symbol,
                TierRule::Lt(bound, symbol) if value < bound => return symbol,
                _ => {}
            }
        }
        self.fallback
    }
}

use TierRule::{Eq, Lt};

static ANNOTATIONS_TODAY: TierTable = TierTable::new(
    &[Eq(0.0, "😴"), Lt(10.0, "🌱"), Lt(30.0, "⭐"), Lt(50.0, "🔥")],
    "🚀",
);

static ANNOTATIONS_WEEK: TierTable = TierTable::new(
    &[
        Eq(0.0, "💤"),
        Lt(10.0, "🌱"),
        Lt(50.0, "🌿"),
        Lt(100.0, "✨"),
        Lt(200.0, "💫"),
    ],
    "🌟",
);

static ANNOTATIONS_QUARTER: TierTable = TierTable::new(
    &[
        Eq(0.0, "🌑"),
        Lt(250.0, "🌒"),
        Lt(500.0, "🌓"),
        Lt(1000.0, "🌔"),
    ],
    "🌕",
);

// Lower is better for annotation time, so no idle special case.
static AVG_ANNOTATION_TIME: TierTable = TierTable::new(
    &[Lt(30.0, "⚡"), Lt(60.0, "🏃"), Lt(120.0, "👣"), Lt(240.0, "🐢")],
    "🎯",
);

static REGULARITY: TierTable = TierTable::new(
    &[
        Eq(0.0, "🌪️"),
        Lt(30.0, "🌧️"),
        Lt(60.0, "⛅"),
        Lt(90.0, "🌤️"),
    ],
    "☀️",
);

static PROJECTS_CONTRIBUTED: TierTable = TierTable::new(
    &[Eq(0.0, "🌱"), Eq(1.0, "🌿"), Lt(3.0, "🎨"), Lt(5.0, "🎪")],
    "🎯",
);

static TOTAL_TIME_WEEK: TierTable = TierTable::new(
    &[Eq(0.0, "⏰"), Lt(2.0, "⌚"), Lt(5.0, "⏱️"), Lt(10.0, "🕰️")],
    "⚡",
);

impl MetricKey {
    pub fn tiers(&self) -> &'static TierTable {
        match self {
            Self::AnnotationsToday => &ANNOTATIONS_TODAY,
            Self::AnnotationsWeek => &ANNOTATIONS_WEEK,
            Self::AnnotationsQuarter => &ANNOTATIONS_QUARTER,
            Self::AvgAnnotationTime => &AVG_ANNOTATION_TIME,
            Self::Regularity => &REGULARITY,
            Self::ProjectsContributed => &PROJECTS_CONTRIBUTED,
            Self::TotalTimeWeek => &TOTAL_TIME_WEEK,
        }
    }
}

/// Emoji for a metric value; unknown keys classify to an empty string.
pub fn metric_emoji(key: Option<MetricKey>, value: f64) -> &'static str {
    match key {
        Some(key) => key.tiers().emoji(value),
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotations_today_tiers() {
        let table = MetricKey::AnnotationsToday.tiers();
        assert_eq!(table.emoji(0.0), "😴");
        assert_eq!(table.emoji(1.0), "🌱");
        assert_eq!(table.emoji(9.0), "🌱");
        assert_eq!(table.emoji(10.0), "⭐");
        assert_eq!(table.emoji(29.9), "⭐");
        assert_eq!(table.emoji(30.0), "🔥");
        assert_eq!(table.emoji(49.0), "🔥");
        assert_eq!(table.emoji(50.0), "🚀");
    }

    #[test]
    fn annotations_week_tiers() {
        let table = MetricKey::AnnotationsWeek.tiers();
        assert_eq!(table.emoji(0.0), "💤");
        assert_eq!(table.emoji(9.0), "🌱");
        assert_eq!(table.emoji(10.0), "🌿");
        assert_eq!(table.emoji(99.0), "✨");
        assert_eq!(table.emoji(199.0), "💫");
        assert_eq!(table.emoji(200.0), "🌟");
    }

    #[test]
    fn annotations_quarter_tiers() {
        let table = MetricKey::AnnotationsQuarter.tiers();
        assert_eq!(table.emoji(0.0), "🌑");
        assert_eq!(table.emoji(249.0), "🌒");
        assert_eq!(table.emoji(250.0), "🌓");
        assert_eq!(table.emoji(999.0), "🌔");
        assert_eq!(table.emoji(1000.0), "🌕");
    }

    #[test]
    fn avg_annotation_time_has_no_zero_special_case() {
        let table = MetricKey::AvgAnnotationTime.tiers();
        assert_eq!(table.emoji(0.0), "⚡");
        assert_eq!(table.emoji(29.9), "⚡");
        assert_eq!(table.emoji(30.0), "🏃");
        assert_eq!(table.emoji(119.0), "👣");
        assert_eq!(table.emoji(239.0), "🐢");
        assert_eq!(table.emoji(240.0), "🎯");
    }

    #[test]
    fn regularity_tiers() {
        let table = MetricKey::Regularity.tiers();
        assert_eq!(table.emoji(0.0), "🌪️");
        assert_eq!(table.emoji(29.0), "🌧️");
        assert_eq!(table.emoji(59.0), "⛅");
        assert_eq!(table.emoji(89.0), "🌤️");
        assert_eq!(table.emoji(90.0), "☀️");
        assert_eq!(table.emoji(100.0), "☀️");
    }

    #[test]
    fn projects_contributed_exact_one_case() {
        let table = MetricKey::ProjectsContributed.tiers();
        assert_eq!(table.emoji(0.0), "🌱");
        assert_eq!(table.emoji(1.0), "🌿");
        // 1.5 is not exactly one, so it falls into the <3 tier
        assert_eq!(table.emoji(1.5), "🎨");
        assert_eq!(table.emoji(2.0), "🎨");
        assert_eq!(table.emoji(4.0), "🎪");
        assert_eq!(table.emoji(5.0), "🎯");
    }

    #[test]
    fn total_time_week_tiers() {
        let table = MetricKey::TotalTimeWeek.tiers();
        assert_eq!(table.emoji(0.0), "⏰");
        assert_eq!(table.emoji(1.5), "⌚");
        assert_eq!(table.emoji(4.9), "⏱️");
        assert_eq!(table.emoji(9.0), "🕰️");
        assert_eq!(table.emoji(10.0), "⚡");
    }

    #[test]
    fn tiers_are_stable_within_a_band() {
        let table = MetricKey::AnnotationsWeek.tiers();
        assert_eq!(table.emoji(50.0), table.emoji(99.9));
        assert_ne!(table.emoji(99.9), table.emoji(100.0));
    }

    #[test]
    fn nan_classifies_into_every_catch_all() {
        for key in MetricKey::DISPLAY_ORDER {
            let table = key.tiers();
            assert_eq!(table.emoji(f64::NAN), table.emoji(f64::INFINITY));
        }
    }

    #[test]
    fn unknown_key_gets_empty_emoji() {
        assert_eq!(metric_emoji(None, 42.0), "");
    }
}
