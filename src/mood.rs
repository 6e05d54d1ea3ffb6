//! Project mood emoji: a single glyph summarizing a project's momentum
//! from its weekly annotation count and task completion.

use serde::{Deserialize, Serialize};

use crate::metrics::{TierRule, TierTable};

/// Tunable mood thresholds. Tiers are relative to a weekly annotation
/// target so they stay meaningful when the team's pace norm changes.
#[derive(Debug, Clone)]
pub struct MoodConfig {
    /// Weekly annotation count that counts as "on target" (100%).
    pub target_weekly: f64,
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self { target_weekly: 70.0 }
    }
}

// Percentage-of-target bands for an active, unfinished project.
static MOOD_TIERS: TierTable = TierTable::new(
    &[
        TierRule::Lt(35.0, "🥱"),
        TierRule::Lt(70.0, "😊"),
        TierRule::Lt(100.0, "😃"),
        TierRule::Lt(150.0, "🤗"),
    ],
    "🚀",
);

/// Mood for a project. Precedence, first match wins:
/// empty project, fully complete, no weekly data, idle week, then the
/// percentage-of-target bands.
pub fn project_mood(
    weekly_count: Option<f64>,
    total_tasks: u64,
    finished_tasks: u64,
    config: &MoodConfig,
) -> &'static str {
    if total_tasks == 0 {
        return "😐";
    }
    if total_tasks == finished_tasks {
        return "🎉";
    }
    let Some(weekly) = weekly_count else {
        return "";
    };
    if weekly == 0.0 {
        return "😴";
    }

    let percentage = weekly / config.target_weekly * 100.0;
    MOOD_TIERS.emoji(percentage)
}

/// Project progress as it appears in the project-list payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectProgress {
    pub title: Option<String>,
    pub weekly_annotation_count: Option<f64>,
    #[serde(default)]
    pub task_number: u64,
    #[serde(default)]
    pub finished_task_number: u64,
}

impl ProjectProgress {
    pub fn mood(&self, config: &MoodConfig) -> &'static str {
        project_mood(
            self.weekly_annotation_count,
            self.task_number,
            self.finished_task_number,
            config,
        )
    }
}
