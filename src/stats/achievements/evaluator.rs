//! Achievement evaluation
//!
//! Pure functions over the catalog and a stats snapshot. Every call is an
//! independent evaluation: nothing here reads the clock or storage, so
//! calls may run concurrently without coordination.

use super::definitions::{Achievement, AchievementId, Condition, ACHIEVEMENTS};
use crate::stats::models::AchievementStats;

/// Progress toward a single achievement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub current: f64,
    pub target: f64,
    /// Clamped to 0..=100
    pub percentage: f64,
}

impl Progress {
    /// Reported for goal-dependent conditions and unknown keys, which
    /// have no meaningful numeric progress
    pub fn fallback() -> Self {
        Self {
            current: 0.0,
            target: 1.0,
            percentage: 0.0,
        }
    }
}

/// IDs of all achievements whose condition holds, in catalog order
pub fn unlocked(stats: &AchievementStats) -> Vec<AchievementId> {
    ACHIEVEMENTS
        .iter()
        .filter(|a| a.condition.is_met(stats))
        .map(|a| a.id)
        .collect()
}

/// Unlocked achievements not yet in the acknowledged baseline, in catalog order
///
/// The baseline is owned by the caller and never mutated here; merging
/// the result back is the caller's job.
pub fn newly_unlocked(
    stats: &AchievementStats,
    acknowledged: &[String],
) -> Vec<&'static Achievement> {
    ACHIEVEMENTS
        .iter()
        .filter(|a| a.condition.is_met(stats))
        .filter(|a| !acknowledged.iter().any(|key| key == a.id.as_str()))
        .collect()
}

/// Progress toward one achievement
///
/// For threshold conditions, `current` is the raw stat value and
/// `target` the threshold. Goal-dependent conditions report the
/// [`Progress::fallback`] triple.
pub fn progress(achievement: &Achievement, stats: &AchievementStats) -> Progress {
    let (current, target) = match achievement.condition {
        Condition::DaysRecorded(n) => (f64::from(stats.total_days_recorded), f64::from(n)),
        Condition::Streak(n) => (f64::from(stats.current_streak), f64::from(n)),
        Condition::WeightLost(kg) => (stats.total_weight_loss, kg),
        Condition::HabitsCompleted(n) => (f64::from(stats.total_habits_completed), f64::from(n)),
        Condition::Workouts(n) => (f64::from(stats.total_workouts), f64::from(n)),
        Condition::Meals(n) => (f64::from(stats.total_meals), f64::from(n)),
        Condition::GoalReached | Condition::HalfwayToGoal => return Progress::fallback(),
    };

    // Catalog targets are fixed positive constants; weight loss can be
    // negative, hence the lower clamp.
    Progress {
        current,
        target,
        percentage: (current / target * 100.0).clamp(0.0, 100.0),
    }
}

/// Progress looked up by string key; unknown keys get the fallback
pub fn progress_for(key: &str, stats: &AchievementStats) -> Progress {
    match Achievement::find(key) {
        Some(achievement) => progress(achievement, stats),
        None => Progress::fallback(),
    }
}
