//! Snapshot aggregation over log records
//!
//! Computes the [`AchievementStats`] snapshot from in-memory record
//! slices. The caller supplies `today` once at the boundary; nothing in
//! here reads the clock, so the same inputs always produce the same
//! snapshot.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::models::{
    AchievementStats, HabitCompletion, MealEntry, Profile, WeightEntry, WorkoutEntry,
};

/// Build the achievement stats snapshot from raw log records
pub fn build_stats(
    weights: &[WeightEntry],
    habits: &[HabitCompletion],
    workouts: &[WorkoutEntry],
    meals: &[MealEntry],
    profile: &Profile,
    today: NaiveDate,
) -> AchievementStats {
    let days: BTreeSet<NaiveDate> = weights.iter().map(|w| w.date).collect();
    let current_weight = latest_weight(weights);

    let total_weight_loss = match (profile.start_weight, current_weight) {
        (Some(start), Some(current)) => start - current,
        _ => 0.0,
    };

    let stats = AchievementStats {
        total_days_recorded: days.len() as u32,
        current_streak: current_streak(&days, today),
        total_weight_loss,
        start_weight: profile.start_weight,
        current_weight,
        target_weight: profile.target_weight,
        total_habits_completed: habits.len() as u32,
        total_workouts: workouts.len() as u32,
        total_meals: meals.len() as u32,
    };

    tracing::debug!(
        days = stats.total_days_recorded,
        streak = stats.current_streak,
        "aggregated achievement stats"
    );

    stats
}

/// Weight of the most recent entry; later entries win ties on the same day
fn latest_weight(weights: &[WeightEntry]) -> Option<f64> {
    let mut latest: Option<&WeightEntry> = None;
    for entry in weights {
        match latest {
            Some(current) if entry.date < current.date => {}
            _ => latest = Some(entry),
        }
    }
    latest.map(|entry| entry.weight_kg)
}

/// Length of the consecutive run of logged days ending at `today`
///
/// A run whose last entry was yesterday still counts at its current
/// length (today's entry is pending, not missed). Any longer gap means
/// the streak is over.
fn current_streak(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let anchor = if days.contains(&today) {
        today
    } else {
        match today.pred_opt() {
            Some(yesterday) if days.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 0;
    let mut day = anchor;
    while days.contains(&day) {
        streak += 1;
        let Some(prev) = day.pred_opt() else { break };
        day = prev;
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn weight(y: i32, m: u32, d: u32, kg: f64) -> WeightEntry {
        WeightEntry {
            date: date(y, m, d),
            weight_kg: kg,
            note: None,
        }
    }

    #[test]
    fn test_empty_records_yield_zero_snapshot() {
        let stats = build_stats(&[], &[], &[], &[], &Profile::default(), date(2026, 3, 10));

        assert_eq!(stats.total_days_recorded, 0);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.total_weight_loss, 0.0);
        assert!(stats.current_weight.is_none());
        assert_eq!(stats.total_habits_completed, 0);
    }

    #[test]
    fn test_same_day_entries_count_as_one_day() {
        let weights = vec![
            weight(2026, 3, 10, 80.0),
            weight(2026, 3, 10, 79.8),
            weight(2026, 3, 11, 79.5),
        ];
        let stats = build_stats(&weights, &[], &[], &[], &Profile::default(), date(2026, 3, 11));

        assert_eq!(stats.total_days_recorded, 2);
    }

    #[test]
    fn test_streak_anchored_at_today() {
        let weights = vec![
            weight(2026, 3, 8, 80.0),
            weight(2026, 3, 9, 79.9),
            weight(2026, 3, 10, 79.8),
        ];
        let stats = build_stats(&weights, &[], &[], &[], &Profile::default(), date(2026, 3, 10));

        assert_eq!(stats.current_streak, 3);
    }

    #[test]
    fn test_streak_survives_pending_today() {
        // Last entry yesterday: streak holds at its current length
        let weights = vec![weight(2026, 3, 8, 80.0), weight(2026, 3, 9, 79.9)];
        let stats = build_stats(&weights, &[], &[], &[], &Profile::default(), date(2026, 3, 10));

        assert_eq!(stats.current_streak, 2);
    }

    #[test]
    fn test_streak_resets_after_gap() {
        let weights = vec![weight(2026, 3, 5, 80.0), weight(2026, 3, 6, 79.9)];
        let stats = build_stats(&weights, &[], &[], &[], &Profile::default(), date(2026, 3, 10));

        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn test_streak_ignores_days_before_gap() {
        let weights = vec![
            weight(2026, 3, 1, 81.0),
            weight(2026, 3, 2, 80.8),
            // gap on the 3rd
            weight(2026, 3, 4, 80.5),
            weight(2026, 3, 5, 80.3),
        ];
        let stats = build_stats(&weights, &[], &[], &[], &Profile::default(), date(2026, 3, 5));

        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.total_days_recorded, 4);
    }

    #[test]
    fn test_latest_weight_and_loss() {
        let weights = vec![
            weight(2026, 3, 10, 80.0),
            weight(2026, 3, 12, 78.5),
            weight(2026, 3, 11, 79.0),
        ];
        let profile = Profile {
            start_weight: Some(82.0),
            target_weight: Some(75.0),
        };
        let stats = build_stats(&weights, &[], &[], &[], &profile, date(2026, 3, 12));

        assert_eq!(stats.current_weight, Some(78.5));
        assert!((stats.total_weight_loss - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_latest_weight_same_day_later_entry_wins() {
        let weights = vec![weight(2026, 3, 10, 80.0), weight(2026, 3, 10, 79.6)];
        let stats = build_stats(&weights, &[], &[], &[], &Profile::default(), date(2026, 3, 10));

        assert_eq!(stats.current_weight, Some(79.6));
    }

    #[test]
    fn test_loss_is_zero_without_start_weight() {
        let weights = vec![weight(2026, 3, 10, 78.0)];
        let stats = build_stats(&weights, &[], &[], &[], &Profile::default(), date(2026, 3, 10));

        assert_eq!(stats.total_weight_loss, 0.0);
        assert_eq!(stats.current_weight, Some(78.0));
    }

    #[test]
    fn test_lifetime_counters() {
        let habits = vec![
            HabitCompletion {
                habit_id: "water".to_string(),
                date: date(2026, 3, 10),
            },
            HabitCompletion {
                habit_id: "walk".to_string(),
                date: date(2026, 3, 10),
            },
        ];
        let workouts = vec![WorkoutEntry {
            date: date(2026, 3, 10),
            kind: "running".to_string(),
            duration_min: 30,
        }];
        let meals = vec![MealEntry {
            date: date(2026, 3, 10),
            name: "breakfast".to_string(),
            calories: Some(420),
        }];
        let stats = build_stats(&[], &habits, &workouts, &meals, &Profile::default(), date(2026, 3, 10));

        assert_eq!(stats.total_habits_completed, 2);
        assert_eq!(stats.total_workouts, 1);
        assert_eq!(stats.total_meals, 1);
    }
}
