//! Data models for health tracking statistics
//!
//! Log record types as produced by the sync layer, plus the aggregated
//! snapshot the achievement evaluator consumes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A weight measurement logged for a calendar day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightEntry {
    pub date: NaiveDate,
    /// Body weight in kilograms
    pub weight_kg: f64,
    pub note: Option<String>,
}

/// A habit marked as completed on a given day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitCompletion {
    pub habit_id: String,
    pub date: NaiveDate,
}

/// A logged workout session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutEntry {
    pub date: NaiveDate,
    pub kind: String, // "running", "strength", etc.
    pub duration_min: u32,
}

/// A logged meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealEntry {
    pub date: NaiveDate,
    pub name: String,
    pub calories: Option<u32>,
}

/// Profile values that weight-goal achievements depend on
///
/// All fields are optional: a user who never set a goal simply keeps the
/// dependent achievements locked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Weight in kilograms when tracking started
    pub start_weight: Option<f64>,
    /// Goal weight in kilograms
    pub target_weight: Option<f64>,
}

/// Aggregated snapshot consumed by the achievement evaluator
///
/// Built fresh per evaluation (see [`build_stats`](super::build_stats));
/// the evaluator never mutates it and reads no other state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementStats {
    /// Distinct calendar days with at least one weight entry
    pub total_days_recorded: u32,
    /// Consecutive days up to "today" with a weight entry
    pub current_streak: u32,
    /// start_weight - current_weight; negative means weight gain
    pub total_weight_loss: f64,
    pub start_weight: Option<f64>,
    pub current_weight: Option<f64>,
    pub target_weight: Option<f64>,
    /// Lifetime count of habit completions
    pub total_habits_completed: u32,
    /// Lifetime count of workout entries
    pub total_workouts: u32,
    /// Lifetime count of meal entries
    pub total_meals: u32,
}
