//! Health statistics: log records, aggregation, and achievements
//!
//! # Usage
//!
//! ```ignore
//! let stats = build_stats(&weights, &habits, &workouts, &meals, &profile, today);
//!
//! // What is unlocked right now
//! let ids = achievements::unlocked(&stats);
//!
//! // What to announce, ratcheting the stored baseline forward
//! let ledger = AchievementLedger::open(&path)?;
//! for achievement in ledger.record_seen(&stats)? {
//!     println!("{} {}", achievement.icon, achievement.name);
//! }
//! ```

pub mod achievements;
mod aggregate;
mod models;

pub use achievements::AchievementLedger;
pub use aggregate::build_stats;
pub use models::{
    AchievementStats, HabitCompletion, MealEntry, Profile, WeightEntry, WorkoutEntry,
};
