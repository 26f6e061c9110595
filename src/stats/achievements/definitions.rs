//! Achievement definitions and metadata
//!
//! All achievements are defined here with their unlock conditions.
//! Declaration order in [`ACHIEVEMENTS`] is the canonical order used for
//! listing and for "newly unlocked" results.

use crate::stats::models::AchievementStats;

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    // Streak achievements
    FirstRecord,
    WeekStreak,
    FortnightStreak,
    MonthStreak,
    QuarterStreak,
    TenDays,
    ThirtyDays,
    HundredDays,

    // Weight achievements
    FirstKgLost,
    ThreeKgLost,
    FiveKgLost,
    TenKgLost,
    HalfwayToGoal,
    GoalReached,

    // Habit achievements
    Habits10,
    Habits50,
    Habits100,

    // Workout achievements
    FirstWorkout,
    Workouts10,
    Workouts50,

    // Meal achievements
    FirstMeal,
    Meals50,
    Meals200,
}

impl AchievementId {
    /// Get the string key for ledger storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstRecord => "first_record",
            Self::WeekStreak => "week_streak",
            Self::FortnightStreak => "fortnight_streak",
            Self::MonthStreak => "month_streak",
            Self::QuarterStreak => "quarter_streak",
            Self::TenDays => "total_10_days",
            Self::ThirtyDays => "total_30_days",
            Self::HundredDays => "total_100_days",
            Self::FirstKgLost => "first_kg_lost",
            Self::ThreeKgLost => "three_kg_lost",
            Self::FiveKgLost => "five_kg_lost",
            Self::TenKgLost => "ten_kg_lost",
            Self::HalfwayToGoal => "halfway_to_goal",
            Self::GoalReached => "goal_reached",
            Self::Habits10 => "habits_10",
            Self::Habits50 => "habits_50",
            Self::Habits100 => "habits_100",
            Self::FirstWorkout => "first_workout",
            Self::Workouts10 => "workouts_10",
            Self::Workouts50 => "workouts_50",
            Self::FirstMeal => "first_meal",
            Self::Meals50 => "meals_50",
            Self::Meals200 => "meals_200",
        }
    }

    /// Parse from a stored string key
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first_record" => Some(Self::FirstRecord),
            "week_streak" => Some(Self::WeekStreak),
            "fortnight_streak" => Some(Self::FortnightStreak),
            "month_streak" => Some(Self::MonthStreak),
            "quarter_streak" => Some(Self::QuarterStreak),
            "total_10_days" => Some(Self::TenDays),
            "total_30_days" => Some(Self::ThirtyDays),
            "total_100_days" => Some(Self::HundredDays),
            "first_kg_lost" => Some(Self::FirstKgLost),
            "three_kg_lost" => Some(Self::ThreeKgLost),
            "five_kg_lost" => Some(Self::FiveKgLost),
            "ten_kg_lost" => Some(Self::TenKgLost),
            "halfway_to_goal" => Some(Self::HalfwayToGoal),
            "goal_reached" => Some(Self::GoalReached),
            "habits_10" => Some(Self::Habits10),
            "habits_50" => Some(Self::Habits50),
            "habits_100" => Some(Self::Habits100),
            "first_workout" => Some(Self::FirstWorkout),
            "workouts_10" => Some(Self::Workouts10),
            "workouts_50" => Some(Self::Workouts50),
            "first_meal" => Some(Self::FirstMeal),
            "meals_50" => Some(Self::Meals50),
            "meals_200" => Some(Self::Meals200),
            _ => None,
        }
    }
}

/// Achievement category for grouping in UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementCategory {
    Streak,
    Weight,
    Habit,
    Workout,
    Meal,
}

impl AchievementCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Streak => "Streaks",
            Self::Weight => "Weight",
            Self::Habit => "Habits",
            Self::Workout => "Workouts",
            Self::Meal => "Meals",
        }
    }
}

/// Unlock condition over the stats snapshot
///
/// Conditions are data rather than closures so that progress reporting
/// derives from the same threshold the unlock check uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    /// Distinct days with at least one weight entry
    DaysRecorded(u32),
    /// Consecutive-day logging streak
    Streak(u32),
    /// Cumulative kilograms lost since the starting weight
    WeightLost(f64),
    /// Lifetime habit completions
    HabitsCompleted(u32),
    /// Lifetime workout entries
    Workouts(u32),
    /// Lifetime meal entries
    Meals(u32),
    /// Current weight at or below the target weight
    GoalReached,
    /// At least half the distance from start to target covered
    HalfwayToGoal,
}

impl Condition {
    /// Check the condition against a snapshot
    ///
    /// Total for every well-typed snapshot: absent optional fields make
    /// goal conditions false, never an error.
    pub fn is_met(&self, stats: &AchievementStats) -> bool {
        match *self {
            Self::DaysRecorded(n) => stats.total_days_recorded >= n,
            Self::Streak(n) => stats.current_streak >= n,
            Self::WeightLost(kg) => stats.total_weight_loss >= kg,
            Self::HabitsCompleted(n) => stats.total_habits_completed >= n,
            Self::Workouts(n) => stats.total_workouts >= n,
            Self::Meals(n) => stats.total_meals >= n,
            Self::GoalReached => match (stats.current_weight, stats.target_weight) {
                (Some(current), Some(target)) => current <= target,
                _ => false,
            },
            Self::HalfwayToGoal => {
                match (stats.start_weight, stats.current_weight, stats.target_weight) {
                    (Some(start), Some(current), Some(target)) => {
                        let span = start - target;
                        span > 0.0 && start - current >= span / 2.0
                    }
                    _ => false,
                }
            }
        }
    }
}

/// Achievement definition with all metadata
#[derive(Debug, Clone)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: AchievementCategory,
    pub condition: Condition,
}

/// All achievement definitions, in canonical order
pub static ACHIEVEMENTS: &[Achievement] = &[
    // === STREAK ===
    Achievement {
        id: AchievementId::FirstRecord,
        name: "First Steps",
        description: "Log your first weight",
        icon: "🎯",
        category: AchievementCategory::Streak,
        condition: Condition::DaysRecorded(1),
    },
    Achievement {
        id: AchievementId::WeekStreak,
        name: "Week Warrior",
        description: "Log your weight 7 days in a row",
        icon: "📅",
        category: AchievementCategory::Streak,
        condition: Condition::Streak(7),
    },
    Achievement {
        id: AchievementId::FortnightStreak,
        name: "Two Weeks Strong",
        description: "Log your weight 14 days in a row",
        icon: "🔥",
        category: AchievementCategory::Streak,
        condition: Condition::Streak(14),
    },
    Achievement {
        id: AchievementId::MonthStreak,
        name: "Monthly Master",
        description: "Log your weight 30 days in a row",
        icon: "👑",
        category: AchievementCategory::Streak,
        condition: Condition::Streak(30),
    },
    Achievement {
        id: AchievementId::QuarterStreak,
        name: "Unstoppable",
        description: "Log your weight 90 days in a row",
        icon: "💎",
        category: AchievementCategory::Streak,
        condition: Condition::Streak(90),
    },
    Achievement {
        id: AchievementId::TenDays,
        name: "Regular",
        description: "Record your weight on 10 different days",
        icon: "📈",
        category: AchievementCategory::Streak,
        condition: Condition::DaysRecorded(10),
    },
    Achievement {
        id: AchievementId::ThirtyDays,
        name: "Committed",
        description: "Record your weight on 30 different days",
        icon: "💪",
        category: AchievementCategory::Streak,
        condition: Condition::DaysRecorded(30),
    },
    Achievement {
        id: AchievementId::HundredDays,
        name: "Century Club",
        description: "Record your weight on 100 different days",
        icon: "💯",
        category: AchievementCategory::Streak,
        condition: Condition::DaysRecorded(100),
    },
    // === WEIGHT ===
    Achievement {
        id: AchievementId::FirstKgLost,
        name: "First Kilo",
        description: "Lose your first kilogram",
        icon: "⚖️",
        category: AchievementCategory::Weight,
        condition: Condition::WeightLost(1.0),
    },
    Achievement {
        id: AchievementId::ThreeKgLost,
        name: "Making Progress",
        description: "Lose 3 kilograms",
        icon: "📉",
        category: AchievementCategory::Weight,
        condition: Condition::WeightLost(3.0),
    },
    Achievement {
        id: AchievementId::FiveKgLost,
        name: "High Five",
        description: "Lose 5 kilograms",
        icon: "🖐️",
        category: AchievementCategory::Weight,
        condition: Condition::WeightLost(5.0),
    },
    Achievement {
        id: AchievementId::TenKgLost,
        name: "Transformation",
        description: "Lose 10 kilograms",
        icon: "🦋",
        category: AchievementCategory::Weight,
        condition: Condition::WeightLost(10.0),
    },
    Achievement {
        id: AchievementId::HalfwayToGoal,
        name: "Halfway There",
        description: "Reach the halfway point to your goal weight",
        icon: "🧗",
        category: AchievementCategory::Weight,
        condition: Condition::HalfwayToGoal,
    },
    Achievement {
        id: AchievementId::GoalReached,
        name: "Goal!",
        description: "Reach your goal weight",
        icon: "🏆",
        category: AchievementCategory::Weight,
        condition: Condition::GoalReached,
    },
    // === HABIT ===
    Achievement {
        id: AchievementId::Habits10,
        name: "Habit Forming",
        description: "Complete 10 habits",
        icon: "✅",
        category: AchievementCategory::Habit,
        condition: Condition::HabitsCompleted(10),
    },
    Achievement {
        id: AchievementId::Habits50,
        name: "Creature of Habit",
        description: "Complete 50 habits",
        icon: "🌱",
        category: AchievementCategory::Habit,
        condition: Condition::HabitsCompleted(50),
    },
    Achievement {
        id: AchievementId::Habits100,
        name: "Second Nature",
        description: "Complete 100 habits",
        icon: "🌳",
        category: AchievementCategory::Habit,
        condition: Condition::HabitsCompleted(100),
    },
    // === WORKOUT ===
    Achievement {
        id: AchievementId::FirstWorkout,
        name: "Warm-Up",
        description: "Log your first workout",
        icon: "🏃",
        category: AchievementCategory::Workout,
        condition: Condition::Workouts(1),
    },
    Achievement {
        id: AchievementId::Workouts10,
        name: "Getting Fit",
        description: "Log 10 workouts",
        icon: "🏋️",
        category: AchievementCategory::Workout,
        condition: Condition::Workouts(10),
    },
    Achievement {
        id: AchievementId::Workouts50,
        name: "Athlete",
        description: "Log 50 workouts",
        icon: "🥇",
        category: AchievementCategory::Workout,
        condition: Condition::Workouts(50),
    },
    // === MEAL ===
    Achievement {
        id: AchievementId::FirstMeal,
        name: "Bon Appétit",
        description: "Log your first meal",
        icon: "🍽️",
        category: AchievementCategory::Meal,
        condition: Condition::Meals(1),
    },
    Achievement {
        id: AchievementId::Meals50,
        name: "Food Journal",
        description: "Log 50 meals",
        icon: "📔",
        category: AchievementCategory::Meal,
        condition: Condition::Meals(50),
    },
    Achievement {
        id: AchievementId::Meals200,
        name: "Mindful Eater",
        description: "Log 200 meals",
        icon: "🧘",
        category: AchievementCategory::Meal,
        condition: Condition::Meals(200),
    },
];

impl Achievement {
    /// The full catalog in canonical order
    pub fn all() -> &'static [Achievement] {
        ACHIEVEMENTS
    }

    /// Catalog entries of one category, in canonical order
    ///
    /// `None` means no filter and returns the full catalog.
    pub fn by_category(
        category: Option<AchievementCategory>,
    ) -> impl Iterator<Item = &'static Achievement> {
        ACHIEVEMENTS
            .iter()
            .filter(move |a| category.is_none_or(|c| a.category == c))
    }

    /// Look up a definition by its string key
    ///
    /// Unknown keys are a normal outcome and return `None`.
    pub fn find(key: &str) -> Option<&'static Achievement> {
        let id = AchievementId::from_str(key)?;
        ACHIEVEMENTS.iter().find(|a| a.id == id)
    }

    /// Get achievement definition by ID
    pub fn get(id: AchievementId) -> &'static Achievement {
        ACHIEVEMENTS
            .iter()
            .find(|a| a.id == id)
            .expect("All achievements should be defined")
    }

    /// Get total number of achievements
    pub fn total_count() -> usize {
        ACHIEVEMENTS.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<&str> = ACHIEVEMENTS.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(keys.len(), ACHIEVEMENTS.len());
    }

    #[test]
    fn test_id_string_roundtrip() {
        for achievement in ACHIEVEMENTS {
            let key = achievement.id.as_str();
            assert_eq!(
                AchievementId::from_str(key),
                Some(achievement.id),
                "key {} should parse back to its id",
                key
            );
        }
    }

    #[test]
    fn test_find_known_and_unknown_keys() {
        let found = Achievement::find("week_streak").expect("week_streak should exist");
        assert_eq!(found.id, AchievementId::WeekStreak);
        assert_eq!(found.condition, Condition::Streak(7));

        assert!(Achievement::find("no_such_key").is_none());
    }

    #[test]
    fn test_by_category_preserves_order() {
        let streaks: Vec<AchievementId> =
            Achievement::by_category(Some(AchievementCategory::Streak))
                .map(|a| a.id)
                .collect();
        assert_eq!(streaks.first(), Some(&AchievementId::FirstRecord));
        assert_eq!(streaks.len(), 8);

        let all: Vec<AchievementId> = Achievement::by_category(None).map(|a| a.id).collect();
        assert_eq!(all.len(), ACHIEVEMENTS.len());
    }

    #[test]
    fn test_every_category_is_populated() {
        for category in [
            AchievementCategory::Streak,
            AchievementCategory::Weight,
            AchievementCategory::Habit,
            AchievementCategory::Workout,
            AchievementCategory::Meal,
        ] {
            assert!(
                Achievement::by_category(Some(category)).count() > 0,
                "category {} should have achievements",
                category.label()
            );
        }
    }
}
