use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::signal::Signal;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Streak,
    Pr,
    Milestone,
    Strength,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Rarity::Common => "#9CA3AF",
            Rarity::Rare => "#3B82F6",
            Rarity::Epic => "#A855F7",
            Rarity::Legendary => "#FFD700",
        }
    }
}

/// A static catalog entry. Unlock state lives elsewhere.
#[derive(Debug)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub rarity: Rarity,
}

pub const ACHIEVEMENTS: [Achievement; 26] = [
    Achievement {
        id: "first_workout",
        name: "First Steps",
        icon: "👟",
        description: "Complete your first workout",
        category: Category::Milestone,
        rarity: Rarity::Common,
    },
    Achievement {
        id: "streak_3",
        name: "Building Momentum",
        icon: "🔥",
        description: "Achieve a 3-day streak",
        category: Category::Streak,
        rarity: Rarity::Common,
    },
    Achievement {
        id: "streak_7",
        name: "On Fire",
        icon: "🔥",
        description: "Achieve a 7-day streak",
        category: Category::Streak,
        rarity: Rarity::Rare,
    },
    Achievement {
        id: "streak_14",
        name: "Unstoppable",
        icon: "💥",
        description: "Achieve a 14-day streak",
        category: Category::Streak,
        rarity: Rarity::Epic,
    },
    Achievement {
        id: "streak_30",
        name: "Iron Will",
        icon: "⚡",
        description: "Achieve a 30-day streak",
        category: Category::Streak,
        rarity: Rarity::Legendary,
    },
    Achievement {
        id: "pr_first",
        name: "PR Hunter",
        icon: "🏆",
        description: "Hit your first personal record",
        category: Category::Pr,
        rarity: Rarity::Common,
    },
    Achievement {
        id: "pr_5",
        name: "Record Setter",
        icon: "📈",
        description: "Hit 5 personal records",
        category: Category::Pr,
        rarity: Rarity::Rare,
    },
    Achievement {
        id: "pr_10",
        name: "Record Breaker",
        icon: "💎",
        description: "Hit 10 personal records",
        category: Category::Pr,
        rarity: Rarity::Epic,
    },
    Achievement {
        id: "pr_25",
        name: "PR Machine",
        icon: "🤖",
        description: "Hit 25 personal records",
        category: Category::Pr,
        rarity: Rarity::Legendary,
    },
    Achievement {
        id: "bench_135",
        name: "1 Plate Bench",
        icon: "🛡️",
        description: "Bench press 135 lbs",
        category: Category::Strength,
        rarity: Rarity::Common,
    },
    Achievement {
        id: "bench_225",
        name: "2 Plate Club",
        icon: "⚔️",
        description: "Bench press 225 lbs",
        category: Category::Strength,
        rarity: Rarity::Rare,
    },
    Achievement {
        id: "bench_315",
        name: "3 Plate Bench",
        icon: "🗡️",
        description: "Bench press 315 lbs",
        category: Category::Strength,
        rarity: Rarity::Epic,
    },
    Achievement {
        id: "squat_225",
        name: "2 Plate Squat",
        icon: "🦵",
        description: "Squat 225 lbs",
        category: Category::Strength,
        rarity: Rarity::Common,
    },
    Achievement {
        id: "squat_315",
        name: "3 Plate Club",
        icon: "🔱",
        description: "Squat 315 lbs",
        category: Category::Strength,
        rarity: Rarity::Rare,
    },
    Achievement {
        id: "squat_405",
        name: "4 Plate Squat",
        icon: "👑",
        description: "Squat 405 lbs",
        category: Category::Strength,
        rarity: Rarity::Epic,
    },
    Achievement {
        id: "deadlift_315",
        name: "3 Plate Pull",
        icon: "🏋️",
        description: "Deadlift 315 lbs",
        category: Category::Strength,
        rarity: Rarity::Common,
    },
    Achievement {
        id: "deadlift_405",
        name: "4 Plate Club",
        icon: "💀",
        description: "Deadlift 405 lbs",
        category: Category::Strength,
        rarity: Rarity::Rare,
    },
    Achievement {
        id: "deadlift_495",
        name: "5 Plate Pull",
        icon: "🐉",
        description: "Deadlift 495 lbs",
        category: Category::Strength,
        rarity: Rarity::Epic,
    },
    Achievement {
        id: "signal_1200",
        name: "Operator",
        icon: "📶",
        description: "Reach 1200 Signal",
        category: Category::Milestone,
        rarity: Rarity::Common,
    },
    Achievement {
        id: "signal_1500",
        name: "Vanguard",
        icon: "🚀",
        description: "Reach 1500 Signal",
        category: Category::Milestone,
        rarity: Rarity::Rare,
    },
    Achievement {
        id: "signal_2000",
        name: "Elite Status",
        icon: "💫",
        description: "Reach 2000 Signal",
        category: Category::Milestone,
        rarity: Rarity::Epic,
    },
    Achievement {
        id: "signal_2500",
        name: "Apex Predator",
        icon: "🦅",
        description: "Reach 2500 Signal",
        category: Category::Milestone,
        rarity: Rarity::Legendary,
    },
    Achievement {
        id: "workouts_10",
        name: "Getting Started",
        icon: "🎯",
        description: "Complete 10 workouts",
        category: Category::Milestone,
        rarity: Rarity::Common,
    },
    Achievement {
        id: "workouts_25",
        name: "Dedicated",
        icon: "💪",
        description: "Complete 25 workouts",
        category: Category::Milestone,
        rarity: Rarity::Rare,
    },
    Achievement {
        id: "workouts_50",
        name: "Gym Rat",
        icon: "🐀",
        description: "Complete 50 workouts",
        category: Category::Milestone,
        rarity: Rarity::Epic,
    },
    Achievement {
        id: "workouts_100",
        name: "Century",
        icon: "💯",
        description: "Complete 100 workouts",
        category: Category::Milestone,
        rarity: Rarity::Legendary,
    },
];

#[must_use]
pub fn find(id: &str) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// An unlocked achievement, created once and never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unlocked {
    pub id: String,
    pub unlocked_at: NaiveDate,
}

/// Cumulative stats the achievement conditions are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub workout_count: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_prs: u32,
    pub bench_max: f64,
    pub squat_max: f64,
    pub deadlift_max: f64,
    pub signal: Signal,
}

/// The ids whose condition is now satisfied and which are not yet unlocked.
///
/// Pure and idempotent: feeding the returned ids back into `unlocked` makes
/// a second call with the same stats return nothing.
#[must_use]
pub fn check(unlocked: &BTreeSet<String>, stats: &Stats) -> Vec<&'static str> {
    let mut newly_unlocked = Vec::new();
    let signal = i32::from(stats.signal);

    let mut check = |id: &'static str, condition: bool| {
        if condition && !unlocked.contains(id) {
            newly_unlocked.push(id);
        }
    };

    check("first_workout", stats.workout_count >= 1);
    check("workouts_10", stats.workout_count >= 10);
    check("workouts_25", stats.workout_count >= 25);
    check("workouts_50", stats.workout_count >= 50);
    check("workouts_100", stats.workout_count >= 100);

    // Streak conditions use the longest streak, so a broken streak cannot
    // re-lock progress.
    check("streak_3", stats.longest_streak >= 3);
    check("streak_7", stats.longest_streak >= 7);
    check("streak_14", stats.longest_streak >= 14);
    check("streak_30", stats.longest_streak >= 30);

    check("pr_first", stats.total_prs >= 1);
    check("pr_5", stats.total_prs >= 5);
    check("pr_10", stats.total_prs >= 10);
    check("pr_25", stats.total_prs >= 25);

    check("bench_135", stats.bench_max >= 135.0);
    check("bench_225", stats.bench_max >= 225.0);
    check("bench_315", stats.bench_max >= 315.0);

    check("squat_225", stats.squat_max >= 225.0);
    check("squat_315", stats.squat_max >= 315.0);
    check("squat_405", stats.squat_max >= 405.0);

    check("deadlift_315", stats.deadlift_max >= 315.0);
    check("deadlift_405", stats.deadlift_max >= 405.0);
    check("deadlift_495", stats.deadlift_max >= 495.0);

    check("signal_1200", signal >= 1200);
    check("signal_1500", signal >= 1500);
    check("signal_2000", signal >= 2000);
    check("signal_2500", signal >= 2500);

    newly_unlocked
}
