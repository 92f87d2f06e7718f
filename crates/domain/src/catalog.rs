use std::collections::BTreeMap;

use crate::muscle::Muscle;

/// How much of an exercise's volume counts toward each muscle, 0 to 1.
pub type Contributions = BTreeMap<Muscle, f64>;

struct Entry {
    name: &'static str,
    muscles: &'static [(Muscle, f64)],
}

const ENTRIES: [Entry; 61] = [
    // Chest
    Entry {
        name: "Bench Press",
        muscles: &[
            (Muscle::Chest, 1.0),
            (Muscle::Triceps, 0.6),
            (Muscle::FrontDelts, 0.4),
        ],
    },
    Entry {
        name: "Incline Bench Press",
        muscles: &[
            (Muscle::Chest, 0.9),
            (Muscle::FrontDelts, 0.6),
            (Muscle::Triceps, 0.5),
        ],
    },
    Entry {
        name: "Decline Bench Press",
        muscles: &[
            (Muscle::Chest, 1.0),
            (Muscle::Triceps, 0.5),
            (Muscle::FrontDelts, 0.3),
        ],
    },
    Entry {
        name: "Dumbbell Bench Press",
        muscles: &[
            (Muscle::Chest, 1.0),
            (Muscle::Triceps, 0.5),
            (Muscle::FrontDelts, 0.4),
        ],
    },
    Entry {
        name: "Incline Dumbbell Press",
        muscles: &[
            (Muscle::Chest, 0.9),
            (Muscle::FrontDelts, 0.6),
            (Muscle::Triceps, 0.5),
        ],
    },
    Entry {
        name: "Dumbbell Fly",
        muscles: &[(Muscle::Chest, 1.0), (Muscle::FrontDelts, 0.3)],
    },
    Entry {
        name: "Cable Fly",
        muscles: &[(Muscle::Chest, 1.0), (Muscle::FrontDelts, 0.2)],
    },
    Entry {
        name: "Push Ups",
        muscles: &[
            (Muscle::Chest, 0.9),
            (Muscle::Triceps, 0.6),
            (Muscle::FrontDelts, 0.4),
        ],
    },
    Entry {
        name: "Chest Dips",
        muscles: &[
            (Muscle::Chest, 0.9),
            (Muscle::Triceps, 0.7),
            (Muscle::FrontDelts, 0.4),
        ],
    },
    // Back
    Entry {
        name: "Deadlift",
        muscles: &[
            (Muscle::LowerBack, 1.0),
            (Muscle::Glutes, 0.8),
            (Muscle::Hamstrings, 0.8),
            (Muscle::Traps, 0.5),
            (Muscle::Lats, 0.4),
        ],
    },
    Entry {
        name: "Barbell Row",
        muscles: &[
            (Muscle::Lats, 1.0),
            (Muscle::UpperBack, 0.8),
            (Muscle::Biceps, 0.6),
            (Muscle::RearDelts, 0.5),
        ],
    },
    Entry {
        name: "Dumbbell Row",
        muscles: &[
            (Muscle::Lats, 1.0),
            (Muscle::UpperBack, 0.7),
            (Muscle::Biceps, 0.5),
            (Muscle::RearDelts, 0.4),
        ],
    },
    Entry {
        name: "Lat Pulldown",
        muscles: &[
            (Muscle::Lats, 1.0),
            (Muscle::Biceps, 0.6),
            (Muscle::UpperBack, 0.5),
            (Muscle::RearDelts, 0.3),
        ],
    },
    Entry {
        name: "Pull Ups",
        muscles: &[
            (Muscle::Lats, 1.0),
            (Muscle::Biceps, 0.7),
            (Muscle::UpperBack, 0.6),
            (Muscle::RearDelts, 0.3),
        ],
    },
    Entry {
        name: "Chin Ups",
        muscles: &[
            (Muscle::Lats, 0.9),
            (Muscle::Biceps, 0.9),
            (Muscle::UpperBack, 0.5),
        ],
    },
    Entry {
        name: "Seated Cable Row",
        muscles: &[
            (Muscle::Lats, 0.9),
            (Muscle::UpperBack, 0.8),
            (Muscle::Biceps, 0.5),
            (Muscle::RearDelts, 0.4),
        ],
    },
    Entry {
        name: "T-Bar Row",
        muscles: &[
            (Muscle::Lats, 1.0),
            (Muscle::UpperBack, 0.8),
            (Muscle::Biceps, 0.5),
        ],
    },
    Entry {
        name: "Face Pulls",
        muscles: &[
            (Muscle::RearDelts, 1.0),
            (Muscle::UpperBack, 0.6),
            (Muscle::Traps, 0.4),
        ],
    },
    // Shoulders
    Entry {
        name: "Overhead Press",
        muscles: &[
            (Muscle::FrontDelts, 1.0),
            (Muscle::SideDelts, 0.6),
            (Muscle::Triceps, 0.5),
        ],
    },
    Entry {
        name: "Military Press",
        muscles: &[
            (Muscle::FrontDelts, 1.0),
            (Muscle::SideDelts, 0.6),
            (Muscle::Triceps, 0.5),
        ],
    },
    Entry {
        name: "Dumbbell Shoulder Press",
        muscles: &[
            (Muscle::FrontDelts, 1.0),
            (Muscle::SideDelts, 0.7),
            (Muscle::Triceps, 0.5),
        ],
    },
    Entry {
        name: "Arnold Press",
        muscles: &[
            (Muscle::FrontDelts, 0.9),
            (Muscle::SideDelts, 0.8),
            (Muscle::Triceps, 0.4),
        ],
    },
    Entry {
        name: "Lateral Raise",
        muscles: &[(Muscle::SideDelts, 1.0), (Muscle::Traps, 0.3)],
    },
    Entry {
        name: "Front Raise",
        muscles: &[(Muscle::FrontDelts, 1.0)],
    },
    Entry {
        name: "Rear Delt Fly",
        muscles: &[(Muscle::RearDelts, 1.0), (Muscle::UpperBack, 0.3)],
    },
    Entry {
        name: "Upright Row",
        muscles: &[
            (Muscle::SideDelts, 0.8),
            (Muscle::Traps, 0.8),
            (Muscle::FrontDelts, 0.4),
        ],
    },
    // Arms
    Entry {
        name: "Barbell Curl",
        muscles: &[(Muscle::Biceps, 1.0), (Muscle::Forearms, 0.4)],
    },
    Entry {
        name: "Dumbbell Curl",
        muscles: &[(Muscle::Biceps, 1.0), (Muscle::Forearms, 0.3)],
    },
    Entry {
        name: "Hammer Curl",
        muscles: &[(Muscle::Biceps, 0.9), (Muscle::Forearms, 0.6)],
    },
    Entry {
        name: "Preacher Curl",
        muscles: &[(Muscle::Biceps, 1.0)],
    },
    Entry {
        name: "Concentration Curl",
        muscles: &[(Muscle::Biceps, 1.0)],
    },
    Entry {
        name: "Cable Curl",
        muscles: &[(Muscle::Biceps, 1.0), (Muscle::Forearms, 0.3)],
    },
    Entry {
        name: "Tricep Pushdown",
        muscles: &[(Muscle::Triceps, 1.0)],
    },
    Entry {
        name: "Skull Crushers",
        muscles: &[(Muscle::Triceps, 1.0)],
    },
    Entry {
        name: "Overhead Tricep Extension",
        muscles: &[(Muscle::Triceps, 1.0)],
    },
    Entry {
        name: "Tricep Dips",
        muscles: &[(Muscle::Triceps, 1.0), (Muscle::Chest, 0.3)],
    },
    Entry {
        name: "Close Grip Bench",
        muscles: &[(Muscle::Triceps, 0.9), (Muscle::Chest, 0.6)],
    },
    Entry {
        name: "Diamond Push Ups",
        muscles: &[(Muscle::Triceps, 0.9), (Muscle::Chest, 0.5)],
    },
    // Legs
    Entry {
        name: "Squat",
        muscles: &[
            (Muscle::Quads, 1.0),
            (Muscle::Glutes, 0.8),
            (Muscle::Hamstrings, 0.5),
            (Muscle::LowerBack, 0.4),
        ],
    },
    Entry {
        name: "Back Squat",
        muscles: &[
            (Muscle::Quads, 1.0),
            (Muscle::Glutes, 0.8),
            (Muscle::Hamstrings, 0.5),
            (Muscle::LowerBack, 0.4),
        ],
    },
    Entry {
        name: "Front Squat",
        muscles: &[
            (Muscle::Quads, 1.0),
            (Muscle::Glutes, 0.6),
            (Muscle::Abs, 0.5),
        ],
    },
    Entry {
        name: "Leg Press",
        muscles: &[
            (Muscle::Quads, 1.0),
            (Muscle::Glutes, 0.6),
            (Muscle::Hamstrings, 0.4),
        ],
    },
    Entry {
        name: "Hack Squat",
        muscles: &[(Muscle::Quads, 1.0), (Muscle::Glutes, 0.5)],
    },
    Entry {
        name: "Lunges",
        muscles: &[
            (Muscle::Quads, 0.9),
            (Muscle::Glutes, 0.8),
            (Muscle::Hamstrings, 0.5),
        ],
    },
    Entry {
        name: "Bulgarian Split Squat",
        muscles: &[
            (Muscle::Quads, 1.0),
            (Muscle::Glutes, 0.9),
            (Muscle::Hamstrings, 0.4),
        ],
    },
    Entry {
        name: "Leg Extension",
        muscles: &[(Muscle::Quads, 1.0)],
    },
    Entry {
        name: "Leg Curl",
        muscles: &[(Muscle::Hamstrings, 1.0)],
    },
    Entry {
        name: "Romanian Deadlift",
        muscles: &[
            (Muscle::Hamstrings, 1.0),
            (Muscle::Glutes, 0.9),
            (Muscle::LowerBack, 0.6),
        ],
    },
    Entry {
        name: "Stiff Leg Deadlift",
        muscles: &[
            (Muscle::Hamstrings, 1.0),
            (Muscle::Glutes, 0.8),
            (Muscle::LowerBack, 0.5),
        ],
    },
    Entry {
        name: "Hip Thrust",
        muscles: &[(Muscle::Glutes, 1.0), (Muscle::Hamstrings, 0.5)],
    },
    Entry {
        name: "Glute Bridge",
        muscles: &[(Muscle::Glutes, 1.0), (Muscle::Hamstrings, 0.4)],
    },
    Entry {
        name: "Calf Raise",
        muscles: &[(Muscle::Calves, 1.0)],
    },
    Entry {
        name: "Seated Calf Raise",
        muscles: &[(Muscle::Calves, 1.0)],
    },
    // Core
    Entry {
        name: "Plank",
        muscles: &[(Muscle::Abs, 0.9), (Muscle::Obliques, 0.5)],
    },
    Entry {
        name: "Crunches",
        muscles: &[(Muscle::Abs, 1.0)],
    },
    Entry {
        name: "Sit Ups",
        muscles: &[(Muscle::Abs, 0.9)],
    },
    Entry {
        name: "Leg Raises",
        muscles: &[(Muscle::Abs, 1.0)],
    },
    Entry {
        name: "Hanging Leg Raises",
        muscles: &[(Muscle::Abs, 1.0), (Muscle::Forearms, 0.3)],
    },
    Entry {
        name: "Russian Twists",
        muscles: &[(Muscle::Obliques, 1.0), (Muscle::Abs, 0.5)],
    },
    Entry {
        name: "Cable Woodchops",
        muscles: &[(Muscle::Obliques, 1.0), (Muscle::Abs, 0.5)],
    },
    Entry {
        name: "Ab Wheel Rollout",
        muscles: &[(Muscle::Abs, 1.0), (Muscle::Lats, 0.3)],
    },
];

// Last-resort guesses keyed on name fragments, checked in order.
const KEYWORD_GUESSES: [(&[&str], &[(Muscle, f64)]); 6] = [
    (
        &["bench", "chest", "push"],
        &[
            (Muscle::Chest, 0.8),
            (Muscle::Triceps, 0.5),
            (Muscle::FrontDelts, 0.4),
        ],
    ),
    (
        &["row", "pull", "back"],
        &[
            (Muscle::Lats, 0.8),
            (Muscle::Biceps, 0.5),
            (Muscle::UpperBack, 0.5),
        ],
    ),
    (
        &["squat", "leg", "quad"],
        &[(Muscle::Quads, 0.8), (Muscle::Glutes, 0.5)],
    ),
    (&["curl", "bicep"], &[(Muscle::Biceps, 1.0)]),
    (&["tricep", "pushdown", "skull"], &[(Muscle::Triceps, 1.0)]),
    (
        &["shoulder", "press", "delt"],
        &[(Muscle::FrontDelts, 0.7), (Muscle::SideDelts, 0.6)],
    ),
];

/// Muscle contributions for an exercise name.
///
/// Lookup is tolerant, in decreasing strictness: exact name, then
/// case-insensitive, then substring in either direction, then keyword
/// guesses. A name matching nothing contributes no volume anywhere; unknown
/// exercises are not an error.
#[must_use]
pub fn contributions(exercise_name: &str) -> Contributions {
    if let Some(entry) = ENTRIES.iter().find(|e| e.name == exercise_name) {
        return collect(entry.muscles);
    }

    let lower = exercise_name.to_lowercase();

    if let Some(entry) = ENTRIES.iter().find(|e| e.name.to_lowercase() == lower) {
        return collect(entry.muscles);
    }

    if let Some(entry) = ENTRIES.iter().find(|e| {
        let name = e.name.to_lowercase();
        lower.contains(&name) || name.contains(&lower)
    }) {
        return collect(entry.muscles);
    }

    for (keywords, muscles) in &KEYWORD_GUESSES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return collect(muscles);
        }
    }

    Contributions::new()
}

fn collect(muscles: &[(Muscle, f64)]) -> Contributions {
    muscles.iter().copied().collect()
}
