use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use derive_more::Deref;
use uuid::Uuid;

use crate::strength::estimate_1rm;

/// One completed set. Corrections create a new set instead of mutating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoggedSet {
    pub weight: f64,
    pub reps: u32,
}

/// All sets logged for one exercise in one session, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseRecord {
    pub name: String,
    pub sets: Vec<LoggedSet>,
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Immutable history entry created once when a session ends.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    pub id: WorkoutID,
    pub date: NaiveDate,
    pub title: String,
    pub duration_minutes: u32,
    pub exercise_count: u32,
    pub total_sets: u32,
    pub prs_hit: BTreeSet<String>,
    pub signal_gain: i32,
}

/// The best estimated one-rep max recorded for an exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalRecord {
    pub weight: f64,
    pub reps: u32,
    pub estimated_1rm: f64,
    pub date: NaiveDate,
}

/// What logging a set tells the caller. Cross-updating any stored big-three
/// best is the caller's decision, via [`Lift::classify`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetOutcome {
    pub is_pr: bool,
    pub estimated_1rm: f64,
}

/// Personal records per exercise name.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordStore(BTreeMap<String, PersonalRecord>);

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, exercise_name: &str) -> Option<&PersonalRecord> {
        self.0.get(exercise_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PersonalRecord)> {
        self.0.iter()
    }

    /// Record a set, updating the stored record if its estimated one-rep max
    /// strictly exceeds the previous one. Ties are not PRs. The first valid
    /// set for an exercise is always a PR.
    pub fn log_set(&mut self, exercise_name: &str, set: LoggedSet, date: NaiveDate) -> SetOutcome {
        let estimated_1rm = estimate_1rm(set.weight, set.reps);

        let is_pr = estimated_1rm > 0.0
            && self
                .0
                .get(exercise_name)
                .is_none_or(|record| estimated_1rm > record.estimated_1rm);

        if is_pr {
            self.0.insert(
                exercise_name.to_string(),
                PersonalRecord {
                    weight: set.weight,
                    reps: set.reps,
                    estimated_1rm,
                    date,
                },
            );
        }

        SetOutcome {
            is_pr,
            estimated_1rm,
        }
    }
}

/// The big three. Accessory variants (split squats, Romanian deadlifts, ...)
/// deliberately do not classify.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Lift {
    Squat,
    Bench,
    Deadlift,
}

impl Lift {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Lift::Squat => "squat",
            Lift::Bench => "bench",
            Lift::Deadlift => "deadlift",
        }
    }

    #[must_use]
    pub fn classify(exercise_name: &str) -> Option<Lift> {
        let name = exercise_name.to_lowercase();

        if name.contains("squat")
            && !name.contains("split")
            && !name.contains("bulgarian")
            && !name.contains("hack")
        {
            return Some(Lift::Squat);
        }
        if (name.contains("bench") && name.contains("press")) || name == "bench press" || name == "bench"
        {
            return Some(Lift::Bench);
        }
        if name.contains("deadlift")
            && !name.contains("romanian")
            && !name.contains("rdl")
            && !name.contains("stiff")
        {
            return Some(Lift::Deadlift);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn test_workout_id_nil() {
        assert!(WorkoutID::nil().is_nil());
        assert_eq!(WorkoutID::nil(), WorkoutID::default());
    }

    #[test]
    fn test_workout_id_random_is_unique() {
        assert_ne!(WorkoutID::random(), WorkoutID::random());
    }

    #[test]
    fn test_first_set_is_a_pr() {
        let mut records = RecordStore::new();

        let outcome = records.log_set(
            "Bench Press",
            LoggedSet {
                weight: 185.0,
                reps: 5,
            },
            date(1),
        );

        assert!(outcome.is_pr);
        assert_eq!(outcome.estimated_1rm, 208.0);
        assert_eq!(records.get("Bench Press").unwrap().estimated_1rm, 208.0);
    }

    #[test]
    fn test_higher_estimate_beats_stored_record() {
        let mut records = RecordStore::new();
        records.log_set(
            "Bench Press",
            LoggedSet {
                weight: 185.0,
                reps: 5,
            },
            date(1),
        );

        let outcome = records.log_set(
            "Bench Press",
            LoggedSet {
                weight: 225.0,
                reps: 3,
            },
            date(8),
        );

        assert!(outcome.is_pr);
        let record = records.get("Bench Press").unwrap();
        assert_eq!(record.weight, 225.0);
        assert_eq!(record.reps, 3);
        assert_eq!(record.date, date(8));
    }

    #[test]
    fn test_tie_is_not_a_pr() {
        let mut records = RecordStore::new();
        let first = records.log_set(
            "Bench Press",
            LoggedSet {
                weight: 185.0,
                reps: 5,
            },
            date(1),
        );

        let second = records.log_set(
            "Bench Press",
            LoggedSet {
                weight: 185.0,
                reps: 5,
            },
            date(8),
        );

        assert_eq!(second.estimated_1rm, first.estimated_1rm);
        assert!(!second.is_pr);
        // The stored record keeps the original date.
        assert_eq!(records.get("Bench Press").unwrap().date, date(1));
    }

    #[test]
    fn test_zero_estimate_is_never_a_pr() {
        let mut records = RecordStore::new();

        let outcome = records.log_set(
            "Bench Press",
            LoggedSet {
                weight: 185.0,
                reps: 0,
            },
            date(1),
        );

        assert!(!outcome.is_pr);
        assert_eq!(records.get("Bench Press"), None);
    }

    #[test]
    fn test_records_are_per_exercise() {
        let mut records = RecordStore::new();
        records.log_set(
            "Bench Press",
            LoggedSet {
                weight: 225.0,
                reps: 1,
            },
            date(1),
        );

        let outcome = records.log_set(
            "Squat",
            LoggedSet {
                weight: 135.0,
                reps: 1,
            },
            date(1),
        );

        assert!(outcome.is_pr);
        assert_eq!(records.iter().count(), 2);
    }

    #[rstest]
    #[case("Squat", Some(Lift::Squat))]
    #[case("Back Squat", Some(Lift::Squat))]
    #[case("front squat", Some(Lift::Squat))]
    #[case("Bulgarian Split Squat", None)]
    #[case("Hack Squat", None)]
    #[case("Bench Press", Some(Lift::Bench))]
    #[case("Incline Bench Press", Some(Lift::Bench))]
    #[case("bench", Some(Lift::Bench))]
    #[case("Deadlift", Some(Lift::Deadlift))]
    #[case("Romanian Deadlift", None)]
    #[case("Stiff Leg Deadlift", None)]
    #[case("Lat Pulldown", None)]
    fn test_lift_classify(#[case] name: &str, #[case] expected: Option<Lift>) {
        assert_eq!(Lift::classify(name), expected);
    }
}
