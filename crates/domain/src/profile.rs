use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{
    achievement::{self, Stats, Unlocked},
    signal::{Difficulty, LiftProfile, Performance, Signal},
    streak::StreakState,
    volume::{self, MuscleProgress},
    workout::{ExerciseRecord, Lift, LoggedSet, RecordStore, SetOutcome, WorkoutID, WorkoutRecord},
};

/// Best estimated one-rep maxes for the big three, in lbs.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Big3 {
    pub squat: f64,
    pub bench: f64,
    pub deadlift: f64,
}

impl Big3 {
    #[must_use]
    pub fn get(&self, lift: Lift) -> f64 {
        match lift {
            Lift::Squat => self.squat,
            Lift::Bench => self.bench,
            Lift::Deadlift => self.deadlift,
        }
    }

    /// Update a best, keeping the higher value.
    pub fn raise(&mut self, lift: Lift, estimated_1rm: f64) {
        let best = match lift {
            Lift::Squat => &mut self.squat,
            Lift::Bench => &mut self.bench,
            Lift::Deadlift => &mut self.deadlift,
        };
        *best = best.max(estimated_1rm);
    }
}

/// A finished session as handed over by the session controller.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedSession {
    pub title: String,
    pub duration_minutes: u32,
    pub exercises: Vec<ExerciseRecord>,
    pub prs_hit: BTreeSet<String>,
    pub difficulty: Difficulty,
}

/// What a completed workout changed, for the session summary screen.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSummary {
    pub record: WorkoutRecord,
    pub signal_before: Signal,
    pub signal_after: Signal,
    pub newly_unlocked: Vec<&'static str>,
}

/// The athlete's entire scoring state.
///
/// All transitions take the previous state and explicit inputs; nothing here
/// reads ambient state or talks to storage. The caller owns persistence and
/// must apply concurrent workouts one at a time, in event order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Profile {
    pub signal: Signal,
    pub muscle_progress: MuscleProgress,
    pub records: RecordStore,
    pub big3: Big3,
    pub streak: StreakState,
    pub history: Vec<WorkoutRecord>,
    pub total_prs: u32,
    pub unlocked: Vec<Unlocked>,
}

impl Profile {
    /// A fresh profile rated from the onboarding lift numbers.
    #[must_use]
    pub fn new(lift_profile: &LiftProfile) -> Self {
        Self {
            signal: Signal::initial(lift_profile),
            big3: Big3 {
                squat: lift_profile.squat,
                bench: lift_profile.bench,
                deadlift: lift_profile.deadlift,
            },
            ..Self::default()
        }
    }

    /// Re-establish invariants on a profile loaded from storage: the rating
    /// floor, progress bounds and the longest-streak maximum.
    pub fn sanitize(&mut self) {
        self.signal = Signal::new(self.signal.into());
        for level in self.muscle_progress.values_mut() {
            *level = level.clamp(0.0, 100.0);
        }
        self.streak.longest = self.streak.longest.max(self.streak.current);
    }

    /// Log a set during an active session, cross-updating the big-three
    /// bests on a matching PR.
    pub fn log_set(&mut self, exercise_name: &str, set: LoggedSet, date: NaiveDate) -> SetOutcome {
        let outcome = self.records.log_set(exercise_name, set, date);

        if outcome.is_pr {
            if let Some(lift) = Lift::classify(exercise_name) {
                self.big3.raise(lift, outcome.estimated_1rm);
            }
        }

        outcome
    }

    /// Apply a completed workout: rating, muscle progress, streak, PR total,
    /// achievements and history, in that order.
    pub fn complete_workout(
        &mut self,
        session: &CompletedSession,
        today: NaiveDate,
    ) -> WorkoutSummary {
        #[allow(clippy::cast_possible_truncation)]
        let prs_hit = session.prs_hit.len() as u32;

        let signal_before = self.signal;
        self.signal = self.signal.after_workout(&Performance {
            completed: true,
            prs_hit,
            difficulty: session.difficulty,
        });
        let signal_gain = i32::from(self.signal) - i32::from(signal_before);

        self.muscle_progress = volume::apply_session(&self.muscle_progress, &session.exercises);

        self.streak.record_workout(today);
        self.total_prs += prs_hit;

        #[allow(clippy::cast_possible_truncation)]
        let record = WorkoutRecord {
            id: WorkoutID::random(),
            date: today,
            title: session.title.clone(),
            duration_minutes: session.duration_minutes,
            exercise_count: session.exercises.len() as u32,
            total_sets: session.exercises.iter().map(|e| e.sets.len()).sum::<usize>() as u32,
            prs_hit: session.prs_hit.clone(),
            signal_gain,
        };

        #[allow(clippy::cast_possible_truncation)]
        let workout_count = self.history.len() as u32 + 1;

        let newly_unlocked = achievement::check(
            &self.unlocked.iter().map(|u| u.id.clone()).collect(),
            &Stats {
                workout_count,
                current_streak: self.streak.current,
                longest_streak: self.streak.longest,
                total_prs: self.total_prs,
                bench_max: self.big3.bench,
                squat_max: self.big3.squat,
                deadlift_max: self.big3.deadlift,
                signal: self.signal,
            },
        );
        self.unlocked.extend(newly_unlocked.iter().map(|id| Unlocked {
            id: (*id).to_string(),
            unlocked_at: today,
        }));

        self.history.push(record.clone());

        WorkoutSummary {
            record,
            signal_before,
            signal_after: self.signal,
            newly_unlocked,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::muscle::Muscle;

    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn onboarded() -> Profile {
        Profile::new(&LiftProfile {
            squat: 315.0,
            bench: 225.0,
            deadlift: 405.0,
            bodyweight: 180.0,
        })
    }

    fn session(prs: &[&str]) -> CompletedSession {
        CompletedSession {
            title: String::from("Push Day"),
            duration_minutes: 52,
            exercises: vec![
                ExerciseRecord {
                    name: String::from("Bench Press"),
                    sets: vec![
                        LoggedSet {
                            weight: 185.0,
                            reps: 8,
                        },
                        LoggedSet {
                            weight: 205.0,
                            reps: 5,
                        },
                    ],
                },
                ExerciseRecord {
                    name: String::from("Overhead Press"),
                    sets: vec![LoggedSet {
                        weight: 95.0,
                        reps: 10,
                    }],
                },
            ],
            prs_hit: prs.iter().map(ToString::to_string).collect(),
            difficulty: Difficulty::new(8).unwrap(),
        }
    }

    #[test]
    fn test_new_profile() {
        let profile = onboarded();

        assert_eq!(profile.signal, Signal::new(2625));
        assert_eq!(profile.big3.squat, 315.0);
        assert!(profile.history.is_empty());
        assert!(profile.muscle_progress.is_empty());
    }

    #[test]
    fn test_log_set_cross_updates_big3() {
        let mut profile = onboarded();

        let outcome = profile.log_set(
            "Bench Press",
            LoggedSet {
                weight: 245.0,
                reps: 2,
            },
            date(1),
        );

        assert!(outcome.is_pr);
        // 245 x 2 estimates above the onboarding bench of 225.
        assert_eq!(profile.big3.bench, 252.0);
    }

    #[test]
    fn test_log_set_accessory_does_not_touch_big3() {
        let mut profile = onboarded();

        let outcome = profile.log_set(
            "Lat Pulldown",
            LoggedSet {
                weight: 160.0,
                reps: 10,
            },
            date(1),
        );

        assert!(outcome.is_pr);
        assert_eq!(profile.big3, onboarded().big3);
    }

    #[test]
    fn test_complete_workout_event_order() {
        let mut profile = onboarded();

        let summary = profile.complete_workout(&session(&["Bench Press"]), date(15));

        // Signal: delta 10 + 25 + 5 halved above 2500.
        assert_eq!(summary.signal_before, Signal::new(2625));
        assert_eq!(summary.signal_after, Signal::new(2645));
        assert_eq!(summary.record.signal_gain, 20);

        assert_eq!(profile.streak.current, 1);
        assert_eq!(profile.total_prs, 1);
        assert_eq!(profile.history.len(), 1);
        assert_eq!(summary.record.exercise_count, 2);
        assert_eq!(summary.record.total_sets, 3);
        assert!(profile.muscle_progress[&Muscle::Chest] > 0.0);
    }

    #[test]
    fn test_complete_workout_unlocks_achievements() {
        let mut profile = onboarded();

        let summary = profile.complete_workout(&session(&["Bench Press"]), date(15));

        // First workout, first PR, plus the strength and signal milestones
        // already earned by the onboarding numbers.
        assert_eq!(
            summary.newly_unlocked,
            [
                "first_workout",
                "pr_first",
                "bench_135",
                "bench_225",
                "squat_225",
                "squat_315",
                "deadlift_315",
                "deadlift_405",
                "signal_1200",
                "signal_1500",
                "signal_2000",
                "signal_2500"
            ]
        );
        assert_eq!(profile.unlocked.len(), 12);
        assert!(profile.unlocked.iter().all(|u| u.unlocked_at == date(15)));
    }

    #[test]
    fn test_complete_workout_does_not_unlock_twice() {
        let mut profile = onboarded();
        profile.complete_workout(&session(&["Bench Press"]), date(15));

        let summary = profile.complete_workout(&session(&[]), date(16));

        assert_eq!(summary.newly_unlocked, Vec::<&str>::new());
        assert_eq!(profile.unlocked.len(), 12);
        assert_eq!(profile.streak.current, 2);
    }

    #[rstest]
    #[case::consecutive_days(&[1, 2, 3], 3, 3)]
    #[case::gap_resets(&[1, 2, 10], 1, 2)]
    #[case::same_day_counts_once(&[5, 5], 1, 1)]
    fn test_complete_workout_streaks(
        #[case] days: &[u32],
        #[case] current: u32,
        #[case] longest: u32,
    ) {
        let mut profile = onboarded();
        for day in days {
            profile.complete_workout(&session(&[]), date(*day));
        }

        assert_eq!(profile.streak.current, current);
        assert_eq!(profile.streak.longest, longest);
    }

    #[test]
    fn test_sanitize_restores_invariants() {
        let mut profile = onboarded();
        profile.signal = Signal::default();
        profile.muscle_progress.insert(Muscle::Chest, 250.0);
        profile.muscle_progress.insert(Muscle::Quads, -3.0);
        profile.streak.current = 5;
        profile.streak.longest = 2;

        profile.sanitize();

        assert_eq!(profile.signal, Signal::FLOOR);
        assert_eq!(profile.muscle_progress[&Muscle::Chest], 100.0);
        assert_eq!(profile.muscle_progress[&Muscle::Quads], 0.0);
        assert_eq!(profile.streak.longest, 5);
    }
}
