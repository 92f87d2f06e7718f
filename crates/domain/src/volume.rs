use std::collections::BTreeMap;

use crate::{catalog, muscle::Muscle, workout::ExerciseRecord};

/// Progress per muscle on the 0-100 body-diagram scale.
pub type MuscleProgress = BTreeMap<Muscle, f64>;

const MAX_PROGRESS: f64 = 100.0;

/// Raw tonnage of one set.
#[must_use]
pub fn set_volume(weight: f64, reps: u32) -> f64 {
    weight * f64::from(reps)
}

/// Per-muscle tonnage of a session, weighted by each exercise's
/// contribution factors. Unknown exercises contribute nothing.
#[must_use]
pub fn session_volume(exercises: &[ExerciseRecord]) -> BTreeMap<Muscle, f64> {
    let mut volume: BTreeMap<Muscle, f64> = BTreeMap::new();

    for exercise in exercises {
        let muscles = catalog::contributions(&exercise.name);
        for set in &exercise.sets {
            let tonnage = set_volume(set.weight, set.reps).max(0.0);
            for (muscle, contribution) in &muscles {
                *volume.entry(*muscle).or_insert(0.0) += tonnage * contribution;
            }
        }
    }

    volume
}

/// Fold a session's volume into the progress map.
///
/// Volume compresses logarithmically into points (5 per order of magnitude),
/// and the gain shrinks with the muscle's current level: a muscle at 50 gains
/// half of what a fresh muscle would. Levels never leave [0, 100]; muscles
/// untouched by the session keep their value. Pure: the same inputs always
/// produce the same output.
#[must_use]
pub fn apply_session(current: &MuscleProgress, exercises: &[ExerciseRecord]) -> MuscleProgress {
    let mut progress = current.clone();

    for (muscle, volume) in session_volume(exercises) {
        let points = (volume + 1.0).log10() * 5.0;
        let level = progress.get(&muscle).copied().unwrap_or(0.0).clamp(0.0, MAX_PROGRESS);
        let gain = points / (1.0 + level / 50.0);
        progress.insert(muscle, (level + gain).min(MAX_PROGRESS));
    }

    progress
}

/// How evenly developed the tracked muscles are.
#[derive(Debug, Clone, PartialEq)]
pub struct Balance {
    pub score: u32,
    pub weakest: Vec<Muscle>,
    pub strongest: Vec<Muscle>,
}

/// Mean progress plus the three least and three most developed muscles.
#[must_use]
pub fn balance(progress: &MuscleProgress) -> Balance {
    if progress.is_empty() {
        return Balance {
            score: 0,
            weakest: vec![],
            strongest: vec![],
        };
    }

    let mut sorted: Vec<(Muscle, f64)> = progress.iter().map(|(m, v)| (*m, *v)).collect();
    sorted.sort_by(|a, b| a.1.total_cmp(&b.1));

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let score = (sorted.iter().map(|(_, v)| v).sum::<f64>() / sorted.len() as f64).round() as u32;

    Balance {
        score,
        weakest: sorted.iter().take(3).map(|(m, _)| *m).collect(),
        strongest: sorted.iter().rev().take(3).map(|(m, _)| *m).collect(),
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::workout::LoggedSet;

    use super::*;

    fn bench_session(weight: f64, reps: u32, sets: usize) -> Vec<ExerciseRecord> {
        vec![ExerciseRecord {
            name: "Bench Press".to_string(),
            sets: vec![LoggedSet { weight, reps }; sets],
        }]
    }

    #[rstest]
    #[case(135.0, 10, 1350.0)]
    #[case(0.0, 10, 0.0)]
    #[case(225.0, 0, 0.0)]
    fn test_set_volume(#[case] weight: f64, #[case] reps: u32, #[case] expected: f64) {
        assert_eq!(set_volume(weight, reps), expected);
    }

    #[test]
    fn test_session_volume_weights_by_contribution() {
        let volume = session_volume(&bench_session(100.0, 10, 1));

        assert_approx_eq!(volume[&Muscle::Chest], 1000.0, 1e-9);
        assert_approx_eq!(volume[&Muscle::Triceps], 600.0, 1e-9);
        assert_approx_eq!(volume[&Muscle::FrontDelts], 400.0, 1e-9);
    }

    #[test]
    fn test_session_volume_unknown_exercise_is_empty() {
        let exercises = vec![ExerciseRecord {
            name: "Interpretive Dance".to_string(),
            sets: vec![LoggedSet {
                weight: 100.0,
                reps: 10,
            }],
        }];

        assert!(session_volume(&exercises).is_empty());
    }

    #[test]
    fn test_apply_session_fresh_muscle() {
        let progress = apply_session(&MuscleProgress::new(), &bench_session(100.0, 10, 1));

        // Chest volume 1000 -> log10(1001) * 5 points, undiminished at level 0.
        assert_approx_eq!(progress[&Muscle::Chest], 15.002, 1e-3);
    }

    #[test]
    fn test_apply_session_diminishing_returns() {
        let halfway = MuscleProgress::from([(Muscle::Chest, 50.0)]);
        let fresh = apply_session(&MuscleProgress::new(), &bench_session(100.0, 10, 1));
        let trained = apply_session(&halfway, &bench_session(100.0, 10, 1));

        let fresh_gain = fresh[&Muscle::Chest];
        let trained_gain = trained[&Muscle::Chest] - 50.0;
        assert_approx_eq!(trained_gain, fresh_gain / 2.0, 1e-9);
    }

    #[test]
    fn test_apply_session_never_exceeds_bounds() {
        let mut progress = MuscleProgress::from([(Muscle::Chest, 99.9)]);
        for _ in 0..20 {
            progress = apply_session(&progress, &bench_session(500.0, 10, 10));
        }

        for (muscle, level) in &progress {
            assert!(
                (0.0..=100.0).contains(level),
                "{muscle:?} at {level} out of bounds"
            );
        }
        assert_approx_eq!(progress[&Muscle::Chest], 100.0, 1e-6);
    }

    #[test]
    fn test_apply_session_untouched_muscles_keep_their_value() {
        let current = MuscleProgress::from([(Muscle::Calves, 42.0)]);
        let progress = apply_session(&current, &bench_session(100.0, 10, 1));

        assert_eq!(progress[&Muscle::Calves], 42.0);
    }

    #[test]
    fn test_apply_session_is_referentially_transparent() {
        let current = MuscleProgress::from([(Muscle::Chest, 30.0)]);
        let exercises = bench_session(135.0, 8, 3);

        assert_eq!(
            apply_session(&current, &exercises),
            apply_session(&current, &exercises)
        );
    }

    #[test]
    fn test_balance() {
        let progress = MuscleProgress::from([
            (Muscle::Chest, 80.0),
            (Muscle::Quads, 60.0),
            (Muscle::Lats, 40.0),
            (Muscle::Calves, 10.0),
        ]);

        let balance = balance(&progress);

        assert_eq!(balance.score, 48);
        assert_eq!(balance.weakest[0], Muscle::Calves);
        assert_eq!(balance.strongest[0], Muscle::Chest);
        assert_eq!(balance.weakest.len(), 3);
    }

    #[test]
    fn test_balance_empty() {
        let balance = balance(&MuscleProgress::new());

        assert_eq!(balance.score, 0);
        assert!(balance.weakest.is_empty());
        assert!(balance.strongest.is_empty());
    }
}
