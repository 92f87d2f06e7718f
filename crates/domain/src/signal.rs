use derive_more::{Display, Into};

/// Overall skill rating, floored at 800.
///
/// Initialized once from a lift profile, then adjusted after every completed
/// workout. Growth slows above 2000 and again above 2500.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Signal(i32);

impl Default for Signal {
    fn default() -> Self {
        Self::FLOOR
    }
}

impl Signal {
    pub const FLOOR: Signal = Signal(800);

    const COMPLETION_BONUS: u32 = 10;
    const PR_BONUS: u32 = 25;
    const HARD_SESSION_BONUS: u32 = 5;

    #[must_use]
    pub fn new(value: i32) -> Self {
        Self(value.max(Self::FLOOR.0))
    }

    /// Derive a starting rating from a lift profile.
    ///
    /// The rating scales with the big-three total relative to bodyweight
    /// (a 2x bodyweight total maps to 1000). A non-positive bodyweight
    /// yields the floor instead of a division by zero.
    #[must_use]
    pub fn initial(profile: &LiftProfile) -> Self {
        if profile.bodyweight <= 0.0 {
            return Self::FLOOR;
        }

        let ratio = (profile.squat + profile.bench + profile.deadlift) / profile.bodyweight;

        #[allow(clippy::cast_possible_truncation)]
        let value = (ratio * 500.0).round() as i32;

        Self::new(value)
    }

    /// The rating after a workout.
    ///
    /// The delta is +10 for completing, +25 per PR, +5 for a hard session
    /// (difficulty 8+). Diminishing returns apply to the delta only, judged
    /// on the rating before the update: halved above 2500, else three
    /// quarters above 2000, floored in both cases.
    #[must_use]
    pub fn after_workout(self, performance: &Performance) -> Self {
        let mut delta = 0;

        if performance.completed {
            delta += Self::COMPLETION_BONUS;
        }

        delta += Self::PR_BONUS * performance.prs_hit;

        if performance.difficulty >= Difficulty::HARD {
            delta += Self::HARD_SESSION_BONUS;
        }

        if self.0 > 2500 {
            delta /= 2;
        } else if self.0 > 2000 {
            delta = delta * 3 / 4;
        }

        #[allow(clippy::cast_possible_wrap)]
        let delta = delta as i32;

        Self(self.0.saturating_add(delta))
    }
}

/// Big-three maxes and bodyweight, all in lbs.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LiftProfile {
    pub squat: f64,
    pub bench: f64,
    pub deadlift: f64,
    pub bodyweight: f64,
}

/// What happened in a single workout, as far as the rating is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Performance {
    pub completed: bool,
    pub prs_hit: u32,
    pub difficulty: Difficulty,
}

/// Self-reported session difficulty, 1 to 10.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Difficulty(u8);

impl Difficulty {
    /// Sessions at or above this difficulty count as hard.
    pub const HARD: Difficulty = Difficulty(8);

    pub fn new(value: u8) -> Result<Self, DifficultyError> {
        if !(1..=10).contains(&value) {
            return Err(DifficultyError::OutOfRange);
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DifficultyError {
    #[error("Difficulty must be in the range 1 to 10")]
    OutOfRange,
}

/// Coarse display ladder for the Signal rating itself, separate from the
/// points-based rank ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignalTier {
    Initial,
    Operator,
    Vanguard,
    Elite,
    Apex,
    Strata,
}

impl SignalTier {
    #[must_use]
    pub fn of(signal: Signal) -> Self {
        match i32::from(signal) {
            3000.. => SignalTier::Strata,
            2500.. => SignalTier::Apex,
            2000.. => SignalTier::Elite,
            1500.. => SignalTier::Vanguard,
            1000.. => SignalTier::Operator,
            _ => SignalTier::Initial,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SignalTier::Initial => "INITIAL",
            SignalTier::Operator => "OPERATOR",
            SignalTier::Vanguard => "VANGUARD",
            SignalTier::Elite => "ELITE",
            SignalTier::Apex => "APEX",
            SignalTier::Strata => "STRATA",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            SignalTier::Initial => "#888888",
            SignalTier::Operator => "#4ADE80",
            SignalTier::Vanguard => "#3B82F6",
            SignalTier::Elite => "#A855F7",
            SignalTier::Apex => "#F43F5E",
            SignalTier::Strata => "#FFD700",
        }
    }
}
