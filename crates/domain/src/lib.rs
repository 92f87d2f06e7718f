#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod achievement;
pub mod catalog;
mod error;
pub mod muscle;
pub mod profile;
pub mod rank;
pub mod service;
pub mod signal;
pub mod streak;
pub mod strength;
pub mod volume;
pub mod workout;

pub use achievement::{ACHIEVEMENTS, Achievement, Category, Rarity, Stats, Unlocked};
pub use error::{ReadError, StorageError, UpdateError};
pub use muscle::{Muscle, MuscleGroup, MusclePoints};
pub use profile::{Big3, CompletedSession, Profile, WorkoutSummary};
pub use rank::{Division, NextRank, Rank, RankTier, RankUp};
pub use service::{ProfileRepository, Service};
pub use signal::{Difficulty, DifficultyError, LiftProfile, Performance, Signal, SignalTier};
pub use streak::{StreakState, WEEKLY_GOAL};
pub use strength::{Sex, StrengthStandard, StrengthTier};
pub use volume::{Balance, MuscleProgress};
pub use workout::{
    ExerciseRecord, Lift, LoggedSet, PersonalRecord, RecordStore, SetOutcome, WorkoutID,
    WorkoutRecord,
};
