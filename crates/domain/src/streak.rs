use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::workout::WorkoutRecord;

/// Default number of sessions aimed for per week.
pub const WEEKLY_GOAL: u32 = 3;

#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[must_use]
pub fn days_ago(days: i64) -> NaiveDate {
    today() - Duration::days(days)
}

/// Consecutive-day workout streak. `longest` never decreases.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StreakState {
    pub current: u32,
    pub longest: u32,
    pub last_workout_date: Option<NaiveDate>,
}

impl StreakState {
    /// Apply a completed workout dated `date` (normally today).
    pub fn record_workout(&mut self, date: NaiveDate) {
        self.current = advance(self.last_workout_date, self.current, date);
        self.longest = self.longest.max(self.current);
        self.last_workout_date = Some(date);
    }
}

/// The streak value after completing a workout on `today`.
///
/// The first workout ever starts at 1. A second workout on the same day does
/// not double-increment. A workout the day after the last one extends the
/// streak; any gap of two or more days restarts it at 1.
#[must_use]
pub fn advance(last_workout_date: Option<NaiveDate>, current: u32, today: NaiveDate) -> u32 {
    let Some(last) = last_workout_date else {
        return 1;
    };

    if last == today {
        current
    } else if last == today - Duration::days(1) {
        current + 1
    } else {
        1
    }
}

/// The streak as of `today`, without logging a workout: still alive if the
/// last workout was today or yesterday, otherwise broken back to 0.
#[must_use]
pub fn check(last_workout_date: Option<NaiveDate>, current: u32, today: NaiveDate) -> u32 {
    let Some(last) = last_workout_date else {
        return 0;
    };

    if last == today || last == today - Duration::days(1) {
        current
    } else {
        0
    }
}

/// Number of history entries dated in the week containing `today`.
/// Weeks start on Monday; on a Sunday the week still began six days earlier.
#[must_use]
pub fn workouts_this_week(history: &[WorkoutRecord], today: NaiveDate) -> u32 {
    let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));

    #[allow(clippy::cast_possible_truncation)]
    let count = history.iter().filter(|w| w.date >= monday).count() as u32;

    count
}
