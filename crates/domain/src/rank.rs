use std::fmt;

use crate::muscle::MusclePoints;

/// The nine-tier competitive ladder, iron at the bottom, champion unbounded
/// at the top.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum RankTier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
    Grandmaster,
    Champion,
}

struct Threshold {
    tier: RankTier,
    min: u32,
    // None marks the open-ended top tier.
    max: Option<u32>,
    divided: bool,
}

const THRESHOLDS: [Threshold; 9] = [
    Threshold {
        tier: RankTier::Iron,
        min: 0,
        max: Some(99),
        divided: true,
    },
    Threshold {
        tier: RankTier::Bronze,
        min: 100,
        max: Some(299),
        divided: true,
    },
    Threshold {
        tier: RankTier::Silver,
        min: 300,
        max: Some(599),
        divided: true,
    },
    Threshold {
        tier: RankTier::Gold,
        min: 600,
        max: Some(999),
        divided: true,
    },
    Threshold {
        tier: RankTier::Platinum,
        min: 1000,
        max: Some(1499),
        divided: true,
    },
    Threshold {
        tier: RankTier::Diamond,
        min: 1500,
        max: Some(2099),
        divided: true,
    },
    Threshold {
        tier: RankTier::Master,
        min: 2100,
        max: Some(2499),
        divided: false,
    },
    Threshold {
        tier: RankTier::Grandmaster,
        min: 2500,
        max: Some(2999),
        divided: false,
    },
    Threshold {
        tier: RankTier::Champion,
        min: 3000,
        max: None,
        divided: false,
    },
];

impl RankTier {
    fn threshold(self) -> &'static Threshold {
        &THRESHOLDS[self as usize]
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            RankTier::Iron => "Iron",
            RankTier::Bronze => "Bronze",
            RankTier::Silver => "Silver",
            RankTier::Gold => "Gold",
            RankTier::Platinum => "Platinum",
            RankTier::Diamond => "Diamond",
            RankTier::Master => "Master",
            RankTier::Grandmaster => "Grandmaster",
            RankTier::Champion => "Champion",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            RankTier::Iron => "#5C5C5C",
            RankTier::Bronze => "#CD7F32",
            RankTier::Silver => "#A8A8A8",
            RankTier::Gold => "#FFD700",
            RankTier::Platinum => "#00CED1",
            RankTier::Diamond => "#B9F2FF",
            RankTier::Master => "#9932CC",
            RankTier::Grandmaster => "#FF4444",
            RankTier::Champion => "#FFD700",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            RankTier::Iron => "🔩",
            RankTier::Bronze => "🥉",
            RankTier::Silver => "🥈",
            RankTier::Gold => "🥇",
            RankTier::Platinum => "💎",
            RankTier::Diamond => "💠",
            RankTier::Master => "👑",
            RankTier::Grandmaster => "🔥",
            RankTier::Champion => "⚡",
        }
    }
}

/// Sub-division within a tier. Three is the lowest, one the highest, so the
/// derived order ranks One before Two before Three.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Division {
    One = 1,
    Two = 2,
    Three = 3,
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rank {
    pub tier: RankTier,
    pub division: Option<Division>,
    pub points: u32,
}

impl Rank {
    /// The rank a points total corresponds to.
    ///
    /// Tier boundaries are inclusive at the low end: 600 points is Gold, not
    /// Silver. Divided tiers are split into exact thirds; integer arithmetic
    /// (`3 * offset < range`) avoids any floating-point boundary drift.
    #[must_use]
    pub fn from_points(points: u32) -> Self {
        let threshold = THRESHOLDS
            .iter()
            .find(|t| points >= t.min && t.max.is_none_or(|max| points <= max))
            .unwrap_or(&THRESHOLDS[0]);

        let division = if threshold.divided {
            let range = tier_range(threshold);
            let offset = points - threshold.min;
            Some(if 3 * offset < range {
                Division::Three
            } else if 3 * offset < 2 * range {
                Division::Two
            } else {
                Division::One
            })
        } else {
            None
        };

        Rank {
            tier: threshold.tier,
            division,
            points,
        }
    }

    /// Display label, e.g. "Gold 2" or "Master".
    #[must_use]
    pub fn label(&self) -> String {
        match self.division {
            Some(division) => format!("{} {division}", self.tier.name()),
            None => self.tier.name().to_string(),
        }
    }

    #[must_use]
    pub fn color(&self) -> &'static str {
        self.tier.color()
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        self.tier.icon()
    }

    /// The gap to the next division or tier. At champion there is no next
    /// rank; the gap is 0 and the rank is returned unchanged.
    #[must_use]
    pub fn points_to_next(points: u32) -> NextRank {
        let rank = Rank::from_points(points);
        let threshold = rank.tier.threshold();

        let next_points = match (rank.division, threshold.max) {
            (Some(Division::Three), _) => threshold.min + division_start(threshold, 1),
            (Some(Division::Two), _) => threshold.min + division_start(threshold, 2),
            (Some(Division::One), Some(max)) | (None, Some(max)) => max + 1,
            (_, None) => {
                return NextRank {
                    points_needed: 0,
                    rank,
                };
            }
        };

        NextRank {
            points_needed: next_points - points,
            rank: Rank::from_points(next_points),
        }
    }

    /// Fractional position within the current division, or within the whole
    /// tier for undivided tiers. Champion is always fully progressed.
    #[must_use]
    pub fn progress(points: u32) -> f64 {
        let rank = Rank::from_points(points);
        let threshold = rank.tier.threshold();

        let (start, span) = match (rank.division, threshold.max) {
            (Some(division), _) => {
                let thirds = 3 - division as u32;
                let start = threshold.min + division_start(threshold, thirds);
                let end = threshold.min + division_start(threshold, thirds + 1);
                (start, end - start)
            }
            (None, Some(max)) => (threshold.min, max - threshold.min),
            (None, None) => return 1.0,
        };

        if span == 0 {
            return 1.0;
        }

        (f64::from(points - start) / f64::from(span)).clamp(0.0, 1.0)
    }
}

fn tier_range(threshold: &Threshold) -> u32 {
    match threshold.max {
        Some(max) => max - threshold.min + 1,
        None => u32::MAX,
    }
}

/// Offset of the start of the nth division boundary (n thirds up from the
/// tier minimum), rounded up so every division strictly advances.
fn division_start(threshold: &Threshold, thirds: u32) -> u32 {
    (tier_range(threshold) * thirds).div_ceil(3)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NextRank {
    pub points_needed: u32,
    pub rank: Rank,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankUp {
    pub ranked_up: bool,
    pub old: Rank,
    pub new: Rank,
}

/// Whether moving between the two point totals changed tier or division.
/// Gaining points within the same division is not a rank up.
#[must_use]
pub fn check_rank_up(old_points: u32, new_points: u32) -> RankUp {
    let old = Rank::from_points(old_points);
    let new = Rank::from_points(new_points);

    RankUp {
        ranked_up: old.tier != new.tier || old.division != new.division,
        old,
        new,
    }
}

/// The rank for the rounded mean of all present muscle-group point totals.
/// Groups absent from the map are excluded, not counted as zero.
#[must_use]
pub fn overall_rank(muscle_points: &MusclePoints) -> Rank {
    if muscle_points.is_empty() {
        return Rank::from_points(0);
    }

    let sum: u64 = muscle_points.values().map(|p| u64::from(*p)).sum();
    let count = muscle_points.len() as u64;

    #[allow(clippy::cast_possible_truncation)]
    let mean = ((sum + count / 2) / count) as u32;

    Rank::from_points(mean)
}

/// Ladder points awarded for one set, log-compressed so heavy tonnage does
/// not run away. Every completed set is worth at least one point.
#[must_use]
pub fn set_points(weight: f64, reps: u32) -> u32 {
    let volume = (weight * f64::from(reps)).max(0.0);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let points = ((volume + 1.0).log10() * 5.0).round() as u32;

    points.max(1)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::muscle::MuscleGroup;

    use super::*;

    #[rstest]
    #[case::iron_floor(0, RankTier::Iron, Some(Division::Three))]
    #[case::iron_division_two(34, RankTier::Iron, Some(Division::Two))]
    #[case::iron_division_one(67, RankTier::Iron, Some(Division::One))]
    #[case::bronze_start(100, RankTier::Bronze, Some(Division::Three))]
    #[case::silver(450, RankTier::Silver, Some(Division::Two))]
    #[case::gold_boundary_belongs_to_gold(600, RankTier::Gold, Some(Division::Three))]
    #[case::just_below_gold(599, RankTier::Silver, Some(Division::One))]
    #[case::platinum(1200, RankTier::Platinum, Some(Division::Two))]
    #[case::diamond_top(2099, RankTier::Diamond, Some(Division::One))]
    #[case::master_has_no_division(2100, RankTier::Master, None)]
    #[case::grandmaster(2700, RankTier::Grandmaster, None)]
    #[case::champion(3000, RankTier::Champion, None)]
    #[case::far_beyond_champion(1_000_000, RankTier::Champion, None)]
    fn test_rank_from_points(
        #[case] points: u32,
        #[case] tier: RankTier,
        #[case] division: Option<Division>,
    ) {
        let rank = Rank::from_points(points);
        assert_eq!((rank.tier, rank.division), (tier, division));
        assert_eq!(rank.points, points);
    }

    #[test]
    fn test_rank_tier_monotone_in_points() {
        let mut previous = Rank::from_points(0).tier;
        for points in 0..4000 {
            let tier = Rank::from_points(points).tier;
            assert!(tier >= previous, "tier regressed at {points} points");
            previous = tier;
        }
    }

    #[rstest]
    #[case(600, "Gold 3")]
    #[case(950, "Gold 1")]
    #[case(2100, "Master")]
    #[case(3000, "Champion")]
    fn test_rank_label(#[case] points: u32, #[case] expected: &str) {
        assert_eq!(Rank::from_points(points).label(), expected);
    }

    #[rstest]
    #[case::within_iron(0, 34, RankTier::Iron, Some(Division::Two))]
    #[case::iron_division_boundary(33, 1, RankTier::Iron, Some(Division::Two))]
    #[case::iron_to_bronze(99, 1, RankTier::Bronze, Some(Division::Three))]
    #[case::gold_division_two(750, 117, RankTier::Gold, Some(Division::One))]
    #[case::master_to_grandmaster(2300, 200, RankTier::Grandmaster, None)]
    #[case::grandmaster_to_champion(2999, 1, RankTier::Champion, None)]
    fn test_points_to_next(
        #[case] points: u32,
        #[case] needed: u32,
        #[case] tier: RankTier,
        #[case] division: Option<Division>,
    ) {
        let next = Rank::points_to_next(points);
        assert_eq!(next.points_needed, needed);
        assert_eq!((next.rank.tier, next.rank.division), (tier, division));
    }

    #[test]
    fn test_points_to_next_at_champion() {
        let next = Rank::points_to_next(5000);
        assert_eq!(next.points_needed, 0);
        assert_eq!(next.rank, Rank::from_points(5000));
    }

    #[test]
    fn test_points_to_next_strictly_advances() {
        for points in 0..3000 {
            let current = Rank::from_points(points);
            let next = Rank::points_to_next(points);
            assert!(next.points_needed > 0, "stuck at {points} points");
            assert!(
                next.rank.tier > current.tier
                    || (next.rank.tier == current.tier && next.rank.division < current.division),
                "no advance at {points} points"
            );
        }
    }

    #[rstest]
    #[case::division_start(600, 0.0)]
    #[case::midway_through_division(667, 0.5)]
    #[case::undivided_tier_start(2100, 0.0)]
    #[case::undivided_tier_end(2499, 1.0)]
    #[case::champion_always_full(9999, 1.0)]
    fn test_progress(#[case] points: u32, #[case] expected: f64) {
        assert_approx_eq!(Rank::progress(points), expected, 1e-6);
    }

    #[test]
    fn test_progress_stays_in_unit_interval() {
        for points in 0..3500 {
            let progress = Rank::progress(points);
            assert!((0.0..=1.0).contains(&progress), "progress {progress} at {points}");
        }
    }

    #[rstest]
    #[case::same_division(610, 620, false)]
    #[case::division_up(620, 734, true)]
    #[case::tier_up(999, 1000, true)]
    #[case::no_movement(1200, 1200, false)]
    fn test_check_rank_up(#[case] old: u32, #[case] new: u32, #[case] expected: bool) {
        let result = check_rank_up(old, new);
        assert_eq!(result.ranked_up, expected);
        assert_eq!(result.old, Rank::from_points(old));
        assert_eq!(result.new, Rank::from_points(new));
    }

    #[rstest]
    #[case::empty_map(&[], 0)]
    #[case::single_group(&[(MuscleGroup::Chest, 1200)], 1200)]
    #[case::mean_is_rounded(&[(MuscleGroup::Chest, 100), (MuscleGroup::Back, 101)], 101)]
    #[case::absent_groups_excluded(&[(MuscleGroup::Quads, 3000)], 3000)]
    fn test_overall_rank(#[case] points: &[(MuscleGroup, u32)], #[case] mean: u32) {
        let map: MusclePoints = points.iter().copied().collect();
        assert_eq!(overall_rank(&map), Rank::from_points(mean));
    }

    #[rstest]
    #[case::warmup_set(45.0, 5, 12)]
    #[case::working_set(225.0, 10, 17)]
    #[case::heavy_set(315.0, 10, 17)]
    #[case::empty_set_still_scores(0.0, 0, 1)]
    #[case::negative_weight_clamped(-100.0, 5, 1)]
    fn test_set_points(#[case] weight: f64, #[case] reps: u32, #[case] expected: u32) {
        assert_eq!(set_points(weight, reps), expected);
    }
}
