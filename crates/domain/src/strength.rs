use std::fmt;

const LB_PER_KG: f64 = 0.453_592;

/// Brzycki rep ceiling. The estimate degrades rapidly past this point.
const MAX_EFFECTIVE_REPS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    FEMALE,
    MALE,
}

impl From<&str> for Sex {
    fn from(value: &str) -> Self {
        match value {
            "female" => Sex::FEMALE,
            _ => Sex::MALE,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Sex::FEMALE => "female",
                Sex::MALE => "male",
            }
        )
    }
}

struct DotsCoefficients {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
}

// Published IPF DOTS polynomial coefficients (bodyweight in kg).
const DOTS_MALE: DotsCoefficients = DotsCoefficients {
    a: -307.750_76,
    b: 24.090_075_6,
    c: -0.191_875_922_1,
    d: 0.000_739_129_3,
    e: -0.000_001_093_0,
};

const DOTS_FEMALE: DotsCoefficients = DotsCoefficients {
    a: -57.962_88,
    b: 13.617_503_2,
    c: -0.112_665_549_5,
    d: 0.000_515_856_8,
    e: -0.000_001_070_6,
};

/// Estimate a one-rep max from a submaximal set using the Brzycki formula.
///
/// A single rep is returned as-is. Reps above 12 are treated as 12. Zero reps
/// or a negative weight yield 0.
#[must_use]
pub fn estimate_1rm(weight: f64, reps: u32) -> f64 {
    if weight < 0.0 || reps == 0 {
        return 0.0;
    }
    if reps == 1 {
        return weight;
    }

    let effective_reps = f64::from(reps.min(MAX_EFFECTIVE_REPS));

    (weight / (1.0278 - 0.0278 * effective_reps)).round()
}

/// Bodyweight-normalized strength score after the IPF DOTS standard.
///
/// Both weights are given in lbs and converted to kg internally. A
/// non-positive polynomial denominator (far outside any human bodyweight)
/// yields 0 instead of a meaningless score.
#[must_use]
pub fn dots(lift_weight: f64, bodyweight: f64, sex: Sex) -> f64 {
    let bw_kg = bodyweight * LB_PER_KG;
    let lift_kg = lift_weight * LB_PER_KG;

    let coefficients = match sex {
        Sex::FEMALE => &DOTS_FEMALE,
        Sex::MALE => &DOTS_MALE,
    };

    let denominator = coefficients.a
        + coefficients.b * bw_kg
        + coefficients.c * bw_kg.powi(2)
        + coefficients.d * bw_kg.powi(3)
        + coefficients.e * bw_kg.powi(4);

    if denominator <= 0.0 {
        return 0.0;
    }

    lift_kg * (500.0 / denominator)
}

/// Weight cutoffs separating the strength tiers, highest first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthStandard {
    pub tier_1_cutoff: f64,
    pub tier_2_cutoff: f64,
    pub tier_3_cutoff: f64,
    pub tier_4_cutoff: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthTier {
    Apex = 1,
    Elite = 2,
    Advanced = 3,
    Intermediate = 4,
    Novice = 5,
}

impl StrengthTier {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::Apex => "APEX",
            StrengthTier::Elite => "ELITE",
            StrengthTier::Advanced => "ADVANCED",
            StrengthTier::Intermediate => "INTERMEDIATE",
            StrengthTier::Novice => "NOVICE",
        }
    }

    #[must_use]
    pub fn percentile(self) -> u8 {
        match self {
            StrengthTier::Apex => 95,
            StrengthTier::Elite => 85,
            StrengthTier::Advanced => 65,
            StrengthTier::Intermediate => 40,
            StrengthTier::Novice => 20,
        }
    }
}

/// Classify a lift against the given standard. Cutoffs are inclusive and
/// checked from the top down.
#[must_use]
pub fn tier_from_weight(lift_weight: f64, standards: &StrengthStandard) -> StrengthTier {
    if lift_weight >= standards.tier_1_cutoff {
        StrengthTier::Apex
    } else if lift_weight >= standards.tier_2_cutoff {
        StrengthTier::Elite
    } else if lift_weight >= standards.tier_3_cutoff {
        StrengthTier::Advanced
    } else if lift_weight >= standards.tier_4_cutoff {
        StrengthTier::Intermediate
    } else {
        StrengthTier::Novice
    }
}

/// Percentage (0-100) of the way from the current tier's cutoff to the next.
#[must_use]
pub fn progress_to_next_tier(
    lift_weight: f64,
    tier: StrengthTier,
    standards: &StrengthStandard,
) -> u8 {
    let (current_cutoff, next_cutoff) = match tier {
        StrengthTier::Apex => return 100,
        StrengthTier::Elite => (standards.tier_2_cutoff, standards.tier_1_cutoff),
        StrengthTier::Advanced => (standards.tier_3_cutoff, standards.tier_2_cutoff),
        StrengthTier::Intermediate => (standards.tier_4_cutoff, standards.tier_3_cutoff),
        StrengthTier::Novice => (0.0, standards.tier_4_cutoff),
    };

    if lift_weight <= current_cutoff {
        return 0;
    }

    let range = next_cutoff - current_cutoff;
    if range <= 0.0 {
        return 100;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percentage = ((lift_weight - current_cutoff) / range * 100.0).round() as u8;

    percentage.min(100)
}

/// Round to the nearest weight loadable with standard 5 lb increments.
#[must_use]
pub fn round_to_nearest_plate(weight: f64) -> f64 {
    (weight / 5.0).round() * 5.0
}
