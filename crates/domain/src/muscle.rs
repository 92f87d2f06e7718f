use std::{collections::BTreeMap, slice::Iter};

/// Fine-grained muscles tracked by the volume engine and the body diagram.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Muscle {
    Chest,
    FrontDelts,
    SideDelts,
    RearDelts,
    Lats,
    UpperBack,
    LowerBack,
    Traps,
    Biceps,
    Triceps,
    Forearms,
    Abs,
    Obliques,
    Quads,
    Hamstrings,
    Glutes,
    Calves,
}

impl Muscle {
    pub fn iter() -> Iter<'static, Muscle> {
        static MUSCLES: [Muscle; 17] = [
            Muscle::Chest,
            Muscle::FrontDelts,
            Muscle::SideDelts,
            Muscle::RearDelts,
            Muscle::Lats,
            Muscle::UpperBack,
            Muscle::LowerBack,
            Muscle::Traps,
            Muscle::Biceps,
            Muscle::Triceps,
            Muscle::Forearms,
            Muscle::Abs,
            Muscle::Obliques,
            Muscle::Quads,
            Muscle::Hamstrings,
            Muscle::Glutes,
            Muscle::Calves,
        ];
        MUSCLES.iter()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Muscle::Chest => "Chest",
            Muscle::FrontDelts => "Front Delts",
            Muscle::SideDelts => "Side Delts",
            Muscle::RearDelts => "Rear Delts",
            Muscle::Lats => "Lats",
            Muscle::UpperBack => "Upper Back",
            Muscle::LowerBack => "Lower Back",
            Muscle::Traps => "Traps",
            Muscle::Biceps => "Biceps",
            Muscle::Triceps => "Triceps",
            Muscle::Forearms => "Forearms",
            Muscle::Abs => "Abs",
            Muscle::Obliques => "Obliques",
            Muscle::Quads => "Quads",
            Muscle::Hamstrings => "Hamstrings",
            Muscle::Glutes => "Glutes",
            Muscle::Calves => "Calves",
        }
    }

    /// The coarse group used by the ranking ladder.
    #[must_use]
    pub fn group(self) -> MuscleGroup {
        match self {
            Muscle::Chest => MuscleGroup::Chest,
            Muscle::FrontDelts | Muscle::SideDelts | Muscle::RearDelts => MuscleGroup::Shoulders,
            Muscle::Lats | Muscle::UpperBack | Muscle::LowerBack => MuscleGroup::Back,
            Muscle::Traps => MuscleGroup::Traps,
            Muscle::Biceps => MuscleGroup::Biceps,
            Muscle::Triceps => MuscleGroup::Triceps,
            Muscle::Forearms => MuscleGroup::Forearms,
            Muscle::Abs | Muscle::Obliques => MuscleGroup::Core,
            Muscle::Quads => MuscleGroup::Quads,
            Muscle::Hamstrings => MuscleGroup::Hamstrings,
            Muscle::Glutes => MuscleGroup::Glutes,
            Muscle::Calves => MuscleGroup::Calves,
        }
    }
}

/// The closed set of muscle groups carrying their own point ladder.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    Chest,
    Shoulders,
    Back,
    Traps,
    Biceps,
    Triceps,
    Forearms,
    Core,
    Quads,
    Hamstrings,
    Glutes,
    Calves,
}

impl MuscleGroup {
    pub fn iter() -> Iter<'static, MuscleGroup> {
        static GROUPS: [MuscleGroup; 12] = [
            MuscleGroup::Chest,
            MuscleGroup::Shoulders,
            MuscleGroup::Back,
            MuscleGroup::Traps,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Forearms,
            MuscleGroup::Core,
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
            MuscleGroup::Calves,
        ];
        GROUPS.iter()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Back => "Back",
            MuscleGroup::Traps => "Traps",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Forearms => "Forearms",
            MuscleGroup::Core => "Core",
            MuscleGroup::Quads => "Quads",
            MuscleGroup::Hamstrings => "Hamstrings",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Calves => "Calves",
        }
    }
}

/// Accumulated ladder points per muscle group. Groups without any points yet
/// may be absent from the map.
pub type MusclePoints = BTreeMap<MuscleGroup, u32>;
