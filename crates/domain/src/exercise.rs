use std::slice::Iter;

use derive_more::{AsRef, Deref, Display};
use uuid::Uuid;

use crate::ReadError;

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn read_exercise(&self, id: ExerciseID) -> Result<Option<Exercise>, ReadError>;
    async fn read_exercises_by_muscle_group(
        &self,
        muscle_group: MuscleGroup,
    ) -> Result<Vec<Exercise>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn get_exercise(&self, id: ExerciseID) -> Result<Option<Exercise>, ReadError>;
    async fn get_exercises_by_muscle_group(
        &self,
        muscle_group: MuscleGroup,
    ) -> Result<Vec<Exercise>, ReadError>;
    async fn search_exercises(&self, query: &str) -> Result<Vec<Exercise>, ReadError>;
}

/// A catalog entry. Never mutated after seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub muscle_group: MuscleGroup,
    pub equipment: Equipment,
    pub rep_range: Option<String>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.len();

        if len > 64 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    FrontDelts,
    SideDelts,
    RearDelts,
    UpperChest,
    MidChest,
    LowerChest,
    Lats,
    UpperBack,
    MidBack,
    LowerBack,
    Biceps,
    Triceps,
    Forearms,
    Quads,
    Hamstrings,
    Glutes,
    Calves,
    Abs,
    Obliques,
}

impl MuscleGroup {
    pub fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 19] = [
            MuscleGroup::FrontDelts,
            MuscleGroup::SideDelts,
            MuscleGroup::RearDelts,
            MuscleGroup::UpperChest,
            MuscleGroup::MidChest,
            MuscleGroup::LowerChest,
            MuscleGroup::Lats,
            MuscleGroup::UpperBack,
            MuscleGroup::MidBack,
            MuscleGroup::LowerBack,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Forearms,
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
            MuscleGroup::Calves,
            MuscleGroup::Abs,
            MuscleGroup::Obliques,
        ];
        MUSCLE_GROUPS.iter()
    }

    /// Stable identifier used as the persisted representation.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            MuscleGroup::FrontDelts => "front-delts",
            MuscleGroup::SideDelts => "side-delts",
            MuscleGroup::RearDelts => "rear-delts",
            MuscleGroup::UpperChest => "upper-chest",
            MuscleGroup::MidChest => "mid-chest",
            MuscleGroup::LowerChest => "lower-chest",
            MuscleGroup::Lats => "lats",
            MuscleGroup::UpperBack => "upper-back",
            MuscleGroup::MidBack => "mid-back",
            MuscleGroup::LowerBack => "lower-back",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Forearms => "forearms",
            MuscleGroup::Quads => "quads",
            MuscleGroup::Hamstrings => "hamstrings",
            MuscleGroup::Glutes => "glutes",
            MuscleGroup::Calves => "calves",
            MuscleGroup::Abs => "abs",
            MuscleGroup::Obliques => "obliques",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MuscleGroup::FrontDelts => "Front Delts",
            MuscleGroup::SideDelts => "Side Delts",
            MuscleGroup::RearDelts => "Rear Delts",
            MuscleGroup::UpperChest => "Upper Chest",
            MuscleGroup::MidChest => "Mid Chest",
            MuscleGroup::LowerChest => "Lower Chest",
            MuscleGroup::Lats => "Lats",
            MuscleGroup::UpperBack => "Upper Back",
            MuscleGroup::MidBack => "Mid Back",
            MuscleGroup::LowerBack => "Lower Back",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Forearms => "Forearms",
            MuscleGroup::Quads => "Quads",
            MuscleGroup::Hamstrings => "Hamstrings",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Calves => "Calves",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::Obliques => "Obliques",
        }
    }

    #[must_use]
    pub fn region(self) -> Region {
        match self {
            MuscleGroup::FrontDelts | MuscleGroup::SideDelts | MuscleGroup::RearDelts => {
                Region::Shoulders
            }
            MuscleGroup::UpperChest | MuscleGroup::MidChest | MuscleGroup::LowerChest => {
                Region::Chest
            }
            MuscleGroup::Lats
            | MuscleGroup::UpperBack
            | MuscleGroup::MidBack
            | MuscleGroup::LowerBack => Region::Back,
            MuscleGroup::Biceps | MuscleGroup::Triceps | MuscleGroup::Forearms => Region::Arms,
            MuscleGroup::Quads
            | MuscleGroup::Hamstrings
            | MuscleGroup::Glutes
            | MuscleGroup::Calves => Region::Legs,
            MuscleGroup::Abs | MuscleGroup::Obliques => Region::Core,
        }
    }
}

impl TryFrom<&str> for MuscleGroup {
    type Error = MuscleGroupError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        MuscleGroup::iter()
            .find(|m| m.id() == value)
            .copied()
            .ok_or_else(|| MuscleGroupError::Unknown(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MuscleGroupError {
    #[error("Unknown muscle group: {0}")]
    Unknown(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Region {
    Shoulders,
    Chest,
    Back,
    Arms,
    Legs,
    Core,
}

impl Region {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Region::Shoulders => "Shoulders",
            Region::Chest => "Chest",
            Region::Back => "Back",
            Region::Arms => "Arms",
            Region::Legs => "Legs",
            Region::Core => "Core",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Equipment {
    Barbell,
    Dumbbell,
    Machine,
    Cable,
    Bodyweight,
}

impl Equipment {
    pub fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 5] = [
            Equipment::Barbell,
            Equipment::Dumbbell,
            Equipment::Machine,
            Equipment::Cable,
            Equipment::Bodyweight,
        ];
        EQUIPMENT.iter()
    }

    /// Stable identifier used as the persisted representation.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Equipment::Barbell => "barbell",
            Equipment::Dumbbell => "dumbbell",
            Equipment::Machine => "machine",
            Equipment::Cable => "cable",
            Equipment::Bodyweight => "bodyweight",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Equipment::Barbell => "Barbell",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Machine => "Machine",
            Equipment::Cable => "Cable",
            Equipment::Bodyweight => "Bodyweight",
        }
    }
}

impl TryFrom<&str> for Equipment {
    type Error = EquipmentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Equipment::iter()
            .find(|e| e.id() == value)
            .copied()
            .ok_or_else(|| EquipmentError::Unknown(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EquipmentError {
    #[error("Unknown equipment: {0}")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Alice", Ok(Name("Alice".to_string())))]
    #[case("  Squat  ", Ok(Name("Squat".to_string())))]
    #[case("", Err(NameError::Empty))]
    #[case("   ", Err(NameError::Empty))]
    #[case(
        "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
        Err(NameError::TooLong(65))
    )]
    fn test_name_new(#[case] name: &str, #[case] expected: Result<Name, NameError>) {
        assert_eq!(Name::new(name), expected);
    }

    #[test]
    fn test_muscle_group_iter() {
        assert_eq!(MuscleGroup::iter().count(), 19);
    }

    #[rstest]
    #[case("front-delts", Ok(MuscleGroup::FrontDelts))]
    #[case("obliques", Ok(MuscleGroup::Obliques))]
    #[case("neck", Err(MuscleGroupError::Unknown("neck".to_string())))]
    fn test_muscle_group_try_from(
        #[case] id: &str,
        #[case] expected: Result<MuscleGroup, MuscleGroupError>,
    ) {
        assert_eq!(MuscleGroup::try_from(id), expected);
    }

    #[test]
    fn test_muscle_group_id_roundtrip() {
        for muscle_group in MuscleGroup::iter() {
            assert_eq!(MuscleGroup::try_from(muscle_group.id()), Ok(*muscle_group));
        }
    }

    #[rstest]
    #[case(MuscleGroup::SideDelts, Region::Shoulders)]
    #[case(MuscleGroup::LowerBack, Region::Back)]
    #[case(MuscleGroup::Obliques, Region::Core)]
    fn test_muscle_group_region(#[case] muscle_group: MuscleGroup, #[case] expected: Region) {
        assert_eq!(muscle_group.region(), expected);
    }

    #[test]
    fn test_equipment_id_roundtrip() {
        for equipment in Equipment::iter() {
            assert_eq!(Equipment::try_from(equipment.id()), Ok(*equipment));
        }
    }

    #[test]
    fn test_exercise_id_nil() {
        assert!(ExerciseID::nil().is_nil());
        assert_eq!(ExerciseID::nil(), ExerciseID::default());
    }
}
