//! Persisted representations of the domain types.
//!
//! Nested collections (exercise logs, session summaries, template entries)
//! are stored as JSON columns; these records define that JSON shape.
//! Converting back into domain types re-runs the domain validations.

use chrono::{DateTime, NaiveDate, Utc};
use liftlog_domain as domain;
use uuid::Uuid;

#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    #[error(transparent)]
    Name(#[from] domain::NameError),
    #[error(transparent)]
    Reps(#[from] domain::RepsError),
    #[error(transparent)]
    Weight(#[from] domain::WeightError),
    #[error(transparent)]
    WorkoutsPerWeek(#[from] domain::WorkoutsPerWeekError),
    #[error(transparent)]
    MuscleGroup(#[from] domain::MuscleGroupError),
    #[error(transparent)]
    Equipment(#[from] domain::EquipmentError),
    #[error(transparent)]
    Id(#[from] uuid::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ExerciseLog {
    pub id: Uuid,
    pub exercise_id: Uuid,
    pub exercise_name: String,
    pub sets: Vec<SetLog>,
    pub notes: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl From<&domain::ExerciseLog> for ExerciseLog {
    fn from(value: &domain::ExerciseLog) -> Self {
        Self {
            id: *value.id,
            exercise_id: *value.exercise_id,
            exercise_name: value.exercise_name.to_string(),
            sets: value.sets.iter().map(SetLog::from).collect(),
            notes: value.notes.clone(),
            timestamp: value.timestamp,
        }
    }
}

impl TryFrom<ExerciseLog> for domain::ExerciseLog {
    type Error = RecordError;

    fn try_from(value: ExerciseLog) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            exercise_id: value.exercise_id.into(),
            exercise_name: domain::Name::new(&value.exercise_name)?,
            sets: value
                .sets
                .into_iter()
                .map(domain::SetLog::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            notes: value.notes,
            timestamp: value.timestamp,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SetLog {
    pub set_number: u32,
    pub reps: u32,
    pub weight: f32,
    pub completed: bool,
}

impl From<&domain::SetLog> for SetLog {
    fn from(value: &domain::SetLog) -> Self {
        Self {
            set_number: value.set_number,
            reps: value.reps.into(),
            weight: value.weight.into(),
            completed: value.completed,
        }
    }
}

impl TryFrom<SetLog> for domain::SetLog {
    type Error = RecordError;

    fn try_from(value: SetLog) -> Result<Self, Self::Error> {
        Ok(Self {
            set_number: value.set_number,
            reps: domain::Reps::new(value.reps)?,
            weight: domain::Weight::new(value.weight)?,
            completed: value.completed,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    pub date: NaiveDate,
    pub max_weight: f32,
    pub total_volume: f32,
    pub sets: u32,
}

impl From<&domain::SessionSummary> for SessionSummary {
    fn from(value: &domain::SessionSummary) -> Self {
        Self {
            date: value.date,
            max_weight: value.max_weight.into(),
            total_volume: value.total_volume,
            sets: value.sets,
        }
    }
}

impl TryFrom<SessionSummary> for domain::SessionSummary {
    type Error = RecordError;

    fn try_from(value: SessionSummary) -> Result<Self, Self::Error> {
        Ok(Self {
            date: value.date,
            max_weight: domain::Weight::new(value.max_weight)?,
            total_volume: value.total_volume,
            sets: value.sets,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct TemplateEntry {
    pub exercise_id: Uuid,
    pub exercise_name: String,
    pub target_sets: u32,
    pub target_reps: u32,
    pub last_weight: Option<f32>,
}

impl From<&domain::TemplateEntry> for TemplateEntry {
    fn from(value: &domain::TemplateEntry) -> Self {
        Self {
            exercise_id: *value.exercise_id,
            exercise_name: value.exercise_name.to_string(),
            target_sets: value.target_sets,
            target_reps: value.target_reps.into(),
            last_weight: value.last_weight.map(f32::from),
        }
    }
}

impl TryFrom<TemplateEntry> for domain::TemplateEntry {
    type Error = RecordError;

    fn try_from(value: TemplateEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            exercise_id: value.exercise_id.into(),
            exercise_name: domain::Name::new(&value.exercise_name)?,
            target_sets: value.target_sets,
            target_reps: domain::Reps::new(value.target_reps)?,
            last_weight: value
                .last_weight
                .map(domain::Weight::new)
                .transpose()?,
        })
    }
}
