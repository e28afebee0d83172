use chrono::NaiveDate;
use derive_more::Deref;
use uuid::Uuid;

use crate::{DeleteError, ExerciseID, Name, ReadError, Reps, Weight, WriteError};

#[allow(async_fn_in_trait)]
pub trait TemplateRepository {
    /// All templates, sorted descending by creation date.
    async fn read_templates(&self) -> Result<Vec<WorkoutTemplate>, ReadError>;
    async fn read_template(&self, id: TemplateID) -> Result<Option<WorkoutTemplate>, ReadError>;
    async fn store_template(
        &self,
        template: WorkoutTemplate,
    ) -> Result<WorkoutTemplate, WriteError>;
    async fn delete_template(&self, id: TemplateID) -> Result<TemplateID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait TemplateService {
    async fn get_templates(&self) -> Result<Vec<WorkoutTemplate>, ReadError>;
    async fn get_template(&self, id: TemplateID) -> Result<Option<WorkoutTemplate>, ReadError>;
    async fn save_template(&self, template: WorkoutTemplate)
    -> Result<WorkoutTemplate, WriteError>;
    async fn delete_template(&self, id: TemplateID) -> Result<TemplateID, DeleteError>;
}

/// Created and deleted explicitly by the user, never auto-mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutTemplate {
    pub id: TemplateID,
    pub name: Name,
    pub created: NaiveDate,
    pub entries: Vec<TemplateEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateEntry {
    pub exercise_id: ExerciseID,
    pub exercise_name: Name,
    pub target_sets: u32,
    pub target_reps: Reps,
    pub last_weight: Option<Weight>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TemplateID(Uuid);

impl TemplateID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for TemplateID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for TemplateID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
