use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use derive_more::{Deref, Display, Into};
use uuid::Uuid;

use crate::{
    DeleteError, ExerciseID, Name, ReadError, SessionSummary, WriteError,
};

#[allow(async_fn_in_trait)]
pub trait WorkoutSessionRepository {
    /// All sessions, sorted descending by date.
    async fn read_sessions(&self) -> Result<Vec<WorkoutSession>, ReadError>;
    async fn read_session(&self, id: SessionID) -> Result<Option<WorkoutSession>, ReadError>;
    async fn read_session_on(&self, date: NaiveDate)
    -> Result<Option<WorkoutSession>, ReadError>;
    /// Sessions whose date falls within `[first, last]` (inclusive).
    async fn read_sessions_in(
        &self,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Result<Vec<WorkoutSession>, ReadError>;
    /// Insert-or-replace. Must evict any other session stored under the
    /// same calendar date (one canonical session per day).
    async fn store_session(&self, session: WorkoutSession)
    -> Result<WorkoutSession, WriteError>;
    async fn delete_session(&self, id: SessionID) -> Result<SessionID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait WorkoutSessionService {
    /// Insert-or-replace, followed by history aggregation for every
    /// exercise log in the session.
    async fn save_session(&self, session: WorkoutSession) -> Result<WorkoutSession, WriteError>;
    async fn get_sessions(&self) -> Result<Vec<WorkoutSession>, ReadError>;
    async fn get_session(&self, id: SessionID) -> Result<Option<WorkoutSession>, ReadError>;
    async fn get_session_on(&self, date: NaiveDate) -> Result<Option<WorkoutSession>, ReadError>;
    async fn get_sessions_in(
        &self,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Result<Vec<WorkoutSession>, ReadError>;
    async fn delete_session(&self, id: SessionID) -> Result<SessionID, DeleteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSession {
    pub id: SessionID,
    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub exercises: Vec<ExerciseLog>,
    pub auto_grouped: bool,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SessionID(Uuid);

impl SessionID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for SessionID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SessionID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseLog {
    pub id: ExerciseLogID,
    pub exercise_id: ExerciseID,
    pub exercise_name: Name,
    pub sets: Vec<SetLog>,
    pub notes: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ExerciseLog {
    /// The heaviest weight across all sets, `None` for a log without sets.
    #[must_use]
    pub fn max_weight(&self) -> Option<Weight> {
        self.sets
            .iter()
            .map(|s| s.weight)
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    /// Σ reps × weight across all sets.
    #[must_use]
    pub fn total_volume(&self) -> f32 {
        self.sets
            .iter()
            .map(|s| {
                #[allow(clippy::cast_precision_loss)]
                let reps = u32::from(s.reps) as f32;
                reps * f32::from(s.weight)
            })
            .sum()
    }

    #[must_use]
    pub fn set_count(&self) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        let count = self.sets.len() as u32;
        count
    }

    /// Removes the set with the given number and renumbers the remaining
    /// sets so that numbers stay dense and contiguous.
    pub fn remove_set(&mut self, set_number: u32) {
        self.sets.retain(|s| s.set_number != set_number);
        for (i, set) in self.sets.iter_mut().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            {
                set.set_number = i as u32 + 1;
            }
        }
    }

    /// The per-date history summary of this occurrence, `None` for a log
    /// without sets (such a log contributes no history update).
    #[must_use]
    pub fn summary(&self, date: NaiveDate) -> Option<SessionSummary> {
        let max_weight = self.max_weight()?;
        Some(SessionSummary {
            date,
            max_weight,
            total_volume: self.total_volume(),
            sets: self.set_count(),
        })
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseLogID(Uuid);

impl ExerciseLogID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseLogID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseLogID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetLog {
    /// 1-based, dense and contiguous within its exercise log.
    pub set_number: u32,
    pub reps: Reps,
    pub weight: Weight,
    pub completed: bool,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(1..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 1 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// Weight in pounds.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0 to 999.9 lb")]
    OutOfRange,
    #[error("Weight must be a number")]
    ParseError,
}
