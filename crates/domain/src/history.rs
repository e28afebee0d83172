use chrono::NaiveDate;

use crate::{ExerciseID, ReadError, Weight, WriteError};

#[allow(async_fn_in_trait)]
pub trait ExerciseHistoryRepository {
    async fn read_history(&self, id: ExerciseID) -> Result<Option<ExerciseHistory>, ReadError>;
    async fn read_all_history(&self) -> Result<Vec<ExerciseHistory>, ReadError>;
    async fn store_history(&self, history: ExerciseHistory)
    -> Result<ExerciseHistory, WriteError>;
}

#[allow(async_fn_in_trait)]
pub trait ExerciseHistoryService {
    async fn get_exercise_history(
        &self,
        id: ExerciseID,
    ) -> Result<Option<ExerciseHistory>, ReadError>;
    async fn get_all_exercise_history(&self) -> Result<Vec<ExerciseHistory>, ReadError>;
}

/// Rolling per-exercise history, maintained exclusively by
/// [`Service::save_session`](crate::Service).
///
/// Invariants: `personal_record.max_weight` is greater than or equal to
/// every summary's max weight, and `sessions` is strictly ascending by date
/// with at most one entry per distinct date.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseHistory {
    pub exercise_id: ExerciseID,
    pub personal_record: PersonalRecord,
    pub sessions: Vec<SessionSummary>,
}

impl ExerciseHistory {
    /// The history created by an exercise's first recorded occurrence.
    #[must_use]
    pub fn start(exercise_id: ExerciseID, summary: SessionSummary) -> Self {
        Self {
            exercise_id,
            personal_record: PersonalRecord {
                max_weight: summary.max_weight,
                date: summary.date,
            },
            sessions: vec![summary],
        }
    }

    /// Upserts the summary for its calendar date and raises the personal
    /// record if this occurrence's max weight strictly exceeds it.
    ///
    /// Re-saving the same date replaces that date's summary in place;
    /// summaries are never removed.
    pub fn record(&mut self, summary: SessionSummary) {
        if summary.max_weight > self.personal_record.max_weight {
            self.personal_record = PersonalRecord {
                max_weight: summary.max_weight,
                date: summary.date,
            };
        }

        if let Some(existing) = self.sessions.iter_mut().find(|s| s.date == summary.date) {
            *existing = summary;
        } else {
            self.sessions.push(summary);
        }
        self.sessions.sort_by_key(|s| s.date);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonalRecord {
    pub max_weight: Weight,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    pub date: NaiveDate,
    pub max_weight: Weight,
    pub total_volume: f32,
    pub sets: u32,
}
