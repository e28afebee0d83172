use std::{cmp::Ordering, collections::BTreeMap};

use chrono::NaiveDate;

use crate::{DayStreaks, ExerciseHistory, ExerciseID, ExerciseLog, WorkoutSession};

#[allow(async_fn_in_trait)]
pub trait ProgressService {
    /// Degrades to [`PrStatus::NoData`] on any read failure.
    async fn exercise_pr_status(&self, exercise_log: &ExerciseLog, as_of: NaiveDate) -> PrStatus;
    /// Degrades to [`PrStatus::NoData`] on any read failure.
    async fn session_pr_status(&self, session: &WorkoutSession) -> PrStatus;
    /// Degrades to zero streaks on any read failure.
    async fn get_day_streaks(&self) -> DayStreaks;
}

/// How an occurrence's max weight compares to all strictly earlier history.
///
/// Variant order is the aggregation priority: the session-level status is
/// the minimum of its per-exercise statuses.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PrStatus {
    Pr,
    Matched,
    Regression,
    #[default]
    NoData,
}

impl PrStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PrStatus::Pr => "Personal Record",
            PrStatus::Matched => "Matched Previous",
            PrStatus::Regression => "Below Previous",
            PrStatus::NoData => "No History",
        }
    }
}

/// Compares the log's max weight to the best of all summaries dated
/// strictly before `as_of`.
///
/// Comparison is by date only, not by summary order, so the result is
/// correct even when the evaluated session is not the most recent one.
#[must_use]
pub fn exercise_pr_status(
    exercise_log: &ExerciseLog,
    history: Option<&ExerciseHistory>,
    as_of: NaiveDate,
) -> PrStatus {
    let Some(current_max) = exercise_log.max_weight() else {
        return PrStatus::NoData;
    };
    let Some(history) = history else {
        return PrStatus::NoData;
    };
    let Some(previous_max) = history
        .sessions
        .iter()
        .filter(|s| s.date < as_of)
        .map(|s| s.max_weight)
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    else {
        return PrStatus::NoData;
    };

    if current_max > previous_max {
        PrStatus::Pr
    } else if current_max < previous_max {
        PrStatus::Regression
    } else {
        PrStatus::Matched
    }
}

/// Evaluates every exercise log in the session and aggregates with
/// priority Pr > Matched > Regression > NoData. An empty session is NoData.
#[must_use]
pub fn session_pr_status(
    session: &WorkoutSession,
    histories: &BTreeMap<ExerciseID, ExerciseHistory>,
) -> PrStatus {
    session
        .exercises
        .iter()
        .map(|exercise_log| {
            exercise_pr_status(
                exercise_log,
                histories.get(&exercise_log.exercise_id),
                session.date,
            )
        })
        .min()
        .unwrap_or(PrStatus::NoData)
}
