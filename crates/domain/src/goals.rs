use chrono::NaiveDate;
use derive_more::{Display, Into};

use crate::{ReadError, WriteError};

#[allow(async_fn_in_trait)]
pub trait GoalsRepository {
    async fn read_goals(&self) -> Result<Option<UserGoals>, ReadError>;
    async fn store_goals(&self, goals: UserGoals) -> Result<UserGoals, WriteError>;
}

#[allow(async_fn_in_trait)]
pub trait GoalsService {
    /// Creates and persists default goals on first call.
    async fn get_user_goals(&self) -> Result<UserGoals, WriteError>;
    async fn save_user_goals(&self, goals: UserGoals) -> Result<UserGoals, WriteError>;
    /// Recomputes the week-based streak from the full session log and
    /// writes it back. The longest streak only ever grows.
    async fn update_streak_data(&self) -> Result<UserGoals, WriteError>;
}

/// Singleton. `current_streak`/`longest_streak` are the cached week-based
/// streaks maintained by [`GoalsService::update_streak_data`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UserGoals {
    pub workouts_per_week: WorkoutsPerWeek,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_workout_date: Option<NaiveDate>,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutsPerWeek(u8);

impl WorkoutsPerWeek {
    pub fn new(value: u8) -> Result<Self, WorkoutsPerWeekError> {
        if !(1..=7).contains(&value) {
            return Err(WorkoutsPerWeekError::OutOfRange(value));
        }

        Ok(Self(value))
    }
}

impl Default for WorkoutsPerWeek {
    fn default() -> Self {
        Self(4)
    }
}

impl From<WorkoutsPerWeek> for u32 {
    fn from(value: WorkoutsPerWeek) -> Self {
        u32::from(value.0)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WorkoutsPerWeekError {
    #[error("Weekly workout target must be between 1 and 7 ({0} is not)")]
    OutOfRange(u8),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, Err(WorkoutsPerWeekError::OutOfRange(0)))]
    #[case(1, Ok(WorkoutsPerWeek(1)))]
    #[case(7, Ok(WorkoutsPerWeek(7)))]
    #[case(8, Err(WorkoutsPerWeekError::OutOfRange(8)))]
    fn test_workouts_per_week_new(
        #[case] value: u8,
        #[case] expected: Result<WorkoutsPerWeek, WorkoutsPerWeekError>,
    ) {
        assert_eq!(WorkoutsPerWeek::new(value), expected);
    }

    #[test]
    fn test_user_goals_default() {
        let goals = UserGoals::default();
        assert_eq!(u32::from(goals.workouts_per_week), 4);
        assert_eq!(goals.current_streak, 0);
        assert_eq!(goals.longest_streak, 0);
        assert_eq!(goals.last_workout_date, None);
    }
}
