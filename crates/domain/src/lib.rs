#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod error;
mod exercise;
mod goals;
mod grouping;
mod history;
mod pr;
mod service;
mod streak;
mod template;
mod workout;

pub use error::{DeleteError, ReadError, StorageError, WriteError};
pub use exercise::{
    Equipment, EquipmentError, Exercise, ExerciseID, ExerciseRepository, ExerciseService,
    MuscleGroup, MuscleGroupError, Name, NameError, Region,
};
pub use goals::{GoalsRepository, GoalsService, UserGoals, WorkoutsPerWeek, WorkoutsPerWeekError};
pub use grouping::group_by_proximity;
pub use history::{
    ExerciseHistory, ExerciseHistoryRepository, ExerciseHistoryService, PersonalRecord,
    SessionSummary,
};
pub use pr::{PrStatus, ProgressService, exercise_pr_status, session_pr_status};
pub use service::Service;
pub use streak::{DayStreaks, day_streaks, week_start, weekly_streak};
pub use template::{
    TemplateEntry, TemplateID, TemplateRepository, TemplateService, WorkoutTemplate,
};
pub use workout::{
    ExerciseLog, ExerciseLogID, Reps, RepsError, SessionID, SetLog, Weight, WeightError,
    WorkoutSession, WorkoutSessionRepository, WorkoutSessionService,
};
