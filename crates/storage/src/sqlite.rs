use std::path::Path;

use chrono::NaiveDate;
use liftlog_domain as domain;
use liftlog_domain::{
    DeleteError, Equipment, Exercise, ExerciseHistory, ExerciseHistoryRepository, ExerciseID,
    ExerciseRepository, GoalsRepository, MuscleGroup, PersonalRecord, ReadError, SessionID,
    StorageError, TemplateID, TemplateRepository, UserGoals, WorkoutSession,
    WorkoutSessionRepository, WorkoutTemplate, WorkoutsPerWeek, WriteError,
};
use log::{error, info};
use sqlx::{
    Row, SqlitePool,
    sqlite::{SqlitePoolOptions, SqliteRow},
};
use uuid::Uuid;

use crate::records;

/// SQLite-backed record store.
///
/// The pool is limited to a single connection so that read-modify-write
/// sequences (history aggregation, streak updates) never interleave.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn open(path: &Path) -> Result<Self, StorageError> {
        Self::connect(&format!("sqlite://{}?mode=rwc", path.display())).await
    }

    pub async fn open_in_memory() -> Result<Self, StorageError> {
        Self::connect("sqlite::memory:").await
    }

    async fn connect(url: &str) -> Result<Self, StorageError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await
            .map_err(|err| {
                error!("failed to open record store: {err}");
                StorageError::Unavailable
            })?;
        sqlx::migrate!("./migrations").run(&pool).await.map_err(|err| {
            error!("failed to migrate record store: {err}");
            StorageError::Unavailable
        })?;

        let store = Self { pool };
        store.seed_catalog().await?;
        Ok(store)
    }

    /// Seeds the built-in exercise catalog, once, into an empty store.
    async fn seed_catalog(&self) -> Result<(), StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exercises")
            .fetch_one(&self.pool)
            .await
            .map_err(|err| StorageError::Other(Box::new(err)))?;
        if count > 0 {
            return Ok(());
        }

        let exercises = domain::catalog::exercises();
        info!("seeding exercise catalog ({} entries)", exercises.len());
        for exercise in exercises {
            sqlx::query(
                "INSERT INTO exercises (id, name, muscle_group, equipment, rep_range) \
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(exercise.id.to_string())
            .bind(exercise.name.to_string())
            .bind(exercise.muscle_group.id())
            .bind(exercise.equipment.id())
            .bind(exercise.rep_range)
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Other(Box::new(err)))?;
        }
        Ok(())
    }
}

fn read_other<E: std::error::Error + 'static>(err: E) -> ReadError {
    ReadError::Other(Box::new(err))
}

fn write_other<E: std::error::Error + 'static>(err: E) -> WriteError {
    WriteError::Other(Box::new(err))
}

fn delete_other<E: std::error::Error + 'static>(err: E) -> DeleteError {
    DeleteError::Other(Box::new(err))
}

fn exercise_from_row(row: &SqliteRow) -> Result<Exercise, ReadError> {
    let id: String = row.try_get("id").map_err(read_other)?;
    let name: String = row.try_get("name").map_err(read_other)?;
    let muscle_group: String = row.try_get("muscle_group").map_err(read_other)?;
    let equipment: String = row.try_get("equipment").map_err(read_other)?;
    Ok(Exercise {
        id: Uuid::parse_str(&id).map_err(read_other)?.into(),
        name: domain::Name::new(&name).map_err(read_other)?,
        muscle_group: MuscleGroup::try_from(muscle_group.as_str()).map_err(read_other)?,
        equipment: Equipment::try_from(equipment.as_str()).map_err(read_other)?,
        rep_range: row.try_get("rep_range").map_err(read_other)?,
    })
}

fn session_from_row(row: &SqliteRow) -> Result<WorkoutSession, ReadError> {
    let id: String = row.try_get("id").map_err(read_other)?;
    let exercises: String = row.try_get("exercises").map_err(read_other)?;
    let exercises: Vec<records::ExerciseLog> =
        serde_json::from_str(&exercises).map_err(read_other)?;
    Ok(WorkoutSession {
        id: Uuid::parse_str(&id).map_err(read_other)?.into(),
        date: row.try_get("date").map_err(read_other)?,
        start_time: row.try_get("start_time").map_err(read_other)?,
        end_time: row.try_get("end_time").map_err(read_other)?,
        exercises: exercises
            .into_iter()
            .map(domain::ExerciseLog::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_other)?,
        auto_grouped: row.try_get("auto_grouped").map_err(read_other)?,
    })
}

fn history_from_row(row: &SqliteRow) -> Result<ExerciseHistory, ReadError> {
    let exercise_id: String = row.try_get("exercise_id").map_err(read_other)?;
    let max_weight: f32 = row.try_get("pr_max_weight").map_err(read_other)?;
    let sessions: String = row.try_get("sessions").map_err(read_other)?;
    let sessions: Vec<records::SessionSummary> =
        serde_json::from_str(&sessions).map_err(read_other)?;
    Ok(ExerciseHistory {
        exercise_id: Uuid::parse_str(&exercise_id).map_err(read_other)?.into(),
        personal_record: PersonalRecord {
            max_weight: domain::Weight::new(max_weight).map_err(read_other)?,
            date: row.try_get("pr_date").map_err(read_other)?,
        },
        sessions: sessions
            .into_iter()
            .map(domain::SessionSummary::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_other)?,
    })
}

fn goals_from_row(row: &SqliteRow) -> Result<UserGoals, ReadError> {
    let workouts_per_week: i64 = row.try_get("workouts_per_week").map_err(read_other)?;
    let workouts_per_week = u8::try_from(workouts_per_week).map_err(read_other)?;
    let current_streak: i64 = row.try_get("current_streak").map_err(read_other)?;
    let longest_streak: i64 = row.try_get("longest_streak").map_err(read_other)?;
    Ok(UserGoals {
        workouts_per_week: WorkoutsPerWeek::new(workouts_per_week).map_err(read_other)?,
        current_streak: u32::try_from(current_streak).map_err(read_other)?,
        longest_streak: u32::try_from(longest_streak).map_err(read_other)?,
        last_workout_date: row.try_get("last_workout_date").map_err(read_other)?,
    })
}

fn template_from_row(row: &SqliteRow) -> Result<WorkoutTemplate, ReadError> {
    let id: String = row.try_get("id").map_err(read_other)?;
    let name: String = row.try_get("name").map_err(read_other)?;
    let entries: String = row.try_get("entries").map_err(read_other)?;
    let entries: Vec<records::TemplateEntry> =
        serde_json::from_str(&entries).map_err(read_other)?;
    Ok(WorkoutTemplate {
        id: Uuid::parse_str(&id).map_err(read_other)?.into(),
        name: domain::Name::new(&name).map_err(read_other)?,
        created: row.try_get("created").map_err(read_other)?,
        entries: entries
            .into_iter()
            .map(domain::TemplateEntry::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_other)?,
    })
}

impl ExerciseRepository for SqliteStore {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        sqlx::query("SELECT * FROM exercises ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(read_other)?
            .iter()
            .map(exercise_from_row)
            .collect()
    }

    async fn read_exercise(&self, id: ExerciseID) -> Result<Option<Exercise>, ReadError> {
        sqlx::query("SELECT * FROM exercises WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(read_other)?
            .as_ref()
            .map(exercise_from_row)
            .transpose()
    }

    async fn read_exercises_by_muscle_group(
        &self,
        muscle_group: MuscleGroup,
    ) -> Result<Vec<Exercise>, ReadError> {
        sqlx::query("SELECT * FROM exercises WHERE muscle_group = ? ORDER BY name")
            .bind(muscle_group.id())
            .fetch_all(&self.pool)
            .await
            .map_err(read_other)?
            .iter()
            .map(exercise_from_row)
            .collect()
    }
}

impl WorkoutSessionRepository for SqliteStore {
    async fn read_sessions(&self) -> Result<Vec<WorkoutSession>, ReadError> {
        sqlx::query("SELECT * FROM workout_sessions ORDER BY date DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(read_other)?
            .iter()
            .map(session_from_row)
            .collect()
    }

    async fn read_session(&self, id: SessionID) -> Result<Option<WorkoutSession>, ReadError> {
        sqlx::query("SELECT * FROM workout_sessions WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(read_other)?
            .as_ref()
            .map(session_from_row)
            .transpose()
    }

    async fn read_session_on(
        &self,
        date: NaiveDate,
    ) -> Result<Option<WorkoutSession>, ReadError> {
        sqlx::query("SELECT * FROM workout_sessions WHERE date = ?")
            .bind(date)
            .fetch_optional(&self.pool)
            .await
            .map_err(read_other)?
            .as_ref()
            .map(session_from_row)
            .transpose()
    }

    async fn read_sessions_in(
        &self,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Result<Vec<WorkoutSession>, ReadError> {
        sqlx::query(
            "SELECT * FROM workout_sessions WHERE date BETWEEN ? AND ? ORDER BY date DESC",
        )
        .bind(first)
        .bind(last)
        .fetch_all(&self.pool)
        .await
        .map_err(read_other)?
        .iter()
        .map(session_from_row)
        .collect()
    }

    async fn store_session(
        &self,
        session: WorkoutSession,
    ) -> Result<WorkoutSession, WriteError> {
        let exercises = session
            .exercises
            .iter()
            .map(records::ExerciseLog::from)
            .collect::<Vec<_>>();
        let exercises = serde_json::to_string(&exercises).map_err(write_other)?;

        let mut tx = self.pool.begin().await.map_err(write_other)?;
        // Evict any other session stored under the same calendar date.
        sqlx::query("DELETE FROM workout_sessions WHERE date = ? AND id <> ?")
            .bind(session.date)
            .bind(session.id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(write_other)?;
        sqlx::query(
            "INSERT OR REPLACE INTO workout_sessions \
             (id, date, start_time, end_time, auto_grouped, exercises) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(session.id.to_string())
        .bind(session.date)
        .bind(session.start_time)
        .bind(session.end_time)
        .bind(session.auto_grouped)
        .bind(exercises)
        .execute(&mut *tx)
        .await
        .map_err(write_other)?;
        tx.commit().await.map_err(write_other)?;

        Ok(session)
    }

    async fn delete_session(&self, id: SessionID) -> Result<SessionID, DeleteError> {
        sqlx::query("DELETE FROM workout_sessions WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(delete_other)?;
        Ok(id)
    }
}

impl ExerciseHistoryRepository for SqliteStore {
    async fn read_history(&self, id: ExerciseID) -> Result<Option<ExerciseHistory>, ReadError> {
        sqlx::query("SELECT * FROM exercise_history WHERE exercise_id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(read_other)?
            .as_ref()
            .map(history_from_row)
            .transpose()
    }

    async fn read_all_history(&self) -> Result<Vec<ExerciseHistory>, ReadError> {
        sqlx::query("SELECT * FROM exercise_history")
            .fetch_all(&self.pool)
            .await
            .map_err(read_other)?
            .iter()
            .map(history_from_row)
            .collect()
    }

    async fn store_history(
        &self,
        history: ExerciseHistory,
    ) -> Result<ExerciseHistory, WriteError> {
        let sessions = history
            .sessions
            .iter()
            .map(records::SessionSummary::from)
            .collect::<Vec<_>>();
        let sessions = serde_json::to_string(&sessions).map_err(write_other)?;

        sqlx::query(
            "INSERT OR REPLACE INTO exercise_history \
             (exercise_id, pr_max_weight, pr_date, sessions) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(history.exercise_id.to_string())
        .bind(f32::from(history.personal_record.max_weight))
        .bind(history.personal_record.date)
        .bind(sessions)
        .execute(&self.pool)
        .await
        .map_err(write_other)?;

        Ok(history)
    }
}

impl GoalsRepository for SqliteStore {
    async fn read_goals(&self) -> Result<Option<UserGoals>, ReadError> {
        sqlx::query("SELECT * FROM user_goals WHERE id = 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(read_other)?
            .as_ref()
            .map(goals_from_row)
            .transpose()
    }

    async fn store_goals(&self, goals: UserGoals) -> Result<UserGoals, WriteError> {
        sqlx::query(
            "INSERT INTO user_goals \
             (id, workouts_per_week, current_streak, longest_streak, last_workout_date) \
             VALUES (1, ?, ?, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET \
             workouts_per_week = excluded.workouts_per_week, \
             current_streak = excluded.current_streak, \
             longest_streak = excluded.longest_streak, \
             last_workout_date = excluded.last_workout_date",
        )
        .bind(i64::from(u32::from(goals.workouts_per_week)))
        .bind(i64::from(goals.current_streak))
        .bind(i64::from(goals.longest_streak))
        .bind(goals.last_workout_date)
        .execute(&self.pool)
        .await
        .map_err(write_other)?;

        Ok(goals)
    }
}

impl TemplateRepository for SqliteStore {
    async fn read_templates(&self) -> Result<Vec<WorkoutTemplate>, ReadError> {
        sqlx::query("SELECT * FROM workout_templates ORDER BY created DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(read_other)?
            .iter()
            .map(template_from_row)
            .collect()
    }

    async fn read_template(
        &self,
        id: TemplateID,
    ) -> Result<Option<WorkoutTemplate>, ReadError> {
        sqlx::query("SELECT * FROM workout_templates WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(read_other)?
            .as_ref()
            .map(template_from_row)
            .transpose()
    }

    async fn store_template(
        &self,
        template: WorkoutTemplate,
    ) -> Result<WorkoutTemplate, WriteError> {
        let entries = template
            .entries
            .iter()
            .map(records::TemplateEntry::from)
            .collect::<Vec<_>>();
        let entries = serde_json::to_string(&entries).map_err(write_other)?;

        sqlx::query(
            "INSERT OR REPLACE INTO workout_templates (id, name, created, entries) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(template.id.to_string())
        .bind(template.name.to_string())
        .bind(template.created)
        .bind(entries)
        .execute(&self.pool)
        .await
        .map_err(write_other)?;

        Ok(template)
    }

    async fn delete_template(&self, id: TemplateID) -> Result<TemplateID, DeleteError> {
        sqlx::query("DELETE FROM workout_templates WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(delete_other)?;
        Ok(id)
    }
}
