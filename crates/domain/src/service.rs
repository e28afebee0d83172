use std::collections::{BTreeMap, BTreeSet};

use chrono::{Local, NaiveDate};
use log::{debug, error};

use crate::{
    DayStreaks, DeleteError, Exercise, ExerciseHistory, ExerciseHistoryRepository,
    ExerciseHistoryService, ExerciseID, ExerciseLog, ExerciseRepository, ExerciseService,
    GoalsRepository, GoalsService, MuscleGroup, PrStatus, ProgressService, ReadError, SessionID,
    TemplateID, TemplateRepository, TemplateService, UserGoals, WorkoutSession,
    WorkoutSessionRepository, WorkoutSessionService, WorkoutTemplate, WriteError, day_streaks,
    exercise_pr_status, session_pr_status, weekly_streak,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::Unavailable) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(self.repository.read_exercises(), ReadError, "get", "exercises")
    }

    async fn get_exercise(&self, id: ExerciseID) -> Result<Option<Exercise>, ReadError> {
        log_on_error!(self.repository.read_exercise(id), ReadError, "get", "exercise")
    }

    async fn get_exercises_by_muscle_group(
        &self,
        muscle_group: MuscleGroup,
    ) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises_by_muscle_group(muscle_group),
            ReadError,
            "get",
            "exercises by muscle group"
        )
    }

    async fn search_exercises(&self, query: &str) -> Result<Vec<Exercise>, ReadError> {
        let query = query.trim().to_lowercase();
        let exercises =
            log_on_error!(self.repository.read_exercises(), ReadError, "search", "exercises")?;
        if query.is_empty() {
            return Ok(exercises);
        }
        Ok(exercises
            .into_iter()
            .filter(|e| e.name.as_ref().to_lowercase().contains(&query))
            .collect())
    }
}

impl<R> WorkoutSessionService for Service<R>
where
    R: WorkoutSessionRepository + ExerciseHistoryRepository,
{
    async fn save_session(&self, session: WorkoutSession) -> Result<WorkoutSession, WriteError> {
        let session = log_on_error!(
            self.repository.store_session(session),
            WriteError,
            "store",
            "workout session"
        )?;

        for exercise_log in &session.exercises {
            let Some(summary) = exercise_log.summary(session.date) else {
                continue;
            };
            let history = match self.repository.read_history(exercise_log.exercise_id).await? {
                Some(mut history) => {
                    history.record(summary);
                    history
                }
                None => ExerciseHistory::start(exercise_log.exercise_id, summary),
            };
            log_on_error!(
                self.repository.store_history(history),
                WriteError,
                "store",
                "exercise history"
            )?;
        }

        Ok(session)
    }

    async fn get_sessions(&self) -> Result<Vec<WorkoutSession>, ReadError> {
        log_on_error!(self.repository.read_sessions(), ReadError, "get", "workout sessions")
    }

    async fn get_session(&self, id: SessionID) -> Result<Option<WorkoutSession>, ReadError> {
        log_on_error!(self.repository.read_session(id), ReadError, "get", "workout session")
    }

    async fn get_session_on(&self, date: NaiveDate) -> Result<Option<WorkoutSession>, ReadError> {
        log_on_error!(
            self.repository.read_session_on(date),
            ReadError,
            "get",
            "workout session by date"
        )
    }

    async fn get_sessions_in(
        &self,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Result<Vec<WorkoutSession>, ReadError> {
        log_on_error!(
            self.repository.read_sessions_in(first, last),
            ReadError,
            "get",
            "workout sessions by date range"
        )
    }

    async fn delete_session(&self, id: SessionID) -> Result<SessionID, DeleteError> {
        log_on_error!(
            self.repository.delete_session(id),
            DeleteError,
            "delete",
            "workout session"
        )
    }
}

impl<R: ExerciseHistoryRepository> ExerciseHistoryService for Service<R> {
    async fn get_exercise_history(
        &self,
        id: ExerciseID,
    ) -> Result<Option<ExerciseHistory>, ReadError> {
        log_on_error!(self.repository.read_history(id), ReadError, "get", "exercise history")
    }

    async fn get_all_exercise_history(&self) -> Result<Vec<ExerciseHistory>, ReadError> {
        log_on_error!(
            self.repository.read_all_history(),
            ReadError,
            "get",
            "exercise histories"
        )
    }
}

impl<R> GoalsService for Service<R>
where
    R: GoalsRepository + WorkoutSessionRepository,
{
    async fn get_user_goals(&self) -> Result<UserGoals, WriteError> {
        let goals = log_on_error!(self.repository.read_goals(), ReadError, "get", "user goals")?;
        match goals {
            Some(goals) => Ok(goals),
            None => {
                log_on_error!(
                    self.repository.store_goals(UserGoals::default()),
                    WriteError,
                    "initialize",
                    "user goals"
                )
            }
        }
    }

    async fn save_user_goals(&self, goals: UserGoals) -> Result<UserGoals, WriteError> {
        log_on_error!(self.repository.store_goals(goals), WriteError, "store", "user goals")
    }

    async fn update_streak_data(&self) -> Result<UserGoals, WriteError> {
        let mut goals = self.get_user_goals().await?;
        let sessions =
            log_on_error!(self.repository.read_sessions(), ReadError, "get", "workout sessions")?;

        if sessions.is_empty() {
            goals.current_streak = 0;
            goals.last_workout_date = None;
        } else {
            let dates = sessions.iter().map(|s| s.date).collect::<Vec<_>>();
            let today = Local::now().date_naive();
            goals.current_streak = weekly_streak(&dates, goals.workouts_per_week, today);
            goals.longest_streak = goals.longest_streak.max(goals.current_streak);
            goals.last_workout_date = dates.iter().max().copied();
        }

        log_on_error!(self.repository.store_goals(goals), WriteError, "store", "user goals")
    }
}

impl<R: TemplateRepository> TemplateService for Service<R> {
    async fn get_templates(&self) -> Result<Vec<WorkoutTemplate>, ReadError> {
        log_on_error!(self.repository.read_templates(), ReadError, "get", "workout templates")
    }

    async fn get_template(&self, id: TemplateID) -> Result<Option<WorkoutTemplate>, ReadError> {
        log_on_error!(self.repository.read_template(id), ReadError, "get", "workout template")
    }

    async fn save_template(
        &self,
        template: WorkoutTemplate,
    ) -> Result<WorkoutTemplate, WriteError> {
        log_on_error!(
            self.repository.store_template(template),
            WriteError,
            "store",
            "workout template"
        )
    }

    async fn delete_template(&self, id: TemplateID) -> Result<TemplateID, DeleteError> {
        log_on_error!(
            self.repository.delete_template(id),
            DeleteError,
            "delete",
            "workout template"
        )
    }
}

impl<R> ProgressService for Service<R>
where
    R: ExerciseHistoryRepository + WorkoutSessionRepository,
{
    async fn exercise_pr_status(&self, exercise_log: &ExerciseLog, as_of: NaiveDate) -> PrStatus {
        match self.repository.read_history(exercise_log.exercise_id).await {
            Ok(history) => exercise_pr_status(exercise_log, history.as_ref(), as_of),
            Err(err) => {
                error!("failed to get exercise history: {err}");
                PrStatus::NoData
            }
        }
    }

    async fn session_pr_status(&self, session: &WorkoutSession) -> PrStatus {
        match self.repository.read_all_history().await {
            Ok(histories) => {
                let histories = histories
                    .into_iter()
                    .map(|h| (h.exercise_id, h))
                    .collect::<BTreeMap<_, _>>();
                session_pr_status(session, &histories)
            }
            Err(err) => {
                error!("failed to get exercise histories: {err}");
                PrStatus::NoData
            }
        }
    }

    async fn get_day_streaks(&self) -> DayStreaks {
        match self.repository.read_sessions().await {
            Ok(sessions) => {
                let dates = sessions.iter().map(|s| s.date).collect::<BTreeSet<_>>();
                day_streaks(&dates, Local::now().date_naive())
            }
            Err(err) => {
                error!("failed to get workout sessions: {err}");
                DayStreaks::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::{DateTime, Duration, Utc};
    use pretty_assertions::assert_eq;

    use crate::{ExerciseLogID, Name, Reps, SetLog, Weight, catalog};

    use super::*;

    #[derive(Default)]
    struct FakeRepository {
        exercises: RefCell<BTreeMap<ExerciseID, Exercise>>,
        sessions: RefCell<BTreeMap<SessionID, WorkoutSession>>,
        histories: RefCell<BTreeMap<ExerciseID, ExerciseHistory>>,
        goals: RefCell<Option<UserGoals>>,
        templates: RefCell<BTreeMap<TemplateID, WorkoutTemplate>>,
    }

    impl ExerciseRepository for FakeRepository {
        async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
            Ok(self.exercises.borrow().values().cloned().collect())
        }

        async fn read_exercise(&self, id: ExerciseID) -> Result<Option<Exercise>, ReadError> {
            Ok(self.exercises.borrow().get(&id).cloned())
        }

        async fn read_exercises_by_muscle_group(
            &self,
            muscle_group: MuscleGroup,
        ) -> Result<Vec<Exercise>, ReadError> {
            Ok(self
                .exercises
                .borrow()
                .values()
                .filter(|e| e.muscle_group == muscle_group)
                .cloned()
                .collect())
        }
    }

    impl WorkoutSessionRepository for FakeRepository {
        async fn read_sessions(&self) -> Result<Vec<WorkoutSession>, ReadError> {
            let mut sessions = self
                .sessions
                .borrow()
                .values()
                .cloned()
                .collect::<Vec<_>>();
            sessions.sort_by_key(|s| std::cmp::Reverse(s.date));
            Ok(sessions)
        }

        async fn read_session(&self, id: SessionID) -> Result<Option<WorkoutSession>, ReadError> {
            Ok(self.sessions.borrow().get(&id).cloned())
        }

        async fn read_session_on(
            &self,
            date: NaiveDate,
        ) -> Result<Option<WorkoutSession>, ReadError> {
            Ok(self
                .sessions
                .borrow()
                .values()
                .find(|s| s.date == date)
                .cloned())
        }

        async fn read_sessions_in(
            &self,
            first: NaiveDate,
            last: NaiveDate,
        ) -> Result<Vec<WorkoutSession>, ReadError> {
            Ok(self
                .sessions
                .borrow()
                .values()
                .filter(|s| s.date >= first && s.date <= last)
                .cloned()
                .collect())
        }

        async fn store_session(
            &self,
            session: WorkoutSession,
        ) -> Result<WorkoutSession, WriteError> {
            let mut sessions = self.sessions.borrow_mut();
            sessions.retain(|id, s| *id == session.id || s.date != session.date);
            sessions.insert(session.id, session.clone());
            Ok(session)
        }

        async fn delete_session(&self, id: SessionID) -> Result<SessionID, DeleteError> {
            self.sessions.borrow_mut().remove(&id);
            Ok(id)
        }
    }

    impl ExerciseHistoryRepository for FakeRepository {
        async fn read_history(
            &self,
            id: ExerciseID,
        ) -> Result<Option<ExerciseHistory>, ReadError> {
            Ok(self.histories.borrow().get(&id).cloned())
        }

        async fn read_all_history(&self) -> Result<Vec<ExerciseHistory>, ReadError> {
            Ok(self.histories.borrow().values().cloned().collect())
        }

        async fn store_history(
            &self,
            history: ExerciseHistory,
        ) -> Result<ExerciseHistory, WriteError> {
            self.histories
                .borrow_mut()
                .insert(history.exercise_id, history.clone());
            Ok(history)
        }
    }

    impl GoalsRepository for FakeRepository {
        async fn read_goals(&self) -> Result<Option<UserGoals>, ReadError> {
            Ok(*self.goals.borrow())
        }

        async fn store_goals(&self, goals: UserGoals) -> Result<UserGoals, WriteError> {
            *self.goals.borrow_mut() = Some(goals);
            Ok(goals)
        }
    }

    impl TemplateRepository for FakeRepository {
        async fn read_templates(&self) -> Result<Vec<WorkoutTemplate>, ReadError> {
            Ok(self.templates.borrow().values().cloned().collect())
        }

        async fn read_template(
            &self,
            id: TemplateID,
        ) -> Result<Option<WorkoutTemplate>, ReadError> {
            Ok(self.templates.borrow().get(&id).cloned())
        }

        async fn store_template(
            &self,
            template: WorkoutTemplate,
        ) -> Result<WorkoutTemplate, WriteError> {
            self.templates
                .borrow_mut()
                .insert(template.id, template.clone());
            Ok(template)
        }

        async fn delete_template(&self, id: TemplateID) -> Result<TemplateID, DeleteError> {
            self.templates.borrow_mut().remove(&id);
            Ok(id)
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn set(weight: f32) -> SetLog {
        SetLog {
            set_number: 1,
            reps: Reps::new(5).unwrap(),
            weight: Weight::new(weight).unwrap(),
            completed: true,
        }
    }

    fn session(id: u128, day: u32, exercise_id: u128, weight: f32) -> WorkoutSession {
        let start_time = DateTime::from_timestamp(1_717_200_000, 0).unwrap()
            + Duration::days(i64::from(day));
        WorkoutSession {
            id: SessionID::from(id),
            date: date(day),
            start_time,
            end_time: Some(start_time + Duration::hours(1)),
            exercises: vec![ExerciseLog {
                id: ExerciseLogID::from(id),
                exercise_id: exercise_id.into(),
                exercise_name: Name::new("Squat").unwrap(),
                sets: vec![set(weight)],
                notes: None,
                timestamp: start_time,
            }],
            auto_grouped: false,
        }
    }

    #[tokio::test]
    async fn test_search_exercises() {
        let repository = FakeRepository::default();
        for exercise in catalog::exercises() {
            repository
                .exercises
                .borrow_mut()
                .insert(exercise.id, exercise);
        }
        let service = Service::new(repository);

        let result = service.search_exercises("BENCH press").await.unwrap();
        assert!(!result.is_empty());
        assert!(
            result
                .iter()
                .all(|e| e.name.as_ref().to_lowercase().contains("bench press"))
        );

        let all = service.search_exercises("  ").await.unwrap();
        assert_eq!(all.len(), catalog::exercises().len());
    }

    #[tokio::test]
    async fn test_save_session_aggregates_history() {
        let service = Service::new(FakeRepository::default());

        service.save_session(session(1, 3, 7, 100.0)).await.unwrap();
        service.save_session(session(2, 4, 7, 110.0)).await.unwrap();

        let history = service.get_exercise_history(7.into()).await.unwrap().unwrap();
        assert_eq!(history.personal_record.max_weight, Weight::new(110.0).unwrap());
        assert_eq!(history.personal_record.date, date(4));
        assert_eq!(
            history.sessions.iter().map(|s| s.date).collect::<Vec<_>>(),
            vec![date(3), date(4)]
        );
    }

    #[tokio::test]
    async fn test_save_session_resave_is_idempotent() {
        let service = Service::new(FakeRepository::default());

        service.save_session(session(1, 3, 7, 110.0)).await.unwrap();
        service.save_session(session(1, 3, 7, 100.0)).await.unwrap();

        let history = service.get_exercise_history(7.into()).await.unwrap().unwrap();
        // The summary is replaced in place, the record is never rolled back.
        assert_eq!(history.sessions.len(), 1);
        assert_eq!(
            history.sessions[0].max_weight,
            Weight::new(100.0).unwrap()
        );
        assert_eq!(
            history.personal_record.max_weight,
            Weight::new(110.0).unwrap()
        );
    }

    #[tokio::test]
    async fn test_save_session_skips_logs_without_completed_sets() {
        let service = Service::new(FakeRepository::default());

        let mut s = session(1, 3, 7, 100.0);
        s.exercises[0].sets.clear();
        service.save_session(s).await.unwrap();

        assert_eq!(service.get_exercise_history(7.into()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_session_replaces_same_date_session() {
        let service = Service::new(FakeRepository::default());

        service.save_session(session(1, 3, 7, 100.0)).await.unwrap();
        service.save_session(session(2, 3, 7, 105.0)).await.unwrap();

        let sessions = service.get_sessions().await.unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].id, SessionID::from(2_u128));
    }

    #[tokio::test]
    async fn test_get_user_goals_creates_defaults() {
        let service = Service::new(FakeRepository::default());

        let goals = service.get_user_goals().await.unwrap();
        assert_eq!(goals, UserGoals::default());
        // Defaults are persisted, not just returned.
        assert_eq!(
            service.repository.goals.borrow().as_ref(),
            Some(&UserGoals::default())
        );
    }

    #[tokio::test]
    async fn test_update_streak_data_without_sessions() {
        let service = Service::new(FakeRepository::default());
        *service.repository.goals.borrow_mut() = Some(UserGoals {
            current_streak: 3,
            longest_streak: 5,
            last_workout_date: Some(date(1)),
            ..UserGoals::default()
        });

        let goals = service.update_streak_data().await.unwrap();
        assert_eq!(goals.current_streak, 0);
        assert_eq!(goals.longest_streak, 5);
        assert_eq!(goals.last_workout_date, None);
    }

    #[tokio::test]
    async fn test_update_streak_data_tracks_last_workout_date() {
        let service = Service::new(FakeRepository::default());
        service.save_session(session(1, 3, 7, 100.0)).await.unwrap();
        service.save_session(session(2, 9, 7, 100.0)).await.unwrap();

        let goals = service.update_streak_data().await.unwrap();
        assert_eq!(goals.last_workout_date, Some(date(9)));
        // Sessions far in the past cannot satisfy the current week.
        assert_eq!(goals.current_streak, 0);
    }

    #[tokio::test]
    async fn test_exercise_pr_status_via_service() {
        let service = Service::new(FakeRepository::default());
        service.save_session(session(1, 3, 7, 100.0)).await.unwrap();

        let newer = session(2, 4, 7, 105.0);
        assert_eq!(
            service
                .exercise_pr_status(&newer.exercises[0], newer.date)
                .await,
            PrStatus::Pr
        );
        assert_eq!(service.session_pr_status(&newer).await, PrStatus::Pr);

        let unknown = session(3, 4, 8, 105.0);
        assert_eq!(
            service
                .exercise_pr_status(&unknown.exercises[0], unknown.date)
                .await,
            PrStatus::NoData
        );
    }

    #[tokio::test]
    async fn test_get_day_streaks_empty() {
        let service = Service::new(FakeRepository::default());
        assert_eq!(service.get_day_streaks().await, DayStreaks::default());
    }

    #[tokio::test]
    async fn test_template_round_trip() {
        let service = Service::new(FakeRepository::default());
        let template = WorkoutTemplate {
            id: TemplateID::from(1_u128),
            name: Name::new("Push Day").unwrap(),
            created: date(1),
            entries: vec![],
        };

        service.save_template(template.clone()).await.unwrap();
        assert_eq!(
            service.get_template(template.id).await.unwrap(),
            Some(template.clone())
        );

        service.delete_template(template.id).await.unwrap();
        assert_eq!(service.get_template(template.id).await.unwrap(), None);
    }
}
