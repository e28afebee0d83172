use chrono::Duration;
use uuid::Uuid;

use crate::{ExerciseLog, SessionID, WorkoutSession};

/// Reconstructs discrete workout sessions from a flat list of timestamped
/// exercise logs.
///
/// Logs are sorted by timestamp; a gap of strictly more than two hours
/// between adjacent logs starts a new session. Each reconstructed session
/// is marked `auto_grouped`, dated by its first log, with start/end times
/// taken from its first/last logs. Deterministic for a given input.
#[must_use]
pub fn group_by_proximity(exercise_logs: Vec<ExerciseLog>) -> Vec<WorkoutSession> {
    let mut exercise_logs = exercise_logs;
    exercise_logs.sort_by_key(|l| l.timestamp);

    let mut sessions = vec![];
    let mut group: Vec<ExerciseLog> = vec![];

    for exercise_log in exercise_logs {
        if let Some(last) = group.last() {
            if exercise_log.timestamp - last.timestamp > Duration::hours(2) {
                sessions.extend(close_group(std::mem::take(&mut group)));
            }
        }
        group.push(exercise_log);
    }
    sessions.extend(close_group(group));

    sessions
}

fn close_group(exercise_logs: Vec<ExerciseLog>) -> Option<WorkoutSession> {
    let start_time = exercise_logs.first()?.timestamp;
    let end_time = exercise_logs.last()?.timestamp;

    Some(WorkoutSession {
        id: SessionID::from(Uuid::new_v4()),
        date: start_time.date_naive(),
        start_time,
        end_time: Some(end_time),
        exercises: exercise_logs,
        auto_grouped: true,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate, Utc};
    use pretty_assertions::assert_eq;

    use crate::Name;

    use super::*;

    fn log(hour: u32, minute: u32) -> ExerciseLog {
        ExerciseLog {
            id: u128::from(hour * 60 + minute).into(),
            exercise_id: 1.into(),
            exercise_name: Name::new("Squat").unwrap(),
            sets: vec![],
            notes: None,
            timestamp: timestamp(hour, minute),
        }
    }

    fn timestamp(hour: u32, minute: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn test_group_by_proximity_empty() {
        assert_eq!(group_by_proximity(vec![]), vec![]);
    }

    #[test]
    fn test_group_by_proximity_single_log() {
        let sessions = group_by_proximity(vec![log(9, 0)]);
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].exercises.len(), 1);
        assert_eq!(sessions[0].start_time, timestamp(9, 0));
        assert_eq!(sessions[0].end_time, Some(timestamp(9, 0)));
        assert!(sessions[0].auto_grouped);
    }

    #[test]
    fn test_group_by_proximity_splits_on_gap_over_two_hours() {
        // 11:45 → 14:00 is 2 h 15 min, strictly over the threshold.
        let sessions =
            group_by_proximity(vec![log(9, 0), log(9, 30), log(11, 45), log(14, 0)]);
        assert_eq!(
            sessions
                .iter()
                .map(|s| s.exercises.len())
                .collect::<Vec<_>>(),
            vec![3, 1]
        );
        assert_eq!(sessions[0].start_time, timestamp(9, 0));
        assert_eq!(sessions[0].end_time, Some(timestamp(11, 45)));
        assert_eq!(sessions[1].start_time, timestamp(14, 0));
        assert_eq!(sessions[0].date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
    }

    #[test]
    fn test_group_by_proximity_keeps_gap_of_exactly_two_hours() {
        let sessions = group_by_proximity(vec![log(9, 0), log(11, 0)]);
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].exercises.len(), 2);
    }

    #[test]
    fn test_group_by_proximity_sorts_input() {
        let sessions = group_by_proximity(vec![log(14, 0), log(9, 0), log(9, 30)]);
        assert_eq!(
            sessions
                .iter()
                .map(|s| s.exercises.len())
                .collect::<Vec<_>>(),
            vec![2, 1]
        );
        assert_eq!(sessions[0].exercises[0].timestamp, timestamp(9, 0));
    }
}
