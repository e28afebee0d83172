use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Duration, NaiveDate};

use crate::WorkoutsPerWeek;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DayStreaks {
    pub current: u32,
    pub longest: u32,
}

/// Day-based streaks over the set of workout dates.
///
/// The current streak walks backward from `today` and tolerates a single
/// skipped day per step (one rest day does not break it; two consecutive
/// workout-free days do). The longest streak is the longest run of strictly
/// calendar-consecutive dates, without the rest-day tolerance.
#[must_use]
pub fn day_streaks(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> DayStreaks {
    let dates = dates.iter().copied().collect::<Vec<_>>();

    let mut current = 0;
    let mut check_date = today;
    let mut i = dates.len();
    while i > 0 {
        let days_diff = (check_date - dates[i - 1]).num_days();
        if days_diff == 0 {
            current += 1;
            check_date -= Duration::days(1);
            i -= 1;
        } else if days_diff == 1 {
            // Rest day: step back and recheck the same workout date.
            check_date -= Duration::days(1);
        } else {
            break;
        }
    }

    let mut longest = 0;
    let mut run = 0;
    let mut last_date: Option<NaiveDate> = None;
    for date in &dates {
        run = match last_date {
            Some(last) if (*date - last).num_days() == 1 => run + 1,
            Some(_) => {
                longest = longest.max(run);
                1
            }
            None => 1,
        };
        last_date = Some(*date);
    }

    DayStreaks {
        current,
        longest: longest.max(run),
    }
}

/// The Monday of the week the date falls in.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Week-based streak: walking backward from the current week, a week counts
/// while its session count reaches `workouts_per_week`; the first week below
/// the target (the current, possibly incomplete week included) stops the
/// walk.
#[must_use]
pub fn weekly_streak(
    dates: &[NaiveDate],
    workouts_per_week: WorkoutsPerWeek,
    today: NaiveDate,
) -> u32 {
    let mut counts: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for date in dates {
        *counts.entry(week_start(*date)).or_default() += 1;
    }

    let target = u32::from(workouts_per_week);
    let mut streak = 0;
    let mut week = week_start(today);
    while counts.get(&week).copied().unwrap_or(0) >= target {
        streak += 1;
        week -= Duration::days(7);
    }
    streak
}
