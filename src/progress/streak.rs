//! Streak lengths

use chrono::{Duration, NaiveDate};

use crate::models::ActivityMap;

fn solved_on(activity: &ActivityMap, day: NaiveDate) -> bool {
    activity.get(&day).is_some_and(|&count| count > 0)
}

/// Consecutive active days ending today.
///
/// A streak that ended yesterday still counts while today has no activity
/// yet; anything older is broken.
pub fn current_streak(activity: &ActivityMap, today: NaiveDate) -> u32 {
    let start = if solved_on(activity, today) {
        today
    } else {
        let yesterday = today - Duration::days(1);
        if !solved_on(activity, yesterday) {
            return 0;
        }
        yesterday
    };

    let mut streak = 0;
    let mut day = start;
    while solved_on(activity, day) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}

/// Longest run of consecutive active days
pub fn longest_streak(activity: &ActivityMap) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for (&day, _) in activity.iter().filter(|&(_, &count)| count > 0) {
        run = match previous {
            Some(prev) if day - prev == Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, d).unwrap()
    }

    fn activity(days: &[(u32, u32)]) -> ActivityMap {
        days.iter().map(|&(d, c)| (date(d), c)).collect()
    }

    #[test]
    fn test_current_streak_including_today() {
        let map = activity(&[(8, 1), (9, 2), (10, 1)]);
        assert_eq!(current_streak(&map, date(10)), 3);
    }

    #[test]
    fn test_current_streak_ending_yesterday() {
        let map = activity(&[(8, 1), (9, 2)]);
        assert_eq!(current_streak(&map, date(10)), 2);
    }

    #[test]
    fn test_current_streak_broken() {
        let map = activity(&[(7, 1), (8, 1)]);
        assert_eq!(current_streak(&map, date(10)), 0);
        assert_eq!(current_streak(&ActivityMap::new(), date(10)), 0);
    }

    #[test]
    fn test_zero_counts_do_not_extend_streaks() {
        let map = activity(&[(8, 1), (9, 0), (10, 1)]);
        assert_eq!(current_streak(&map, date(10)), 1);
        assert_eq!(longest_streak(&map), 1);
    }

    #[test]
    fn test_longest_streak() {
        let map = activity(&[(1, 1), (2, 1), (3, 3), (5, 1), (6, 1), (20, 2)]);
        assert_eq!(longest_streak(&map), 3);
        assert_eq!(longest_streak(&ActivityMap::new()), 0);
    }

    #[test]
    fn test_longest_streak_across_month_boundary() {
        let map: ActivityMap = [
            (NaiveDate::from_ymd_opt(2025, 10, 31).unwrap(), 1),
            (NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(), 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(longest_streak(&map), 2);
    }
}
