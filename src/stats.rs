use crate::models::{GoalStatus, Sample, SeriesData, SeriesPoint, SummaryResponse};
use crate::series::SeriesStore;
use chrono::{Duration, Local, NaiveDate};

/// The chronologically latest sample, or `None` on an empty series.
pub fn current_value(series: &SeriesData) -> Option<Sample> {
    series
        .samples
        .iter()
        .next_back()
        .map(|(date, weight)| Sample {
            date: *date,
            weight: *weight,
        })
}

/// Change over a trailing window: the sample at `as_of` minus the nearest
/// sample at or before `as_of - window_days`. Positive means weight went up.
/// `None` when `as_of` has no sample, no anchor exists, or fewer than two
/// samples are recorded.
pub fn windowed_change(series: &SeriesData, as_of: NaiveDate, window_days: i64) -> Option<f64> {
    if series.samples.len() < 2 {
        return None;
    }
    let latest = *series.samples.get(&as_of)?;
    let boundary = as_of - Duration::days(window_days);
    let anchor = series
        .samples
        .range(..=boundary)
        .next_back()
        .map(|(_, weight)| *weight)?;
    Some(latest - anchor)
}

/// Consecutive days with an entry, walking backward from `as_of`. If `as_of`
/// itself has no entry yet, the walk starts at the day before, so last
/// night's run survives until tonight. No entry on either day means 0.
pub fn streak(series: &SeriesData, as_of: NaiveDate) -> u32 {
    let anchor = if series.samples.contains_key(&as_of) {
        as_of
    } else if series.samples.contains_key(&(as_of - Duration::days(1))) {
        as_of - Duration::days(1)
    } else {
        return 0;
    };

    let mut day = anchor;
    let mut run = 0u32;
    while series.samples.contains_key(&day) {
        run += 1;
        day = day - Duration::days(1);
    }
    run
}

/// Fraction of the distance from the starting weight to the goal that has
/// been closed: `clamp01(1 - (current - goal) / (first - goal))`. `None`
/// when the goal is unset or the series is empty. When the first sample
/// already sits on the goal, a current sample on the goal counts as done.
pub fn goal_progress(series: &SeriesData, goal: Option<f64>) -> Option<f64> {
    let target = goal?;
    let first = *series.samples.values().next()?;
    let current = *series.samples.values().next_back()?;

    let span = first - target;
    if span.abs() < f64::EPSILON {
        return Some(if (current - target).abs() < f64::EPSILON {
            1.0
        } else {
            0.0
        });
    }
    let fraction = 1.0 - (current - target) / span;
    Some(fraction.clamp(0.0, 1.0))
}

pub fn build_summary(store: &SeriesStore) -> SummaryResponse {
    build_summary_at(Local::now().date_naive(), store)
}

/// One dashboard snapshot. Weekly and monthly change anchor at the latest
/// sample date; the streak anchors at `today`.
pub fn build_summary_at(today: NaiveDate, store: &SeriesStore) -> SummaryResponse {
    let series = store.series();
    let current = current_value(series);
    let (change_week, change_month) = match current {
        Some(latest) => (
            windowed_change(series, latest.date, 7),
            windowed_change(series, latest.date, 30),
        ),
        None => (None, None),
    };
    let percent = goal_progress(series, store.goal()).map(|fraction| fraction * 100.0);

    SummaryResponse {
        entry_count: series.samples.len(),
        current: current.map(|sample| SeriesPoint {
            date: sample.date.to_string(),
            weight: sample.weight,
        }),
        change_week,
        change_month,
        streak_days: streak(series, today),
        goal: GoalStatus {
            target: store.goal(),
            percent,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalData;

    fn series(entries: &[(&str, f64)]) -> SeriesData {
        let mut data = SeriesData::default();
        for (date, weight) in entries {
            data.samples.insert(date.parse().unwrap(), *weight);
        }
        data
    }

    fn day(input: &str) -> NaiveDate {
        input.parse().unwrap()
    }

    #[test]
    fn current_value_empty_series_has_no_data() {
        assert_eq!(current_value(&SeriesData::default()), None);
    }

    #[test]
    fn current_value_picks_the_latest_date() {
        let data = series(&[("2024-01-01", 70.0), ("2024-01-10", 68.0)]);
        let current = current_value(&data).unwrap();
        assert_eq!(current.date, day("2024-01-10"));
        assert_eq!(current.weight, 68.0);
    }

    #[test]
    fn windowed_change_uses_nearest_anchor_at_or_before_boundary() {
        let data = series(&[("2024-01-01", 70.0), ("2024-01-08", 68.0)]);
        let change = windowed_change(&data, day("2024-01-08"), 7);
        assert_eq!(change, Some(-2.0));
    }

    #[test]
    fn windowed_change_anchor_need_not_be_an_exact_day_match() {
        // boundary is 01-05; the anchor is the older 01-02 sample
        let data = series(&[("2024-01-02", 71.0), ("2024-01-12", 69.5)]);
        let change = windowed_change(&data, day("2024-01-12"), 7);
        assert_eq!(change, Some(-1.5));
    }

    #[test]
    fn windowed_change_unavailable_without_sample_on_as_of() {
        let data = series(&[("2024-01-01", 70.0), ("2024-01-08", 68.0)]);
        assert_eq!(windowed_change(&data, day("2024-01-09"), 7), None);
    }

    #[test]
    fn windowed_change_unavailable_without_anchor_or_enough_samples() {
        let data = series(&[("2024-01-05", 70.0), ("2024-01-08", 68.0)]);
        // boundary is 01-01, nothing at or before it
        assert_eq!(windowed_change(&data, day("2024-01-08"), 7), None);

        let single = series(&[("2024-01-08", 68.0)]);
        assert_eq!(windowed_change(&single, day("2024-01-08"), 7), None);
    }

    #[test]
    fn streak_stops_at_the_first_missing_day() {
        let data = series(&[
            ("2024-06-01", 80.0),
            ("2024-06-02", 79.0),
            ("2024-06-04", 78.0),
        ]);
        assert_eq!(streak(&data, day("2024-06-04")), 1);
    }

    #[test]
    fn streak_counts_an_unbroken_run() {
        let data = series(&[
            ("2024-06-01", 80.0),
            ("2024-06-02", 79.5),
            ("2024-06-03", 79.0),
        ]);
        assert_eq!(streak(&data, day("2024-06-03")), 3);
    }

    #[test]
    fn streak_falls_back_one_day_when_anchor_is_missing() {
        let data = series(&[
            ("2024-06-01", 80.0),
            ("2024-06-02", 79.5),
            ("2024-06-03", 79.0),
        ]);
        // nothing logged on 06-04 yet; yesterday's run still counts
        assert_eq!(streak(&data, day("2024-06-04")), 3);
        // two days later the run is gone
        assert_eq!(streak(&data, day("2024-06-05")), 0);
    }

    #[test]
    fn streak_is_zero_on_an_empty_series() {
        assert_eq!(streak(&SeriesData::default(), day("2024-06-04")), 0);
    }

    #[test]
    fn goal_progress_interpolates_between_start_and_goal() {
        let data = series(&[("2024-01-01", 80.0), ("2024-02-01", 75.0)]);
        assert_eq!(goal_progress(&data, Some(70.0)), Some(0.5));
    }

    #[test]
    fn goal_progress_clamps_to_the_unit_interval() {
        // overshot the goal
        let data = series(&[("2024-01-01", 80.0), ("2024-02-01", 68.0)]);
        assert_eq!(goal_progress(&data, Some(70.0)), Some(1.0));

        // moved away from the goal
        let data = series(&[("2024-01-01", 80.0), ("2024-02-01", 83.0)]);
        assert_eq!(goal_progress(&data, Some(70.0)), Some(0.0));
    }

    #[test]
    fn goal_progress_needs_a_goal_and_data() {
        let data = series(&[("2024-01-01", 80.0)]);
        assert_eq!(goal_progress(&data, None), None);
        assert_eq!(goal_progress(&SeriesData::default(), Some(70.0)), None);
    }

    #[test]
    fn goal_progress_handles_a_start_already_on_goal() {
        let data = series(&[("2024-01-01", 70.0), ("2024-02-01", 70.0)]);
        assert_eq!(goal_progress(&data, Some(70.0)), Some(1.0));

        let data = series(&[("2024-01-01", 70.0), ("2024-02-01", 72.0)]);
        assert_eq!(goal_progress(&data, Some(70.0)), Some(0.0));
    }

    #[test]
    fn summary_on_an_empty_store() {
        let store = SeriesStore::default();
        let summary = build_summary_at(day("2024-06-04"), &store);
        assert_eq!(summary.entry_count, 0);
        assert!(summary.current.is_none());
        assert_eq!(summary.change_week, None);
        assert_eq!(summary.change_month, None);
        assert_eq!(summary.streak_days, 0);
        assert_eq!(summary.goal.target, None);
        assert_eq!(summary.goal.percent, None);
    }

    #[test]
    fn summary_reports_changes_streak_and_goal_percent() {
        let data = series(&[
            ("2024-01-01", 80.0),
            ("2024-05-28", 76.5),
            ("2024-06-03", 75.5),
            ("2024-06-04", 75.0),
        ]);
        let store = SeriesStore::new(data, GoalData { target: Some(70.0) });
        let summary = build_summary_at(day("2024-06-04"), &store);

        assert_eq!(summary.entry_count, 4);
        assert_eq!(summary.current.as_ref().unwrap().weight, 75.0);
        // week boundary 05-28 has an exact sample
        assert_eq!(summary.change_week, Some(-1.5));
        // month boundary 05-05 anchors at the January sample
        assert_eq!(summary.change_month, Some(-5.0));
        assert_eq!(summary.streak_days, 2);
        assert_eq!(summary.goal.target, Some(70.0));
        assert_eq!(summary.goal.percent, Some(50.0));
    }
}
