use crate::models::{Sample, SeriesData};
use chrono::{Duration, Local, NaiveDate};

/// Trailing window selectable from the chart tabs, or a bare day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Range {
    All,
    Week,
    Month,
    ThreeMonths,
    Year,
    Days(u32),
}

impl Range {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Range::All),
            "week" => Some(Range::Week),
            "month" => Some(Range::Month),
            "3months" => Some(Range::ThreeMonths),
            "year" => Some(Range::Year),
            other => other.parse::<u32>().ok().map(Range::Days),
        }
    }

    pub fn window_days(self) -> Option<i64> {
        match self {
            Range::All => None,
            Range::Week => Some(7),
            Range::Month => Some(30),
            Range::ThreeMonths => Some(90),
            Range::Year => Some(365),
            Range::Days(days) => Some(i64::from(days)),
        }
    }
}

/// Samples within the window ending now. A live view: the cutoff moves with
/// the wall clock.
pub fn filter_window(series: &SeriesData, range: Range) -> Vec<Sample> {
    filter_window_at(Local::now().date_naive(), series, range)
}

pub fn filter_window_at(today: NaiveDate, series: &SeriesData, range: Range) -> Vec<Sample> {
    let samples = series.samples.iter().map(|(date, weight)| Sample {
        date: *date,
        weight: *weight,
    });
    match range.window_days() {
        None => samples.collect(),
        Some(days) => {
            let cutoff = today - Duration::days(days);
            samples.filter(|sample| sample.date >= cutoff).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn parse_accepts_named_ranges_and_day_counts() {
        assert_eq!(Range::parse("all"), Some(Range::All));
        assert_eq!(Range::parse("week"), Some(Range::Week));
        assert_eq!(Range::parse("month"), Some(Range::Month));
        assert_eq!(Range::parse("3months"), Some(Range::ThreeMonths));
        assert_eq!(Range::parse("Year"), Some(Range::Year));
        assert_eq!(Range::parse("14"), Some(Range::Days(14)));
        assert_eq!(Range::parse("soon"), None);
    }

    #[test]
    fn week_window_keeps_recent_and_drops_old_samples() {
        let today = day("2024-06-11");
        let data = series(&[
            ("2024-06-01", 80.0), // 10 days back, outside
            ("2024-06-08", 79.0), // 3 days back, inside
        ]);
        let window = filter_window_at(today, &data, Range::Week);
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].date, day("2024-06-08"));
    }

    #[test]
    fn cutoff_day_itself_is_included() {
        let today = day("2024-06-11");
        let data = series(&[("2024-06-04", 80.0)]);
        let window = filter_window_at(today, &data, Range::Week);
        assert_eq!(window.len(), 1);
    }

    #[test]
    fn all_returns_every_sample_ascending() {
        let today = day("2024-06-11");
        let data = series(&[
            ("2020-01-01", 90.0),
            ("2024-06-08", 79.0),
            ("2022-03-15", 85.0),
        ]);
        let window = filter_window_at(today, &data, Range::All);
        let dates: Vec<_> = window.iter().map(|sample| sample.date).collect();
        assert_eq!(
            dates,
            vec![day("2020-01-01"), day("2022-03-15"), day("2024-06-08")]
        );
    }
}
