use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The weight series: one sample per calendar day, ascending by date.
/// Serializes as a bare `{"YYYY-MM-DD": weight}` object.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(transparent)]
pub struct SeriesData {
    pub samples: BTreeMap<NaiveDate, f64>,
}

/// The active goal weight, if any. Wire and disk shape: `{"target": number|null}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct GoalData {
    pub target: Option<f64>,
}

/// One dated weight observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub date: NaiveDate,
    pub weight: f64,
}

#[derive(Debug, Deserialize)]
pub struct EntryRequest {
    pub date: String,
    pub weight: f64,
}

#[derive(Debug, Deserialize)]
pub struct EditRequest {
    pub original_date: String,
    pub date: String,
    pub weight: f64,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub date: String,
    pub weight: f64,
    pub replaced: bool,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub date: String,
    pub removed: bool,
}

#[derive(Debug, Serialize)]
pub struct SeriesPoint {
    pub date: String,
    pub weight: f64,
}

#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub range: String,
    pub points: Vec<SeriesPoint>,
}

#[derive(Debug, Serialize)]
pub struct GoalStatus {
    pub target: Option<f64>,
    pub percent: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub entry_count: usize,
    pub current: Option<SeriesPoint>,
    pub change_week: Option<f64>,
    pub change_month: Option<f64>,
    pub streak_days: u32,
    pub goal: GoalStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_round_trips_through_json() {
        let mut data = SeriesData::default();
        data.samples.insert("2024-01-01".parse().unwrap(), 80.0);
        data.samples.insert("2024-02-01".parse().unwrap(), 75.5);

        let json = serde_json::to_string(&data).unwrap();
        let reloaded: SeriesData = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, data);
    }

    #[test]
    fn series_serializes_as_bare_date_map() {
        let mut data = SeriesData::default();
        data.samples.insert("2024-01-01".parse().unwrap(), 80.0);

        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"2024-01-01":80.0}"#);
    }

    #[test]
    fn goal_round_trips_set_and_unset() {
        let set = GoalData { target: Some(70.0) };
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"target":70.0}"#);
        assert_eq!(serde_json::from_str::<GoalData>(&json).unwrap(), set);

        let unset: GoalData = serde_json::from_str(r#"{"target":null}"#).unwrap();
        assert_eq!(unset.target, None);
    }
}
