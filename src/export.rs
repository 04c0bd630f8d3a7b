use crate::models::Sample;
use crate::series::SeriesStore;
use crate::stats::goal_progress;
use chrono::NaiveDate;

/// Read-only view of everything the report needs: ascending rows plus the
/// summary figures.
#[derive(Debug)]
pub struct ExportSnapshot {
    pub rows: Vec<Sample>,
    pub entry_count: usize,
    pub first: Option<NaiveDate>,
    pub last: Option<NaiveDate>,
    pub goal: Option<f64>,
    pub progress: Option<f64>,
}

pub fn snapshot(store: &SeriesStore) -> ExportSnapshot {
    let rows: Vec<Sample> = store
        .all()
        .map(|(date, weight)| Sample { date, weight })
        .collect();
    ExportSnapshot {
        entry_count: rows.len(),
        first: rows.first().map(|sample| sample.date),
        last: rows.last().map(|sample| sample.date),
        goal: store.goal(),
        progress: goal_progress(store.series(), store.goal()),
        rows,
    }
}

/// The CSV report: header, one row per date ascending, then a summary block.
pub fn to_csv(snapshot: &ExportSnapshot) -> String {
    let mut out = String::from("Date,Weight (kg)\n");
    for row in &snapshot.rows {
        out.push_str(&format!("{},{:.1}\n", row.date, row.weight));
    }

    out.push('\n');
    out.push_str("Summary,\n");
    out.push_str(&format!("Entries,{}\n", snapshot.entry_count));
    if let (Some(first), Some(last)) = (snapshot.first, snapshot.last) {
        out.push_str(&format!("First entry,{first}\n"));
        out.push_str(&format!("Last entry,{last}\n"));
    }
    if let Some(goal) = snapshot.goal {
        out.push_str(&format!("Goal (kg),{goal:.1}\n"));
        if let Some(progress) = snapshot.progress {
            out.push_str(&format!("Goal progress,{:.0}%\n", progress * 100.0));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalData;
    use crate::models::SeriesData;

    fn store(entries: &[(&str, f64)], goal: Option<f64>) -> SeriesStore {
        let mut data = SeriesData::default();
        for (date, weight) in entries {
            data.samples.insert(date.parse().unwrap(), *weight);
        }
        SeriesStore::new(data, GoalData { target: goal })
    }

    #[test]
    fn csv_lists_rows_ascending_with_summary_block() {
        let store = store(&[("2024-02-01", 75.0), ("2024-01-01", 80.0)], Some(70.0));
        let report = to_csv(&snapshot(&store));

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Date,Weight (kg)");
        assert_eq!(lines[1], "2024-01-01,80.0");
        assert_eq!(lines[2], "2024-02-01,75.0");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Summary,");
        assert_eq!(lines[5], "Entries,2");
        assert_eq!(lines[6], "First entry,2024-01-01");
        assert_eq!(lines[7], "Last entry,2024-02-01");
        assert_eq!(lines[8], "Goal (kg),70.0");
        assert_eq!(lines[9], "Goal progress,50%");
    }

    #[test]
    fn csv_without_goal_omits_the_goal_lines() {
        let store = store(&[("2024-01-01", 80.0)], None);
        let report = to_csv(&snapshot(&store));
        assert!(!report.contains("Goal"));
        assert!(report.contains("Entries,1"));
    }

    #[test]
    fn csv_of_an_empty_store_is_just_header_and_count() {
        let store = store(&[], None);
        let report = to_csv(&snapshot(&store));
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Date,Weight (kg)");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Summary,");
        assert_eq!(lines[3], "Entries,0");
        assert!(!report.contains("First entry"));
    }
}
