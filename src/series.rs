use crate::errors::StoreError;
use crate::models::{GoalData, SeriesData};
use chrono::NaiveDate;

/// Outcome of an accepted write: the canonical date and whether a prior
/// sample for that date was overwritten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavedEntry {
    pub date: NaiveDate,
    pub replaced: bool,
}

pub fn parse_date(input: &str) -> Result<NaiveDate, StoreError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| StoreError::InvalidDate(input.to_string()))
}

fn check_weight(weight: f64) -> Result<(), StoreError> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(StoreError::InvalidWeight(weight));
    }
    Ok(())
}

/// Owns the weight series and the active goal. Handlers mutate through this
/// and persist once per operation, so a date-changing edit never leaves a
/// half-applied state on disk.
#[derive(Debug, Default)]
pub struct SeriesStore {
    series: SeriesData,
    goal: GoalData,
}

impl SeriesStore {
    pub fn new(series: SeriesData, goal: GoalData) -> Self {
        Self { series, goal }
    }

    /// Insert or overwrite the sample for `date`. Overwriting is deliberate
    /// here; the page confirms with the user before posting over an
    /// existing date.
    pub fn upsert(&mut self, date: &str, weight: f64) -> Result<SavedEntry, StoreError> {
        let date = parse_date(date)?;
        check_weight(weight)?;
        let replaced = self.series.samples.insert(date, weight).is_some();
        Ok(SavedEntry { date, replaced })
    }

    /// A date-changing edit: drop the sample at `original`, write the new
    /// one. All inputs are validated before anything is touched. An absent
    /// `original` degenerates to a plain insert.
    pub fn rename(
        &mut self,
        original: &str,
        date: &str,
        weight: f64,
    ) -> Result<SavedEntry, StoreError> {
        let original = parse_date(original)?;
        let date = parse_date(date)?;
        check_weight(weight)?;
        self.series.samples.remove(&original);
        let replaced = self.series.samples.insert(date, weight).is_some();
        Ok(SavedEntry { date, replaced })
    }

    /// Delete the sample for `date`. Returns whether anything was removed;
    /// an absent date is a no-op, not an error.
    pub fn remove(&mut self, date: &str) -> Result<bool, StoreError> {
        let date = parse_date(date)?;
        Ok(self.series.samples.remove(&date).is_some())
    }

    /// Ascending iterator over the current samples. Restartable; reflects
    /// state at call time.
    pub fn all(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.series
            .samples
            .iter()
            .map(|(date, weight)| (*date, *weight))
    }

    pub fn series(&self) -> &SeriesData {
        &self.series
    }

    pub fn goal(&self) -> Option<f64> {
        self.goal.target
    }

    pub fn goal_data(&self) -> &GoalData {
        &self.goal
    }

    /// Set or clear the goal. A new target replaces the prior one.
    pub fn set_goal(&mut self, target: Option<f64>) -> Result<(), StoreError> {
        if let Some(value) = target {
            check_weight(value)?;
        }
        self.goal.target = target;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.series.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.samples.is_empty()
    }
}
