use crate::errors::AppError;
use crate::models::{GoalData, SeriesData};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::{error, warn};

/// Storage key for the serialized series.
pub const SERIES_KEY: &str = "weights";
/// Storage key for the serialized goal.
pub const GOAL_KEY: &str = "goal";

pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = env::var("WEIGHT_DATA_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from("data")
}

fn key_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

pub async fn load_series(dir: &Path) -> SeriesData {
    let mut data: SeriesData = load_key(&key_path(dir, SERIES_KEY)).await;
    let before = data.samples.len();
    data.samples
        .retain(|_, weight| weight.is_finite() && *weight > 0.0);
    let dropped = before - data.samples.len();
    if dropped > 0 {
        warn!("dropped {dropped} invalid samples from stored series");
    }
    data
}

pub async fn load_goal(dir: &Path) -> GoalData {
    let mut goal: GoalData = load_key(&key_path(dir, GOAL_KEY)).await;
    if goal
        .target
        .is_some_and(|target| !target.is_finite() || target <= 0.0)
    {
        warn!("dropping invalid stored goal");
        goal.target = None;
    }
    goal
}

/// Unreadable or unparsable stored data falls back to the default, logged
/// but never fatal.
async fn load_key<T: DeserializeOwned + Default>(path: &Path) -> T {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => {
                error!("failed to parse {}: {err}", path.display());
                T::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => T::default(),
        Err(err) => {
            error!("failed to read {}: {err}", path.display());
            T::default()
        }
    }
}

pub async fn persist_series(dir: &Path, data: &SeriesData) -> Result<(), AppError> {
    persist_key(&key_path(dir, SERIES_KEY), data).await
}

pub async fn persist_goal(dir: &Path, goal: &GoalData) -> Result<(), AppError> {
    persist_key(&key_path(dir, GOAL_KEY), goal).await
}

async fn persist_key<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(value).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::persistence)?;
    Ok(())
}
