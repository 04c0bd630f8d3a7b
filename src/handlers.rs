use crate::errors::AppError;
use crate::export;
use crate::models::{
    DeleteRequest, DeleteResponse, EditRequest, EntriesResponse, EntryRequest, EntryResponse,
    GoalData, SeriesPoint, SummaryResponse,
};
use crate::range::{Range, filter_window};
use crate::state::AppState;
use crate::stats::build_summary;
use crate::storage::{persist_goal, persist_series};
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
};
use chrono::Local;
use serde::Deserialize;

pub async fn index() -> Html<String> {
    let today = Local::now().date_naive().to_string();
    Html(render_index(&today))
}

pub async fn get_summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(build_summary(&store)))
}

#[derive(Debug, Deserialize)]
pub struct EntriesQuery {
    pub range: Option<String>,
}

pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<EntriesQuery>,
) -> Result<Json<EntriesResponse>, AppError> {
    let requested = query.range.unwrap_or_else(|| "all".to_string());
    let range = Range::parse(&requested)
        .ok_or_else(|| AppError::bad_request(format!("unknown range '{requested}'")))?;

    let store = state.store.lock().await;
    let points = filter_window(store.series(), range)
        .into_iter()
        .map(|sample| SeriesPoint {
            date: sample.date.to_string(),
            weight: sample.weight,
        })
        .collect();

    Ok(Json(EntriesResponse {
        range: requested,
        points,
    }))
}

pub async fn save_entry(
    State(state): State<AppState>,
    Json(payload): Json<EntryRequest>,
) -> Result<Json<EntryResponse>, AppError> {
    let mut store = state.store.lock().await;
    let saved = store.upsert(&payload.date, payload.weight)?;
    persist_series(&state.data_dir, store.series()).await?;

    Ok(Json(EntryResponse {
        date: saved.date.to_string(),
        weight: payload.weight,
        replaced: saved.replaced,
    }))
}

pub async fn edit_entry(
    State(state): State<AppState>,
    Json(payload): Json<EditRequest>,
) -> Result<Json<EntryResponse>, AppError> {
    let mut store = state.store.lock().await;
    let saved = store.rename(&payload.original_date, &payload.date, payload.weight)?;
    persist_series(&state.data_dir, store.series()).await?;

    Ok(Json(EntryResponse {
        date: saved.date.to_string(),
        weight: payload.weight,
        replaced: saved.replaced,
    }))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Json(payload): Json<DeleteRequest>,
) -> Result<Json<DeleteResponse>, AppError> {
    let mut store = state.store.lock().await;
    let removed = store.remove(&payload.date)?;
    if removed {
        persist_series(&state.data_dir, store.series()).await?;
    }

    Ok(Json(DeleteResponse {
        date: payload.date,
        removed,
    }))
}

pub async fn get_goal(State(state): State<AppState>) -> Result<Json<GoalData>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(*store.goal_data()))
}

pub async fn set_goal(
    State(state): State<AppState>,
    Json(payload): Json<GoalData>,
) -> Result<Json<GoalData>, AppError> {
    let mut store = state.store.lock().await;
    store.set_goal(payload.target)?;
    persist_goal(&state.data_dir, store.goal_data()).await?;

    Ok(Json(*store.goal_data()))
}

pub async fn export_csv(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let store = state.store.lock().await;
    let report = export::to_csv(&export::snapshot(&store));

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"weights.csv\"",
            ),
        ],
        report,
    ))
}
