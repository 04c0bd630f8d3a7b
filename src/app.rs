use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/summary", get(handlers::get_summary))
        .route(
            "/api/entries",
            get(handlers::list_entries).post(handlers::save_entry),
        )
        .route("/api/entries/edit", post(handlers::edit_entry))
        .route("/api/entries/delete", post(handlers::delete_entry))
        .route("/api/goal", get(handlers::get_goal).post(handlers::set_goal))
        .route("/api/export", get(handlers::export_csv))
        .with_state(state)
}
