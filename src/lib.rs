pub mod app;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod models;
pub mod range;
pub mod series;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use series::SeriesStore;
pub use state::AppState;
pub use storage::{load_goal, load_series, resolve_data_dir};
