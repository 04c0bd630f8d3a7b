use crate::series::SeriesStore;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub store: Arc<Mutex<SeriesStore>>,
}

impl AppState {
    pub fn new(data_dir: PathBuf, store: SeriesStore) -> Self {
        Self {
            data_dir,
            store: Arc::new(Mutex::new(store)),
        }
    }
}
