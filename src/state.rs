use crate::models::AppData;
use crate::reward::PrizeClient;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    pub prizes: PrizeClient,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData, prizes: PrizeClient) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            prizes,
        }
    }
}
