pub mod app;
pub mod catalog;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod progress;
pub mod reward;
pub mod state;
pub mod status;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
