use std::path::PathBuf;

use crate::db::Database;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub static_dir: PathBuf,
}
