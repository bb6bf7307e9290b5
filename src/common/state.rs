// Application state shared across all modules

use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;

use crate::analysis::catalog::Catalog;
use crate::analysis::matcher::MatchMode;
use crate::common::dev_mode::DevModeConfig;
use crate::services::LlmService;

/// Application state containing database pool, services, and configuration
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub resumes_dir: PathBuf,
    pub jwt_secret: String,
    pub dev_mode: DevModeConfig,
    pub match_mode: MatchMode,
    pub catalog: Arc<Catalog>,
    pub llm_service: Arc<LlmService>,
}
