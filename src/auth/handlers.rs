//! Authentication handlers

use axum::{extract::Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::extractors::AuthedUser;
use super::models::MeResponse;
use crate::common::{ApiError, AppState};

/// GET /api/auth/me
/// Identity the bearer token resolves to
pub async fn me_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<MeResponse>, ApiError> {
    let dev_mode = state_lock.read().await.dev_mode.is_enabled();

    Ok(Json(MeResponse {
        id: authed.id,
        email: authed.email,
        dev_mode,
    }))
}
