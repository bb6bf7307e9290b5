//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::models::Claims;
use crate::common::dev_mode::DEV_USER_ID;
use crate::common::{safe_email_log, ApiError, AppState};

/// Authenticated user extractor
///
/// Validates the HS256 bearer token issued by the auth provider. Users are
/// not stored locally; the token subject is the user id every query is
/// scoped by.
#[derive(Debug, Clone)]
pub struct AuthedUser {
    pub id: String,
    pub email: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let (dev_mode, jwt_secret) = {
            let app_state = state_lock.read().await;
            (app_state.dev_mode.clone(), app_state.jwt_secret.clone())
        };

        // DEV MODE: Bypass authentication completely
        if dev_mode.is_enabled() {
            debug!(
                user_id = %DEV_USER_ID,
                email = %safe_email_log(&dev_mode.user_email),
                "DEV MODE: Authentication bypassed"
            );

            return Ok(AuthedUser {
                id: DEV_USER_ID.to_string(),
                email: Some(dev_mode.user_email),
            });
        }

        let token = match parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
        {
            Some(t) => t,
            None => {
                warn!("Authentication failed: missing Authorization header");
                return Err(ApiError::Unauthorized("missing auth".into()));
            }
        };

        // Handle "Bearer <token>" format or raw token
        let bare_token = token.strip_prefix("Bearer ").unwrap_or(token);

        let claims = decode::<Claims>(
            bare_token,
            &DecodingKey::from_secret(jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| {
            warn!(error = %e, "JWT token validation failed");
            ApiError::Unauthorized("invalid token".into())
        })?
        .claims;

        if claims.sub.trim().is_empty() {
            warn!("Authentication failed: token without subject");
            return Err(ApiError::Unauthorized("invalid token".into()));
        }

        debug!(
            user_id = %claims.sub,
            email = %claims.email.as_deref().map(safe_email_log).unwrap_or_default(),
            "User authentication successful via extractor"
        );

        Ok(AuthedUser {
            id: claims.sub,
            email: claims.email,
        })
    }
}
