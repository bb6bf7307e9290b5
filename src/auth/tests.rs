//! Tests for auth module
//!
//! These tests verify token validation through the `AuthedUser` extractor
//! and the dev mode bypass.

#[cfg(test)]
mod tests {
    use super::super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header::AUTHORIZATION, Request, StatusCode},
        Router,
    };
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::common::dev_mode::DEV_USER_ID;
    use crate::common::state::test_support::{test_state, with_state, TEST_JWT_SECRET};

    fn token(secret: &str, sub: &str, exp: usize) -> String {
        let claims = models::Claims {
            sub: sub.to_string(),
            email: Some("ada@example.com".to_string()),
            exp,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("Failed to encode token")
    }

    fn far_future() -> usize {
        (chrono::Utc::now().timestamp() + 3600) as usize
    }

    async fn app(dev_mode: bool) -> Router {
        let mut state = test_state("http://127.0.0.1:9").await;
        state.dev_mode.enabled = dev_mode;
        with_state(auth_routes(), state)
    }

    async fn me(app: Router, authorization: Option<String>) -> (StatusCode, Value) {
        let mut request = Request::builder().uri("/api/auth/me");
        if let Some(value) = authorization {
            request = request.header(AUTHORIZATION, value);
        }
        let response = app
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_valid_bearer_token() {
        let (status, body) = me(
            app(false).await,
            Some(format!("Bearer {}", token(TEST_JWT_SECRET, "user-42", far_future()))),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "user-42");
        assert_eq!(body["email"], "ada@example.com");
        assert_eq!(body["devMode"], false);
    }

    #[tokio::test]
    async fn test_raw_token_without_bearer_prefix() {
        let (status, body) = me(
            app(false).await,
            Some(token(TEST_JWT_SECRET, "user-7", far_future())),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "user-7");
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        let (status, body) = me(app(false).await, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_wrong_secret_is_unauthorized() {
        let (status, _) = me(
            app(false).await,
            Some(format!("Bearer {}", token("wrong_secret", "user-42", far_future()))),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_expired_token_is_unauthorized() {
        let expired = (chrono::Utc::now().timestamp() - 3600) as usize;
        let (status, _) = me(
            app(false).await,
            Some(format!("Bearer {}", token(TEST_JWT_SECRET, "user-42", expired))),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_dev_mode_bypasses_token() {
        let (status, body) = me(app(true).await, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], DEV_USER_ID);
        assert_eq!(body["devMode"], true);
    }
}
