//! Tests for profile module
//!
//! These tests drive the profile router end to end against an in-memory
//! database and a temporary résumé directory.

#[cfg(test)]
mod tests {
    use super::super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use std::path::PathBuf;
    use tower::ServiceExt;

    use crate::common::dev_mode::DEV_USER_ID;
    use crate::common::helpers::storage_dir_name;
    use crate::common::state::test_support::{test_state, with_state};

    const BOUNDARY: &str = "profile-test-boundary";
    const PDF_BYTES: &[u8] = b"%PDF-1.4\n1 0 obj\n<<>>\nendobj\ntrailer\n<<>>\n%%EOF\n";

    async fn app() -> (Router, PathBuf) {
        let state = test_state("http://127.0.0.1:9").await;
        let resumes_dir = state.resumes_dir.clone();
        (with_state(profile_routes(), state), resumes_dir)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn upload_request(file_name: &str, data: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{b}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"{n}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                b = BOUNDARY,
                n = file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/profile/resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    // ========================================================================
    // Profile
    // ========================================================================

    #[tokio::test]
    async fn test_profile_created_on_first_access() {
        let (app, _) = app().await;

        let (status, body) = send(&app, empty_request("GET", "/api/profile")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["userId"], DEV_USER_ID);
        assert_eq!(body["email"], "dev@test.com");
        assert!(body["displayName"].is_null());
        assert!(body["resumeUrl"].is_null());
    }

    #[tokio::test]
    async fn test_update_keeps_omitted_fields() {
        let (app, _) = app().await;

        let (status, body) = send(
            &app,
            json_request(
                "PUT",
                "/api/profile",
                json!({ "displayName": "  Ada Lovelace ", "targetRole": "Data Engineer" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["displayName"], "Ada Lovelace");
        assert_eq!(body["targetRole"], "Data Engineer");

        let (status, body) = send(
            &app,
            json_request("PUT", "/api/profile", json!({ "targetRole": "ML Engineer" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["displayName"], "Ada Lovelace");
        assert_eq!(body["targetRole"], "ML Engineer");
    }

    #[tokio::test]
    async fn test_update_validation() {
        let (app, _) = app().await;

        let (status, body) = send(&app, json_request("PUT", "/api/profile", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");

        let (status, _) = send(
            &app,
            json_request("PUT", "/api/profile", json!({ "displayName": "   " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            json_request(
                "PUT",
                "/api/profile",
                json!({ "targetRole": "x".repeat(256) }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    // ========================================================================
    // Saved skills
    // ========================================================================

    #[tokio::test]
    async fn test_skills_start_empty() {
        let (app, _) = app().await;

        let (status, body) = send(&app, empty_request("GET", "/api/profile/skills")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"], json!([]));
    }

    #[tokio::test]
    async fn test_skills_replace_normalizes_and_keeps_order() {
        let (app, _) = app().await;

        let (status, body) = send(
            &app,
            json_request(
                "PUT",
                "/api/profile/skills",
                json!({ "skills": ["SQL", " Python ", "", "python", "Apache Spark"] }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"], json!(["SQL", "Python", "Apache Spark"]));

        let (_, body) = send(&app, empty_request("GET", "/api/profile/skills")).await;
        assert_eq!(body["skills"], json!(["SQL", "Python", "Apache Spark"]));

        send(
            &app,
            json_request("PUT", "/api/profile/skills", json!({ "skills": ["Docker"] })),
        )
        .await;
        let (_, body) = send(&app, empty_request("GET", "/api/profile/skills")).await;
        assert_eq!(body["skills"], json!(["Docker"]));
    }

    #[tokio::test]
    async fn test_skills_limits() {
        let (app, _) = app().await;

        let too_many: Vec<String> = (0..101).map(|i| format!("skill-{}", i)).collect();
        let (status, body) = send(
            &app,
            json_request("PUT", "/api/profile/skills", json!({ "skills": too_many })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");

        let (status, _) = send(
            &app,
            json_request(
                "PUT",
                "/api/profile/skills",
                json!({ "skills": ["x".repeat(101)] }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    // ========================================================================
    // Résumé
    // ========================================================================

    #[tokio::test]
    async fn test_resume_upload_download_delete() {
        let (app, resumes_dir) = app().await;

        let (status, body) = send(&app, upload_request("cv.PDF", PDF_BYTES)).await;
        assert_eq!(status, StatusCode::OK);
        let expected_url = format!("{}/resume.pdf", storage_dir_name(DEV_USER_ID));
        assert_eq!(body["resumeUrl"], expected_url.as_str());
        assert_eq!(body["mimeType"], "application/pdf");
        assert_eq!(body["size"], PDF_BYTES.len());
        assert!(resumes_dir.join(&expected_url).exists());

        let (_, profile) = send(&app, empty_request("GET", "/api/profile")).await;
        assert_eq!(profile["resumeUrl"], expected_url.as_str());

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/api/profile/resume"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"resume.pdf\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], PDF_BYTES);

        let (status, _) = send(&app, empty_request("DELETE", "/api/profile/resume")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!resumes_dir.join(&expected_url).exists());

        let (_, profile) = send(&app, empty_request("GET", "/api/profile")).await;
        assert!(profile["resumeUrl"].is_null());

        let _ = std::fs::remove_dir_all(&resumes_dir);
    }

    #[tokio::test]
    async fn test_resume_reupload_replaces_previous_file() {
        let (app, resumes_dir) = app().await;
        let user_dir = resumes_dir.join(storage_dir_name(DEV_USER_ID));

        send(&app, upload_request("old.docx", b"first upload")).await;
        assert!(user_dir.join("resume.docx").exists());

        let (status, body) = send(&app, upload_request("new.pdf", PDF_BYTES)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["resumeUrl"].as_str().unwrap().ends_with("resume.pdf"));
        assert!(!user_dir.join("resume.docx").exists());
        assert!(user_dir.join("resume.pdf").exists());

        let _ = std::fs::remove_dir_all(&resumes_dir);
    }

    #[tokio::test]
    async fn test_resume_upload_rejects_empty_file() {
        let (app, _) = app().await;

        let (status, body) = send(&app, upload_request("cv.pdf", b"")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_resume_missing_is_not_found() {
        let (app, _) = app().await;

        let (status, body) = send(&app, empty_request("GET", "/api/profile/resume")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");

        let (status, _) = send(&app, empty_request("DELETE", "/api/profile/resume")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_resume_file_removed_out_of_band_is_not_found() {
        let (app, resumes_dir) = app().await;

        let (_, body) = send(&app, upload_request("cv.pdf", PDF_BYTES)).await;
        let url = body["resumeUrl"].as_str().unwrap().to_string();
        std::fs::remove_file(resumes_dir.join(&url)).unwrap();

        let (status, _) = send(&app, empty_request("GET", "/api/profile/resume")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, empty_request("DELETE", "/api/profile/resume")).await;
        assert_eq!(status, StatusCode::OK);

        let _ = std::fs::remove_dir_all(&resumes_dir);
    }
}
