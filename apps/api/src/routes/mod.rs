pub mod health;

use axum::{routing::get, Router};

use crate::analysis::handlers;
use crate::state::AppState;
use crate::ui::handlers as ui;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Browser page
        .route("/", get(ui::handle_page).post(ui::handle_submit))
        // Analysis API
        .route(
            "/api/v1/analysis",
            get(handlers::handle_latest).post(handlers::handle_analyze),
        )
        .route("/api/v1/analysis/export", get(handlers::handle_export))
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;

    fn app() -> Router {
        build_router(AppState::new(Config {
            analysis_delay: Duration::ZERO,
            ..Config::default()
        }))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn form_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(resp: Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), 1_000_000)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(resp: Response) -> Value {
        serde_json::from_str(&body_string(resp).await).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let resp = app().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "micromentor-api");
    }

    #[tokio::test]
    async fn test_blank_submission_is_rejected() {
        let resp = app()
            .oneshot(json_request(
                "/api/v1/analysis",
                json!({ "job_title": "  ", "resume_text": "python" }),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            json["error"]["message"],
            "Please fill in the job title and resume text fields."
        );
    }

    #[tokio::test]
    async fn test_malformed_json_uses_error_envelope() {
        let app = app();
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/analysis")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{\"job_title\": "))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["error"]["code"], "VALIDATION_ERROR");

        let resp = app
            .clone()
            .oneshot(json_request(
                "/api/v1/analysis",
                json!({ "job_title": null, "resume_text": "python" }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["error"]["code"], "VALIDATION_ERROR");

        let resp = app
            .oneshot(get_request("/api/v1/analysis"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_latest_and_export_404_before_any_run() {
        let app = app();
        let resp = app
            .clone()
            .oneshot(get_request("/api/v1/analysis"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = app
            .oneshot(get_request("/api/v1/analysis/export"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_analysis_then_latest_then_export() {
        let app = app();
        let resp = app
            .clone()
            .oneshot(json_request(
                "/api/v1/analysis",
                json!({
                    "job_title": "Senior Data Scientist",
                    "resume_text": "• python and sql experience",
                    "github_info": "ML repos"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let created = body_json(resp).await;
        assert_eq!(created["job_title"], "Senior Data Scientist");
        assert_eq!(created["github_insights"].as_array().unwrap().len(), 4);
        assert!(created.get("linkedin_critique").is_none());

        let resp = app
            .clone()
            .oneshot(get_request("/api/v1/analysis"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["id"], created["id"]);

        let resp = app
            .oneshot(get_request("/api/v1/analysis/export"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE],
            "text/markdown; charset=utf-8"
        );
        assert_eq!(
            resp.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"ats-analysis-senior-data-scientist.md\"; \
             filename*=UTF-8''ats-analysis-senior-data-scientist.md"
        );
        let report = body_string(resp).await;
        assert!(report.starts_with("# MicroMentor AI - ATS Resume Analysis Report\n"));
        assert!(report.contains("## GitHub Analysis"));
    }

    #[tokio::test]
    async fn test_form_page_and_submit() {
        let app = app();
        let resp = app.clone().oneshot(get_request("/")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_string(resp).await;
        assert!(html.contains("<form id=\"analysis-form\""));
        assert!(!html.contains("/api/v1/analysis/export"));

        let resp = app
            .clone()
            .oneshot(form_request(
                "job_title=Product+Manager&resume_text=roadmap+experience&github_info=&linkedin_info=",
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers()[header::LOCATION], "/");

        // Reloading after the redirect only reads the session.
        let resp = app.clone().oneshot(get_request("/")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_string(resp).await;
        assert!(html.contains("ATS Compatibility Score"));
        assert!(html.contains("/api/v1/analysis/export"));
        assert!(html.contains("value=\"Product Manager\""));
        assert!(!html.contains("id=\"github\""));

        let resp = app
            .oneshot(get_request("/api/v1/analysis"))
            .await
            .unwrap();
        assert_eq!(body_json(resp).await["job_title"], "Product Manager");
    }

    #[tokio::test]
    async fn test_form_submit_with_blank_resume_shows_alert() {
        let resp = app()
            .oneshot(form_request("job_title=Designer&resume_text=+++"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let html = body_string(resp).await;
        assert!(html.contains(
            "role=\"alert\">Please fill in the job title and resume text fields.</div>"
        ));
        assert!(html.contains("value=\"Designer\""));
        assert!(html.contains("Ready for Analysis"));
    }
}
