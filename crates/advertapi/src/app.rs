use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    handlers::{
        adverts::{confirm_advert, create_advert, get_advert, list_adverts},
        health::health,
    },
    openapi::ApiDoc,
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // Any origin, any header
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let advert_routes = Router::new()
        .route("/advert", get(list_adverts).post(create_advert))
        .route("/advert/confirm", post(confirm_advert))
        .route("/advert/{id}", get(get_advert))
        .layer(cors);

    Router::new()
        .merge(advert_routes)
        .route("/health", get(health))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use advertapi_core::storage::AdvertRepository;

    use crate::{
        config::Config,
        storage::{inmemory::InMemoryRepository, testing::FailingRepository, ScanMode},
    };

    fn test_config() -> Config {
        Config {
            table_name: "Adverts".to_string(),
            aws_region: "us-east-1".to_string(),
            aws_endpoint_url: None,
            scan_mode: ScanMode::FirstPage,
        }
    }

    fn test_app(repo: &InMemoryRepository) -> Router {
        test_app_with(Arc::new(repo.clone()))
    }

    fn test_app_with(repo: Arc<dyn AdvertRepository>) -> Router {
        create_app(AppState::new(repo, &test_config()))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn create(app: &Router, title: &str) -> String {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/advert",
                serde_json::json!({ "title": title, "price": 10.0 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        body_json(response).await["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_list_adverts_empty() {
        let app = test_app(&InMemoryRepository::new());

        let response = app.oneshot(get_request("/advert")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_create_and_get_advert() {
        let app = test_app(&InMemoryRepository::new());
        let id = create(&app, "Sale").await;

        let response = app
            .oneshot(get_request(&format!("/advert/{id}")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let advert = body_json(response).await;
        assert_eq!(advert["id"], id.as_str());
        assert_eq!(advert["title"], "Sale");
        assert_eq!(advert["status"], "Pending");
        assert!(advert.get("filePath").is_none());
        assert!(advert["creationDateTime"].is_string());
    }

    #[tokio::test]
    async fn test_confirm_active_flow() {
        let app = test_app(&InMemoryRepository::new());
        let id = create(&app, "Sale").await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/advert/confirm",
                serde_json::json!({ "id": id, "status": "Active", "filePath": "/f/1" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get_request(&format!("/advert/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let advert = body_json(response).await;
        assert_eq!(advert["id"], id.as_str());
        assert_eq!(advert["title"], "Sale");
        assert_eq!(advert["status"], "Active");
        assert_eq!(advert["filePath"], "/f/1");
    }

    #[tokio::test]
    async fn test_confirm_pending_removes_advert() {
        let repo = InMemoryRepository::new();
        let app = test_app(&repo);
        let id = create(&app, "Sale").await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/advert/confirm",
                serde_json::json!({ "id": id, "status": "Pending" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get_request(&format!("/advert/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_confirm_unknown_advert_is_404() {
        let repo = InMemoryRepository::new();
        let app = test_app(&repo);

        let response = app
            .oneshot(json_request(
                "POST",
                "/advert/confirm",
                serde_json::json!({ "id": "missing", "status": "Active", "filePath": "/f/1" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_get_unknown_advert_is_404() {
        let app = test_app(&InMemoryRepository::new());

        let response = app.oneshot(get_request("/advert/abc-123")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Advert not found: abc-123");
    }

    #[tokio::test]
    async fn test_list_returns_created_adverts() {
        let app = test_app(&InMemoryRepository::new());
        let first = create(&app, "First").await;
        let second = create(&app, "Second").await;

        let response = app.oneshot(get_request("/advert")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let ids: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&first.as_str()));
        assert!(ids.contains(&second.as_str()));
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_body() {
        let app = test_app(&InMemoryRepository::new());

        let response = app
            .oneshot(json_request(
                "POST",
                "/advert",
                serde_json::json!({ "description": "no title" }),
            ))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_health_reports_table_status() {
        let repo = InMemoryRepository::new();
        let app = test_app(&repo);

        let response = app.clone().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Healthy");

        repo.set_table_status("CREATING").await;

        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_text(response).await, "Unhealthy");
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let app = test_app(&InMemoryRepository::new());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/advert")
                    .header(header::ORIGIN, "https://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let app = test_app(&InMemoryRepository::new());

        let response = app
            .oneshot(get_request("/api-docs/openapi.json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["paths"]["/advert/{id}"].is_object());
    }

    #[tokio::test]
    async fn test_health_is_unhealthy_when_table_unreachable() {
        let app = test_app_with(Arc::new(FailingRepository::unavailable()));

        let response = app.oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_text(response).await, "Unhealthy");
    }

    #[tokio::test]
    async fn test_unreachable_store_is_503_not_404() {
        let app = test_app_with(Arc::new(FailingRepository::unavailable()));

        let response = app
            .clone()
            .oneshot(get_request("/advert/abc-123"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = app
            .oneshot(json_request(
                "POST",
                "/advert/confirm",
                serde_json::json!({ "id": "abc-123", "status": "Active", "filePath": "/f/1" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_failed_query_is_500_with_generic_body() {
        let app = test_app_with(Arc::new(FailingRepository::query_failed()));

        let response = app.clone().oneshot(get_request("/advert")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "Internal Server Error");

        let response = app
            .oneshot(json_request(
                "POST",
                "/advert",
                serde_json::json!({ "title": "Sale" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
