use common::{complete_status, TestApp, PRODUCTION_ORIGIN};
use folio_core_contact_contracts::MockContactService;
use pretty_assertions::assert_eq;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

mod common;

async fn app() -> TestApp {
    TestApp::spawn(MockContactService::new(), complete_status()).await
}

#[tokio::test]
async fn disallowed_origin_is_rejected() {
    let app = app().await;

    let response = app
        .get("/health")
        .header("Origin", "http://evil.example")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(!response
        .headers()
        .contains_key("access-control-allow-origin"));
    let body = response.json::<Value>().await.unwrap();
    assert_eq!(body["error"], "Origin not allowed");
}

#[tokio::test]
async fn disallowed_origin_never_reaches_contact_service() {
    let mut contact = MockContactService::new();
    contact.expect_send_message().never();
    let app = TestApp::spawn(contact, complete_status()).await;

    let response = app
        .post("/send-message")
        .header("Origin", "http://evil.example")
        .json(&json!({"name": "Ada", "email": "ada@example.com", "message": "hi"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn allowed_origins_are_accepted() {
    let app = app().await;

    for origin in ["http://localhost:5173", PRODUCTION_ORIGIN] {
        let response = app
            .get("/health")
            .header("Origin", origin)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{origin}");
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], origin);
        assert_eq!(headers["access-control-allow-credentials"], "true");
    }
}

#[tokio::test]
async fn missing_origin_is_accepted() {
    let app = app().await;

    let response = app.get("/health").send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(!response
        .headers()
        .contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn preflight() {
    let app = app().await;

    let response = app
        .request(Method::OPTIONS, "/send-message")
        .header("Origin", PRODUCTION_ORIGIN)
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], PRODUCTION_ORIGIN);
    let methods = headers["access-control-allow-methods"].to_str().unwrap();
    assert!(methods.contains("POST"));

    let response = app
        .request(Method::OPTIONS, "/send-message")
        .header("Origin", "http://evil.example")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
