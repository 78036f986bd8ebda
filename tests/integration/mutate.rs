//! POST, PATCH, and DELETE behavior through the top-level API.

use super::common::{credentials_for, explorer};
use salesforce_resty::{ApiRequest, Method};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_create_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/data/v60.0/sobjects/Contact"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"LastName": "Martin", "Email": "m@example.com"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "003xx000004TmiQAAS",
            "success": true,
            "errors": []
        })))
        .mount(&server)
        .await;

    let request = ApiRequest::new(Method::Post, "/services/data/v60.0/sobjects/Contact")
        .with_payload(json!({"LastName": "Martin", "Email": "m@example.com"}));
    let response = explorer()
        .execute(&credentials_for(&server), request)
        .await
        .expect("Create should succeed");

    let document = response.document().expect("Mutation returns a document");
    assert_eq!(document["success"], true);
    assert!(response.records().is_empty());
}

#[tokio::test]
async fn test_update_record() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/services/data/v60.0/sobjects/Contact/003xx000004TmiQAAS"))
        .and(body_json(json!({"Email": "new@example.com"})))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let request = ApiRequest::new(
        Method::Patch,
        "/services/data/v60.0/sobjects/Contact/003xx000004TmiQAAS",
    )
    .with_payload(json!({"Email": "new@example.com"}));
    let response = explorer()
        .execute(&credentials_for(&server), request)
        .await
        .expect("Update should succeed");

    assert_eq!(
        response.document(),
        Some(&json!({"message": "Update successful"}))
    );
}

#[tokio::test]
async fn test_delete_record() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/services/data/v60.0/sobjects/Contact/003xx000004TmiQAAS"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let request = ApiRequest::new(
        Method::Delete,
        "/services/data/v60.0/sobjects/Contact/003xx000004TmiQAAS",
    );
    let response = explorer()
        .execute(&credentials_for(&server), request)
        .await
        .expect("Delete should succeed");

    assert_eq!(
        response.document(),
        Some(&json!({"message": "Delete successful"}))
    );
}

#[tokio::test]
async fn test_create_validation_failure_carries_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/data/v60.0/sobjects/Contact"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"[{"message":"Required fields are missing: [LastName]","errorCode":"REQUIRED_FIELD_MISSING"}]"#,
        ))
        .mount(&server)
        .await;

    let request = ApiRequest::new(Method::Post, "/services/data/v60.0/sobjects/Contact")
        .with_payload(json!({}));
    let err = explorer()
        .execute(&credentials_for(&server), request)
        .await
        .expect_err("400 should fail the create");

    assert_eq!(err.http_status(), Some(400));
    assert!(err.to_string().contains("REQUIRED_FIELD_MISSING"));
}

#[tokio::test]
async fn test_unsupported_method_rejected_at_parse() {
    let err = ApiRequest::from_method_name("PUT", "/services/data/v60.0/sobjects/Contact/003")
        .expect_err("PUT is not a supported verb");
    assert!(err.to_string().contains("PUT"));
}
