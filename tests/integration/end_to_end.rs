//! Full flow: auth.json bytes to credentials to fetch to CSV.

use super::common::explorer;
use salesforce_resty::{records_to_csv, ApiRequest, Credentials, Method};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_flat_auth_json_to_csv() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/data/v60.0/query"))
        .and(header("Authorization", "Bearer 00Dxx!flat-token"))
        .and(query_param("q", "SELECT Id, Name FROM Account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalSize": 2,
            "done": true,
            "records": [
                {"Id": "001-1", "Name": "Acme"},
                {"Id": "001-2", "Name": "Globex"}
            ]
        })))
        .mount(&server)
        .await;

    let auth_json = format!(
        r#"{{"access_token": "00Dxx!flat-token", "instance_url": "{}"}}"#,
        server.uri()
    );
    let creds = Credentials::from_json_slice(auth_json.as_bytes())
        .expect("Flat auth.json should load");
    assert_eq!(creds.api_version(), "60.0");

    let request = ApiRequest::new(Method::Get, "/services/data/v60.0/query")
        .with_soql("SELECT Id, Name FROM Account");
    let response = explorer()
        .execute(&creds, request)
        .await
        .expect("Fetch should succeed");

    let csv = records_to_csv(response.records()).expect("CSV export should succeed");
    assert_eq!(csv, "Id,Name\n001-1,Acme\n001-2,Globex\n");
}

#[tokio::test]
async fn test_nested_auth_json_with_camel_case_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/data/v58.0/sobjects/Account"))
        .and(header("Authorization", "Bearer 00Dxx!nested-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Account": [{"Id": "001-1"}]
        })))
        .mount(&server)
        .await;

    let auth_json = format!(
        r#"{{"result": {{"accessToken": "00Dxx!nested-token", "instanceUrl": "{}", "apiVersion": "58.0"}}}}"#,
        server.uri()
    );
    let creds = Credentials::from_json_slice(auth_json.as_bytes())
        .expect("Nested auth.json should load");
    assert_eq!(creds.api_version(), "58.0");

    let request = ApiRequest::new(Method::Get, "/services/data/v58.0/sobjects/Account");
    let response = explorer()
        .execute(&creds, request)
        .await
        .expect("Fetch should succeed");

    assert_eq!(response.records().len(), 1);
}

#[tokio::test]
async fn test_auth_json_missing_token_is_rejected() {
    let auth_json = br#"{"instance_url": "https://example.my.salesforce.com"}"#;
    let err = Credentials::from_json_slice(auth_json)
        .expect_err("Missing access token should be rejected");
    assert!(err.to_string().contains("access_token"));
}

#[tokio::test]
async fn test_empty_fetch_exports_empty_csv() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/data/v60.0/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalSize": 0,
            "done": true,
            "records": []
        })))
        .mount(&server)
        .await;

    let creds = Credentials::new(server.uri(), "integration-token", "60.0");
    let request = ApiRequest::new(Method::Get, "/services/data/v60.0/query")
        .with_soql("SELECT Id FROM Account WHERE Name = 'none'");
    let response = explorer()
        .execute(&creds, request)
        .await
        .expect("Fetch should succeed");

    assert!(response.records().is_empty());
    assert_eq!(records_to_csv(response.records()).expect("CSV export"), "");
}
