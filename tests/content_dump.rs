//! `folio content` against a mocked store

use folio::{dump, store_from_settings};
use folio_app::config::StoreSettings;
use folio_core::Error;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_missing_credentials_is_config_error() {
    let err = store_from_settings(&StoreSettings::default()).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[tokio::test]
async fn test_dump_includes_every_section_and_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/nav_elements"))
        .and(query_param("scope", "eq.header"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"href": "#about", "label": "About"},
            {"href": "#contact", "label": "Contact"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/skills"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "Rust", "category": "backend", "years": 3, "projects": 6}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/pages"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "database is restarting"
        })))
        .mount(&server)
        .await;

    let settings = StoreSettings {
        url: Some(server.uri()),
        key: Some("anon".into()),
    };
    let store = store_from_settings(&settings).unwrap();

    let (content, rendered) = dump(&store, "header").await.unwrap();

    assert_eq!(content.errors.len(), 1);
    assert!(content.errors[0].contains("database is restarting"));

    let value: Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["nav"][1]["href"], "#contact");
    assert_eq!(value["skills"][0]["category"], "backend");
    assert_eq!(value["skills"][0]["skills"][0]["proficiency"], 42);
    assert!(value["about"].is_null());
}
