use crate::helpers::{ALERTS_PATH, api_config, feed_json};

use client_core::config::ApiConfig;
use client_core::error::AlertsClientError;
use client_core::{AlertsClient, DEFAULT_USER_AGENT};

use common::HttpStatusCode;
use models::RegionCode;

use std::time::Duration;

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn given_region_when_building_url_then_area_query_is_appended() {
    let client = AlertsClient::new(&ApiConfig::default()).expect("default config builds");
    let region = RegionCode::parse("tx").unwrap();

    let url = client.alerts_url(&region);

    assert_eq!(client.endpoint().query(), None, "endpoint itself stays unqueried");
    assert_eq!(
        url.as_str(),
        "https://api.weather.gov/alerts/active?area=TX"
    );
}

#[test]
fn given_malformed_endpoint_when_client_built_then_url_parse_error() {
    let config = ApiConfig {
        endpoint: String::from("not a url"),
        ..ApiConfig::default()
    };

    let result = AlertsClient::new(&config);

    assert!(matches!(result, Err(AlertsClientError::UrlParse { .. })));
}

/// **VALUE**: The client sends one GET with the area query and its user agent, then decodes.
///
/// **WHY THIS MATTERS**: The upstream service rejects requests without a User-Agent.
///
/// **BUG THIS CATCHES**: Would catch the user agent being dropped from the client
/// builder or the query key changing.
#[tokio::test]
async fn given_feed_response_when_fetching_then_decodes_headlines() {
    // GIVEN: An endpoint that requires the area query and the user agent
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ALERTS_PATH))
        .and(query_param("area", "FL"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(feed_json(&["Hurricane Warning"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = AlertsClient::new(&api_config(&server.uri())).unwrap();
    let region = RegionCode::parse("fl").unwrap();

    // WHEN: Fetching
    let feed = client.fetch_active_alerts(&region).await.expect("should fetch");

    // THEN: Headline decoded
    assert_eq!(feed.headlines().collect::<Vec<_>>(), vec!["Hurricane Warning"]);
}

#[tokio::test]
async fn given_not_found_when_fetching_then_status_error_with_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(feed_json(&["ignored"])))
        .mount(&server)
        .await;

    let client = AlertsClient::new(&api_config(&server.uri())).unwrap();
    let region = RegionCode::parse("zz").unwrap();

    let result = client.fetch_active_alerts(&region).await;

    match result {
        Err(AlertsClientError::Status { status, .. }) => {
            assert_eq!(status, HttpStatusCode(404));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_wrong_shape_when_fetching_then_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"type":"FeatureCollection"}"#))
        .mount(&server)
        .await;

    let client = AlertsClient::new(&api_config(&server.uri())).unwrap();
    let region = RegionCode::parse("ok").unwrap();

    let result = client.fetch_active_alerts(&region).await;

    assert!(matches!(result, Err(AlertsClientError::Json { .. })));
}

/// **VALUE**: An opt-in timeout bounds the wait.
///
/// **BUG THIS CATCHES**: Would catch `timeout_secs` being ignored when building the client.
#[tokio::test]
async fn given_configured_timeout_when_server_is_slower_then_http_error() {
    // GIVEN: A one-second timeout and a three-second response
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(feed_json(&[]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = ApiConfig {
        timeout_secs: Some(1),
        ..api_config(&server.uri())
    };
    let client = AlertsClient::new(&config).unwrap();
    let region = RegionCode::parse("me").unwrap();

    // WHEN: Fetching
    let result = client.fetch_active_alerts(&region).await;

    // THEN: Transport-level failure, not a status
    assert!(matches!(result, Err(AlertsClientError::Http { .. })));
}
