use weather_alerts::app::{TerminalController, run};
use weather_alerts::terminal::{TerminalAlerts, TerminalError, TerminalInput};

use client_core::config::ApiConfig;
use client_core::controller::{InputField, WidgetRegions};
use client_core::{AlertController, AlertsClient, ControllerOptions, WidgetState};

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Integration tests for the terminal shell + client-core controller
// These drive `run()` with scripted input against a mock alerts endpoint
// ============================================================================

type BufferedController = TerminalController<TerminalAlerts<Vec<u8>>, TerminalError<Vec<u8>>>;

fn feed_json(headlines: &[&str]) -> Value {
    let features: Vec<Value> = headlines
        .iter()
        .map(|headline| json!({ "properties": { "headline": headline } }))
        .collect();
    json!({ "features": features })
}

fn buffered_controller(server: &MockServer) -> Arc<BufferedController> {
    let config = ApiConfig {
        endpoint: format!("{}/alerts/active", server.uri()),
        ..ApiConfig::default()
    };
    let client = AlertsClient::new(&config).expect("client should build");
    let regions = WidgetRegions::new(
        TerminalInput::default(),
        TerminalAlerts::new(Vec::new()),
        TerminalError::new(Vec::new()),
    );
    Arc::new(AlertController::new(
        client,
        regions,
        ControllerOptions::default(),
    ))
}

/// Everything printed so far: (alerts output, error output, input value).
async fn printed(controller: &BufferedController) -> (String, String, String) {
    controller
        .with_regions(|regions| {
            (
                String::from_utf8_lossy(regions.alerts.writer()).into_owned(),
                String::from_utf8_lossy(regions.error.writer()).into_owned(),
                regions.input.value(),
            )
        })
        .await
}

/// **VALUE**: A typed line flows through the shell to a printed alert list.
///
/// **WHY THIS MATTERS**: This is the closest we get to the real binary without a
/// terminal: stdin line in, rendered alerts out.
///
/// **BUG THIS CATCHES**: Would catch the line not reaching the input field, or EOF
/// returning before the in-flight request was rendered.
#[tokio::test]
async fn given_typed_code_when_run_to_eof_then_alerts_are_printed() {
    // GIVEN: A mock endpoint with two TX alerts
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alerts/active"))
        .and(query_param("area", "TX"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(feed_json(&["Flood Warning", "Heat Advisory"])),
        )
        .expect(1)
        .mount(&server)
        .await;
    let controller = buffered_controller(&server);

    // WHEN: Running with "tx" then EOF
    run(Arc::clone(&controller), &b"tx\n"[..])
        .await
        .expect("run should succeed");

    // THEN: Heading and bullets printed, no error, input cleared
    let (alerts, errors, input) = printed(&controller).await;
    assert_eq!(
        alerts,
        "Weather Alerts: 2\n  - Flood Warning\n  - Heat Advisory\n"
    );
    assert!(errors.is_empty());
    assert_eq!(input, "");
    assert_eq!(controller.state().await, WidgetState::Displayed);
}

#[tokio::test]
async fn given_invalid_code_when_run_then_error_printed_and_no_request() {
    let server = MockServer::start().await;
    let controller = buffered_controller(&server);

    run(Arc::clone(&controller), &b"x\n"[..]).await.unwrap();

    let (alerts, errors, input) = printed(&controller).await;
    assert!(alerts.is_empty());
    assert_eq!(errors, "Error: Please enter a valid 2-letter state code\n");
    assert_eq!(input, "x");
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

/// **VALUE**: Lines typed while a request is in flight win over the slower request.
///
/// **BUG THIS CATCHES**: Would catch the shell awaiting each request before reading the
/// next line (which hides the race), or the controller rendering a stale result.
#[tokio::test]
async fn given_second_line_while_first_is_slow_then_only_second_is_printed() {
    // GIVEN: TX is slow, OK is fast
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("area", "TX"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(feed_json(&["Flood Warning"]))
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("area", "OK"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_json(&["Tornado Watch"])))
        .mount(&server)
        .await;
    let controller = buffered_controller(&server);

    // WHEN: Both lines arrive back to back
    run(Arc::clone(&controller), &b"tx\nok\n"[..]).await.unwrap();

    // THEN: Only the OK result was printed
    let (alerts, errors, _) = printed(&controller).await;
    assert_eq!(alerts, "Weather Alerts: 1\n  - Tornado Watch\n");
    assert!(errors.is_empty());
}

#[tokio::test]
async fn given_quit_command_when_run_then_returns_without_reading_further() {
    let server = MockServer::start().await;
    let controller = buffered_controller(&server);

    run(Arc::clone(&controller), &b":q\ntx\n"[..]).await.unwrap();

    let (alerts, errors, _) = printed(&controller).await;
    assert!(alerts.is_empty());
    assert!(errors.is_empty());
    assert_eq!(controller.state().await, WidgetState::Idle);
}

#[tokio::test]
async fn given_server_error_when_run_then_error_printed_and_code_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let controller = buffered_controller(&server);

    run(Arc::clone(&controller), &b"ny\n"[..]).await.unwrap();

    let (_, errors, input) = printed(&controller).await;
    assert_eq!(errors, "Error: Failed to fetch weather alerts\n");
    assert_eq!(input, "ny");
}
