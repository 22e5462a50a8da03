use crate::helpers::{ALERTS_PATH, controller, feed_json, received_count, snapshot};

use client_core::error::controller::{FETCH_FAILED_MESSAGE, INVALID_REGION_MESSAGE};
use client_core::{ControllerOptions, RequestOutcome, WidgetState};
use client_core::error::AlertRequestError;

use models::{Alert, AlertFeed};

use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: End-to-end success path for the canonical "tx" scenario.
///
/// **WHY THIS MATTERS**: This is the main thing the widget does: type a code, see the
/// count and headlines, get an empty input back.
///
/// **BUG THIS CATCHES**: Would catch the code not being uppercased in the query, the
/// heading drifting from the list, or the input/error region not being reset.
#[tokio::test]
async fn given_tx_and_two_alerts_when_triggered_then_renders_count_and_headlines() {
    // GIVEN: An endpoint that returns two alerts for TX only
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ALERTS_PATH))
        .and(query_param("area", "TX"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(feed_json(&["Flood Warning", "Heat Advisory"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let controller = controller(&server.uri(), "tx", ControllerOptions::default());

    // WHEN: Triggering from the input field
    let outcome = controller.trigger().await;

    // THEN: Two alerts displayed, input cleared, error hidden
    assert!(matches!(outcome, RequestOutcome::Displayed { alert_count: 2 }));

    let (input, view, error_message, error_visible) = snapshot(&controller).await;
    let view = view.expect("alerts should be rendered");
    assert_eq!(view.heading, "Weather Alerts: 2");
    assert_eq!(view.items, vec!["Flood Warning", "Heat Advisory"]);
    assert_eq!(input, "", "input should be cleared on success");
    assert!(error_message.is_empty());
    assert!(!error_visible);
    assert_eq!(controller.state().await, WidgetState::Displayed);
}

/// **VALUE**: Invalid codes never reach the network.
///
/// **BUG THIS CATCHES**: Would catch validation being moved after the request, or the
/// request being issued with an un-normalized code.
#[tokio::test]
async fn given_invalid_codes_when_requested_then_no_request_and_validation_error_shown() {
    // GIVEN: A server that would answer anything
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_json(&[])))
        .mount(&server)
        .await;

    for raw in ["", "   ", "x", "TXA", "texas"] {
        let controller = controller(&server.uri(), raw, ControllerOptions::default());

        // WHEN: Triggering
        let outcome = controller.trigger().await;

        // THEN: Validation error is visible, input untouched
        assert!(
            matches!(
                outcome,
                RequestOutcome::Errored(AlertRequestError::Validation { .. })
            ),
            "input {raw:?}"
        );
        let (input, view, error_message, error_visible) = snapshot(&controller).await;
        assert_eq!(error_message, INVALID_REGION_MESSAGE);
        assert!(error_visible);
        assert_eq!(input, raw);
        assert!(view.is_none());
        assert_eq!(controller.state().await, WidgetState::Errored);
    }

    // AND: The server never saw a request
    assert_eq!(received_count(&server).await, 0);
}

#[tokio::test]
async fn given_mixed_case_codes_when_requested_then_query_uses_uppercase() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ALERTS_PATH))
        .and(query_param("area", "CA"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_json(&[])))
        .expect(3)
        .mount(&server)
        .await;

    let controller = controller(&server.uri(), "", ControllerOptions::default());

    for raw in ["ca", "CA", " Ca "] {
        let outcome = controller.request_alerts(raw).await;
        assert!(
            matches!(outcome, RequestOutcome::Displayed { alert_count: 0 }),
            "input {raw:?} should display"
        );
    }

    let requests = server.received_requests().await.expect("recording enabled");
    for request in requests {
        assert!(request.url.as_str().ends_with("?area=CA"), "{}", request.url);
    }
}

/// **VALUE**: A failed status keeps the typed code so the user can retry.
///
/// **BUG THIS CATCHES**: Would catch the input being cleared unconditionally, or the
/// error body text leaking into the error region.
#[tokio::test]
async fn given_ny_and_server_error_when_triggered_then_error_shown_and_input_kept() {
    // GIVEN: A 500 for every request
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ALERTS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let controller = controller(&server.uri(), "ny", ControllerOptions::default());

    // WHEN: Triggering
    let outcome = controller.trigger().await;

    // THEN: Transport error, generic message, input kept
    assert!(matches!(
        outcome,
        RequestOutcome::Errored(AlertRequestError::Transport { .. })
    ));
    let (input, _, error_message, error_visible) = snapshot(&controller).await;
    assert!(error_visible);
    assert_eq!(error_message, FETCH_FAILED_MESSAGE);
    assert_eq!(input, "ny");
    assert_eq!(controller.state().await, WidgetState::Errored);
}

#[tokio::test]
async fn given_non_json_body_when_triggered_then_parse_error_shown_and_input_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let controller = controller(&server.uri(), "ok", ControllerOptions::default());

    let outcome = controller.trigger().await;

    assert!(matches!(
        outcome,
        RequestOutcome::Errored(AlertRequestError::Parse { .. })
    ));
    let (input, view, error_message, error_visible) = snapshot(&controller).await;
    assert!(error_visible);
    assert!(!error_message.is_empty());
    assert_eq!(input, "ok");
    assert!(view.is_none());
}

/// **VALUE**: A network-level failure (nothing listening) is surfaced like a failed status.
#[tokio::test]
async fn given_unreachable_endpoint_when_triggered_then_transport_error_shown() {
    // GIVEN: A local port with nothing listening on it
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        format!("http://{}", listener.local_addr().expect("local addr"))
    };
    let controller = controller(&uri, "ks", ControllerOptions::default());

    // WHEN: Triggering
    let outcome = controller.trigger().await;

    // THEN: Transport error without a status, message prefixed with the generic text
    assert!(matches!(
        outcome,
        RequestOutcome::Errored(AlertRequestError::Transport { status: None, .. })
    ));
    let (input, _, error_message, error_visible) = snapshot(&controller).await;
    assert!(error_visible);
    assert!(error_message.starts_with(FETCH_FAILED_MESSAGE));
    assert_eq!(input, "ks");
}

/// **VALUE**: A failure after a successful render leaves the previous list on screen by default.
///
/// **WHY THIS MATTERS**: With `clear_alerts_on_error` unset the widget keeps the last good
/// result next to the error.
#[tokio::test]
async fn given_previous_render_when_next_request_fails_then_alerts_are_kept_by_default() {
    // GIVEN: TX succeeds, NY fails
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("area", "TX"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_json(&["Flood Warning"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("area", "NY"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let controller = controller(&server.uri(), "", ControllerOptions::default());

    // WHEN: Success then failure
    controller.request_alerts("tx").await;
    controller.request_alerts("ny").await;

    // THEN: Old list still rendered, error visible
    let (_, view, _, error_visible) = snapshot(&controller).await;
    assert_eq!(view.expect("kept").items, vec!["Flood Warning"]);
    assert!(error_visible);
}

#[tokio::test]
async fn given_clear_on_error_option_when_request_fails_then_alerts_are_cleared() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("area", "TX"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_json(&["Flood Warning"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("area", "NY"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let options = ControllerOptions {
        clear_alerts_on_error: true,
    };
    let controller = controller(&server.uri(), "", options);

    controller.request_alerts("tx").await;
    controller.request_alerts("ny").await;

    let (_, view, _, error_visible) = snapshot(&controller).await;
    assert!(view.is_none(), "stale alerts should be cleared");
    assert!(error_visible);
}

/// **VALUE**: A success after a failure hides the error again.
///
/// **BUG THIS CATCHES**: Would catch `clear_error` being skipped on the success path,
/// leaving an error and a fresh alert list on screen at the same time.
#[tokio::test]
async fn given_previous_error_when_next_request_succeeds_then_error_is_cleared() {
    // GIVEN: A controller showing a validation error
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_json(&["Heat Advisory"])))
        .mount(&server)
        .await;
    let controller = controller(&server.uri(), "", ControllerOptions::default());
    controller.request_alerts("x").await;
    assert!(snapshot(&controller).await.3, "error should be visible first");

    // WHEN: A valid request follows
    controller.request_alerts("az").await;

    // THEN: Error hidden and emptied
    let (_, view, error_message, error_visible) = snapshot(&controller).await;
    assert!(!error_visible);
    assert!(error_message.is_empty());
    assert_eq!(view.expect("rendered").heading, "Weather Alerts: 1");
}

/// **VALUE**: Overlapping requests resolve to the most recent trigger.
///
/// **WHY THIS MATTERS**: Requests cannot be cancelled. Without the sequence guard, a slow
/// first request would overwrite the result the user asked for last.
///
/// **BUG THIS CATCHES**: Would catch the staleness check being removed, or being done
/// before the network call instead of after it.
#[tokio::test]
async fn given_slow_first_request_when_second_finishes_first_then_first_is_discarded() {
    // GIVEN: TX answers slowly, CA answers immediately
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("area", "TX"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(feed_json(&["Flood Warning", "Heat Advisory"]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("area", "CA"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_json(&["Red Flag Warning"])))
        .mount(&server)
        .await;

    let controller = controller(&server.uri(), "", ControllerOptions::default());

    // WHEN: TX is triggered, then CA shortly after
    let (first, second) = tokio::join!(controller.request_alerts("tx"), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        controller.request_alerts("ca").await
    });

    // THEN: Only CA is rendered
    assert!(matches!(first, RequestOutcome::Superseded));
    assert!(matches!(second, RequestOutcome::Displayed { alert_count: 1 }));

    let view = controller
        .with_regions(|regions| {
            assert_eq!(regions.alerts.replace_count, 1, "TX must never render");
            regions.alerts.view.clone()
        })
        .await
        .expect("CA rendered");
    assert_eq!(view.items, vec!["Red Flag Warning"]);
    assert_eq!(controller.state().await, WidgetState::Displayed);
}

#[tokio::test]
async fn given_in_flight_request_when_invalid_trigger_follows_then_late_result_is_discarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(feed_json(&["Flood Warning"]))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let controller = controller(&server.uri(), "", ControllerOptions::default());

    let (first, second) = tokio::join!(controller.request_alerts("tx"), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        controller.request_alerts("x").await
    });

    assert!(matches!(first, RequestOutcome::Superseded));
    assert!(matches!(second, RequestOutcome::Errored(_)));
    let (_, view, _, error_visible) = snapshot(&controller).await;
    assert!(view.is_none());
    assert!(error_visible);
}

/// **VALUE**: A line typed while an older request is in flight is protected from that
/// request's late result.
///
/// **WHY THIS MATTERS**: The shell writes the typed code into the input field and then
/// runs its fetch on a separate task. The older request can finish in between.
///
/// **BUG THIS CATCHES**: Would catch the ticket being taken after the input was written,
/// letting the older success render and clear the new code before the new request fails.
#[tokio::test]
async fn given_typed_line_ticketed_when_older_request_finishes_before_fetch_then_input_kept() {
    // GIVEN: TX answers after a delay, NY fails
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("area", "TX"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(feed_json(&["Flood Warning"]))
                .set_delay(Duration::from_millis(150)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("area", "NY"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let controller = Arc::new(controller(&server.uri(), "", ControllerOptions::default()));
    let older = tokio::spawn({
        let controller = Arc::clone(&controller);
        async move { controller.request_alerts("tx").await }
    });
    tokio::time::sleep(Duration::from_millis(20)).await;

    // WHEN: "ny" is typed and ticketed, TX resolves, and only then does NY run
    let pending = controller
        .begin_request(|input| input.value = "ny".to_string())
        .await;
    assert_eq!(pending.raw(), "ny");

    let older = older.await.expect("TX task should not panic");
    let newer = controller.complete_request(pending).await;

    // THEN: TX never rendered and the failed NY request left its code in the input
    assert!(matches!(older, RequestOutcome::Superseded));
    assert!(matches!(
        newer,
        RequestOutcome::Errored(AlertRequestError::Transport { .. })
    ));

    let (input, view, error_message, error_visible) = snapshot(&controller).await;
    assert_eq!(input, "ny");
    assert!(view.is_none(), "stale TX alerts must not render");
    assert_eq!(error_message, FETCH_FAILED_MESSAGE);
    assert!(error_visible);
    assert_eq!(controller.state().await, WidgetState::Errored);
}

/// **VALUE**: The widget reports `AwaitingResponse` while a fetch is in flight.
#[tokio::test]
async fn given_slow_response_when_state_read_mid_flight_then_awaiting_response() {
    // GIVEN: A slow endpoint and a shared controller
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(feed_json(&[]))
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&server)
        .await;
    let controller = Arc::new(controller(&server.uri(), "wa", ControllerOptions::default()));
    assert_eq!(controller.state().await, WidgetState::Idle);

    // WHEN: Triggering on a spawned task
    let task = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.trigger().await })
    };
    tokio::time::sleep(Duration::from_millis(100)).await;

    // THEN: Awaiting, then displayed
    assert_eq!(controller.state().await, WidgetState::AwaitingResponse);
    let outcome = task.await.expect("task should not panic");
    assert!(matches!(outcome, RequestOutcome::Displayed { alert_count: 0 }));
    assert_eq!(controller.state().await, WidgetState::Displayed);
}

#[tokio::test]
async fn given_direct_render_and_error_calls_when_made_then_regions_follow() {
    let server = MockServer::start().await;
    let controller = controller(&server.uri(), "", ControllerOptions::default());

    let feed: AlertFeed = [Alert::with_headline("Winter Storm Watch")]
        .into_iter()
        .collect();
    controller.render_alerts(&feed).await;
    controller.report_error("something went wrong").await;
    controller.report_error("something went wrong").await;

    let (_, view, message, visible) = snapshot(&controller).await;
    assert_eq!(view.expect("rendered").heading, "Weather Alerts: 1");
    assert_eq!(message, "something went wrong");
    assert!(visible);

    controller.clear_error().await;
    controller.clear_error().await;
    let (_, _, message, visible) = snapshot(&controller).await;
    assert!(message.is_empty());
    assert!(!visible);
}
