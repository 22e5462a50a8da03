use crate::error::alerts_client::AlertsClientError;
use crate::error::controller::{
    AlertRequestError, FETCH_FAILED_MESSAGE, INVALID_REGION_MESSAGE, INVALID_RESPONSE_MESSAGE,
};

use common::{ErrorLocation, HttpStatusCode};
use models::RegionCode;

use std::panic::Location;

/// **VALUE**: Non-2xx responses surface the generic fetch failure text.
///
/// **WHY THIS MATTERS**: The response body of a failed request is discarded, and the user
/// sees the same message for every failed status.
#[test]
fn given_status_error_when_mapped_then_transport_with_generic_message() {
    // GIVEN: A 500 from the alerts client
    let client_error = AlertsClientError::Status {
        status: HttpStatusCode(500),
        message: String::from("alerts endpoint rejected area NY"),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Mapping into the request taxonomy
    let error = AlertRequestError::from(client_error);

    // THEN: Transport error carrying the status, generic user text
    assert!(matches!(
        error,
        AlertRequestError::Transport {
            status: Some(HttpStatusCode(500)),
            ..
        }
    ));
    assert_eq!(error.user_message(), FETCH_FAILED_MESSAGE);
}

#[test]
fn given_network_error_when_mapped_then_transport_without_status() {
    let client_error = AlertsClientError::Http {
        message: String::from("connection refused"),
        location: ErrorLocation::from(Location::caller()),
    };

    let error = AlertRequestError::from(client_error);

    assert!(matches!(
        error,
        AlertRequestError::Transport { status: None, .. }
    ));
    assert_eq!(
        error.user_message(),
        format!("{FETCH_FAILED_MESSAGE}: connection refused")
    );
}

#[test]
fn given_json_error_when_mapped_then_parse_error_keeps_decoder_message() {
    let client_error = AlertsClientError::Json {
        message: String::from("expected value at line 1 column 1"),
        location: ErrorLocation::from(Location::caller()),
    };

    let error = AlertRequestError::from(client_error);

    assert!(matches!(error, AlertRequestError::Parse { .. }));
    let message = error.user_message();
    assert!(message.starts_with(INVALID_RESPONSE_MESSAGE));
    assert!(message.contains("expected value"));
}

/// **VALUE**: Validation failures keep the model's location but show the fixed prompt.
///
/// **BUG THIS CATCHES**: Would catch the location being reset to the conversion site,
/// which would point every validation failure at this mapping instead of `RegionCode::parse`.
#[test]
fn given_model_validation_error_when_mapped_then_location_is_preserved() {
    // GIVEN: A region code that fails validation
    let model_error = RegionCode::parse("x").unwrap_err();
    let models::ModelError::Validation { location, .. } = model_error.clone();

    // WHEN: Mapping
    let error = AlertRequestError::from(model_error);

    // THEN: Same location, fixed user text
    match &error {
        AlertRequestError::Validation {
            location: mapped, ..
        } => assert_eq!(*mapped, location),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(error.user_message(), INVALID_REGION_MESSAGE);
}

#[test]
fn given_request_error_when_displayed_then_includes_kind_and_location() {
    let error = AlertRequestError::Parse {
        message: String::from("missing field `features`"),
        location: ErrorLocation::from(Location::caller()),
    };

    let formatted = error.to_string();

    assert!(formatted.starts_with("Parse Error: missing field `features`"));
    assert!(formatted.contains("error.rs"));
}
