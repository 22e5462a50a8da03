use crate::HttpStatusCode;

#[test]
fn given_2xx_codes_when_classified_then_success() {
    for code in [200u16, 201, 204, 299] {
        let status = HttpStatusCode::from(code);
        assert!(status.is_success(), "{code} should be a success");
        assert!(!status.is_client_error());
        assert!(!status.is_server_error());
    }
}

/// **VALUE**: Non-2xx responses are failures regardless of body content.
///
/// **BUG THIS CATCHES**: Would catch an off-by-one range (e.g. treating 300 as success)
/// that would let redirects or error pages reach the JSON decoder.
#[test]
fn given_non_2xx_codes_when_classified_then_not_success() {
    // GIVEN: Codes just outside and well outside the success range
    let codes = [199u16, 300, 404, 500, 503];

    // WHEN/THEN: None of them are successes
    for code in codes {
        assert!(
            !HttpStatusCode(code).is_success(),
            "{code} must not be a success"
        );
    }

    assert!(HttpStatusCode(404).is_client_error());
    assert!(HttpStatusCode(500).is_server_error());
    assert!(!HttpStatusCode(500).is_client_error());
}

#[test]
fn given_status_when_displayed_then_prefixed_with_http() {
    assert_eq!(HttpStatusCode(500).to_string(), "HTTP 500");
}
