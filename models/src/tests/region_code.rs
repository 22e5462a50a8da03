use crate::{ModelError, RegionCode};

/// **VALUE**: Verifies that mixed-case, padded input normalizes to the uppercase code.
///
/// **WHY THIS MATTERS**: The code goes straight into the `area=` query parameter.
/// The upstream service only recognises uppercase codes.
///
/// **BUG THIS CATCHES**: Would catch if trimming or uppercasing were dropped from `parse`.
#[test]
fn given_mixed_case_padded_input_when_parsed_then_normalized_to_uppercase() {
    for raw in ["ca", "CA", " Ca ", "\tcA\n"] {
        // WHEN: Parsing raw input
        let code = RegionCode::parse(raw).expect("two characters after trimming");

        // THEN: Normalized form is the uppercase code
        assert_eq!(code.as_str(), "CA", "input {raw:?}");
    }
}

/// **VALUE**: Every input that is not exactly two characters after trimming is rejected.
///
/// **WHY THIS MATTERS**: A rejected code must never reach the network layer.
#[test]
fn given_wrong_length_input_when_parsed_then_returns_validation_error() {
    // GIVEN: Empty, whitespace, short, and long inputs
    let inputs = ["", "   ", "x", " t ", "TXA", "texas", "N Y"];

    for raw in inputs {
        // WHEN: Parsing
        let result = RegionCode::parse(raw);

        // THEN: Validation error
        assert!(
            matches!(result, Err(ModelError::Validation { .. })),
            "input {raw:?} should be rejected"
        );
    }
}

#[test]
fn given_empty_input_when_parsed_then_message_says_required() {
    match RegionCode::parse("  ").unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Region code is required");
        }
    }
}

/// **VALUE**: Length is counted in characters, not bytes.
///
/// **BUG THIS CATCHES**: Would catch a switch to `str::len()`, which would reject
/// two-character non-ASCII input and accept single multi-byte characters.
#[test]
fn given_two_non_ascii_chars_when_parsed_then_accepted_by_char_count() {
    // GIVEN: Two characters, four bytes
    let raw = "éé";

    // WHEN: Parsing
    let code = RegionCode::parse(raw).expect("two characters");

    // THEN: Uppercased, still two characters
    assert_eq!(code.as_str(), "ÉÉ");
}

#[test]
fn given_region_code_when_round_tripped_through_serde_then_validation_applies() {
    let code: RegionCode = serde_json::from_str("\"tx\"").expect("valid code");
    assert_eq!(code.to_string(), "TX");
    assert_eq!(serde_json::to_string(&code).unwrap(), "\"TX\"");

    let invalid = serde_json::from_str::<RegionCode>("\"texas\"");
    assert!(invalid.is_err(), "deserialization must validate length");
}

#[test]
fn given_str_when_from_str_used_then_matches_parse() {
    let code: RegionCode = "ny".parse().unwrap();
    assert_eq!(code, RegionCode::parse("NY").unwrap());
}
