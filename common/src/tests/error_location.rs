use crate::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures file, line, and column.
///
/// **WHY THIS MATTERS**: Every error in the workspace carries an `ErrorLocation`.
/// A failed alerts fetch logged without an accurate position is much harder to trace.
///
/// **BUG THIS CATCHES**: Would catch if `Location::caller()` stops being captured
/// or if the file/line/column fields are mixed up.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN/WHEN: Capturing the current position
    let location = ErrorLocation::from(Location::caller());

    // THEN: File, line and column are populated
    assert!(
        location.file.contains("error_location.rs"),
        "Should capture file path"
    );
    assert_eq!(location.line, 15, "Should capture correct line number");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies the `[file:line:column]` Display format used in every error message.
///
/// **BUG THIS CATCHES**: Would catch a Display change that drops the brackets or a field.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: An ErrorLocation
    let location = ErrorLocation::from(Location::caller());

    // WHEN: Formatting as string
    let formatted = location.to_string();

    // THEN: "[file:line:column]"
    let expected = format!("[{}:{}:{}]", location.file, location.line, location.column);
    assert_eq!(formatted, expected);
}

/// **VALUE**: Proves `#[track_caller]` helpers report the call site, not the helper body.
///
/// **WHY THIS MATTERS**: Error conversions (`From<reqwest::Error>` and friends) rely on this
/// so the location points at the `?` that failed.
#[test]
fn given_multiple_call_sites_when_capturing_location_then_each_has_unique_line() {
    // GIVEN: A helper function that captures location
    #[track_caller]
    fn capture_location() -> ErrorLocation {
        ErrorLocation::from(Location::caller())
    }

    // WHEN: Capturing location from different call sites
    let loc1 = capture_location();
    let loc2 = capture_location();

    // THEN: Same file, sequential lines
    assert_eq!(loc1.file, loc2.file, "Should have same file");
    assert_eq!(loc1.line + 1, loc2.line, "Lines should be sequential");
}
