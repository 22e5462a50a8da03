use crate::terminal::{TerminalAlerts, TerminalError, TerminalInput, write_alerts_view};

use client_core::controller::{AlertsRegion, AlertsView, ErrorRegion, InputField};

fn view(items: &[&str]) -> AlertsView {
    AlertsView {
        heading: format!("Weather Alerts: {}", items.len()),
        items: items.iter().map(|item| item.to_string()).collect(),
    }
}

#[test]
fn given_view_when_written_then_heading_then_one_bullet_per_item() {
    let mut out = Vec::new();

    write_alerts_view(&mut out, &view(&["Flood Warning", "Heat Advisory"])).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Weather Alerts: 2\n  - Flood Warning\n  - Heat Advisory\n"
    );
}

#[test]
fn given_empty_view_when_written_then_only_heading() {
    let mut out = Vec::new();

    write_alerts_view(&mut out, &view(&[])).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Weather Alerts: 0\n");
}

/// **VALUE**: The alerts region tracks what it currently shows, including after a clear.
///
/// **WHY THIS MATTERS**: The terminal cannot erase printed text, so `current()` is the
/// only reliable answer to "what is on screen".
#[test]
fn given_alerts_region_when_replaced_and_cleared_then_current_follows() {
    // GIVEN: An empty region
    let mut region = TerminalAlerts::new(Vec::new());
    assert!(region.current().is_none());

    // WHEN: Replacing twice
    region.replace(view(&["Flood Warning"]));
    region.replace(view(&["Heat Advisory", "Wind Advisory"]));

    // THEN: Only the latest view is current, both were printed
    assert_eq!(region.current().unwrap().items.len(), 2);
    let printed = String::from_utf8(region.writer().clone()).unwrap();
    assert!(printed.contains("Weather Alerts: 1"));
    assert!(printed.contains("Weather Alerts: 2"));

    // AND: Clearing forgets the view
    region.clear();
    assert!(region.current().is_none());
}

#[test]
fn given_error_region_when_shown_and_hidden_then_visibility_and_text_follow() {
    let mut region = TerminalError::new(Vec::new());

    region.show("Failed to fetch weather alerts");
    assert!(region.is_visible());
    assert_eq!(region.message(), "Failed to fetch weather alerts");
    assert_eq!(
        String::from_utf8(region.writer().clone()).unwrap(),
        "Error: Failed to fetch weather alerts\n"
    );

    region.hide();
    region.hide();
    assert!(!region.is_visible());
    assert!(region.message().is_empty());
}

#[test]
fn given_input_when_set_and_cleared_then_value_follows() {
    let mut input = TerminalInput::default();

    input.set_value(" tx ");
    assert_eq!(input.value(), " tx ");

    input.clear();
    assert_eq!(input.value(), "");
}
