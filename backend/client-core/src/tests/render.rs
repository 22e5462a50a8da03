use crate::controller::{AlertsView, render_alerts};

use models::{Alert, AlertFeed};

/// **VALUE**: The rendered heading and item list come from the same feed.
///
/// **WHY THIS MATTERS**: The count shown to the user must always equal the number of
/// listed alerts.
///
/// **BUG THIS CATCHES**: Would catch headlines being reordered, deduplicated, or the
/// heading being computed from anything other than the feed length.
#[test]
fn given_two_alerts_when_rendered_then_heading_counts_and_items_keep_order() {
    // GIVEN: A two-alert feed
    let feed: AlertFeed = ["Flood Warning", "Heat Advisory"]
        .into_iter()
        .map(Alert::with_headline)
        .collect();

    // WHEN: Rendering
    let view = render_alerts(&feed);

    // THEN: Heading and items match the feed
    assert_eq!(view.heading, "Weather Alerts: 2");
    assert_eq!(view.items, vec!["Flood Warning", "Heat Advisory"]);
    assert_eq!(view.alert_count(), feed.len());
}

#[test]
fn given_empty_feed_when_rendered_then_zero_heading_and_no_items() {
    let view = render_alerts(&AlertFeed::default());

    assert_eq!(
        view,
        AlertsView {
            heading: String::from("Weather Alerts: 0"),
            items: Vec::new(),
        }
    );
}

#[test]
fn given_duplicate_headlines_when_rendered_then_each_is_listed() {
    let feed: AlertFeed = std::iter::repeat_n(Alert::with_headline("Wind Advisory"), 3).collect();

    let view = render_alerts(&feed);

    assert_eq!(view.heading, "Weather Alerts: 3");
    assert_eq!(view.items.len(), 3);
}
