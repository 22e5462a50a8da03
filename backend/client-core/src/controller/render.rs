use models::AlertFeed;

pub const ALERTS_HEADING_PREFIX: &str = "Weather Alerts: ";

/// Content of the alerts region: a count heading and one item per headline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertsView {
    pub heading: String,
    pub items: Vec<String>,
}

impl AlertsView {
    pub fn alert_count(&self) -> usize {
        self.items.len()
    }
}

/// Map a feed to its rendered form.
///
/// The heading always states `feed.len()`, so it cannot drift from the item list.
pub fn render_alerts(feed: &AlertFeed) -> AlertsView {
    AlertsView {
        heading: format!("{ALERTS_HEADING_PREFIX}{}", feed.len()),
        items: feed.headlines().map(String::from).collect(),
    }
}
