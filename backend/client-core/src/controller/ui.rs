//! UI regions the controller writes to.
//!
//! The controller is the only writer. Implementations decide what "visible"
//! means on their surface (a DOM node, a terminal, a test double).

use crate::controller::render::{AlertsView, render_alerts};

use models::AlertFeed;

/// Text field holding the typed region code.
pub trait InputField: Send {
    fn value(&self) -> String;
    fn clear(&mut self);
}

/// Container fully repopulated on every successful fetch.
pub trait AlertsRegion: Send {
    fn replace(&mut self, view: AlertsView);
    fn clear(&mut self);
}

/// Container whose text and visibility toggle with errors.
pub trait ErrorRegion: Send {
    fn show(&mut self, message: &str);
    fn hide(&mut self);
}

/// The three region handles injected into an `AlertController`.
#[derive(Debug, Default)]
pub struct WidgetRegions<I, A, E> {
    pub input: I,
    pub alerts: A,
    pub error: E,
}

impl<I, A, E> WidgetRegions<I, A, E>
where
    I: InputField,
    A: AlertsRegion,
    E: ErrorRegion,
{
    pub fn new(input: I, alerts: A, error: E) -> Self {
        Self {
            input,
            alerts,
            error,
        }
    }

    pub fn render_alerts(&mut self, feed: &AlertFeed) {
        self.alerts.replace(render_alerts(feed));
    }

    pub fn report_error(&mut self, message: &str) {
        self.error.show(message);
    }

    pub fn clear_error(&mut self) {
        self.error.hide();
    }
}
