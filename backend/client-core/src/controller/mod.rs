//! Alert fetch-and-render controller.
//!
//! Owns the whole cycle for one widget: read the input field, validate the
//! region code, fetch, then render the feed or report the failure.
//!
//! # Concurrency
//!
//! Requests are never cancelled and may overlap. Every trigger takes a
//! [`RequestTicket`]; a request that finishes after a newer trigger is
//! discarded as [`RequestOutcome::Superseded`], so the UI always reflects the
//! most recent trigger. Tickets are taken under the region lock, together with
//! the input they belong to. The region lock is never held across the network
//! call.

pub mod render;
pub mod sequence;
pub mod ui;

pub use render::{ALERTS_HEADING_PREFIX, AlertsView, render_alerts};
pub use sequence::{RequestSequence, RequestTicket};
pub use ui::{AlertsRegion, ErrorRegion, InputField, WidgetRegions};

use crate::alerts_client::AlertsClient;
use crate::config::DisplayConfig;
use crate::error::controller::AlertRequestError;

use models::{AlertFeed, RegionCode};

use log::{debug, info, warn};
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Idle,
    AwaitingResponse,
    Displayed,
    Errored,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Empty the alerts region when a request fails instead of leaving the
    /// previous result on screen.
    pub clear_alerts_on_error: bool,
}

impl From<&DisplayConfig> for ControllerOptions {
    fn from(display: &DisplayConfig) -> Self {
        Self {
            clear_alerts_on_error: display.clear_alerts_on_error,
        }
    }
}

/// Result of one trigger. Failures have already been written to the error region.
#[derive(Debug, Clone)]
pub enum RequestOutcome {
    Displayed { alert_count: usize },
    Errored(AlertRequestError),
    /// A newer trigger happened before this request finished; nothing was rendered.
    Superseded,
}

/// A triggered request that has its ticket but has not been sent yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    ticket: RequestTicket,
    raw: String,
}

impl PendingRequest {
    pub fn ticket(&self) -> RequestTicket {
        self.ticket
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

struct WidgetInner<I, A, E> {
    regions: WidgetRegions<I, A, E>,
    state: WidgetState,
}

pub struct AlertController<I, A, E> {
    client: AlertsClient,
    options: ControllerOptions,
    sequence: RequestSequence,
    inner: Mutex<WidgetInner<I, A, E>>,
}

impl<I, A, E> AlertController<I, A, E>
where
    I: InputField,
    A: AlertsRegion,
    E: ErrorRegion,
{
    pub fn new(
        client: AlertsClient,
        regions: WidgetRegions<I, A, E>,
        options: ControllerOptions,
    ) -> Self {
        Self {
            client,
            options,
            sequence: RequestSequence::new(),
            inner: Mutex::new(WidgetInner {
                regions,
                state: WidgetState::Idle,
            }),
        }
    }

    pub async fn state(&self) -> WidgetState {
        self.inner.lock().await.state
    }

    /// Run `f` with exclusive access to the regions.
    ///
    /// Used by the shell to feed typed text into the input field, and by tests
    /// to inspect what was rendered.
    pub async fn with_regions<R>(&self, f: impl FnOnce(&mut WidgetRegions<I, A, E>) -> R) -> R {
        let mut inner = self.inner.lock().await;
        f(&mut inner.regions)
    }

    /// The activation control: request alerts for whatever the input field holds.
    pub async fn trigger(&self) -> RequestOutcome {
        let pending = self.begin_request(|_| {}).await;
        self.complete_request(pending).await
    }

    /// Validate `raw`, fetch the region's active alerts and update the UI.
    pub async fn request_alerts(&self, raw: &str) -> RequestOutcome {
        let pending = {
            let _inner = self.inner.lock().await;
            PendingRequest {
                ticket: self.sequence.begin(),
                raw: raw.to_string(),
            }
        };
        self.complete_request(pending).await
    }

    /// Apply `edit` to the input field and ticket the resulting value.
    ///
    /// Both happen under the region lock, so an older request finishing
    /// afterwards sees itself superseded and cannot clear the new input.
    pub async fn begin_request(&self, edit: impl FnOnce(&mut I)) -> PendingRequest {
        let mut inner = self.inner.lock().await;
        edit(&mut inner.regions.input);

        PendingRequest {
            ticket: self.sequence.begin(),
            raw: inner.regions.input.value(),
        }
    }

    /// Run a request ticketed by [`Self::begin_request`].
    pub async fn complete_request(&self, pending: PendingRequest) -> RequestOutcome {
        let PendingRequest { ticket, raw } = pending;
        debug!("Request {ticket}: raw input {raw:?}");

        let region = match RegionCode::parse(&raw) {
            Ok(region) => region,
            Err(e) => {
                return self
                    .finish_with_error(ticket, AlertRequestError::from(e))
                    .await;
            }
        };

        {
            let mut inner = self.inner.lock().await;
            if self.sequence.is_current(ticket) {
                inner.state = WidgetState::AwaitingResponse;
            }
        }

        info!("Request {ticket}: fetching active alerts for {region}");

        match self.client.fetch_active_alerts(&region).await {
            Ok(feed) => self.finish_with_feed(ticket, &region, &feed).await,
            Err(e) => {
                self.finish_with_error(ticket, AlertRequestError::from(e))
                    .await
            }
        }
    }

    /// Replace the alerts region with `feed`.
    pub async fn render_alerts(&self, feed: &AlertFeed) {
        self.inner.lock().await.regions.render_alerts(feed);
    }

    /// Show `message` in the error region.
    pub async fn report_error(&self, message: &str) {
        self.inner.lock().await.regions.report_error(message);
    }

    /// Empty and hide the error region.
    pub async fn clear_error(&self) {
        self.inner.lock().await.regions.clear_error();
    }

    async fn finish_with_feed(
        &self,
        ticket: RequestTicket,
        region: &RegionCode,
        feed: &AlertFeed,
    ) -> RequestOutcome {
        let mut inner = self.inner.lock().await;

        if !self.sequence.is_current(ticket) {
            warn!("Request {ticket}: discarding {region} alerts, superseded by a newer request");
            return RequestOutcome::Superseded;
        }

        inner.regions.render_alerts(feed);
        inner.regions.clear_error();
        inner.regions.input.clear();
        inner.state = WidgetState::Displayed;

        info!("Request {ticket}: displayed {} alerts for {region}", feed.len());
        RequestOutcome::Displayed {
            alert_count: feed.len(),
        }
    }

    async fn finish_with_error(
        &self,
        ticket: RequestTicket,
        error: AlertRequestError,
    ) -> RequestOutcome {
        let mut inner = self.inner.lock().await;

        if !self.sequence.is_current(ticket) {
            warn!("Request {ticket}: discarding failure, superseded by a newer request: {error}");
            return RequestOutcome::Superseded;
        }

        warn!("Request {ticket} failed: {error}");

        inner.regions.report_error(&error.user_message());
        if self.options.clear_alerts_on_error {
            inner.regions.alerts.clear();
        }
        inner.state = WidgetState::Errored;

        RequestOutcome::Errored(error)
    }
}
