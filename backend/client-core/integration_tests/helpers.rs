//! Test doubles for the UI regions and mock alerts endpoint helpers.

use client_core::config::ApiConfig;
use client_core::controller::{
    AlertsRegion, AlertsView, ErrorRegion, InputField, WidgetRegions,
};
use client_core::{AlertController, AlertsClient, ControllerOptions};

use serde_json::{Value, json};
use wiremock::MockServer;

pub const ALERTS_PATH: &str = "/alerts/active";

#[derive(Debug, Default)]
pub struct FakeInput {
    pub value: String,
}

impl InputField for FakeInput {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn clear(&mut self) {
        self.value.clear();
    }
}

#[derive(Debug, Default)]
pub struct FakeAlerts {
    pub view: Option<AlertsView>,
    pub replace_count: usize,
}

impl AlertsRegion for FakeAlerts {
    fn replace(&mut self, view: AlertsView) {
        self.view = Some(view);
        self.replace_count += 1;
    }

    fn clear(&mut self) {
        self.view = None;
    }
}

#[derive(Debug, Default)]
pub struct FakeError {
    pub message: String,
    pub visible: bool,
}

impl ErrorRegion for FakeError {
    fn show(&mut self, message: &str) {
        self.message = message.to_string();
        self.visible = true;
    }

    fn hide(&mut self) {
        self.message.clear();
        self.visible = false;
    }
}

pub type FakeController = AlertController<FakeInput, FakeAlerts, FakeError>;

pub fn api_config(server_uri: &str) -> ApiConfig {
    ApiConfig {
        endpoint: format!("{server_uri}{ALERTS_PATH}"),
        ..ApiConfig::default()
    }
}

pub fn controller(server_uri: &str, input: &str, options: ControllerOptions) -> FakeController {
    let client = AlertsClient::new(&api_config(server_uri)).expect("client should build");
    let regions = WidgetRegions::new(
        FakeInput {
            value: input.to_string(),
        },
        FakeAlerts::default(),
        FakeError::default(),
    );
    AlertController::new(client, regions, options)
}

/// Minimal alerts document with one feature per headline.
pub fn feed_json(headlines: &[&str]) -> Value {
    let features: Vec<Value> = headlines
        .iter()
        .map(|headline| {
            json!({
                "type": "Feature",
                "properties": { "event": "Test", "headline": headline }
            })
        })
        .collect();

    json!({ "type": "FeatureCollection", "features": features })
}

/// Snapshot of the fake regions: (input value, rendered view, error message, error visible).
pub async fn snapshot(
    controller: &FakeController,
) -> (String, Option<AlertsView>, String, bool) {
    controller
        .with_regions(|regions| {
            (
                regions.input.value.clone(),
                regions.alerts.view.clone(),
                regions.error.message.clone(),
                regions.error.visible,
            )
        })
        .await
}

pub async fn received_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}
