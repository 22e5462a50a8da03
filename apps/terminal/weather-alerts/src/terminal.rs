//! Terminal implementations of the widget's UI regions.
//!
//! The typed line is the input field, pressing Enter is the trigger, and the
//! alerts and error regions print to a writer (stdout in the binary).

use client_core::controller::{AlertsRegion, AlertsView, ErrorRegion, InputField};

use std::io::{Result as IoResult, Write};

use log::warn;

const ITEM_PREFIX: &str = "  - ";
const ERROR_PREFIX: &str = "Error: ";

#[derive(Debug, Default, Clone)]
pub struct TerminalInput {
    value: String,
}

impl TerminalInput {
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

impl InputField for TerminalInput {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn clear(&mut self) {
        self.value.clear();
    }
}

/// Write a rendered view as a heading followed by one bullet per headline.
pub fn write_alerts_view<W: Write>(out: &mut W, view: &AlertsView) -> IoResult<()> {
    writeln!(out, "{}", view.heading)?;
    for item in &view.items {
        writeln!(out, "{ITEM_PREFIX}{item}")?;
    }
    out.flush()
}

/// Alerts region. Printed output cannot be erased, so the region also keeps
/// the view it currently shows.
#[derive(Debug)]
pub struct TerminalAlerts<W> {
    out: W,
    current: Option<AlertsView>,
}

impl<W: Write> TerminalAlerts<W> {
    pub fn new(out: W) -> Self {
        Self { out, current: None }
    }

    pub fn current(&self) -> Option<&AlertsView> {
        self.current.as_ref()
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write + Send> AlertsRegion for TerminalAlerts<W> {
    fn replace(&mut self, view: AlertsView) {
        if let Err(e) = write_alerts_view(&mut self.out, &view) {
            warn!("Failed to write alerts to terminal: {e}");
        }
        self.current = Some(view);
    }

    fn clear(&mut self) {
        self.current = None;
    }
}

#[derive(Debug)]
pub struct TerminalError<W> {
    out: W,
    message: String,
    visible: bool,
}

impl<W: Write> TerminalError<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            message: String::new(),
            visible: false,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write + Send> ErrorRegion for TerminalError<W> {
    fn show(&mut self, message: &str) {
        self.message = message.to_string();
        self.visible = true;

        let written = writeln!(self.out, "{ERROR_PREFIX}{message}").and_then(|()| self.out.flush());
        if let Err(e) = written {
            warn!("Failed to write error to terminal: {e}");
        }
    }

    fn hide(&mut self) {
        self.message.clear();
        self.visible = false;
    }
}
