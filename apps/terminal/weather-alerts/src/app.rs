//! Terminal event loop.
//!
//! Each line read from the terminal is written into the input field and
//! triggers the controller on its own task, so a slow fetch never blocks the
//! next line. Overlapping requests are resolved by the controller.

use crate::error::WeatherAlertsError;
use crate::terminal::TerminalInput;

use client_core::controller::{AlertsRegion, ErrorRegion};
use client_core::{AlertController, RequestOutcome};

use std::sync::Arc;

use log::{debug, error, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;

pub const QUIT_COMMANDS: [&str; 2] = [":q", ":quit"];

pub const PROMPT: &str = "Enter a 2-letter state code and press Enter (:q to quit)";

pub type TerminalController<A, E> = AlertController<TerminalInput, A, E>;

/// Read lines until EOF or a quit command.
///
/// On EOF, in-flight requests are awaited so their results are shown. On a
/// quit command they are aborted.
pub async fn run<A, E, R>(
    controller: Arc<TerminalController<A, E>>,
    input: R,
) -> Result<(), WeatherAlertsError>
where
    A: AlertsRegion + 'static,
    E: ErrorRegion + 'static,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut in_flight = JoinSet::new();

    while let Some(line) = lines.next_line().await? {
        if QUIT_COMMANDS.contains(&line.trim()) {
            info!("Quit requested, aborting {} in-flight requests", in_flight.len());
            in_flight.shutdown().await;
            return Ok(());
        }

        // Ticketed before spawning, so nothing older can render over this line.
        let pending = controller
            .begin_request(|input| input.set_value(line))
            .await;
        debug!("Request {} queued", pending.ticket());

        let controller = Arc::clone(&controller);
        in_flight.spawn(async move { controller.complete_request(pending).await });

        // Reap whatever already finished so the set does not grow unbounded.
        while let Some(joined) = in_flight.try_join_next() {
            log_outcome(joined);
        }
    }

    debug!("Input closed, waiting for {} in-flight requests", in_flight.len());
    while let Some(joined) = in_flight.join_next().await {
        log_outcome(joined);
    }

    Ok(())
}

fn log_outcome(joined: Result<RequestOutcome, tokio::task::JoinError>) {
    match joined {
        Ok(RequestOutcome::Displayed { alert_count }) => {
            debug!("Request finished: {alert_count} alerts displayed")
        }
        Ok(RequestOutcome::Errored(e)) => debug!("Request finished with error: {e}"),
        Ok(RequestOutcome::Superseded) => debug!("Request finished after a newer one"),
        Err(e) => error!("Request task failed: {e}"),
    }
}
