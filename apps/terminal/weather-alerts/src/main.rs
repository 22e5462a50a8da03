use weather_alerts::app::{PROMPT, run};
use weather_alerts::error::WeatherAlertsError;
use weather_alerts::logger::{default_log_dir, initialize as LoggerInitialize};
use weather_alerts::terminal::{TerminalAlerts, TerminalError, TerminalInput};

use client_core::config::{AppConfig, default_config_dir, load_dotenv};
use client_core::controller::WidgetRegions;
use client_core::{AlertController, AlertsClient, ControllerOptions};

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::io::stdout;
use std::panic::Location;
use std::sync::Arc;

use log::info;
use tokio::io::{BufReader, stdin};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), WeatherAlertsError> {
    // .env may set the config dir, so it is read before anything else.
    let dotenv_path = load_dotenv();

    let config_dir = default_config_dir()?;
    let log_dir = default_log_dir(&config_dir);

    create_dir_all(&log_dir).map_err(|e| WeatherAlertsError::App {
        message: format!("Failed to create log directory {}: {e}", log_dir.display()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // Initialize logger FIRST
    LoggerInitialize(&log_dir)?;

    info!("Weather alerts starting");
    info!("Log directory: {}", log_dir.display());
    if let Some(path) = dotenv_path {
        info!("Environment loaded from {}", path.display());
    }

    let mut config = AppConfig::load(&config_dir)?;
    config.apply_env_overrides()?;

    let client = AlertsClient::new(&config.api)?;
    info!("Alerts endpoint: {}", client.endpoint());
    let regions = WidgetRegions::new(
        TerminalInput::default(),
        TerminalAlerts::new(stdout()),
        TerminalError::new(stdout()),
    );
    let controller = Arc::new(AlertController::new(
        client,
        regions,
        ControllerOptions::from(&config.display),
    ));

    println!("{PROMPT}");
    run(controller, BufReader::new(stdin())).await?;

    info!("Weather alerts stopped");
    Ok(())
}
