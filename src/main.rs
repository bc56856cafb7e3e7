use bmi_meter::config::Settings;
use bmi_meter::form::{FormHandler, Page, StderrNotifier, SubmitOutcome};
use bmi_meter::services::BmiApiClient;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Submit body measurements to the BMI service and show where the result
/// falls on the BMI meter
#[derive(Parser)]
#[command(name = "bmi-meter")]
#[command(about = "Calculate BMI through the BMI service and draw the meter")]
struct Cli {
    /// Weight in kilograms
    #[arg(long, default_value = "")]
    weight: String,
    /// Height as expected by the service
    #[arg(long, default_value = "")]
    height: String,
    /// Gender as offered by the form, e.g. "male" or "female"
    #[arg(long, default_value = "")]
    gender: String,
    /// Age in years
    #[arg(long, default_value = "")]
    age: String,
    /// Service origin, overrides the configured one
    #[arg(long)]
    base_url: Option<String>,
    /// Meter width in pixels, overrides the configured one
    #[arg(long)]
    meter_width: Option<f64>,
    /// Configuration file to load instead of config/default.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let mut settings = match settings {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    let filter = EnvFilter::try_from_env("BMI_LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    if let Some(base_url) = cli.base_url {
        settings.service.base_url = base_url;
    }
    if let Some(width) = cli.meter_width {
        settings.meter.width_px = width;
    }

    info!("Using BMI service at {}", settings.service.base_url);

    let client = match BmiApiClient::new(settings.service.base_url.clone(), settings.service.timeout()) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let page = Arc::new(Mutex::new(Page::with_form(
        settings.meter.width_px,
        &cli.weight,
        &cli.height,
        &cli.gender,
        &cli.age,
    )));
    let handler = FormHandler::new(client, StderrNotifier, Arc::clone(&page));

    match handler.submit().await {
        SubmitOutcome::Rendered { .. } => {
            print!("{}", page.lock().await.render());
            ExitCode::SUCCESS
        }
        SubmitOutcome::Rejected(_) | SubmitOutcome::Failed => ExitCode::FAILURE,
    }
}
