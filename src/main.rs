use clap::Parser;
use greedy_tour::app;
use greedy_tour::config::{LogFormat, LoggingSettings, Settings};
use greedy_tour::core::DistanceMethod;
use greedy_tour::services::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Visit every city by always travelling to the nearest unvisited one
#[derive(Debug, Parser)]
#[command(
    version,
    after_help = "INPUT holds one point per line: <city name>\\t<latitude>\\t<longitude>"
)]
struct Cli {
    /// Point list to read (defaults to input.path, normally cities.txt)
    input: Option<PathBuf>,

    /// Distance formula used to pick the nearest point
    #[arg(short, long, value_enum)]
    method: Option<DistanceMethod>,

    /// Output rendering
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Explicit configuration file instead of config/default and config/local
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn init_tracing(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    match logging.format {
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
        LogFormat::Json => subscriber.json().init(),
    }
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    let mut settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            // logging is not configured yet
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&settings.logging);

    match cli.input {
        Some(path) => settings.input.path = path,
        None => info!("No input given, using {}", settings.input.path.display()),
    }
    if let Some(method) = cli.method {
        settings.tour.method = method;
    }
    if let Some(format) = cli.format {
        settings.output.format = format;
    }

    let stdout = std::io::stdout();
    match app::run(&settings, stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
