use air_subway::cli::{Args, OutputFormat};
use air_subway::fetch::{FixedWeather, OfflineSource, SeoulLiveData, SeoulOpenApi};
use air_subway::render::{render_human, render_json};
use air_subway::{AppConfig, Diagnoser, load_congestion_table};
use anyhow::Context;
use chrono::Local;
use clap::Parser;
use std::process;
use tracing::debug;

fn main() {
    let args = Args::parse();
    setup_logging(&args);

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(run(args)) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let mut config =
        AppConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(data) = &args.data {
        config = config.with_data_path(data.clone());
    }
    if let Some(hours) = args.horizon {
        config = config.with_golden_horizon(hours);
    }
    config.validate()?;

    let table = load_congestion_table(&config.data_path).with_context(|| {
        format!(
            "Failed to load congestion table from {}",
            config.data_path.display()
        )
    })?;

    let now = args
        .evaluation_time()?
        .unwrap_or_else(|| Local::now().naive_local());
    let weather = FixedWeather::from_config(&config.weather);

    let report = if args.offline {
        Diagnoser::new(&table, OfflineSource::new(weather))
            .with_horizon(config.golden_horizon_hours)
            .diagnose(&args.station, now)
            .await
    } else {
        let api = SeoulOpenApi::new(&config.seoul, config.request_timeout())?;
        Diagnoser::new(&table, SeoulLiveData::new(api, weather))
            .with_horizon(config.golden_horizon_hours)
            .diagnose(&args.station, now)
            .await
    };

    match args.output_format {
        OutputFormat::Human => print!("{}", render_human(&report)),
        OutputFormat::Json => println!("{}", render_json(&report)?),
    }

    Ok(())
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("air_subway={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}
