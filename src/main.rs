use std::process::ExitCode;
use std::time::Duration;

use chrono::Timelike;
use clap::{Parser, Subcommand};

use skyglobe::constellation::{positions_at, FetchError, HttpSnapshotSource, SnapshotCache};
use skyglobe::cursor::TimeCursor;
use skyglobe::scene::{place_markers, Frame};
use skyglobe::web::{run_server, Config, ConfigError};
use skyglobe::wildfire::{normalize, WildfireClient};

#[derive(Parser)]
#[command(name = "skyglobe")]
#[command(about = "Snapshot cache, interpolation and relay for a satellite globe")]
struct Cli {
    /// Path to the YAML config; defaults apply when omitted
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the relay and frame API server
    Serve,
    /// Print one interpolated, projected frame as JSON
    Frame {
        /// Fractional hour in [0, 23]
        t: f64,
    },
    /// Fetch the wildfire feed and print normalized markers as JSON
    Fires,
    /// Advance the time cursor continuously, printing a frame per tick
    Play {
        /// Starting hour; defaults to the current UTC hour
        #[arg(long)]
        from: Option<f64>,
        /// Hours added per tick
        #[arg(long, default_value_t = 1.0)]
        step: f64,
        /// Wall-clock delay between ticks
        #[arg(long, default_value = "2s", value_parser = humantime::parse_duration)]
        interval: Duration,
        /// Number of ticks before exiting; runs forever when omitted
        #[arg(long)]
        ticks: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error reading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Serve => serve(config).await,
        Commands::Frame { t } => frame(config, t).await,
        Commands::Fires => fires(config).await,
        Commands::Play {
            from,
            step,
            interval,
            ticks,
        } => play(config, from, step, interval, ticks).await,
    }
}

fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::from_file(path),
        None => Ok(Config::default()),
    }
}

async fn serve(config: Config) -> ExitCode {
    match run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn frame(config: Config, t: f64) -> ExitCode {
    let cache = match build_cache(&config) {
        Ok(cache) => cache,
        Err(e) => {
            eprintln!("Error building snapshot source: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match positions_at(&cache, t).await {
        Some(positions) => print_json(&Frame::assemble(t, &positions, config.globe.radius)),
        None => {
            eprintln!("Time cursor {} outside 0..=23", t);
            ExitCode::FAILURE
        }
    }
}

async fn fires(config: Config) -> ExitCode {
    let client = match WildfireClient::new(
        &config.wildfires.endpoint,
        config.wildfires.days,
        config.wildfires.timeout,
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error building wildfire client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match client.fetch_events().await {
        Ok(feed) => print_json(&place_markers(normalize(feed), config.globe.radius)),
        Err(e) => {
            eprintln!("Error fetching wildfire events: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn play(
    config: Config,
    from: Option<f64>,
    step: f64,
    interval: Duration,
    ticks: Option<u32>,
) -> ExitCode {
    let cache = match build_cache(&config) {
        Ok(cache) => cache,
        Err(e) => {
            eprintln!("Error building snapshot source: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let start = from.unwrap_or_else(|| f64::from(chrono::Utc::now().hour()));
    let mut cursor = TimeCursor::new(start);
    let mut timer = tokio::time::interval(interval);
    let mut remaining = match ticks {
        Some(0) => return ExitCode::SUCCESS,
        other => other,
    };

    loop {
        timer.tick().await;

        let t = cursor.value();
        match positions_at(&cache, t).await {
            Some(positions) => {
                let frame = Frame::assemble(t, &positions, config.globe.radius);
                match serde_json::to_string(&frame) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error encoding frame: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            }
            None => log::warn!("Cursor {} outside the day range, skipping tick", t),
        }

        cursor.advance(step);

        if let Some(count) = remaining.as_mut() {
            *count -= 1;
            if *count == 0 {
                return ExitCode::SUCCESS;
            }
        }
    }
}

fn build_cache(config: &Config) -> Result<SnapshotCache<HttpSnapshotSource>, FetchError> {
    let source = HttpSnapshotSource::new(&config.snapshots.endpoint, config.snapshots.timeout)?;
    Ok(SnapshotCache::new(source))
}

fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error encoding output: {}", e);
            ExitCode::FAILURE
        }
    }
}
