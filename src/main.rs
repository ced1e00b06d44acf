use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use travel_records::chart::BarChart;
use travel_records::config::{LoggingConfig, RecordsConfig};
use travel_records::ingest::{write_travelers, write_trips};
use travel_records::query::{duration_by_destination, trip_durations};
use travel_records::{CleaningReport, RecordsError, Session};

#[derive(Parser, Debug)]
#[command(
    name = "travel-records",
    version,
    about = "Clean, validate and summarize traveler and trip records"
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Travelers CSV file (overrides configuration)
    #[arg(long, global = true)]
    travelers: Option<PathBuf>,

    /// Trips CSV file (overrides configuration)
    #[arg(long, global = true)]
    trips: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clean both files and write the cleaned copies
    Clean {
        /// Directory for the cleaned files
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Print the cleaning reports as JSON
        #[arg(long)]
        json: bool,

        /// List every dropped row with its reason
        #[arg(long)]
        audit: bool,
    },

    /// List cleaned traveler names
    Travelers,

    /// Show the trips of one traveler
    Show {
        /// Traveler name as it appears after cleaning
        #[arg(short, long)]
        name: String,

        /// Write the traveler's trip chart as SVG
        #[arg(long)]
        chart: Option<PathBuf>,
    },

    /// Total trip days per destination
    Durations {
        /// Print totals as JSON
        #[arg(long)]
        json: bool,

        /// Write the destination chart as SVG
        #[arg(long)]
        chart: Option<PathBuf>,
    },
}

/// Initialize the tracing subscriber; `RUST_LOG` takes precedence over config
fn init_logging(logging: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = RecordsConfig::load_from_path(cli.config.clone())
        .with_context(|| "Failed to load configuration")?;
    init_logging(&config.logging, cli.verbose);
    debug!("Using configuration: {:?}", config);

    let travelers_path = cli
        .travelers
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.input.travelers_file));
    let trips_path = cli
        .trips
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.input.trips_file));

    let session = Session::open(&travelers_path, &trips_path);

    match cli.command {
        Commands::Clean {
            out_dir,
            json,
            audit,
        } => clean(&session, &config, out_dir.as_deref(), json, audit),
        Commands::Travelers => {
            report_issues(&session);
            for name in session.traveler_names() {
                println!("{name}");
            }
            Ok(exit_code(&session))
        }
        Commands::Show { name, chart } => show(&session, &config, &name, chart.as_deref()),
        Commands::Durations { json, chart } => durations(&session, &config, json, chart.as_deref()),
    }
}

fn clean(
    session: &Session,
    config: &RecordsConfig,
    out_dir: Option<&Path>,
    json: bool,
    audit: bool,
) -> Result<ExitCode> {
    let (travelers_out, trips_out) = match out_dir {
        Some(dir) => (
            dir.join(&config.output.travelers_file),
            dir.join(&config.output.trips_file),
        ),
        None => (config.output.travelers_path(), config.output.trips_path()),
    };

    if !json {
        let read = |report: Option<&CleaningReport>| report.map_or(0, |r| r.rows_read);
        println!(
            "Loaded {} travelers and {} travel records.",
            read(session.traveler_report()),
            read(session.trip_report())
        );
    }

    let mut write_failures = Vec::new();

    if let Some(report) = session.traveler_report() {
        match write_travelers(&travelers_out, session.travelers()) {
            Ok(()) if !json => {
                print_report(report, audit);
                println!("Cleaned travelers saved to: {}", travelers_out.display());
            }
            Ok(()) => {}
            Err(err) => write_failures.push(write_failure(&travelers_out, &err)),
        }
    }

    if let Some(report) = session.trip_report() {
        if report.rows_kept == 0 {
            warn!("No valid travel records found in {}", report.dataset);
            if !json {
                println!("No valid travel records found.");
            }
        }
        match write_trips(&trips_out, session.trips()) {
            Ok(()) if !json => {
                print_report(report, audit);
                println!("Cleaned travel records saved to: {}", trips_out.display());
            }
            Ok(()) => {}
            Err(err) => write_failures.push(write_failure(&trips_out, &err)),
        }
    }

    if json {
        let errors: Vec<String> = session
            .issues()
            .map(ToString::to_string)
            .chain(write_failures.iter().cloned())
            .collect();
        let output = serde_json::json!({
            "travelers": session.traveler_report(),
            "trips": session.trip_report(),
            "errors": errors,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        report_issues(session);
        for failure in &write_failures {
            eprintln!("Error: {failure}");
        }
    }

    if !write_failures.is_empty() {
        return Ok(ExitCode::FAILURE);
    }
    if session.issues().next().is_none() {
        info!("Data cleaning completed successfully");
    }
    Ok(exit_code(session))
}

fn write_failure(path: &Path, err: &RecordsError) -> String {
    error!("Failed to write {}: {}", path.display(), err);
    format!("Failed to write {}: {}", path.display(), err.user_message())
}

fn show(
    session: &Session,
    config: &RecordsConfig,
    name: &str,
    chart: Option<&Path>,
) -> Result<ExitCode> {
    report_issues(session);
    if !session.is_ready() {
        eprintln!("Please load travelers and travels CSV first.");
        return Ok(ExitCode::FAILURE);
    }

    let Some((traveler, trips)) = session.itinerary(name) else {
        eprintln!("Traveler '{name}' not found in travelers data.");
        return Ok(ExitCode::FAILURE);
    };

    if trips.is_empty() {
        println!("No travel records found for {}.", traveler.name);
        return Ok(ExitCode::SUCCESS);
    }

    for trip in &trips {
        println!("{}", trip.format_itinerary());
    }

    if let Some(path) = chart {
        let durations = trip_durations(trips.iter().copied());
        let (width, height) = (config.chart.width, config.chart.height);
        BarChart::traveler_trips(&traveler.name, &durations, width, height)
            .save_svg(path)
            .with_context(|| format!("Failed to save chart to {}", path.display()))?;
        println!("Chart saved to {}", path.display());
    }

    Ok(ExitCode::SUCCESS)
}

fn durations(
    session: &Session,
    config: &RecordsConfig,
    json: bool,
    chart: Option<&Path>,
) -> Result<ExitCode> {
    report_issues(session);
    let totals = duration_by_destination(session.trips());

    if json {
        println!("{}", serde_json::to_string_pretty(&totals)?);
    } else {
        for total in &totals {
            println!("{:<24} {:>6}", total.destination, total.total_days);
        }
    }

    if let Some(path) = chart {
        BarChart::destination_totals(
            &totals,
            &config.chart.title,
            config.chart.width,
            config.chart.height,
        )
        .save_svg(path)
        .with_context(|| format!("Failed to save chart to {}", path.display()))?;
        if !json {
            println!("Chart saved to {}", path.display());
        }
    }

    Ok(exit_code(session))
}

fn print_report(report: &CleaningReport, audit: bool) {
    println!("{}", report.summary());
    if audit {
        for dropped in &report.dropped {
            println!("  row {}: {} ({})", dropped.row, dropped.key, dropped.reason);
        }
    }
}

fn report_issues(session: &Session) {
    for issue in session.issues() {
        eprintln!("Error: {}", issue.user_message());
    }
}

fn exit_code(session: &Session) -> ExitCode {
    if session.issues().next().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
