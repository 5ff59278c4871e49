use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

use suggest2csv::{
    ConversionSummary, ConverterConfig, CsvConverter, FileConfig, default_output_path,
};

/// Export location suggestions for a city to a CSV file
///
/// Examples:
///   # Write Berlin.csv in the current directory
///   suggest2csv Berlin
///
///   # Write to a chosen file against a local mirror of the service
///   suggest2csv Paris -o paris.csv --base-url http://localhost:8080/suggest/
///
///   # Use a config file
///   suggest2csv Rome --config my-settings.toml
#[derive(Parser, Debug)]
#[command(name = "suggest2csv")]
#[command(version, about, long_about = None)]
struct Args {
    /// City name, appended to the endpoint URL as given
    city: String,

    /// Output CSV path (defaults to {city}.csv)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Base endpoint the city name is appended to
    #[arg(long)]
    base_url: Option<String>,

    /// HTTP timeout in seconds (defaults to the client's own)
    #[arg(long)]
    timeout: Option<u64>,

    /// Path to config file (optional, auto-searches suggest2csv.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ConversionSummary> {
    let file_config = match args.config {
        Some(ref path) => FileConfig::from_path(path).context("Failed to load config file")?,
        None => FileConfig::load().unwrap_or_default(),
    };

    let verbose = args.verbose || file_config.verbose;
    init_tracing(verbose);

    let (config, output_path) = resolve(&args, &file_config);
    if args.output.is_none()
        && let Some(ref dir) = file_config.output_dir
    {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    tracing::debug!(url = %config.url(), output = %output_path.display(), "configuration");

    let converter = CsvConverter::new(config).context("Failed to create HTTP client")?;

    let spinner = create_spinner(&format!("Fetching suggestions for {}...", args.city));
    let start = Instant::now();
    let summary = match converter.generate_csv(&output_path) {
        Ok(summary) => summary,
        Err(err) => {
            spinner.finish_and_clear();
            return Err(err)
                .with_context(|| format!("Failed to generate CSV for {}", args.city));
        }
    };
    spinner.finish_with_message(format!(
        "Wrote {} locations [{:.1}s]",
        summary.rows,
        start.elapsed().as_secs_f32()
    ));

    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    eprintln!(
        "file {} generated at: {}",
        summary.path.display(),
        cwd.display()
    );

    Ok(summary)
}

/// Merge flags over the config file over built-in defaults.
fn resolve(args: &Args, file_config: &FileConfig) -> (ConverterConfig, PathBuf) {
    let timeout = args
        .timeout
        .or(file_config.timeout_secs)
        .map(Duration::from_secs);
    let mut config = ConverterConfig::new(args.city.clone()).with_timeout(timeout);
    if let Some(base_url) = args.base_url.clone().or(file_config.base_url.clone()) {
        config = config.with_base_url(base_url);
    }

    let output_path = args.output.clone().unwrap_or_else(|| {
        let file_name = default_output_path(&args.city);
        match file_config.output_dir {
            Some(ref dir) => dir.join(file_name),
            None => file_name,
        }
    });

    (config, output_path)
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "suggest2csv=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
