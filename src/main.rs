//! Bucket Lab - Main entrypoint.
//!
//! Loads configuration, initializes logging and runs one of the lab commands:
//! benchmarking the bucket table, generating a synthetic dataset, or managing
//! the configuration file.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bucket_lab_lib::bench::run_benchmarks;
use bucket_lab_lib::config::{self, ConfigLoader, LabConfig, LogConfig};
use bucket_lab_lib::error::{
    report_error, set_error_reporter, ErrorContext, LabError, LabResult, TracingErrorReporter,
};
use bucket_lab_lib::hashing::HashAlgorithm;
use bucket_lab_lib::record::{self, generate};

/// Command line arguments for Bucket Lab.
#[derive(Parser, Debug)]
#[clap(name = "bucket-lab", version, author, about)]
struct Args {
    /// Path to configuration file (toml, json or yaml)
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Measure lookup time and collision rate of each hash function
    Bench {
        /// CSV file of club entries
        #[clap(short, long, value_parser)]
        input: PathBuf,

        /// File of whitespace-separated dataset sizes
        #[clap(short, long, value_parser)]
        sizes: PathBuf,

        /// Destination of the lookup timing CSV
        #[clap(long, value_parser)]
        output_time: PathBuf,

        /// Destination of the collision CSV
        #[clap(long, value_parser)]
        output_collision: PathBuf,

        /// Hash function to measure; repeat for several (default: from config)
        #[clap(long = "hash", value_enum)]
        hashes: Vec<HashAlgorithm>,

        /// Seed for sampling and shuffling (default: from config)
        #[clap(long)]
        seed: Option<u64>,

        /// Also write both reports as JSON
        #[clap(long, value_parser)]
        json: Option<PathBuf>,
    },

    /// Generate a random dataset of club entries
    Generate {
        /// Number of entries
        #[clap(short = 'n', long)]
        size: usize,

        /// Destination CSV file
        #[clap(short, long, value_parser)]
        output: PathBuf,

        /// Seed for reproducible output
        #[clap(long)]
        seed: Option<u64>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> LabResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_writer(std::io::stderr);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| LabError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn run_bench(
    config: &LabConfig,
    input: &Path,
    sizes: &Path,
    output_time: &Path,
    output_collision: &Path,
    json: Option<&Path>,
) -> LabResult<()> {
    let separator = config.bench.separator;
    let entries = record::read_entries_csv(input, separator)?;
    let sizes = record::read_sizes(sizes)?;
    info!(entries = entries.len(), sizes = sizes.len(), "Dataset loaded");

    let summary = run_benchmarks(&entries, &sizes, &config.bench, config.table.into())?;
    summary.timings.write_csv(output_time, separator)?;
    summary.collisions.write_csv(output_collision, separator)?;

    if let Some(path) = json {
        std::fs::write(path, summary.to_json()?)?;
        info!(path = %path.display(), "JSON summary written");
    }

    Ok(())
}

fn run_generate(config: &LabConfig, size: usize, output: &Path, seed: Option<u64>) -> LabResult<()> {
    let mut rng = match seed.or(config.bench.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let entries = generate::generate_entries(size, &mut rng);
    record::write_entries_csv(output, &entries, config.bench.separator)?;

    info!(entries = size, path = %output.display(), "Dataset generated");
    Ok(())
}

fn run_gen_config(output: &Path) -> LabResult<()> {
    // Create parent directories if they don't exist
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(output, config::default_config_toml()?)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Runs `command`, tagging a failure with the component it came from.
fn run(command: Command, loaded: LabResult<LabConfig>) -> Result<(), ErrorContext> {
    if let Command::GenConfig { output } = &command {
        return run_gen_config(output).map_err(|e| ErrorContext::new(e, "config"));
    }

    let mut config = loaded.map_err(|e| ErrorContext::new(e, "config"))?;

    match command {
        Command::Bench {
            input,
            sizes,
            output_time,
            output_collision,
            hashes,
            seed,
            json,
        } => {
            if !hashes.is_empty() {
                config.bench.algorithms = hashes;
            }
            if seed.is_some() {
                config.bench.seed = seed;
            }

            info!("Running benchmarks");
            run_bench(
                &config,
                &input,
                &sizes,
                &output_time,
                &output_collision,
                json.as_deref(),
            )
            .map_err(|e| {
                ErrorContext::new(e, "bench").with_details(format!("input: {}", input.display()))
            })
        }
        Command::Generate { size, output, seed } => {
            run_generate(&config, size, &output, seed).map_err(|e| ErrorContext::new(e, "generate"))
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { .. } => Ok(()),
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    // Load configuration before logging so the configured level applies
    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let loaded = loader.load().map_err(LabError::from);
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();

    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
        process::exit(1);
    }

    set_error_reporter(Arc::new(TracingErrorReporter));

    if let Err(context) = run(args.command, loaded) {
        report_error(context);
        process::exit(1);
    }
}
