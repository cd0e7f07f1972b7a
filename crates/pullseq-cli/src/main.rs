//! pullseq CLI: run lazy record pipelines from the command line.

mod pipeline;
mod predicate;
mod record;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pullseq_core::prelude::{Error, PipelineConfig};
use pullseq_ops::{Generate, SequenceExt};
use tracing_subscriber::EnvFilter;

use crate::pipeline::{apply_overrides, execute, parse_pipeline, ConfigOverrides};
use crate::record::load_records;

#[derive(Parser)]
#[command(name = "pullseq")]
#[command(about = "Lazy pull-based pipelines over JSON-lines records", long_about = None)]
struct Cli {
    /// Tracing filter (overrides PULLSEQ_LOG)
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a pipeline from a YAML file over a JSON-lines input
    Run {
        /// Path to the pipeline YAML file
        #[arg(short, long)]
        pipeline: PathBuf,

        /// Path to the JSON-lines records
        #[arg(short, long)]
        input: PathBuf,

        /// Default k for top_k steps without one (overrides config)
        #[arg(long)]
        top_k: Option<usize>,
    },

    /// Validate a pipeline YAML file (syntax check)
    Validate {
        /// Path to the pipeline YAML file
        #[arg(short, long)]
        pipeline: PathBuf,
    },

    /// Print a bounded run of an arithmetic counter
    Count {
        /// First value
        #[arg(long, default_value_t = 0)]
        from: i64,

        /// Increment between values
        #[arg(long, default_value_t = 1)]
        step: i64,

        /// How many values to print (falls back to PULLSEQ_MAX_PULL)
        #[arg(long)]
        take: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = with_log_flag(PipelineConfig::from_env(), cli.log);
    init_tracing(&config.log_filter);

    let result = match cli.command {
        Commands::Run {
            pipeline,
            input,
            top_k,
        } => run_pipeline(config, &pipeline, &input, top_k),
        Commands::Validate { pipeline } => validate_pipeline(&pipeline).map(|()| {
            println!("✓ Pipeline is valid");
        }),
        Commands::Count { from, step, take } => count(&config, from, step, take),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// `--log` beats `PULLSEQ_LOG`.
fn with_log_flag(mut config: PipelineConfig, log: Option<String>) -> PipelineConfig {
    if let Some(filter) = log {
        config.log_filter = filter;
    }
    config
}

/// Layer the pipeline's `config:` block, then command-line flags, over the
/// env-derived config.
fn resolve_config(
    mut config: PipelineConfig,
    doc: &ConfigOverrides,
    top_k: Option<usize>,
) -> Result<PipelineConfig, Error> {
    apply_overrides(&mut config, doc);
    if let Some(k) = top_k {
        config.default_top_k = k;
    }
    config.validate()?;
    Ok(config)
}

fn run_pipeline(
    config: PipelineConfig,
    pipeline_path: &PathBuf,
    input_path: &PathBuf,
    top_k: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let yaml_content = fs::read_to_string(pipeline_path)?;
    let parsed = parse_pipeline(&yaml_content)?;

    let config = resolve_config(config, &parsed.config, top_k)?;

    let records = load_records(input_path)?;
    let outcome = execute(&parsed, &records, &config);
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}

fn validate_pipeline(pipeline_path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let yaml_content = fs::read_to_string(pipeline_path)?;
    let _ = parse_pipeline(&yaml_content)?;
    Ok(())
}

fn count(
    config: &PipelineConfig,
    from: i64,
    step: i64,
    take: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let values = count_values(config, from, step, take)?;
    println!("{}", serde_json::to_string(&values)?);
    Ok(())
}

/// The counter never ends, so a bound must come from the flag or config.
fn count_values(
    config: &PipelineConfig,
    from: i64,
    step: i64,
    take: Option<usize>,
) -> Result<Vec<i64>, Error> {
    let limit = take.or(config.max_pull).ok_or_else(|| {
        Error::Config("count needs --take or PULLSEQ_MAX_PULL; the counter never ends".into())
    })?;
    Ok(Generate::new(from, move |x: &i64| x.saturating_add(step))
        .take(limit)
        .materialize())
}
