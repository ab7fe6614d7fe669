//! sv-inspect: aggregate validation reports and print the unified result.
//!
//! Exit status: 0 when the result is valid, 1 when it carries errors,
//! 2 when the input could not be processed.

mod input;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info};

use sv_02_validation_report::{Aggregator, ValidationResult, ValidationResultApi};
use sv_03_signature::SignatureService;
use sv_telemetry::{init_logging, TelemetryConfig};

use input::{Document, InputFormat};
use output::TrustedTimes;

/// Aggregate validation reports and print the unified validation result
#[derive(Parser, Debug)]
#[command(name = "sv-inspect")]
#[command(about = "Aggregate signature validation reports into one result")]
struct Args {
    /// Input JSON file, `-` for stdin
    input: PathBuf,

    /// Shape of the input document
    #[arg(short, long, value_enum, default_value = "chain")]
    format: InputFormat,

    /// Report configuration (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print the XML report with this indent
    #[arg(long)]
    indent: Option<usize>,

    /// Print a JSON summary instead of text
    #[arg(long)]
    json: bool,

    /// Omit the XML report
    #[arg(long)]
    no_report: bool,

    /// Log level filter, overrides SV_LOG_LEVEL
    #[arg(long)]
    log_level: Option<String>,

    /// Write logs as JSON lines, overrides SV_JSON_LOGS
    #[arg(long)]
    json_logs: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if let Some(level) = &args.log_level {
        telemetry = telemetry.with_log_level(level.as_str());
    }
    if args.json_logs {
        telemetry = telemetry.with_json_logs(true);
    }
    if let Err(e) = init_logging(&telemetry) {
        eprintln!("Warning: logging disabled: {e}");
    }

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!(error = %format!("{e:#}"), "Inspection failed");
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns the validity of the aggregated result.
fn run(args: &Args) -> Result<bool> {
    let mut config = input::load_config(args.config.as_deref())?;
    if args.indent.is_some() {
        config = config.with_indent(args.indent);
    }
    let aggregator = Aggregator::new(config).context("Invalid report configuration")?;

    let source = input::read_source(&args.input)?;
    let document = Document::parse(&source, args.format)?;
    info!(input = %args.input.display(), format = ?args.format, "Loaded input");

    let (result, trusted_times) = validate(document, aggregator)?;

    let with_report = !args.no_report;
    let rendered = if args.json {
        output::render_json(&result, &trusted_times, with_report)?
    } else {
        output::render_text(&result, &trusted_times, with_report)
    };
    println!("{}", rendered.trim_end());

    Ok(result.is_valid())
}

fn validate(document: Document, aggregator: Aggregator) -> Result<(ValidationResult, TrustedTimes)> {
    match document {
        Document::Chain(chain) => {
            let result = aggregator
                .aggregate(chain.layers())
                .context("Malformed report chain")?;
            Ok((result, TrustedTimes::new()))
        }
        Document::Legacy(report) => {
            let result = aggregator
                .aggregate(std::slice::from_ref(&report))
                .context("Malformed legacy report")?;
            Ok((result, TrustedTimes::new()))
        }
        Document::Container(container) => {
            let mut service = SignatureService::new(aggregator);
            container.into_service(&mut service)?;
            let trusted_times = service
                .signatures()
                .iter()
                .map(|s| (s.id().to_string(), s.trusted_signing_time()))
                .collect();
            let result = service.validate_all().context("Malformed container")?;
            debug!(metrics = ?service.aggregator().metrics().snapshot(), "Container validated");
            Ok((result, trusted_times))
        }
    }
}
