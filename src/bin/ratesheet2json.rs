use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ratesheet_extract::{AnalyzeOptions, ExportPairConverter, extract_document, flatten_report};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "ratesheet2json",
    version,
    about = "Convert parsed rate-sheet exports into structured JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a document's text/markdown exports and write the JSON report.
    Extract(ExtractArgs),
}

#[derive(Debug, Args)]
struct ExtractArgs {
    /// Document path; its <stem>.txt and <stem>.md exports must sit next to it.
    #[arg(short, long)]
    input: PathBuf,

    /// Output JSON path. Defaults to <stem>_extracted.json next to the input.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip readability formatting of narrative text and section content.
    #[arg(long)]
    raw: bool,

    /// Emit the flattened workflow record instead of the full report.
    #[arg(long)]
    flat: bool,
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "document".to_string(), |s| s.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}_extracted.json"))
}

fn run_extract(args: &ExtractArgs) -> Result<bool> {
    let options = AnalyzeOptions {
        format_text: !args.raw,
        ..AnalyzeOptions::default()
    };

    let result = extract_document(&ExportPairConverter, &args.input, &options);

    let json = if args.flat {
        serde_json::to_string_pretty(&flatten_report(&result)?)?
    } else {
        serde_json::to_string_pretty(&result)?
    };

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    std::fs::write(&output, json)
        .with_context(|| format!("failed to write '{}'", output.display()))?;

    println!("output saved to: {}", output.display());
    if let Some(report) = result.as_report() {
        println!("tables found: {}", report.summary.total_tables);
        println!("sections: {}", report.summary.sections_found);
        println!("has rates: {}", report.summary.has_rates);
        println!("has offers: {}", report.summary.has_offers);
    }

    Ok(result.is_success())
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ratesheet_extract=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract(args) => match run_extract(&args) {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::from(2),
            Err(error) => {
                eprintln!("error: {error:#}");
                ExitCode::from(1)
            }
        },
    }
}
