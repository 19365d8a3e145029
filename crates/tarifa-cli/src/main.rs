mod commands;
mod output;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "tarifa",
    version,
    about = "Convert vendor price-list PDFs into a normalized spreadsheet"
)]
struct Cli {
    /// Provider that knows the document layout (e.g. "idc_pdf")
    #[arg(long)]
    provider: String,

    /// Path to the price-list PDF
    #[arg(long, value_name = "FILE")]
    input: PathBuf,

    /// Supplier label written to every record
    #[arg(long, default_value = "IDC")]
    supplier: String,

    /// Destination xlsx file (parent directories are created)
    #[arg(long, value_name = "FILE", default_value = "out/idc.xlsx")]
    out: PathBuf,

    /// Custom vendor profile (JSON); registered as provider "<name>_pdf"
    #[arg(long, value_name = "FILE")]
    profile: Option<PathBuf>,

    /// Also print the records as JSON to stdout
    #[arg(long)]
    json: bool,

    /// Enable debug logging (overridden by TARIFA_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("TARIFA_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = commands::ingest::run(commands::ingest::IngestArgs {
        provider: cli.provider,
        input: cli.input,
        supplier: cli.supplier,
        out: cli.out,
        profile: cli.profile,
        json: cli.json,
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
