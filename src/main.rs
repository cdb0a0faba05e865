//! `pageslabs`: chunk a web page and store it in a vector store.
//!
//! Failures are reported as printed messages; the process always exits 0.

use clap::Parser;

use pageslabs::{
    parse_url, ByteBudget, IngestConfig, Ingestor, RunOutcome, DEFAULT_API_URL,
    DEFAULT_BYTE_BUDGET,
};

/// Webpage content to vector store processor.
#[derive(Debug, Parser)]
#[command(name = "pageslabs", version, about)]
struct Args {
    /// URL of the webpage to process
    url: String,

    /// Maximum chunk size in bytes
    #[arg(long, env = "PAGESLABS_MAX_CHUNK_BYTES", default_value_t = DEFAULT_BYTE_BUDGET)]
    max_chunk_bytes: usize,

    /// Vector store API endpoint
    #[arg(long, env = "PAGESLABS_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    println!("Processing: {}", args.url);

    if let Err(error) = run(&args) {
        println!("Error: {error}");
    }
}

fn run(args: &Args) -> pageslabs::Result<()> {
    let url = parse_url(&args.url)?;
    let config = IngestConfig::default()
        .with_byte_budget(ByteBudget::new(args.max_chunk_bytes)?)
        .with_api_url(&args.api_url)?;
    let ingestor = Ingestor::new(&config)?;

    let outcome = ingestor.run(&url);
    match outcome.chunk_count() {
        None => println!("No content found"),
        Some(count) => println!("Created {count} chunks"),
    }
    if let RunOutcome::InsertFailed { error, .. } = &outcome {
        println!("Error inserting chunks: {error}");
    }
    if let Some(result) = outcome.result() {
        println!("Insertion result: {result}");
    }
    Ok(())
}
