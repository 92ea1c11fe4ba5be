//! Main entry point for the load generator
//!
//! Generates a large placeholder roster, benchmarks sorting it and writes
//! the sorted roster to disk.

use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use loadgen::{generate, run_benchmark, GenerateOptions};
use roster::services::{FileStore, StoreFormat, SystemClock};
use roster::PayrollDesk;
use shared::{component_info, logging, ComponentId};

/// Bulk roster generator and sort benchmark
#[derive(Parser)]
#[command(name = "loadgen")]
#[command(about = "Generate a large roster and compare list and Vec sort times")]
struct Args {
    /// Records drawn from 1001..=1000000
    #[arg(long, default_value = "10000")]
    bulk_count: usize,

    /// Records drawn from 1..=2000
    #[arg(long, default_value = "20")]
    small_count: usize,

    /// Seed for reproducible numbers (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the generated roster
    #[arg(long, default_value = "./data/loadgen.jsonl")]
    output: PathBuf,

    /// Storage format: json or binary
    #[arg(long, default_value = "json")]
    format: String,

    /// Records to print after sorting
    #[arg(long, default_value = "100")]
    preview: usize,

    /// Skip writing the roster
    #[arg(long)]
    no_save: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    ComponentId::init_loadgen();
    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(ComponentId::current(), "load generator");

    let format: StoreFormat = args.format.parse()?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut desk = PayrollDesk::new(SystemClock::new(), FileStore::new(&args.output, format));

    let options = GenerateOptions {
        bulk_count: args.bulk_count,
        small_count: args.small_count,
    };
    let numbers = generate(&mut desk, &mut rng, &options)?;
    component_info!(ComponentId::current(), "🎲 Generated {} records", numbers.len());

    let report = run_benchmark(&mut desk, args.preview);
    println!("List sorting time: {:?}", report.sort.list_elapsed);
    println!("Vec sorting time: {:?}", report.sort.vec_elapsed);
    if let Some(slowdown) = report.slowdown() {
        println!("List sort was {slowdown:.1}x the Vec sort");
    }

    println!("First {} employees:", report.preview.len());
    for line in &report.preview {
        println!("{line}");
    }
    println!("Roster size: {}", report.sort.count);

    if !args.no_save {
        let written = desk.save().await?;
        logging::log_success(
            ComponentId::current(),
            &format!("Wrote {} records to {}", written, args.output.display()),
        );
    }

    logging::log_shutdown(ComponentId::current(), "generation finished");
    Ok(())
}
