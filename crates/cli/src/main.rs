//! Command-line front end for Chaotic Bureaucratic Sort.
//!
//! Generates a random array, sorts it on a background worker and polls the worker for
//! progress until it reports completion.

mod args;

use std::error::Error;
use std::fmt::Debug;
use std::process::ExitCode;
use std::thread;

use chaotic_sort::{ProgressSnapshot, SortOutcome, spawn_sort, variant_name};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::args::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    args.validate()?;

    let data = generate_array(args);
    println!("=== Chaotic Bureaucratic Sort ===\n");
    println!("Original array: {}", render(&data, args.print_limit));

    let config = args.sort_config();
    info!(
        size = data.len(),
        variant = variant_name(config.resolve_variant(data.len())),
        seed = args.seed,
        "starting sort"
    );

    let mut handle = spawn_sort(data, config)?;
    let outcome = loop {
        let poll = handle.poll();
        if poll.coalesced > 0 {
            debug!(coalesced = poll.coalesced, "skipped stale progress");
        }
        if let Some(snapshot) = poll.latest {
            print_progress(&snapshot);
        }
        if let Some(done) = poll.done {
            break done;
        }
        if handle.is_finished() {
            return Err("sort worker exited without a result".into());
        }
        thread::sleep(args.poll_interval());
    };

    print_summary(&outcome, args.print_limit);
    Ok(())
}

fn generate_array(args: &Args) -> Vec<i64> {
    let mut rng = match args.data_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    (0..args.size)
        .map(|_| rng.random_range(args.min..=args.max))
        .collect()
}

fn print_progress(snapshot: &ProgressSnapshot) {
    println!(
        "passes={} | working={} | queued={} | time={:.2}s",
        snapshot.passes,
        snapshot.working,
        snapshot.pending,
        snapshot.elapsed.as_secs_f64()
    );
}

fn print_summary(outcome: &SortOutcome, print_limit: usize) {
    println!("\nFinal sorted array: {}", render(&outcome.sorted, print_limit));
    println!("Variant: {}", variant_name(outcome.variant));
    println!("Purged elements: {}", outcome.diverted);
    println!("Total passes: {}", outcome.stats.passes);
    println!("Reshuffles: {}", outcome.stats.reshuffles);
    println!("Total time: {:.4}s", outcome.elapsed.as_secs_f64());
}

fn render<T: Debug>(values: &[T], limit: usize) -> String {
    if values.len() <= limit {
        return format!("{values:?}");
    }
    format!(
        "[{} elements: {:?} .. {:?}]",
        values.len(),
        values[0],
        values[values.len() - 1]
    )
}
