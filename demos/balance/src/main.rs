//! balance — run a balance-bots factory from a directive file.
//!
//! ```text
//! balance input.txt --compare 17 61 --product-bins 0,1,2
//! ```
//!
//! Prints the bot that compared the two `--compare` values and the product of
//! one chip from each `--product-bins` bin.  Optionally writes every fire and
//! the final bins as CSV.

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bb_core::{load_directives, BinId, Chip};
use bb_engine::{EngineBuilder, FactoryObserver, FireEvent, FireLog};
use bb_output::{write_bins_csv, FireCsvObserver};

#[derive(Parser, Debug)]
#[command(name = "balance", about = "Simulate a factory of balance bots")]
struct Cli {
    /// Directive file, one directive per line.
    input: PathBuf,

    /// Report which bot compared these two chip values.
    #[arg(long, num_args = 2, value_names = ["A", "B"], default_values_t = [17u32, 61u32])]
    compare: Vec<u32>,

    /// Multiply the first chip of each of these bins.
    #[arg(long, value_delimiter = ',', default_value = "0,1,2")]
    product_bins: Vec<u32>,

    /// Abort when a cascade chains more fires than this.
    #[arg(long)]
    max_depth: Option<u32>,

    /// Write every fire event to this CSV file.
    #[arg(long)]
    fire_log: Option<PathBuf>,

    /// Write final bin contents to this CSV file.
    #[arg(long)]
    bins_csv: Option<PathBuf>,
}

/// Keeps the in-memory log for answering questions and optionally mirrors
/// each fire to CSV.
struct DemoObserver {
    log: FireLog,
    csv: Option<FireCsvObserver<File>>,
}

impl FactoryObserver for DemoObserver {
    fn on_fire(&mut self, event: &FireEvent) {
        self.log.on_fire(event);
        if let Some(csv) = self.csv.as_mut() {
            csv.on_fire(event);
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let directives = load_directives(&cli.input)
        .with_context(|| format!("loading directives from {}", cli.input.display()))?;
    info!(count = directives.len(), "directives loaded");

    let csv = match &cli.fire_log {
        Some(path) => Some(
            FireCsvObserver::create(path)
                .with_context(|| format!("creating {}", path.display()))?,
        ),
        None => None,
    };

    let mut builder = EngineBuilder::new().observer(DemoObserver { log: FireLog::new(), csv });
    if let Some(depth) = cli.max_depth {
        builder = builder.max_cascade_depth(depth);
    }
    let mut engine = builder.build()?;

    let start = Instant::now();
    engine.run(&directives).context("simulation failed")?;
    info!(
        fires = engine.fires(),
        bots = engine.registry().bot_count(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "simulation complete"
    );

    if let Some(path) = &cli.bins_csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_bins_csv(engine.registry(), file)?;
    }

    let product = product_of_bins(&cli.product_bins, |bin| engine.bin_contents(bin).first().copied())?;

    let mut observer = engine.into_observer();
    if let Some(mut csv) = observer.csv.take() {
        if let Some(e) = csv.take_error() {
            return Err(e).context("writing fire log");
        }
        csv.finish()?;
    }

    let (a, b) = (Chip(cli.compare[0]), Chip(cli.compare[1]));
    match observer.log.bot_comparing(a, b) {
        Some(bot) => println!("bot comparing {a} and {b}: {}", bot.0),
        None => println!("no bot compared {a} and {b}"),
    }
    println!("product of bins {:?}: {product}", cli.product_bins);

    Ok(())
}

fn product_of_bins(bins: &[u32], first_chip: impl Fn(BinId) -> Option<Chip>) -> Result<u64> {
    let mut product = 1u64;
    for &id in bins {
        let Some(chip) = first_chip(BinId(id)) else {
            bail!("output bin {id} is empty");
        };
        product = product
            .checked_mul(chip.value() as u64)
            .with_context(|| format!("product overflowed at bin {id}"))?;
    }
    Ok(product)
}
