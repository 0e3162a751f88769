//! Fox-Names command-line front end.
//!
//! Reads a counted word list, prints one alphabet ordering that sorts it,
//! or `Impossible`.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use fox_ordering::{
    Alphabet, LexicalOrderingApi, LexicalOrderingService, LineWordSource, OrderingConfig,
    OrderingOutcome, UnconstrainedPlacement, WordSource,
};
use fox_telemetry::log_event;

/// Fox-Names: find an alphabet order under which a word list is sorted
#[derive(Parser, Debug, Default)]
#[command(name = "fox-names")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Read the word list from a file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Alphabet symbols, in the order unconstrained symbols are emitted
    #[arg(short, long)]
    pub alphabet: Option<String>,

    /// Place unconstrained symbols before or after the constrained ones
    #[arg(short, long, value_name = "leading|trailing")]
    pub unconstrained: Option<UnconstrainedPlacement>,

    /// Keep input case instead of lowercasing words
    #[arg(long)]
    pub no_fold_case: bool,

    /// Verify the ordering against the input before printing it
    #[arg(long)]
    pub verify: bool,

    /// Log filter, e.g. `debug` or `fox_ordering=trace`
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl Args {
    /// Ordering configuration: environment first, flags on top.
    pub fn ordering_config(&self) -> Result<OrderingConfig> {
        let mut config = OrderingConfig::from_env();

        if let Some(symbols) = &self.alphabet {
            config.alphabet = Alphabet::new(symbols).context("invalid --alphabet")?;
        }
        if let Some(placement) = self.unconstrained {
            config.unconstrained_placement = placement;
        }
        if self.no_fold_case {
            config.fold_case = false;
        }
        if self.verify {
            config.verify_result = true;
        }

        Ok(config)
    }
}

/// Read words from `reader`, solve, and write the single result line.
///
/// `Impossible` is a normal outcome; only input and configuration
/// problems are errors.
pub fn run<R: BufRead, W: Write>(
    config: OrderingConfig,
    reader: R,
    mut writer: W,
) -> Result<OrderingOutcome> {
    let mut source = LineWordSource::with_fold_case(reader, config.fold_case);
    let words = source
        .read_words(&config.alphabet)
        .context("failed to read word list")?;

    let service = LexicalOrderingService::with_config(config);
    let outcome = service.solve(&words)?;

    match &outcome {
        OrderingOutcome::Ordered(ordering) => {
            log_event!(info, "cli", "Ordering found", ordering = %ordering)
        }
        OrderingOutcome::Impossible(reason) => {
            log_event!(info, "cli", "No ordering exists", reason = %reason)
        }
    }

    writeln!(writer, "{}", outcome).context("failed to write result")?;
    writer.flush().context("failed to flush output")?;

    Ok(outcome)
}
