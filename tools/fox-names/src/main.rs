//! Fox-Names: prints an alphabet ordering that sorts the given names.
//!
//! ## Usage
//!
//! ```bash
//! # Word count, then one word per line, on stdin
//! printf '3\nrivest\nshimar\nadleman\n' | fox-names
//!
//! # From a file, with verbose logs on stderr
//! fox-names --input names.txt --log-level debug
//! ```

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::Parser;

use fox_names::{run, Args};
use fox_telemetry::{init_logging, TelemetryConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if let Some(level) = &args.log_level {
        telemetry = telemetry.with_log_level(level.clone());
    }
    if args.json_logs {
        telemetry = telemetry.with_json_logs(true);
    }
    init_logging(&telemetry)?;

    let config = args.ordering_config()?;
    let stdout = io::stdout().lock();

    match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            run(config, BufReader::new(file), stdout)?;
        }
        None => {
            run(config, io::stdin().lock(), stdout)?;
        }
    }

    Ok(())
}
