use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

const KB: u64 = 1000;
const MB: u64 = 1000 * KB;

/// Size of the sample data set, in decimal megabytes
const SAMPLE_MEGABYTES: f64 = 67.108864;

/// Every value is rendered zero-padded to this many digits
const VALUE_WIDTH: usize = 9;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    debug!("CLI: {:?}", cli);

    let total = sequence_total();
    debug!("Values: {}", total);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_sequence(&mut out, total).context("Unable to write sequence to standard output")?;
    out.flush().context("Unable to flush standard output")?;

    debug!("Done");

    Ok(())
}

/// Number of values in the sequence, floored from the sample size
fn sequence_total() -> u64 {
    (SAMPLE_MEGABYTES * MB as f64).floor() as u64
}

/// Writes values 1 through `total` inclusive, one per line, stopping at the
/// first write error
fn write_sequence(out: &mut impl Write, total: u64) -> io::Result<()> {
    // A value of 10 or more digits would not fit the fixed width
    debug_assert!(total < 10u64.pow(VALUE_WIDTH as u32));
    for i in 1..=total {
        writeln!(out, "{:0width$}", i, width = VALUE_WIDTH)?;
    }
    Ok(())
}
