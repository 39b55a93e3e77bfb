use std::io::{self, Write};

use clap::Parser;
use log::info;
use num_bigint::BigUint;
use tablebase_estimate_core::{Estimate, Report, DEFAULT_EXTRA_PIECES, LOMONOSOV_BYTES};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Non-king pieces on the board, split between the two sides
    #[clap(long, short = 'n', default_value_t = DEFAULT_EXTRA_PIECES)]
    extra_pieces: u32,

    /// Total byte budget the tables are compared against
    #[clap(long, short = 'b')]
    budget: Option<BigUint>,

    /// Print the estimate as JSON
    #[clap(long, short = 'j')]
    json: bool,

    /// List every table after the summary
    #[clap(long, short = 'l')]
    list_tables: bool,
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let budget = cli
        .budget
        .clone()
        .unwrap_or_else(|| BigUint::from(LOMONOSOV_BYTES));

    let estimate = if Estimate::is_default_config(cli.extra_pieces, &budget) {
        Estimate::lomonosov()?
    } else {
        info!(
            "estimating {} extra pieces against {} bytes",
            cli.extra_pieces, budget
        );
        Estimate::new(cli.extra_pieces, budget)?
    };

    let report = Report::new(&estimate);
    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &estimate)?;
        writeln!(out)?;
    } else {
        report.write_text(out)?;
    }
    if cli.list_tables {
        report.write_tables(out)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)?;
    out.flush()?;
    Ok(())
}
