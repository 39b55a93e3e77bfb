use std::io::{self, Write};

use crate::config::{BUDGET_HEADLINE, LOMONOSOV_COMPARISON, LOMONOSOV_HEADLINE};
use crate::estimate::Estimate;
use crate::material::enumerate_tables;

pub struct Report<'a> {
    estimate: &'a Estimate,
    headline: &'static str,
    // only meaningful for the Lomonosov numbers
    comparison: Option<&'static str>,
}

impl<'a> Report<'a> {
    pub fn new(estimate: &'a Estimate) -> Self {
        let is_lomonosov = estimate.is_lomonosov();
        Self {
            estimate,
            headline: if is_lomonosov {
                LOMONOSOV_HEADLINE
            } else {
                BUDGET_HEADLINE
            },
            comparison: is_lomonosov.then_some(LOMONOSOV_COMPARISON),
        }
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let estimate = self.estimate;
        writeln!(out, "{}", self.headline)?;
        writeln!(out, " {}", estimate.byte_budget)?;
        writeln!(out, "Number of tables is {}", estimate.tables)?;
        match &estimate.bytes_per_table {
            Some(bytes) => writeln!(out, "Bytes per table is {}", bytes)?,
            None => writeln!(out, "Bytes per table is undefined, there are no tables")?,
        }
        if let Some(comparison) = self.comparison {
            writeln!(out, "{}", comparison)?;
        }

        writeln!(out)?;
        writeln!(out, "My board position count is:")?;
        writeln!(out, "   {}", estimate.board_positions)?;
        writeln!(out, "Requiring this byte count:")?;
        writeln!(out, "{}", estimate.total_bytes)
    }

    pub fn write_tables<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for split_count in &self.estimate.splits {
            writeln!(out)?;
            writeln!(out, "{} ({} tables):", split_count.split, split_count.tables)?;
            for material in enumerate_tables(split_count.split) {
                writeln!(out, "{}", material)?;
            }
        }
        Ok(())
    }
}
