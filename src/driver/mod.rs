//! Benchmark drivers, one per container family.
//!
//! A driver seeds a fresh facade for every backing of its family, times a
//! single section of work, and writes the report to `out`. Backings are
//! visited in the fixed order of their kind's `ALL` table.

use std::fmt::Display;
use std::io::Write;
use std::time::Duration;

use crate::error::Result;
use crate::timer;

mod list;
mod map;
mod set;

pub use list::ListTest;
pub use map::MapTest;
pub use set::SetTest;

fn timed<W: Write>(
    label: &str,
    out: &mut W,
    op: impl FnOnce(&mut W) -> Result<()>,
) -> Result<Duration> {
    let token = timer::start(label, out)?;
    op(out)?;
    timer::end(token, out)
}

fn show_order<W: Write, E: Display>(
    label: &str,
    prefix: &str,
    entries: impl Iterator<Item = E>,
    sample: usize,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Start ({label}):")?;
    for entry in entries.take(sample.saturating_add(1)) {
        writeln!(out, "{prefix}: {entry}")?;
    }
    writeln!(out, "{}", timer::SEPARATOR)?;
    writeln!(out)?;
    Ok(())
}

fn lookup<T: Copy>(table: &[(i64, T)], selector: i64) -> Option<T> {
    table
        .iter()
        .find(|(code, _)| *code == selector)
        .map(|(_, test)| *test)
}
