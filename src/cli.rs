//! Interactive prompt loop shared by the three benchmark binaries.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::BenchConfig;
use crate::driver::{ListTest, MapTest, SetTest};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    List,
    Map,
    Set,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List(ListTest),
    Map(MapTest),
    Set(SetTest),
}

impl Menu {
    pub const fn prompt(self) -> &'static str {
        match self {
            Menu::List => ListTest::PROMPT,
            Menu::Map => MapTest::PROMPT,
            Menu::Set => SetTest::PROMPT,
        }
    }

    pub fn command(self, selector: i64) -> Option<Command> {
        match self {
            Menu::List => ListTest::from_selector(selector).map(Command::List),
            Menu::Map => MapTest::from_selector(selector).map(Command::Map),
            Menu::Set => SetTest::from_selector(selector).map(Command::Set),
        }
    }
}

impl Command {
    pub fn run(self, config: &BenchConfig, out: &mut impl Write) -> Result<()> {
        match self {
            Command::List(test) => test.run(config, out),
            Command::Map(test) => test.run(config, out),
            Command::Set(test) => test.run(config, out),
        }
    }
}

/// Reads one selector per line until `input` is exhausted.
///
/// Lines that are not a known selector, including lines that are not valid
/// UTF-8, are skipped without comment. An index error aborts only the test
/// that raised it; i/o errors end the loop.
pub fn run<R: BufRead, W: Write>(
    menu: Menu,
    config: &BenchConfig,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}", menu.prompt())?;
    out.flush()?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let command = line
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|selector| menu.command(selector));

        match command {
            Some(command) => match command.run(config, out) {
                Ok(()) => {}
                Err(e) if e.aborts_test_only() => {
                    tracing::warn!(?command, error = %e, "test aborted");
                    writeln!(out, "Test aborted: {e}")?;
                }
                Err(e) => return Err(e),
            },
            None => tracing::trace!(input = %line.trim(), "ignoring selector"),
        }

        writeln!(out, "{}", menu.prompt())?;
        out.flush()?;
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version, about = "Times list, map and set backings against each other")]
pub struct Args {
    /// Seeding rounds per test; each round inserts three records
    #[arg(long, default_value_t = BenchConfig::DEFAULT_COUNT)]
    pub count: usize,

    /// Entries printed by the show-order tests, minus one
    #[arg(long, default_value_t = BenchConfig::DEFAULT_SAMPLE)]
    pub sample: usize,
}

impl Args {
    pub fn config(&self) -> BenchConfig {
        BenchConfig::new(self.count, self.sample)
    }
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Entry point for the benchmark binaries.
pub fn main(menu: Menu) -> ExitCode {
    let args = Args::parse();
    init_tracing();

    let config = args.config();
    tracing::debug!(?menu, ?config, "starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(menu, &config, stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
