//! Command-line surface: argument parsing, config overrides and command execution.
//!
//! Output goes to any [`Write`] so the harnesses can capture it. Query failures
//! are printed next to the value that caused them; only construction failures
//! end the run with an error.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use pstore_core::config::Config;
use pstore_core::trace::traced;
use pstore_core::{Store, Strategy};
use pstore_load::Source;

#[derive(Debug, Parser)]
#[command(
    name = "pstore",
    about = "Sorted-integer lookup store — membership, rank and pandigital queries"
)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/pstore/config.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Source to load (`-` for stdin).
    #[arg(long, short, global = true)]
    pub path: Option<PathBuf>,

    /// Load strategy: field-split, fixed-capacity or dynamic.
    #[arg(long, short, global = true)]
    pub strategy: Option<Strategy>,

    /// Slots preallocated by the fixed-capacity strategy.
    #[arg(long, global = true)]
    pub capacity_hint: Option<usize>,

    /// Reject unsorted input with the scanning strategies too. Catches
    /// thousands separators (`1,000,000` scans as 1, 0, 0) and other
    /// digit runs that break ascending order.
    #[arg(long, global = true)]
    pub verify_order: bool,

    /// Log entry/exit timings for the load phases and each query.
    #[arg(long, global = true)]
    pub trace: bool,

    /// Default the log filter to `debug` (RUST_LOG still wins).
    #[arg(long, global = true)]
    pub debug: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print base, count, first, last, low and high.
    Summary {
        #[arg(long)]
        json: bool,
    },
    /// Test each value for membership.
    Contains {
        #[arg(required = true)]
        values: Vec<u64>,
    },
    /// Look up the value at each rank (the smallest value has rank 1).
    Rank {
        #[arg(required = true)]
        ranks: Vec<u64>,
    },
    /// Largest stored value whose digits are pandigital without zero.
    Pandigital,
    /// Print every value with its offset, then the summary.
    Dump,
    /// Load with all three strategies and check they agree.
    Compare,
}

impl Cli {
    /// Resolve the layered configuration, then apply flag overrides.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let cfg = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => Config::load().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "config unreadable, using defaults");
                Config::defaults()
            }),
        };
        Ok(self.apply(cfg))
    }

    /// Flags take precedence over every config layer.
    pub fn apply(&self, mut cfg: Config) -> Config {
        if let Some(path) = &self.path {
            cfg.source.path = path.clone();
        }
        if let Some(strategy) = self.strategy {
            cfg.loader.strategy = strategy;
        }
        if let Some(hint) = self.capacity_hint {
            cfg.loader.capacity_hint = hint;
        }
        cfg.loader.verify_order |= self.verify_order;
        cfg.trace.enabled |= self.trace;
        cfg
    }
}

/// Execute `command` against the store described by `cfg`.
pub fn run(command: &Command, cfg: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let source = Source::from_arg(&cfg.source.path);
    if let Command::Compare = command {
        return compare(&source, cfg, out);
    }

    let loader_cfg = cfg.loader();
    let store = traced(cfg.trace.enabled, "open", || pstore_load::open(&source, &loader_cfg))
        .with_context(|| format!("building store from {}", source.name()))?;
    query(&store, command, cfg.trace.enabled, out)
}

/// Answer one query command against a built store. `Compare` builds its own
/// stores and prints nothing here.
fn query(store: &Store, command: &Command, trace: bool, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Summary { json: false } => writeln!(out, "{store}")?,
        Command::Summary { json: true } => {
            writeln!(out, "{}", serde_json::to_string(&store.summary())?)?
        }
        Command::Contains { values } => {
            for &v in values {
                match traced(trace, "contains", || store.contains(v)) {
                    Ok(true) => writeln!(out, "{v} found")?,
                    Ok(false) => writeln!(out, "{v} not found")?,
                    Err(err) => writeln!(out, "{v} error: {err}")?,
                }
            }
        }
        Command::Rank { ranks } => {
            for &nth in ranks {
                match traced(trace, "rank", || store.get_by_rank(nth)) {
                    Ok(n) => writeln!(out, "{nth} {n}")?,
                    Err(err) => writeln!(out, "{nth} error: {err}")?,
                }
            }
        }
        Command::Pandigital => print_pandigital(store, trace, out)?,
        Command::Dump => {
            for (i, v) in store.index().iter().enumerate() {
                writeln!(out, "{i} {v}")?;
            }
            writeln!(out, "{store}")?;
        }
        Command::Compare => {}
    }
    Ok(())
}

fn print_pandigital(store: &Store, trace: bool, out: &mut impl Write) -> anyhow::Result<()> {
    match traced(trace, "pandigital", || store.largest_pandigital()) {
        Some(n) => writeln!(out, "{n}")?,
        None => writeln!(out, "none")?,
    }
    Ok(())
}

fn compare(source: &Source, cfg: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let loader_cfg = cfg.loader();
    let mut reference: Option<(Strategy, Store)> = None;

    for strategy in Strategy::ALL {
        let store = traced(cfg.trace.enabled, "open", || {
            pstore_load::open_with(source, strategy, &loader_cfg)
        })
        .with_context(|| format!("{strategy} load of {}", source.name()))?;

        writeln!(out, "{strategy}: {store}")?;
        write!(out, "{strategy}: pandigital ")?;
        print_pandigital(&store, cfg.trace.enabled, out)?;

        if let Some((first, expected)) = &reference {
            if expected.index() != store.index() {
                anyhow::bail!("{strategy} index differs from {first} index");
            }
        } else {
            reference = Some((strategy, store));
        }
    }
    Ok(())
}
