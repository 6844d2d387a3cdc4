mod config;

use anyhow::Result;
use clap::{ArgAction, Parser};
use config::FileConfig;
use logforge_core::{Catalog, Generator, Options};
use rand::{rngs::SmallRng, SeedableRng};
use std::{
    io::{stdout, Write},
    num::NonZeroUsize,
    path::PathBuf,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Output directory [default: ./logs]
    #[arg(long)]
    out: Option<PathBuf>,

    /// Number of log files to create [default: 6]
    #[arg(long)]
    count: Option<usize>,

    /// Lines per file [default: 200]
    #[arg(long)]
    lines: Option<usize>,

    /// How many minutes back timestamps may reach [default: 180]
    #[arg(long, value_name = "MINUTES")]
    window: Option<u32>,

    /// Filename collisions tolerated per file before giving up [default: 1000]
    #[arg(long)]
    max_attempts: Option<NonZeroUsize>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with defaults for the options above
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log more to stderr, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Flags win over the config file, which wins over the built-in defaults.
    fn resolve(&self, file: FileConfig) -> (Options, Option<u64>) {
        let defaults = Options::default();
        let options = Options {
            out: self.out.clone().or(file.out).unwrap_or(defaults.out),
            count: self.count.or(file.count).unwrap_or(defaults.count),
            lines: self.lines.or(file.lines).unwrap_or(defaults.lines),
            window_minutes: self
                .window
                .or(file.window_minutes)
                .unwrap_or(defaults.window_minutes),
            max_attempts: self
                .max_attempts
                .or(file.max_attempts)
                .unwrap_or(defaults.max_attempts),
        };
        (options, self.seed.or(file.seed))
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn report<W: Write>(mut out: W, created: &[PathBuf]) -> Result<()> {
    writeln!(out, "Created log files:")?;
    for path in created {
        writeln!(out, " - {}", path.display())?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let file = FileConfig::load(args.config.as_deref())?;
    let (options, seed) = args.resolve(file);
    let rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    tracing::debug!(?options, ?seed, "resolved options");

    let out = options.out.clone();
    let created = Generator::new(options, &Catalog::DEFAULT, rng)?.run()?;
    tracing::info!(dir = %out.display(), files = created.len(), "done");

    report(stdout().lock(), &created)
}
