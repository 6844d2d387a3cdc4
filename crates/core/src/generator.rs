use crate::{
    catalog::Catalog,
    err::{Error, IoContext, Result},
    line::LineSampler,
    name::random_filename,
};
use rand::Rng;
use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, ErrorKind, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Directory the files are written into, created with parents if absent.
    pub out: PathBuf,
    pub count: usize,
    pub lines: usize,
    /// How far back from now timestamps may reach.
    pub window_minutes: u32,
    /// Consecutive filename collisions tolerated for a single file.
    pub max_attempts: NonZeroUsize,
}

impl Options {
    pub const DEFAULT_OUT: &'static str = "./logs";
    pub const DEFAULT_COUNT: usize = 6;
    pub const DEFAULT_LINES: usize = 200;
    pub const DEFAULT_WINDOW_MINUTES: u32 = 180;
    pub const DEFAULT_MAX_ATTEMPTS: NonZeroUsize = match NonZeroUsize::new(1000) {
        Some(n) => n,
        None => unreachable!(),
    };
}

impl Default for Options {
    fn default() -> Self {
        Self {
            out: PathBuf::from(Self::DEFAULT_OUT),
            count: Self::DEFAULT_COUNT,
            lines: Self::DEFAULT_LINES,
            window_minutes: Self::DEFAULT_WINDOW_MINUTES,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Writes a batch of log files.
pub struct Generator<'a, R> {
    options: Options,
    catalog: &'a Catalog<'a>,
    rng: R,
}

impl<'a, R: Rng> Generator<'a, R> {
    pub fn new(options: Options, catalog: &'a Catalog<'a>, rng: R) -> Result<Self> {
        catalog.validate()?;
        Ok(Self {
            options,
            catalog,
            rng,
        })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Runs the batch with timestamps relative to the current time.
    pub fn run(&mut self) -> Result<Vec<PathBuf>> {
        self.run_at(OffsetDateTime::now_utc())
    }

    /// Runs the batch and returns the created paths in creation order.
    ///
    /// Files written before a failure are left in place.
    pub fn run_at(&mut self, now: OffsetDateTime) -> Result<Vec<PathBuf>> {
        let sampler = LineSampler::new(self.catalog, now, self.options.window_minutes)?;
        let out = self.options.out.clone();
        std::fs::create_dir_all(&out).at(&out)?;

        let mut created = Vec::with_capacity(self.options.count);
        for _ in 0..self.options.count {
            let (path, file) = self.claim_file(&out)?;
            self.write_lines(file, &sampler).at(&path)?;
            tracing::info!(path = %path.display(), lines = self.options.lines, "wrote log file");
            created.push(path);
        }
        Ok(created)
    }

    /// Creates a file under a fresh random name, regenerating on collision.
    ///
    /// `create_new` makes the existence check and the creation one step, so a
    /// file is never truncated, whether it predates the run or came from it.
    fn claim_file(&mut self, dir: &Path) -> Result<(PathBuf, File)> {
        let attempts = self.options.max_attempts.get();
        for attempt in 1..=attempts {
            let path = dir.join(random_filename(&mut self.rng, self.catalog));
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    tracing::debug!(path = %path.display(), attempt, "filename taken, regenerating");
                }
                Err(e) => return Err(e).at(&path),
            }
        }
        Err(Error::NamesExhausted { attempts })
    }

    fn write_lines(&mut self, file: File, sampler: &LineSampler<'_>) -> std::io::Result<()> {
        let mut writer = BufWriter::new(file);
        for _ in 0..self.options.lines {
            let line = self.rng.sample(sampler);
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;
        Ok(())
    }
}
