use crate::{
    catalog::{pick, Catalog, Level},
    err::Result,
    timestamp::Timestamp,
    weighted::Weighted,
};
use rand::{distr::Distribution, Rng};
use std::fmt;
use time::OffsetDateTime;

/// Trailing annotation that depends on the status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extras {
    None,
    /// Server errors carry a three digit `error_code=E###`.
    ErrorCode(u16),
    InvalidToken,
    RateLimited,
}

impl Extras {
    pub fn for_status<R: Rng + ?Sized>(rng: &mut R, status: u16) -> Self {
        match status {
            500.. => Extras::ErrorCode(rng.random_range(100..=999)),
            401 => Extras::InvalidToken,
            429 => Extras::RateLimited,
            _ => Extras::None,
        }
    }
}

impl fmt::Display for Extras {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extras::None => Ok(()),
            Extras::ErrorCode(code) => write!(f, " error_code=E{code}"),
            Extras::InvalidToken => f.write_str(" reason=invalid_token"),
            Extras::RateLimited => f.write_str(" reason=rate_limited"),
        }
    }
}

/// One synthetic log record. Rendered through [Display](fmt::Display).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine<'a> {
    pub timestamp: Timestamp,
    pub level: Level,
    pub service: &'a str,
    pub host: &'a str,
    pub user: &'a str,
    pub request_id: u32,
    pub status: u16,
    pub latency_ms: u32,
    pub message: &'a str,
    pub extras: Extras,
}

impl fmt::Display for LogLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] service={} host={} user={} request_id=req-{} status={} latency_ms={} msg=\"{}\"{}",
            self.timestamp,
            self.level,
            self.service,
            self.host,
            self.user,
            self.request_id,
            self.status,
            self.latency_ms,
            self.message,
            self.extras
        )
    }
}

/// Draws [LogLine]s from a catalog, timestamped relative to a fixed `now`.
pub struct LineSampler<'a> {
    catalog: &'a Catalog<'a>,
    levels: Weighted<'a, Level>,
    now: OffsetDateTime,
    window_minutes: u32,
}

impl<'a> LineSampler<'a> {
    pub const REQUEST_IDS: std::ops::RangeInclusive<u32> = 100_000..=999_999;
    pub const LATENCY_MS: std::ops::RangeInclusive<u32> = 5..=2500;

    pub fn new(catalog: &'a Catalog<'a>, now: OffsetDateTime, window_minutes: u32) -> Result<Self> {
        catalog.validate()?;
        let levels = Weighted::new(catalog.levels, catalog.level_weights)?;
        Ok(Self {
            catalog,
            levels,
            now,
            window_minutes,
        })
    }
}

impl<'a> Distribution<LogLine<'a>> for LineSampler<'a> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> LogLine<'a> {
        let level = *self.levels.sample(rng);
        let service = *pick(rng, self.catalog.services);
        let host = *pick(rng, self.catalog.hosts);
        let user = *pick(rng, self.catalog.users);
        let request_id = rng.random_range(Self::REQUEST_IDS);
        let status = *pick(rng, self.catalog.statuses);
        let latency_ms = rng.random_range(Self::LATENCY_MS);
        let message = *pick(rng, self.catalog.messages);
        let extras = Extras::for_status(rng, status);

        LogLine {
            timestamp: Timestamp::random(rng, self.now, self.window_minutes),
            level,
            service,
            host,
            user,
            request_id,
            status,
            latency_ms,
            message,
            extras,
        }
    }
}
