use rand::Rng;
use std::fmt;
use time::{Duration, OffsetDateTime, UtcOffset};

/// A UTC instant rendered as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    /// Picks an instant up to `window_minutes` minutes, 59 seconds and 999
    /// milliseconds before `now`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, now: OffsetDateTime, window_minutes: u32) -> Self {
        let back = Duration::minutes(i64::from(rng.random_range(0..=window_minutes)))
            + Duration::seconds(rng.random_range(0..=59))
            + Duration::milliseconds(rng.random_range(0..=999));
        Self(now.to_offset(UtcOffset::UTC).saturating_sub(back))
    }

    pub fn datetime(&self) -> OffsetDateTime {
        self.0
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(value: OffsetDateTime) -> Self {
        Self(value.to_offset(UtcOffset::UTC))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.0;
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            t.year(),
            u8::from(t.month()),
            t.day(),
            t.hour(),
            t.minute(),
            t.second(),
            t.millisecond()
        )
    }
}
