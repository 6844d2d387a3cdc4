//! Fixed vocabularies the generator samples from.

use crate::err::{Error, Result};
use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Debug, Level::Info, Level::Warn, Level::Error];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The lists a [Generator](crate::Generator) draws every field from.
///
/// All lists must be non-empty, see [Catalog::validate].
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    pub levels: &'a [Level],
    /// Relative weights, parallel to `levels`.
    pub level_weights: &'a [u32],
    pub services: &'a [&'a str],
    pub hosts: &'a [&'a str],
    pub users: &'a [&'a str],
    pub statuses: &'a [u16],
    pub messages: &'a [&'a str],
    /// Fragments joined to build a filename.
    pub name_parts: &'a [&'a str],
    /// Environment or region appended to every filename.
    pub suffixes: &'a [&'a str],
}

impl Catalog<'static> {
    pub const DEFAULT: Self = Self {
        levels: &Level::ALL,
        level_weights: &[10, 60, 20, 10],
        services: &["auth", "payments", "orders", "api", "worker", "scheduler", "db"],
        hosts: &[
            "macbook-pro",
            "web-01",
            "web-02",
            "batch-01",
            "ip-10-0-1-12",
            "ip-10-0-2-31",
        ],
        users: &["neel", "alice", "bob", "charlie", "diana", "guest"],
        statuses: &[200, 201, 204, 400, 401, 403, 404, 409, 429, 500, 502, 503],
        messages: &[
            "Request received",
            "Request completed",
            "Token validated",
            "Cache miss",
            "Cache hit",
            "DB connection opened",
            "DB query executed",
            "Rate limit applied",
            "Upstream timeout",
            "Retrying operation",
            "Healthcheck OK",
            "Healthcheck failed",
            "Permission denied",
            "Invalid payload received",
            "Service started",
            "Service stopped",
        ],
        name_parts: &[
            "app", "server", "nginx", "api", "worker", "db", "audit", "events", "billing", "auth",
        ],
        suffixes: &["prod", "dev", "staging", "node1", "node2", "ca-central-1", "us-east-1"],
    };
}

impl Default for Catalog<'static> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Catalog<'_> {
    pub fn validate(&self) -> Result<()> {
        let lists = [
            ("levels", self.levels.is_empty()),
            ("services", self.services.is_empty()),
            ("hosts", self.hosts.is_empty()),
            ("users", self.users.is_empty()),
            ("statuses", self.statuses.is_empty()),
            ("messages", self.messages.is_empty()),
            ("name_parts", self.name_parts.is_empty()),
            ("suffixes", self.suffixes.is_empty()),
        ];
        match lists.into_iter().find(|(_, empty)| *empty) {
            Some((name, _)) => Err(Error::EmptyCatalog(name)),
            None => Ok(()),
        }
    }
}

/// Uniform choice from a list.
///
/// # Panics
/// If `items` is empty. Catalogs are validated before sampling.
pub(crate) fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        Catalog::DEFAULT.validate().unwrap();
        assert_eq!(Catalog::DEFAULT.levels.len(), Catalog::DEFAULT.level_weights.len());
    }

    #[test]
    fn empty_list_is_reported() {
        let catalog = Catalog {
            hosts: &[],
            ..Catalog::DEFAULT
        };
        assert!(matches!(catalog.validate(), Err(Error::EmptyCatalog("hosts"))));

        let catalog = Catalog {
            name_parts: &[],
            ..Catalog::DEFAULT
        };
        assert!(matches!(catalog.validate(), Err(Error::EmptyCatalog("name_parts"))));
    }
}
