use crate::catalog::{pick, Catalog};
use rand::{seq::IndexedRandom, Rng};

pub const EXTENSION: &str = "log";

/// Builds `<part>[-<part>]-<suffix>.log` from one or two distinct name parts.
///
/// # Panics
/// If `catalog.suffixes` is empty. Run [Catalog::validate] first.
pub(crate) fn random_filename<R: Rng + ?Sized>(rng: &mut R, catalog: &Catalog<'_>) -> String {
    let k = rng.random_range(1..=2).min(catalog.name_parts.len());
    let mut name = catalog
        .name_parts
        .choose_multiple(rng, k)
        .copied()
        .collect::<Vec<_>>()
        .join("-");
    name.push('-');
    name.push_str(*pick(rng, catalog.suffixes));
    name.push('.');
    name.push_str(EXTENSION);
    name
}
