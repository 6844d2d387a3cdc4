use crate::err::{Error, Result};
use rand::{
    distr::{weighted::WeightedIndex, Distribution},
    Rng,
};

/// Categorical distribution over a borrowed list of items.
///
/// Each item is drawn with probability proportional to its weight.
pub struct Weighted<'a, T> {
    items: &'a [T],
    index: WeightedIndex<u32>,
}

impl<'a, T> Weighted<'a, T> {
    pub fn new(items: &'a [T], weights: &[u32]) -> Result<Self> {
        if items.len() != weights.len() {
            return Err(Error::InvalidWeights(format!(
                "{} items but {} weights",
                items.len(),
                weights.len()
            )));
        }
        let index = WeightedIndex::new(weights).map_err(|e| Error::InvalidWeights(e.to_string()))?;
        Ok(Self { items, index })
    }
}

impl<'a, T> Distribution<&'a T> for Weighted<'a, T> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a T {
        &self.items[self.index.sample(rng)]
    }
}
