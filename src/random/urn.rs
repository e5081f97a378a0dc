//! Sampling urn with repeat avoidance and transparent refill
//!
//! The urn exhausts its full backing collection before any cross-refill
//! repeat occurs, and never returns the same item on two consecutive picks
//! unless the collection forces it.

use crate::io::error::{GenerationError, Result};
use crate::random::engine::{EntropyRng, RandomSource};

/// Sampling container over an immutable backing collection
///
/// Draws are uniform over the remaining working set, redrawn while the
/// candidate equals the previous pick; the working set refills from the
/// backing collection once emptied. The no-repeat check is skipped when only
/// one item remains, and when every remaining item equals the previous pick
/// (a duplicate-heavy backing collection can force this straight after a
/// refill; redrawing could then never succeed).
#[derive(Debug, Clone)]
pub struct Urn<T, R> {
    items: Vec<T>,
    remaining: Vec<T>,
    last_pick: Option<T>,
    rng: R,
}

impl<T, R> Urn<T, R>
where
    T: Clone + PartialEq,
    R: RandomSource,
{
    /// Create an urn over `items` drawing through `rng`
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyCollection`] when `items` is empty.
    pub fn new(items: Vec<T>, rng: R) -> Result<Self> {
        if items.is_empty() {
            return Err(GenerationError::EmptyCollection);
        }
        let remaining = items.clone();
        Ok(Self {
            items,
            remaining,
            last_pick: None,
            rng,
        })
    }

    /// The immutable backing collection
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items left in the current working set
    pub fn remaining_len(&self) -> usize {
        self.remaining.len()
    }

    /// Draw the next item
    ///
    /// Refills the working set from the backing collection first when it is
    /// empty, so picking never runs dry.
    pub fn pick(&mut self) -> T {
        if self.remaining.is_empty() {
            self.refill();
        }
        let forced = self.remaining.len() == 1
            || self
                .remaining
                .iter()
                .all(|item| Some(item) == self.last_pick.as_ref());
        loop {
            let index = self.rng.random_index(self.remaining.len());
            let repeat = self.remaining.get(index) == self.last_pick.as_ref();
            if forced || !repeat {
                let picked = self.remaining.remove(index);
                self.last_pick = Some(picked.clone());
                return picked;
            }
        }
    }

    fn refill(&mut self) {
        self.remaining = self.items.clone();
    }
}

impl<T> Urn<T, EntropyRng>
where
    T: Clone + PartialEq,
{
    /// Create an urn with a default platform-entropy engine attached
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyCollection`] when `items` is empty.
    pub fn with_entropy(items: Vec<T>) -> Result<Self> {
        Self::new(items, EntropyRng::new())
    }
}
