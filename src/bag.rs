//! Weighted bags.
//!
//! A bag holds entries with integer weights and draws one with probability
//! `weight / ceiling`. Entries occupy consecutive half-open ranges of the
//! cumulative weight line:
//!
//! ```text
//! weights     10   10   10
//! cumulative  10   20   30
//! draw        0..10 -> entry 0
//!             10..20 -> entry 1
//!             20..30 -> entry 2
//!             30..ceiling -> miss
//! ```
//!
//! With [`Ceiling::Total`] the ceiling equals the total weight and every draw
//! hits. With [`Ceiling::Fixed`] the ceiling is independent of the weights, so
//! the bag can miss (ceiling above total) or never reach its last entries
//! (ceiling below total).
//!
//! Notes:
//! - [`WeightedBag::select`] draws with replacement; [`WeightedBag::take`]
//!   removes what it draws.
//! - The randomness provider is injected ([`WeightedBag::with_source`]) so
//!   tests can fix the draws.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::ceiling::Ceiling;
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::source::RandomSource;

/// A bag of weighted entries with a configurable draw ceiling.
///
/// The bag holds no locks. It is `Send` whenever `T` and `S` are, so callers
/// sharing one across threads wrap it in a `Mutex`.
#[derive(Debug, Clone)]
pub struct WeightedBag<T, S = StdRng> {
    entries: Vec<Entry<T>>,
    ceiling: Ceiling,
    total_weight: u64,
    /// `cumulative[i]` is the sum of weights `0..=i`.
    cumulative: Vec<u64>,
    source: S,
}

impl<T> WeightedBag<T, StdRng> {
    /// Create a bag drawing from a `StdRng` seeded once from the thread-local RNG.
    pub fn new(ceiling: Ceiling, entries: Vec<Entry<T>>) -> Result<Self> {
        Self::with_source(ceiling, entries, StdRng::from_rng(&mut rand::rng()))
    }

    /// Create a bag with no entries.
    pub fn empty(ceiling: Ceiling) -> Self {
        Self::empty_with_source(ceiling, StdRng::from_rng(&mut rand::rng()))
    }

    /// Create a bag whose draws are reproducible from `seed`.
    pub fn seeded(ceiling: Ceiling, entries: Vec<Entry<T>>, seed: u64) -> Result<Self> {
        Self::with_source(ceiling, entries, StdRng::seed_from_u64(seed))
    }
}

impl<T, S: RandomSource> WeightedBag<T, S> {
    /// Create a bag drawing from a caller-supplied source.
    ///
    /// Fails with [`Error::WeightOverflow`] if the weights do not sum in a `u64`.
    pub fn with_source(ceiling: Ceiling, entries: Vec<Entry<T>>, source: S) -> Result<Self> {
        let mut bag = Self {
            entries,
            ceiling,
            total_weight: 0,
            cumulative: Vec::new(),
            source,
        };
        bag.total_weight = bag.rebuild_index()?;
        Ok(bag)
    }

    /// Create a bag with no entries, drawing from a caller-supplied source.
    pub fn empty_with_source(ceiling: Ceiling, source: S) -> Self {
        Self {
            entries: Vec::new(),
            ceiling,
            total_weight: 0,
            cumulative: Vec::new(),
            source,
        }
    }

    /// Append an entry.
    ///
    /// The running total grows by the entry's weight and the cumulative index
    /// is rebuilt in full. On overflow the bag is left unchanged.
    pub fn add_item(&mut self, entry: Entry<T>) -> Result<()> {
        let total = self
            .total_weight
            .checked_add(entry.weight())
            .ok_or(Error::WeightOverflow)?;

        trace!(
            "WeightedBag::add_item: name={}, weight={}, ceiling={}, entries={}, total_weight={}",
            entry.name(),
            entry.weight(),
            self.ceiling.effective(total),
            self.entries.len() + 1,
            total
        );

        self.entries.push(entry);
        self.total_weight = total;
        self.rebuild_index()?;
        Ok(())
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all entry weights: the part of the draw range that hits.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Exclusive upper bound of the next draw.
    pub fn effective_ceiling(&self) -> u64 {
        self.ceiling.effective(self.total_weight)
    }

    /// The configured policy.
    pub fn ceiling(&self) -> Ceiling {
        self.ceiling
    }

    /// Prefix sums of the entry weights.
    pub fn cumulative(&self) -> &[u64] {
        &self.cumulative
    }

    /// The injected randomness provider.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Draw one payload, with replacement.
    ///
    /// `Ok(None)` is a miss: the draw landed in `[total_weight, ceiling)`.
    /// Fails with [`Error::InvalidCeiling`] when the ceiling is zero, which
    /// covers an empty bag under [`Ceiling::Total`].
    pub fn select(&mut self) -> Result<Option<&T>> {
        Ok(self.select_entry()?.map(Entry::payload))
    }

    /// Like [`select`](Self::select), but returns the whole entry.
    pub fn select_entry(&mut self) -> Result<Option<&Entry<T>>> {
        let hit = self.draw_index()?;
        Ok(hit.map(|i| &self.entries[i]))
    }

    /// Draw one entry without replacement.
    ///
    /// A hit removes the entry and its weight from the bag. A fixed ceiling
    /// stays put, so every removal raises the miss probability; a total
    /// ceiling shrinks with the remaining weight. A miss removes nothing.
    pub fn take(&mut self) -> Result<Option<Entry<T>>> {
        let Some(i) = self.draw_index()? else {
            return Ok(None);
        };

        let entry = self.entries.remove(i);
        self.total_weight -= entry.weight();
        self.rebuild_index()?;

        debug!(
            "WeightedBag::take: removed name={}, weight={}, remaining={}, total_weight={}",
            entry.name(),
            entry.weight(),
            self.entries.len(),
            self.total_weight
        );
        Ok(Some(entry))
    }

    /// Map a draw onto the entry whose range contains it.
    ///
    /// Returns the first `i` with `draw < cumulative[i]`. Zero-weight entries
    /// share their boundary with a predecessor and are never first.
    #[inline]
    pub fn locate(&self, draw: u64) -> Option<usize> {
        let i = self.cumulative.partition_point(|&acc| acc <= draw);
        (i < self.cumulative.len()).then_some(i)
    }

    fn draw_index(&mut self) -> Result<Option<usize>> {
        let ceiling = self.effective_ceiling();
        if ceiling == 0 {
            return Err(Error::InvalidCeiling(ceiling));
        }

        let draw = self.source.draw_below(ceiling);
        let hit = self.locate(draw);
        trace!(
            "WeightedBag::draw: draw={}, ceiling={}, total_weight={}, hit={:?}",
            draw,
            ceiling,
            self.total_weight,
            hit
        );
        Ok(hit)
    }

    /// Recompute the cumulative index from scratch and return its total.
    fn rebuild_index(&mut self) -> Result<u64> {
        self.cumulative.clear();
        self.cumulative.reserve(self.entries.len());

        let mut acc = 0u64;
        for entry in &self.entries {
            acc = acc.checked_add(entry.weight()).ok_or(Error::WeightOverflow)?;
            self.cumulative.push(acc);
        }
        Ok(acc)
    }
}
