//! `fukuro`: weighted random bags.
//!
//! A bag holds named entries with integer weights and draws one with
//! probability proportional to its weight. The draw range (the ceiling) can be
//! wider than the total weight, which gives the bag a configurable chance of
//! drawing nothing.
//!
//! Exposed modules:
//! - `bag`: `WeightedBag`, with-replacement `select` and without-replacement `take`.
//! - `ceiling`: the draw-range policy.
//! - `source`: the injected randomness provider.
//! - `pick`: one-shot uniform and `f64`-weighted picks over slices.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bag;
pub mod ceiling;
pub mod entry;
pub mod error;
pub mod pick;
pub mod source;

pub use bag::WeightedBag;
pub use ceiling::Ceiling;
pub use entry::Entry;
pub use error::{Error, Result};
pub use pick::{select_uniform, select_uniform_with_rng, select_weighted, select_weighted_with_rng};
pub use source::{RandomSource, ScriptedSource};
