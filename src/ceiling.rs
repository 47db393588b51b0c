//! Draw-range policy.

/// Exclusive upper bound of the uniform draw made by a bag.
///
/// - `Total`: the ceiling tracks the sum of entry weights, so every draw hits.
/// - `Fixed(k)`: draws land in `[0, k)`. When `k` exceeds the total weight the
///   excess is the miss probability; when it is smaller, the tail of the
///   cumulative range is unreachable. `Fixed(0)` makes selection fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ceiling {
    /// Track the total weight.
    #[default]
    Total,
    /// Draw below a fixed bound.
    Fixed(u64),
}

impl Ceiling {
    /// Resolve the policy against the current total weight.
    #[inline]
    pub fn effective(self, total_weight: u64) -> u64 {
        match self {
            Self::Total => total_weight,
            Self::Fixed(k) => k,
        }
    }

    /// Whether the ceiling is independent of the weights.
    pub fn is_fixed(self) -> bool {
        matches!(self, Self::Fixed(_))
    }
}

impl From<Option<u64>> for Ceiling {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Self::Total, Self::Fixed)
    }
}

impl From<u64> for Ceiling {
    fn from(value: u64) -> Self {
        Self::Fixed(value)
    }
}
