//! Bag entries.

/// A named payload with an integer selection weight.
///
/// Weight zero means the entry is never selected. The weight is unsigned, so a
/// negative rate cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry<T> {
    name: String,
    weight: u64,
    payload: T,
}

impl<T> Entry<T> {
    /// Create an entry. Weight zero makes it unselectable.
    pub fn new(name: impl Into<String>, weight: u64, payload: T) -> Self {
        Self {
            name: name.into(),
            weight,
            payload,
        }
    }

    /// Label used in logs and lookups.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Relative selection weight.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// The value returned when this entry is drawn.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Consume the entry, keeping only its payload.
    pub fn into_payload(self) -> T {
        self.payload
    }
}
