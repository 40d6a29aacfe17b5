use bitvec::prelude::*;
use std::fmt;

/// Set of neighbor counts used by survive/birth rules
///
/// Grows on insert, so counts above any neighborhood size can be stored;
/// such counts simply never match. Provides O(1) membership testing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CountSet {
    bits: BitVec,
}

impl CountSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a neighbor count
    pub fn insert(&mut self, count: usize) {
        if count >= self.bits.len() {
            self.bits.resize(count + 1, false);
        }
        self.bits.set(count, true);
    }

    /// Test count membership
    pub fn contains(&self, count: usize) -> bool {
        self.bits.get(count).as_deref() == Some(&true)
    }

    /// Test if no counts are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Number of counts in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Largest count in the set
    pub fn max(&self) -> Option<usize> {
        self.bits.last_one()
    }

    /// Extract all counts in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl FromIterator<usize> for CountSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        for count in iter {
            set.insert(count);
        }
        set
    }
}

// Rulestring digits: single digits run together, larger counts comma separated
impl fmt::Display for CountSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts = self.to_vec();
        if counts.iter().all(|&c| c < 10) {
            for count in counts {
                write!(f, "{count}")?;
            }
            Ok(())
        } else {
            let parts: Vec<String> = counts.iter().map(ToString::to_string).collect();
            write!(f, "{}", parts.join(","))
        }
    }
}
