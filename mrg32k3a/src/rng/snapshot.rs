//! Generator state snapshot
//!
//! Captures the six state values so a generator can be persisted and later
//! resumed mid-stream.

use serde::{Deserialize, Serialize};

/// The six state values of a generator
///
/// A snapshot is plain data; it is only checked when turned back into a
/// generator with [`crate::Mrg32k3a::restore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub s10: u32,
    pub s11: u32,
    pub s12: u32,
    pub s20: u32,
    pub s21: u32,
    pub s22: u32,
}

impl StateSnapshot {
    /// Values in state order: `s10, s11, s12, s20, s21, s22`
    pub fn values(&self) -> [u32; 6] {
        [self.s10, self.s11, self.s12, self.s20, self.s21, self.s22]
    }
}

impl From<[u32; 6]> for StateSnapshot {
    fn from(values: [u32; 6]) -> Self {
        let [s10, s11, s12, s20, s21, s22] = values;
        Self {
            s10,
            s11,
            s12,
            s20,
            s21,
            s22,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_preserve_order() {
        let snapshot = StateSnapshot::from([1, 2, 3, 4, 5, 6]);
        assert_eq!(snapshot.s12, 3);
        assert_eq!(snapshot.s20, 4);
        assert_eq!(snapshot.values(), [1, 2, 3, 4, 5, 6]);
    }
}
