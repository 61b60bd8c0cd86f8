//! Client-side group fingerprint combination.
//!
//! The SQL aggregate produced by
//! [`Dialect::aggregate_hash`](super::traits::Dialect::aggregate_hash)
//! reduces a chunk of rows to one XOR-combined scalar. When the diff engine
//! splits a chunk and compares sub-chunks, it recombines their group
//! fingerprints client-side with the same XOR semantics.

use std::ops::{BitXor, BitXorAssign};

use serde::{Deserialize, Serialize};

/// A single integer summarizing a value, row, or group of rows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Fingerprint(pub i64);

impl Fingerprint {
    /// Combine with another fingerprint. Commutative and associative, so the
    /// result is independent of combination order.
    pub fn combine(self, other: Fingerprint) -> Fingerprint {
        Fingerprint(self.0 ^ other.0)
    }
}

impl BitXor for Fingerprint {
    type Output = Fingerprint;

    fn bitxor(self, rhs: Fingerprint) -> Fingerprint {
        self.combine(rhs)
    }
}

impl BitXorAssign for Fingerprint {
    fn bitxor_assign(&mut self, rhs: Fingerprint) {
        self.0 ^= rhs.0;
    }
}

impl From<i64> for Fingerprint {
    fn from(v: i64) -> Self {
        Fingerprint(v)
    }
}

/// Fold a set of fingerprints into one group fingerprint.
///
/// The identity element is `Fingerprint(0)`, matching the SQL aggregate over
/// an empty group.
pub fn combine<I>(fingerprints: I) -> Fingerprint
where
    I: IntoIterator<Item = Fingerprint>,
{
    fingerprints
        .into_iter()
        .fold(Fingerprint::default(), Fingerprint::combine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_is_order_independent() {
        let a = [3, 99, -7, i64::MAX, 42].map(Fingerprint);
        let b = [42, -7, 3, i64::MAX, 99].map(Fingerprint);
        assert_eq!(combine(a), combine(b));
    }

    #[test]
    fn test_empty_group_is_zero() {
        assert_eq!(combine([]), Fingerprint(0));
    }

    // Guards the accepted tradeoff of this checksum family: a value present
    // an even number of times cancels to the same aggregate as its absence.
    // If this test starts failing, the aggregate semantics changed out from
    // under the diff engine.
    #[test]
    fn test_even_duplicates_cancel() {
        let base = combine([Fingerprint(11), Fingerprint(52)]);
        let with_pair = combine([
            Fingerprint(11),
            Fingerprint(52),
            Fingerprint(907),
            Fingerprint(907),
        ]);
        assert_eq!(base, with_pair);
    }

    #[test]
    fn test_odd_duplicates_survive() {
        let base = combine([Fingerprint(11)]);
        let with_triple = combine([
            Fingerprint(11),
            Fingerprint(907),
            Fingerprint(907),
            Fingerprint(907),
        ]);
        assert_eq!(with_triple, base ^ Fingerprint(907));
    }

    #[test]
    fn test_xor_assign() {
        let mut fp = Fingerprint(0b1100);
        fp ^= Fingerprint(0b1010);
        assert_eq!(fp, Fingerprint(0b0110));
    }
}
