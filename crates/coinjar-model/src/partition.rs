// Copyright (c) 2025 Coinjar Contributors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The two terminal answers of a partition search.
//!
//! A `Split` is a witness: two piles that exactly partition the jar with
//! equal sums. `Unsplittable` is the proven absence of any such partition.
//! `Split::balances` restates the core correctness invariant and is what
//! the checker and the engine tests verify against.

use crate::{jar::CoinJar, value::CoinValue};
use smallvec::SmallVec;

/// Inline pile storage. Jars are tens of coins at most, so a pile rarely
/// spills to the heap.
pub type PileVec<T> = SmallVec<[T; 16]>;

/// A verified equal-sum two-way partition of a jar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Split<T> {
    left: PileVec<T>,
    right: PileVec<T>,
}

impl<T> Split<T>
where
    T: CoinValue,
{
    /// Constructs a new `Split` from two piles.
    #[inline]
    pub fn new(left: PileVec<T>, right: PileVec<T>) -> Self {
        Self { left, right }
    }

    /// Returns the left pile.
    #[inline]
    pub fn left(&self) -> &[T] {
        &self.left
    }

    /// Returns the right pile.
    #[inline]
    pub fn right(&self) -> &[T] {
        &self.right
    }

    /// Returns the sum of the left pile, saturating on overflow.
    #[inline]
    pub fn left_sum(&self) -> T {
        Self::pile_sum(&self.left)
    }

    /// Returns the sum of the right pile, saturating on overflow.
    #[inline]
    pub fn right_sum(&self) -> T {
        Self::pile_sum(&self.right)
    }

    #[inline]
    fn pile_sum(pile: &[T]) -> T {
        pile.iter().fold(T::zero(), |acc, &c| acc.saturating_add(c))
    }

    /// Returns `true` if this split is a valid partition of `jar`:
    /// the multiset union of both piles equals the jar and both piles
    /// carry the same sum.
    pub fn balances(&self, jar: &CoinJar<T>) -> bool {
        if self.left_sum() != self.right_sum() {
            return false;
        }
        if self.left.len() + self.right.len() != jar.len() {
            return false;
        }

        // Multiset comparison via sorted copies; jars are small.
        let mut combined: Vec<T> = Vec::with_capacity(jar.len());
        combined.extend_from_slice(&self.left);
        combined.extend_from_slice(&self.right);
        combined.sort_unstable();

        let mut expected: Vec<T> = jar.coins().to_vec();
        expected.sort_unstable();

        combined == expected
    }
}

impl<T> std::fmt::Display for Split<T>
where
    T: CoinValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Split(left: {} coins summing {}, right: {} coins summing {})",
            self.left.len(),
            self.left_sum(),
            self.right.len(),
            self.right_sum()
        )
    }
}

/// The result of a partition search over one jar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PartitionResult<T> {
    /// A witness equal-sum split was found.
    Split(Split<T>),
    /// No equal-sum split exists for this jar.
    Unsplittable,
}

impl<T> PartitionResult<T>
where
    T: CoinValue,
{
    /// Returns `true` if this result carries a split.
    #[inline]
    pub fn is_split(&self) -> bool {
        matches!(self, Self::Split(_))
    }

    /// Returns the split, if any.
    #[inline]
    pub fn as_split(&self) -> Option<&Split<T>> {
        match self {
            Self::Split(split) => Some(split),
            Self::Unsplittable => None,
        }
    }
}

impl<T> std::fmt::Display for PartitionResult<T>
where
    T: CoinValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Split(split) => write!(f, "{}", split),
            Self::Unsplittable => write!(f, "Unsplittable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn jar(coins: &[i64]) -> CoinJar<i64> {
        CoinJar::new(coins.to_vec()).unwrap()
    }

    #[test]
    fn test_balanced_split_validates() {
        let split = Split::new(smallvec![2i64], smallvec![2i64]);
        assert!(split.balances(&jar(&[2, 2])));
        assert_eq!(split.left_sum(), 2);
        assert_eq!(split.right_sum(), 2);
    }

    #[test]
    fn test_unbalanced_sums_rejected() {
        let split = Split::new(smallvec![3i64], smallvec![2i64]);
        assert!(!split.balances(&jar(&[3, 2])));
    }

    #[test]
    fn test_multiset_mismatch_rejected() {
        // Sums balance but the coins are not the jar's coins.
        let split = Split::new(smallvec![4i64], smallvec![4i64]);
        assert!(!split.balances(&jar(&[2, 2])));

        // Duplicated coin, one omitted.
        let split = Split::new(smallvec![2i64, 2], smallvec![4i64]);
        assert!(!split.balances(&jar(&[2, 4, 2, 2])));
    }

    #[test]
    fn test_partition_result_accessors() {
        let result = PartitionResult::Split(Split::new(smallvec![1i64, 1], smallvec![2i64]));
        assert!(result.is_split());
        assert_eq!(result.as_split().unwrap().left(), &[1, 1]);

        let none = PartitionResult::<i64>::Unsplittable;
        assert!(!none.is_split());
        assert!(none.as_split().is_none());
    }
}
