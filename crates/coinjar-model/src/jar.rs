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

//! The coin jar: an immutable, ordered multiset of positive coin values.
//!
//! Order is irrelevant to solvability but is preserved as the enumeration
//! order the search explores, which makes results deterministic and
//! reproducible across runs.

use crate::{label::CaseLabel, value::CoinValue};

/// Error returned when a jar is constructed with a non-positive coin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCoinError<T> {
    /// Zero-based position of the offending coin.
    pub position: usize,
    /// The offending value.
    pub value: T,
}

impl<T> std::fmt::Display for InvalidCoinError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "coin at position {} has non-positive value {}",
            self.position, self.value
        )
    }
}

impl<T> std::error::Error for InvalidCoinError<T> where T: std::fmt::Display + std::fmt::Debug {}

/// An immutable, ordered multiset of positive coin values for one test case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoinJar<T> {
    coins: Vec<T>,
}

impl<T> CoinJar<T>
where
    T: CoinValue,
{
    /// Constructs a new `CoinJar`, validating every coin eagerly.
    ///
    /// An empty jar is permitted here (the engine treats it as
    /// unsplittable); the case-file loader rejects empty jars as malformed
    /// input before they ever reach this constructor.
    pub fn new(coins: Vec<T>) -> Result<Self, InvalidCoinError<T>> {
        for (position, &value) in coins.iter().enumerate() {
            if value <= T::zero() {
                return Err(InvalidCoinError { position, value });
            }
        }
        Ok(Self { coins })
    }

    /// Returns the number of coins in the jar.
    #[inline]
    pub fn len(&self) -> usize {
        self.coins.len()
    }

    /// Returns `true` if the jar holds no coins.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// Returns the coins in enumeration order.
    #[inline]
    pub fn coins(&self) -> &[T] {
        &self.coins
    }

    /// Returns the coin at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn coin(&self, index: usize) -> T {
        self.coins[index]
    }

    /// Returns the total value of the jar, saturating on overflow.
    #[inline]
    pub fn total(&self) -> T {
        self.coins
            .iter()
            .fold(T::zero(), |acc, &c| acc.saturating_add(c))
    }

    /// Returns `true` if the total value is even.
    ///
    /// An even total is a necessary (not sufficient) precondition for an
    /// equal-sum split to exist.
    #[inline]
    pub fn has_even_total(&self) -> bool {
        self.total() & T::one() == T::zero()
    }
}

impl<T> std::fmt::Display for CoinJar<T>
where
    T: CoinValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CoinJar(coins: {}, total: {})", self.len(), self.total())
    }
}

/// A labeled problem instance: one jar plus its batch-unique identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase<T> {
    label: CaseLabel,
    jar: CoinJar<T>,
}

impl<T> TestCase<T>
where
    T: CoinValue,
{
    /// Constructs a new `TestCase`.
    #[inline]
    pub fn new(label: CaseLabel, jar: CoinJar<T>) -> Self {
        Self { label, jar }
    }

    /// Returns the case label.
    #[inline]
    pub fn label(&self) -> CaseLabel {
        self.label
    }

    /// Returns the jar.
    #[inline]
    pub fn jar(&self) -> &CoinJar<T> {
        &self.jar
    }
}

impl<T> std::fmt::Display for TestCase<T>
where
    T: CoinValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TestCase(label: {}, {})", self.label, self.jar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jar_totals() {
        let jar = CoinJar::new(vec![2i64, 3, 5]).unwrap();
        assert_eq!(jar.len(), 3);
        assert_eq!(jar.total(), 10);
        assert!(jar.has_even_total());

        let odd = CoinJar::new(vec![3i64, 5, 7]).unwrap();
        assert_eq!(odd.total(), 15);
        assert!(!odd.has_even_total());
    }

    #[test]
    fn test_empty_jar_is_valid_but_empty() {
        let jar = CoinJar::<i64>::new(Vec::new()).unwrap();
        assert!(jar.is_empty());
        assert_eq!(jar.total(), 0);
    }

    #[test]
    fn test_non_positive_coin_rejected() {
        let err = CoinJar::new(vec![2i64, 0, 5]).unwrap_err();
        assert_eq!(err.position, 1);
        assert_eq!(err.value, 0);

        let err = CoinJar::new(vec![-4i64]).unwrap_err();
        assert_eq!(err.position, 0);
        assert_eq!(err.value, -4);
    }
}
