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

//! Search state management for the partition engine.
//!
//! `SearchState` tracks the incremental assignment of coins to piles during
//! the depth-first traversal. Coins are assigned strictly in jar order, so
//! backtracking restores state by unassigning the most recent coin; no
//! separate trail structure is needed.
//!
//! Invariants (debug-checked):
//! - `num_assigned() <= num_coins()`
//! - `left_sum` and `right_sum` always equal the sums of the coins
//!   currently assigned to each pile.

use crate::decision::Pile;
use coinjar_model::{
    jar::CoinJar,
    partition::{PileVec, Split},
    value::CoinValue,
};

/// A compact, mutable container holding the incremental pile assignment
/// for one search run. Reusable across runs via `reset_for`.
#[derive(Debug, Clone)]
pub struct SearchState<T> {
    /// `assignment[i]` is the pile of coin `i`, valid for `i < num_assigned`.
    assignment: Vec<Pile>,
    left_sum: T,
    right_sum: T,
    num_coins: usize,
}

impl<T> SearchState<T>
where
    T: CoinValue,
{
    /// Creates a new `SearchState` for jars of the given size.
    #[inline]
    pub fn new(num_coins: usize) -> Self {
        Self {
            assignment: Vec::with_capacity(num_coins),
            left_sum: T::zero(),
            right_sum: T::zero(),
            num_coins,
        }
    }

    /// Resets the state for a jar of `num_coins` coins, keeping capacity.
    #[inline]
    pub fn reset_for(&mut self, num_coins: usize) {
        self.assignment.clear();
        if self.assignment.capacity() < num_coins {
            self.assignment
                .reserve(num_coins - self.assignment.capacity());
        }
        self.left_sum = T::zero();
        self.right_sum = T::zero();
        self.num_coins = num_coins;
    }

    /// Returns the number of coins in the current jar.
    #[inline]
    pub fn num_coins(&self) -> usize {
        self.num_coins
    }

    /// Returns the number of coins assigned so far.
    #[inline]
    pub fn num_assigned(&self) -> usize {
        self.assignment.len()
    }

    /// Returns `true` if every coin has been assigned.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.assignment.len() == self.num_coins
    }

    /// Returns the sum of the left pile.
    #[inline]
    pub fn left_sum(&self) -> T {
        self.left_sum
    }

    /// Returns the sum of the right pile.
    #[inline]
    pub fn right_sum(&self) -> T {
        self.right_sum
    }

    /// Returns `true` if both piles carry the same sum.
    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.left_sum == self.right_sum
    }

    /// Assigns the next coin (in jar order) to `pile`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if every coin is already assigned.
    #[inline]
    pub fn assign_next(&mut self, pile: Pile, coin: T) {
        debug_assert!(
            self.assignment.len() < self.num_coins,
            "called `SearchState::assign_next` with all {} coins assigned",
            self.num_coins
        );

        self.assignment.push(pile);
        match pile {
            Pile::Left => self.left_sum = self.left_sum.saturating_add(coin),
            Pile::Right => self.right_sum = self.right_sum.saturating_add(coin),
        }
    }

    /// Unassigns the most recently assigned coin, returning its pile.
    ///
    /// `coin` must be the value that was assigned; the caller owns the jar
    /// and looks it up by position.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if no coin is assigned.
    #[inline]
    pub fn unassign_last(&mut self, coin: T) -> Pile {
        debug_assert!(
            !self.assignment.is_empty(),
            "called `SearchState::unassign_last` with no coins assigned"
        );

        let pile = self
            .assignment
            .pop()
            .expect("assignment stack cannot be empty here");
        match pile {
            Pile::Left => self.left_sum = self.left_sum - coin,
            Pile::Right => self.right_sum = self.right_sum - coin,
        }
        pile
    }

    /// Materializes the current complete assignment as a `Split` over `jar`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the assignment is incomplete or the jar
    /// size does not match.
    pub fn split_with(&self, jar: &CoinJar<T>) -> Split<T> {
        debug_assert!(
            self.is_complete(),
            "called `SearchState::split_with` with {} of {} coins assigned",
            self.num_assigned(),
            self.num_coins
        );
        debug_assert_eq!(
            jar.len(),
            self.num_coins,
            "called `SearchState::split_with` with a jar of mismatched size"
        );

        let mut left = PileVec::new();
        let mut right = PileVec::new();
        for (index, &pile) in self.assignment.iter().enumerate() {
            match pile {
                Pile::Left => left.push(jar.coin(index)),
                Pile::Right => right.push(jar.coin(index)),
            }
        }
        Split::new(left, right)
    }
}

impl<T> std::fmt::Display for SearchState<T>
where
    T: CoinValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchState(assigned: {}/{}, left: {}, right: {})",
            self.num_assigned(),
            self.num_coins,
            self.left_sum,
            self.right_sum
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_and_undo_keep_sums_consistent() {
        let mut state = SearchState::<i64>::new(3);
        state.assign_next(Pile::Left, 5);
        state.assign_next(Pile::Right, 3);
        assert_eq!(state.left_sum(), 5);
        assert_eq!(state.right_sum(), 3);
        assert!(!state.is_balanced());

        state.assign_next(Pile::Right, 2);
        assert!(state.is_complete());
        assert!(state.is_balanced());

        assert_eq!(state.unassign_last(2), Pile::Right);
        assert_eq!(state.right_sum(), 3);
        assert_eq!(state.num_assigned(), 2);
    }

    #[test]
    fn test_split_with_preserves_jar_order() {
        let jar = CoinJar::new(vec![5i64, 3, 2]).unwrap();
        let mut state = SearchState::<i64>::new(3);
        state.assign_next(Pile::Left, 5);
        state.assign_next(Pile::Right, 3);
        state.assign_next(Pile::Right, 2);

        let split = state.split_with(&jar);
        assert_eq!(split.left(), &[5]);
        assert_eq!(split.right(), &[3, 2]);
        assert!(split.balances(&jar));
    }

    #[test]
    fn test_reset_for_reuses_storage() {
        let mut state = SearchState::<i64>::new(2);
        state.assign_next(Pile::Left, 1);
        state.reset_for(4);
        assert_eq!(state.num_assigned(), 0);
        assert_eq!(state.num_coins(), 4);
        assert_eq!(state.left_sum(), 0);
        assert_eq!(state.right_sum(), 0);
    }
}
