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

//! Exhaustive backtracking solver for the equal-sum partition problem.
//!
//! This module implements a stateful search engine that explores the binary
//! assignment tree of a coin jar: at depth `i` the coin at index `i` is
//! placed on the left or the right pile. The traversal is depth-first and
//! left-biased (the left branch of every node is explored before the right
//! branch), so the first balanced complete assignment found is always the
//! lexicographically smallest one under the Left < Right branch order. There
//! is no pruning; when no split exists, every one of the `2^n` leaves is
//! visited before `Unsplittable` is proven.
//!
//! The `PartitionSolver` manages reusable internal structures. A
//! preallocation path minimizes memory churn across repeated solves, and a
//! fast `reset` keeps capacities while clearing per-run state. A search
//! session object encapsulates per-run state, statistics, and timing,
//! enabling reproducible and debuggable runs. The design emphasizes
//! determinism under the fixed branch order, internal consistency at
//! backtrack points, and end-state cleanliness after each solve.

use crate::{
    decision::{Decision, Pile},
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    result::{SearchOutcome, TerminationReason},
    stack::SearchStack,
    state::SearchState,
    stats::SearchStatistics,
};
use coinjar_model::{jar::CoinJar, partition::Split, value::CoinValue};

/// An exhaustive backtracking solver for splitting a coin jar into two
/// equal-sum piles. Note that this is just the execution engine; loading
/// jars and reporting answers is done by the surrounding crates.
#[derive(Clone, Debug)]
pub struct PartitionSolver<T>
where
    T: CoinValue,
{
    stack: SearchStack,
    state: SearchState<T>,
}

impl<T> Default for PartitionSolver<T>
where
    T: CoinValue,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartitionSolver<T>
where
    T: CoinValue,
{
    /// Creates a new solver instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            stack: SearchStack::new(),
            state: SearchState::new(0),
        }
    }

    /// Creates a new solver instance with preallocated storage for jars of
    /// up to `num_coins` coins.
    ///
    /// # Note
    ///
    /// When you invoke the solver it will internally ensure that the stack
    /// and state have sufficient capacity for the given jar. Constructing
    /// the solver preallocated only moves the cost of the memory
    /// allocations to construction time; it does not change the asymptotic
    /// memory usage of the solver.
    #[inline]
    pub fn preallocated(num_coins: usize) -> Self {
        Self {
            stack: SearchStack::preallocated(num_coins),
            state: SearchState::new(num_coins),
        }
    }

    /// Solves the given jar, returning the outcome of the search.
    ///
    /// The search is exhaustive: for well-formed jars it always terminates
    /// with either a witness split or a proof of unsplittability, unless
    /// the monitor commands termination first.
    pub fn solve<S>(&mut self, jar: &CoinJar<T>, mut monitor: S) -> SearchOutcome<T>
    where
        S: SearchMonitor<T>,
    {
        let session = PartitionSearchSession::new(self, jar, &mut monitor);
        let outcome = session.run();
        self.reset();
        outcome
    }

    /// Resets the internal state of the solver, clearing any stored stack
    /// and assignment information.
    ///
    /// # Note
    ///
    /// This does not deallocate any memory, but only resets logical state.
    #[inline]
    fn reset(&mut self) {
        self.stack.reset();
        self.state.reset_for(0);
    }
}

/// A search session for the partition solver. This struct encapsulates the
/// state and logic of a single search run.
struct PartitionSearchSession<'a, T, S>
where
    T: CoinValue,
{
    solver: &'a mut PartitionSolver<T>,
    jar: &'a CoinJar<T>,
    monitor: &'a mut S,
    stats: SearchStatistics,
    start_time: std::time::Instant,
}

impl<'a, T, S> PartitionSearchSession<'a, T, S>
where
    T: CoinValue,
    S: SearchMonitor<T>,
{
    /// Creates a new search session.
    #[inline]
    fn new(solver: &'a mut PartitionSolver<T>, jar: &'a CoinJar<T>, monitor: &'a mut S) -> Self {
        Self {
            solver,
            jar,
            monitor,
            stats: SearchStatistics::default(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Runs the search session.
    #[inline]
    fn run(mut self) -> SearchOutcome<T> {
        self.monitor.on_enter_search(self.jar, &self.stats);

        // An empty jar has no coins to place; both piles stay empty and
        // no split exists.
        if self.jar.is_empty() {
            self.stats.set_total_time(self.start_time.elapsed());
            self.monitor.on_exit_search(&self.stats);
            return SearchOutcome::unsplittable(self.stats);
        }

        self.initialize();

        let mut found_split: Option<Split<T>> = None;
        let termination_reason: TerminationReason = loop {
            if let SearchCommand::Terminate(msg) =
                self.monitor.search_command(&self.solver.state, &self.stats)
            {
                break TerminationReason::Aborted(msg);
            }

            if self.solver.stack.is_current_level_empty() {
                if self.solver.stack.depth() <= 1 {
                    break TerminationReason::ExhaustionProven;
                }
                self.backtrack_step();
            } else if let Some(split) = self.process_next_decision() {
                found_split = Some(split);
                break TerminationReason::SplitFound;
            }
        };

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);
        self.finalize_result(found_split, termination_reason)
    }

    /// Finalizes the outcome based on the found split and the termination
    /// reason. Consumes self.
    #[inline]
    fn finalize_result(
        self,
        found_split: Option<Split<T>>,
        reason: TerminationReason,
    ) -> SearchOutcome<T> {
        match reason {
            TerminationReason::SplitFound => {
                // Must have a split when the reason says so
                let split = found_split
                    .expect("expected a witness split when termination is SplitFound");
                SearchOutcome::split(split, self.stats)
            }
            TerminationReason::ExhaustionProven => SearchOutcome::unsplittable(self.stats),
            TerminationReason::Aborted(msg) => SearchOutcome::aborted(msg, self.stats),
        }
    }

    /// Initializes the search session.
    ///
    /// This resets the per-run state, makes sure we have enough memory
    /// allocated to *not* resize during the search, and pushes the root
    /// frame with the decisions for the first coin.
    #[inline]
    fn initialize(&mut self) {
        let num_coins = self.jar.len();
        self.solver.stack.ensure_capacity(num_coins);
        self.solver.state.reset_for(num_coins);

        // Root frame. Crucial to have this before pushing decisions!
        self.solver.stack.push_frame();
        self.stats.on_node_explored();

        self.enqueue_decisions_for(0);
    }

    /// Enqueues both pile choices for the coin at `item_index`.
    ///
    /// Right is pushed first so that Left pops first; this fixes the
    /// left-biased traversal order.
    #[inline(always)]
    fn enqueue_decisions_for(&mut self, item_index: usize) {
        self.solver.stack.push(Decision::new(item_index, Pile::Right));
        self.solver.stack.push(Decision::new(item_index, Pile::Left));
    }

    #[inline]
    fn backtrack_step(&mut self) {
        self.stats.on_backtrack();
        self.monitor.on_backtrack(&self.solver.state, &self.stats);

        self.solver.stack.pop_frame();
        let last = self.solver.state.num_assigned() - 1;
        self.solver.state.unassign_last(self.jar.coin(last));
    }

    /// Processes the next decision from the stack, returning the witness
    /// split if the decision completed a balanced assignment.
    ///
    /// # Panics
    ///
    /// In debug builds, this function will panic if called when the
    /// current decision stack level is empty.
    #[inline(always)]
    fn process_next_decision(&mut self) -> Option<Split<T>> {
        debug_assert!(
            !self.solver.stack.is_current_level_empty(),
            "called `PartitionSearchSession::process_next_decision` with empty decision stack"
        );

        let decision = self
            .solver
            .stack
            .pop()
            .expect("decision stack cannot be empty here");
        self.stats.on_decision_generated();

        let item_index = decision.item_index();
        let coin = self.jar.coin(item_index);
        self.solver.state.assign_next(decision.pile(), coin);
        self.stats.on_node_explored();
        self.stats
            .on_depth_update(self.solver.state.num_assigned() as u64);
        self.monitor
            .on_descend(&self.solver.state, decision, &self.stats);

        if self.solver.state.is_complete() {
            self.stats.on_leaf_check();
            if self.solver.state.is_balanced() {
                let split = self.solver.state.split_with(self.jar);
                self.monitor.on_split_found(&split, &self.stats);
                return Some(split);
            }
            // Failed leaf: undo immediately, the sibling decision (if any)
            // is still pending in the current frame.
            self.solver.state.unassign_last(coin);
            return None;
        }

        self.solver.stack.push_frame();
        self.enqueue_decisions_for(item_index + 1);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::no_op::NoOperationMonitor;
    use crate::monitor::time_limit::TimeLimitMonitor;
    use crate::result::SearchResult;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::time::Duration;

    fn solve_jar(coins: Vec<i64>) -> SearchOutcome<i64> {
        let jar = CoinJar::new(coins).unwrap();
        let mut solver = PartitionSolver::new();
        solver.solve(&jar, NoOperationMonitor::new())
    }

    /// Brute-force splittability over all 2^n assignments.
    fn is_splittable(coins: &[i64]) -> bool {
        let total: i64 = coins.iter().sum();
        (0u64..1 << coins.len()).any(|mask| {
            let left: i64 = coins
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, &c)| c)
                .sum();
            2 * left == total
        })
    }

    #[test]
    fn test_two_equal_coins_split() {
        let outcome = solve_jar(vec![2, 2]);
        let split = outcome.result().as_split().unwrap();
        assert_eq!(split.left(), &[2]);
        assert_eq!(split.right(), &[2]);
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::SplitFound
        );
    }

    #[test]
    fn test_left_biased_first_split_is_deterministic() {
        // The leftmost successful leaf under Left < Right branch order
        // is L L R R, so the first two coins land on the left pile.
        let outcome = solve_jar(vec![1, 1, 1, 1]);
        let split = outcome.result().as_split().unwrap();
        assert_eq!(split.left(), &[1, 1]);
        assert_eq!(split.right(), &[1, 1]);

        // Repeated runs give the same witness.
        let again = solve_jar(vec![1, 1, 1, 1]);
        assert_eq!(again.result().as_split().unwrap().left(), &[1, 1]);
    }

    #[test]
    fn test_odd_total_is_unsplittable() {
        let outcome = solve_jar(vec![3, 5, 7]);
        assert_eq!(outcome.result(), &SearchResult::Unsplittable);
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::ExhaustionProven
        );
        // All 2^3 leaves were checked.
        assert_eq!(outcome.statistics().leaf_checks, 8);
    }

    #[test]
    fn test_even_total_can_still_be_unsplittable() {
        // Total is 8, but no subset sums to 4.
        let outcome = solve_jar(vec![1, 1, 6]);
        assert_eq!(outcome.result(), &SearchResult::Unsplittable);
    }

    #[test]
    fn test_empty_jar_is_unsplittable_without_search() {
        let jar = CoinJar::<i64>::new(vec![]).unwrap();
        let mut solver = PartitionSolver::new();
        let outcome = solver.solve(&jar, NoOperationMonitor::new());
        assert_eq!(outcome.result(), &SearchResult::Unsplittable);
        assert_eq!(outcome.statistics().nodes_explored, 0);
    }

    #[test]
    fn test_single_coin_is_unsplittable() {
        let outcome = solve_jar(vec![7]);
        assert_eq!(outcome.result(), &SearchResult::Unsplittable);
    }

    #[test]
    fn test_solver_is_reusable_across_jars() {
        let mut solver = PartitionSolver::preallocated(8);

        let jar1 = CoinJar::new(vec![4i64, 1, 3]).unwrap();
        let outcome1 = solver.solve(&jar1, NoOperationMonitor::new());
        let split = outcome1.result().as_split().unwrap();
        assert!(split.balances(&jar1));

        let jar2 = CoinJar::new(vec![5i64]).unwrap();
        let outcome2 = solver.solve(&jar2, NoOperationMonitor::new());
        assert_eq!(outcome2.result(), &SearchResult::Unsplittable);

        let jar3 = CoinJar::new(vec![10i64, 2, 3, 5]).unwrap();
        let outcome3 = solver.solve(&jar3, NoOperationMonitor::new());
        assert!(outcome3.result().as_split().unwrap().balances(&jar3));
    }

    #[test]
    fn test_time_limit_aborts_search() {
        // 30 coins with an odd total force full exhaustion, which cannot
        // finish before a zero time limit fires.
        let coins: Vec<i64> = std::iter::repeat(2).take(29).chain([1]).collect();
        let jar = CoinJar::new(coins).unwrap();
        let mut solver = PartitionSolver::new();
        let monitor = TimeLimitMonitor::new(Duration::ZERO, 64);
        let outcome = solver.solve(&jar, monitor);

        assert_eq!(outcome.result(), &SearchResult::Unknown);
        assert!(matches!(
            outcome.termination_reason(),
            TerminationReason::Aborted(_)
        ));
    }

    #[test]
    fn test_matches_brute_force_on_random_jars() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..200 {
            let size = rng.random_range(1..=12);
            let coins: Vec<i64> = (0..size).map(|_| rng.random_range(1..=25)).collect();

            let jar = CoinJar::new(coins.clone()).unwrap();
            let mut solver = PartitionSolver::new();
            let outcome = solver.solve(&jar, NoOperationMonitor::new());

            match outcome.result() {
                SearchResult::Split(split) => {
                    assert!(split.balances(&jar), "invalid split for {coins:?}");
                }
                SearchResult::Unsplittable => {
                    assert!(!is_splittable(&coins), "missed split for {coins:?}");
                }
                SearchResult::Unknown => panic!("unmonitored search returned Unknown"),
            }
        }
    }

    #[test]
    fn test_statistics_are_populated() {
        let outcome = solve_jar(vec![3, 5, 7]);
        let stats = outcome.statistics();
        // Full exhaustion of a 3-coin tree: root + 14 assignments.
        assert_eq!(stats.nodes_explored, 15);
        assert_eq!(stats.max_depth, 3);
        assert!(stats.backtracks > 0);
    }
}
