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

use crate::{decision::Decision, state::SearchState, stats::SearchStatistics};
use coinjar_model::{jar::CoinJar, partition::Split, value::CoinValue};

/// Command returned by the monitor to control the search process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCommand {
    /// Keep searching.
    Continue,
    /// Stop the search with the given reason.
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate({reason})"),
        }
    }
}

/// Trait for monitoring and controlling the search process of the engine.
pub trait SearchMonitor<T>: Send
where
    T: CoinValue,
{
    /// Called once before the search loop begins.
    fn on_enter_search(&mut self, jar: &CoinJar<T>, stats: &SearchStatistics);

    /// Called at the beginning of every search loop iteration.
    /// This is the primary place to check for time limits.
    fn search_command(
        &mut self,
        _state: &SearchState<T>,
        _stats: &SearchStatistics,
    ) -> SearchCommand {
        SearchCommand::Continue
    }

    /// Called just after a decision has been applied to the state.
    fn on_descend(&mut self, state: &SearchState<T>, decision: Decision, stats: &SearchStatistics);

    /// Called when the engine backtracks (moves up the tree).
    fn on_backtrack(&mut self, state: &SearchState<T>, stats: &SearchStatistics);

    /// Called when a balanced complete assignment is found.
    fn on_split_found(&mut self, split: &Split<T>, stats: &SearchStatistics);

    /// Called when the search is finished (either terminal or aborted).
    fn on_exit_search(&mut self, stats: &SearchStatistics);

    /// Returns the name of the monitor.
    fn name(&self) -> &str;
}

impl<T> std::fmt::Debug for dyn SearchMonitor<T>
where
    T: CoinValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

/// Forwarding implementation so boxed monitors compose with the generic
/// `PartitionSolver::solve` signature.
impl<T, M> SearchMonitor<T> for Box<M>
where
    T: CoinValue,
    M: SearchMonitor<T> + ?Sized,
{
    fn on_enter_search(&mut self, jar: &CoinJar<T>, stats: &SearchStatistics) {
        (**self).on_enter_search(jar, stats);
    }

    fn search_command(
        &mut self,
        state: &SearchState<T>,
        stats: &SearchStatistics,
    ) -> SearchCommand {
        (**self).search_command(state, stats)
    }

    fn on_descend(&mut self, state: &SearchState<T>, decision: Decision, stats: &SearchStatistics) {
        (**self).on_descend(state, decision, stats);
    }

    fn on_backtrack(&mut self, state: &SearchState<T>, stats: &SearchStatistics) {
        (**self).on_backtrack(state, stats);
    }

    fn on_split_found(&mut self, split: &Split<T>, stats: &SearchStatistics) {
        (**self).on_split_found(split, stats);
    }

    fn on_exit_search(&mut self, stats: &SearchStatistics) {
        (**self).on_exit_search(stats);
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
