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

use crate::{
    decision::Decision,
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    state::SearchState,
    stats::SearchStatistics,
};
use coinjar_model::{jar::CoinJar, partition::Split, value::CoinValue};
use std::marker::PhantomData;
use std::time::{Duration, Instant};

/// A monitor that periodically emits a `tracing` event describing the
/// progress of a long-running search.
///
/// The clock is only consulted every `clock_check_mask + 1` commands;
/// the mask must be one less than a power of two.
#[derive(Debug, Clone)]
pub struct ProgressMonitor<T>
where
    T: CoinValue,
{
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    commands_seen: u64,
    _marker: PhantomData<T>,
}

impl<T> ProgressMonitor<T>
where
    T: CoinValue,
{
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        debug_assert!(
            (clock_check_mask + 1).is_power_of_two(),
            "clock_check_mask must be one less than a power of two"
        );

        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            commands_seen: 0,
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    fn log_line(&mut self, state: &SearchState<T>, stats: &SearchStatistics) {
        let now = Instant::now();
        tracing::info!(
            elapsed_secs = now.duration_since(self.start_time).as_secs_f32(),
            nodes = stats.nodes_explored,
            depth = state.num_assigned(),
            backtracks = stats.backtracks,
            leaf_checks = stats.leaf_checks,
            "search progress"
        );
        self.last_log_time = now;
    }
}

impl<T> Default for ProgressMonitor<T>
where
    T: CoinValue,
{
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl<T> SearchMonitor<T> for ProgressMonitor<T>
where
    T: CoinValue,
{
    fn on_enter_search(&mut self, jar: &CoinJar<T>, _statistics: &SearchStatistics) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.commands_seen = 0;
        tracing::debug!(num_coins = jar.len(), "search started");
    }

    fn search_command(
        &mut self,
        state: &SearchState<T>,
        statistics: &SearchStatistics,
    ) -> SearchCommand {
        self.commands_seen = self.commands_seen.wrapping_add(1);
        if self.commands_seen & self.clock_check_mask == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(state, statistics);
        }
        SearchCommand::Continue
    }

    fn on_descend(
        &mut self,
        _state: &SearchState<T>,
        _decision: Decision,
        _statistics: &SearchStatistics,
    ) {
    }

    fn on_backtrack(&mut self, _state: &SearchState<T>, _statistics: &SearchStatistics) {}

    fn on_split_found(&mut self, split: &Split<T>, stats: &SearchStatistics) {
        tracing::debug!(
            nodes = stats.nodes_explored,
            left_sum = %split.left_sum(),
            right_sum = %split.right_sum(),
            "split found"
        );
    }

    fn on_exit_search(&mut self, stats: &SearchStatistics) {
        tracing::debug!(
            elapsed_secs = self.start_time.elapsed().as_secs_f32(),
            nodes = stats.nodes_explored,
            backtracks = stats.backtracks,
            "search finished"
        );
    }

    fn name(&self) -> &str {
        "ProgressMonitor"
    }
}

impl<T> std::fmt::Display for ProgressMonitor<T>
where
    T: CoinValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ProgressMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}
