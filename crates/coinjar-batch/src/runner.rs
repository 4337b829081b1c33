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

//! The batch runner: drives the engine over a parsed case file.
//!
//! Single-threaded, in input order. Every case reaches exactly one terminal
//! state: `Solved`, `Unsplittable`, or `Errored`. A malformed line or an
//! expired per-case deadline is recorded as `Errored` and the batch
//! continues; one bad case never aborts the run.
//!
//! Timing uses `std::time::Instant`, a monotonic clock with nanosecond
//! resolution, taken immediately around the per-case work.

use crate::report::{BatchReport, CaseOutcome, CaseRecord};
use coinjar_engine::{
    monitor::composite::CompositeMonitor,
    monitor::progress::ProgressMonitor,
    monitor::time_limit::TimeLimitMonitor,
    result::{SearchResult, TerminationReason},
    solver::PartitionSolver,
};
use coinjar_model::{jar::TestCase, loading::CaseFile, value::CoinValue};
use std::time::{Duration, Instant};

/// Builder-style configuration for one batch run.
///
/// The even-sum fast path is off by default: rejecting odd totals in O(n)
/// changes the timing profile of unsplittable cases, and the harness exists
/// to measure the exhaustive search.
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    time_limit: Option<Duration>,
    even_sum_precheck: bool,
    progress_log: bool,
}

impl BatchRunner {
    /// Creates a runner with the default configuration: no per-case time
    /// limit, no even-sum precheck, no progress logging.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a per-case time limit. A case whose search exceeds it is
    /// recorded as `Errored`, and the batch moves on to the next case.
    #[inline]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Enables or disables the even-sum fast path: a jar with an odd total
    /// is recorded as `Unsplittable` without invoking the engine.
    #[inline]
    pub fn with_even_sum_precheck(mut self, enabled: bool) -> Self {
        self.even_sum_precheck = enabled;
        self
    }

    /// Enables or disables periodic progress logging during each search.
    #[inline]
    pub fn with_progress_log(mut self, enabled: bool) -> Self {
        self.progress_log = enabled;
        self
    }

    /// Runs the batch, returning the accumulated report.
    pub fn run<T>(&self, file: &CaseFile<T>) -> BatchReport<T>
    where
        T: CoinValue,
    {
        let mut solver = PartitionSolver::preallocated(file.max_jar_len());
        let mut report = BatchReport::new();

        for parsed in file.cases() {
            let record = match parsed.result() {
                Ok(case) => self.run_case(&mut solver, case),
                Err(error) => {
                    tracing::warn!(
                        ordinal = parsed.ordinal(),
                        %error,
                        "skipping malformed test case"
                    );
                    CaseRecord::new(
                        parsed.label_or_ordinal(),
                        CaseOutcome::Errored(error.to_string()),
                        Duration::ZERO,
                        0,
                    )
                }
            };
            report.insert(record);
        }

        report
    }

    /// Solves one well-formed case, timing the work around it.
    fn run_case<T>(&self, solver: &mut PartitionSolver<T>, case: &TestCase<T>) -> CaseRecord<T>
    where
        T: CoinValue,
    {
        let jar = case.jar();
        let start = Instant::now();

        if self.even_sum_precheck && !jar.has_even_total() {
            let elapsed = start.elapsed();
            tracing::debug!(
                label = case.label().get(),
                "odd total rejected without search"
            );
            return CaseRecord::new(
                case.label(),
                CaseOutcome::Unsplittable,
                elapsed,
                jar.len(),
            );
        }

        let mut monitor = CompositeMonitor::new();
        if let Some(limit) = self.time_limit {
            monitor.add_monitor(TimeLimitMonitor::with_default_check_interval(limit));
        }
        if self.progress_log {
            monitor.add_monitor(ProgressMonitor::default());
        }

        let outcome = solver.solve(jar, monitor);
        let elapsed = start.elapsed();

        let (result, reason, stats) = outcome.into_parts();
        tracing::debug!(
            label = case.label().get(),
            coins = jar.len(),
            nodes = stats.nodes_explored,
            elapsed_us = elapsed.as_secs_f64() * 1_000_000.0,
            reason = %reason,
            "case finished"
        );

        let case_outcome = match result {
            SearchResult::Split(split) => CaseOutcome::Solved(split),
            SearchResult::Unsplittable => CaseOutcome::Unsplittable,
            SearchResult::Unknown => {
                let message = match reason {
                    TerminationReason::Aborted(msg) => msg,
                    other => format!("search stopped without an answer: {other}"),
                };
                CaseOutcome::Errored(message)
            }
        };

        CaseRecord::new(case.label(), case_outcome, elapsed, jar.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinjar_model::label::CaseLabel;

    #[test]
    fn test_batch_classifies_all_three_ways() {
        let file =
            CaseFile::<i64>::from_str("1 2 2\n2 3 5 7\n3 one 2\n").expect("load failed");
        let report = BatchRunner::new().run(&file);

        assert_eq!(report.len(), 3);
        assert_eq!(report.solved().count(), 1);
        assert_eq!(report.unsplittable().count(), 1);
        assert_eq!(report.errored().count(), 1);

        let solved = report.get(CaseLabel::new(1)).unwrap();
        let split = solved.split().unwrap();
        assert_eq!(split.left(), &[2]);
        assert_eq!(split.right(), &[2]);
        assert_eq!(solved.coin_count(), 2);
    }

    #[test]
    fn test_malformed_case_falls_back_to_case_ordinal() {
        // The comment and blank line are skipped, so the bad line is the
        // second case and gets fallback label 2, not its file line number.
        let file = CaseFile::<i64>::from_str("# batch\n\n1 2 2\nnot a label 5\n").unwrap();
        let report = BatchRunner::new().run(&file);

        let errored = report.get(CaseLabel::new(2)).expect("fallback label");
        assert!(matches!(errored.outcome(), CaseOutcome::Errored(_)));
        assert_eq!(errored.coin_count(), 0);
        assert_eq!(errored.elapsed(), Duration::ZERO);
        assert!(report.get(CaseLabel::new(4)).is_none());
    }

    #[test]
    fn test_even_sum_precheck_skips_odd_totals() {
        let file = CaseFile::<i64>::from_str("1 3 5 7\n").unwrap();

        let checked = BatchRunner::new().with_even_sum_precheck(true).run(&file);
        let record = checked.get(CaseLabel::new(1)).unwrap();
        assert_eq!(record.outcome(), &CaseOutcome::Unsplittable);

        // The default path reaches the same classification exhaustively.
        let exhaustive = BatchRunner::new().run(&file);
        assert_eq!(
            exhaustive.get(CaseLabel::new(1)).unwrap().outcome(),
            &CaseOutcome::Unsplittable
        );
    }

    #[test]
    fn test_time_limit_marks_case_errored() {
        // 28 odd-total coins cannot be exhausted within a zero deadline.
        let coins = (0..27).map(|_| "2").collect::<Vec<_>>().join(" ");
        let file = CaseFile::<i64>::from_str(&format!("1 {coins} 1\n")).unwrap();

        let report = BatchRunner::new()
            .with_time_limit(Duration::ZERO)
            .run(&file);
        let record = report.get(CaseLabel::new(1)).unwrap();
        assert!(matches!(record.outcome(), CaseOutcome::Errored(_)));
    }

    #[test]
    fn test_duplicate_labels_keep_the_last_record() {
        let file = CaseFile::<i64>::from_str("1 2 2\n1 3 5 7\n").unwrap();
        let report = BatchRunner::new().run(&file);

        assert_eq!(report.len(), 1);
        let record = report.get(CaseLabel::new(1)).unwrap();
        assert_eq!(record.outcome(), &CaseOutcome::Unsplittable);
        assert_eq!(record.coin_count(), 3);
    }
}
