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

use crate::stats::SearchStatistics;
use coinjar_model::{
    partition::{PartitionResult, Split},
    value::CoinValue,
};

/// The answer of one search run.
///
/// `Unknown` only arises when a monitor aborted the search before it could
/// prove either terminal answer; an unmonitored search always terminates
/// with `Split` or `Unsplittable`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<T> {
    /// A witness equal-sum split was found.
    Split(Split<T>),
    /// The full tree was exhausted without finding a split.
    Unsplittable,
    /// The search was aborted before reaching a terminal answer.
    Unknown,
}

impl<T> SearchResult<T>
where
    T: CoinValue,
{
    /// Returns the split, if any.
    #[inline]
    pub fn as_split(&self) -> Option<&Split<T>> {
        match self {
            Self::Split(split) => Some(split),
            _ => None,
        }
    }

    /// Converts into the model-level `PartitionResult`; `None` when the
    /// search was aborted and neither terminal answer was proven.
    #[inline]
    pub fn into_partition_result(self) -> Option<PartitionResult<T>> {
        match self {
            Self::Split(split) => Some(PartitionResult::Split(split)),
            Self::Unsplittable => Some(PartitionResult::Unsplittable),
            Self::Unknown => None,
        }
    }
}

/// Why the search loop stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The first successful leaf was reached.
    SplitFound,
    /// Every branch was exhausted; no split exists.
    ExhaustionProven,
    /// A monitor commanded termination (e.g. time limit).
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SplitFound => write!(f, "SplitFound"),
            Self::ExhaustionProven => write!(f, "ExhaustionProven"),
            Self::Aborted(reason) => write!(f, "Aborted({reason})"),
        }
    }
}

/// Result of the engine after termination.
#[derive(Debug, Clone)]
pub struct SearchOutcome<T> {
    result: SearchResult<T>,
    termination_reason: TerminationReason,
    statistics: SearchStatistics,
}

impl<T> SearchOutcome<T>
where
    T: CoinValue,
{
    #[inline]
    pub fn split(split: Split<T>, statistics: SearchStatistics) -> Self {
        Self {
            result: SearchResult::Split(split),
            termination_reason: TerminationReason::SplitFound,
            statistics,
        }
    }

    #[inline]
    pub fn unsplittable(statistics: SearchStatistics) -> Self {
        Self {
            result: SearchResult::Unsplittable,
            termination_reason: TerminationReason::ExhaustionProven,
            statistics,
        }
    }

    #[inline]
    pub fn aborted<R>(reason: R, statistics: SearchStatistics) -> Self
    where
        R: Into<String>,
    {
        Self {
            result: SearchResult::Unknown,
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the search result.
    #[inline]
    pub fn result(&self) -> &SearchResult<T> {
        &self.result
    }

    /// Consumes the outcome, returning its parts.
    #[inline]
    pub fn into_parts(self) -> (SearchResult<T>, TerminationReason, SearchStatistics) {
        (self.result, self.termination_reason, self.statistics)
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the search statistics.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}

impl<T> std::fmt::Display for SearchOutcome<T>
where
    T: CoinValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let result_str = match &self.result {
            SearchResult::Split(split) => format!("{split}"),
            SearchResult::Unsplittable => "Unsplittable".to_string(),
            SearchResult::Unknown => "Unknown".to_string(),
        };
        write!(
            f,
            "SearchOutcome(result: {}, reason: {})",
            result_str, self.termination_reason
        )
    }
}
