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

//! Result-file verification against the input file.
//!
//! For every result row that carries a split, three invariants must hold
//! against the corresponding input jar: the jar total is even, both piles
//! sum to exactly half of it, and the multiset union of the piles equals
//! the jar. Rows with the `0` empty-pile marker (unsplittable or errored
//! cases) carry no split and are skipped.

use coinjar_model::{
    label::CaseLabel,
    loading::CaseFile,
    report::{ReportFile, ReportRow},
    value::CoinValue,
};
use rustc_hash::FxHashMap;

/// The verdict of one checker run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    checked: usize,
    skipped: usize,
    failing: Vec<CaseLabel>,
}

impl CheckReport {
    /// Returns `true` if every checked row passed.
    #[inline]
    pub fn passed(&self) -> bool {
        self.failing.is_empty()
    }

    /// Returns the number of rows that carried a split and were checked.
    #[inline]
    pub fn checked(&self) -> usize {
        self.checked
    }

    /// Returns the number of rows skipped for carrying no split.
    #[inline]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Returns the labels of the rows that failed verification.
    #[inline]
    pub fn failing(&self) -> &[CaseLabel] {
        &self.failing
    }
}

impl std::fmt::Display for CheckReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.passed() {
            write!(
                f,
                "PASS: {} split(s) verified, {} row(s) without a split skipped",
                self.checked, self.skipped
            )
        } else {
            let labels = self
                .failing
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            write!(
                f,
                "FAIL: {} of {} checked split(s) invalid (labels: {labels})",
                self.failing.len(),
                self.checked
            )
        }
    }
}

/// Verifies every split-carrying row of `results` against `cases`.
pub fn verify<T>(cases: &CaseFile<T>, results: &ReportFile<T>) -> CheckReport
where
    T: CoinValue,
{
    let mut jars: FxHashMap<CaseLabel, &[T]> = FxHashMap::default();
    for parsed in cases.cases() {
        if let Ok(case) = parsed.result() {
            jars.insert(case.label(), case.jar().coins());
        }
    }

    let mut report = CheckReport::default();
    for row in results.rows() {
        if row.is_unsolved() {
            report.skipped += 1;
            continue;
        }

        report.checked += 1;
        let valid = match jars.get(&row.label) {
            Some(coins) => row_is_valid(row, coins),
            // A split for a label the input never defined can never be right.
            None => false,
        };
        if !valid {
            report.failing.push(row.label);
        }
    }

    report
}

fn row_is_valid<T>(row: &ReportRow<T>, coins: &[T]) -> bool
where
    T: CoinValue,
{
    let total = sum(coins);
    if total & T::one() != T::zero() {
        return false;
    }

    let half = total / (T::one() + T::one());
    if sum(&row.left) != half || sum(&row.right) != half {
        return false;
    }

    // Multiset union of the piles must reproduce the jar exactly.
    let mut combined: Vec<T> = row
        .left
        .iter()
        .chain(row.right.iter())
        .copied()
        .collect();
    combined.sort_unstable();
    let mut expected: Vec<T> = coins.to_vec();
    expected.sort_unstable();
    combined == expected
}

fn sum<T>(values: &[T]) -> T
where
    T: CoinValue,
{
    values.iter().fold(T::zero(), |acc, &v| acc.saturating_add(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinjar_model::report::REPORT_HEADER;

    fn results(rows: &str) -> ReportFile<i64> {
        ReportFile::from_str(&format!("{REPORT_HEADER}\n{rows}")).expect("decode failed")
    }

    #[test]
    fn test_valid_output_passes() {
        let cases = CaseFile::<i64>::from_str("1 2 2\n2 3 5 7\n").unwrap();
        let report = verify(&cases, &results("1 2 2 4.2 2\n2 0 0 11 3\n"));

        assert!(report.passed());
        assert_eq!(report.checked(), 1);
        assert_eq!(report.skipped(), 1);
    }

    #[test]
    fn test_unbalanced_split_fails() {
        let cases = CaseFile::<i64>::from_str("1 2 3 5\n").unwrap();
        let report = verify(&cases, &results("1 2,3 5 4.2 3\n"));

        assert!(report.passed());

        // Same jar, piles that do not sum to half.
        let bad = verify(&cases, &results("1 2 3,5 4.2 3\n"));
        assert!(!bad.passed());
        assert_eq!(bad.failing(), &[CaseLabel::new(1)]);
    }

    #[test]
    fn test_wrong_multiset_fails_even_with_equal_sums() {
        let cases = CaseFile::<i64>::from_str("1 2 2 4\n").unwrap();
        // Sums are 4 and 4, but coin 4 appears twice and coin 2 is lost.
        let report = verify(&cases, &results("1 4 4 1.0 3\n"));
        assert!(!report.passed());
    }

    #[test]
    fn test_unknown_label_fails() {
        let cases = CaseFile::<i64>::from_str("1 2 2\n").unwrap();
        let report = verify(&cases, &results("9 2 2 1.0 2\n"));
        assert!(!report.passed());
        assert_eq!(report.failing(), &[CaseLabel::new(9)]);
    }
}
