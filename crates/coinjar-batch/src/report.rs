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

//! Per-case records and the label-keyed batch accumulator.
//!
//! A `CaseRecord` is immutable once created: label, terminal outcome,
//! elapsed wall-clock time, and item count. The `BatchReport` accumulates
//! records keyed by label with last-write-wins semantics on duplicates,
//! retains first-occurrence insertion order, and derives classifications
//! from the outcome variant instead of storing them twice.
//!
//! The result-file writer emits one row per label from 1 through the
//! record count and fails fast when the labels are not dense 1-based.

use coinjar_model::{
    label::CaseLabel,
    partition::Split,
    report::{format_row, REPORT_HEADER},
    value::CoinValue,
};
use rustc_hash::FxHashMap;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    time::Duration,
};

/// The terminal state of one batch case.
#[derive(Debug, Clone, PartialEq)]
pub enum CaseOutcome<T> {
    /// A witness split was found.
    Solved(Split<T>),
    /// Exhaustion proved that no split exists.
    Unsplittable,
    /// The case could not be answered: malformed input or an aborted search.
    Errored(String),
}

/// The immutable timing record of one terminal case.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseRecord<T> {
    label: CaseLabel,
    outcome: CaseOutcome<T>,
    elapsed: Duration,
    coin_count: usize,
}

impl<T> CaseRecord<T>
where
    T: CoinValue,
{
    /// Creates a new record.
    #[inline]
    pub fn new(
        label: CaseLabel,
        outcome: CaseOutcome<T>,
        elapsed: Duration,
        coin_count: usize,
    ) -> Self {
        Self {
            label,
            outcome,
            elapsed,
            coin_count,
        }
    }

    /// Returns the case label.
    #[inline]
    pub fn label(&self) -> CaseLabel {
        self.label
    }

    /// Returns the terminal outcome.
    #[inline]
    pub fn outcome(&self) -> &CaseOutcome<T> {
        &self.outcome
    }

    /// Returns the measured wall-clock time.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns the number of coins in the case's jar (0 for malformed cases).
    #[inline]
    pub fn coin_count(&self) -> usize {
        self.coin_count
    }

    /// Returns the split, if the case was solved.
    #[inline]
    pub fn split(&self) -> Option<&Split<T>> {
        match &self.outcome {
            CaseOutcome::Solved(split) => Some(split),
            _ => None,
        }
    }
}

impl<T> std::fmt::Display for CaseRecord<T>
where
    T: CoinValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let outcome = match &self.outcome {
            CaseOutcome::Solved(_) => "Solved",
            CaseOutcome::Unsplittable => "Unsplittable",
            CaseOutcome::Errored(_) => "Errored",
        };
        write!(
            f,
            "CaseRecord(label: {}, outcome: {}, elapsed: {:?}, coins: {})",
            self.label, outcome, self.elapsed, self.coin_count
        )
    }
}

/// The (item count, elapsed) vectors a timing-study consumer reads, one
/// vector per classification. Empty vectors are valid outputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedPoints {
    /// Points for solved cases.
    pub solved: Vec<(usize, Duration)>,
    /// Points for unsplittable cases.
    pub unsplittable: Vec<(usize, Duration)>,
    /// Points for errored cases.
    pub errored: Vec<(usize, Duration)>,
}

/// The error type for result-file writing.
#[derive(Debug)]
pub enum ReportWriteError {
    /// An I/O error occurred while writing.
    Io(std::io::Error),
    /// The accumulated labels are not dense 1-based: the label `expected`
    /// has no record.
    SparseLabels {
        /// The smallest label with no record.
        expected: u32,
    },
}

impl std::fmt::Display for ReportWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::SparseLabels { expected } => write!(
                f,
                "result rows require dense 1-based labels, but label {expected} has no record"
            ),
        }
    }
}

impl std::error::Error for ReportWriteError {}

impl From<std::io::Error> for ReportWriteError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// The batch accumulator: terminal case records keyed by label.
#[derive(Debug, Clone, Default)]
pub struct BatchReport<T> {
    records: FxHashMap<CaseLabel, CaseRecord<T>>,
    /// Labels in first-occurrence insertion order.
    order: Vec<CaseLabel>,
}

impl<T> BatchReport<T>
where
    T: CoinValue,
{
    /// Creates a new, empty report.
    #[inline]
    pub fn new() -> Self {
        Self {
            records: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// Inserts a record. A duplicate label overwrites the earlier record
    /// (last-write-wins) while keeping its first-occurrence position in the
    /// insertion order.
    pub fn insert(&mut self, record: CaseRecord<T>) {
        let label = record.label();
        if self.records.insert(label, record).is_none() {
            self.order.push(label);
        }
    }

    /// Returns the record for `label`, if any.
    #[inline]
    pub fn get(&self, label: CaseLabel) -> Option<&CaseRecord<T>> {
        self.records.get(&label)
    }

    /// Returns the number of distinct labels recorded.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no case has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates the records in first-occurrence insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CaseRecord<T>> {
        self.order.iter().map(|label| {
            self.records
                .get(label)
                .expect("every ordered label has a record")
        })
    }

    /// Iterates the solved records in insertion order.
    pub fn solved(&self) -> impl Iterator<Item = &CaseRecord<T>> {
        self.iter()
            .filter(|r| matches!(r.outcome(), CaseOutcome::Solved(_)))
    }

    /// Iterates the unsplittable records in insertion order.
    pub fn unsplittable(&self) -> impl Iterator<Item = &CaseRecord<T>> {
        self.iter()
            .filter(|r| matches!(r.outcome(), CaseOutcome::Unsplittable))
    }

    /// Iterates the errored records in insertion order.
    pub fn errored(&self) -> impl Iterator<Item = &CaseRecord<T>> {
        self.iter()
            .filter(|r| matches!(r.outcome(), CaseOutcome::Errored(_)))
    }

    /// Derives the per-classification (item count, elapsed) vectors.
    pub fn classified_points(&self) -> ClassifiedPoints {
        let mut points = ClassifiedPoints::default();
        for record in self.iter() {
            let point = (record.coin_count(), record.elapsed());
            match record.outcome() {
                CaseOutcome::Solved(_) => points.solved.push(point),
                CaseOutcome::Unsplittable => points.unsplittable.push(point),
                CaseOutcome::Errored(_) => points.errored.push(point),
            }
        }
        points
    }

    /// Returns the smallest label in `1..=len()` with no record, if any.
    fn first_missing_label(&self) -> Option<u32> {
        (1..=self.order.len() as u32).find(|&v| !self.records.contains_key(&CaseLabel::new(v)))
    }

    /// Writes the result file: the header, then one row per label from 1
    /// through `len()`.
    ///
    /// Fails fast when the labels are not dense 1-based; nothing useful can
    /// be emitted for a label with no record. Density is checked before the
    /// header goes out, so a sparse report writes no bytes at all.
    pub fn write_to<W: Write>(&self, mut w: W) -> Result<(), ReportWriteError> {
        if let Some(expected) = self.first_missing_label() {
            return Err(ReportWriteError::SparseLabels { expected });
        }

        writeln!(w, "{REPORT_HEADER}")?;

        for label_value in 1..=self.order.len() as u32 {
            let record = self
                .records
                .get(&CaseLabel::new(label_value))
                .expect("label density was checked above");

            let row = format_row(
                record.label(),
                record.split(),
                record.elapsed(),
                record.coin_count(),
            );
            writeln!(w, "{row}")?;
        }

        Ok(())
    }

    /// Writes the result file to `path`, creating or truncating it.
    ///
    /// The label-density check runs before the file is touched: a sparse
    /// report leaves no file behind and never truncates an existing one.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ReportWriteError> {
        if let Some(expected) = self.first_missing_label() {
            return Err(ReportWriteError::SparseLabels { expected });
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinjar_model::partition::PileVec;

    fn solved_record(label: u32, coins: usize) -> CaseRecord<i64> {
        let left: PileVec<i64> = PileVec::from_slice(&[2]);
        let right: PileVec<i64> = PileVec::from_slice(&[2]);
        CaseRecord::new(
            CaseLabel::new(label),
            CaseOutcome::Solved(Split::new(left, right)),
            Duration::from_micros(5),
            coins,
        )
    }

    #[test]
    fn test_last_write_wins_on_duplicate_labels() {
        let mut report = BatchReport::<i64>::new();
        report.insert(solved_record(1, 2));
        report.insert(CaseRecord::new(
            CaseLabel::new(1),
            CaseOutcome::Unsplittable,
            Duration::from_micros(9),
            3,
        ));

        assert_eq!(report.len(), 1);
        let record = report.get(CaseLabel::new(1)).unwrap();
        assert_eq!(record.outcome(), &CaseOutcome::Unsplittable);
        assert_eq!(record.coin_count(), 3);
    }

    #[test]
    fn test_classified_points_split_by_outcome() {
        let mut report = BatchReport::<i64>::new();
        report.insert(solved_record(1, 2));
        report.insert(CaseRecord::new(
            CaseLabel::new(2),
            CaseOutcome::Unsplittable,
            Duration::from_micros(7),
            3,
        ));
        report.insert(CaseRecord::new(
            CaseLabel::new(3),
            CaseOutcome::Errored("bad line".to_owned()),
            Duration::ZERO,
            0,
        ));

        let points = report.classified_points();
        assert_eq!(points.solved, vec![(2, Duration::from_micros(5))]);
        assert_eq!(points.unsplittable, vec![(3, Duration::from_micros(7))]);
        assert_eq!(points.errored, vec![(0, Duration::ZERO)]);
    }

    #[test]
    fn test_empty_report_writes_header_only() {
        let report = BatchReport::<i64>::new();
        let mut buf = Vec::new();
        report.write_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.trim_end(), REPORT_HEADER);
    }

    #[test]
    fn test_sparse_labels_fail_the_writer() {
        let mut report = BatchReport::<i64>::new();
        report.insert(solved_record(1, 2));
        report.insert(solved_record(3, 2));

        let mut buf = Vec::new();
        match report.write_to(&mut buf).unwrap_err() {
            ReportWriteError::SparseLabels { expected } => assert_eq!(expected, 2),
            other => panic!("expected SparseLabels, got {other:?}"),
        }
        assert!(buf.is_empty(), "a sparse report must write no bytes");
    }

    #[test]
    fn test_sparse_labels_leave_no_file_behind() {
        let mut report = BatchReport::<i64>::new();
        report.insert(solved_record(1, 2));
        report.insert(solved_record(5, 2));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");
        match report.write_to_path(&path).unwrap_err() {
            ReportWriteError::SparseLabels { expected } => assert_eq!(expected, 2),
            other => panic!("expected SparseLabels, got {other:?}"),
        }
        assert!(!path.exists(), "a failed write must not create the file");
    }

    #[test]
    fn test_sparse_labels_do_not_truncate_an_existing_file() {
        let mut report = BatchReport::<i64>::new();
        report.insert(solved_record(2, 2));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");
        std::fs::write(&path, "previous contents\n").unwrap();

        report.write_to_path(&path).unwrap_err();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "previous contents\n");
    }
}
