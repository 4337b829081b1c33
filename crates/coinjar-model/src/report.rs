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

//! Result-file row codec.
//!
//! One row per test case:
//! `<label> <left_pile_csv|0> <right_pile_csv|0> <elapsed_us> <coin_count>`,
//! preceded by a fixed header line. An empty pile (unsplittable or errored
//! case) is the literal `0`, never an empty field. Elapsed time is
//! fractional microseconds.
//!
//! The encoder is used by the batch report writer; the decoder by the
//! checker and by tests that close the serialization round trip.

use crate::{
    label::CaseLabel,
    loading::ParseTokenError,
    partition::{PileVec, Split},
    value::CoinValue,
};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    time::Duration,
};

/// The fixed first line of every result file.
pub const REPORT_HEADER: &str =
    "Testcase_Number Left_Coin_Pile Right_Coin_Pile Computation_Time Number_of_Coins";

/// Serialization of an empty pile.
pub const EMPTY_PILE_MARKER: &str = "0";

/// Encodes one result row. `split` is `None` for unsplittable and errored
/// cases, which both serialize their piles as the `0` marker.
pub fn format_row<T>(
    label: CaseLabel,
    split: Option<&Split<T>>,
    elapsed: Duration,
    coin_count: usize,
) -> String
where
    T: CoinValue,
{
    let (left, right) = match split {
        Some(split) => (format_pile(split.left()), format_pile(split.right())),
        None => (
            EMPTY_PILE_MARKER.to_owned(),
            EMPTY_PILE_MARKER.to_owned(),
        ),
    };

    let elapsed_us = elapsed.as_secs_f64() * 1_000_000.0;
    format!("{label} {left} {right} {elapsed_us} {coin_count}")
}

fn format_pile<T>(pile: &[T]) -> String
where
    T: CoinValue,
{
    if pile.is_empty() {
        return EMPTY_PILE_MARKER.to_owned();
    }
    pile.iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// A decoded result row.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow<T> {
    /// The test-case label.
    pub label: CaseLabel,
    /// The left pile; empty when the case was not solved.
    pub left: PileVec<T>,
    /// The right pile; empty when the case was not solved.
    pub right: PileVec<T>,
    /// Elapsed computation time in microseconds.
    pub elapsed_us: f64,
    /// The number of coins in the jar.
    pub coin_count: usize,
}

impl<T> ReportRow<T>
where
    T: CoinValue,
{
    /// Returns `true` if this row carries no split (the `0` marker).
    #[inline]
    pub fn is_unsolved(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// The ways a result row can be malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowParseError {
    /// A required column was absent.
    MissingColumn(&'static str),
    /// A token could not be parsed.
    Parse(ParseTokenError),
    /// The label column was zero.
    ZeroLabel,
}

impl std::fmt::Display for RowParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingColumn(name) => write!(f, "missing column '{name}'"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::ZeroLabel => write!(f, "row labels are 1-based, got 0"),
        }
    }
}

impl std::error::Error for RowParseError {}

impl From<ParseTokenError> for RowParseError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

/// The error type for whole-file report decoding.
#[derive(Debug)]
pub enum ReportFileError {
    /// An I/O error occurred while reading the stream.
    Io(std::io::Error),
    /// The file was empty or its first line was not the expected header.
    BadHeader,
    /// A data row failed to parse.
    Row {
        /// 1-based data-row number (the header is row 0).
        row: usize,
        /// The underlying parse failure.
        source: RowParseError,
    },
}

impl std::fmt::Display for ReportFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::BadHeader => write!(f, "result file does not start with the expected header"),
            Self::Row { row, source } => write!(f, "result row {row}: {source}"),
        }
    }
}

impl std::error::Error for ReportFileError {}

impl From<std::io::Error> for ReportFileError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// A decoded result file: the rows in file order.
#[derive(Debug, Clone)]
pub struct ReportFile<T> {
    rows: Vec<ReportRow<T>>,
}

impl<T> ReportFile<T>
where
    T: CoinValue,
{
    /// Decodes a result file from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(rdr: R) -> Result<Self, ReportFileError> {
        let mut lines = rdr.lines();

        match lines.next() {
            Some(header) => {
                if header?.trim_end() != REPORT_HEADER {
                    return Err(ReportFileError::BadHeader);
                }
            }
            None => return Err(ReportFileError::BadHeader),
        }

        let mut rows = Vec::new();
        for (index, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let row = parse_row(&line).map_err(|source| ReportFileError::Row {
                row: index + 1,
                source,
            })?;
            rows.push(row);
        }

        Ok(Self { rows })
    }

    /// Decodes a result file from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ReportFileError> {
        let file = File::open(path)?;
        Self::from_bufread(BufReader::new(file))
    }

    /// Decodes a result file from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(r: R) -> Result<Self, ReportFileError> {
        Self::from_bufread(BufReader::new(r))
    }

    /// Decodes a result file from a string slice.
    #[inline]
    pub fn from_str(s: &str) -> Result<Self, ReportFileError> {
        Self::from_reader(s.as_bytes())
    }

    /// Returns the decoded rows in file order.
    #[inline]
    pub fn rows(&self) -> &[ReportRow<T>] {
        &self.rows
    }

    /// Returns the number of data rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the file carried no data rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn parse_row<T>(line: &str) -> Result<ReportRow<T>, RowParseError>
where
    T: CoinValue,
{
    let mut tokens = line.split_whitespace();

    let label_token = tokens
        .next()
        .ok_or(RowParseError::MissingColumn("Testcase_Number"))?;
    let label_value: u32 = label_token.parse().map_err(|_| {
        RowParseError::Parse(ParseTokenError {
            token: label_token.to_owned(),
            type_name: "u32",
        })
    })?;
    if label_value == 0 {
        return Err(RowParseError::ZeroLabel);
    }

    let left_token = tokens
        .next()
        .ok_or(RowParseError::MissingColumn("Left_Coin_Pile"))?;
    let right_token = tokens
        .next()
        .ok_or(RowParseError::MissingColumn("Right_Coin_Pile"))?;

    let elapsed_token = tokens
        .next()
        .ok_or(RowParseError::MissingColumn("Computation_Time"))?;
    let elapsed_us: f64 = elapsed_token.parse().map_err(|_| {
        RowParseError::Parse(ParseTokenError {
            token: elapsed_token.to_owned(),
            type_name: "f64",
        })
    })?;

    let count_token = tokens
        .next()
        .ok_or(RowParseError::MissingColumn("Number_of_Coins"))?;
    let coin_count: usize = count_token.parse().map_err(|_| {
        RowParseError::Parse(ParseTokenError {
            token: count_token.to_owned(),
            type_name: "usize",
        })
    })?;

    Ok(ReportRow {
        label: CaseLabel::new(label_value),
        left: parse_pile(left_token)?,
        right: parse_pile(right_token)?,
        elapsed_us,
        coin_count,
    })
}

fn parse_pile<T>(token: &str) -> Result<PileVec<T>, RowParseError>
where
    T: CoinValue,
{
    if token == EMPTY_PILE_MARKER {
        return Ok(PileVec::new());
    }

    let mut pile = PileVec::new();
    for part in token.split(',') {
        let value: T = part.parse().map_err(|_| {
            RowParseError::Parse(ParseTokenError {
                token: part.to_owned(),
                type_name: std::any::type_name::<T>(),
            })
        })?;
        pile.push(value);
    }
    Ok(pile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_format_solved_row() {
        let split = Split::new(smallvec![2i64, 3], smallvec![5i64]);
        let row = format_row(
            CaseLabel::new(1),
            Some(&split),
            Duration::from_micros(42),
            3,
        );
        assert_eq!(row, "1 2,3 5 42 3");
    }

    #[test]
    fn test_format_unsolved_row_uses_zero_marker() {
        let row = format_row::<i64>(CaseLabel::new(2), None, Duration::from_nanos(1500), 3);
        assert_eq!(row, "2 0 0 1.5 3");
    }

    #[test]
    fn test_roundtrip_through_decoder() {
        let split = Split::new(smallvec![1i64, 1], smallvec![2i64]);
        let mut text = String::from(REPORT_HEADER);
        text.push('\n');
        text.push_str(&format_row(
            CaseLabel::new(1),
            Some(&split),
            Duration::from_micros(10),
            3,
        ));
        text.push('\n');
        text.push_str(&format_row::<i64>(
            CaseLabel::new(2),
            None,
            Duration::from_micros(3),
            4,
        ));
        text.push('\n');

        let report = ReportFile::<i64>::from_str(&text).expect("decode failed");
        assert_eq!(report.len(), 2);

        let first = &report.rows()[0];
        assert_eq!(first.label.get(), 1);
        assert_eq!(first.left.as_slice(), &[1, 1]);
        assert_eq!(first.right.as_slice(), &[2]);
        assert!(!first.is_unsolved());

        let second = &report.rows()[1];
        assert!(second.is_unsolved());
        assert_eq!(second.coin_count, 4);
    }

    #[test]
    fn test_bad_header_rejected() {
        let err = ReportFile::<i64>::from_str("not a header\n1 0 0 1 2\n").unwrap_err();
        assert!(matches!(err, ReportFileError::BadHeader));
    }

    #[test]
    fn test_malformed_row_reports_position() {
        let text = format!("{REPORT_HEADER}\n1 2,x 2 1.0 2\n");
        match ReportFile::<i64>::from_str(&text).unwrap_err() {
            ReportFileError::Row { row, source } => {
                assert_eq!(row, 1);
                assert!(matches!(source, RowParseError::Parse(_)));
            }
            other => panic!("expected row error, got {other:?}"),
        }
    }
}
