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

//! Test-case file loader for the coin jar domain.
//!
//! This module turns whitespace-delimited text into labeled `TestCase`s.
//! One case per line: `<label> <coin_1> <coin_2> ... <coin_n>`, with `n >= 1`
//! and every coin a positive integer. Blank lines and lines starting with
//! `#` are skipped.
//!
//! Parse failures are isolated per line: a malformed case is carried as an
//! error alongside the well-formed ones instead of aborting the load, so the
//! batch harness can record it and keep going. Only I/O failures (missing
//! file, unreadable stream) abort the load as a whole.

use crate::{
    jar::{CoinJar, TestCase},
    label::CaseLabel,
    value::CoinValue,
};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// The error type for whole-file loading. Per-case parse failures are not
/// file errors; they live in `ParsedCase`.
#[derive(Debug)]
pub enum CaseFileError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
}

impl std::fmt::Display for CaseFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CaseFileError {}

impl From<std::io::Error> for CaseFileError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

/// The ways a single case line can be malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseParseError {
    /// The line carried no tokens where a label was expected.
    MissingLabel,
    /// The label token parsed but was zero; labels are 1-based.
    ZeroLabel,
    /// A token could not be parsed as an integer.
    Parse(ParseTokenError),
    /// The line carried a label but no coins.
    EmptyJar,
    /// A coin token parsed but was not positive.
    NonPositiveCoin {
        /// Zero-based position of the coin within the jar.
        position: usize,
        /// The offending token as written.
        token: String,
    },
}

impl std::fmt::Display for CaseParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingLabel => write!(f, "missing test-case label"),
            Self::ZeroLabel => write!(f, "test-case labels are 1-based, got 0"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::EmptyJar => write!(f, "test case has no coins"),
            Self::NonPositiveCoin { position, token } => write!(
                f,
                "coin at position {position} must be a positive integer, got '{token}'"
            ),
        }
    }
}

impl std::error::Error for CaseParseError {}

impl From<ParseTokenError> for CaseParseError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

/// One line of the case file: either a well-formed `TestCase` or the
/// reason it could not be parsed.
#[derive(Debug, Clone)]
pub struct ParsedCase<T> {
    ordinal: usize,
    result: Result<TestCase<T>, CaseParseError>,
}

impl<T> ParsedCase<T>
where
    T: CoinValue,
{
    /// Returns the 1-based position of this case among the parsed cases.
    #[inline]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Returns the parse result for this line.
    #[inline]
    pub fn result(&self) -> Result<&TestCase<T>, &CaseParseError> {
        self.result.as_ref()
    }

    /// Returns the case's own label, or its ordinal when the line was too
    /// malformed to carry one. Keeps malformed lines addressable in the
    /// batch report.
    #[inline]
    pub fn label_or_ordinal(&self) -> CaseLabel {
        match &self.result {
            Ok(case) => case.label(),
            Err(_) => CaseLabel::new(self.ordinal as u32),
        }
    }
}

/// A parsed test-case file: every non-skipped line, in input order.
#[derive(Debug, Clone)]
pub struct CaseFile<T> {
    cases: Vec<ParsedCase<T>>,
}

impl<T> CaseFile<T>
where
    T: CoinValue,
{
    /// Loads a case file from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(rdr: R) -> Result<Self, CaseFileError> {
        let mut cases = Vec::new();

        for line in rdr.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let ordinal = cases.len() + 1;
            cases.push(ParsedCase {
                ordinal,
                result: parse_case_line(trimmed),
            });
        }

        Ok(Self { cases })
    }

    /// Loads a case file from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CaseFileError> {
        let file = File::open(path)?;
        Self::from_bufread(BufReader::new(file))
    }

    /// Loads a case file from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(r: R) -> Result<Self, CaseFileError> {
        Self::from_bufread(BufReader::new(r))
    }

    /// Loads a case file from a string slice.
    #[inline]
    pub fn from_str(s: &str) -> Result<Self, CaseFileError> {
        Self::from_reader(s.as_bytes())
    }

    /// Returns the parsed cases in input order.
    #[inline]
    pub fn cases(&self) -> &[ParsedCase<T>] {
        &self.cases
    }

    /// Returns the number of cases (well-formed and malformed).
    #[inline]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns `true` if the file carried no cases.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Returns the largest jar size in the file, for preallocation.
    pub fn max_jar_len(&self) -> usize {
        self.cases
            .iter()
            .filter_map(|c| c.result().ok().map(|case| case.jar().len()))
            .max()
            .unwrap_or(0)
    }
}

/// Parses one non-blank, non-comment case line.
fn parse_case_line<T>(line: &str) -> Result<TestCase<T>, CaseParseError>
where
    T: CoinValue,
{
    let mut tokens = line.split_whitespace();

    let label_token = tokens.next().ok_or(CaseParseError::MissingLabel)?;
    let label_value: u32 = label_token.parse().map_err(|_| {
        CaseParseError::Parse(ParseTokenError {
            token: label_token.to_owned(),
            type_name: "u32",
        })
    })?;
    if label_value == 0 {
        return Err(CaseParseError::ZeroLabel);
    }

    let mut coins: Vec<T> = Vec::new();
    for (position, token) in tokens.enumerate() {
        let value: T = token.parse().map_err(|_| {
            CaseParseError::Parse(ParseTokenError {
                token: token.to_owned(),
                type_name: std::any::type_name::<T>(),
            })
        })?;
        if value <= T::zero() {
            return Err(CaseParseError::NonPositiveCoin {
                position,
                token: token.to_owned(),
            });
        }
        coins.push(value);
    }

    if coins.is_empty() {
        return Err(CaseParseError::EmptyJar);
    }

    // Positivity was checked token by token, so this cannot fail.
    let jar = CoinJar::new(coins).map_err(|e| CaseParseError::NonPositiveCoin {
        position: e.position,
        token: e.value.to_string(),
    })?;

    Ok(TestCase::new(CaseLabel::new(label_value), jar))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_FILE: &str = r#"
        # label followed by coins
        1 2 2
        2 3 5 7

        3 1 1 1 1
    "#;

    #[test]
    fn test_loads_and_labels_correctly() {
        let file = CaseFile::<i64>::from_str(SMALL_FILE).expect("load failed");
        assert_eq!(file.len(), 3);

        let first = file.cases()[0].result().expect("case 1 well-formed");
        assert_eq!(first.label().get(), 1);
        assert_eq!(first.jar().coins(), &[2, 2]);

        let second = file.cases()[1].result().expect("case 2 well-formed");
        assert_eq!(second.jar().total(), 15);

        assert_eq!(file.max_jar_len(), 4);
    }

    #[test]
    fn test_malformed_lines_are_isolated() {
        let file = CaseFile::<i64>::from_str("1 2 2\n2 three 5\n3 4 4\n").unwrap();
        assert_eq!(file.len(), 3);
        assert!(file.cases()[0].result().is_ok());

        let err = file.cases()[1].result().unwrap_err();
        assert!(matches!(err, CaseParseError::Parse(_)));
        assert_eq!(file.cases()[1].label_or_ordinal().get(), 2);

        assert!(file.cases()[2].result().is_ok());
    }

    #[test]
    fn test_empty_jar_and_bad_labels() {
        let file = CaseFile::<i64>::from_str("7\n0 1 2\nx 1 2\n").unwrap();
        assert!(matches!(
            file.cases()[0].result().unwrap_err(),
            CaseParseError::EmptyJar
        ));
        assert!(matches!(
            file.cases()[1].result().unwrap_err(),
            CaseParseError::ZeroLabel
        ));
        assert!(matches!(
            file.cases()[2].result().unwrap_err(),
            CaseParseError::Parse(_)
        ));
        // Fallback labels come from the 1-based ordinal.
        assert_eq!(file.cases()[2].label_or_ordinal().get(), 3);
    }

    #[test]
    fn test_non_positive_coin_rejected() {
        let file = CaseFile::<i64>::from_str("1 5 -3 2\n").unwrap();
        match file.cases()[0].result().unwrap_err() {
            CaseParseError::NonPositiveCoin { position, token } => {
                assert_eq!(*position, 1);
                assert_eq!(token, "-3");
            }
            other => panic!("expected NonPositiveCoin, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CaseFile::<i64>::from_path("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, CaseFileError::Io(_)));
    }
}
