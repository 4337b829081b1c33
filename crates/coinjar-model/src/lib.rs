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

//! # Coinjar Model
//!
//! **The Core Domain Model for the Coinjar Partition Harness.**
//!
//! This crate defines the fundamental data structures used to represent the
//! two-way set-partition problem ("coin jar problem"). It serves as the data
//! interchange layer between the problem definition (user input) and the
//! search engine (`coinjar_engine`).
//!
//! ## Architecture
//!
//! * **`value`**: The `CoinValue` trait alias bounding the integer types the
//!   engine accepts.
//! * **`label`**: The strongly-typed `CaseLabel` identifier for test cases.
//! * **`jar`**: The immutable `CoinJar` multiset and the labeled `TestCase`.
//! * **`partition`**: `Split` and `PartitionResult`, the two terminal answers
//!   of the search, plus the half-sum validity predicate.
//! * **`loading`**: The line-oriented test-case file loader with per-line
//!   error isolation.
//! * **`report`**: The result-file row codec shared by the batch writer and
//!   the checker.
//!
//! ## Design Philosophy
//!
//! 1. **Fail-Fast Construction**: jars reject non-positive coins eagerly so
//!    the engine never sees an invalid instance.
//! 2. **Isolated Parse Failures**: one malformed line in a case file never
//!    poisons the surrounding batch; each line carries its own result.
//! 3. **Format Fidelity**: the report codec reproduces the historical output
//!    format exactly (header, `0` empty-pile marker, microsecond timings).

pub mod jar;
pub mod label;
pub mod loading;
pub mod partition;
pub mod report;
pub mod value;
