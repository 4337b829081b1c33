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

//! Coinjar-Batch: the batch execution harness
//!
//! Drives the partition engine over a parsed case file, one case at a time,
//! measuring per-case wall-clock cost with the monotonic clock and
//! classifying every case as solved, unsplittable, or errored. One bad case
//! never aborts the batch: malformed lines and per-case deadline expiries
//! are recorded as errored and the run continues.
//!
//! Module map
//! - `runner`: the configurable `BatchRunner` driving the engine.
//! - `report`: per-case records, the label-keyed accumulator, and the
//!   result-file writer.
//! - `checker`: verification of result files against their input files.

pub mod checker;
pub mod report;
pub mod runner;
