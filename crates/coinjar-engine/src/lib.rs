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

//! Coinjar-Engine: exhaustive search for the two-way partition problem
//!
//! A deterministic, stateful search engine that decides whether a coin jar
//! splits into two equal-sum piles and constructs a witness split when one
//! exists. The traversal is depth-first and left-biased over the binary
//! assignment tree: each coin, in jar order, is tried in the left pile
//! first, then the right pile; the first successful leaf wins.
//!
//! Core flow
//! - Provide a `coinjar_model::jar::CoinJar<T>`.
//! - Optionally choose a `monitor::SearchMonitor` (time limit, progress
//!   logging, composites).
//! - Run `solver::PartitionSolver::solve`.
//!
//! Design highlights
//! - Explicit stack: recursion depth never touches the call stack; pending
//!   decisions live in a frame-structured heap stack, so jar size bounds
//!   memory, not stack depth.
//! - No pruning: the engine is unconditionally exhaustive. The cheap
//!   even-total rejection belongs to callers that want it; keeping it out
//!   of the engine keeps the worst case honest for timing studies.
//! - Deterministic: identical jars yield identical splits.
//! - Reusable: stack and state keep their capacity across solves.
//!
//! Module map
//! - `solver`: the engine and session orchestration.
//! - `decision`: the pile decision unit of the search tree.
//! - `stack`: the frame-structured decision stack.
//! - `state`: incremental pile assignment with apply/undo.
//! - `monitor`: search monitors (no-op, time limit, composite, progress).
//! - `result`: search outcomes with termination reasons.
//! - `stats`: lightweight counters and timing.

pub mod decision;
pub mod monitor;
pub mod result;
pub mod solver;
pub mod stack;
pub mod state;
pub mod stats;
