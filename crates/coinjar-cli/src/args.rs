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

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Exhaustive two-way equal-sum partitioning of coin jars.
#[derive(Debug, Parser)]
#[command(name = "coinjar", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v: info, -vv: debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve every test case in a batch file and write the result file.
    Solve(SolveArgs),
    /// Verify a result file against its input file.
    Check(CheckArgs),
    /// Generate a random batch of test cases.
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct SolveArgs {
    /// The test-case input file.
    #[arg(short = 'f', long = "input")]
    pub input: PathBuf,

    /// The result file to write.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Per-case time limit in seconds; a case exceeding it is recorded as
    /// errored and the batch continues.
    #[arg(long = "time-limit")]
    pub time_limit_secs: Option<f64>,

    /// Record odd-total jars as unsplittable without searching.
    #[arg(long = "even-sum-precheck")]
    pub even_sum_precheck: bool,

    /// Emit periodic progress events during long searches.
    #[arg(long = "progress")]
    pub progress: bool,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// The test-case input file.
    #[arg(short = 'f', long = "input")]
    pub input: PathBuf,

    /// The result file to verify.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// The test-case file to write.
    #[arg(short = 'f', long = "output")]
    pub output: PathBuf,

    /// How many cases to emit per jar size.
    #[arg(short = 's', long = "size")]
    pub cases_per_size: u32,

    /// The largest jar size; cases are generated for sizes 3 through this
    /// value, so it must be at least 3.
    #[arg(short = 'n', long = "max-coins")]
    pub max_coins: usize,
}
