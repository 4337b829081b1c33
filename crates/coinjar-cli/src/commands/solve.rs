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

//! The `solve` subcommand: run a batch and write the result file.
//!
//! The result file is only created after the whole batch has finished, so
//! a missing input or an interrupted run leaves no partial output behind.

use crate::args::SolveArgs;
use anyhow::{bail, Context};
use coinjar_batch::runner::BatchRunner;
use coinjar_model::loading::CaseFile;
use std::process::ExitCode;
use std::time::Duration;

pub fn run(args: &SolveArgs) -> anyhow::Result<ExitCode> {
    if !args.input.is_file() {
        bail!("input file '{}' does not exist", args.input.display());
    }

    let cases = CaseFile::<i64>::from_path(&args.input)
        .with_context(|| format!("failed to read '{}'", args.input.display()))?;

    let mut runner = BatchRunner::new()
        .with_even_sum_precheck(args.even_sum_precheck)
        .with_progress_log(args.progress);
    if let Some(secs) = args.time_limit_secs {
        if !secs.is_finite() || secs <= 0.0 {
            bail!("--time-limit must be a positive number of seconds");
        }
        runner = runner.with_time_limit(Duration::from_secs_f64(secs));
    }

    let report = runner.run(&cases);
    report
        .write_to_path(&args.output)
        .with_context(|| format!("failed to write '{}'", args.output.display()))?;

    println!(
        "{} case(s): {} solved, {} unsplittable, {} errored -> {}",
        report.len(),
        report.solved().count(),
        report.unsplittable().count(),
        report.errored().count(),
        args.output.display()
    );

    Ok(ExitCode::SUCCESS)
}
