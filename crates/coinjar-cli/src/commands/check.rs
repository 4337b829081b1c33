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

//! The `check` subcommand: verify a result file against its input.

use crate::args::CheckArgs;
use anyhow::{bail, Context};
use coinjar_batch::checker;
use coinjar_model::{loading::CaseFile, report::ReportFile};
use std::process::ExitCode;

pub fn run(args: &CheckArgs) -> anyhow::Result<ExitCode> {
    if !args.input.is_file() {
        bail!("input file '{}' does not exist", args.input.display());
    }
    if !args.output.is_file() {
        bail!("result file '{}' does not exist", args.output.display());
    }

    let cases = CaseFile::<i64>::from_path(&args.input)
        .with_context(|| format!("failed to read '{}'", args.input.display()))?;
    let results = ReportFile::<i64>::from_path(&args.output)
        .with_context(|| format!("failed to read '{}'", args.output.display()))?;

    let verdict = checker::verify(&cases, &results);
    println!("{verdict}");

    if verdict.passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
