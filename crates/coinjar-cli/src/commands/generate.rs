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

//! The `generate` subcommand: emit a random batch of test cases.
//!
//! For each jar size from 3 through `--max-coins`, emits `--size` cases
//! with coin values uniform in [2, 25] and sequential 1-based labels, in
//! the input-file format the `solve` subcommand reads.

use crate::args::GenerateArgs;
use anyhow::{bail, Context};
use rand::Rng;
use std::io::{BufWriter, Write};
use std::process::ExitCode;

/// Inclusive range of generated coin values.
const COIN_RANGE: std::ops::RangeInclusive<i64> = 2..=25;
/// The smallest jar size worth generating.
const MIN_JAR_SIZE: usize = 3;

pub fn run(args: &GenerateArgs) -> anyhow::Result<ExitCode> {
    if args.max_coins < MIN_JAR_SIZE {
        bail!("--max-coins must be at least {MIN_JAR_SIZE}, got {}", args.max_coins);
    }
    if args.cases_per_size == 0 {
        bail!("--size must be at least 1");
    }

    let file = std::fs::File::create(&args.output)
        .with_context(|| format!("failed to create '{}'", args.output.display()))?;
    let mut writer = BufWriter::new(file);

    let mut rng = rand::rng();
    let count = write_cases(&mut writer, &mut rng, args.cases_per_size, args.max_coins)
        .with_context(|| format!("failed to write '{}'", args.output.display()))?;
    writer.flush()?;

    println!("{count} case(s) -> {}", args.output.display());
    Ok(ExitCode::SUCCESS)
}

fn write_cases<W, R>(
    w: &mut W,
    rng: &mut R,
    cases_per_size: u32,
    max_coins: usize,
) -> std::io::Result<u64>
where
    W: Write,
    R: Rng,
{
    let mut label: u64 = 0;
    for num_coins in MIN_JAR_SIZE..=max_coins {
        for _ in 0..cases_per_size {
            label += 1;
            write!(w, "{label}")?;
            for _ in 0..num_coins {
                let coin = rng.random_range(COIN_RANGE);
                write!(w, " {coin}")?;
            }
            writeln!(w)?;
        }
    }
    Ok(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinjar_model::loading::CaseFile;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_cases_parse_back_densely_labeled() {
        let mut buf = Vec::new();
        let mut rng = StdRng::seed_from_u64(7);
        let count = write_cases(&mut buf, &mut rng, 2, 5).unwrap();

        // Sizes 3, 4, 5 with two cases each.
        assert_eq!(count, 6);

        let text = String::from_utf8(buf).unwrap();
        let file = CaseFile::<i64>::from_str(&text).expect("generated file parses");
        assert_eq!(file.len(), 6);

        for (index, parsed) in file.cases().iter().enumerate() {
            let case = parsed.result().expect("generated case well-formed");
            assert_eq!(case.label().get() as usize, index + 1);
            assert!(case.jar().len() >= MIN_JAR_SIZE && case.jar().len() <= 5);
            assert!(case
                .jar()
                .coins()
                .iter()
                .all(|c| COIN_RANGE.contains(c)));
        }
    }
}
