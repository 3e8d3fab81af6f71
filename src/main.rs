use std::{
    fs::File,
    io::{BufWriter, Write},
    ops::ControlFlow,
};

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use instant::Instant;
use levenshtein_edits::cli::{Cli, RunStats};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Cli::parse();
    let params = args.params()?;

    let mut out = match &args.output {
        Some(path) => Some(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => None,
    };

    let mut total = RunStats::default();
    args.process_input_pairs(|a, b| {
        let start = Instant::now();
        let r = params.run(a, b)?;
        let stats = RunStats::single(
            a.chars().count(),
            b.chars().count(),
            r.distance,
            start.elapsed(),
        );
        total += stats;

        if args.silent == 0 {
            match (&r.cigar, &r.stats) {
                (Some(cigar), Some(edits)) => {
                    println!("{}\t{cigar}\t{}", r.distance, serde_json::to_string(edits)?)
                }
                _ => println!("{}", r.distance),
            }
        }
        if let Some(out) = &mut out {
            serde_json::to_writer(&mut *out, &r)?;
            writeln!(out)?;
        }
        Ok(ControlFlow::Continue(()))
    })?;

    if let Some(mut out) = out {
        out.flush().context("flushing output")?;
    }
    if args.silent == 1 || (args.silent == 0 && total.pairs > 1) {
        total.print();
    }
    Ok(())
}
