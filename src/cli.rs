use std::{
    fs::File,
    io::{BufRead, BufReader},
    ops::{AddAssign, ControlFlow},
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{bail, ensure, Context};
use clap::{value_parser, Parser};
use itertools::Itertools;
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::AlignParams;
use crate::generate::{generate_pair, GenerateArgs};

#[derive(Parser)]
#[clap(author, version, about = "Levenshtein distance and edit statistics of text pairs")]
pub struct Cli {
    /// First text of a single pair.
    #[clap(requires = "b", conflicts_with_all = ["input", "length"])]
    pub a: Option<String>,

    /// Second text of a single pair.
    pub b: Option<String>,

    #[clap(flatten)]
    pub input: Input,

    /// Where to write one JSON object per pair.
    #[arg(short, long, value_parser = value_parser!(PathBuf))]
    pub output: Option<PathBuf>,

    /// JSON file with alignment parameters. Replaces the alignment flags.
    #[arg(long, value_parser = value_parser!(PathBuf))]
    pub params: Option<PathBuf>,

    #[clap(flatten)]
    pub align: AlignParams,

    /// Print less. Pass once for the summary line only, twice for nothing.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub silent: u8,
}

#[derive(Parser)]
#[clap(next_help_heading = "Input")]
pub struct Input {
    /// The .seq or .txt file with pairs on consecutive lines.
    #[clap(short, long, value_parser = value_parser!(PathBuf), conflicts_with = "length")]
    pub input: Option<PathBuf>,

    /// Options to generate input pairs.
    #[clap(flatten)]
    pub generate: GenerateArgs,
}

impl Cli {
    /// The alignment parameters, read from `--params` when given.
    pub fn params(&self) -> anyhow::Result<AlignParams> {
        let Some(path) = &self.params else {
            return Ok(self.align);
        };
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading parameters from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("parsing parameters in {}", path.display()))
    }

    /// Call the given function for each pair in the input.
    pub fn process_input_pairs(
        &self,
        mut run_pair: impl FnMut(&str, &str) -> anyhow::Result<ControlFlow<()>>,
    ) -> anyhow::Result<()> {
        if let (Some(a), Some(b)) = (&self.a, &self.b) {
            run_pair(a, b)?;
            return Ok(());
        }
        if let Some(input) = &self.input.input {
            for (a, b) in read_pairs(input)? {
                if run_pair(&a, &b)?.is_break() {
                    break;
                }
            }
            return Ok(());
        }

        let generate = &self.input.generate;
        let (Some(n), Some(e)) = (generate.length, generate.error_rate) else {
            bail!("Give two texts, an --input file, or --length and --error-rate to generate pairs.");
        };
        // Generate random input.
        let seed = generate.seed.unwrap_or_else(|| {
            let seed = ChaCha8Rng::from_entropy().gen_range(0..u64::MAX);
            info!("Seed: {seed}");
            seed
        });
        let rng = &mut ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..generate.cnt {
            let (a, b) = generate_pair(n, e, rng);
            if run_pair(&a, &b)?.is_break() {
                break;
            }
        }
        Ok(())
    }
}

/// Read all pairs of a `.txt` or `.seq` file.
pub fn read_pairs(path: &Path) -> anyhow::Result<Vec<(String, String)>> {
    let seq_format = match path.extension().and_then(|ext| ext.to_str()) {
        Some("seq") => true,
        Some("txt") => false,
        ext => bail!("Unknown file extension {ext:?}. Must be in {{seq,txt}}."),
    };
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let lines: Vec<String> = BufReader::new(f)
        .lines()
        .collect::<Result<_, _>>()
        .with_context(|| format!("reading {}", path.display()))?;
    parse_pairs(&lines, seq_format)
}

/// Group lines into pairs. In `.seq` format the first line of each pair starts
/// with `>` and the second with `<`.
pub fn parse_pairs(
    lines: &[impl AsRef<str>],
    seq_format: bool,
) -> anyhow::Result<Vec<(String, String)>> {
    ensure!(
        lines.len() % 2 == 0,
        "Input has an odd number of lines: {}",
        lines.len()
    );
    lines
        .iter()
        .map(AsRef::as_ref)
        .tuples()
        .enumerate()
        .map(|(idx, (a, b))| {
            if !seq_format {
                return Ok((a.to_string(), b.to_string()));
            }
            match (a.strip_prefix('>'), b.strip_prefix('<')) {
                (Some(a), Some(b)) => Ok((a.to_string(), b.to_string())),
                _ => bail!(
                    "Pair {idx} on line {} does not start with '>' and '<'",
                    2 * idx + 1
                ),
            }
        })
        .collect()
}

/// Totals over all pairs of a run.
#[derive(Default, Debug, Clone, Copy, PartialEq, derive_more::AddAssign)]
pub struct RunStats {
    pub pairs: usize,
    pub len_a: usize,
    pub len_b: usize,
    pub distance: usize,
    pub duration: Duration,
}

impl RunStats {
    pub fn single(len_a: usize, len_b: usize, distance: usize, duration: Duration) -> Self {
        Self {
            pairs: 1,
            len_a,
            len_b,
            distance,
            duration,
        }
    }

    /// Mean distance per pair.
    pub fn mean_distance(&self) -> f64 {
        if self.pairs == 0 {
            0.
        } else {
            self.distance as f64 / self.pairs as f64
        }
    }

    pub fn print(&self) {
        println!(
            "pairs {:>6} len_a {:>9} len_b {:>9} dist {:>9} mean {:>9.2} t {:>10.6}s",
            self.pairs,
            self.len_a,
            self.len_b,
            self.distance,
            self.mean_distance(),
            self.duration.as_secs_f64()
        );
    }
}

impl AddAssign<&RunStats> for RunStats {
    fn add_assign(&mut self, other: &RunStats) {
        *self += *other;
    }
}
