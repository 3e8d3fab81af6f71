use clap::Parser;
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::ALPHABET;

#[derive(Parser, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[clap(next_help_heading = "Generated input")]
pub struct GenerateArgs {
    /// The number of sequence pairs to generate
    #[clap(short = 'x', long, default_value_t = 1)]
    pub cnt: usize,

    /// Length of generated sequences
    #[clap(short = 'n', long, requires = "error_rate")]
    pub length: Option<usize>,

    /// Fraction of the length that is mutated in the second sequence
    #[clap(short, long)]
    pub error_rate: Option<f32>,

    /// Seed to initialize RNG for reproducability
    #[clap(long)]
    pub seed: Option<u64>,
}

enum Mutation {
    // Replace char at pos.
    Substitution(usize, u8),
    // Insert char before pos.
    Insertion(usize, u8),
    // Delete char at pos.
    Deletion(usize),
}

fn rand_char(rng: &mut impl Rng) -> u8 {
    ALPHABET[rng.gen_range(0..ALPHABET.len())]
}

fn random_mutation(len_b: usize, rng: &mut impl Rng) -> Mutation {
    // Substitution / insertion / deletion all with equal probability.
    // For length 0 sequences, only generate insertions.
    match if len_b == 0 {
        1
    } else {
        rng.gen_range(0..3usize)
    } {
        0 => Mutation::Substitution(rng.gen_range(0..len_b), rand_char(rng)),
        1 => Mutation::Insertion(rng.gen_range(0..len_b + 1), rand_char(rng)),
        _ => Mutation::Deletion(rng.gen_range(0..len_b)),
    }
}

/// The number of mutations applied to a sequence of length `n`.
pub fn num_mutations(n: usize, e: f32) -> usize {
    (e * n as f32).ceil() as usize
}

/// A random sequence of length `n` over `ALPHABET`, and a copy of it with
/// `ceil(e * n)` random substitutions, insertions and deletions applied.
pub fn generate_pair(n: usize, e: f32, rng: &mut impl Rng) -> (String, String) {
    let a = (0..n).map(|_| rand_char(rng)).collect_vec();
    let mut b = a.clone();
    for _ in 0..num_mutations(n, e) {
        match random_mutation(b.len(), rng) {
            Mutation::Substitution(i, c) => b[i] = c,
            Mutation::Insertion(i, c) => b.insert(i, c),
            Mutation::Deletion(i) => {
                b.remove(i);
            }
        }
    }
    // Both only contain `ALPHABET` bytes.
    (
        a.into_iter().map(char::from).collect(),
        b.into_iter().map(char::from).collect(),
    )
}

pub fn setup_with_seed(n: usize, e: f32, seed: u64) -> (String, String) {
    generate_pair(n, e, &mut ChaCha8Rng::seed_from_u64(seed))
}

// For quick testing
pub fn setup(n: usize, e: f32) -> (String, String) {
    setup_with_seed(n, e, 31415)
}
