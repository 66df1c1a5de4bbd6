use std::{hint::black_box, time::Instant};

use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use huffman_compressor::{decoder::decode, HuffmanCompressor};

#[derive(Parser, Debug)]
#[command(about = "Time the Huffman stages on random skewed input")]
struct Args {
    /// Number of input symbols
    #[arg(short, long, default_value_t = 1_000_000)]
    symbols: usize,
    /// Size of the alphabet the symbols are drawn from
    #[arg(short, long, default_value_t = 64)]
    alphabet: u8,
    /// Seed of the generator
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

const N_RUNS: usize = 3;

/// Draws symbols so that lower values are much more frequent than higher ones.
fn gen_input(n_symbols: usize, alphabet: u8, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n_symbols)
        .map(|_| {
            let a = rng.gen_range(0..alphabet.max(1));
            let b = rng.gen_range(0..alphabet.max(1));
            a.min(b)
        })
        .collect()
}

fn main() {
    let args = Args::parse();

    let input = gen_input(args.symbols, args.alphabet, args.seed);

    let mut compressor = None;
    let total = Instant::now();
    for _ in 0..N_RUNS {
        compressor = HuffmanCompressor::new(input.as_slice()).ok();
    }
    let avg_build = (total.elapsed().as_nanos() as f64) / N_RUNS as f64;
    println!("time per tabulate+build+extract: {}ns", avg_build);

    let Some(mut compressor) = compressor else {
        eprintln!("Nothing to compress");
        return;
    };

    let mut encoded = None;
    let total = Instant::now();
    for _ in 0..N_RUNS {
        encoded = compressor.encode(black_box(&input)).ok();
    }
    let avg_encode = (total.elapsed().as_nanos() as f64) / (args.symbols * N_RUNS).max(1) as f64;
    println!("time per encoded symbol: {}ns", avg_encode);

    let Some(encoded) = encoded else {
        eprintln!("Encoding failed");
        return;
    };

    let total = Instant::now();
    for _ in 0..N_RUNS {
        let _ = black_box(decode(compressor.codebook(), encoded.as_bytes(), encoded.bit_len()));
    }
    let avg_decode = (total.elapsed().as_nanos() as f64) / (args.symbols * N_RUNS).max(1) as f64;
    println!("time per decoded symbol: {}ns", avg_decode);

    println!("{}", compressor.stats.render());
    println!("{} bits for {} symbols ({:.3} bits/symbol)",
        encoded.bit_len(), args.symbols, encoded.bit_len() as f64 / args.symbols.max(1) as f64);
}
