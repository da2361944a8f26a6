//! Performance benchmark for hdc-vsa generation.
//!
//! Generates a large item memory from one seeded stream, then the same number
//! of standalone vectors, each from its own seed.
//!
//! Run with:
//!   cargo run --example benchmark --release -p hdc-vsa

use hdc_vsa::{generate_item_memory, generate_vector, DEFAULT_DIMENSIONS, DEFAULT_SEED};
use std::time::Instant;

const NUM_ITEMS: usize = 1_000;

fn main() {
    println!("=== hdc-vsa Generation Benchmark ===");
    println!();

    // -----------------------------------------------------------------------
    // 1. Single-stream item memory
    // -----------------------------------------------------------------------
    println!(
        "Generating item memory: {} x {} (seed={})...",
        NUM_ITEMS, DEFAULT_DIMENSIONS, DEFAULT_SEED
    );
    let start = Instant::now();
    let im = match generate_item_memory(DEFAULT_SEED, DEFAULT_DIMENSIONS as i64, NUM_ITEMS as i64) {
        Ok(im) => im,
        Err(e) => {
            eprintln!("  generation failed: {}", e);
            return;
        }
    };
    let elapsed = start.elapsed();
    let ones = im.iter().filter(|&&x| x == 1).count();
    println!(
        "  {:.3}s ({:.0} rows/s), density {:.4}",
        elapsed.as_secs_f64(),
        NUM_ITEMS as f64 / elapsed.as_secs_f64(),
        ones as f64 / im.len() as f64
    );
    println!();

    // -----------------------------------------------------------------------
    // 2. Standalone vectors, one fresh stream each
    // -----------------------------------------------------------------------
    println!("Generating {} standalone vectors...", NUM_ITEMS);
    let start = Instant::now();
    let mut total = 0usize;
    for seed in 0..NUM_ITEMS as u64 {
        match generate_vector(seed, DEFAULT_DIMENSIONS as i64) {
            Ok(hv) => total += hv.len(),
            Err(e) => {
                eprintln!("  generation failed: {}", e);
                return;
            }
        }
    }
    let elapsed = start.elapsed();
    println!(
        "  {:.3}s ({:.0} vectors/s, {} components)",
        elapsed.as_secs_f64(),
        NUM_ITEMS as f64 / elapsed.as_secs_f64(),
        total
    );
    println!();

    let first = generate_vector(DEFAULT_SEED, DEFAULT_DIMENSIONS as i64).ok();
    println!(
        "  Row 0 equals generate_vector(seed): {}",
        first.is_some_and(|hv| im.row(0) == hv)
    );
}
