//! Euclidean LSH Demo
//!
//! Similar points *should* collide. A query only inspects the buckets the
//! probe lands in, then the caller re-ranks those candidates by true distance.
//!
//! ```bash
//! RUST_LOG=l2lsh=debug cargo run --example lsh_demo
//! ```

use l2lsh::{Index, Settings};
use rand::prelude::*;

fn main() -> l2lsh::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Euclidean Locality Sensitive Hashing");
    println!("====================================\n");

    demo_basic()?;
    demo_tradeoffs()?;
    Ok(())
}

fn demo_basic() -> l2lsh::Result<()> {
    println!("1. Candidate retrieval");
    println!("   -------------------");

    let settings = Settings::new(2, 4, 2, 4.0)?;
    let mut index = Index::new(settings);

    let points = [(1, [0.0, 0.0]), (2, [0.001, 0.001]), (3, [100.0, 100.0])];
    for (id, p) in &points {
        index.insert(*id, p)?;
        println!("   insert id={id} at {p:?}");
    }

    let candidates: Vec<u64> = index.query(&[0.0, 0.0])?.copied().collect();
    println!("\n   query (0, 0) -> candidates {candidates:?}");
    println!("   Expected: [1, 2]. id=3 is 141 units away and lands elsewhere.\n");
    Ok(())
}

/// Show how `l` (tables) and `m` (functions per table) trade recall for
/// candidate-set size.
fn demo_tradeoffs() -> l2lsh::Result<()> {
    println!("2. Tuning l and m");
    println!("   --------------");
    println!("   P(candidate) = 1 - (1 - p^m)^l\n");

    let dim = 32;
    let mut rng = StdRng::seed_from_u64(7);
    let data: Vec<Vec<f64>> = (0..2000)
        .map(|_| (0..dim).map(|_| rng.random_range(-20.0..20.0)).collect())
        .collect();
    // Probe: a slightly perturbed copy of point 0.
    let probe: Vec<f64> = data[0].iter().map(|x| x + 0.1).collect();

    println!("   {:>3} {:>3} {:>12} {:>10}", "l", "m", "candidates", "found #0");
    for (l, m) in [(1, 1), (4, 2), (8, 4), (16, 4), (16, 8)] {
        let mut index = Index::new(Settings::new(dim, l, m, 4.0)?);
        for (id, p) in data.iter().enumerate() {
            index.insert(id as u64, p)?;
        }
        let candidates: Vec<u64> = index.query(&probe)?.copied().collect();
        println!(
            "   {:>3} {:>3} {:>12} {:>10}",
            l,
            m,
            candidates.len(),
            candidates.contains(&0)
        );
    }
    println!();
    Ok(())
}
