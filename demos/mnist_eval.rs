//! Train and evaluate on the real MNIST dataset
//!
//! Expects the four uncompressed IDX files in a directory (default `data/`):
//! train-images-idx3-ubyte, train-labels-idx1-ubyte,
//! t10k-images-idx3-ubyte, t10k-labels-idx1-ubyte.
//!
//! Run with:
//! ```bash
//! cargo run --release --example mnist_eval -- data
//! ```

use clasificar::prelude::*;
use std::path::Path;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== MNIST Naive Bayes Evaluation ===\n");

    let args: Vec<String> = std::env::args().collect();
    let dir = args.get(1).map_or("data", String::as_str);

    let data = match Mnist::load_dir(Path::new(dir)) {
        Ok(data) => data,
        Err(e) => {
            println!("Could not load MNIST from '{dir}': {e}");
            println!("Download the four IDX files and pass their directory as an argument.");
            return Ok(());
        }
    };

    println!("  Training images: {}", data.train.len());
    println!("  Test images: {}", data.test.len());
    println!("  Features per image: {}", data.train.num_features());

    println!("\nBinned model (32 bins)");
    println!("----------------------");
    let mut binned = BinnedNB::new();
    binned.fit(data.train.images(), data.train.labels())?;
    let eval = evaluate(&binned, data.test.images(), data.test.labels(), data.test.len())?;
    println!("  Error rate: {:.4} %", eval.error_rate * 100.0);

    println!("\nGaussian model");
    println!("--------------");
    let mut gaussian = GaussianNB::new();
    gaussian.fit(data.train.images(), data.train.labels())?;
    let eval = evaluate(
        &gaussian,
        data.test.images(),
        data.test.labels(),
        data.test.len(),
    )?;
    println!("  Error rate: {:.4} %", eval.error_rate * 100.0);

    println!("\n=== Example Complete ===");
    Ok(())
}
