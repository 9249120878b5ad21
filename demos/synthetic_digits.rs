//! Naive Bayes on synthetic intensity clusters
//!
//! Demonstrates both classifier variants without any dataset files:
//! - Generating clustered images with per-class intensity centers
//! - Training the binned (discrete) model and the Gaussian model
//! - Comparing error rates on a held-out split
//!
//! Run with: cargo run --example synthetic_digits

use clasificar::prelude::*;
use clasificar::synthetic::{clustered_images, evenly_spaced_centers};

const NUM_CLASSES: usize = 10;
const NUM_FEATURES: usize = 64;

fn main() {
    println!("Naive Bayes - Synthetic Digits Example");
    println!("======================================\n");

    let centers = evenly_spaced_centers(NUM_CLASSES);
    let train = clustered_images(200, NUM_FEATURES, &centers, 12, 42);
    let test = clustered_images(50, NUM_FEATURES, &centers, 12, 43);

    println!("  Classes: {NUM_CLASSES}");
    println!("  Features per image: {NUM_FEATURES}");
    println!("  Training images: {}", train.len());
    println!("  Test images: {}", test.len());

    println!("\nExample 1: Binned (Discrete) Model");
    println!("----------------------------------");
    binned_example(&train, &test);

    println!("\nExample 2: Gaussian Model");
    println!("-------------------------");
    gaussian_example(&train, &test);

    println!("\n✅ Synthetic digits example complete!");
}

fn binned_example(train: &LabeledImages, test: &LabeledImages) {
    let mut model = BinnedNB::new()
        .with_num_classes(NUM_CLASSES)
        .with_num_bins(32);
    model
        .fit(train.images(), train.labels())
        .expect("Training failed");

    let eval =
        evaluate(&model, test.images(), test.labels(), test.len()).expect("Evaluation failed");

    println!("  Bins per pixel: 32");
    print_sample(&eval, test.labels());
    println!("  Error rate: {:.4} %", eval.error_rate * 100.0);
}

fn gaussian_example(train: &LabeledImages, test: &LabeledImages) {
    let mut model = GaussianNB::new().with_num_classes(NUM_CLASSES);
    model
        .fit(train.images(), train.labels())
        .expect("Training failed");

    let eval =
        evaluate(&model, test.images(), test.labels(), test.len()).expect("Evaluation failed");

    print_sample(&eval, test.labels());
    println!("  Error rate: {:.4} %", eval.error_rate * 100.0);
}

fn print_sample(eval: &Evaluation, y_true: &[usize]) {
    // First test image only; the CLI prints a configurable number.
    let scores: Vec<String> = eval
        .log_posteriors
        .row(0)
        .iter()
        .map(|s| format!("{s:.1}"))
        .collect();
    println!("  log_posterior[0]: [{}]", scores.join(", "));
    println!(
        "  prediction: {}, true label: {}",
        eval.predictions[0], y_true[0]
    );
}
