//! clf - Naive Bayes digit classification CLI
//!
//! Usage:
//!   clf --dir data                  # Train the binned model on MNIST files
//!   clf --mode 1                    # Use the Gaussian model instead
//!   clf --bins 16 --num-test 1000   # Coarser bins, smaller evaluation
//!   clf --confusion                 # Also print the confusion matrix
//!   clf --synthetic                 # Run on generated clusters, no files needed

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod error;
mod output;
mod run;

/// clf - Naive Bayes image classification tool
///
/// Trains a Naive Bayes classifier on an MNIST-style dataset, then
/// reports per-sample log-posteriors and the overall error rate.
#[derive(Parser)]
#[command(name = "clf")]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Directory holding the four uncompressed MNIST IDX files
    #[arg(long, default_value = "data", value_name = "DIR")]
    pub(crate) dir: PathBuf,

    /// Classifier mode: 0 = binned (discrete), 1 = gaussian
    #[arg(long, default_value_t = 0)]
    pub(crate) mode: u8,

    /// Number of intensity bins for the binned model
    #[arg(long, default_value_t = 32)]
    pub(crate) bins: usize,

    /// Number of classes
    #[arg(long, default_value_t = 10)]
    pub(crate) num_classes: usize,

    /// Evaluate at most this many test images
    #[arg(long, default_value_t = 10_000)]
    pub(crate) num_test: usize,

    /// Print log-posteriors for the first N test images
    #[arg(long, default_value_t = 10, value_name = "N")]
    pub(crate) print_num: usize,

    /// Print the confusion matrix after evaluation
    #[arg(long)]
    pub(crate) confusion: bool,

    /// Train on generated intensity clusters instead of reading --dir
    #[arg(long)]
    pub(crate) synthetic: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub(crate) quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
