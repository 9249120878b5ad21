//! Train/evaluate pipeline behind the CLI.

use std::time::Instant;

use clasificar::classification::{BinnedNB, GaussianNB};
use clasificar::dataset::Mnist;
use clasificar::metrics::{confusion_matrix, evaluate, Evaluation};
use clasificar::synthetic::{clustered_images, evenly_spaced_centers};
use clasificar::{Classifier, Matrix};

use crate::error::{CliError, Result};
use crate::{output, Cli};

const SYNTHETIC_FEATURES: usize = 64;
const SYNTHETIC_TRAIN_PER_CLASS: usize = 200;
const SYNTHETIC_TEST_PER_CLASS: usize = 50;
const SYNTHETIC_SPREAD: u8 = 12;
const SYNTHETIC_SEED: u64 = 42;

pub(crate) fn run(cli: &Cli) -> Result<()> {
    let (mut model, name): (Box<dyn Classifier>, &str) = match cli.mode {
        0 => (
            Box::new(
                BinnedNB::new()
                    .with_num_classes(cli.num_classes)
                    .with_num_bins(cli.bins),
            ),
            "Discrete",
        ),
        1 => (
            Box::new(GaussianNB::new().with_num_classes(cli.num_classes)),
            "Gaussian",
        ),
        other => {
            return Err(CliError::Configuration(format!(
                "unknown mode {other} (expected 0 = binned, 1 = gaussian)"
            )))
        }
    };

    output::banner(&format!("{name} Naive Bayesian Classifier"));

    let data = if cli.synthetic {
        synthetic_split(cli.num_classes)
    } else {
        Mnist::load_dir(&cli.dir)?
    };
    data.train
        .validate_labels(cli.num_classes)
        .map_err(|e| CliError::Dataset(e.to_string()))?;
    data.test
        .validate_labels(cli.num_classes)
        .map_err(|e| CliError::Dataset(e.to_string()))?;

    if !cli.quiet {
        output::kv("train images", data.train.len());
        output::kv("test images", data.test.len());
        output::kv("features per image", data.train.num_features());
    }

    let start = Instant::now();
    model.fit(data.train.images(), data.train.labels())?;
    if !cli.quiet {
        output::info(&format!(
            "trained on {} images in {:.2?}",
            data.train.len(),
            start.elapsed()
        ));
    }

    let start = Instant::now();
    let eval = evaluate(
        model.as_ref(),
        data.test.images(),
        data.test.labels(),
        cli.num_test,
    )?;
    if !cli.quiet {
        output::info(&format!(
            "evaluated {} images in {:.2?}",
            eval.predictions.len(),
            start.elapsed()
        ));
    }

    report(cli, &eval, data.test.labels());
    Ok(())
}

/// Build a deterministic clustered dataset with the MNIST split shape.
fn synthetic_split(num_classes: usize) -> Mnist {
    let centers = evenly_spaced_centers(num_classes);
    Mnist {
        train: clustered_images(
            SYNTHETIC_TRAIN_PER_CLASS,
            SYNTHETIC_FEATURES,
            &centers,
            SYNTHETIC_SPREAD,
            SYNTHETIC_SEED,
        ),
        test: clustered_images(
            SYNTHETIC_TEST_PER_CLASS,
            SYNTHETIC_FEATURES,
            &centers,
            SYNTHETIC_SPREAD,
            SYNTHETIC_SEED + 1,
        ),
    }
}

fn report(cli: &Cli, eval: &Evaluation, y_true: &[usize]) {
    let shown = cli.print_num.min(eval.predictions.len());
    if shown > 0 {
        output::section(&format!("{shown} Prediction Results"));
        for i in 0..shown {
            let scores: Vec<String> = eval
                .log_posteriors
                .row(i)
                .iter()
                .map(|score| format!("{score:.2}"))
                .collect();
            println!("log_posterior: [{}]", scores.join(", "));
            println!(
                "prediction: {}   true label: {}\n",
                eval.predictions[i], y_true[i]
            );
        }
    }

    if cli.confusion {
        output::section("Confusion Matrix");
        let cm = confusion_matrix(
            &eval.predictions,
            &y_true[..eval.predictions.len()],
            cli.num_classes,
        );
        print_confusion(&cm);
    }

    println!("\nError Rate: {:.4} %", eval.error_rate * 100.0);
}

fn print_confusion(cm: &Matrix<u32>) {
    print!("true\\pred");
    for c in 0..cm.n_cols() {
        print!("{c:>6}");
    }
    println!();
    for t in 0..cm.n_rows() {
        print!("{t:>9}");
        for c in 0..cm.n_cols() {
            print!("{:>6}", cm.get(t, c));
        }
        println!();
    }
}
