//! Integration tests for the Clasificar library.
//!
//! These tests verify end-to-end workflows: generate or load a dataset,
//! train a classifier, and evaluate it.

use clasificar::prelude::*;
use clasificar::synthetic::{clustered_images, evenly_spaced_centers};

#[test]
fn test_binned_workflow_synthetic() {
    // Well-separated clusters: [20, 40] versus [200, 240].
    let train = clustered_images(40, 16, &[30, 220], 10, 42);
    let test = clustered_images(10, 16, &[30, 220], 20, 43);

    let mut model = BinnedNB::new().with_num_classes(2).with_num_bins(32);
    model
        .fit(train.images(), train.labels())
        .expect("Failed to fit model");

    let eval = evaluate(&model, test.images(), test.labels(), 1000).expect("Failed to evaluate");
    assert_eq!(eval.predictions.len(), 20);
    assert_eq!(eval.log_posteriors.shape(), (20, 2));
    assert!(
        eval.error_rate < 0.2,
        "error rate should be low for separated clusters: {}",
        eval.error_rate
    );

    // Every log-posterior row must argmax to its prediction.
    for (i, &pred) in eval.predictions.iter().enumerate() {
        let row = eval.log_posteriors.row(i);
        let best = row
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(c, _)| c)
            .expect("two classes");
        assert_eq!(pred, best);
    }
}

#[test]
fn test_gaussian_workflow_synthetic() {
    let train = clustered_images(40, 16, &[30, 220], 10, 7);
    let test = clustered_images(10, 16, &[30, 220], 10, 8);

    let mut model = GaussianNB::new().with_num_classes(2);
    model
        .fit(train.images(), train.labels())
        .expect("Failed to fit model");

    let eval = evaluate(&model, test.images(), test.labels(), 20).expect("Failed to evaluate");
    assert!(
        eval.error_rate < 0.2,
        "error rate should be low for separated clusters: {}",
        eval.error_rate
    );
}

#[test]
fn test_ten_class_workflow() {
    // Ten clusters spread over the full intensity range, narrow spread
    // so neighboring classes don't overlap (centers are 28 apart).
    let centers = evenly_spaced_centers(10);
    let train = clustered_images(30, 12, &centers, 8, 11);
    let test = clustered_images(5, 12, &centers, 8, 12);

    let mut model = BinnedNB::new().with_num_classes(10).with_num_bins(64);
    model
        .fit(train.images(), train.labels())
        .expect("Failed to fit model");

    let eval = evaluate(&model, test.images(), test.labels(), 50).expect("Failed to evaluate");
    assert_eq!(eval.predictions.len(), 50);
    assert!(eval.predictions.iter().all(|&p| p < 10));
    assert!(
        eval.error_rate < 0.3,
        "error rate should be low for separated clusters: {}",
        eval.error_rate
    );
}

#[test]
fn test_mode_dispatch_through_trait_object() {
    // The CLI selects the model at runtime; both variants must work
    // behind the same trait object.
    let train = clustered_images(30, 8, &[40, 210], 12, 21);
    let test = clustered_images(8, 8, &[40, 210], 12, 22);

    for mode in [0u8, 1] {
        let mut model: Box<dyn Classifier> = match mode {
            0 => Box::new(BinnedNB::new().with_num_classes(2).with_num_bins(16)),
            _ => Box::new(GaussianNB::new().with_num_classes(2)),
        };
        model
            .fit(train.images(), train.labels())
            .expect("Failed to fit model");
        let eval =
            evaluate(model.as_ref(), test.images(), test.labels(), 16).expect("Failed to evaluate");
        assert_eq!(eval.predictions.len(), 16);
        assert!(eval.error_rate < 0.3, "mode {mode}: {}", eval.error_rate);
    }
}

#[test]
fn test_confusion_matrix_diagonal_dominance() {
    let train = clustered_images(30, 8, &[30, 220], 10, 31);
    let test = clustered_images(20, 8, &[30, 220], 10, 32);

    let mut model = BinnedNB::new().with_num_classes(2);
    model
        .fit(train.images(), train.labels())
        .expect("Failed to fit model");
    let predictions = model.predict(test.images()).expect("model is fitted");

    let cm = confusion_matrix(&predictions, test.labels(), 2);
    let diagonal = u64::from(cm.get(0, 0)) + u64::from(cm.get(1, 1));
    let total: u64 = cm.as_slice().iter().map(|&c| u64::from(c)).sum();
    assert_eq!(total, 40);
    assert!(
        diagonal * 2 > total,
        "most predictions should be correct: {diagonal}/{total}"
    );
}

#[test]
fn test_accuracy_and_error_rate_agree_with_evaluate() {
    let train = clustered_images(25, 8, &[50, 200], 15, 51);
    let test = clustered_images(10, 8, &[50, 200], 15, 52);

    let mut model = GaussianNB::new().with_num_classes(2);
    model
        .fit(train.images(), train.labels())
        .expect("Failed to fit model");

    let eval = evaluate(&model, test.images(), test.labels(), 20).expect("Failed to evaluate");
    let acc = accuracy(&eval.predictions, test.labels());
    let err = error_rate(&eval.predictions, test.labels());
    assert!((acc + err - 1.0).abs() < 1e-12);
    assert!((err - eval.error_rate).abs() < 1e-12);
}

#[test]
fn test_idx_roundtrip_workflow() {
    // Write a miniature MNIST layout to disk, load it back, and train.
    let dir = tempfile::tempdir().expect("create temp dir");
    let train = clustered_images(20, 4, &[40, 210], 10, 61);
    let test = clustered_images(5, 4, &[40, 210], 10, 62);

    write_idx_images(
        &dir.path().join("train-images-idx3-ubyte"),
        train.images(),
        2,
        2,
    );
    write_idx_labels(&dir.path().join("train-labels-idx1-ubyte"), train.labels());
    write_idx_images(&dir.path().join("t10k-images-idx3-ubyte"), test.images(), 2, 2);
    write_idx_labels(&dir.path().join("t10k-labels-idx1-ubyte"), test.labels());

    let mnist = Mnist::load_dir(dir.path()).expect("Failed to load dataset");
    assert_eq!(mnist.train.len(), 40);
    assert_eq!(mnist.test.len(), 10);
    assert_eq!(mnist.train.num_features(), 4);
    mnist.train.validate_labels(2).expect("labels in range");

    let mut model = BinnedNB::new().with_num_classes(2);
    model
        .fit(mnist.train.images(), mnist.train.labels())
        .expect("Failed to fit model");
    let eval = evaluate(&model, mnist.test.images(), mnist.test.labels(), 10)
        .expect("Failed to evaluate");
    assert!(eval.error_rate < 0.3);
}

fn write_idx_images(path: &std::path::Path, images: &Matrix<u8>, rows: u32, cols: u32) {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0x0000_0803u32.to_be_bytes());
    bytes.extend_from_slice(&u32::try_from(images.n_rows()).expect("small set").to_be_bytes());
    bytes.extend_from_slice(&rows.to_be_bytes());
    bytes.extend_from_slice(&cols.to_be_bytes());
    bytes.extend_from_slice(images.as_slice());
    std::fs::write(path, bytes).expect("write IDX image file");
}

fn write_idx_labels(path: &std::path::Path, labels: &[usize]) {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0x0000_0801u32.to_be_bytes());
    bytes.extend_from_slice(&u32::try_from(labels.len()).expect("small set").to_be_bytes());
    bytes.extend(labels.iter().map(|&l| u8::try_from(l).expect("digit label")));
    std::fs::write(path, bytes).expect("write IDX label file");
}
