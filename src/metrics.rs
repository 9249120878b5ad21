//! Evaluation metrics for classifier performance.
//!
//! Provides accuracy, error rate, and confusion matrix computation,
//! plus an [`evaluate`] driver that scores a fitted classifier over a
//! test set and collects the per-sample log-posteriors.

use crate::classification::argmax;
use crate::error::{ClasificarError, Result};
use crate::primitives::Matrix;
use crate::traits::Classifier;

/// Compute classification accuracy.
///
/// accuracy = `correct_predictions` / `total_predictions`
///
/// # Panics
///
/// Panics if vectors have different lengths or are empty.
///
/// # Examples
///
/// ```
/// use clasificar::metrics::accuracy;
///
/// let y_true = vec![0, 1, 2, 0];
/// let y_pred = vec![0, 1, 1, 0];
/// assert!((accuracy(&y_pred, &y_true) - 0.75).abs() < 1e-12);
/// ```
#[must_use]
pub fn accuracy(y_pred: &[usize], y_true: &[usize]) -> f64 {
    assert_eq!(y_pred.len(), y_true.len(), "Vectors must have same length");
    assert!(!y_true.is_empty(), "Vectors cannot be empty");

    let correct = y_pred
        .iter()
        .zip(y_true.iter())
        .filter(|(p, t)| p == t)
        .count();

    correct as f64 / y_true.len() as f64
}

/// Compute classification error rate.
///
/// `error_rate` = mismatches / total = 1 - accuracy
///
/// # Panics
///
/// Panics if vectors have different lengths or are empty.
///
/// # Examples
///
/// ```
/// use clasificar::metrics::error_rate;
///
/// let y_true = vec![0, 1, 2, 0];
/// let y_pred = vec![0, 1, 1, 0];
/// assert!((error_rate(&y_pred, &y_true) - 0.25).abs() < 1e-12);
/// ```
#[must_use]
pub fn error_rate(y_pred: &[usize], y_true: &[usize]) -> f64 {
    assert_eq!(y_pred.len(), y_true.len(), "Vectors must have same length");
    assert!(!y_true.is_empty(), "Vectors cannot be empty");

    let wrong = y_pred
        .iter()
        .zip(y_true.iter())
        .filter(|(p, t)| p != t)
        .count();

    wrong as f64 / y_true.len() as f64
}

/// Compute the confusion matrix.
///
/// Entry (i, j) counts samples whose true class is `i` and predicted
/// class is `j`, so correct predictions sit on the diagonal.
///
/// # Panics
///
/// Panics if vectors have different lengths or a label is >= `num_classes`.
///
/// # Examples
///
/// ```
/// use clasificar::metrics::confusion_matrix;
///
/// let y_true = vec![0, 0, 1, 1];
/// let y_pred = vec![0, 1, 1, 1];
/// let cm = confusion_matrix(&y_pred, &y_true, 2);
/// assert_eq!(cm.get(0, 0), 1);
/// assert_eq!(cm.get(0, 1), 1);
/// assert_eq!(cm.get(1, 1), 2);
/// ```
#[must_use]
pub fn confusion_matrix(y_pred: &[usize], y_true: &[usize], num_classes: usize) -> Matrix<u32> {
    assert_eq!(y_pred.len(), y_true.len(), "Vectors must have same length");

    let mut matrix = Matrix::<u32>::zeros(num_classes, num_classes);
    for (&pred, &truth) in y_pred.iter().zip(y_true.iter()) {
        assert!(
            pred < num_classes && truth < num_classes,
            "label out of range for {num_classes} classes"
        );
        matrix.set(truth, pred, matrix.get(truth, pred) + 1);
    }
    matrix
}

/// Result of evaluating a fitted classifier over a test set.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Per-sample log-posterior scores: (samples, classes)
    pub log_posteriors: Matrix<f64>,
    /// Predicted class per sample
    pub predictions: Vec<usize>,
    /// Fraction of samples misclassified, in [0, 1]
    pub error_rate: f64,
}

/// Scores up to `limit` test samples with a fitted classifier.
///
/// Keeps every per-sample log-posterior vector alongside the argmax
/// prediction, then computes the error rate against the true labels.
///
/// # Errors
///
/// Returns an error if image and label counts differ, no samples are
/// left to evaluate, or the model rejects a sample (not fitted, wrong
/// feature width).
///
/// # Examples
///
/// ```
/// use clasificar::prelude::*;
///
/// let x = Matrix::from_vec(4, 1, vec![0u8, 10, 200, 210]).unwrap();
/// let y = vec![0, 0, 1, 1];
/// let mut model = BinnedNB::new().with_num_classes(2).with_num_bins(4);
/// model.fit(&x, &y).unwrap();
///
/// let eval = evaluate(&model, &x, &y, 10).unwrap();
/// assert_eq!(eval.predictions.len(), 4);
/// assert!((eval.error_rate - 0.0).abs() < 1e-12);
/// ```
pub fn evaluate<M>(model: &M, x: &Matrix<u8>, y: &[usize], limit: usize) -> Result<Evaluation>
where
    M: Classifier + ?Sized,
{
    if y.len() != x.n_rows() {
        return Err(ClasificarError::DimensionMismatch {
            expected: format!("{} labels", x.n_rows()),
            actual: format!("{}", y.len()),
        });
    }
    let count = limit.min(x.n_rows());
    if count == 0 {
        return Err(ClasificarError::invalid_input("no test samples to evaluate"));
    }

    let num_classes = model.num_classes();
    let mut log_posteriors = Matrix::<f64>::zeros(count, num_classes);
    let mut predictions = Vec::with_capacity(count);
    for i in 0..count {
        let scores = model.log_posterior(x.row(i))?;
        for (c, &score) in scores.iter().enumerate() {
            log_posteriors.set(i, c, score);
        }
        predictions.push(argmax(&scores));
    }

    let error_rate = error_rate(&predictions, &y[..count]);
    Ok(Evaluation {
        log_posteriors,
        predictions,
        error_rate,
    })
}
