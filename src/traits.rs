//! Core trait for Naive Bayes classifiers.
//!
//! The trait defines the API contract shared by the binned and Gaussian
//! models: fit on raw pixel data, score samples by log-posterior, and
//! predict by picking the highest-scoring class.

use crate::classification::argmax;
use crate::error::Result;
use crate::primitives::Matrix;

/// Trait for classifiers that score classes by log-posterior.
///
/// Classifiers implement fit/predict following sklearn conventions, with
/// `log_posterior` exposing the per-class scores that `predict` argmaxes
/// over. Ties resolve to the lowest class index.
///
/// # Examples
///
/// ```
/// use clasificar::prelude::*;
///
/// // Two well-separated intensity clusters.
/// let x_train = Matrix::from_vec(4, 1, vec![0u8, 10, 200, 210]).unwrap();
/// let y_train = vec![0, 0, 1, 1];
///
/// let mut model = BinnedNB::new().with_num_classes(2).with_num_bins(4);
/// model.fit(&x_train, &y_train).unwrap();
///
/// let x_test = Matrix::from_vec(2, 1, vec![5u8, 250]).unwrap();
/// assert_eq!(model.predict(&x_test).unwrap(), vec![0, 1]);
/// ```
pub trait Classifier {
    /// Fits the model to training images and labels.
    ///
    /// Each row of `x` is one image; `y[i]` is the class of row `i`.
    ///
    /// # Errors
    ///
    /// Returns an error if the training set is empty, image and label
    /// counts differ, a label is out of range, or a hyperparameter is
    /// invalid.
    fn fit(&mut self, x: &Matrix<u8>, y: &[usize]) -> Result<()>;

    /// Computes the log-posterior score of each class for one sample.
    ///
    /// Returns one score per class; scores are unnormalized and may be
    /// `-inf` when a class assigns the sample zero probability.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or the sample width
    /// doesn't match the training data.
    fn log_posterior(&self, sample: &[u8]) -> Result<Vec<f64>>;

    /// Returns the number of classes this model scores.
    fn num_classes(&self) -> usize;

    /// Predicts the class of each row of `x` by log-posterior argmax.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or the feature width
    /// doesn't match the training data.
    fn predict(&self, x: &Matrix<u8>) -> Result<Vec<usize>> {
        let mut predictions = Vec::with_capacity(x.n_rows());
        for i in 0..x.n_rows() {
            let scores = self.log_posterior(x.row(i))?;
            predictions.push(argmax(&scores));
        }
        Ok(predictions)
    }
}
