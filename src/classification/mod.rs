//! Naive Bayes classifiers over 8-bit image data.
//!
//! This module implements two Naive Bayes variants:
//! - Binned (discrete) Naive Bayes: histogram of pixel intensities per
//!   class and feature, with an epsilon floor for empty bins
//! - Gaussian Naive Bayes: per-class, per-feature mean and variance,
//!   with a density floor for degenerate variance
//!
//! Both score a sample as `ln P(class) + sum ln P(pixel | class)` and
//! predict the class with the highest score.
//!
//! # Example
//!
//! ```
//! use clasificar::classification::BinnedNB;
//! use clasificar::prelude::*;
//!
//! // Dark images are class 0, bright images class 1.
//! let x = Matrix::from_vec(4, 2, vec![
//!     10u8, 20,
//!     30, 5,
//!     220, 240,
//!     250, 200,
//! ]).expect("Matrix dimensions match data length");
//! let y = vec![0, 0, 1, 1];
//!
//! let mut model = BinnedNB::new()
//!     .with_num_classes(2)
//!     .with_num_bins(8);
//! model.fit(&x, &y).expect("Training data is valid with 4 samples");
//!
//! let predictions = model.predict(&x).expect("Model is fitted");
//! assert_eq!(predictions, vec![0, 0, 1, 1]);
//! ```

use std::f64::consts::PI;

use crate::error::{ClasificarError, Result};
use crate::primitives::{Matrix, Tensor3};
use crate::traits::Classifier;

/// Probability mass assigned to a bin no training pixel landed in.
const SMOOTHING_FLOOR: f64 = 1e-4;

/// Variance below this is treated as degenerate.
const VARIANCE_FLOOR: f64 = 1e-6;

/// Density returned for a feature with degenerate variance.
const DENSITY_FLOOR: f64 = 1e-4;

/// Index of the largest score; the lowest index wins ties.
pub(crate) fn argmax(scores: &[f64]) -> usize {
    let mut best = 0;
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = i;
        }
    }
    best
}

/// Validates a training set against the configured class count.
fn check_training_data(x: &Matrix<u8>, y: &[usize], num_classes: usize) -> Result<()> {
    let n_samples = x.n_rows();
    if n_samples == 0 {
        return Err(ClasificarError::invalid_input("training set is empty"));
    }
    if y.len() != n_samples {
        return Err(ClasificarError::DimensionMismatch {
            expected: format!("{n_samples} labels"),
            actual: format!("{}", y.len()),
        });
    }
    if let Some(&label) = y.iter().find(|&&label| label >= num_classes) {
        return Err(ClasificarError::InvalidInput {
            message: format!("label {label} out of range for {num_classes} classes"),
        });
    }
    Ok(())
}

/// Binned (discrete) Naive Bayes classifier.
///
/// Quantizes each pixel into one of `num_bins` equal-width intensity
/// bins and models `P(bin | class, feature)` as the observed bin
/// frequency. Empty bins receive a small epsilon mass before the
/// per-feature distribution is normalized, so unseen intensities never
/// zero out a whole class.
///
/// # Example
///
/// ```
/// use clasificar::classification::BinnedNB;
/// use clasificar::primitives::Matrix;
/// use clasificar::traits::Classifier;
///
/// let x = Matrix::from_vec(4, 1, vec![0u8, 10, 200, 210]).expect("4x1 matrix");
/// let y = vec![0, 0, 1, 1];
///
/// let mut model = BinnedNB::new().with_num_classes(2).with_num_bins(4);
/// model.fit(&x, &y).expect("Valid training data");
/// let predictions = model.predict(&x).expect("Model is fitted");
/// assert_eq!(predictions, vec![0, 0, 1, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct BinnedNB {
    /// Number of classes the model scores
    num_classes: usize,
    /// Number of equal-width intensity bins
    num_bins: usize,
    /// Class prior probabilities P(y=c)
    priors: Option<Vec<f64>>,
    /// Conditional bin mass: (class, feature, bin)
    mass: Option<Tensor3<f64>>,
}

impl BinnedNB {
    /// Creates a new binned Naive Bayes classifier with 10 classes and
    /// 32 bins.
    #[must_use]
    pub fn new() -> Self {
        Self {
            num_classes: 10,
            num_bins: 32,
            priors: None,
            mass: None,
        }
    }

    /// Sets the number of classes.
    #[must_use]
    pub fn with_num_classes(mut self, num_classes: usize) -> Self {
        self.num_classes = num_classes;
        self
    }

    /// Sets the number of intensity bins.
    ///
    /// # Example
    ///
    /// ```
    /// use clasificar::classification::BinnedNB;
    ///
    /// let model = BinnedNB::new().with_num_bins(16);
    /// ```
    #[must_use]
    pub fn with_num_bins(mut self, num_bins: usize) -> Self {
        self.num_bins = num_bins;
        self
    }

    /// Returns the fitted class priors, or `None` before fit.
    #[must_use]
    pub fn priors(&self) -> Option<&[f64]> {
        self.priors.as_deref()
    }

    /// Returns the fitted conditional mass table with shape
    /// (classes, features, bins), or `None` before fit.
    #[must_use]
    pub fn mass(&self) -> Option<&Tensor3<f64>> {
        self.mass.as_ref()
    }

    /// Maps a pixel intensity to its bin, clamped so intensity 255
    /// stays in range when 256 doesn't divide evenly by `num_bins`.
    fn bin_index(&self, pixel: u8) -> usize {
        let width = 256.0 / self.num_bins as f64;
        ((f64::from(pixel) / width) as usize).min(self.num_bins - 1)
    }

    fn check_hyperparameters(&self) -> Result<()> {
        if self.num_classes < 2 {
            return Err(ClasificarError::InvalidHyperparameter {
                param: "num_classes".to_string(),
                value: self.num_classes.to_string(),
                constraint: ">= 2".to_string(),
            });
        }
        if self.num_bins < 1 || self.num_bins > 256 {
            return Err(ClasificarError::InvalidHyperparameter {
                param: "num_bins".to_string(),
                value: self.num_bins.to_string(),
                constraint: "1..=256".to_string(),
            });
        }
        Ok(())
    }
}

impl Classifier for BinnedNB {
    /// Trains the binned classifier.
    ///
    /// Counts bin occupancy per (class, feature), floors empty bins at
    /// epsilon, then normalizes each (class, feature) distribution so
    /// its bins sum to 1.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `num_classes` or `num_bins` is out of range
    /// - The training set is empty
    /// - Sample count mismatch between X and y
    /// - A label is >= `num_classes`
    fn fit(&mut self, x: &Matrix<u8>, y: &[usize]) -> Result<()> {
        self.check_hyperparameters()?;
        check_training_data(x, y, self.num_classes)?;
        let (n_samples, n_features) = x.shape();

        let mut priors = vec![0.0f64; self.num_classes];
        for &label in y {
            priors[label] += 1.0;
        }
        for prior in &mut priors {
            *prior /= n_samples as f64;
        }

        let mut mass = Tensor3::<f64>::zeros(self.num_classes, n_features, self.num_bins);
        for (i, &label) in y.iter().enumerate() {
            for (d, &pixel) in x.row(i).iter().enumerate() {
                let bin = self.bin_index(pixel);
                mass.row_mut(label, d)[bin] += 1.0;
            }
        }

        // Floor empty bins first, then normalize each distribution once.
        for c in 0..self.num_classes {
            for d in 0..n_features {
                let bins = mass.row_mut(c, d);
                for count in bins.iter_mut() {
                    if *count == 0.0 {
                        *count = SMOOTHING_FLOOR;
                    }
                }
                let total: f64 = bins.iter().sum();
                for count in bins.iter_mut() {
                    *count /= total;
                }
            }
        }

        self.priors = Some(priors);
        self.mass = Some(mass);
        Ok(())
    }

    /// Scores each class as `ln P(class) + sum ln P(bin(pixel) | class)`.
    ///
    /// A class with zero prior scores `-inf` and is never predicted.
    ///
    /// # Errors
    ///
    /// Returns error if model is not fitted or the sample width doesn't
    /// match the training data.
    fn log_posterior(&self, sample: &[u8]) -> Result<Vec<f64>> {
        let priors = self.priors.as_ref().ok_or("Model not fitted")?;
        let mass = self.mass.as_ref().ok_or("Model not fitted")?;
        let (_, n_features, _) = mass.shape();
        if sample.len() != n_features {
            return Err(ClasificarError::dimension_mismatch(
                "n_features",
                n_features,
                sample.len(),
            ));
        }

        let mut scores = Vec::with_capacity(self.num_classes);
        for (c, &prior) in priors.iter().enumerate() {
            let mut score = prior.ln();
            for (d, &pixel) in sample.iter().enumerate() {
                score += mass.get(c, d, self.bin_index(pixel)).ln();
            }
            scores.push(score);
        }
        Ok(scores)
    }

    fn num_classes(&self) -> usize {
        self.num_classes
    }
}

impl Default for BinnedNB {
    fn default() -> Self {
        Self::new()
    }
}

/// Gaussian Naive Bayes classifier.
///
/// Models each pixel as a Gaussian within its class, parameterized by
/// the per-class, per-feature mean and population variance. Features
/// with degenerate variance (constant pixels, e.g. image corners that
/// are always 0) contribute a fixed floor density instead of a spike.
///
/// # Example
///
/// ```
/// use clasificar::classification::GaussianNB;
/// use clasificar::primitives::Matrix;
/// use clasificar::traits::Classifier;
///
/// let x = Matrix::from_vec(6, 1, vec![8u8, 10, 12, 98, 100, 102]).expect("6x1 matrix");
/// let y = vec![0, 0, 0, 1, 1, 1];
///
/// let mut model = GaussianNB::new().with_num_classes(2);
/// model.fit(&x, &y).expect("Valid training data");
/// let predictions = model.predict(&x).expect("Model is fitted");
/// assert_eq!(predictions, vec![0, 0, 0, 1, 1, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct GaussianNB {
    /// Number of classes the model scores
    num_classes: usize,
    /// Class prior probabilities P(y=c)
    priors: Option<Vec<f64>>,
    /// Feature means: (class, feature)
    means: Option<Matrix<f64>>,
    /// Feature population variances: (class, feature)
    variances: Option<Matrix<f64>>,
}

impl GaussianNB {
    /// Creates a new Gaussian Naive Bayes classifier with 10 classes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            num_classes: 10,
            priors: None,
            means: None,
            variances: None,
        }
    }

    /// Sets the number of classes.
    #[must_use]
    pub fn with_num_classes(mut self, num_classes: usize) -> Self {
        self.num_classes = num_classes;
        self
    }

    /// Returns the fitted class priors, or `None` before fit.
    #[must_use]
    pub fn priors(&self) -> Option<&[f64]> {
        self.priors.as_deref()
    }

    /// Returns the fitted per-class feature means, or `None` before fit.
    #[must_use]
    pub fn means(&self) -> Option<&Matrix<f64>> {
        self.means.as_ref()
    }

    /// Returns the fitted per-class feature variances, or `None` before fit.
    #[must_use]
    pub fn variances(&self) -> Option<&Matrix<f64>> {
        self.variances.as_ref()
    }

    /// Gaussian density of `x` under N(mean, variance), with a fixed
    /// floor when the variance is degenerate.
    fn density(x: f64, mean: f64, variance: f64) -> f64 {
        if variance < VARIANCE_FLOOR {
            return DENSITY_FLOOR;
        }
        let coefficient = 1.0 / (2.0 * PI * variance).sqrt();
        coefficient * (-(x - mean).powi(2) / (2.0 * variance)).exp()
    }
}

impl Classifier for GaussianNB {
    /// Trains the Gaussian classifier.
    ///
    /// Accumulates per-class count, pixel sum, and squared pixel sum in
    /// a single pass over the training set, then derives the mean and
    /// population variance per (class, feature).
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `num_classes` is out of range
    /// - The training set is empty
    /// - Sample count mismatch between X and y
    /// - A label is >= `num_classes`
    fn fit(&mut self, x: &Matrix<u8>, y: &[usize]) -> Result<()> {
        if self.num_classes < 2 {
            return Err(ClasificarError::InvalidHyperparameter {
                param: "num_classes".to_string(),
                value: self.num_classes.to_string(),
                constraint: ">= 2".to_string(),
            });
        }
        check_training_data(x, y, self.num_classes)?;
        let (n_samples, n_features) = x.shape();

        let mut counts = vec![0.0f64; self.num_classes];
        let mut sums = Matrix::<f64>::zeros(self.num_classes, n_features);
        let mut sq_sums = Matrix::<f64>::zeros(self.num_classes, n_features);

        for (i, &label) in y.iter().enumerate() {
            counts[label] += 1.0;
            for (d, &pixel) in x.row(i).iter().enumerate() {
                let value = f64::from(pixel);
                sums.set(label, d, sums.get(label, d) + value);
                sq_sums.set(label, d, sq_sums.get(label, d) + value * value);
            }
        }

        let mut priors = vec![0.0f64; self.num_classes];
        let mut means = Matrix::<f64>::zeros(self.num_classes, n_features);
        let mut variances = Matrix::<f64>::zeros(self.num_classes, n_features);
        for c in 0..self.num_classes {
            priors[c] = counts[c] / n_samples as f64;
            if counts[c] == 0.0 {
                // Absent class: zero prior already rules it out.
                continue;
            }
            for d in 0..n_features {
                let mean = sums.get(c, d) / counts[c];
                // E[x^2] - E[x]^2 can dip below zero on constant features.
                let variance = (sq_sums.get(c, d) / counts[c] - mean * mean).max(0.0);
                means.set(c, d, mean);
                variances.set(c, d, variance);
            }
        }

        self.priors = Some(priors);
        self.means = Some(means);
        self.variances = Some(variances);
        Ok(())
    }

    /// Scores each class as `ln P(class) + sum ln density(pixel)`.
    ///
    /// Densities are computed before taking the log, so a pixel far out
    /// in a Gaussian tail underflows to zero density and the class
    /// scores `-inf`.
    ///
    /// # Errors
    ///
    /// Returns error if model is not fitted or the sample width doesn't
    /// match the training data.
    fn log_posterior(&self, sample: &[u8]) -> Result<Vec<f64>> {
        let priors = self.priors.as_ref().ok_or("Model not fitted")?;
        let means = self.means.as_ref().ok_or("Model not fitted")?;
        let variances = self.variances.as_ref().ok_or("Model not fitted")?;
        let n_features = means.n_cols();
        if sample.len() != n_features {
            return Err(ClasificarError::dimension_mismatch(
                "n_features",
                n_features,
                sample.len(),
            ));
        }

        let mut scores = Vec::with_capacity(self.num_classes);
        for (c, &prior) in priors.iter().enumerate() {
            let mut score = prior.ln();
            for (d, &pixel) in sample.iter().enumerate() {
                let density = Self::density(f64::from(pixel), means.get(c, d), variances.get(c, d));
                score += density.ln();
            }
            scores.push(score);
        }
        Ok(scores)
    }

    fn num_classes(&self) -> usize {
        self.num_classes
    }
}

impl Default for GaussianNB {
    fn default() -> Self {
        Self::new()
    }
}
