//! Clasificar: Naive Bayes image classification in pure Rust.
//!
//! Clasificar trains and evaluates two Naive Bayes variants over
//! MNIST-style 8-bit images: a binned (discrete) model that histograms
//! pixel intensities, and a Gaussian model that fits per-pixel normal
//! distributions. Both score classes by log-posterior and predict by
//! argmax.
//!
//! # Quick Start
//!
//! ```
//! use clasificar::prelude::*;
//! use clasificar::synthetic::clustered_images;
//!
//! // Two intensity clusters: dark images are class 0, bright class 1.
//! let train = clustered_images(30, 16, &[40, 200], 20, 42);
//! let test = clustered_images(10, 16, &[40, 200], 20, 43);
//!
//! // Train the binned model
//! let mut model = BinnedNB::new().with_num_classes(2).with_num_bins(32);
//! model.fit(train.images(), train.labels()).unwrap();
//!
//! // Evaluate on held-out images
//! let eval = evaluate(&model, test.images(), test.labels(), 20).unwrap();
//! assert!(eval.error_rate < 0.2);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Matrix and Tensor3 types
//! - [`traits`]: The [`Classifier`] fit/predict contract
//! - [`classification`]: Binned and Gaussian Naive Bayes models
//! - [`metrics`]: Accuracy, error rate, confusion matrix, evaluation driver
//! - [`dataset`]: MNIST IDX file loading
//! - [`synthetic`]: Clustered image generation for demos and tests

pub mod classification;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod prelude;
pub mod primitives;
pub mod synthetic;
pub mod traits;

pub use error::{ClasificarError, Result};
pub use primitives::{Matrix, Tensor3};
pub use traits::Classifier;
