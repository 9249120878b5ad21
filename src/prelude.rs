//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use clasificar::prelude::*;
//! ```

pub use crate::classification::{BinnedNB, GaussianNB};
pub use crate::dataset::{LabeledImages, Mnist};
pub use crate::error::{ClasificarError, Result};
pub use crate::metrics::{accuracy, confusion_matrix, error_rate, evaluate, Evaluation};
pub use crate::primitives::{Matrix, Tensor3};
pub use crate::traits::Classifier;
