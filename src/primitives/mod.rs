//! Core data primitives (Matrix, Tensor3).
//!
//! These types provide the dense storage that the classifiers train on:
//! row-major matrices for image data and model parameters, and a
//! three-axis tensor for per-class, per-feature bin distributions.

mod matrix;
mod tensor3;

pub use matrix::Matrix;
pub use tensor3::Tensor3;
