//! Three-axis tensor for binned probability tables.

use serde::{Deserialize, Serialize};

/// A dense 3D tensor (row-major storage, innermost axis contiguous).
///
/// The binned classifier stores its conditional mass table as a
/// `Tensor3<f64>` with shape (classes, features, bins), so the bin
/// distribution for one (class, feature) pair is a contiguous slice.
///
/// # Examples
///
/// ```
/// use clasificar::primitives::Tensor3;
///
/// let mut t = Tensor3::<f64>::zeros(2, 3, 4);
/// t.set(1, 2, 3, 0.25);
/// assert_eq!(t.shape(), (2, 3, 4));
/// assert!((t.get(1, 2, 3) - 0.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tensor3<T> {
    data: Vec<T>,
    dim0: usize,
    dim1: usize,
    dim2: usize,
}

impl<T: Copy> Tensor3<T> {
    /// Creates a new tensor from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match dim0 * dim1 * dim2.
    pub fn from_vec(
        dim0: usize,
        dim1: usize,
        dim2: usize,
        data: Vec<T>,
    ) -> Result<Self, &'static str> {
        if data.len() != dim0 * dim1 * dim2 {
            return Err("Data length must equal dim0 * dim1 * dim2");
        }
        Ok(Self {
            data,
            dim0,
            dim1,
            dim2,
        })
    }

    /// Returns the shape as (dim0, dim1, dim2).
    #[must_use]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.dim0, self.dim1, self.dim2)
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(i < self.dim0 && j < self.dim1, "index out of bounds");
        (i * self.dim1 + j) * self.dim2
    }

    /// Gets element at (i, j, k).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize, k: usize) -> T {
        assert!(k < self.dim2, "index out of bounds");
        self.data[self.offset(i, j) + k]
    }

    /// Sets element at (i, j, k).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: T) {
        assert!(k < self.dim2, "index out of bounds");
        let idx = self.offset(i, j) + k;
        self.data[idx] = value;
    }

    /// Returns the innermost row at (i, j) as a slice.
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn row(&self, i: usize, j: usize) -> &[T] {
        let start = self.offset(i, j);
        &self.data[start..start + self.dim2]
    }

    /// Returns the innermost row at (i, j) as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn row_mut(&mut self, i: usize, j: usize) -> &mut [T] {
        let start = self.offset(i, j);
        &mut self.data[start..start + self.dim2]
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Copy + Default> Tensor3<T> {
    /// Creates a tensor filled with the default value (zero for numeric types).
    #[must_use]
    pub fn zeros(dim0: usize, dim1: usize, dim2: usize) -> Self {
        Self {
            data: vec![T::default(); dim0 * dim1 * dim2],
            dim0,
            dim1,
            dim2,
        }
    }
}

#[cfg(test)]
#[path = "tensor3_tests.rs"]
mod tests;
