//! MNIST-style dataset loading.
//!
//! Reads the classic IDX binary files (big-endian headers, one byte per
//! pixel or label) into the matrix types the classifiers train on. The
//! four files of a standard MNIST layout are expected uncompressed in a
//! single directory.

use std::fs;
use std::path::Path;

use crate::error::{ClasificarError, Result};
use crate::primitives::Matrix;

/// IDX magic for unsigned-byte image files (3 dimensions).
const IMAGE_MAGIC: u32 = 0x0000_0803;

/// IDX magic for unsigned-byte label files (1 dimension).
const LABEL_MAGIC: u32 = 0x0000_0801;

const TRAIN_IMAGES: &str = "train-images-idx3-ubyte";
const TRAIN_LABELS: &str = "train-labels-idx1-ubyte";
const TEST_IMAGES: &str = "t10k-images-idx3-ubyte";
const TEST_LABELS: &str = "t10k-labels-idx1-ubyte";

/// A set of images with one label per image.
///
/// Images are stored flattened, one per matrix row, so a 28x28 digit
/// becomes a 784-column row of raw intensities.
#[derive(Debug, Clone)]
pub struct LabeledImages {
    images: Matrix<u8>,
    labels: Vec<usize>,
}

impl LabeledImages {
    /// Pairs an image matrix with its labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the label count doesn't match the image count.
    pub fn new(images: Matrix<u8>, labels: Vec<usize>) -> Result<Self> {
        if labels.len() != images.n_rows() {
            return Err(ClasificarError::DimensionMismatch {
                expected: format!("{} labels", images.n_rows()),
                actual: format!("{}", labels.len()),
            });
        }
        Ok(Self { images, labels })
    }

    /// Returns the image matrix (one sample per row).
    #[must_use]
    pub fn images(&self) -> &Matrix<u8> {
        &self.images
    }

    /// Returns the label of each image.
    #[must_use]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Returns the number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.n_rows()
    }

    /// Returns true if the set holds no images.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of pixels per image.
    #[must_use]
    pub fn num_features(&self) -> usize {
        self.images.n_cols()
    }

    /// Checks that every label is below `num_classes`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first out-of-range label.
    pub fn validate_labels(&self, num_classes: usize) -> Result<()> {
        if let Some(&label) = self.labels.iter().find(|&&label| label >= num_classes) {
            return Err(ClasificarError::InvalidInput {
                message: format!("label {label} out of range for {num_classes} classes"),
            });
        }
        Ok(())
    }
}

/// The standard MNIST train/test split.
#[derive(Debug, Clone)]
pub struct Mnist {
    /// Training images and labels
    pub train: LabeledImages,
    /// Test images and labels
    pub test: LabeledImages,
}

impl Mnist {
    /// Loads the four standard IDX files from a directory.
    ///
    /// Expects `train-images-idx3-ubyte`, `train-labels-idx1-ubyte`,
    /// `t10k-images-idx3-ubyte`, and `t10k-labels-idx1-ubyte`,
    /// uncompressed.
    ///
    /// # Errors
    ///
    /// Returns an error if a file is missing, unreadable, malformed, or
    /// if image and label counts disagree.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let train = LabeledImages::new(
            parse_idx_images(&read_file(dir, TRAIN_IMAGES)?)?,
            parse_idx_labels(&read_file(dir, TRAIN_LABELS)?)?,
        )?;
        let test = LabeledImages::new(
            parse_idx_images(&read_file(dir, TEST_IMAGES)?)?,
            parse_idx_labels(&read_file(dir, TEST_LABELS)?)?,
        )?;
        Ok(Self { train, test })
    }
}

fn read_file(dir: &Path, name: &str) -> Result<Vec<u8>> {
    let path = dir.join(name);
    fs::read(&path).map_err(|e| {
        ClasificarError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {e}", path.display()),
        ))
    })
}

fn read_u32(bytes: &[u8], offset: usize) -> Result<u32> {
    let slice = bytes
        .get(offset..offset + 4)
        .ok_or_else(|| ClasificarError::format("truncated IDX header"))?;
    Ok(u32::from_be_bytes([slice[0], slice[1], slice[2], slice[3]]))
}

/// Parses an IDX image file into a flattened image matrix.
///
/// The header is four big-endian u32 values: magic `0x00000803`, image
/// count, row count, column count. The payload is one byte per pixel in
/// row-major order.
///
/// # Errors
///
/// Returns an error on a wrong magic number, truncated header, or a
/// payload whose length doesn't match the header.
pub fn parse_idx_images(bytes: &[u8]) -> Result<Matrix<u8>> {
    let magic = read_u32(bytes, 0)?;
    if magic != IMAGE_MAGIC {
        return Err(ClasificarError::Format {
            message: format!("expected image magic 0x{IMAGE_MAGIC:08X}, found 0x{magic:08X}"),
        });
    }
    let count = read_u32(bytes, 4)? as usize;
    let rows = read_u32(bytes, 8)? as usize;
    let cols = read_u32(bytes, 12)? as usize;
    let n_features = rows
        .checked_mul(cols)
        .ok_or_else(|| ClasificarError::format("image dimensions overflow"))?;
    let expected = count
        .checked_mul(n_features)
        .ok_or_else(|| ClasificarError::format("image dimensions overflow"))?;

    let payload = &bytes[16..];
    if payload.len() != expected {
        return Err(ClasificarError::Format {
            message: format!(
                "expected {expected} pixel bytes for {count} images of {rows}x{cols}, found {}",
                payload.len()
            ),
        });
    }
    Ok(Matrix::from_vec(count, n_features, payload.to_vec())?)
}

/// Parses an IDX label file into a label vector.
///
/// The header is two big-endian u32 values: magic `0x00000801` and
/// label count. The payload is one byte per label.
///
/// # Errors
///
/// Returns an error on a wrong magic number, truncated header, or a
/// payload whose length doesn't match the header.
pub fn parse_idx_labels(bytes: &[u8]) -> Result<Vec<usize>> {
    let magic = read_u32(bytes, 0)?;
    if magic != LABEL_MAGIC {
        return Err(ClasificarError::Format {
            message: format!("expected label magic 0x{LABEL_MAGIC:08X}, found 0x{magic:08X}"),
        });
    }
    let count = read_u32(bytes, 4)? as usize;
    let payload = &bytes[8..];
    if payload.len() != count {
        return Err(ClasificarError::Format {
            message: format!("expected {count} label bytes, found {}", payload.len()),
        });
    }
    Ok(payload.iter().map(|&label| label as usize).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx_images(count: u32, rows: u32, cols: u32, pixels: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&IMAGE_MAGIC.to_be_bytes());
        bytes.extend_from_slice(&count.to_be_bytes());
        bytes.extend_from_slice(&rows.to_be_bytes());
        bytes.extend_from_slice(&cols.to_be_bytes());
        bytes.extend_from_slice(pixels);
        bytes
    }

    fn idx_labels(count: u32, labels: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&LABEL_MAGIC.to_be_bytes());
        bytes.extend_from_slice(&count.to_be_bytes());
        bytes.extend_from_slice(labels);
        bytes
    }

    #[test]
    fn test_parse_idx_images() {
        let bytes = idx_images(2, 2, 2, &[1, 2, 3, 4, 5, 6, 7, 8]);
        let images = parse_idx_images(&bytes).expect("well-formed IDX data");
        assert_eq!(images.shape(), (2, 4));
        assert_eq!(images.row(0), &[1, 2, 3, 4]);
        assert_eq!(images.row(1), &[5, 6, 7, 8]);
    }

    #[test]
    fn test_parse_idx_images_bad_magic() {
        let mut bytes = idx_images(1, 1, 1, &[9]);
        bytes[3] = 0x01;
        let result = parse_idx_images(&bytes);
        assert!(matches!(result, Err(ClasificarError::Format { .. })));
        assert!(result.unwrap_err().to_string().contains("magic"));
    }

    #[test]
    fn test_parse_idx_images_truncated_header() {
        let result = parse_idx_images(&[0x00, 0x00, 0x08]);
        assert!(matches!(result, Err(ClasificarError::Format { .. })));
        assert!(result.unwrap_err().to_string().contains("truncated"));
    }

    #[test]
    fn test_parse_idx_images_short_payload() {
        let bytes = idx_images(2, 2, 2, &[1, 2, 3]);
        let result = parse_idx_images(&bytes);
        assert!(matches!(result, Err(ClasificarError::Format { .. })));
    }

    #[test]
    fn test_parse_idx_images_trailing_bytes() {
        let bytes = idx_images(1, 1, 1, &[9, 10]);
        assert!(parse_idx_images(&bytes).is_err());
    }

    #[test]
    fn test_parse_idx_labels() {
        let bytes = idx_labels(3, &[7, 0, 4]);
        let labels = parse_idx_labels(&bytes).expect("well-formed IDX data");
        assert_eq!(labels, vec![7, 0, 4]);
    }

    #[test]
    fn test_parse_idx_labels_bad_magic() {
        let mut bytes = idx_labels(1, &[0]);
        bytes[3] = 0x03;
        let result = parse_idx_labels(&bytes);
        assert!(matches!(result, Err(ClasificarError::Format { .. })));
    }

    #[test]
    fn test_parse_idx_labels_count_mismatch() {
        let bytes = idx_labels(5, &[0, 1]);
        assert!(parse_idx_labels(&bytes).is_err());
    }

    #[test]
    fn test_labeled_images_count_mismatch() {
        let images = Matrix::from_vec(2, 2, vec![0u8; 4]).expect("2x2 matrix");
        let result = LabeledImages::new(images, vec![0]);
        assert!(matches!(
            result,
            Err(ClasificarError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_labeled_images_accessors() {
        let images = Matrix::from_vec(2, 3, vec![0u8; 6]).expect("2x3 matrix");
        let set = LabeledImages::new(images, vec![1, 0]).expect("matching counts");
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.num_features(), 3);
        assert_eq!(set.labels(), &[1, 0]);
    }

    #[test]
    fn test_validate_labels() {
        let images = Matrix::from_vec(3, 1, vec![0u8; 3]).expect("3x1 matrix");
        let set = LabeledImages::new(images, vec![0, 1, 9]).expect("matching counts");
        assert!(set.validate_labels(10).is_ok());
        let result = set.validate_labels(5);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("label 9"));
    }

    #[test]
    fn test_load_dir() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let train_pixels: Vec<u8> = (0..16).collect();
        std::fs::write(
            dir.path().join(TRAIN_IMAGES),
            idx_images(4, 2, 2, &train_pixels),
        )
        .expect("write train images");
        std::fs::write(dir.path().join(TRAIN_LABELS), idx_labels(4, &[0, 1, 0, 1]))
            .expect("write train labels");
        std::fs::write(dir.path().join(TEST_IMAGES), idx_images(2, 2, 2, &[0; 8]))
            .expect("write test images");
        std::fs::write(dir.path().join(TEST_LABELS), idx_labels(2, &[1, 0]))
            .expect("write test labels");

        let mnist = Mnist::load_dir(dir.path()).expect("load should succeed");
        assert_eq!(mnist.train.len(), 4);
        assert_eq!(mnist.train.num_features(), 4);
        assert_eq!(mnist.train.labels(), &[0, 1, 0, 1]);
        assert_eq!(mnist.test.len(), 2);
        assert_eq!(mnist.test.images().row(0), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_load_dir_missing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let result = Mnist::load_dir(dir.path());
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains(TRAIN_IMAGES), "got: {message}");
    }

    #[test]
    fn test_load_dir_count_mismatch() {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join(TRAIN_IMAGES), idx_images(2, 1, 1, &[0, 0]))
            .expect("write train images");
        std::fs::write(dir.path().join(TRAIN_LABELS), idx_labels(3, &[0, 1, 0]))
            .expect("write train labels");
        std::fs::write(dir.path().join(TEST_IMAGES), idx_images(1, 1, 1, &[0]))
            .expect("write test images");
        std::fs::write(dir.path().join(TEST_LABELS), idx_labels(1, &[0]))
            .expect("write test labels");

        let result = Mnist::load_dir(dir.path());
        assert!(matches!(
            result,
            Err(ClasificarError::DimensionMismatch { .. })
        ));
    }
}
