//! Synthetic image generation for demos and tests.
//!
//! Generates labeled image sets where each class clusters around its
//! own base intensity, so the Naive Bayes models have clean structure
//! to learn without shipping real MNIST files.

use crate::dataset::LabeledImages;
use crate::primitives::Matrix;

/// Generates `n_per_class` images per class around per-class intensity
/// centers.
///
/// Every pixel of a class-`c` image is `centers[c]` plus uniform noise
/// in `[-spread, +spread]`, clamped to the valid 0..=255 range. The
/// same seed always produces the same set.
///
/// # Examples
///
/// ```
/// use clasificar::synthetic::clustered_images;
///
/// let data = clustered_images(5, 16, &[30, 220], 10, 42);
/// assert_eq!(data.len(), 10);
/// assert_eq!(data.num_features(), 16);
/// assert_eq!(data.labels()[0], 0);
/// assert_eq!(data.labels()[9], 1);
/// ```
#[must_use]
pub fn clustered_images(
    n_per_class: usize,
    n_features: usize,
    centers: &[u8],
    spread: u8,
    seed: u64,
) -> LabeledImages {
    use rand::Rng;
    use rand::SeedableRng;

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let n_samples = n_per_class * centers.len();
    let mut pixels = Vec::with_capacity(n_samples * n_features);
    let mut labels = Vec::with_capacity(n_samples);
    let spread = i16::from(spread);

    for (class, &center) in centers.iter().enumerate() {
        for _ in 0..n_per_class {
            labels.push(class);
            for _ in 0..n_features {
                let jitter = rng.gen_range(-spread..=spread);
                let value = (i16::from(center) + jitter).clamp(0, 255);
                pixels.push(value as u8);
            }
        }
    }

    let images = Matrix::from_vec(n_samples, n_features, pixels)
        .expect("pixel count matches samples * features by construction");
    LabeledImages::new(images, labels).expect("one label per generated image")
}

/// Returns `num_classes` intensity centers spread evenly over 0..=255.
///
/// # Examples
///
/// ```
/// use clasificar::synthetic::evenly_spaced_centers;
///
/// assert_eq!(evenly_spaced_centers(2), vec![0, 255]);
/// assert_eq!(evenly_spaced_centers(10).len(), 10);
/// ```
#[must_use]
pub fn evenly_spaced_centers(num_classes: usize) -> Vec<u8> {
    if num_classes <= 1 {
        return vec![128; num_classes];
    }
    (0..num_classes)
        .map(|c| ((c * 255) / (num_classes - 1)) as u8)
        .collect()
}
