//! Ditherer builder -- the primary ergonomic entry point for the crate.
//!
//! [`Ditherer`] wraps the pipeline (normalize, pad, diffuse, crop) behind a
//! small fluent configuration. [`dither`] is the string-keyed shortcut for
//! callers that receive the method name from outside.

use crate::dither::{diffuse, Method};
use crate::matrix::Matrix;
use crate::output::DitheredImage;
use crate::preprocess::{crop, normalize, pad, DegeneratePolicy};

use super::DitherError;

/// High-level dithering builder.
///
/// # Design
///
/// - Configuration methods consume and return `self`
/// - [`dither()`](Self::dither) takes `&self`, so one builder serves many images
/// - The input matrix is moved into the pipeline and its buffer reused for
///   normalization; padding and cropping allocate the other two buffers
///
/// # Example
///
/// ```
/// use mono_dither::{DegeneratePolicy, Ditherer, Matrix, Method};
///
/// let ditherer = Ditherer::new()
///     .method(Method::JarvisJudiceNinke)
///     .degenerate(DegeneratePolicy::Reject);
///
/// let ramp = Matrix::from_rows(vec![(0u8..8).map(f64::from).collect()]).unwrap();
/// let result = ditherer.dither(ramp).unwrap();
///
/// assert_eq!(result.cols(), 8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ditherer {
    method: Method,
    degenerate: DegeneratePolicy,
}

impl Ditherer {
    /// Create a ditherer with Floyd-Steinberg and the black degenerate policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dithering method.
    #[inline]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set how constant images are handled.
    #[inline]
    pub fn degenerate(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate = policy;
        self
    }

    /// Configured method.
    pub fn selected_method(&self) -> Method {
        self.method
    }

    /// Configured degenerate-input policy.
    pub fn degenerate_policy(&self) -> DegeneratePolicy {
        self.degenerate
    }

    /// Dither a grayscale matrix of any numeric range to black and white.
    ///
    /// The result has the same shape as `image` and every sample is exactly
    /// `0.0` or `1.0`. On error nothing is returned.
    pub fn dither(&self, image: Matrix) -> Result<DitheredImage, DitherError> {
        let kernel = self.method.kernel();
        let (rows, cols) = image.shape();
        tracing::debug!(method = %self.method, rows, cols, "Dithering image");

        let normalized = normalize(image, self.degenerate)?;
        let mut padded = pad(&normalized, kernel.radius);
        diffuse(&mut padded, kernel)?;
        let out = crop(&padded, kernel.radius);

        let result = DitheredImage::new(out, self.method);
        tracing::trace!(white = result.white_count(), total = rows * cols, "Dither complete");
        Ok(result)
    }
}

/// Dither `image` with the method named `method`.
///
/// The name is resolved before the image is touched, so an unknown method
/// fails with [`DitherError::UnknownMethod`] and no work is done.
///
/// # Example
///
/// ```
/// use mono_dither::{dither, DitherError, Matrix};
///
/// let image = Matrix::from_rows(vec![vec![0.0, 64.0], vec![128.0, 255.0]]).unwrap();
/// let out = dither(image.clone(), "floyd-steinberg").unwrap();
/// assert_eq!(out.to_rows(), vec![vec![0.0, 0.0], vec![1.0, 1.0]]);
///
/// assert!(matches!(dither(image, "bayer"), Err(DitherError::UnknownMethod(_))));
/// ```
pub fn dither(image: Matrix, method: &str) -> Result<Matrix, DitherError> {
    let method: Method = method.parse()?;
    Ditherer::new()
        .method(method)
        .dither(image)
        .map(DitheredImage::into_matrix)
}
