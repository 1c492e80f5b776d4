//! Error diffusion kernel definitions.
//!
//! This module defines the diffusion kernels for the registered methods.
//! Each kernel specifies how quantization error is distributed to
//! neighboring pixels that the raster scan has not reached yet.

use crate::api::DitherError;

use super::Method;

/// An error diffusion kernel.
///
/// Each entry specifies an offset `(drow, dcol)` and a weight numerator. A
/// neighbor receives `error * weight / divisor`.
///
/// # Causality
///
/// Every offset points to a cell later in raster order: either a row below
/// (`drow > 0`), or the same row to the right (`drow == 0 && dcol > 0`).
///
/// # Padding
///
/// `radius` is `max(|drow|, |dcol|)` over all entries and is the width of
/// the border band the scan needs so that no write falls outside the
/// padded matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    /// (drow, dcol, weight) entries for error diffusion.
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,

    /// Padding width required by this kernel.
    pub radius: usize,
}

impl Kernel {
    /// Iterate over `(drow, dcol, weight)` with the weight as a fraction.
    pub fn weights(&self) -> impl Iterator<Item = (i32, i32, f64)> + '_ {
        let divisor = f64::from(self.divisor);
        self.entries
            .iter()
            .map(move |&(dr, dc, w)| (dr, dc, f64::from(w) / divisor))
    }

    /// Whether every offset points to a not-yet-visited cell.
    pub fn is_causal(&self) -> bool {
        self.entries
            .iter()
            .all(|&(dr, dc, _)| dr > 0 || (dr == 0 && dc > 0))
    }
}

/// Simple two-neighbor kernel.
///
/// ```text
///    X   1
///    1
/// ```
pub const SIMPLE_2D: Kernel = Kernel {
    entries: &[
        (0, 1, 1), // right
        (1, 0, 1), // bottom
    ],
    divisor: 2,
    radius: 1,
};

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (0, 1, 7),  // right
        (1, -1, 3), // bottom-left
        (1, 0, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
    radius: 1,
};

/// Jarvis-Judice-Ninke dithering kernel.
///
/// Distributes error to 12 neighbors over 3 rows with 100% propagation (48/48).
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
pub const JARVIS_JUDICE_NINKE: Kernel = Kernel {
    entries: &[
        (0, 1, 7),
        (0, 2, 5),
        (1, -2, 3),
        (1, -1, 5),
        (1, 0, 7),
        (1, 1, 5),
        (1, 2, 3),
        (2, -2, 1),
        (2, -1, 3),
        (2, 0, 5),
        (2, 1, 3),
        (2, 2, 1),
    ],
    divisor: 48,
    radius: 2,
};

/// Look up a kernel by method identifier.
///
/// Names are matched exactly (`"simple2D"`, `"floyd-steinberg"`,
/// `"jarvis-judice-ninke"`).
///
/// # Example
///
/// ```
/// use mono_dither::{lookup, DitherError, FLOYD_STEINBERG};
///
/// assert_eq!(lookup("floyd-steinberg").unwrap(), &FLOYD_STEINBERG);
/// assert!(matches!(lookup("sierra"), Err(DitherError::UnknownMethod(_))));
/// ```
pub fn lookup(method: &str) -> Result<&'static Kernel, DitherError> {
    method.parse::<Method>().map(Method::kernel)
}
